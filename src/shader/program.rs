use std::borrow::Cow;

use uuid::Uuid;

use crate::graph::CompiledGraph;

/// Handle to a shader program created from a compiled node graph.
///
/// Pure data: the sources and the uniform-name list the host backend needs
/// to instantiate its pipeline object. Created once per material when the
/// graph build completes, dropped on dispose.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    pub uuid: Uuid,
    pub name: Cow<'static, str>,
    pub vertex_source: String,
    pub fragment_source: String,
    pub uniform_names: Vec<String>,
}

impl ShaderProgram {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, graph: CompiledGraph) -> Self {
        let uniform_names = graph.uniform_names();
        log::debug!("creating shader program from graph '{}'", graph.name);
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            vertex_source: graph.vertex_source,
            fragment_source: graph.fragment_source,
            uniform_names,
        }
    }
}
