use std::borrow::Cow;

use uuid::Uuid;

use crate::errors::{NornError, Result};
use crate::graph::CompiledGraph;
use crate::material::binding::{BindingTable, UniformValue};
use crate::material::dispatch::{self, ScratchMatrices};
use crate::scene::object::RenderObject;
use crate::scene::scene::Scene;
use crate::shader::interface::UniformInterface;
use crate::shader::program::ShaderProgram;

/// Lifecycle of a [`NodeMaterial`].
///
/// `Unbuilt → Ready` happens exactly once, when the graph compiler delivers
/// its output. `Ready → Disposed` (or `Unbuilt → Disposed`) is terminal; a
/// disposed material never rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialState {
    Unbuilt,
    Ready,
    Disposed,
}

/// The runtime half of a node-graph material.
///
/// A graph is compiled once, elsewhere, into shader sources plus a uniform
/// declaration list. This component replays that result frame after frame:
/// it owns the shader-program handle, the binding table built from the
/// declarations, and the scratch matrices the per-draw path writes into.
/// The host render loop calls [`NodeMaterial::bind`] once per drawn object,
/// after the program is bound and before the draw call.
pub struct NodeMaterial {
    pub uuid: Uuid,
    pub name: Cow<'static, str>,

    state: MaterialState,
    program: Option<ShaderProgram>,
    bindings: Option<BindingTable>,
    scratch: ScratchMatrices,

    shader: Box<dyn UniformInterface>,
    ready_listener: Option<Box<dyn FnOnce(&ShaderProgram)>>,
}

impl NodeMaterial {
    /// Creates the material in the `Unbuilt` state.
    ///
    /// `shader` is the backend's uniform-push channel; everything the binder
    /// resolves flows through it. The scratch matrices are allocated here,
    /// once, so the bind path never allocates.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, shader: Box<dyn UniformInterface>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            state: MaterialState::Unbuilt,
            program: None,
            bindings: None,
            scratch: ScratchMatrices::new(),
            shader,
            ready_listener: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> MaterialState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == MaterialState::Ready
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Registers the single-shot listener fired when the shader program
    /// becomes available.
    ///
    /// Registered before the build completes, it is stored and fired once by
    /// the `Unbuilt → Ready` transition. Registered while already `Ready`,
    /// it fires immediately. Registered after dispose, it is dropped without
    /// firing. Only one listener is kept; a second registration replaces a
    /// pending one.
    pub fn on_ready(&mut self, listener: impl FnOnce(&ShaderProgram) + 'static) {
        match self.state {
            MaterialState::Unbuilt => self.ready_listener = Some(Box::new(listener)),
            MaterialState::Ready => {
                if let Some(program) = &self.program {
                    listener(program);
                }
            }
            MaterialState::Disposed => {}
        }
    }

    /// Delivers the compiler's output; the `Unbuilt → Ready` transition.
    ///
    /// Builds the binding table from the declarations, creates the shader
    /// program from the sources, and fires the ready listener. Runs at most
    /// once: a signal arriving while `Ready` or `Disposed` is ignored, so a
    /// material disposed before its graph finished building does no work
    /// when the result eventually lands.
    pub fn notify_built(&mut self, graph: CompiledGraph) {
        match self.state {
            MaterialState::Unbuilt => {}
            MaterialState::Ready => {
                log::debug!("material '{}': duplicate build signal ignored", self.name);
                return;
            }
            MaterialState::Disposed => {
                log::debug!("material '{}': build completed after dispose, ignored", self.name);
                return;
            }
        }

        self.bindings = Some(BindingTable::from_declarations(&graph.uniforms));
        let program = ShaderProgram::new(self.name.clone(), graph);

        if let Some(listener) = self.ready_listener.take() {
            listener(&program);
        }

        self.program = Some(program);
        self.state = MaterialState::Ready;
        log::debug!("material '{}' ready", self.name);
    }

    /// Releases the shader program and the binding table.
    ///
    /// Valid from any state and idempotent; disposing before the build
    /// signal arrives also cancels the pending construction.
    pub fn dispose(&mut self) {
        if self.state == MaterialState::Disposed {
            return;
        }
        self.program = None;
        self.bindings = None;
        self.ready_listener = None;
        self.state = MaterialState::Disposed;
        log::debug!("material '{}' disposed", self.name);
    }

    // ========================================================================
    // Per-Draw Binding
    // ========================================================================

    /// Resolves every table entry against `object` and `scene` and pushes
    /// the results into the shader interface.
    ///
    /// Call once per drawn object, after program bind, before the draw call.
    /// A no-op unless the material is `Ready`.
    pub fn bind(&mut self, object: &RenderObject, scene: &Scene) {
        let Some(bindings) = &self.bindings else {
            return;
        };
        dispatch::bind_uniforms(bindings, object, scene, &mut self.scratch, self.shader.as_mut());
    }

    // ========================================================================
    // Table & Program Access
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn program(&self) -> Option<&ShaderProgram> {
        self.program.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn bindings(&self) -> Option<&BindingTable> {
        self.bindings.as_ref()
    }

    /// Direct access to the binding table, e.g. to replace a payload or
    /// install an entry the graph never declared. No validation is applied.
    #[inline]
    pub fn bindings_mut(&mut self) -> Option<&mut BindingTable> {
        self.bindings.as_mut()
    }

    /// Replaces the payload of a static uniform by name.
    ///
    /// # Errors
    ///
    /// [`NornError::UnknownUniform`] when no table exists yet or the name is
    /// not in it; [`NornError::SystemValueUniform`] when the entry is
    /// system-driven.
    pub fn set_value(&mut self, name: &str, value: UniformValue) -> Result<()> {
        let Some(bindings) = &mut self.bindings else {
            return Err(NornError::UnknownUniform(name.to_owned()));
        };
        bindings.set_value(name, value)
    }
}

impl std::fmt::Debug for NodeMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeMaterial")
            .field("uuid", &self.uuid)
            .field("name", &self.name)
            .field("state", &self.state)
            .field("uniforms", &self.bindings.as_ref().map_or(0, BindingTable::len))
            .finish_non_exhaustive()
    }
}
