use glam::Affine3A;
use std::borrow::Cow;

/// A drawable object as seen by the uniform binder.
///
/// Only the data the per-draw bind path reads is kept here: the world
/// transform and a visibility flag the host render loop filters on. Geometry,
/// GPU buffers, and draw submission belong to the host renderer.
#[derive(Debug, Clone)]
pub struct RenderObject {
    pub name: Cow<'static, str>,

    /// World transformation matrix, updated by the host's transform system.
    pub world_matrix: Affine3A,

    /// Visibility flag for culling
    pub visible: bool,
}

impl RenderObject {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            world_matrix: Affine3A::IDENTITY,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_world_matrix(mut self, world_matrix: Affine3A) -> Self {
        self.world_matrix = world_matrix;
        self
    }
}

impl Default for RenderObject {
    fn default() -> Self {
        Self::new("Object")
    }
}
