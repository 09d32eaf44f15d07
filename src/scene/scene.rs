use std::sync::atomic::{AtomicU32, Ordering};

use glam::{Affine3A, Mat4, Vec3};

use crate::scene::camera::Camera;
use crate::shader::interface::UniformInterface;
use crate::utils::time::Timer;

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(1);

/// Framebuffer Y-origin convention of the host graphics API.
///
/// OpenGL-style backends place the origin at the bottom-left corner; wgpu,
/// Metal and D3D place it at the top-left. Shaders that reconstruct screen
/// positions need the sign, so it is part of the per-frame camera parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YOrigin {
    #[default]
    TopLeft,
    BottomLeft,
}

impl YOrigin {
    /// Sign pushed to shaders: `-1.0` for bottom-left origins, `+1.0` otherwise.
    #[inline]
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::TopLeft => 1.0,
            Self::BottomLeft => -1.0,
        }
    }
}

/// Per-frame scene state consumed by the uniform binder.
///
/// The scene is a read-only value source during binding: view / projection /
/// combined transforms, fog color, frame delta time, the active camera and
/// the eye position are queried here once per drawn object. Scene-graph
/// traversal, lights, and GPU resources live in the host engine.
pub struct Scene {
    pub id: u32,

    /// Fog color pushed to materials that sample it.
    pub fog_color: Vec3,

    camera: Option<Camera>,
    y_origin: YOrigin,

    timer: Timer,
    delta_ms: f32,

    // 相机矩阵的快照, 每帧 update() 时从 active camera 同步
    view_matrix: Mat4,
    projection_matrix: Mat4,
    view_projection_matrix: Mat4,
    eye_position: Vec3,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),

            fog_color: Vec3::ZERO,

            camera: None,
            y_origin: YOrigin::default(),

            timer: Timer::new(),
            delta_ms: 0.0,

            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            view_projection_matrix: Mat4::IDENTITY,
            eye_position: Vec3::ZERO,
        }
    }

    // ========================================================================
    // Camera Management
    // ========================================================================

    /// Installs the active camera and syncs the matrix snapshot from it.
    pub fn set_active_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
        self.sync_camera_matrices();
    }

    /// Removes the active camera. The matrix snapshot keeps its last values.
    pub fn clear_active_camera(&mut self) {
        self.camera = None;
    }

    #[inline]
    #[must_use]
    pub fn active_camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Mutable access to the active camera. Call [`Scene::update`] (or
    /// [`Scene::set_camera_transform`]) afterwards to refresh the snapshot.
    #[inline]
    pub fn active_camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    /// Moves the active camera and refreshes the matrix snapshot.
    pub fn set_camera_transform(&mut self, world_transform: &Affine3A) {
        if let Some(camera) = &mut self.camera {
            camera.update_view_projection(world_transform);
        }
        self.sync_camera_matrices();
    }

    fn sync_camera_matrices(&mut self) {
        if let Some(camera) = &self.camera {
            self.view_matrix = camera.view_matrix;
            self.projection_matrix = camera.projection_matrix;
            self.view_projection_matrix = camera.view_projection_matrix;
            self.eye_position = camera.world_position();
        }
    }

    // ========================================================================
    // Per-Frame Update
    // ========================================================================

    /// Advances the frame clock and refreshes the camera matrix snapshot.
    /// Call once per frame, before any object is bound.
    pub fn update(&mut self) {
        self.timer.tick();
        self.delta_ms = self.timer.dt_milliseconds();
        self.sync_camera_matrices();
    }

    /// Overrides the frame delta (milliseconds). Useful for headless runs
    /// and deterministic playback where the wall clock is not the driver.
    #[inline]
    pub fn set_delta_ms(&mut self, delta_ms: f32) {
        self.delta_ms = delta_ms;
    }

    #[inline]
    #[must_use]
    pub fn delta_ms(&self) -> f32 {
        self.delta_ms
    }

    // ========================================================================
    // Matrix Snapshot Access
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// The combined view-projection transform.
    #[inline]
    #[must_use]
    pub fn view_projection_matrix(&self) -> &Mat4 {
        &self.view_projection_matrix
    }

    /// Sets the view matrix directly (headless / camera-less hosts).
    /// The combined transform is recomputed.
    pub fn set_view_matrix(&mut self, view: Mat4) {
        self.view_matrix = view;
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
    }

    /// Sets the projection matrix directly (headless / camera-less hosts).
    /// The combined transform is recomputed.
    pub fn set_projection_matrix(&mut self, projection: Mat4) {
        self.projection_matrix = projection;
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
    }

    // ========================================================================
    // Eye Position
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        self.eye_position
    }

    #[inline]
    pub fn set_eye_position(&mut self, position: Vec3) {
        self.eye_position = position;
    }

    /// Pushes the eye position into the shader interface.
    ///
    /// All eye-position uniforms go through this helper so every material
    /// agrees with the wider renderer on where the eye is, whatever
    /// convention the active backend uses.
    pub fn bind_eye_position(&self, name: &str, shader: &mut dyn UniformInterface) {
        let eye = self.eye_position;
        shader.set_float3(name, eye.x, eye.y, eye.z);
    }

    // ========================================================================
    // Backend Conventions
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn y_origin(&self) -> YOrigin {
        self.y_origin
    }

    #[inline]
    pub fn set_y_origin(&mut self, y_origin: YOrigin) {
        self.y_origin = y_origin;
    }
}
