use glam::Mat4;

use crate::material::binding::{BindingTable, SystemValue, UniformValue};
use crate::scene::object::RenderObject;
use crate::scene::scene::Scene;
use crate::shader::interface::UniformInterface;

/// Pre-allocated storage for the composite matrices that must be recomputed
/// for every drawn object.
///
/// The two products are written in place on every resolution and the same
/// storage is handed to the shader interface, so the per-draw path performs
/// no heap allocation. Nothing outside the binder may hold on to the
/// contents past the current bind call.
#[derive(Debug)]
pub(crate) struct ScratchMatrices {
    pub(crate) world_view: Mat4,
    pub(crate) world_view_projection: Mat4,
}

impl ScratchMatrices {
    pub(crate) fn new() -> Self {
        Self {
            world_view: Mat4::IDENTITY,
            world_view_projection: Mat4::IDENTITY,
        }
    }
}

/// Resolves every entry of the table against the current object / scene
/// state and pushes the results through the shader interface.
///
/// Runs once per drawn object, between program bind and the draw call. An
/// entry that cannot be resolved (no payload, no active camera for the
/// camera parameters) is skipped for this call; nothing here ever aborts
/// the loop.
pub(crate) fn bind_uniforms(
    table: &BindingTable,
    object: &RenderObject,
    scene: &Scene,
    scratch: &mut ScratchMatrices,
    shader: &mut dyn UniformInterface,
) {
    for (name, entry) in table.iter() {
        if let Some(kind) = entry.system_value() {
            bind_system_value(name, kind, object, scene, scratch, shader);
        } else if let Some(value) = entry.value() {
            bind_static_value(name, value, shader);
        } else {
            // Declared but never given a payload: stays unbound.
            log::trace!("uniform '{name}' has no payload, skipped");
        }
    }
}

fn bind_system_value(
    name: &str,
    kind: SystemValue,
    object: &RenderObject,
    scene: &Scene,
    scratch: &mut ScratchMatrices,
    shader: &mut dyn UniformInterface,
) {
    match kind {
        SystemValue::World => {
            let world = Mat4::from(object.world_matrix);
            shader.set_matrix(name, &world);
        }
        SystemValue::WorldView => {
            scratch.world_view = *scene.view_matrix() * Mat4::from(object.world_matrix);
            shader.set_matrix(name, &scratch.world_view);
        }
        SystemValue::WorldViewProjection => {
            scratch.world_view_projection =
                *scene.view_projection_matrix() * Mat4::from(object.world_matrix);
            shader.set_matrix(name, &scratch.world_view_projection);
        }
        SystemValue::View => shader.set_matrix(name, scene.view_matrix()),
        SystemValue::Projection => shader.set_matrix(name, scene.projection_matrix()),
        SystemValue::ViewProjection => shader.set_matrix(name, scene.view_projection_matrix()),
        SystemValue::CameraPosition => scene.bind_eye_position(name, shader),
        SystemValue::FogColor => shader.set_color3(name, scene.fog_color),
        SystemValue::DeltaTime => shader.set_float(name, scene.delta_ms() / 1000.0),
        SystemValue::CameraParameters => {
            let Some(camera) = scene.active_camera() else {
                // No camera this frame; re-evaluated on the next call.
                log::trace!("uniform '{name}' skipped: no active camera");
                return;
            };
            shader.set_float4(
                name,
                scene.y_origin().sign(),
                camera.near,
                camera.far,
                1.0 / camera.far,
            );
        }
    }
}

fn bind_static_value(name: &str, value: &UniformValue, shader: &mut dyn UniformInterface) {
    match value {
        UniformValue::Vector3(v) => shader.set_float3(name, v.x, v.y, v.z),
        UniformValue::Vector4(v) => shader.set_float4(name, v.x, v.y, v.z, v.w),
        UniformValue::Color3(color) => shader.set_color3(name, *color),
        UniformValue::Color4 { rgb, alpha } => shader.set_color4(name, *rgb, *alpha),
    }
}
