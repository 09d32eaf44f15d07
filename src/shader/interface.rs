use std::sync::{Arc, RwLock};

use glam::{Mat4, Vec3};

/// The uniform interface of a compiled shader program.
///
/// The binder resolves every table entry to a typed push through this trait;
/// the host backend decides what a push means (a `queue.write_buffer`, a GL
/// uniform call, a test recording, ...). Buffer allocation and layout are the
/// backend's business; this crate only names values and hands them over.
pub trait UniformInterface {
    fn set_matrix(&mut self, name: &str, value: &Mat4);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_float3(&mut self, name: &str, x: f32, y: f32, z: f32);
    fn set_float4(&mut self, name: &str, x: f32, y: f32, z: f32, w: f32);
    fn set_color3(&mut self, name: &str, color: Vec3);
    fn set_color4(&mut self, name: &str, color: Vec3, alpha: f32);
}

// ============================================================================
// Recording implementation (headless runs and tests)
// ============================================================================

/// A single recorded push.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformPush {
    pub name: String,
    pub value: PushedValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PushedValue {
    Matrix(Mat4),
    Float(f32),
    Float3(f32, f32, f32),
    Float4(f32, f32, f32, f32),
    Color3(Vec3),
    Color4(Vec3, f32),
}

/// A [`UniformInterface`] that records every push in order.
///
/// Clones share the same log, so a caller can keep one handle for inspection
/// while the material owns the other. The observable contract of the binder
/// is exactly "which uniforms got pushed, with which values", and this sink
/// makes that inspectable without a GPU.
#[derive(Debug, Clone, Default)]
pub struct RecordingInterface {
    log: Arc<RwLock<Vec<UniformPush>>>,
}

impl RecordingInterface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all pushes recorded so far, in push order.
    #[must_use]
    pub fn pushes(&self) -> Vec<UniformPush> {
        self.log.read().unwrap().clone()
    }

    /// The most recent push for `name`, if any.
    #[must_use]
    pub fn last_for(&self, name: &str) -> Option<UniformPush> {
        self.log
            .read()
            .unwrap()
            .iter()
            .rev()
            .find(|push| push.name == name)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.read().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.read().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.log.write().unwrap().clear();
    }

    fn record(&self, name: &str, value: PushedValue) {
        self.log.write().unwrap().push(UniformPush {
            name: name.to_owned(),
            value,
        });
    }
}

impl UniformInterface for RecordingInterface {
    fn set_matrix(&mut self, name: &str, value: &Mat4) {
        self.record(name, PushedValue::Matrix(*value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, PushedValue::Float(value));
    }

    fn set_float3(&mut self, name: &str, x: f32, y: f32, z: f32) {
        self.record(name, PushedValue::Float3(x, y, z));
    }

    fn set_float4(&mut self, name: &str, x: f32, y: f32, z: f32, w: f32) {
        self.record(name, PushedValue::Float4(x, y, z, w));
    }

    fn set_color3(&mut self, name: &str, color: Vec3) {
        self.record(name, PushedValue::Color3(color));
    }

    fn set_color4(&mut self, name: &str, color: Vec3, alpha: f32) {
        self.record(name, PushedValue::Color4(color, alpha));
    }
}

/// A [`UniformInterface`] that discards every push. Used by benchmarks to
/// measure the resolution path without accumulating a log.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullInterface;

impl UniformInterface for NullInterface {
    fn set_matrix(&mut self, _name: &str, _value: &Mat4) {}
    fn set_float(&mut self, _name: &str, _value: f32) {}
    fn set_float3(&mut self, _name: &str, _x: f32, _y: f32, _z: f32) {}
    fn set_float4(&mut self, _name: &str, _x: f32, _y: f32, _z: f32, _w: f32) {}
    fn set_color3(&mut self, _name: &str, _color: Vec3) {}
    fn set_color4(&mut self, _name: &str, _color: Vec3, _alpha: f32) {}
}
