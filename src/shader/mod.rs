//! Shader Program Surface
//!
//! - [`ShaderProgram`]: the compiled-program handle (sources + uniform names)
//! - [`UniformInterface`]: the typed push interface the binder writes through
//! - [`RecordingInterface`] / [`NullInterface`]: headless implementations

pub mod interface;
pub mod program;

pub use interface::{NullInterface, PushedValue, RecordingInterface, UniformInterface, UniformPush};
pub use program::ShaderProgram;
