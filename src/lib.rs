#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod graph;
pub mod material;
pub mod scene;
pub mod shader;
pub mod utils;

pub use errors::{NornError, Result};
pub use graph::{CompiledGraph, UniformDeclaration};
pub use material::{BindingEntry, BindingTable, MaterialState, NodeMaterial, SystemValue, UniformValue};
pub use scene::{Camera, ProjectionType, RenderObject, Scene, YOrigin};
pub use shader::{NullInterface, RecordingInterface, ShaderProgram, UniformInterface};
pub use utils::Timer;
