//! Node-Graph Material Runtime
//!
//! The per-frame half of a node-graph material system:
//! - [`binding`]: the uniform-name → binding-record table and its value tags
//! - `dispatch`: the per-draw resolution loop and its scratch matrices
//! - [`node_material`]: the lifecycle controller tying it all to a compiled
//!   graph
//!
//! Compilation of the graph itself happens elsewhere; this module starts
//! where the compiler's output ends.

pub mod binding;
pub(crate) mod dispatch;
pub mod node_material;

pub use binding::{BindingEntry, BindingTable, SystemValue, UniformValue};
pub use node_material::{MaterialState, NodeMaterial};
