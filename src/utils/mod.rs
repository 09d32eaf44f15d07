//! Utility Module
//!
//! - [`time`]: Frame timing utilities feeding the scene's delta-time uniform

pub mod time;

pub use time::Timer;
