//! WebGPU rendering module
//!
//! `scene` turns the game state into a triangle list in screen pixels; `pipeline`
//! maps it to clip space and draws it.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use vertex::{Vertex, colors};
