//! Mesh output
//!
//! Every mesh producer (body, tail) appends into one shared `MeshSink` and
//! reports the `MeshRange` it wrote, so indices always refer to a single
//! global vertex numbering.

mod arena;
pub mod body;
mod types;

pub use arena::MeshArena;
pub use types::{FinVertex, MeshRange, MeshSink};
