//! Koi appendage simulation
//!
//! Flexible appendages (tails, fins) that trail a fish spine with a
//! position-only spring, and the ribbon meshes they render as.
//!
//! The simulation runs at a fixed tick rate. Rendering interpolates between
//! the previous and current tick so display refresh rate stays decoupled from
//! the simulation:
//!
//! ```text
//! FishBody::tick()          -> spine re-sampled, Tail::update(spine)
//! FishBody::render(time)    -> body vertices, Tail::render_bottom/top
//! ```

pub mod blueprint;
pub mod config;
pub mod error;
pub mod host;
pub mod mesh;
pub mod pattern;
pub mod sampler;
pub mod tail;

pub use config::AppendageConfig;
pub use error::{AppendageError, Result};
pub use host::{FishBody, FixedTimestep};
pub use mesh::{FinVertex, MeshArena, MeshRange, MeshSink};
pub use pattern::PatternRegion;
pub use sampler::CubicHermite;
pub use tail::Tail;
