//! Appendage host
//!
//! Owns the spine, drives tail ticks at a fixed rate and renders the body and
//! its tail into a shared arena.

mod fish;
mod timestep;

pub use fish::FishBody;
pub use timestep::FixedTimestep;
