//! Fish tail: a spring-driven anchor chain and its ribbon mesh
//!
//! A tail is attached to the trailing part of a spine. Each tick every anchor
//! relaxes toward a point slightly past its spine vertebra along the local
//! tangent; the anchors then form a double-sided ribbon stitched to the body.

mod chain;
mod render;


pub use chain::Tail;

/// Minimum spine length a tail can attach to
pub const MIN_SPINE_LENGTH: usize = 3;

/// Minimum number of anchors in a connected tail
pub const MIN_ANCHORS: usize = 2;
