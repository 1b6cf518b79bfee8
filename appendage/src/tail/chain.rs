//! Anchor chain simulation

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use tracing::debug;

use super::{MIN_ANCHORS, MIN_SPINE_LENGTH};
use crate::config::TailConfig;
use crate::error::{AppendageError, Result};

/// A fish tail
///
/// Built with only an attachment fraction; becomes usable once connected to
/// a spine. The anchor count is fixed from then on, and the three per-anchor
/// buffers are reused for the tail's whole lifetime.
#[derive(Debug, Clone)]
pub struct Tail {
    /// Fraction of the spine the tail covers, counted from the tip
    length: f32,
    pub(super) config: TailConfig,
    pub(super) anchors: usize,
    pub(super) spine_offset: usize,
    /// Anchor positions after the last tick
    pub(super) edge: Vec<Vec2>,
    /// Anchor positions one tick earlier
    pub(super) edge_previous: Vec<Vec2>,
    /// Ribbon half-depth per anchor
    pub(super) distances: Vec<f32>,
}

impl Tail {
    /// Create an unconnected tail with the default spring constants
    pub fn new(length: f32) -> Result<Self> {
        Self::with_config(length, &TailConfig::default())
    }

    /// Create an unconnected tail
    ///
    /// `length` must lie in `[0, 1]`.
    pub fn with_config(length: f32, config: &TailConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&length) {
            return Err(AppendageError::InvalidAttachment(length));
        }

        Ok(Self {
            length,
            config: config.clone(),
            anchors: 0,
            spine_offset: 0,
            edge: Vec::new(),
            edge_previous: Vec::new(),
            distances: Vec::new(),
        })
    }

    /// Connect the tail to a spine
    ///
    /// Seeds both anchor buffers from the trailing spine points and returns
    /// the index of the last spine vertebra not governed by this tail.
    pub fn connect(&mut self, spine: &[Vec2]) -> Result<usize> {
        if spine.len() < MIN_SPINE_LENGTH {
            return Err(AppendageError::SpineTooShort {
                len: spine.len(),
                required: MIN_SPINE_LENGTH,
            });
        }

        let anchors = ((spine.len() as f32 * self.length).round() as usize)
            .clamp(MIN_ANCHORS, spine.len() - 1);

        self.anchors = anchors;
        self.spine_offset = spine.len() - anchors;
        self.edge.clear();
        self.edge.extend_from_slice(&spine[self.spine_offset..]);
        self.edge_previous.clear();
        self.edge_previous.extend_from_slice(&self.edge);
        self.distances.clear();
        self.distances.extend((0..anchors).map(|vertebra| {
            -self.config.max_lateral_offset
                * (FRAC_PI_2 * (1.0 + (vertebra + 1) as f32 / anchors as f32)).cos()
        }));

        debug!(
            "Tail connected: {} anchors, spine offset {} of {}",
            anchors,
            self.spine_offset,
            spine.len()
        );

        Ok(self.spine_offset - 1)
    }

    /// Instantly shift the tail position
    ///
    /// Both buffers move together so interpolation shows no glide.
    pub fn shift(&mut self, dx: f32, dy: f32) {
        let delta = Vec2::new(dx, dy);
        for (current, previous) in self.edge.iter_mut().zip(self.edge_previous.iter_mut()) {
            *current += delta;
            *previous += delta;
        }
    }

    /// Store the current state into the previous state
    pub fn store_previous_state(&mut self) {
        self.edge_previous.copy_from_slice(&self.edge);
    }

    /// Advance the tail one tick toward the spine
    ///
    /// Stores the previous state first, then moves each anchor a fixed
    /// fraction of the way to its spring target.
    pub fn update(&mut self, spine: &[Vec2]) -> Result<()> {
        self.check_spine(spine)?;
        self.store_previous_state();

        for vertebra in 0..self.anchors {
            let target = self.target_unchecked(spine, vertebra);
            let current = self.edge[vertebra];
            self.edge[vertebra] = current + (target - current) * self.config.spring;
        }

        Ok(())
    }

    /// Point anchor `vertebra` is pulled toward for the given spine
    ///
    /// The spine point pushed further along its incoming tangent.
    pub fn spring_target(&self, spine: &[Vec2], vertebra: usize) -> Result<Vec2> {
        self.check_spine(spine)?;
        if vertebra >= self.anchors {
            return Err(AppendageError::AnchorOutOfRange {
                index: vertebra,
                anchors: self.anchors,
            });
        }
        Ok(self.target_unchecked(spine, vertebra))
    }

    /// Caller has run `check_spine` and `vertebra < anchors`
    fn target_unchecked(&self, spine: &[Vec2], vertebra: usize) -> Vec2 {
        let index = self.spine_offset + vertebra;
        let tangent = spine[index] - spine[index - 1];
        spine[index] + tangent * self.config.shift
    }

    pub(super) fn check_spine(&self, spine: &[Vec2]) -> Result<()> {
        if !self.is_connected() {
            return Err(AppendageError::NotConnected);
        }
        let required = self.spine_offset + self.anchors;
        if spine.len() < required {
            return Err(AppendageError::SpineTooShort {
                len: spine.len(),
                required,
            });
        }
        Ok(())
    }

    /// Anchor position interpolated between the last two ticks
    #[inline]
    pub fn interpolated(&self, vertebra: usize, time: f32) -> Vec2 {
        let previous = self.edge_previous[vertebra];
        previous + (self.edge[vertebra] - previous) * time
    }

    pub fn is_connected(&self) -> bool {
        self.anchors != 0
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    /// Number of anchors, 0 until connected
    pub fn anchors(&self) -> usize {
        self.anchors
    }

    /// First spine index governed by the tail
    pub fn spine_offset(&self) -> usize {
        self.spine_offset
    }

    pub fn edge(&self) -> &[Vec2] {
        &self.edge
    }

    pub fn edge_previous(&self) -> &[Vec2] {
        &self.edge_previous
    }

    pub fn distances(&self) -> &[f32] {
        &self.distances
    }
}
