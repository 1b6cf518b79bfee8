//! Blueprints: parameter ranges a random fish is spawned from
//!
//! Each species is a fixed data record fed into the same spawn routine.
//! Randomness is consumed only as uniform scalars in `[0, 1)`.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{AppendageConfig, TailConfig};
use crate::error::{AppendageError, Result};
use crate::host::FishBody;
use crate::pattern::PatternRegion;
use crate::sampler::{CubicHermite, Sampler, SamplerPower, ScalarSampler};
use crate::tail::{MIN_SPINE_LENGTH, Tail};

/// Distance between spine vertebrae of a freshly spawned fish
pub const SEGMENT_SPACING: f32 = 0.1;

/// Control points along a spawned fish's initial straight spine
const CONTROL_POINTS: usize = 4;

/// Parameter ranges for a tail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TailBlueprint {
    /// Attachment fraction, must stay inside `[0, 1]`
    pub length: Sampler,
}

impl TailBlueprint {
    pub fn spawn<R: Rng + ?Sized>(&self, config: &TailConfig, rng: &mut R) -> Result<Tail> {
        Tail::with_config(self.length.sample(rng.random::<f32>()), config)
    }
}

/// Parameter ranges for a fish body and its tail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyBlueprint {
    /// Number of spine vertebrae (rounded)
    pub length: SamplerPower,
    /// Body half-width
    pub radius: Sampler,
    pub tail: TailBlueprint,
}

/// Sampled body parameters
#[derive(Debug, Clone)]
pub struct BodySpawn {
    pub segments: usize,
    pub radius: f32,
    pub tail: Tail,
}

impl BodyBlueprint {
    /// Sample body parameters
    pub fn spawn<R: Rng + ?Sized>(&self, config: &TailConfig, rng: &mut R) -> Result<BodySpawn> {
        let segments = self.length.sample(rng.random::<f32>()).round();
        if !(segments >= MIN_SPINE_LENGTH as f32) {
            return Err(AppendageError::SpineTooShort {
                len: segments.max(0.0) as usize,
                required: MIN_SPINE_LENGTH,
            });
        }
        let radius = self.radius.sample(rng.random::<f32>());
        let tail = self.tail.spawn(config, rng)?;

        Ok(BodySpawn {
            segments: segments as usize,
            radius,
            tail,
        })
    }

    /// Spawn a complete fish with its head at `head`, facing +X
    pub fn spawn_fish<R: Rng + ?Sized>(
        &self,
        config: &AppendageConfig,
        head: Vec2,
        pattern: PatternRegion,
        rng: &mut R,
    ) -> Result<FishBody> {
        let spawn = self.spawn(&config.tail, rng)?;
        let body_length = (spawn.segments - 1) as f32 * SEGMENT_SPACING;
        let controls = CubicHermite::new(
            (0..CONTROL_POINTS)
                .map(|i| {
                    let t = i as f32 / (CONTROL_POINTS - 1) as f32;
                    head - Vec2::new(body_length * t, 0.0)
                })
                .collect(),
        )?;

        let mut config = config.clone();
        config.body.radius = spawn.radius;

        debug!(
            "Spawned fish: {} segments, radius {:.3}, tail length {:.3}",
            spawn.segments,
            spawn.radius,
            spawn.tail.length()
        );

        FishBody::new(&config, controls, spawn.segments, spawn.tail, pattern)
    }
}

/// Koi varieties with distinct body proportions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Standard koi
    Common,
    /// Slender body, longer tail
    Longfin,
    /// Butterfly koi: flowing tail covering most of the spine
    Butterfly,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Common, Species::Longfin, Species::Butterfly];

    /// Parameter record for this species
    pub const fn blueprint(self) -> BodyBlueprint {
        match self {
            Species::Common => BodyBlueprint {
                length: SamplerPower::new(12.0, 18.0, 1.5),
                radius: Sampler::new(0.28, 0.36),
                tail: TailBlueprint {
                    length: Sampler::new(0.25, 0.35),
                },
            },
            Species::Longfin => BodyBlueprint {
                length: SamplerPower::new(16.0, 24.0, 2.0),
                radius: Sampler::new(0.2, 0.26),
                tail: TailBlueprint {
                    length: Sampler::new(0.35, 0.5),
                },
            },
            Species::Butterfly => BodyBlueprint {
                length: SamplerPower::new(14.0, 20.0, 2.0),
                radius: Sampler::new(0.24, 0.3),
                tail: TailBlueprint {
                    length: Sampler::new(0.5, 0.7),
                },
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Common => "common",
            Species::Longfin => "longfin",
            Species::Butterfly => "butterfly",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Species {
    type Err = AppendageError;

    fn from_str(s: &str) -> Result<Self> {
        Species::ALL
            .into_iter()
            .find(|species| species.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppendageError::InvalidConfig(format!("Unknown species: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_within_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for species in Species::ALL {
            let blueprint = species.blueprint();
            for _ in 0..50 {
                let spawn = blueprint.spawn(&TailConfig::default(), &mut rng).unwrap();
                assert!(spawn.segments as f32 >= blueprint.length.min.round());
                assert!(spawn.segments as f32 <= blueprint.length.max.round());
                assert!(spawn.radius >= blueprint.radius.min && spawn.radius <= blueprint.radius.max);
                let length = spawn.tail.length();
                assert!(length >= blueprint.tail.length.min && length <= blueprint.tail.length.max);
                assert!(!spawn.tail.is_connected());
            }
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let blueprint = Species::Longfin.blueprint();
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..10 {
            let left = blueprint.spawn(&TailConfig::default(), &mut a).unwrap();
            let right = blueprint.spawn(&TailConfig::default(), &mut b).unwrap();
            assert_eq!(left.segments, right.segments);
            assert_eq!(left.radius, right.radius);
            assert_eq!(left.tail.length(), right.tail.length());
        }
    }

    #[test]
    fn test_spawn_fish_places_head() {
        let mut rng = Pcg32::seed_from_u64(3);
        let head = Vec2::new(2.0, 1.0);
        let fish = Species::Butterfly
            .blueprint()
            .spawn_fish(&AppendageConfig::default(), head, PatternRegion::default(), &mut rng)
            .unwrap();

        assert_eq!(fish.spine()[0], head);
        let tip = fish.spine()[fish.spine().len() - 1];
        let expected = (fish.spine().len() - 1) as f32 * SEGMENT_SPACING;
        assert!((head.x - tip.x - expected).abs() < 1e-4);
        assert!(fish.tail().is_connected());
    }

    #[test]
    fn test_invalid_tail_range_fails() {
        let mut blueprint = Species::Common.blueprint();
        blueprint.tail.length = Sampler::new(1.5, 2.0);
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(matches!(
            blueprint.spawn(&TailConfig::default(), &mut rng),
            Err(AppendageError::InvalidAttachment(_))
        ));
    }

    #[test]
    fn test_too_short_body_fails() {
        let mut blueprint = Species::Common.blueprint();
        blueprint.length = SamplerPower::new(1.0, 2.0, 1.0);
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(matches!(
            blueprint.spawn(&TailConfig::default(), &mut rng),
            Err(AppendageError::SpineTooShort { .. })
        ));
    }

    #[test]
    fn test_species_names_roundtrip() {
        for species in Species::ALL {
            assert_eq!(species.name().parse::<Species>().unwrap(), species);
            assert_eq!(species.to_string(), species.name());
        }
        assert_eq!("BUTTERFLY".parse::<Species>().unwrap(), Species::Butterfly);
        assert!("goldfish".parse::<Species>().is_err());
    }
}
