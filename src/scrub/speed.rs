// SPDX-License-Identifier: MPL-2.0
//! Scrubbing speed tiers and their lookup table.
//!
//! Dragging the pointer away from the bar's horizontal centerline slows the
//! drag-to-progress mapping for finer control. Each tier pairs a vertical
//! distance threshold with a speed multiplier; a lookup returns the
//! multiplier of the largest threshold at or below the observed distance.

use serde::{Deserialize, Serialize};

use crate::config::defaults::DEFAULT_SPEED_TIERS;

/// A vertical distance threshold (in the control's units, logical pixels)
/// paired with the speed multiplier applied at and beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedTier {
    pub distance: f32,
    pub multiplier: f32,
}

/// Lookup table mapping vertical drag distance to a scrubbing speed
/// multiplier.
///
/// Tiers are kept sorted by descending threshold. Replacing the table
/// re-derives that order in the same step, so the tiers and their lookup
/// order can never diverge. Duplicate thresholds collapse, with the last
/// write winning.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedTable {
    tiers: Vec<SpeedTier>,
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED_TIERS)
    }
}

impl SpeedTable {
    /// Builds a table from `(distance, multiplier)` pairs.
    pub fn new(pairs: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let mut tiers: Vec<SpeedTier> = Vec::new();
        for (distance, multiplier) in pairs {
            match tiers.iter().position(|tier| tier.distance == distance) {
                Some(index) => tiers[index].multiplier = multiplier,
                None => tiers.push(SpeedTier {
                    distance,
                    multiplier,
                }),
            }
        }
        tiers.sort_by(|a, b| b.distance.total_cmp(&a.distance));
        Self { tiers }
    }

    /// Builds a table from existing tiers.
    pub fn from_tiers(tiers: impl IntoIterator<Item = SpeedTier>) -> Self {
        Self::new(tiers.into_iter().map(|tier| (tier.distance, tier.multiplier)))
    }

    /// An empty table; every lookup yields full speed.
    pub fn empty() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Multiplier for the given vertical distance from the centerline.
    ///
    /// Returns the multiplier of the largest threshold at or below
    /// `vertical_delta`, or `1.0` when the distance is negative or no tier
    /// matches.
    pub fn speed_at(&self, vertical_delta: f32) -> f32 {
        if vertical_delta >= 0.0 {
            for tier in &self.tiers {
                if vertical_delta >= tier.distance {
                    return tier.multiplier;
                }
            }
        }
        1.0
    }

    /// Tiers in descending threshold order.
    pub fn tiers(&self) -> &[SpeedTier] {
        &self.tiers
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}
