// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all scrubbing constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Handle**: Drag handle geometry
//! - **Hit Region**: Grab tolerance around the handle
//! - **Speed**: Scrubbing speed tiers and re-baseline threshold

// ==========================================================================
// Handle Defaults
// ==========================================================================

/// Diameter of the drag handle, in logical pixels.
pub const DEFAULT_HANDLE_RADIUS: f32 = 10.0;

/// Default height of the bar widget, in logical pixels.
pub const DEFAULT_BAR_HEIGHT: f32 = 20.0;

// ==========================================================================
// Hit Region Defaults
// ==========================================================================

/// Extra width around the handle frame accepted as a grab.
pub const HIT_REGION_PAD_X: f32 = 25.0;

/// Extra height around the handle frame (or the control, whichever is
/// taller) accepted as a grab.
pub const HIT_REGION_PAD_Y: f32 = 20.0;

// ==========================================================================
// Speed Defaults
// ==========================================================================

/// Smallest speed change that re-baselines an active drag session.
pub const SPEED_EPSILON: f32 = 0.001;

/// Default speed tiers: vertical distance from the centerline paired with
/// the multiplier applied to horizontal motion at and beyond it.
pub const DEFAULT_SPEED_TIERS: [(f32, f32); 4] =
    [(0.0, 1.0), (50.0, 0.5), (100.0, 0.25), (150.0, 0.1)];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Handle validation
    assert!(DEFAULT_HANDLE_RADIUS > 0.0);
    assert!(DEFAULT_BAR_HEIGHT >= DEFAULT_HANDLE_RADIUS);

    // Hit region validation
    assert!(HIT_REGION_PAD_X >= 0.0);
    assert!(HIT_REGION_PAD_Y >= 0.0);

    // Speed validation
    assert!(SPEED_EPSILON > 0.0);
    assert!(DEFAULT_SPEED_TIERS[0].0 == 0.0);
    assert!(DEFAULT_SPEED_TIERS[0].1 == 1.0);
};
