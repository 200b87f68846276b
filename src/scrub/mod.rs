// SPDX-License-Identifier: MPL-2.0
//! Core scrubbing logic, independent of any windowing host.
//!
//! - [`speed`] - Speed tiers and the distance-to-multiplier lookup table
//! - [`controller`] - The drag-tracking state machine owning progress state
//! - [`observer`] - Boundary callbacks toward the presentation host

pub mod controller;
pub mod observer;
pub mod speed;
