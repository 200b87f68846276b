// SPDX-License-Identifier: MPL-2.0
pub mod scrub_bar;

pub use scrub_bar::{scrub_bar, ScrubBar};
