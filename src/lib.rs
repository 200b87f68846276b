// SPDX-License-Identifier: MPL-2.0
//! `iced_scrubber` is a touch-driven scrubbing progress bar widget for the
//! Iced GUI framework.
//!
//! It displays primary (playback) and secondary (buffer) progress as two
//! overlaid bars and lets the user drag a handle to scrub, with variable
//! speed depending on how far the pointer strays vertically from the bar.
//! The interaction model lives in a plain, host-free
//! [`ScrubController`](scrub::controller::ScrubController); the
//! [`ScrubBar`](ui::widgets::ScrubBar) widget wraps it for Iced
//! applications.
//!
//! # Examples
//!
//! Driving the controller directly, without a UI host:
//!
//! ```
//! use iced::Point;
//! use iced_scrubber::scrub::controller::ScrubController;
//!
//! let mut controller = ScrubController::new();
//! controller.set_layout(300.0, 20.0, 10.0);
//! controller.set_primary_progress(0.5);
//!
//! // Grab the handle and drag 29px to the right at full speed.
//! assert!(controller.begin_drag(Point::new(145.0, 10.0)));
//! assert!(controller.continue_drag(Point::new(174.0, 10.0)));
//! controller.end_drag();
//!
//! assert!((controller.primary_progress() - 0.6).abs() < 1e-4);
//! ```

#![doc(html_root_url = "https://docs.rs/iced_scrubber/0.1.0")]

pub mod config;
pub mod error;
pub mod scrub;
pub mod ui;

pub use scrub::controller::ScrubController;
pub use scrub::speed::{SpeedTable, SpeedTier};
pub use ui::widgets::{scrub_bar, ScrubBar};
