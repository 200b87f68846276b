// SPDX-License-Identifier: MPL-2.0
//! User interface layer for the scrub bar.
//!
//! - [`widgets`] - The custom Iced widget hosting the scrub controller
//! - [`styles`] - Centralized styling (bar colors, handle, disabled state)
//! - [`design_tokens`] - Design system constants (colors, opacity, radii)

pub mod design_tokens;
pub mod styles;
pub mod widgets;
