// SPDX-License-Identifier: MPL-2.0
//! Bar-specific style definitions.
//!
//! Colors and backgrounds are presentation-only; they have no effect on the
//! scrubbing behavior.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Background, Color, Theme};

/// Interaction status of the scrub bar, as seen by a style function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Idle, cursor elsewhere.
    Active,
    /// Cursor over the handle's grab region.
    Hovered,
    /// Handle is being dragged.
    Dragged,
}

/// Appearance of the scrub bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Background track spanning the full width.
    pub rail: Background,
    /// Fill of the primary (playback) bar.
    pub primary_bar: Background,
    /// Fill of the secondary (buffer) bar, drawn underneath the primary.
    pub secondary_bar: Background,
    /// Fill of the drag handle.
    pub handle: Color,
}

/// Default theme-aware style. Adapts to Light/Dark theme.
pub fn default(theme: &Theme, status: Status) -> Style {
    let is_light = matches!(theme, Theme::Light);

    let rail = if is_light {
        Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        }
    } else {
        Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_700
        }
    };

    // The handle mirrors the primary bar color, brightening while grabbed.
    let handle = match status {
        Status::Active => palette::PRIMARY_500,
        Status::Hovered | Status::Dragged => palette::PRIMARY_400,
    };

    Style {
        rail: Background::Color(rail),
        primary_bar: Background::Color(palette::PRIMARY_500),
        secondary_bar: Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::PRIMARY_200
        }),
        handle,
    }
}

/// Style for a disabled bar (grayed out, non-interactive).
///
/// Very faded appearance with low contrast to clearly indicate
/// non-interactivity. Adapts to Light/Dark theme.
pub fn disabled() -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, _status: Status| {
        let is_light = matches!(theme, Theme::Light);

        let (rail, fill, handle) = if is_light {
            (
                Color {
                    a: opacity::DISABLED,
                    ..palette::GRAY_100
                },
                Color {
                    a: opacity::DISABLED,
                    ..palette::GRAY_400
                },
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::GRAY_400
                },
            )
        } else {
            (
                Color {
                    a: opacity::DISABLED,
                    ..palette::GRAY_700
                },
                Color {
                    a: opacity::DISABLED,
                    ..palette::GRAY_200
                },
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::GRAY_200
                },
            )
        };

        Style {
            rail: Background::Color(rail),
            primary_bar: Background::Color(fill),
            secondary_bar: Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..fill
            }),
            handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_brightens_handle_while_grabbed() {
        let theme = Theme::Dark;
        let idle = default(&theme, Status::Active);
        let grabbed = default(&theme, Status::Dragged);
        assert_ne!(idle.handle, grabbed.handle);
        assert_eq!(grabbed.handle, palette::PRIMARY_400);
    }

    #[test]
    fn default_style_adapts_rail_to_theme() {
        let light = default(&Theme::Light, Status::Active);
        let dark = default(&Theme::Dark, Status::Active);
        assert_ne!(light.rail, dark.rail);
    }

    #[test]
    fn disabled_style_ignores_status() {
        let theme = Theme::Dark;
        let style = disabled();
        assert_eq!(style(&theme, Status::Active), style(&theme, Status::Dragged));
    }
}
