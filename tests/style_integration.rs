// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_scrubber::ui::design_tokens::{opacity, palette, radius};
    use iced_scrubber::ui::styles::bar::{self, Status};

    #[test]
    fn all_bar_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all bar styles compile and are callable
        let _ = bar::default(&theme, Status::Active);
        let _ = bar::default(&theme, Status::Hovered);
        let _ = bar::default(&theme, Status::Dragged);
        let disabled = bar::disabled();
        let _ = disabled(&theme, Status::Active);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Opacity
        let _ = opacity::OVERLAY_MEDIUM;

        // Radius
        let _ = radius::FULL;
    }

    #[test]
    fn disabled_style_is_more_faded_than_default() {
        let theme = Theme::Light;
        let normal = bar::default(&theme, Status::Active);
        let disabled = bar::disabled()(&theme, Status::Active);

        let alpha = |background: iced::Background| match background {
            iced::Background::Color(color) => color.a,
            _ => 1.0,
        };

        assert!(alpha(disabled.primary_bar) < alpha(normal.primary_bar));
    }
}
