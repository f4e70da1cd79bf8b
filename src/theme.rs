//! Style functions resolved against the host palette. The card itself
//! never picks colors; it names the styles it expects and the theme
//! supplies them.

pub const TEXT_SIZE: f32 = 14.0;
pub const CARD_WIDTH: f32 = 240.0;

pub mod container {
    use iced::widget::container::Style;
    use iced::{Background, Border, Theme};

    pub fn card(theme: &Theme) -> Style {
        let palette = theme.extended_palette();

        Style {
            background: Some(Background::Color(palette.background.base.color)),
            border: Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Style::default()
        }
    }

    /// The image region when no decoded picture is available.
    pub fn frame(theme: &Theme) -> Style {
        let palette = theme.extended_palette();

        Style {
            background: Some(Background::Color(palette.background.weak.color)),
            ..Style::default()
        }
    }
}

pub mod button {
    use iced::widget::button::{Status, Style};
    use iced::{Background, Border, Theme};

    pub fn cta(theme: &Theme, status: Status) -> Style {
        let palette = theme.extended_palette();

        let background = match status {
            Status::Hovered | Status::Pressed => palette.primary.strong.color,
            Status::Active | Status::Disabled => palette.primary.base.color,
        };

        Style {
            background: Some(Background::Color(background)),
            text_color: palette.primary.base.text,
            border: Border {
                radius: 2.0.into(),
                ..Border::default()
            },
            ..Style::default()
        }
    }

    pub fn dismiss(theme: &Theme, status: Status) -> Style {
        let palette = theme.extended_palette();

        let text_color = match status {
            Status::Hovered | Status::Pressed => palette.background.base.text,
            Status::Active | Status::Disabled => palette.background.strong.color,
        };

        Style {
            background: None,
            text_color,
            ..Style::default()
        }
    }
}

pub mod text {
    use iced::widget::text::Style;
    use iced::Theme;

    pub fn label(theme: &Theme) -> Style {
        Style {
            color: Some(theme.extended_palette().primary.strong.color),
        }
    }

    pub fn caption(theme: &Theme) -> Style {
        Style {
            color: Some(theme.extended_palette().background.strong.color),
        }
    }
}
