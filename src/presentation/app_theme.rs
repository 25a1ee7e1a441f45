use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.08, 0.08, 0.09),
                text: Color::from_rgb(0.93, 0.93, 0.93),
                primary: Color::from_rgb(0.64, 0.12, 0.16),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.97, 0.96, 0.94),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.64, 0.12, 0.16),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => Color::from_rgb(0.64, 0.12, 0.16),
        button::Status::Hovered => Color::from_rgb(0.75, 0.18, 0.22),
        button::Status::Pressed => Color::from_rgb(0.5, 0.08, 0.12),
        button::Status::Disabled => Color::from_rgb(0.3, 0.3, 0.3),
    };
    let text_color = match status {
        button::Status::Disabled => Color::from_rgb(0.5, 0.5, 0.5),
        _ => Color::WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap: matches!(status, button::Status::Pressed),
    }
}

/// Renders a button as an inline text link in the theme's primary color.
pub fn search_link_style(theme: &Theme, status: button::Status) -> button::Style {
    let primary = theme.palette().primary;

    let text_color = match status {
        button::Status::Active => primary,
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.75,
            ..primary
        },
        button::Status::Disabled => Color::from_rgb(0.5, 0.5, 0.5),
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn fact_title_style(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
    }
}

pub fn preview_entry_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(Color { a: 0.12, ..palette.text }))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.text,
        border: Border {
            color: Color { a: 0.2, ..palette.text },
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn loading_banner_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..palette.primary })),
        text_color: Some(palette.text),
        ..container::Style::default()
    }
}
