// File: crates/graph-core/src/theme.rs
// Summary: Background presets and the ink colors drawn over them.

use skia_safe as skia;

use crate::error::ChartError;

/// Figure/axes background, as offered in the background menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    Default,
    Pro,
}

impl Background {
    pub const ALL: [Background; 2] = [Background::Default, Background::Pro];

    pub fn name(self) -> &'static str {
        match self {
            Background::Default => "Default",
            Background::Pro => "Pro",
        }
    }

    /// Menu key as typed by the user.
    pub fn key(self) -> &'static str {
        match self {
            Background::Default => "1",
            Background::Pro => "2",
        }
    }

    /// Color spec as `white` or a `#rrggbb` hex string.
    pub fn spec(self) -> &'static str {
        match self {
            Background::Default => "white",
            Background::Pro => "#e7e7e6",
        }
    }

    pub fn color(self) -> skia::Color {
        match self {
            Background::Default => skia::Color::WHITE,
            Background::Pro => skia::Color::from_rgb(0xe7, 0xe7, 0xe6),
        }
    }

    pub fn from_choice(input: &str) -> Result<Self, ChartError> {
        let key = input.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.key() == key)
            .ok_or_else(|| ChartError::InvalidSelection { menu: "background color", input: input.to_string() })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub annotation: skia::Color,
    pub bar_annotation: skia::Color,
    pub legend_frame: skia::Color,
}

impl Theme {
    pub fn light(background: skia::Color) -> Self {
        Self {
            background,
            axis_line: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            axis_label: skia::Color::from_argb(255, 0x10, 0x10, 0x10),
            tick: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            annotation: skia::Color::from_argb(255, 0x10, 0x10, 0x10),
            bar_annotation: skia::Color::WHITE,
            legend_frame: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
        }
    }
}
