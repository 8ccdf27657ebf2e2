// File: crates/graph-core/src/palette.rs
// Summary: Named sequential colormaps and even sampling across series.

use skia_safe as skia;

use crate::error::ChartError;
use crate::grid::linspace;

/// The five selectable colormaps, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
}

// Ten evenly spaced samples (t = i/9) of each map.
const VIRIDIS: [u32; 10] = [
    0x440154, 0x482878, 0x3e4a89, 0x31688e, 0x26828e, 0x1f9e89, 0x35b779, 0x6ece58, 0xb5de2b, 0xfde725,
];
const PLASMA: [u32; 10] = [
    0x0d0887, 0x46039f, 0x7201a8, 0x9c179e, 0xbd3786, 0xd8576b, 0xed7953, 0xfb9f3a, 0xfdca26, 0xf0f921,
];
const INFERNO: [u32; 10] = [
    0x000004, 0x1b0c41, 0x4a0c6b, 0x781c6d, 0xa52c60, 0xcf4446, 0xed6925, 0xfb9b06, 0xf7d13d, 0xfcffa4,
];
const MAGMA: [u32; 10] = [
    0x000004, 0x180f3d, 0x440f76, 0x721f81, 0x9e2f7f, 0xcd4071, 0xf1605d, 0xfd9668, 0xfeca8d, 0xfcfdbf,
];
const CIVIDIS: [u32; 10] = [
    0x00224e, 0x123570, 0x3b496c, 0x575d6d, 0x707173, 0x8a8779, 0xa69d75, 0xc4b56c, 0xe4cf5b, 0xfee838,
];

impl ColorScheme {
    pub const ALL: [ColorScheme; 5] = [
        ColorScheme::Viridis,
        ColorScheme::Plasma,
        ColorScheme::Inferno,
        ColorScheme::Magma,
        ColorScheme::Cividis,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Viridis => "viridis",
            ColorScheme::Plasma => "plasma",
            ColorScheme::Inferno => "inferno",
            ColorScheme::Magma => "magma",
            ColorScheme::Cividis => "cividis",
        }
    }

    /// Resolve a 1-based menu choice.
    pub fn from_choice(choice: usize) -> Result<Self, ChartError> {
        choice
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| ChartError::InvalidSelection { menu: "color scheme", input: choice.to_string() })
    }

    fn stops(self) -> &'static [u32; 10] {
        match self {
            ColorScheme::Viridis => &VIRIDIS,
            ColorScheme::Plasma => &PLASMA,
            ColorScheme::Inferno => &INFERNO,
            ColorScheme::Magma => &MAGMA,
            ColorScheme::Cividis => &CIVIDIS,
        }
    }

    /// Color at position `t` in `[0, 1]`, linearly interpolated between stops.
    pub fn sample(self, t: f64) -> skia::Color {
        let stops = self.stops();
        let pos = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
        let i = (pos.floor() as usize).min(stops.len() - 2);
        let frac = pos - i as f64;
        let (a, b) = (rgb(stops[i]), rgb(stops[i + 1]));
        let mix = |x: u8, y: u8| -> u8 { (x as f64 + (y as f64 - x as f64) * frac).round() as u8 };
        skia::Color::from_rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
    }

    /// `n` colors sampled evenly from the start to the end of the map.
    pub fn colors(self, n: usize) -> Vec<skia::Color> {
        linspace(0.0, 1.0, n).into_iter().map(|t| self.sample(t)).collect()
    }
}

fn rgb(hex: u32) -> (u8, u8, u8) {
    (((hex >> 16) & 0xff) as u8, ((hex >> 8) & 0xff) as u8, (hex & 0xff) as u8)
}
