//! The closed set of colors a player can pick for the snake and the food.

use bevy::prelude::*;
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Green,
    Blue,
    Red,
    Yellow,
    Purple,
}

impl ColorName {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorName::Green => (0, 255, 0),
            ColorName::Blue => (0, 0, 255),
            ColorName::Red => (255, 0, 0),
            ColorName::Yellow => (255, 255, 0),
            ColorName::Purple => (128, 0, 128),
        }
    }

    pub fn color(self) -> Color {
        self.shaded(1.0)
    }

    /// The color scaled towards black by `factor` (clamped to `0.0..=1.0`).
    pub fn shaded(self, factor: f32) -> Color {
        let factor = factor.clamp(0.0, 1.0);
        let (r, g, b) = self.rgb();
        let scale = |channel: u8| (channel as f32 * factor) as u8;
        Color::srgb_u8(scale(r), scale(g), scale(b))
    }
}
