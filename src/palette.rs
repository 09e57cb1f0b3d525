//! The closed set of display colors a task bar can use

use csscolorparser::Color;
use serde::{Deserialize, Serialize};

/// A display color for a task bar.
///
/// The dashboard offers a fixed palette rather than free-form colors, so this
/// is an enum on the wire too (serialized as its lowercase name). Colors only
/// affect rendering, never layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorLabel {
    Sky,
    Emerald,
    Amber,
    Rose,
    Violet,
    Slate,
}

impl ColorLabel {
    /// Every available color, in the order pickers should offer them
    pub const ALL: [ColorLabel; 6] = [
        ColorLabel::Sky,
        ColorLabel::Emerald,
        ColorLabel::Amber,
        ColorLabel::Rose,
        ColorLabel::Violet,
        ColorLabel::Slate,
    ];

    /// The CSS value the web dashboard uses for this color
    pub fn as_css(&self) -> &'static str {
        match self {
            ColorLabel::Sky     => "#0ea5e9",
            ColorLabel::Emerald => "#10b981",
            ColorLabel::Amber   => "#f59e0b",
            ColorLabel::Rose    => "#f43f5e",
            ColorLabel::Violet  => "#8b5cf6",
            ColorLabel::Slate   => "#64748b",
        }
    }

    /// The parsed color, for hosts that want channel values rather than CSS text
    pub fn color(&self) -> Color {
        csscolorparser::parse(self.as_css())
            .expect("the palette only contains valid CSS colors")
    }
}

impl Default for ColorLabel {
    fn default() -> Self {
        ColorLabel::Sky
    }
}
