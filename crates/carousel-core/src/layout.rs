use serde::{Deserialize, Serialize};

/// Fraction of the card width a drag has to travel to flip cards.
pub const SWIPE_THRESHOLD_FACTOR: f64 = 0.51;
pub const NEIGHBOR_OPACITY: f64 = 0.75;
/// Cards outside the window are parked this many card widths to the right.
pub const PARKED_OFFSET_FACTOR: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CardSize {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselLayout {
    pub card_size: CardSize,
    pub spacing: f64,
    pub unfocused_height_scale: f64,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            card_size: CardSize::default(),
            spacing: 20.0,
            unfocused_height_scale: 0.8,
        }
    }
}

impl CarouselLayout {
    pub fn halfway(&self) -> f64 {
        self.card_size.width * SWIPE_THRESHOLD_FACTOR
    }

    /// Distance between the resting positions of two adjacent cards.
    pub fn pitch(&self) -> f64 {
        self.card_size.width + self.spacing
    }

    pub fn parked_offset(&self) -> f64 {
        PARKED_OFFSET_FACTOR * self.card_size.width
    }
}

/// Target values for one card. The presentation layer animates toward them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualParameters {
    pub lateral_offset: f64,
    pub opacity: f64,
    pub relative_height: f64,
}

impl VisualParameters {
    pub fn height(&self, layout: &CarouselLayout) -> f64 {
        layout.card_size.height * self.relative_height
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}
