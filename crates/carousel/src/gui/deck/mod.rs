pub mod model;
pub mod spring;
pub mod view;

pub use model::{Card, CardFrame, Deck};
pub use view::draw;

pub const CORNER_RADIUS: f64 = 10.0;
pub const SHADOW_RADIUS: f64 = 10.0;
pub const TITLE_FONT_SIZE: f64 = 22.0;
pub const LABEL_FONT_SIZE: f64 = 14.0;
pub const LABEL_MARGIN: f64 = 24.0; // distance of the window label from the bottom edge

// Spring constants (stiffness, damping, initial velocity)
pub const OFFSET_SPRING: (f64, f64, f64) = (200.0, 15.0, 0.0);
pub const SIZE_SPRING: (f64, f64, f64) = (200.0, 20.0, 10.0);
pub const FADE_SPRING: (f64, f64, f64) = (200.0, 20.0, 10.0);
pub const MAX_FRAME_DT: f64 = 0.05; // seconds, clamps long stalls
