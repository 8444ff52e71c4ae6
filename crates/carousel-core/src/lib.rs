//! Index bookkeeping and gesture handling for a circular card carousel.
//!
//! The crate has no GUI dependencies. A presentation layer feeds drag
//! samples into a [`CarouselController`] and pulls [`VisualParameters`] for
//! every card it paints.

pub mod controller;
pub mod drag;
pub mod error;
pub mod layout;
pub mod tracker;
pub mod window;

pub use controller::CarouselController;
pub use drag::{DragState, GestureSample, SwipeDirection};
pub use error::InvalidArgument;
pub use layout::{CardSize, CarouselLayout, VisualParameters};
pub use tracker::SwipeTracker;
pub use window::{IndexWindow, Slot, neighbor_left, neighbor_right};
