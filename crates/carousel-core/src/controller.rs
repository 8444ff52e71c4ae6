use crate::drag::{DragState, GestureSample, SwipeDirection};
use crate::error::Result;
use crate::layout::{CarouselLayout, NEIGHBOR_OPACITY, VisualParameters};
use crate::window::{IndexWindow, Slot};

/// Turns drag input into active-card changes.
///
/// A gesture is a run of [`on_drag_update`](Self::on_drag_update) calls
/// followed by exactly one [`on_drag_end`](Self::on_drag_end). Between
/// gestures the controller is idle and the drag offset is zero.
#[derive(Debug, Clone)]
pub struct CarouselController {
    window: IndexWindow,
    drag: DragState,
    layout: CarouselLayout,
}

impl CarouselController {
    pub fn new(size: usize, layout: CarouselLayout) -> Result<Self> {
        Ok(Self {
            window: IndexWindow::new(size, 0)?,
            drag: DragState::Inactive,
            layout,
        })
    }

    pub fn window(&self) -> &IndexWindow {
        &self.window
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    pub fn active(&self) -> usize {
        self.window.active()
    }

    pub fn size(&self) -> usize {
        self.window.size()
    }

    pub fn on_drag_update(&mut self, translation_x: f64) {
        log::trace!("drag update: {translation_x}");
        self.drag = DragState::Active {
            offset: translation_x,
        };
    }

    /// Commits the gesture and returns the direction moved, if any. The drag
    /// offset is back at zero afterwards whether or not the card changed.
    pub fn on_drag_end(&mut self, sample: GestureSample) -> Option<SwipeDirection> {
        let active = self.window.active();
        let direction = sample.direction(self.layout.halfway());

        self.window = match direction {
            Some(SwipeDirection::Backward) => self.window.shift_left(),
            Some(SwipeDirection::Forward) => self.window.shift_right(),
            None => self.window,
        };
        self.drag = DragState::Inactive;

        let next = self.window.active();

        match direction {
            Some(direction) => log::debug!("swiped {direction}: {active} -> {next}"),
            None => log::debug!("drag released below threshold, staying on {active}"),
        }

        direction
    }

    /// Jumps straight to `index`, dropping any drag in progress.
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.window = self.window.with_active(index)?;
        self.drag = DragState::Inactive;
        Ok(())
    }

    /// Re-initialises over `size` cards. The active card is kept when it still
    /// exists, otherwise the last card becomes active.
    pub fn resize(&mut self, size: usize) -> Result<()> {
        let active = self.window.active().min(size.saturating_sub(1));
        self.window = IndexWindow::new(size, active)?;
        self.drag = DragState::Inactive;
        log::debug!("carousel resized to {size} cards, active {active}");
        Ok(())
    }

    pub fn visual_parameters(&self, index: usize) -> VisualParameters {
        let slot = self.window.slot_of(index);

        let relative_height = match slot {
            Some(Slot::Active) => 1.0,
            _ => self.layout.unfocused_height_scale,
        };

        let opacity = match slot {
            Some(Slot::Active) => 1.0,
            Some(_) => NEIGHBOR_OPACITY,
            None => 0.0,
        };

        let lateral_offset = match slot {
            Some(slot) => self.drag.offset() + f64::from(slot.step()) * self.layout.pitch(),
            None => self.layout.parked_offset(),
        };

        VisualParameters {
            lateral_offset,
            opacity,
            relative_height,
        }
    }

    pub fn window_label(&self) -> String {
        self.window.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidArgument;

    fn controller(size: usize, active: usize) -> CarouselController {
        let mut c = CarouselController::new(size, CarouselLayout::default()).unwrap();
        c.select(active).unwrap();
        c
    }

    #[test]
    fn test_new_starts_at_first_card() {
        let c = CarouselController::new(7, CarouselLayout::default()).unwrap();
        assert_eq!(c.active(), 0);
        assert_eq!(c.drag(), DragState::Inactive);
        assert_eq!(
            CarouselController::new(0, CarouselLayout::default()).unwrap_err(),
            InvalidArgument::EmptyCarousel
        );
    }

    #[test]
    fn test_drag_update_moves_without_committing() {
        let mut c = controller(7, 2);
        c.on_drag_update(12.0);
        c.on_drag_update(400.0);
        assert_eq!(c.active(), 2);
        assert_eq!(c.drag(), DragState::Active { offset: 400.0 });
        assert_eq!(c.visual_parameters(2).lateral_offset, 400.0);
        assert_eq!(c.visual_parameters(1).lateral_offset, 400.0 - 320.0);
        assert_eq!(c.visual_parameters(0).lateral_offset, 400.0 - 640.0);
        assert_eq!(c.visual_parameters(3).lateral_offset, 400.0 + 320.0);
        assert_eq!(c.visual_parameters(4).lateral_offset, 400.0 + 640.0);
        assert_eq!(c.visual_parameters(5).lateral_offset, 1200.0);
    }

    #[test]
    fn test_drag_end_backward() {
        let mut c = controller(7, 2);
        c.on_drag_update(160.0);
        let direction = c.on_drag_end(GestureSample::new(160.0, 0.0));
        assert_eq!(direction, Some(SwipeDirection::Backward));
        assert_eq!(c.active(), 1);
        assert!(!c.drag().is_dragging());
    }

    #[test]
    fn test_drag_end_forward_wraps() {
        let mut c = controller(7, 6);
        let direction = c.on_drag_end(GestureSample::new(-160.0, 0.0));
        assert_eq!(direction, Some(SwipeDirection::Forward));
        assert_eq!(c.active(), 0);
        assert_eq!(c.window().slots(), [5, 6, 0, 1, 2]);
    }

    #[test]
    fn test_drag_end_below_threshold_snaps_back() {
        let mut c = controller(7, 3);
        c.on_drag_update(50.0);
        assert_eq!(c.on_drag_end(GestureSample::new(50.0, 50.0)), None);
        assert_eq!(c.active(), 3);
        assert_eq!(c.drag(), DragState::Inactive);
        assert_eq!(c.visual_parameters(3).lateral_offset, 0.0);
    }

    #[test]
    fn test_opacity_and_height() {
        let c = controller(7, 0);
        let active = c.visual_parameters(0);
        assert_eq!(active.opacity, 1.0);
        assert_eq!(active.relative_height, 1.0);

        for neighbor in [5, 6, 1, 2] {
            let params = c.visual_parameters(neighbor);
            assert_eq!(params.opacity, 0.75);
            assert_eq!(params.relative_height, 0.8);
        }

        for hidden in [3, 4] {
            let params = c.visual_parameters(hidden);
            assert_eq!(params.opacity, 0.0);
            assert!(!params.is_visible());
        }
    }

    #[test]
    fn test_resize_keeps_or_clamps_active() {
        let mut c = controller(7, 3);
        c.resize(5).unwrap();
        assert_eq!(c.active(), 3);

        c.on_drag_update(30.0);
        c.resize(2).unwrap();
        assert_eq!(c.active(), 1);
        assert_eq!(c.size(), 2);
        assert_eq!(c.drag(), DragState::Inactive);

        assert_eq!(c.resize(0), Err(InvalidArgument::EmptyCarousel));
        assert_eq!(c.size(), 2);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut c = controller(4, 1);
        assert_eq!(
            c.select(4),
            Err(InvalidArgument::IndexOutOfRange { index: 4, size: 4 })
        );
        assert_eq!(c.active(), 1);
    }
}
