use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;

/// Live horizontal translation of the gesture in progress, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Inactive,
    Active {
        offset: f64,
    },
}

impl DragState {
    pub fn offset(&self) -> f64 {
        match self {
            Self::Inactive => 0.0,
            Self::Active { offset } => *offset,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Terminal sample of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureSample {
    pub translation_x: f64,
    pub predicted_end_translation_x: f64,
}

impl GestureSample {
    pub fn new(translation_x: f64, predicted_end_translation_x: f64) -> Self {
        Self {
            translation_x,
            predicted_end_translation_x,
        }
    }

    /// Resolves which way the gesture commits. Either the actual or the
    /// predicted translation crossing `halfway` is enough.
    pub fn direction(&self, halfway: f64) -> Option<SwipeDirection> {
        if self.predicted_end_translation_x > halfway || self.translation_x > halfway {
            Some(SwipeDirection::Backward)
        } else if self.predicted_end_translation_x < -halfway || self.translation_x < -halfway {
            Some(SwipeDirection::Forward)
        } else {
            None
        }
    }
}

/// Backward selects the left neighbour (content dragged to the right),
/// Forward selects the right neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum SwipeDirection {
    Backward,
    Forward,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_offset_is_zero() {
        assert_eq!(DragState::default().offset(), 0.0);
        assert!(!DragState::Inactive.is_dragging());

        let drag = DragState::Active { offset: -42.5 };
        assert_eq!(drag.offset(), -42.5);
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_direction_thresholds() {
        let halfway = 153.0;
        let cases = vec![
            ((160.0, 0.0), Some(SwipeDirection::Backward)),
            ((0.0, 160.0), Some(SwipeDirection::Backward)),
            ((-160.0, 0.0), Some(SwipeDirection::Forward)),
            ((0.0, -160.0), Some(SwipeDirection::Forward)),
            ((153.0, 153.0), None),
            ((50.0, 50.0), None),
        ];

        for ((translation, predicted), expected) in cases {
            let sample = GestureSample::new(translation, predicted);
            assert_eq!(sample.direction(halfway), expected, "{sample:?}");
        }
    }

    #[test]
    fn test_backward_checked_first() {
        // A fling that reverses: actual translation past the left threshold,
        // prediction past the right one.
        let sample = GestureSample::new(-200.0, 200.0);
        assert_eq!(sample.direction(153.0), Some(SwipeDirection::Backward));
    }
}
