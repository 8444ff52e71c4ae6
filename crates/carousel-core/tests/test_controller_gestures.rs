use carousel_core::{
    CardSize, CarouselController, CarouselLayout, DragState, GestureSample, SwipeDirection,
    SwipeTracker,
};
use std::time::Duration;

fn layout() -> CarouselLayout {
    CarouselLayout {
        card_size: CardSize {
            width: 300.0,
            height: 500.0,
        },
        ..CarouselLayout::default()
    }
}

#[test]
fn full_gesture_commits_backward() {
    let mut c = CarouselController::new(7, layout()).unwrap();
    c.select(2).unwrap();

    for x in [10.0, 60.0, 120.0, 160.0] {
        c.on_drag_update(x);
    }
    assert_eq!(c.active(), 2);

    assert_eq!(
        c.on_drag_end(GestureSample::new(160.0, 0.0)),
        Some(SwipeDirection::Backward)
    );
    assert_eq!(c.active(), 1);
    assert_eq!(c.drag(), DragState::Inactive);
    assert_eq!(c.visual_parameters(1).lateral_offset, 0.0);
    assert_eq!(c.window_label(), "6 0 1 2 3");
}

#[test]
fn snap_point_after_every_release() {
    let samples = [
        GestureSample::new(160.0, 0.0),
        GestureSample::new(-160.0, 0.0),
        GestureSample::new(10.0, -400.0),
        GestureSample::new(50.0, 50.0),
    ];
    for size in 1..=7 {
        let mut c = CarouselController::new(size, layout()).unwrap();
        for sample in samples {
            c.on_drag_update(sample.translation_x);
            c.on_drag_end(sample);
            assert!(!c.drag().is_dragging());
            let params = c.visual_parameters(c.active());
            assert_eq!(params.lateral_offset, 0.0);
            assert_eq!(params.opacity, 1.0);
        }
    }
}

#[test]
fn single_card_never_moves() {
    let mut c = CarouselController::new(1, layout()).unwrap();
    c.on_drag_end(GestureSample::new(-500.0, -900.0));
    assert_eq!(c.active(), 0);
    c.on_drag_end(GestureSample::new(500.0, 900.0));
    assert_eq!(c.active(), 0);
}

#[test]
fn hidden_cards_only_beyond_five() {
    let mut c = CarouselController::new(5, layout()).unwrap();
    assert!((0..5).all(|i| c.visual_parameters(i).opacity > 0.0));

    c.resize(9).unwrap();
    let hidden: Vec<_> = (0..9)
        .filter(|&i| c.visual_parameters(i).opacity == 0.0)
        .collect();
    assert_eq!(hidden, vec![3, 4, 5, 6]);
    assert_eq!(c.visual_parameters(4).lateral_offset, 1200.0);
}

#[test]
fn quick_flick_commits_through_prediction() {
    let mut c = CarouselController::new(7, layout()).unwrap();
    let mut tracker = SwipeTracker::new();

    for (ms, x) in [(0, 0.0), (16, -20.0), (32, -45.0), (48, -70.0)] {
        tracker.push(x, Duration::from_millis(ms));
        c.on_drag_update(tracker.translation());
    }

    let sample = tracker.sample();
    assert!(sample.translation_x > -153.0);
    assert!(sample.predicted_end_translation_x < -153.0);
    assert_eq!(c.on_drag_end(sample), Some(SwipeDirection::Forward));
    assert_eq!(c.active(), 1);
}
