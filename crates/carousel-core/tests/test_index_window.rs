use carousel_core::{IndexWindow, InvalidArgument, Slot};
use std::collections::HashSet;
use strum::IntoEnumIterator;

#[test]
fn every_slot_is_in_range() {
    for size in 1..=12 {
        for active in 0..size {
            let window = IndexWindow::new(size, active).unwrap();
            for index in window.slots() {
                assert!(index < size, "size {size}, active {active}: {index}");
            }
        }
    }
}

#[test]
fn slots_are_distinct_from_five_cards() {
    for size in 5..=12 {
        for active in 0..size {
            let window = IndexWindow::new(size, active).unwrap();
            let unique: HashSet<_> = window.slots().into_iter().collect();
            assert_eq!(unique.len(), 5, "size {size}, active {active}");

            for slot in Slot::iter() {
                assert_eq!(window.slot_of(window.index_at(slot)), Some(slot));
            }
        }
    }
}

#[test]
fn with_same_active_is_equal() {
    for size in 1..=8 {
        for active in 0..size {
            let window = IndexWindow::new(size, active).unwrap();
            assert_eq!(window.with_active(active).unwrap(), window);
            assert_eq!(IndexWindow::new(size, active).unwrap(), window);
        }
    }
}

#[test]
fn active_out_of_range_is_rejected() {
    let window = IndexWindow::new(5, 2).unwrap();
    assert_eq!(
        window.with_active(5).unwrap_err(),
        InvalidArgument::IndexOutOfRange { index: 5, size: 5 }
    );
    assert_eq!(
        IndexWindow::new(0, 0).unwrap_err().to_string(),
        "carousel needs at least one card"
    );
}
