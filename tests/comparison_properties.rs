// SPDX-License-Identifier: MPL-2.0
//! Property tests for the comparison drag machine.

use proptest::prelude::*;
use vertical_cor::domain::comparison::{map_pointer, ComparisonSlider, ContainerSpan, DragPhase};

#[derive(Debug, Clone)]
enum Input {
    Press(f32),
    Move(f32),
    Touch(Vec<f32>),
    Release,
    Abandon,
}

fn coordinate() -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => -2000.0f32..4000.0,
        1 => Just(f32::NAN),
        1 => Just(f32::INFINITY),
        1 => Just(f32::NEG_INFINITY),
    ]
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        coordinate().prop_map(Input::Press),
        coordinate().prop_map(Input::Move),
        prop::collection::vec(coordinate(), 0..3).prop_map(Input::Touch),
        Just(Input::Release),
        Just(Input::Abandon),
    ]
}

fn span() -> impl Strategy<Value = ContainerSpan> {
    prop_oneof![
        6 => (-500.0f32..1500.0, 1.0f32..2000.0).prop_map(|(left, width)| ContainerSpan::new(left, width)),
        1 => (-500.0f32..1500.0).prop_map(|left| ContainerSpan::new(left, 0.0)),
        1 => (-500.0f32..1500.0, -500.0f32..0.0).prop_map(|(left, width)| ContainerSpan::new(left, width)),
    ]
}

fn apply(slider: &mut ComparisonSlider, input: &Input, span: ContainerSpan) {
    match input {
        Input::Press(x) => {
            slider.press(*x, span);
        }
        Input::Move(x) => {
            slider.pointer_moved(*x, span);
        }
        Input::Touch(points) => {
            slider.touch_moved(points, span);
        }
        Input::Release => {
            slider.release();
        }
        Input::Abandon => {
            slider.abandon();
        }
    }
}

proptest! {
    #[test]
    fn split_stays_within_bounds(span in span(), inputs in prop::collection::vec(input(), 0..64)) {
        let mut slider = ComparisonSlider::new();
        for input in &inputs {
            apply(&mut slider, input, span);
            let value = slider.split().value();
            prop_assert!(value.is_finite());
            prop_assert!((0.0..=100.0).contains(&value), "split out of range: {value}");
        }
    }

    #[test]
    fn idle_mouse_moves_never_move_the_divider(span in span(), moves in prop::collection::vec(coordinate(), 1..32)) {
        let mut slider = ComparisonSlider::new();
        let before = slider.split();
        for x in moves {
            prop_assert!(!slider.pointer_moved(x, span));
        }
        prop_assert_eq!(slider.split(), before);
        prop_assert_eq!(slider.phase(), DragPhase::Idle);
    }

    #[test]
    fn release_always_ends_in_idle(span in span(), inputs in prop::collection::vec(input(), 0..32)) {
        let mut slider = ComparisonSlider::new();
        for input in &inputs {
            apply(&mut slider, input, span);
        }
        slider.release();
        prop_assert!(!slider.is_dragging());
    }

    #[test]
    fn malformed_geometry_keeps_previous_split(left in -500.0f32..500.0, x in -1000.0f32..1000.0) {
        let mut slider = ComparisonSlider::new();
        let previous = slider.split();
        slider.touch_moved(&[x], ContainerSpan::new(left, 0.0));
        prop_assert_eq!(slider.split(), previous);
    }

    #[test]
    fn mapping_is_monotonic(span in span(), a in -2000.0f32..4000.0, b in -2000.0f32..4000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if let (Some(low), Some(high)) = (map_pointer(low, span), map_pointer(high, span)) {
            prop_assert!(low.value() <= high.value());
        }
    }

    #[test]
    fn touch_uses_only_the_first_point(
        left in 0.0f32..500.0,
        width in 10.0f32..1000.0,
        first in 0.0f32..1.0,
        rest in prop::collection::vec(-1000.0f32..3000.0, 0..4),
    ) {
        let span = ContainerSpan::new(left, width);
        let x = left + first * width;
        let mut points = vec![x];
        points.extend(rest);

        let mut single = ComparisonSlider::new();
        single.touch_moved(&[x], span);
        let mut multi = ComparisonSlider::new();
        multi.touch_moved(&points, span);

        prop_assert_eq!(single.split(), multi.split());
    }
}
