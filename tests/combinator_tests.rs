//! Unit tests for function combinators.
//!
//! Tests for identity, constant, flip, then, compose, call, call_times, Pipe
//! and saturate.

#![cfg(feature = "combinator")]

use fnkit::combinator::{
    Pipe, call, call_times, compose, constant, flip, flip_mut, identity, saturate, then,
};
use rstest::rstest;

// =============================================================================
// identity function tests
// =============================================================================

#[rstest]
#[case(42)]
#[case(-100)]
#[case(0)]
fn test_identity_returns_same_integer(#[case] value: i32) {
    assert_eq!(identity(value), value);
}

#[rstest]
fn test_identity_returns_same_string() {
    assert_eq!(identity(String::from("world")), "world");
}

#[rstest]
fn test_identity_with_custom_type() {
    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    let point = Point { x: 1, y: 2 };
    assert_eq!(identity(point.clone()), point);
}

// =============================================================================
// constant function tests
// =============================================================================

#[rstest]
fn test_constant_always_returns_same_integer() {
    let always_five = constant(5);
    assert_eq!(always_five(100), 5);
    assert_eq!(always_five(-50), 5);
}

#[rstest]
fn test_constant_with_owned_string_clones_each_call() {
    let always_hello = constant(String::from("hello"));
    let first = always_hello(());
    let second = always_hello(());
    assert_eq!(first, second);
    assert_eq!(first, "hello");
}

// =============================================================================
// flip function tests
// =============================================================================

#[rstest]
fn test_flip_swaps_arguments_subtract() {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    let flipped_subtract = flip(subtract);
    assert_eq!(flipped_subtract(10, 3), -7);
}

#[rstest]
fn test_flip_with_different_types() {
    fn repeat_string(text: &str, count: usize) -> String {
        text.repeat(count)
    }

    let flipped = flip(repeat_string);
    assert_eq!(flipped(3, "ab"), "ababab");
}

#[rstest]
fn test_flip_mut_keeps_state_between_calls() {
    let mut pushed = Vec::new();
    {
        let mut push = flip_mut(|value: i32, label: char| pushed.push((label, value)));
        push('a', 1);
        push('b', 2);
    }
    assert_eq!(pushed, vec![('a', 1), ('b', 2)]);
}

// =============================================================================
// then / compose tests
// =============================================================================

#[rstest]
#[case(0, 2, 1)]
#[case(5, 12, 11)]
#[case(-3, -4, -5)]
fn test_then_and_compose(#[case] input: i32, #[case] via_then: i32, #[case] via_compose: i32) {
    let add_one = |x: i32| x + 1;
    let double = |x: i32| x * 2;

    assert_eq!(then(add_one, double)(input), via_then);
    assert_eq!(compose(add_one, double)(input), via_compose);
}

#[rstest]
fn test_compose_type_conversion() {
    fn to_string(x: i32) -> String {
        x.to_string()
    }
    fn get_length(s: String) -> usize {
        s.len()
    }

    assert_eq!(compose(get_length, to_string)(12345), 5);
    assert_eq!(then(to_string, get_length)(-7), 2);
}

#[rstest]
fn test_composed_function_can_be_reused() {
    let square_then_negate = then(|x: i32| x * x, |x: i32| -x);
    let results: Vec<i32> = (1..=3).map(&square_then_negate).collect();
    assert_eq!(results, vec![-1, -4, -9]);
    assert_eq!(square_then_negate(4), -16);
}

// =============================================================================
// call / call_times / Pipe tests
// =============================================================================

#[rstest]
fn test_call_applies_function() {
    assert_eq!(call("text", str::len), 4);
}

#[rstest]
#[case(0, 1)]
#[case(1, 3)]
#[case(4, 81)]
fn test_call_times_repeats(#[case] times: usize, #[case] expected: i64) {
    assert_eq!(call_times(1, |x| x * 3, times), expected);
}

#[rstest]
fn test_pipe_chains_left_to_right() {
    let result = 3
        .pipe(|x: i32| x + 1)
        .pipe(|x| x * 10)
        .pipe(|x| format!("<{x}>"));
    assert_eq!(result, "<40>");
}

#[rstest]
fn test_pipe_times_matches_call_times() {
    let step = |text: String| text + "!";
    assert_eq!(
        String::from("hey").pipe_times(step, 3),
        call_times(String::from("hey"), step, 3)
    );
}

// =============================================================================
// saturate tests
// =============================================================================

#[rstest]
fn test_saturate_with_identity_returns_initial() {
    assert_eq!(saturate(vec![3, 1, 2], |values: &Vec<i32>| values.clone()), vec![3, 1, 2]);
}

#[rstest]
fn test_saturate_bubble_sort_pass_reaches_sorted() {
    let bubble_pass = |values: &Vec<i32>| {
        let mut next = values.clone();
        for index in 1..next.len() {
            if next[index - 1] > next[index] {
                next.swap(index - 1, index);
            }
        }
        next
    };

    assert_eq!(saturate(vec![5, 1, 4, 2, 3], bubble_pass), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_saturate_integer_square_root_by_newton() {
    let target = 1_000_000_u64;
    let newton = |&guess: &u64| {
        let next = (guess + target / guess) / 2;
        if next >= guess { guess } else { next }
    };

    assert_eq!(saturate(target, newton), 1000);
}
