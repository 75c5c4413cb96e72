mod common;
use common::*;
use tour::menu::render;

#[test]
fn test_topic_then_exit() {
    let s = session("4\n\n0\n");
    assert!(s.starts_with(&render::welcome()));
    assert_eq!(s.matches(&header("Arrays")).count(), 1);
    assert_eq!(s.matches("AVAILABLE TOPICS").count(), 2);
    assert_eq!(s.matches(render::CONTINUE).count(), 1);
    assert!(s.ends_with(&render::goodbye()));
    assert!(!s.contains(&render::input_closed()));
}

#[test]
fn test_invalid_then_exit() {
    let s = session("99\n0\n");
    assert_eq!(s.matches("Invalid choice!").count(), 1);
    assert!(!s.contains(render::CONTINUE));
    assert!(s.ends_with(&render::goodbye()));
}

#[test]
fn test_empty_input_leaves_gracefully() {
    let s = session("");
    assert!(s.starts_with(&render::welcome()));
    assert!(s.ends_with(&render::input_closed()));
    assert!(!s.contains(&render::goodbye()));
}

#[test]
fn test_garbage_does_not_desync() {
    let s = session("abc def 3\n5\n\n0\n");
    assert_eq!(s.matches("Invalid choice!").count(), 1);
    assert!(!s.contains(&header("Constants")));
    assert_eq!(s.matches(&header("Slices")).count(), 1);
    assert!(s.ends_with(&render::goodbye()));
}

#[test]
fn test_trailing_text_after_choice_is_discarded() {
    let s = session("8 9 10\n\n0\n");
    assert_eq!(s.matches(&header("Loops")).count(), 1);
    assert!(!s.contains(&header("Functions")));
    assert!(!s.contains("Invalid choice!"));
}

#[test]
fn test_end_of_input_during_pause() {
    let s = session("3\n");
    assert_eq!(s.matches(&header("Data Types")).count(), 1);
    assert!(s.ends_with(&render::input_closed()));
}

#[test]
fn test_missing_final_newline() {
    let s = session("0");
    assert!(s.ends_with(&render::goodbye()));
}

#[test]
fn test_oversized_line_is_one_invalid_choice() {
    let mut input = "9".repeat(5_000);
    input.push_str("\n0\n");
    let s = session(&input);
    assert_eq!(s.matches("Invalid choice!").count(), 1);
    assert!(s.ends_with(&render::goodbye()));
}
