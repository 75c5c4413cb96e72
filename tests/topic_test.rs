mod common;
use common::header;
use tour::menu::TOPICS;
use tour::topics::{self, Page};

fn page(run: fn(&mut Page)) -> String {
    let mut page = Page::default();
    run(&mut page);
    page.to_string()
}

#[test]
fn test_every_topic_prints_samples() {
    for topic in TOPICS {
        let s = page(topic.run);
        assert_eq!(s.matches(&header(topic.name)).count(), 1, "{:?}", topic);
        assert!(s.contains("┌─ 1. "), "{:?}", topic);
        assert!(s.contains("   Output:\n"), "{:?}", topic);
        assert!(s.contains("   → "), "{:?}", topic);
    }
}

#[test]
fn test_topics_are_repeatable() {
    for topic in TOPICS {
        assert_eq!(page(topic.run), page(topic.run));
    }
}

#[test]
fn test_defer_drops_in_reverse() {
    let s = page(topics::defer::run);
    assert!(s.contains("   → main\n   → drop third\n   → drop second\n   → drop first\n"));
    assert!(s.contains("   → drop early\n   → after drop\n"));
    assert!(s.contains("   → drop file\n   → Err(\"bad input\")\n"));
}

#[test]
fn test_conditions_fizz_buzz() {
    let s = page(topics::conditions::run);
    assert!(s.contains("→ 1 2 Fizz 4 Buzz Fizz 7 8 Fizz Buzz 11 Fizz 13 14 FizzBuzz\n"));
    assert!(s.contains("→ \"eighty\" is not a port\n"));
}

#[test]
fn test_loops_break_value() {
    let s = page(topics::loops::run);
    assert!(s.contains("→ result = 20\n"));
    assert!(s.contains("→ found = Some((2, 3))\n"));
    assert!(s.contains("→ 9 6 3 0\n"));
}

#[test]
fn test_maps_entry_counts() {
    let s = page(topics::maps::run);
    assert!(s.contains("→ the = 3\n"));
    assert!(s.contains("→ get(\"Zed\") = None\n"));
}
