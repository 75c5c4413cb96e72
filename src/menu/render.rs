//! Text for everything the dispatcher shows besides topic content.
//! Every function here is pure; the frontends do the writing.

use super::{Topic, WIDTH};

pub const PROMPT: &str = "👉 Enter your choice: ";
pub const CONTINUE: &str = "Press Enter to continue...";

pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(WIDTH).collect()
}

pub fn divider() -> String {
    rule('─')
}

pub fn welcome() -> String {
    banner(&["WELCOME TO THE RUST SYNTAX TOUR", "", "Learn Rust one topic at a time"])
}

pub fn goodbye() -> String {
    banner(&["Thank you for touring Rust!", "", "Keep coding and have fun!"])
}

pub fn input_closed() -> String {
    format!("\n{}\nInput closed. Leaving the tour.\n", divider())
}

pub fn menu(topics: &[Topic]) -> String {
    let heavy = rule('═');
    let mut s = String::new();
    s.push_str(&format!("\n{}\n📚  AVAILABLE TOPICS\n{}\n\n", heavy, heavy));
    for (index, topic) in topics.iter().enumerate() {
        s.push_str(&format!("  {:2}. {:<20}", topic.id, topic.name));
        if (index + 1) % 2 == 0 {
            s.push('\n');
        }
    }
    if topics.len() % 2 != 0 {
        s.push('\n');
    }
    s.push('\n');
    s.push_str(&format!("{}\n   0. Exit Tutorial\n{}\n\n", divider(), heavy));
    s
}

fn banner(lines: &[&str]) -> String {
    let inner = WIDTH - 4;
    let edge: String = std::iter::repeat('═').take(inner).collect();
    let mut s = format!("\n{}\n╔{}╗\n", rule('═'), edge);
    let blank = format!("║{:inner$}║\n", "", inner = inner);
    s.push_str(&blank);
    for line in lines {
        s.push_str(&format!("║{:^inner$}║\n", line, inner = inner));
    }
    s.push_str(&blank);
    s.push_str(&format!("╚{}╝\n{}\n\n", edge, rule('═')));
    s
}
