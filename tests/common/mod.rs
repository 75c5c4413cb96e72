#![allow(dead_code)]
use std::io::Cursor;
use tour::menu::{Event, Runtime};
use tour::term::stdio;

/// Drains events until the runtime asks for input or stops.
pub fn exec(runtime: &mut Runtime<'_>) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Print(ps) => s.push_str(&ps),
            Event::Error(es) => {
                s.push_str(&es);
                s.push('\n');
            }
            Event::Running => {}
            Event::Input(prompt) => {
                s.push_str(prompt);
                break;
            }
            Event::Stopped => break,
        }
    }
    s
}

/// Runs a whole session through the stdio frontend.
pub fn session(input: &str) -> String {
    let mut runtime = Runtime::default();
    let mut output = Vec::new();
    stdio::run(&mut runtime, &mut Cursor::new(input.as_bytes()), &mut output).unwrap();
    assert!(!runtime.is_running());
    String::from_utf8(output).unwrap()
}

pub fn header(name: &str) -> String {
    format!("RUST {} TUTORIAL", name.to_uppercase())
}
