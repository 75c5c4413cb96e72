//! Rust has no `defer`; cleanup runs from `Drop` when a value leaves scope.

use super::Page;
use std::cell::RefCell;

struct Guard<'a> {
    name: &'static str,
    log: &'a RefCell<Vec<String>>,
}

impl<'a> Guard<'a> {
    fn new(name: &'static str, log: &'a RefCell<Vec<String>>) -> Guard<'a> {
        Guard { name, log }
    }
}

impl Drop for Guard<'_> {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("drop {}", self.name));
    }
}

fn flush(page: &mut Page, log: &RefCell<Vec<String>>) {
    for entry in log.borrow_mut().drain(..) {
        page.output(entry);
    }
}

pub fn run(page: &mut Page) {
    page.header("Defer");
    let log = RefCell::new(Vec::new());

    page.section("Cleanup at the End of Scope");
    page.code("{\n    let _guard = Guard::new(\"cleanup\");\n    println!(\"working\");\n}  // drop runs here");
    {
        let _guard = Guard::new("cleanup", &log);
        log.borrow_mut().push("working".to_string());
    }
    flush(page, &log);
    page.blank();

    page.section("Reverse Order of Declaration");
    page.code("let _first = Guard::new(\"first\");\nlet _second = Guard::new(\"second\");\nlet _third = Guard::new(\"third\");");
    {
        let _first = Guard::new("first", &log);
        let _second = Guard::new("second", &log);
        let _third = Guard::new("third", &log);
        log.borrow_mut().push("main".to_string());
    }
    flush(page, &log);
    page.note("Values drop last-in, first-out, like a stack of defers");
    page.blank();

    page.section("Dropping Early");
    page.code("let guard = Guard::new(\"early\");\ndrop(guard);\nprintln!(\"after drop\");");
    {
        let guard = Guard::new("early", &log);
        drop(guard);
        log.borrow_mut().push("after drop".to_string());
    }
    flush(page, &log);
    page.blank();

    page.section("Captured Values Are Fixed at Creation");
    page.code("let mut i = 1;\nlet msg = format!(\"result: {}\", i);\ni = 2;");
    let mut i = 1;
    let msg = format!("result: {}", i);
    i = 2;
    page.output(format!("i is now {}", i));
    page.output(msg);
    page.blank();

    page.section("Cleanup in Loops");
    page.code("for name in [\"a\", \"b\", \"c\"] {\n    let _guard = Guard::new(name);\n}  // each guard drops per iteration");
    for name in ["a", "b", "c"] {
        let _guard = Guard::new(name, &log);
    }
    flush(page, &log);
    page.blank();

    page.section("Cleanup Survives Early Return");
    page.code("fn process(fail: bool) -> Result<(), &'static str> {\n    let _guard = Guard::new(\"file\");\n    if fail { return Err(\"bad input\"); }\n    Ok(())\n}");
    let result = process(true, &log);
    flush(page, &log);
    page.output(format!("{:?}", result));
    page.note("Drop also runs while a panic unwinds");
}

fn process(fail: bool, log: &RefCell<Vec<String>>) -> Result<(), &'static str> {
    let _guard = Guard::new("file", log);
    if fail {
        return Err("bad input");
    }
    Ok(())
}
