use super::Page;

pub fn run(page: &mut Page) {
    page.header("Loops");

    page.section("for over a Range");
    page.code("for i in 1..=5 { .. }");
    let counted: Vec<String> = (1..=5).map(|i| i.to_string()).collect();
    page.output(counted.join(" "));
    page.code("for i in (0..10).step_by(3).rev() { .. }");
    let stepped: Vec<String> = (0..10).step_by(3).rev().map(|i| i.to_string()).collect();
    page.output(stepped.join(" "));
    page.blank();

    page.section("while");
    page.code("let mut n = 1;\nwhile n < 100 { n *= 3; }");
    let mut n = 1;
    while n < 100 {
        n *= 3;
    }
    page.output(format!("n = {}", n));
    page.blank();

    page.section("loop with a Value");
    page.code("let mut count = 0;\nlet result = loop {\n    count += 1;\n    if count == 10 { break count * 2; }\n};");
    let mut count = 0;
    let result = loop {
        count += 1;
        if count == 10 {
            break count * 2;
        }
    };
    page.output(format!("result = {}", result));
    page.blank();

    page.section("continue");
    page.code("for i in 1..=10 {\n    if i % 2 == 0 { continue; }\n}");
    let mut odds = Vec::new();
    for i in 1..=10 {
        if i % 2 == 0 {
            continue;
        }
        odds.push(i.to_string());
    }
    page.output(odds.join(" "));
    page.blank();

    page.section("Labeled Breaks");
    page.code("'outer: for x in 0..5 {\n    for y in 0..5 {\n        if x * y == 6 { break 'outer; }\n    }\n}");
    let mut found = None;
    'outer: for x in 0..5 {
        for y in 0..5 {
            if x * y == 6 {
                found = Some((x, y));
                break 'outer;
            }
        }
    }
    page.output(format!("found = {:?}", found));
    page.blank();

    page.section("Iterating Collections");
    page.code("let fruits = [\"apple\", \"banana\", \"cherry\"];\nfor (i, fruit) in fruits.iter().enumerate() { .. }");
    let fruits = ["apple", "banana", "cherry"];
    for (i, fruit) in fruits.iter().enumerate() {
        page.output(format!("{}: {}", i, fruit));
    }
    page.blank();

    page.section("Iterator Adapters Instead of Loops");
    page.code("(1..=10).filter(|n| n % 3 == 0).map(|n| n * n).sum::<u32>()");
    page.output((1..=10u32).filter(|n| n % 3 == 0).map(|n| n * n).sum::<u32>());
}
