use super::Page;

pub fn run(page: &mut Page) {
    page.header("Conditions");

    page.section("if / else if / else");
    page.code("let temperature = 23;\nif temperature > 30 { .. } else if temperature > 20 { .. } else { .. }");
    let temperature = 23;
    if temperature > 30 {
        page.output("hot");
    } else if temperature > 20 {
        page.output("warm");
    } else {
        page.output("cold");
    }
    page.note("Conditions must be bool; there is no truthiness");
    page.blank();

    page.section("if Is an Expression");
    page.code("let parity = if n % 2 == 0 { \"even\" } else { \"odd\" };");
    let n = 7;
    let parity = if n % 2 == 0 { "even" } else { "odd" };
    page.output(format!("{} is {}", n, parity));
    page.blank();

    page.section("match on Values and Ranges");
    page.code("match score {\n    90..=100 => 'A',\n    80..=89 => 'B',\n    70..=79 => 'C',\n    _ => 'F',\n}");
    for score in [95, 83, 71, 42] {
        page.output(format!("{} → {}", score, grade(score)));
    }
    page.blank();

    page.section("match with Guards and Alternatives");
    page.code("match day {\n    \"Saturday\" | \"Sunday\" => \"weekend\",\n    d if d.starts_with('T') => \"a T-day\",\n    _ => \"weekday\",\n}");
    for day in ["Sunday", "Tuesday", "Friday"] {
        let kind = match day {
            "Saturday" | "Sunday" => "weekend",
            d if d.starts_with('T') => "a T-day",
            _ => "weekday",
        };
        page.output(format!("{} is {}", day, kind));
    }
    page.blank();

    page.section("if let and let else");
    page.code("if let Some(v) = \"42\".parse::<i32>().ok() { .. }\nlet Ok(port) = \"x\".parse::<u16>() else { .. };");
    if let Ok(value) = "42".parse::<i32>() {
        page.output(format!("parsed {}", value));
    }
    page.output(port("8080"));
    page.output(port("eighty"));
    page.blank();

    page.section("Matching Tuples");
    page.code("match (x % 3, x % 5) {\n    (0, 0) => \"FizzBuzz\",\n    (0, _) => \"Fizz\",\n    (_, 0) => \"Buzz\",\n    _ => ..,\n}");
    let line: Vec<String> = (1..=15).map(fizz_buzz).collect();
    page.output(line.join(" "));
}

fn grade(score: u32) -> char {
    match score {
        90..=100 => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        _ => 'F',
    }
}

fn port(text: &str) -> String {
    let Ok(port) = text.parse::<u16>() else {
        return format!("{:?} is not a port", text);
    };
    format!("port {}", port)
}

fn fizz_buzz(x: u32) -> String {
    match (x % 3, x % 5) {
        (0, 0) => "FizzBuzz".to_string(),
        (0, _) => "Fizz".to_string(),
        (_, 0) => "Buzz".to_string(),
        _ => x.to_string(),
    }
}
