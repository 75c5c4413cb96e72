use super::Page;

const PI: f64 = 3.14159;
const MAX_USERS: u32 = 100;
const GREETING: &str = "Hello, Rust!";
const SECONDS_PER_DAY: u32 = 60 * 60 * 24;
static APP_NAME: &str = "syntax-tour";

#[derive(Debug, Clone, Copy)]
enum Weekday {
    Sunday,
    Monday,
    Tuesday,
}

const fn kib(n: usize) -> usize {
    n * 1024
}

const BUFFER: usize = kib(4);

pub fn run(page: &mut Page) {
    page.header("Constants");

    page.section("Declaring Constants");
    page.code("const PI: f64 = 3.14159;\nconst MAX_USERS: u32 = 100;\nconst GREETING: &str = \"Hello, Rust!\";");
    page.output(format!("PI = {}", PI));
    page.output(format!("MAX_USERS = {}", MAX_USERS));
    page.output(format!("GREETING = {}", GREETING));
    page.note("Constants always need a type annotation");
    page.blank();

    page.section("Constant Expressions");
    page.code("const SECONDS_PER_DAY: u32 = 60 * 60 * 24;");
    page.output(format!("SECONDS_PER_DAY = {}", SECONDS_PER_DAY));
    page.code("const fn kib(n: usize) -> usize { n * 1024 }\nconst BUFFER: usize = kib(4);");
    page.output(format!("BUFFER = {}", BUFFER));
    page.blank();

    page.section("Statics");
    page.code("static APP_NAME: &str = \"syntax-tour\";");
    page.output(format!("APP_NAME = {}", APP_NAME));
    page.note("A static has one fixed address; a const is inlined where it is used");
    page.blank();

    page.section("Enumerated Constants");
    page.code("enum Weekday { Sunday, Monday, Tuesday }\nWeekday::Tuesday as i32");
    for day in [Weekday::Sunday, Weekday::Monday, Weekday::Tuesday] {
        page.output(format!("{:?} = {}", day, day as i32));
    }
    page.blank();

    page.section("Constants in Calculations");
    page.code("let radius = 2.0;\nlet area = PI * radius * radius;");
    let radius = 2.0;
    let area = PI * radius * radius;
    page.output(format!("area = {:.2}", area));
}
