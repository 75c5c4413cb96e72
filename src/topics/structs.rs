use super::Page;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

impl Person {
    fn new(name: &str, age: u32) -> Person {
        Person {
            name: name.to_string(),
            age,
        }
    }

    fn greet(&self) -> String {
        format!("Hi, I'm {} and I'm {}", self.name, self.age)
    }

    fn birthday(&mut self) {
        self.age += 1;
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

#[derive(Debug, Default)]
struct Config {
    verbose: bool,
    retries: u8,
    name: String,
}

struct Meters(f64);

#[derive(Debug)]
struct Employee {
    person: Person,
    role: &'static str,
}

pub fn run(page: &mut Page) {
    page.header("Structs");

    page.section("Defining and Creating");
    page.code("struct Person { name: String, age: u32 }\nlet alice = Person { name: \"Alice\".to_string(), age: 30 };");
    let alice = Person {
        name: "Alice".to_string(),
        age: 30,
    };
    page.output(format!("{:?}", alice));
    page.output(format!("alice.name = {}", alice.name));
    page.blank();

    page.section("Associated Functions and Methods");
    page.code("impl Person {\n    fn new(name: &str, age: u32) -> Person { .. }\n    fn greet(&self) -> String { .. }\n    fn birthday(&mut self) { self.age += 1; }\n}");
    let mut bob = Person::new("Bob", 41);
    page.output(bob.greet());
    bob.birthday();
    page.output(format!("after birthday: {}", bob));
    page.blank();

    page.section("Struct Update Syntax and Defaults");
    page.code("#[derive(Default)]\nstruct Config { verbose: bool, retries: u8, name: String }\nlet config = Config { retries: 3, ..Default::default() };");
    let config = Config {
        retries: 3,
        ..Default::default()
    };
    page.output(format!("{:?}", config));
    page.output(format!("verbose = {}, name = {:?}", config.verbose, config.name));
    page.blank();

    page.section("Tuple Structs");
    page.code("struct Meters(f64);\nlet height = Meters(1.82);");
    let height = Meters(1.82);
    page.output(format!("height.0 = {}", height.0));
    page.blank();

    page.section("Composition");
    page.code("struct Employee { person: Person, role: &'static str }");
    let employee = Employee {
        person: alice.clone(),
        role: "engineer",
    };
    page.output(format!("{} works as an {}", employee.person.name, employee.role));
    page.blank();

    page.section("Comparing and Copying");
    page.code("let twin = alice.clone();\ntwin == alice");
    let twin = alice.clone();
    page.output(format!("twin == alice: {}", twin == alice));
    page.note("Assigning a struct moves it unless the type is Copy");
}
