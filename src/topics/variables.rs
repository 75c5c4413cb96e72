use super::Page;

pub fn run(page: &mut Page) {
    page.header("Variables");

    page.section("Immutable by Default");
    page.code("let x = 5;");
    let x = 5;
    page.output(format!("x = {}", x));
    page.note("Assigning x = 6 here would not compile");
    page.blank();

    page.section("Mutable Variables with 'mut'");
    page.code("let mut y = 10;\ny = 20;\ny += 5;");
    let mut y = 10;
    page.output(format!("y = {}", y));
    y = 20;
    page.output(format!("y = {}", y));
    y += 5;
    page.output(format!("y = {}", y));
    page.blank();

    page.section("Type Annotations and Inference");
    page.code("let inferred = 42;\nlet explicit: u8 = 42;\nlet ratio = 0.5;");
    let inferred = 42;
    let explicit: u8 = 42;
    let ratio = 0.5;
    page.output(format!("inferred: {} ({})", inferred, type_name(&inferred)));
    page.output(format!("explicit: {} ({})", explicit, type_name(&explicit)));
    page.output(format!("ratio: {} ({})", ratio, type_name(&ratio)));
    page.blank();

    page.section("Shadowing");
    page.code("let z = 5;\nlet z = z + 1;\n{\n    let z = z * 2;\n}");
    let z = 5;
    let z = z + 1;
    {
        let z = z * 2;
        page.output(format!("inner z = {}", z));
    }
    page.output(format!("outer z = {}", z));
    page.code("let spaces = \"   \";\nlet spaces = spaces.len();");
    let spaces = "   ";
    let spaces = spaces.len();
    page.output(format!("spaces = {} (shadowing may change the type)", spaces));
    page.blank();

    page.section("Declare First, Assign Later");
    page.code("let later;\nlater = \"assigned after declaration\";");
    let later;
    later = "assigned after declaration";
    page.output(later);
    page.note("Reading a variable before it is assigned does not compile");
    page.blank();

    page.section("Destructuring Several Bindings");
    page.code("let (first, second) = (\"First\", 2);");
    let (first, second) = ("First", 2);
    page.output(format!("first = {}, second = {}", first, second));
    page.blank();

    page.section("Default Values");
    page.code("let number: i32 = Default::default();\nlet text: String = Default::default();\nlet flag: bool = Default::default();");
    let number: i32 = Default::default();
    let text: String = Default::default();
    let flag: bool = Default::default();
    page.output(format!("number = {}, text = {:?}, flag = {}", number, text, flag));
    page.note("Rust has no implicit zero values; defaults are requested explicitly");
}

fn type_name<T>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}
