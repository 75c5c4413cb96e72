use super::Page;

pub fn run(page: &mut Page) {
    page.header("Functions");

    page.section("Parameters and Return Values");
    page.code("fn add(a: i32, b: i32) -> i32 {\n    a + b\n}");
    page.output(format!("add(3, 4) = {}", add(3, 4)));
    page.note("The last expression without a semicolon is the return value");
    page.blank();

    page.section("Returning Several Values");
    page.code("fn rectangle(length: u32, width: u32) -> (u32, u32) {\n    (length * width, 2 * (length + width))\n}");
    let (area, perimeter) = rectangle(5, 3);
    page.output(format!("area = {}, perimeter = {}", area, perimeter));
    page.blank();

    page.section("Returning Errors with Result");
    page.code("fn divide(a: f64, b: f64) -> Result<f64, String> {\n    if b == 0.0 { return Err(\"division by zero\".into()); }\n    Ok(a / b)\n}");
    page.output(format!("divide(10.0, 4.0) = {:?}", divide(10.0, 4.0)));
    page.output(format!("divide(1.0, 0.0) = {:?}", divide(1.0, 0.0)));
    page.blank();

    page.section("Slices Instead of Variadics");
    page.code("fn sum(numbers: &[i32]) -> i32 { numbers.iter().sum() }");
    page.output(format!("sum(&[]) = {}", sum(&[])));
    page.output(format!("sum(&[1, 2, 3, 4]) = {}", sum(&[1, 2, 3, 4])));
    page.blank();

    page.section("Closures");
    page.code("let offset = 10;\nlet shift = |x: i32| x + offset;");
    let offset = 10;
    let shift = |x: i32| x + offset;
    page.output(format!("shift(5) = {}", shift(5)));
    page.blank();

    page.section("Returning Closures");
    page.code("fn multiplier(factor: i32) -> impl Fn(i32) -> i32 {\n    move |x| x * factor\n}");
    let double = multiplier(2);
    let triple = multiplier(3);
    page.output(format!("double(7) = {}, triple(7) = {}", double(7), triple(7)));
    page.blank();

    page.section("Functions as Values");
    page.code("fn apply(f: fn(i32, i32) -> i32, a: i32, b: i32) -> i32 { f(a, b) }");
    page.output(format!("apply(add, 2, 9) = {}", apply(add, 2, 9)));
    page.blank();

    page.section("Recursion");
    page.code("fn factorial(n: u64) -> u64 {\n    if n <= 1 { 1 } else { n * factorial(n - 1) }\n}");
    page.output(format!("factorial(10) = {}", factorial(10)));
}

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn rectangle(length: u32, width: u32) -> (u32, u32) {
    (length * width, 2 * (length + width))
}

fn divide(a: f64, b: f64) -> Result<f64, String> {
    if b == 0.0 {
        return Err("division by zero".into());
    }
    Ok(a / b)
}

fn sum(numbers: &[i32]) -> i32 {
    numbers.iter().sum()
}

fn multiplier(factor: i32) -> impl Fn(i32) -> i32 {
    move |x| x * factor
}

fn apply(f: fn(i32, i32) -> i32, a: i32, b: i32) -> i32 {
    f(a, b)
}

fn factorial(n: u64) -> u64 {
    if n <= 1 {
        1
    } else {
        n * factorial(n - 1)
    }
}
