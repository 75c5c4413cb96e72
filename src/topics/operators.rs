use super::Page;

pub fn run(page: &mut Page) {
    page.header("Operators");

    page.section("Arithmetic");
    page.code("let (a, b) = (17, 5);\na + b, a - b, a * b, a / b, a % b");
    let (a, b) = (17, 5);
    page.output(format!("{} + {} = {}", a, b, a + b));
    page.output(format!("{} - {} = {}", a, b, a - b));
    page.output(format!("{} * {} = {}", a, b, a * b));
    page.output(format!("{} / {} = {} (integer division)", a, b, a / b));
    page.output(format!("{} % {} = {}", a, b, a % b));
    page.output(format!("17.0 / 5.0 = {}", 17.0 / 5.0));
    page.blank();

    page.section("Comparison");
    page.code("a == b, a != b, a > b, a <= b");
    page.output(format!("a == b: {}", a == b));
    page.output(format!("a != b: {}", a != b));
    page.output(format!("a > b: {}", a > b));
    page.output(format!("a <= b: {}", a <= b));
    page.blank();

    page.section("Logical");
    page.code("let (t, f) = (true, false);\nt && f, t || f, !t");
    let (t, f) = (true, false);
    page.output(format!("t && f = {}", t && f));
    page.output(format!("t || f = {}", t || f));
    page.output(format!("!t = {}", !t));
    page.blank();

    page.section("Bitwise");
    page.code("let (x, y) = (0b1100u8, 0b1010u8);\nx & y, x | y, x ^ y, x << 2, x >> 2");
    let (x, y) = (0b1100u8, 0b1010u8);
    page.output(format!("x & y = {:04b}", x & y));
    page.output(format!("x | y = {:04b}", x | y));
    page.output(format!("x ^ y = {:04b}", x ^ y));
    page.output(format!("x << 2 = {:b}", x << 2));
    page.output(format!("x >> 2 = {:b}", x >> 2));
    page.output(format!("!x = {:08b}", !x));
    page.blank();

    page.section("Compound Assignment");
    page.code("let mut n = 10;\nn += 5; n -= 3; n *= 2; n /= 4; n %= 4;");
    let mut n = 10;
    n += 5;
    page.output(format!("n += 5 → {}", n));
    n -= 3;
    page.output(format!("n -= 3 → {}", n));
    n *= 2;
    page.output(format!("n *= 2 → {}", n));
    n /= 4;
    page.output(format!("n /= 4 → {}", n));
    n %= 4;
    page.output(format!("n %= 4 → {}", n));
    page.note("Rust has no ++ or -- operators");
    page.blank();

    page.section("Overflow");
    page.code("250u8.checked_add(10), 250u8.wrapping_add(10), 250u8.saturating_add(10)");
    let base = 250u8;
    page.output(format!("checked = {:?}", base.checked_add(10)));
    page.output(format!("wrapping = {}", base.wrapping_add(10)));
    page.output(format!("saturating = {}", base.saturating_add(10)));
}
