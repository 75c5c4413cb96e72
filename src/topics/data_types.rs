use super::Page;

pub fn run(page: &mut Page) {
    page.header("Data Types");

    page.section("Signed and Unsigned Integers");
    page.code("i8::MIN, i8::MAX, u8::MAX, i64::MAX");
    page.output(format!("i8: {} to {}", i8::MIN, i8::MAX));
    page.output(format!("u8: {} to {}", u8::MIN, u8::MAX));
    page.output(format!("i64 max: {}", i64::MAX));
    page.output(format!("usize is {} bytes here", std::mem::size_of::<usize>()));
    page.blank();

    page.section("Integer Literals");
    page.code("let decimal = 98_222;\nlet hex = 0xff;\nlet octal = 0o77;\nlet binary = 0b1111_0000;\nlet byte = b'A';");
    page.output(format!("decimal = {}", 98_222));
    page.output(format!("hex = {}", 0xff));
    page.output(format!("octal = {}", 0o77));
    page.output(format!("binary = {}", 0b1111_0000));
    page.output(format!("byte = {}", b'A'));
    page.blank();

    page.section("Floating Point");
    page.code("let a: f32 = 1.0 / 3.0;\nlet b: f64 = 1.0 / 3.0;");
    let a: f32 = 1.0 / 3.0;
    let b: f64 = 1.0 / 3.0;
    page.output(format!("f32: {}", a));
    page.output(format!("f64: {}", b));
    page.blank();

    page.section("Booleans and Characters");
    page.code("let ok = true;\nlet letter = 'z';\nlet crab = '🦀';");
    let ok = true;
    let letter = 'z';
    let crab = '🦀';
    page.output(format!("ok = {}, letter = {}, crab = {}", ok, letter, crab));
    page.output(format!("a char is {} bytes", std::mem::size_of::<char>()));
    page.blank();

    page.section("Strings");
    page.code("let borrowed: &str = \"héllo\";\nlet owned = String::from(borrowed);");
    let borrowed: &str = "héllo";
    let owned = String::from(borrowed);
    page.output(format!("{} has {} bytes and {} chars", owned, owned.len(), owned.chars().count()));
    page.blank();

    page.section("Tuples");
    page.code("let tup: (i32, f64, char) = (500, 6.4, 'x');\nlet (x, y, z) = tup;");
    let tup: (i32, f64, char) = (500, 6.4, 'x');
    let (x, y, z) = tup;
    page.output(format!("x = {}, y = {}, z = {}, tup.0 = {}", x, y, z, tup.0));
    page.blank();

    page.section("Conversions");
    page.code("let big: i32 = 300;\nlet cast = big as u8;\nlet checked = u8::try_from(big);\nlet parsed: Result<i32, _> = \"42\".parse();");
    let big: i32 = 300;
    let cast = big as u8;
    let checked = u8::try_from(big);
    let parsed: Result<i32, _> = "42".parse();
    page.output(format!("cast = {} (truncated)", cast));
    page.output(format!("checked = {:?}", checked.map_err(|e| e.to_string())));
    page.output(format!("parsed = {:?}", parsed));
    page.note("'as' truncates silently; try_from reports the overflow");
}
