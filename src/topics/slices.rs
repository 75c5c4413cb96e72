use super::Page;

pub fn run(page: &mut Page) {
    page.header("Slices");

    page.section("Borrowing a Range");
    page.code("let numbers = [10, 20, 30, 40, 50];\nlet middle = &numbers[1..4];");
    let numbers = [10, 20, 30, 40, 50];
    let middle = &numbers[1..4];
    page.output(format!("middle = {:?}, len = {}", middle, middle.len()));
    page.output(format!("&numbers[..2] = {:?}", &numbers[..2]));
    page.output(format!("&numbers[3..] = {:?}", &numbers[3..]));
    page.blank();

    page.section("Slices as Parameters");
    page.code("fn total(values: &[i32]) -> i32 { values.iter().sum() }");
    page.output(format!("total(&numbers) = {}", total(&numbers)));
    page.output(format!("total(middle) = {}", total(middle)));
    page.blank();

    page.section("Mutable Slices Share Storage");
    page.code("let mut data = [1, 2, 3, 4];\nlet part = &mut data[..2];\npart[0] = 99;");
    let mut data = [1, 2, 3, 4];
    let part = &mut data[..2];
    part[0] = 99;
    page.output(format!("data = {:?}", data));
    page.note("Writes through the slice change the underlying array");
    page.blank();

    page.section("Growable Vectors");
    page.code("let mut items = Vec::with_capacity(2);\nitems.push(\"a\");\nitems.push(\"b\");\nitems.push(\"c\");");
    let mut items = Vec::with_capacity(2);
    items.push("a");
    items.push("b");
    items.push("c");
    page.output(format!("items = {:?}, len = {}", items, items.len()));
    page.output(format!("items.capacity() >= 3: {}", items.capacity() >= 3));
    page.blank();

    page.section("Copying Between Slices");
    page.code("let mut target = [0; 3];\ntarget.copy_from_slice(&numbers[..3]);");
    let mut target = [0; 3];
    target.copy_from_slice(&numbers[..3]);
    page.output(format!("target = {:?}", target));
    page.blank();

    page.section("String Slices");
    page.code("let text = \"hello world\";\nlet word = &text[..5];");
    let text = "hello world";
    let word = &text[..5];
    page.output(format!("word = {}", word));
    page.blank();

    page.section("Splitting and Chunking");
    page.code("let (left, right) = numbers.split_at(2);\nnumbers.chunks(2)");
    let (left, right) = numbers.split_at(2);
    page.output(format!("left = {:?}, right = {:?}", left, right));
    for chunk in numbers.chunks(2) {
        page.output(format!("{:?}", chunk));
    }
}

fn total(values: &[i32]) -> i32 {
    values.iter().sum()
}
