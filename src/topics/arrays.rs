use super::Page;

pub fn run(page: &mut Page) {
    page.header("Arrays");

    page.section("Declaring Arrays");
    page.code("let numbers: [i32; 5] = [1, 2, 3, 4, 5];\nlet zeros = [0; 3];");
    let numbers: [i32; 5] = [1, 2, 3, 4, 5];
    let zeros = [0; 3];
    page.output(format!("numbers = {:?}", numbers));
    page.output(format!("zeros = {:?}", zeros));
    page.note("The length is part of the type: [i32; 5] and [i32; 3] differ");
    page.blank();

    page.section("Indexing and Length");
    page.code("numbers[0], numbers[numbers.len() - 1], numbers.get(10)");
    page.output(format!("first = {}", numbers[0]));
    page.output(format!("last = {}", numbers[numbers.len() - 1]));
    page.output(format!("get(10) = {:?}", numbers.get(10)));
    page.note("numbers[10] would panic at runtime; get returns None");
    page.blank();

    page.section("Modifying Elements");
    page.code("let mut scores = [10, 20, 30];\nscores[1] = 25;");
    let mut scores = [10, 20, 30];
    scores[1] = 25;
    page.output(format!("scores = {:?}", scores));
    page.blank();

    page.section("Iterating");
    page.code("for (i, n) in numbers.iter().enumerate() { .. }\nlet sum: i32 = numbers.iter().sum();");
    let pairs: Vec<String> = numbers
        .iter()
        .enumerate()
        .map(|(i, n)| format!("[{}]={}", i, n))
        .collect();
    page.output(pairs.join(" "));
    let sum: i32 = numbers.iter().sum();
    page.output(format!("sum = {}", sum));
    page.blank();

    page.section("Arrays Are Copied by Value");
    page.code("let original = [1, 2, 3];\nlet mut copy = original;\ncopy[0] = 100;");
    let original = [1, 2, 3];
    let mut copy = original;
    copy[0] = 100;
    page.output(format!("original = {:?}, copy = {:?}", original, copy));
    page.blank();

    page.section("Multi-Dimensional Arrays");
    page.code("let grid = [[1, 2, 3], [4, 5, 6]];");
    let grid = [[1, 2, 3], [4, 5, 6]];
    for row in &grid {
        page.output(format!("{:?}", row));
    }
    page.output(format!("grid[1][2] = {}", grid[1][2]));
    page.blank();

    page.section("Comparing Arrays");
    page.code("[1, 2, 3] == [1, 2, 3]");
    page.output([1, 2, 3] == [1, 2, 3]);
}
