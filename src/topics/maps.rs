use super::Page;
use std::collections::{BTreeMap, HashMap};

pub fn run(page: &mut Page) {
    page.header("Maps");

    page.section("Creating and Inserting");
    page.code("let mut ages: HashMap<&str, u32> = HashMap::new();\nages.insert(\"Alice\", 30);\nages.insert(\"Bob\", 25);");
    let mut ages: HashMap<&str, u32> = HashMap::new();
    ages.insert("Alice", 30);
    ages.insert("Bob", 25);
    page.output(format!("len = {}", ages.len()));
    page.blank();

    page.section("Looking Up Values");
    page.code("ages.get(\"Alice\"), ages.get(\"Zed\"), ages.contains_key(\"Bob\")");
    page.output(format!("get(\"Alice\") = {:?}", ages.get("Alice")));
    page.output(format!("get(\"Zed\") = {:?}", ages.get("Zed")));
    page.output(format!("contains_key(\"Bob\") = {}", ages.contains_key("Bob")));
    page.note("Missing keys give None instead of a zero value");
    page.blank();

    page.section("Updating and Removing");
    page.code("ages.insert(\"Alice\", 31);\nif let Some(age) = ages.get_mut(\"Bob\") { *age += 1; }\nages.remove(\"Alice\");");
    let previous = ages.insert("Alice", 31);
    page.output(format!("insert returned {:?}", previous));
    if let Some(age) = ages.get_mut("Bob") {
        *age += 1;
    }
    page.output(format!("Bob = {:?}", ages.get("Bob")));
    page.output(format!("remove(\"Alice\") = {:?}", ages.remove("Alice")));
    page.blank();

    page.section("The Entry API");
    page.code("for word in text.split_whitespace() {\n    *counts.entry(word).or_insert(0) += 1;\n}");
    let text = "the quick fox jumps over the lazy dog the end";
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }
    page.output(format!("the = {}", counts["the"]));
    page.blank();

    page.section("Ordered Iteration");
    page.code("let counts: BTreeMap<&str, usize> = ..;\nfor (word, count) in &counts { .. }");
    let listed: Vec<String> = counts
        .iter()
        .map(|(word, count)| format!("{}:{}", word, count))
        .collect();
    page.output(listed.join(" "));
    page.note("HashMap iteration order is unspecified; BTreeMap is sorted by key");
    page.blank();

    page.section("Building from Iterators");
    page.code("let squares: HashMap<u32, u32> = (1..=4).map(|n| (n, n * n)).collect();");
    let squares: HashMap<u32, u32> = (1..=4).map(|n| (n, n * n)).collect();
    page.output(format!("squares[&3] = {}", squares[&3]));
}
