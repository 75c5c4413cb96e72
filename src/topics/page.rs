use crate::menu::render::rule;
use std::fmt;

/// Text buffer a topic handler writes into.
#[derive(Debug, Default, Clone)]
pub struct Page {
    text: String,
    sections: usize,
}

impl Page {
    pub fn header(&mut self, topic: &str) {
        self.text.push_str(&format!(
            "{}\n  RUST {} TUTORIAL\n{}\n\n",
            rule('='),
            topic.to_uppercase(),
            rule('=')
        ));
    }

    /// Sections are numbered in the order they are written.
    pub fn section(&mut self, title: &str) {
        self.sections += 1;
        self.text
            .push_str(&format!("┌─ {}. {}\n│\n", self.sections, title));
    }

    pub fn code(&mut self, source: &str) {
        for line in source.lines() {
            self.text.push_str("   ");
            self.text.push_str(line);
            self.text.push('\n');
        }
        self.text.push_str("   Output:\n");
    }

    pub fn output<T: fmt::Display>(&mut self, value: T) {
        self.text.push_str(&format!("   → {}\n", value));
    }

    pub fn note(&mut self, text: &str) {
        self.text.push_str(&format!("   ⚠️  {}\n", text));
    }

    pub fn blank(&mut self) {
        self.text.push('\n');
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_numbered() {
        let mut page = Page::default();
        page.header("Loops");
        page.section("First");
        page.section("Second");
        let s = page.to_string();
        assert!(s.contains("  RUST LOOPS TUTORIAL\n"));
        assert!(s.contains("┌─ 1. First\n"));
        assert!(s.contains("┌─ 2. Second\n"));
    }

    #[test]
    fn test_code_is_indented() {
        let mut page = Page::default();
        page.code("let x = 5;\nlet y = x;");
        page.output(5);
        assert_eq!(
            page.to_string(),
            "   let x = 5;\n   let y = x;\n   Output:\n   → 5\n"
        );
    }
}
