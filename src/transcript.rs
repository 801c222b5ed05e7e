//! Line sink that stands in for console printing.
//!
//! Scenarios write every line they would have printed into a [`Transcript`],
//! so the harness (and tests) can inspect exactly what happened.

use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::trace!(target: "gof_catalog::transcript", "{line}");
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Extend<String> for Transcript {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for line in iter {
            self.line(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_order() {
        let mut out = Transcript::new();
        out.line("first");
        out.line(String::from("second"));
        out.extend(vec!["third".to_string()]);

        assert_eq!(out.lines(), ["first", "second", "third"]);
        assert_eq!(out.last(), Some("third"));
        assert!(out.contains("sec"));
    }

    #[test]
    fn test_empty() {
        let out = Transcript::new();
        assert!(out.is_empty());
        assert_eq!(out.last(), None);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut out = Transcript::new();
        out.line("hello");
        assert_eq!(serde_json::to_string(&out).unwrap(), r#"["hello"]"#);
    }
}
