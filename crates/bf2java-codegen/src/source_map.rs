//! Source mapping — Java line number → Brainfuck source location.
//!
//! Every body line of the emitted file comes from exactly one operator, so
//! the map has one entry per operator. `javac` diagnostics and Java stack
//! traces name a line in the generated file; this map resolves that line
//! back to the character in the `.bf` source.

use bf2java_types::{Operator, Span};
use serde::{Deserialize, Serialize};

/// A complete source map for one emitted class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceMap {
    /// Brainfuck source file name.
    pub source: String,
    /// Name of the emitted class.
    pub class_name: String,
    pub entries: Vec<SourceMapEntry>,
}

/// A single source map entry: one Java line → one Brainfuck operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMapEntry {
    /// 1-based line in the emitted `.java` file.
    pub java_line: u32,
    pub operator: Operator,
    /// Source span (1-based line/column).
    #[serde(flatten)]
    pub span: Span,
}

impl SourceMap {
    pub fn new(source: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            class_name: class_name.into(),
            entries: Vec::new(),
        }
    }

    /// Push a new entry.
    pub fn push(&mut self, java_line: u32, operator: Operator, span: Span) {
        self.entries.push(SourceMapEntry {
            java_line,
            operator,
            span,
        });
    }

    /// Look up the entry for a Java line. Lines from the prologue or
    /// epilogue have no entry.
    pub fn find_by_java_line(&self, line: u32) -> Option<&SourceMapEntry> {
        // Entries are pushed in ascending java_line order.
        self.entries
            .binary_search_by_key(&line, |e| e.java_line)
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(data: &str) -> Option<Self> {
        serde_json::from_str(data).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SourceMap {
        let mut sm = SourceMap::new("add.bf", "Add");
        sm.push(7, Operator::CellInc, Span::point(1, 1));
        sm.push(8, Operator::CellInc, Span::point(1, 2));
        sm.push(9, Operator::Output, Span::point(2, 1));
        sm
    }

    #[test]
    fn round_trip_json() {
        let sm = sample();
        let json = sm.to_json().unwrap();
        let sm2 = SourceMap::from_json(&json).expect("parse failed");
        assert_eq!(sm2, sm);
        assert_eq!(sm2.entries[2].operator, Operator::Output);
    }

    #[test]
    fn json_uses_flat_positions() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entry = &value["entries"][2];
        assert_eq!(entry["java_line"], 9);
        assert_eq!(entry["operator"], "output");
        assert_eq!(entry["line"], 2);
        assert_eq!(entry["column"], 1);
    }

    #[test]
    fn find_by_java_line() {
        let sm = sample();
        assert_eq!(sm.find_by_java_line(8).unwrap().span, Span::point(1, 2));
        assert!(sm.find_by_java_line(1).is_none());
        assert!(sm.find_by_java_line(10).is_none());
    }
}
