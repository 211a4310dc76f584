//! Line-oriented extraction of CSS declarations
//!
//! This is a heuristic, not a CSS parser: one declaration per line, no comment
//! stripping, no multi-line values and no awareness of nesting. Any text file
//! can be fed through it, including JavaScript with inline styles.

/// A `property: value;` pair found on a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Line number (1-indexed)
    pub line_number: u32,
    /// Lower-cased property name
    pub property: String,
    /// Trimmed value without the trailing `;`
    pub value: String,
}

impl Declaration {
    /// Parse a single line, returning `None` unless it is `property: value;`
    pub fn parse(line_number: u32, line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.ends_with(';') {
            return None;
        }

        let (property, value) = line.split_once(':')?;
        let value = value.strip_suffix(';').unwrap_or(value);

        Some(Self {
            line_number,
            property: property.trim().to_lowercase(),
            value: value.trim().to_string(),
        })
    }
}

/// Extract every candidate declaration from a file's text
pub fn extract_declarations(text: &str) -> Vec<Declaration> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| Declaration::parse(idx as u32 + 1, line))
        .collect()
}
