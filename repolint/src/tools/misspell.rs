//! `misspell` output parsing.

use regex::Regex;

/// One misspelling reported by `misspell`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisspellFinding {
    /// File as passed to the tool.
    pub path: String,
    /// 1-based line number.
    pub line: usize,
    /// Column reported by the tool.
    pub column: usize,
    /// Tool message, e.g. `"torphies" is a misspelling of "trophies"`.
    pub message: String,
}

/// Parses `path:line:col: message` lines.
#[derive(Debug, Clone)]
pub struct MisspellParser {
    line: Regex,
}

impl MisspellParser {
    /// Compiles the line pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            line: Regex::new(r"^(.+?):(\d+):(\d+): (.+)$")?,
        })
    }

    /// Parses one output line, or returns `None` if it is not a finding.
    pub fn parse_line(&self, line: &str) -> Option<MisspellFinding> {
        let captures = self.line.captures(line.trim_end())?;
        Some(MisspellFinding {
            path: captures[1].to_string(),
            line: captures[2].parse().ok()?,
            column: captures[3].parse().ok()?,
            message: captures[4].to_string(),
        })
    }
}
