//! Scratch path to repository path translation.

/// Rewrites scratch copy paths in tool output back to repository paths.
///
/// Substitution is a single left-to-right pass preferring the longest match,
/// so one scratch path never shadows another that extends it.
#[derive(Debug, Clone, Default)]
pub struct PathTranslator {
    pairs: Vec<(String, String)>,
}

impl PathTranslator {
    /// Builds a translator from `(scratch path, original path)` pairs.
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut pairs: Vec<(String, String)> = pairs
            .into_iter()
            .filter(|(from, _)| !from.is_empty())
            .collect();
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { pairs }
    }

    /// Returns `text` with every scratch path replaced.
    pub fn translate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        'scan: while !rest.is_empty() {
            for (from, to) in &self.pairs {
                if let Some(tail) = rest.strip_prefix(from.as_str()) {
                    out.push_str(to);
                    rest = tail;
                    continue 'scan;
                }
            }
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                out.push(ch);
            }
            rest = chars.as_str();
        }

        out
    }
}
