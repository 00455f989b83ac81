//! `liche` output parsing.
//!
//! `liche` prints one unindented header line per file, followed by indented
//! per-link result lines. A failing link is an `ERROR <url>` line whose next
//! line holds the reason.

/// One failing link reported by `liche`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFailure {
    /// File header the failure was listed under, as passed to the tool.
    pub file: String,
    /// The failing URL.
    pub url: String,
    /// Failure reason, e.g. `Timeout` or a DNS error.
    pub reason: String,
}

/// Extracts every failing link from `liche` output.
pub fn parse_liche_output(output: &str) -> Vec<LinkFailure> {
    let mut failures = Vec::new();
    let mut file = String::new();
    let mut lines = output.lines();

    while let Some(line) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }
        if !line.starts_with(char::is_whitespace) {
            file = line.trim().to_string();
            continue;
        }

        let Some(url) = line.trim_start().strip_prefix("ERROR") else {
            continue;
        };
        let reason = lines.next().map(str::trim).unwrap_or_default();
        failures.push(LinkFailure {
            file: file.clone(),
            url: url.trim().to_string(),
            reason: reason.to_string(),
        });
    }

    failures
}
