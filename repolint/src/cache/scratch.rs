//! Scratch file naming.

/// Flattens a repository path into a single file name.
///
/// `%` is escaped first so `a/b` and a literal `a%2Fb` still map to
/// different names.
pub(crate) fn escape_path(path: &str) -> String {
    path.replace('%', "%25").replace('/', "%2F")
}
