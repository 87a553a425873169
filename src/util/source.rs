/// Removes every line whose first non-whitespace character is `#`.
///
/// Lines are split on `\n` only. Surviving lines keep their terminators and
/// leading whitespace untouched, so error positions reported by the evaluator
/// refer to the returned buffer.
///
/// ## Example
/// ```
/// use pyarith::util::source::strip_comments;
///
/// let raw = "# header\n1 +\n   # note\n2\n";
/// assert_eq!(strip_comments(raw), "1 +\n2\n");
/// ```
#[must_use]
pub fn strip_comments(source: &str) -> String {
    source.split_inclusive('\n')
          .filter(|line| !line.trim_start().starts_with('#'))
          .collect()
}
