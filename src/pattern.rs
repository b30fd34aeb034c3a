//! Regular expressions that must match a whole string (header names, paths).

use regex::{Regex, RegexBuilder};

/// Compiles `pattern` anchored at both ends.
///
/// The pattern is first compiled on its own, so unbalanced input such as
/// `a)|(b` cannot close the anchoring group and match a substring.
pub fn full_match(pattern: &str, case_insensitive: bool) -> Result<Regex, regex::Error> {
    Regex::new(pattern)?;
    RegexBuilder::new(&format!("^(?:{pattern})$"))
        .case_insensitive(case_insensitive)
        .build()
}
