//! camelCase to underscore name conversion

use regex::Regex;
use std::sync::LazyLock;

/// Matches an uppercase-then-lowercase run together with the character
/// before it.
static RUN_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("Invalid run boundary regex"));

/// Matches an uppercase letter directly after a lowercase letter or digit.
static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("Invalid case boundary regex"));

/// Convert a camelCase name to underscore form.
///
/// Underscores are inserted at both kinds of case boundary before the
/// whole string is lowercased. Already-underscored lowercase input comes
/// back unchanged.
///
/// # Example
/// ```
/// use cfg_parser::naming::camel_to_underscore;
///
/// assert_eq!(camel_to_underscore("SomeThingLikeThis"), "some_thing_like_this");
/// assert_eq!(camel_to_underscore("EntryPointClass"), "entry_point_class");
/// ```
pub fn camel_to_underscore(name: &str) -> String {
    let spaced = RUN_BOUNDARY.replace_all(name, "${1}_${2}");
    CASE_BOUNDARY
        .replace_all(&spaced, "${1}_${2}")
        .to_lowercase()
}
