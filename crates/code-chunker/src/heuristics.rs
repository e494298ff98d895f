//! Name and text predicates used to split function-like and class-like
//! constructs into hooks, components and plain definitions.
//!
//! Both are lexical pattern matches. `is_component` in particular fires on any
//! `<`, so ordinary comparisons make a function look like a component.

use once_cell::sync::Lazy;
use regex::Regex;

static COMPONENT_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"React|(?i:jsx|tsx)|<|props|render").expect("component marker pattern is valid")
});

/// `useState`, `useEffect`, ...: the `use` prefix followed by an uppercase letter
pub fn is_hook(name: &str) -> bool {
    name.strip_prefix("use")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

/// True if the code mentions React, JSX/TSX, markup, props or render
pub fn is_component(code: &str) -> bool {
    COMPONENT_MARKERS.is_match(code)
}

/// First whitespace-delimited token is exactly `async`
pub(crate) fn starts_with_async(code: &str) -> bool {
    code.split_whitespace().next() == Some("async")
}
