//! First-character case adjustment.

use std::borrow::Cow;

/// Upper-case the first character, leaving the rest untouched.
///
/// Total over strings: the empty string and strings already starting with an
/// upper-case character come back borrowed and unchanged. A first character
/// whose upper-case form expands (ß) expands the string.
pub fn capitalize(input: &str) -> Cow<'_, str> {
    recase_first(input, char::is_uppercase, |first| first.to_uppercase().collect())
}

/// Lower-case the first character, leaving the rest untouched.
pub fn uncapitalize(input: &str) -> Cow<'_, str> {
    recase_first(input, char::is_lowercase, |first| first.to_lowercase().collect())
}

fn recase_first(
    input: &str,
    already: impl Fn(char) -> bool,
    recase: impl Fn(char) -> String,
) -> Cow<'_, str> {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) if !already(first) => {
            let mut out = recase(first);
            out.reserve(chars.as_str().len());
            out.push_str(chars.as_str());
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(input),
    }
}
