//! Facade over the UI runtime helper crates.
//!
//! Each member crate is independently usable; this crate re-exports their
//! public surfaces so application code gets a single import path.

#![forbid(unsafe_code)]

pub use action_registry::{DuplicateLabel, LabelRegistry, unique_label};
pub use change_detection::{ChangePredicate, distinct_changes};
pub use css_units::{
    ComputedStyleSource, TransformParseError, Translation3D, computed_style_value,
    leading_number, parse_translate3d,
};
pub use text_format::{
    DEFAULT_LOCALE, DateFormatError, capitalize, locale_date_string,
    locale_date_string_default, uncapitalize,
};
pub use value_flatten::{flatten_value, is_structured};
