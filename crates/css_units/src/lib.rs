//! Parsing helpers for CSS transform attributes and unit-suffixed magnitudes.
//!
//! Only magnitudes are extracted here; unit resolution against an environment
//! (font sizes, viewport) is out of scope. The style-computation facility
//! itself is an external collaborator behind [`ComputedStyleSource`].

#![forbid(unsafe_code)]

mod computed;
mod numeric;
mod transform;

pub use computed::{ComputedStyleSource, computed_style_value};
pub use numeric::leading_number;
pub use transform::{Translation3D, parse_translate3d};

use thiserror::Error;

/// Failure modes of [`parse_translate3d`].
///
/// The source of these attributes used to be sliced at a fixed offset, which
/// made any malformed input produce garbage coordinates. Parsing is hardened
/// instead: every deviation from `translate3d(<x>,<y>,<z>)` is reported.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransformParseError {
    #[error("expected a translate3d(…) function, found {0:?}")]
    NotTranslate3d(String),
    #[error("expected exactly three comma-separated components")]
    WrongArity,
    #[error("unsupported unit {0:?} in transform component")]
    UnsupportedUnit(String),
    #[error("malformed transform attribute")]
    Malformed,
}
