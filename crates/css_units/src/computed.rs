//! Reading numeric magnitudes out of resolved style values.

use crate::numeric::leading_number;
use log::debug;

/// External style-computation facility.
///
/// Implemented by whatever owns resolved styles for a rendered element (a
/// style engine snapshot, a browser binding, a test stub). This crate only
/// consumes it.
pub trait ComputedStyleSource {
    /// The resolved value of `property`, as the style system would serialise
    /// it (`"12.5px"`), or `None` when the property has no resolved value.
    fn resolved_value(&self, property: &str) -> Option<String>;
}

/// Resolved numeric magnitude of `property` on `source`.
///
/// Reads the resolved string and extracts its leading number; unit suffixes
/// are dropped. `None` when the property is absent or its value does not
/// start with a number.
pub fn computed_style_value(source: &impl ComputedStyleSource, property: &str) -> Option<f32> {
    let resolved = source.resolved_value(property)?;
    let magnitude = leading_number(&resolved);
    if magnitude.is_none() {
        debug!("resolved value {resolved:?} for {property:?} has no leading number");
    }
    magnitude
}
