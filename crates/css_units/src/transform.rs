//! `translate3d(…)` attribute parsing.

use crate::TransformParseError;
use cssparser::{
    BasicParseErrorKind, ParseError, ParseErrorKind, Parser, ParserInput, Token,
};

/// Magnitudes of a `translate3d` transform, units discarded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Translation3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Parse a `translate3d(<x>,<y>,<z>)` attribute value.
///
/// Components may be px/em/rem lengths, percentages, or unitless numbers;
/// the raw magnitude is returned either way (a `50%` component yields `50.0`).
///
/// # Errors
/// Unlike a fixed-offset slice of the attribute text, every malformed shape
/// is reported: a different function name, a component count other than
/// three, an unsupported unit, or trailing garbage.
pub fn parse_translate3d(attribute: &str) -> Result<Translation3D, TransformParseError> {
    let mut input = ParserInput::new(attribute);
    let mut parser = Parser::new(&mut input);

    match parser.next() {
        Ok(&Token::Function(ref name)) => {
            if !name.eq_ignore_ascii_case("translate3d") {
                return Err(TransformParseError::NotTranslate3d(name.as_ref().to_owned()));
            }
        }
        _ => return Err(TransformParseError::Malformed),
    }

    let translation = parser
        .parse_nested_block(|block| {
            let x = component(block)?;
            block.expect_comma()?;
            let y = component(block)?;
            block.expect_comma()?;
            let z = component(block)?;
            if !block.is_exhausted() {
                return Err(block.new_custom_error(TransformParseError::WrongArity));
            }
            Ok(Translation3D { x, y, z })
        })
        .map_err(flatten_error)?;

    if parser.is_exhausted() {
        Ok(translation)
    } else {
        Err(TransformParseError::Malformed)
    }
}

fn component<'i>(block: &mut Parser<'i, '_>) -> Result<f32, ParseError<'i, TransformParseError>> {
    let location = block.current_source_location();
    match block.next()? {
        &Token::Dimension { value, ref unit, .. } => {
            let lower = unit.as_ref().to_ascii_lowercase();
            match lower.as_str() {
                "px" | "em" | "rem" => Ok(value),
                _ => Err(location.new_custom_error(TransformParseError::UnsupportedUnit(lower))),
            }
        }
        &Token::Percentage { unit_value, .. } => Ok(unit_value * 100.0),
        &Token::Number { value, .. } => Ok(value),
        _ => Err(location.new_custom_error(TransformParseError::Malformed)),
    }
}

fn flatten_error(error: ParseError<'_, TransformParseError>) -> TransformParseError {
    match error.kind {
        ParseErrorKind::Custom(custom) => custom,
        // Running out of tokens mid-component-list means too few components.
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => TransformParseError::WrongArity,
        ParseErrorKind::Basic(_) => TransformParseError::Malformed,
    }
}
