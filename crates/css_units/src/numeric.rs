//! Leading-magnitude extraction from unit-suffixed strings.

use cssparser::{Parser, ParserInput, Token};

/// Extract the leading signed decimal magnitude of a style value string,
/// ignoring any unit suffix (`"12.5em"` yields `12.5`).
///
/// Presentation-layer data is parsed, never thrown on: inputs that do not
/// start with a number yield `None`. Leading whitespace counts as "does not
/// start with a number".
pub fn leading_number(value: &str) -> Option<f32> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    match parser.next_including_whitespace_and_comments() {
        Ok(&Token::Dimension { value: magnitude, .. })
        | Ok(&Token::Number { value: magnitude, .. }) => Some(magnitude),
        Ok(&Token::Percentage { unit_value, .. }) => Some(unit_value * 100.0),
        _ => None,
    }
}
