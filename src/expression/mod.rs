//! Boolean expression parsing and lowering (§4.16, §6 "Expression grammar")
//!
//! A textual infix expression (`a & !b | c`) is parsed into an [`ast::Expr`]
//! tree with negation already pushed to the leaves, then lowered to a
//! [`crate::cube_list::CubeList`] using only the public cube-list algebra —
//! union for `Or`, intersection for `And` — so complementation is never
//! invoked on a compound subexpression, only on single literals.

pub mod ast;
pub mod eval;

pub use ast::{negate, Expr};
pub use eval::lower;

use std::sync::Arc;

use crate::error::ExpressionParseError;

#[allow(clippy::all)]
mod parser {
    use lalrpop_util::lalrpop_mod;
    lalrpop_mod!(pub grammar, "/expression/grammar.rs");
}

/// Parse a textual infix boolean expression (§6 "Expression grammar").
///
/// Supports `+`/`|` for OR, `*`/`&` for AND, `!`/`~` for NOT, parentheses for
/// grouping, and the constants `0`/`1`.
pub fn parse_expr(input: &str) -> Result<Expr, ExpressionParseError> {
    parser::grammar::ExprParser::new()
        .parse(input)
        .map_err(|e| {
            let message = e.to_string();
            let position = extract_position(&message);
            ExpressionParseError::InvalidSyntax {
                message: Arc::from(message.as_str()),
                input: Arc::from(input),
                position,
            }
        })
}

/// Best-effort extraction of a byte offset from a lalrpop error message, for
/// the `position` field of [`ExpressionParseError::InvalidSyntax`]. lalrpop's
/// `Display` impl for `ParseError` typically reports a token's start offset
/// as a bare integer (e.g. "Unrecognized token `+` found at 7").
fn extract_position(message: &str) -> Option<usize> {
    if let Some(idx) = message.rfind(" at ") {
        let after = message[idx + 4..].trim_end_matches(|c: char| !c.is_ascii_digit());
        let digits: String = after.chars().take_while(|c| c.is_ascii_digit()).collect();
        if let Ok(pos) = digits.parse::<usize>() {
            return Some(pos);
        }
    }
    None
}
