use std::fmt;

/// The literal payload carried by a `Number` or `String` token.
///
/// Kept separate from the runtime [`Value`](crate::value::Value) type so that
/// the token model does not need to know about callables, environments, or
/// anything else further up the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenLiteral {
    Number(f64),
    Str(String),
}

impl fmt::Display for TokenLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenLiteral::Number(n) => write!(f, "{n}"),
            TokenLiteral::Str(s) => write!(f, "{s}"),
        }
    }
}
