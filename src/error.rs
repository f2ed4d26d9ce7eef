use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

use crate::token::{Token, TokenKind};
use crate::value::Value;

/// A lexical error, reported with just a line number (the scanner has no
/// token to anchor to yet).
#[derive(Debug, Clone)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl std::error::Error for ScanError {}

/// A syntax error anchored to the offending token (§4.2, §6).
#[derive(Debug, Clone)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = if self.token.kind == TokenKind::Eof {
            " at end".to_string()
        } else {
            format!(" at '{}'", self.token.lexeme)
        };
        write!(f, "[line {}] Error{}: {}", self.token.line, location, self.message)
    }
}

impl std::error::Error for ParseError {}

/// A runtime error, carrying the token whose line should be cited (§6).
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n[line {}]", self.message, self.token.line)
    }
}

impl std::error::Error for RuntimeError {}

/// What can unwind out of statement/expression evaluation.
///
/// `Return` is not an error — it is the control-flow escape `return` uses to
/// cross arbitrary nesting (§7, §9) — but it is cheapest to thread alongside
/// `RuntimeError` through the same `Result`-returning, `?`-using evaluator
/// rather than inventing a second propagation channel.
#[derive(Debug, Clone)]
pub enum Flow {
    Error(RuntimeError),
    Return(Token, Value),
}

impl From<RuntimeError> for Flow {
    fn from(err: RuntimeError) -> Self {
        Flow::Error(err)
    }
}

/// Owns the error flags and the stderr sink, shared by the scanner, parser,
/// and interpreter.
///
/// Replaces the `static mut HAD_ERROR`/`HAD_RUNTIME_ERROR` pattern with an
/// object threaded by reference, so multiple `Lox` instances (as in the test
/// harness) never interfere with each other, and REPL iterations reset
/// cleanly (§9).
pub struct Diagnostics {
    stderr: Rc<RefCell<dyn Write>>,
    had_syntax_error: bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    pub fn new(stderr: Rc<RefCell<dyn Write>>) -> Self {
        Diagnostics { stderr, had_syntax_error: false, had_runtime_error: false }
    }

    pub fn had_syntax_error(&self) -> bool {
        self.had_syntax_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Resets both flags; called between REPL lines (§5, §7).
    pub fn reset(&mut self) {
        self.had_syntax_error = false;
        self.had_runtime_error = false;
    }

    pub fn report_scan(&mut self, error: &ScanError) {
        let _ = writeln!(self.stderr.borrow_mut(), "{error}");
        self.had_syntax_error = true;
    }

    pub fn report_parse(&mut self, error: &ParseError) {
        let _ = writeln!(self.stderr.borrow_mut(), "{error}");
        self.had_syntax_error = true;
    }

    pub fn report_runtime(&mut self, error: &RuntimeError) {
        let _ = writeln!(self.stderr.borrow_mut(), "{error}");
        self.had_runtime_error = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    fn token(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, None, 1)
    }

    #[test]
    fn parse_error_at_eof_says_at_end() {
        let err = ParseError { token: token(TokenKind::Eof, ""), message: "Expect ';'.".to_string() };
        assert_eq!(err.to_string(), "[line 1] Error at end: Expect ';'.");
    }

    #[test]
    fn parse_error_names_the_offending_lexeme() {
        let err = ParseError { token: token(TokenKind::Class, "class"), message: "Expect expression.".to_string() };
        assert_eq!(err.to_string(), "[line 1] Error at 'class': Expect expression.");
    }

    #[test]
    fn runtime_error_format_is_message_then_line() {
        let err = RuntimeError { token: token(TokenKind::Minus, "-"), message: "Operand must be a number.".to_string() };
        assert_eq!(err.to_string(), "Operand must be a number.\n[line 1]");
    }

    #[test]
    fn reset_clears_both_flags() {
        let buf: Rc<RefCell<dyn Write>> = Rc::new(RefCell::new(Vec::new()));
        let mut diagnostics = Diagnostics::new(buf);
        diagnostics.report_runtime(&RuntimeError { token: token(TokenKind::Eof, ""), message: "oops".to_string() });
        assert!(diagnostics.had_runtime_error());
        diagnostics.reset();
        assert!(!diagnostics.had_runtime_error());
        assert!(!diagnostics.had_syntax_error());
    }
}
