//! Loxi is a tree-walking interpreter for Lox, the language from Bob
//! Nystrom's *Crafting Interpreters*. It is a dynamically typed language
//! with lexical scoping and first-class functions.
//!
//! ## Scanning
//! The first step is scanning: turning a string of source characters into a
//! flat list of tokens. The scanner is implemented in the [`scanner`] module
//! over a `peekmore` character iterator, and reports lexical problems
//! (unterminated strings, stray characters) as a [`ScanError`](error::ScanError)
//! without stopping — it keeps scanning so multiple problems can surface at
//! once.
//!
//! ## Parsing
//! The second step is parsing: turning the token list into an abstract
//! syntax tree. The parser in [`parser`] is a hand-written recursive-descent
//! parser producing the [`Expr`](expr::Expr) and [`Stmt`](stmt::Stmt) enums.
//! Like the scanner, it recovers from a [`ParseError`](error::ParseError) by
//! synchronizing at the next statement boundary rather than aborting the
//! whole parse.
//!
//! ## Interpreting
//! The final step walks the tree directly. [`interpreter::Interpreter`]
//! evaluates expressions and executes statements against a chain of
//! [`Environment`](environment::Environment) scopes, reporting type errors
//! and undefined-variable errors as a [`RuntimeError`](error::RuntimeError).

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::rc::Rc;

pub mod callable;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod parser;
pub mod scanner;
pub mod stmt;
pub mod token;
pub mod value;

use error::Diagnostics;
use interpreter::Interpreter;
use parser::Parser;
use scanner::Scanner;

/// Exit code for clean completion.
pub const EXIT_OK: i32 = 0;
/// Exit code for CLI misuse (wrong number of arguments).
pub const EXIT_USAGE: i32 = 64;
/// Exit code for a syntax error encountered while running a script.
pub const EXIT_SYNTAX_ERROR: i32 = 65;
/// Exit code for a runtime error encountered while running a script.
pub const EXIT_RUNTIME_ERROR: i32 = 70;

/// The interpreter driver: owns the diagnostic sink and the interpreter's
/// environment across however many `run` calls it's given (one for a
/// script, one per line in a REPL).
pub struct Lox {
    interpreter: Interpreter,
    diagnostics: Diagnostics,
}

impl Lox {
    pub fn new(stdout: Rc<RefCell<dyn Write>>, stderr: Rc<RefCell<dyn Write>>) -> Self {
        Lox { interpreter: Interpreter::new(stdout), diagnostics: Diagnostics::new(stderr) }
    }

    /// Reads and runs a whole file, returning the process exit code it
    /// implies (§6).
    pub fn run_file(&mut self, path: &str) -> i32 {
        let source = fs::read_to_string(path).expect("source file should be readable");
        self.run(&source);

        if self.diagnostics.had_syntax_error() {
            return EXIT_SYNTAX_ERROR;
        }
        if self.diagnostics.had_runtime_error() {
            return EXIT_RUNTIME_ERROR;
        }
        EXIT_OK
    }

    /// Runs one line of REPL input, resetting the diagnostic flags
    /// beforehand so a previous bad line doesn't poison this one.
    pub fn run_line(&mut self, source: &str) {
        self.diagnostics.reset();
        self.run(source);
    }

    fn run(&mut self, source: &str) {
        let tokens = Scanner::new(source).scan_tokens(&mut self.diagnostics);

        let diagnostics = &mut self.diagnostics;
        let statements = Parser::new(tokens).parse(|error| diagnostics.report_parse(error));

        if self.diagnostics.had_syntax_error() {
            return;
        }

        if let Err(error) = self.interpreter.interpret(&statements) {
            self.diagnostics.report_runtime(&error);
        }
    }
}

/// Convenience constructor wiring real process stdout/stderr (used by the
/// binary; tests build a `Lox` directly with in-memory buffers).
impl Default for Lox {
    fn default() -> Self {
        Lox::new(Rc::new(RefCell::new(io::stdout())), Rc::new(RefCell::new(io::stderr())))
    }
}
