use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::token::Token;
use crate::value::Value;

/// A lexical scope: a map of names to values, plus a link to the scope it
/// was opened inside of.
///
/// Variable lookup always walks this chain from the innermost scope
/// outward; there is no resolver pass computing static distances ahead of
/// time (§4.4, §9), so `get`/`assign` are `O(depth)` per access.
#[derive(Debug)]
pub struct Environment {
    enclosing: Option<Rc<RefCell<Environment>>>,
    values: HashMap<String, Value>,
}

impl Environment {
    pub fn new(enclosing: Option<Rc<RefCell<Environment>>>) -> Self {
        Environment { enclosing, values: HashMap::new() }
    }

    /// Creates a binding, or rebinds an existing one in this scope.
    ///
    /// Unlike `assign`, `define` never looks outward: re-declaring a name
    /// with `var` in the same scope is legal and simply shadows it (§4.4).
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Assigns to an existing binding, walking outward until one is found.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        if self.values.contains_key(&name.lexeme) {
            self.values.insert(name.lexeme.clone(), value);
            return Ok(());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow_mut().assign(name, value);
        }

        Err(RuntimeError { token: name.clone(), message: format!("Undefined variable '{}'.", name.lexeme) })
    }

    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow().get(name);
        }

        Err(RuntimeError { token: name.clone(), message: format!("Undefined variable '{}'.", name.lexeme) })
    }
}
