use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::callable::Callable;
use crate::environment::Environment;
use crate::error::{Flow, RuntimeError};
use crate::interpreter::Interpreter;
use crate::stmt::FunctionDecl;
use crate::value::Value;

/// A user-defined function, bundled with the environment it closed over at
/// declaration time.
///
/// Capturing `closure` here (rather than always calling into
/// `interpreter.globals`, as a flat single-scope implementation would) is
/// what gives nested functions real lexical closures (§4.5, §7).
pub struct Function {
    declaration: Rc<FunctionDecl>,
    closure: Rc<RefCell<Environment>>,
}

impl Function {
    pub fn new(declaration: Rc<FunctionDecl>, closure: Rc<RefCell<Environment>>) -> Self {
        Function { declaration, closure }
    }
}

impl Callable for Function {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));

        for (param, arg) in self.declaration.params.iter().zip(arguments) {
            environment.define(&param.lexeme, arg);
        }

        match interpreter.execute_block(&self.declaration.body, Rc::new(RefCell::new(environment))) {
            Ok(()) => Ok(Value::Nil),
            Err(Flow::Return(_, value)) => Ok(value),
            Err(Flow::Error(err)) => Err(err),
        }
    }

    fn arity(&self) -> usize {
        self.declaration.params.len()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.declaration.name.lexeme)
    }
}

/// `stringify` (§4.5) prints callables through their `Debug` impl, so this
/// delegates to the same "<fn NAME>" tag as `Display` rather than deriving a
/// field dump of the declaration and closure.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A built-in function implemented in Rust rather than Lox (§10.1).
pub struct NativeFunction {
    arity: usize,
    func: Box<dyn Fn(&mut Interpreter, Vec<Value>) -> Result<Value, RuntimeError>>,
}

impl NativeFunction {
    pub fn new(
        arity: usize,
        func: impl Fn(&mut Interpreter, Vec<Value>) -> Result<Value, RuntimeError> + 'static,
    ) -> Self {
        NativeFunction { arity, func: Box::new(func) }
    }

    /// The `clock` native seeded into the global environment (§4.5).
    pub fn clock() -> Self {
        NativeFunction::new(0, |_, _| {
            let elapsed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("system clock before the Unix epoch")
                .as_secs_f64();
            Ok(Value::Number(elapsed))
        })
    }
}

impl Callable for NativeFunction {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        (self.func)(interpreter, arguments)
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn>")
    }
}

impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn>")
    }
}
