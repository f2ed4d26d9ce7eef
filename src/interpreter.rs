use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::callable::Callable;
use crate::environment::Environment;
use crate::error::{Flow, RuntimeError};
use crate::expr::Expr;
use crate::function::{Function, NativeFunction};
use crate::stmt::Stmt;
use crate::token::{Token, TokenKind};
use crate::value::Value;

/// Walks a parsed program directly against its AST.
///
/// `globals` is seeded once with the `clock` native and never replaced;
/// `environment` is the scope statements currently execute in and changes as
/// blocks/calls push and pop scopes.
pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    stdout: Rc<RefCell<dyn Write>>,
}

impl Interpreter {
    pub fn new(stdout: Rc<RefCell<dyn Write>>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new(None)));
        globals.borrow_mut().define("clock", Value::Callable(Rc::new(NativeFunction::clock())));

        Interpreter { environment: Rc::clone(&globals), globals, stdout }
    }

    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            match self.execute(statement) {
                Ok(()) => {}
                Err(Flow::Error(err)) => return Err(err),
                Err(Flow::Return(keyword, _)) => {
                    return Err(RuntimeError {
                        token: keyword,
                        message: "Can't return from top-level code.".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<(), Flow> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                let _ = writeln!(self.stdout.borrow_mut(), "{}", value.stringify());
                Ok(())
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.borrow_mut().define(&name.lexeme, value);
                Ok(())
            }
            Stmt::Block(statements) => {
                let scope = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
                self.execute_block(statements, scope)
            }
            Stmt::If { cond, then_branch, else_branch } => {
                if self.evaluate(cond)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::While { cond, body } => {
                while self.evaluate(cond)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            }
            Stmt::Function(declaration) => {
                let function = Function::new(Rc::clone(declaration), Rc::clone(&self.environment));
                self.environment
                    .borrow_mut()
                    .define(&declaration.name.lexeme, Value::Callable(Rc::new(function)));
                Ok(())
            }
            Stmt::Return { keyword, value } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Err(Flow::Return(keyword.clone(), value))
            }
        }
    }

    /// Executes `statements` in `scope`, restoring the caller's environment
    /// on every exit path, including an error or return unwinding through it
    /// (§5).
    pub fn execute_block(&mut self, statements: &[Stmt], scope: Rc<RefCell<Environment>>) -> Result<(), Flow> {
        let previous = std::mem::replace(&mut self.environment, scope);

        let mut result = Ok(());
        for statement in statements {
            if let Err(flow) = self.execute(statement) {
                result = Err(flow);
                break;
            }
        }

        self.environment = previous;
        result
    }

    fn evaluate(&mut self, expr: &Expr) -> Result<Value, Flow> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Variable(name) => Ok(self.environment.borrow().get(name)?),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.borrow_mut().assign(name, value.clone())?;
                Ok(value)
            }
            Expr::Unary { op, right } => {
                let right = self.evaluate(right)?;
                match op.kind {
                    TokenKind::Minus => Ok(Value::Number(-number_operand(op, &right)?)),
                    TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
                    _ => unreachable!("unary operator token {op:?} cannot reach the interpreter"),
                }
            }
            Expr::Logical { left, op, right } => {
                let left_value = self.evaluate(left)?;
                match op.kind {
                    TokenKind::Or if left_value.is_truthy() => Ok(left_value),
                    TokenKind::And if !left_value.is_truthy() => Ok(left_value),
                    _ => self.evaluate(right),
                }
            }
            Expr::Binary { left, op, right } => self.evaluate_binary(left, op, right),
            Expr::Call { callee, paren, args } => self.evaluate_call(callee, paren, args),
        }
    }

    fn evaluate_binary(&mut self, left: &Expr, op: &Token, right: &Expr) -> Result<Value, Flow> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        let value = match op.kind {
            TokenKind::Greater => {
                let (l, r) = check_number_operands(op, &left, &right)?;
                Value::Bool(l > r)
            }
            TokenKind::GreaterEqual => {
                let (l, r) = check_number_operands(op, &left, &right)?;
                Value::Bool(l >= r)
            }
            TokenKind::Less => {
                let (l, r) = check_number_operands(op, &left, &right)?;
                Value::Bool(l < r)
            }
            TokenKind::LessEqual => {
                let (l, r) = check_number_operands(op, &left, &right)?;
                Value::Bool(l <= r)
            }
            TokenKind::EqualEqual => Value::Bool(left == right),
            TokenKind::BangEqual => Value::Bool(left != right),
            TokenKind::Minus => {
                let (l, r) = check_number_operands(op, &left, &right)?;
                Value::Number(l - r)
            }
            TokenKind::Slash => {
                let (l, r) = check_number_operands(op, &left, &right)?;
                Value::Number(l / r)
            }
            TokenKind::Star => {
                let (l, r) = check_number_operands(op, &left, &right)?;
                Value::Number(l * r)
            }
            TokenKind::Plus => match (&left, &right) {
                (Value::Number(l), Value::Number(r)) => Value::Number(l + r),
                (Value::String(l), Value::String(r)) => Value::String(format!("{l}{r}")),
                _ => {
                    return Err(Flow::Error(RuntimeError {
                        token: op.clone(),
                        message: "Operands must be two numbers or two strings.".to_string(),
                    }));
                }
            },
            _ => unreachable!("binary operator token {op:?} cannot reach the interpreter"),
        };

        Ok(value)
    }

    fn evaluate_call(&mut self, callee: &Expr, paren: &Token, args: &[Expr]) -> Result<Value, Flow> {
        let callee = self.evaluate(callee)?;

        let mut arguments = Vec::with_capacity(args.len());
        for arg in args {
            arguments.push(self.evaluate(arg)?);
        }

        let Value::Callable(callable) = callee else {
            return Err(Flow::Error(RuntimeError {
                token: paren.clone(),
                message: "Can only call functions and classes.".to_string(),
            }));
        };

        if arguments.len() != callable.arity() {
            return Err(Flow::Error(RuntimeError {
                token: paren.clone(),
                message: format!("Expected {} arguments but got {}.", callable.arity(), arguments.len()),
            }));
        }

        Ok(callable.call(self, arguments)?)
    }
}

/// Checks that `operand` is a `Number`, citing `op`'s line on failure.
///
/// Used only by unary minus. The check is against the operand's type, not
/// the operator's — the pylox source this behavior is drawn from inverts
/// this check, which is a known bug in that implementation and is not
/// reproduced here.
fn number_operand(op: &Token, operand: &Value) -> Result<f64, RuntimeError> {
    match operand {
        Value::Number(n) => Ok(*n),
        _ => Err(RuntimeError { token: op.clone(), message: "Operand must be a number.".to_string() }),
    }
}

/// Checks that both `left` and `right` are `Number`s, citing `op`'s line on
/// failure, with the plural message pylox reserves for its two-operand
/// binary arithmetic/comparison ops (as opposed to unary minus's singular
/// `number_operand`).
fn check_number_operands(op: &Token, left: &Value, right: &Value) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok((*l, *r)),
        _ => Err(RuntimeError { token: op.clone(), message: "Operands must be numbers.".to_string() }),
    }
}
