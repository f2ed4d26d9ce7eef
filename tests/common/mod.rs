use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use loxi::Lox;

/// Runs `source` as a standalone script and returns `(stdout, stderr)`
/// captured from in-memory sinks, without spawning a process.
#[allow(dead_code)]
pub fn run(source: &str) -> (String, String) {
    let stdout = Rc::new(RefCell::new(Vec::new()));
    let stderr = Rc::new(RefCell::new(Vec::new()));

    let mut lox = Lox::new(Rc::clone(&stdout) as Rc<RefCell<dyn Write>>, Rc::clone(&stderr) as Rc<RefCell<dyn Write>>);
    lox.run_line(source);

    (String::from_utf8(stdout.borrow().clone()).unwrap(), String::from_utf8(stderr.borrow().clone()).unwrap())
}
