use std::cell::RefCell;
use std::io::{self, Write};
use std::process;
use std::rc::Rc;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use loxi::Lox;

const HISTORY_FILE: &str = ".loxi_history";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let code = match args.len() {
        n if n > 2 => {
            println!("Usage: loxi [script]");
            64
        }
        2 => run_file(&args[1]),
        _ => {
            run_prompt();
            0
        }
    };

    process::exit(code);
}

fn run_file(path: &str) -> i32 {
    let mut lox = Lox::new(Rc::new(RefCell::new(io::stdout())), Rc::new(RefCell::new(io::stderr())));
    lox.run_file(path)
}

fn run_prompt() {
    let mut lox = Lox::new(Rc::new(RefCell::new(io::stdout())), Rc::new(RefCell::new(io::stderr())));

    let mut editor = DefaultEditor::new().expect("should be able to start the line editor");
    let history_path = home::home_dir().map(|home| home.join(HISTORY_FILE));
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("> ") {
            Ok(line) if line.is_empty() => break,
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                lox.run_line(&line);
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(_) => break,
        }
    }

    if let Some(path) = &history_path {
        let _ = editor.save_history(path);
    }
}
