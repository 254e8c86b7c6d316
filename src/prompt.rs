//! Prompt - interactive yes/no confirmation on stdin
//!
//! Default is yes: an empty line, EOF or an unreadable stdin all confirm, so
//! piped and scripted runs proceed without a terminal.

use std::io::{self, BufRead, Write};

/// Ask `question` and block for a `y`/`n` answer. Unrecognized input asks
/// again; empty input and EOF count as yes.
pub fn confirm(question: &str) -> bool {
    let stdin = io::stdin();
    loop {
        print!("{} (Y/n): ", question);
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return true,
            Ok(_) => {}
        }
        match parse_answer(&line) {
            Some(answer) => return answer,
            None => continue,
        }
    }
}

fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
