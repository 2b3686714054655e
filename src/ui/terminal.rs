//! Console backed by the process stdin/stdout.

use super::console::Console;
use crate::errors::AppResult;
use std::io::{self, BufRead, IsTerminal, Write};

pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn clear_display(&mut self) {
        // only when a human is watching; piped output stays readable
        if self.interactive {
            print!("\x1b[2J\x1b[H");
            let _ = io::stdout().flush();
        }
    }

    fn show(&mut self, text: &str) {
        println!("{text}");
    }

    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut s = String::new();
        if io::stdin().lock().read_line(&mut s)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(s.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Ask a yes/no question on stdin; anything but `y`/`yes` is a no.
pub fn ask_yes_no(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
