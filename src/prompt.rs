// Input collection for the subcommands. On a terminal the fields are asked
// with `dialoguer`; otherwise one line per field is read from stdin and a
// value that does not parse becomes its zero value (0, false, "").

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{Input, Password};

pub trait Prompter {
    fn text(&mut self, label: &str) -> io::Result<String>;
    fn password(&mut self, label: &str) -> io::Result<String>;
    fn id(&mut self, label: &str) -> io::Result<i64>;
    fn flag(&mut self, label: &str) -> io::Result<bool>;
}

/// dialoguer needs both ends attached to a terminal to prompt.
pub fn interactive() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}

/// Prompts drawn on the terminal. Empty answers are passed through so the
/// API decides whether they are acceptable.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, label: &str) -> io::Result<String> {
        Input::new().with_prompt(label).allow_empty(true).interact_text()
    }

    fn password(&mut self, label: &str) -> io::Result<String> {
        Password::new().with_prompt(label).allow_empty_password(true).interact()
    }

    fn id(&mut self, label: &str) -> io::Result<i64> {
        Input::new().with_prompt(label).interact_text()
    }

    fn flag(&mut self, label: &str) -> io::Result<bool> {
        Input::new().with_prompt(label).default(false).interact_text()
    }
}

/// Line-oriented prompts for piped or redirected input. End of input reads
/// as an empty answer.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn text(&mut self, label: &str) -> io::Result<String> {
        self.read_line(label)
    }

    fn password(&mut self, label: &str) -> io::Result<String> {
        self.read_line(label)
    }

    fn id(&mut self, label: &str) -> io::Result<i64> {
        Ok(self.read_line(label)?.parse().unwrap_or_default())
    }

    fn flag(&mut self, label: &str) -> io::Result<bool> {
        Ok(self.read_line(label)?.parse().unwrap_or_default())
    }
}
