//! Line-oriented prompt helpers.
//!
//! [`Prompter`] is generic over its streams so the validation loops can be
//! unit-tested against in-memory buffers. Interactive code builds short-lived
//! prompters over stdio via [`stdio`]; the locks are released when the value
//! is dropped at the end of the statement.
use std::io::{self, BufRead, Write};

/// Prompt/read pair over arbitrary streams.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

/// Prompter over the process stdio.
pub fn stdio() -> Prompter<io::StdinLock<'static>, io::Stdout> {
    Prompter::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    /// Prints `prompt` without a newline and reads one trimmed line.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_owned())
    }

    /// Asks until the user enters an integer of at least `min`.
    pub fn prompt_count(&mut self, prompt: &str, min: usize) -> io::Result<usize> {
        loop {
            let raw = self.prompt_line(prompt)?;
            match raw.parse::<usize>() {
                Ok(count) if count >= min => return Ok(count),
                _ => self.say(&format!(
                    "You have entered a wrong amount ({min} or more). Try again..."
                ))?,
            }
        }
    }

    /// Yes/no question; `y`/`Y` means yes, anything else no.
    pub fn prompt_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.prompt_line(&format!("{prompt} (y/n): "))?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Waits for the user to press Enter.
    pub fn pause(&mut self, prompt: &str) -> io::Result<()> {
        self.prompt_line(prompt).map(|_| ())
    }
}
