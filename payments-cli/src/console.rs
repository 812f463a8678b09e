//! Line-oriented console used by the interactive commands.

use std::io::{self, BufRead, Write};

use payments_types::{AppError, DomainError};

/// Errors raised while talking to the user.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    App(#[from] AppError),
}

impl From<DomainError> for ConsoleError {
    fn from(err: DomainError) -> Self {
        ConsoleError::App(err.into())
    }
}

/// Prompts on `output` and reads answers from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` and reads one line. End of input reads as empty.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    pub fn say_all<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_reads_line_without_newline() {
        let mut console = Console::new("42,5\r\nnext\n".as_bytes(), Vec::new());
        assert_eq!(console.prompt("Amount: ").unwrap(), "42,5");
        assert_eq!(console.prompt("Again: ").unwrap(), "next");
        assert_eq!(console.prompt("Eof: ").unwrap(), "");

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Amount: Again: Eof: ");
    }

    #[test]
    fn test_domain_errors_surface_as_invalid_input() {
        let err: ConsoleError = DomainError::NonPositiveAmount.into();
        assert!(matches!(err, ConsoleError::App(AppError::InvalidInput(_))));
    }
}
