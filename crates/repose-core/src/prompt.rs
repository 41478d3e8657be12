//! Operator interaction: status lines, questions and answers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented conversation with the operator.
pub trait Prompt {
    /// Print a full status line.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Print a question without a trailing newline so the answer follows it.
    fn write_prompt(&mut self, text: &str) -> io::Result<()>;

    /// Read one line of input, without its line ending.
    fn read_line(&mut self) -> io::Result<String>;
}

/// [`Prompt`] over any buffered reader and writer.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Create a prompt from a reader and writer pair.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompt, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LinePrompt<StdinLock<'static>, Stdout> {
    /// Prompt attached to the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }

    fn write_prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Print a status line; a closed or broken stdout only loses the message.
pub fn announce(prompt: &mut dyn Prompt, line: &str) {
    if let Err(e) = prompt.say(line) {
        tracing::debug!("could not write status line: {e}");
    }
}

/// Ask a yes/no question where an empty answer means yes.
///
/// Only `yes` (any case, surrounding whitespace ignored) or an empty line
/// count as agreement.
pub fn confirm(prompt: &mut dyn Prompt, question: &str) -> io::Result<bool> {
    prompt.write_prompt(&format!("{question} (Yes/no) "))?;
    let answer = prompt.read_line()?.trim().to_lowercase();
    Ok(answer.is_empty() || answer == "yes")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn answer(input: &str) -> io::Result<bool> {
        let mut prompt = LinePrompt::new(Cursor::new(input.to_string()), Vec::new());
        confirm(&mut prompt, "Create it?")
    }

    #[test]
    fn test_empty_line_is_yes() {
        assert!(answer("\n").expect("answer"));
        assert!(answer("   \r\n").expect("answer"));
    }

    #[test]
    fn test_yes_any_case() {
        assert!(answer("yes\n").expect("answer"));
        assert!(answer("  YES \n").expect("answer"));
        assert!(answer("Yes").expect("answer"));
    }

    #[test]
    fn test_anything_else_declines() {
        for input in ["no\n", "n\n", "y\n", "yep\n", "nope\n"] {
            assert!(!answer(input).expect("answer"), "{input:?} should decline");
        }
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let err = answer("").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_question_has_no_trailing_newline() {
        let mut prompt = LinePrompt::new(Cursor::new("no\n".to_string()), Vec::new());
        confirm(&mut prompt, "Create it?").expect("answer");

        let written = String::from_utf8(prompt.into_writer()).expect("utf8");
        assert_eq!(written, "Create it? (Yes/no) ");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_announce_survives_closed_output() {
        let mut prompt = LinePrompt::new(Cursor::new(String::new()), BrokenPipe);
        assert!(prompt.say("lost").is_err());
        announce(&mut prompt, "lost");
    }

    #[test]
    fn test_say_writes_full_line() {
        let mut prompt = LinePrompt::new(Cursor::new(String::new()), Vec::new());
        prompt.say("done").expect("say");
        assert_eq!(prompt.into_writer(), b"done\n");
    }
}
