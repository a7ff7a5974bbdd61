use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::ui::Palette;

/// Source of the player's answers
pub trait PlayerInput {
    /// Show `prompt` and block until the player enters a line
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Reads answers line by line, echoing a styled prompt first
pub struct LineInput<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

/// Production input: prompts on stdout, answers from stdin
pub type StdinInput = LineInput<io::StdinLock<'static>, io::Stdout>;

impl StdinInput {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PlayerInput for LineInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{} ", Palette::prompt(format!(" {prompt} ")))?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before every blank was filled",
            ));
        }
        Ok(line.trim().to_string())
    }
}

/// Answers queued up front, for headless sessions and tests
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl PlayerInput for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answers left"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_input_trims_answers_and_shows_prompt() {
        let mut out = Vec::new();
        let mut input = LineInput::new(Cursor::new("  cat \ndog\n"), &mut out);

        assert_eq!(input.read_line("Enter blank word:").unwrap(), "cat");
        assert_eq!(input.read_line("Enter blank word:").unwrap(), "dog");
        drop(input);

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Enter blank word:"));
    }

    #[test]
    fn line_input_eof_is_an_error() {
        let mut input = LineInput::new(Cursor::new(""), Vec::new());
        let err = input.read_line("Enter blank word:").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn scripted_input_replays_answers_in_order() {
        let mut input = ScriptedInput::new(["first", "second"]);
        assert_eq!(input.read_line("a").unwrap(), "first");
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.read_line("b").unwrap(), "second");
        assert!(input.read_line("c").is_err());
        assert_eq!(input.prompts(), ["a", "b", "c"]);
    }
}
