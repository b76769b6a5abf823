//! Interactive questions asked on the terminal.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Source of answers for the interactive parts of the launch flow.
pub trait Prompter {
    /// Pick one of `options`; an empty answer picks `default` when it is one of them.
    fn select(&mut self, message: &str, options: &[String], default: Option<&str>)
        -> Result<String>;

    /// Free-text answer, trimmed.
    fn input(&mut self, message: &str) -> Result<String>;

    /// Yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Line-based prompter: questions go to `writer`, answers come from `reader`.
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Ask on stderr, read from stdin.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Wrap an arbitrary reader/writer pair.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{question}").map_err(Error::Prompt)?;
        self.writer.flush().map_err(Error::Prompt)?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(Error::Prompt)?;
        if read == 0 {
            return Err(Error::PromptCancelled);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}").map_err(Error::Prompt)
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn select(
        &mut self,
        message: &str,
        options: &[String],
        default: Option<&str>,
    ) -> Result<String> {
        let default_idx = default.and_then(|d| options.iter().position(|o| o == d));

        self.say(&format!("\n{message}"))?;
        for (i, option) in options.iter().enumerate() {
            self.say(&format!("  {}. {option}", i + 1))?;
        }
        let question = default_idx.map_or_else(
            || "Choice: ".to_string(),
            |idx| format!("Choice [{}]: ", idx + 1),
        );

        loop {
            let answer = self.ask(&question)?;
            if let Some(choice) = pick(options, &answer, default_idx) {
                return Ok(choice.clone());
            }
            self.say("Invalid choice, please try again.")?;
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        self.ask(&format!("{message} "))
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            let answer = self.ask(&format!("{message} [{hint}] "))?;
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }
}

/// Resolve an answer to an option: blank means default, then a 1-based
/// number, then the exact option text.
fn pick<'a>(options: &'a [String], answer: &str, default_idx: Option<usize>) -> Option<&'a String> {
    if answer.is_empty() {
        return default_idx.and_then(|idx| options.get(idx));
    }
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|idx| options.get(idx));
    }
    options.iter().find(|o| *o == answer)
}
