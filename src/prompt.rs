//! # Overwrite Confirmation
//!
//! The only interactive input of the tool is the yes/no question asked
//! when the destination directory already exists. It sits behind
//! [`ConfirmationProvider`] so the orchestrator can be driven by canned
//! answers in tests.
//!
//! Accepted affirmative answers are `y`, `yes`, `o` and `oui`, in any
//! case. Everything else, the empty line included, means no.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};
use log::debug;

use crate::error::{Error, Result};

/// Tokens accepted as a "yes" (English and French).
pub const AFFIRMATIVE_ANSWERS: [&str; 4] = ["y", "yes", "o", "oui"];

/// Returns `true` when `answer` is one of [`AFFIRMATIVE_ANSWERS`].
///
/// Surrounding whitespace is ignored and the comparison is case-insensitive.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE_ANSWERS.contains(&answer.as_str())
}

/// Something that can ask the user a yes/no question.
pub trait ConfirmationProvider {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// How [`StdinPrompt`] reads the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    /// `dialoguer` input line, drawn on stderr and read from the terminal.
    Terminal,
    /// `(y/N): ` on stdout and a single `read_line` from stdin.
    Line,
}

impl PromptMode {
    /// `dialoguer` draws on stderr and reads the terminal, so it is only
    /// usable when both are attached to one. A piped answer on stdin must
    /// win over the terminal.
    pub fn select(stdin_is_tty: bool, stderr_is_tty: bool) -> Self {
        if stdin_is_tty && stderr_is_tty {
            PromptMode::Terminal
        } else {
            PromptMode::Line
        }
    }

    pub fn detect() -> Self {
        Self::select(io::stdin().is_terminal(), Term::stderr().is_term())
    }
}

/// Asks on the terminal, falling back to a plain line read from stdin.
///
/// EOF on stdin counts as a negative answer.
#[derive(Debug, Clone)]
pub struct StdinPrompt {
    mode: PromptMode,
}

impl StdinPrompt {
    pub fn new() -> Self {
        Self::with_mode(PromptMode::detect())
    }

    pub fn with_mode(mode: PromptMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PromptMode {
        self.mode
    }

    fn ask_line(&self, prompt: &str) -> Result<String> {
        let stdin = io::stdin();
        read_answer(&mut stdin.lock(), &mut io::stdout(), prompt)
    }

    fn ask_terminal(&self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} (y/N)", prompt))
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(answer) => Ok(answer),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::NotConnected => {
                debug!("Terminal prompt unavailable ({}), reading stdin", e);
                self.ask_line(prompt)
            }
            Err(e) => Err(Error::Prompt {
                message: e.to_string(),
            }),
        }
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationProvider for StdinPrompt {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = match self.mode {
            PromptMode::Terminal => self.ask_terminal(prompt)?,
            PromptMode::Line => self.ask_line(prompt)?,
        };
        Ok(is_affirmative(&answer))
    }
}

/// Print `prompt (y/N): ` to `out` and read one line from `input`.
fn read_answer<R, W>(input: &mut R, out: &mut W, prompt: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{} (y/N): ", prompt)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Replays a fixed list of answers and records the prompts it saw.
///
/// Running out of answers is treated like EOF on stdin: a "no".
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompt {
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

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl ConfirmationProvider for ScriptedPrompt {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        let answer = self.answers.pop_front().unwrap_or_default();
        Ok(is_affirmative(&answer))
    }
}
