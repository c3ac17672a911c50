use crate::error::{Result, WeorcanjanError};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Decides, one candidate at a time, whether an application is kept.
pub trait SelectionStrategy {
    fn confirm(&mut self, candidate: &str) -> Result<bool>;
}

/// Asks on a terminal (or any reader/writer pair). Only an exact `y` keeps
/// the candidate; blank input, anything else and end of input all omit it.
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl PromptSelector<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> SelectionStrategy for PromptSelector<R, W> {
    fn confirm(&mut self, candidate: &str) -> Result<bool> {
        let prompt_err =
            |e: io::Error| WeorcanjanError::Config(format!("Failed to prompt: {}", e));

        writeln!(self.output, "Application: {}", candidate).map_err(prompt_err)?;
        write!(self.output, "Do you want to save {}? (y/n): ", candidate).map_err(prompt_err)?;
        self.output.flush().map_err(prompt_err)?;

        let mut input = String::new();
        let read = self
            .input
            .read_line(&mut input)
            .map_err(|e| WeorcanjanError::Config(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            writeln!(self.output).map_err(prompt_err)?;
        }

        let keep = input.trim_end_matches(&['\r', '\n'][..]) == "y";
        if !keep {
            writeln!(self.output, "Omitted {}", candidate).map_err(prompt_err)?;
        }
        Ok(keep)
    }
}

/// Replays canned answers, omitting everything once they run out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedSelector {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Candidates seen so far, in prompt order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl SelectionStrategy for ScriptedSelector {
    fn confirm(&mut self, candidate: &str) -> Result<bool> {
        self.asked.push(candidate.to_string());
        Ok(self.answers.pop_front().is_some_and(|answer| answer == "y"))
    }
}

/// Runs the strategy over every candidate and returns the kept ones in
/// prompt order. An empty result means there is nothing to save.
pub fn choose<'a, I, S>(candidates: I, strategy: &mut S) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'a String>,
    S: SelectionStrategy + ?Sized,
{
    let mut chosen = Vec::new();
    for candidate in candidates {
        if strategy.confirm(candidate)? {
            chosen.push(candidate.clone());
        }
    }
    Ok(chosen)
}
