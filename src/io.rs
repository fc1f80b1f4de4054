//! Input/output seams between the engine and its presentation layer.
//!
//! The engine never touches a terminal directly: it pushes lines into a
//! `GameOutput` sink and pulls one line per prompt from a `GameInput` source.
//! Quitting is an ordinary `InputEvent::Quit` value that calling loops check
//! explicitly, never an out-of-band signal.

use std::collections::VecDeque;

/// One line read from the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    /// The player asked to leave the current activity.
    Quit,
}

pub trait GameInput {
    /// Blocks until the next line of input is available.
    fn read_line(&mut self) -> InputEvent;
}

pub trait GameOutput {
    fn line(&mut self, text: &str);

    /// A line the presentation layer may highlight (round banners, rewards).
    fn emphasis(&mut self, text: &str) {
        self.line(text);
    }

    /// A line reporting a declined action or bad input.
    fn error(&mut self, text: &str) {
        self.line(text);
    }
}

/// Pre-scripted input for tests and simulations. Yields `Quit` once the
/// script runs dry so driving loops always terminate.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push<S: Into<String>>(&mut self, line: S) {
        self.lines.push_back(line.into());
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl GameInput for ScriptedInput {
    fn read_line(&mut self) -> InputEvent {
        match self.lines.pop_front() {
            Some(line) => InputEvent::Line(line),
            None => InputEvent::Quit,
        }
    }
}

/// Output sink that records everything it is given.
#[derive(Debug, Default)]
pub struct BufferedOutput {
    pub lines: Vec<String>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl GameOutput for BufferedOutput {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
