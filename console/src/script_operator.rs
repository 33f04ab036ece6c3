use std::{collections::VecDeque, path::Path};

use async_trait::async_trait;
use types::{Command, GameState, Operator};

use crate::parser::CommandParser;

/// Replays pre-recorded command lines. Blank lines and `#` comments are
/// skipped; lines that do not parse are logged and skipped.
#[derive(Debug, Default)]
pub struct ScriptOperator {
    parser: CommandParser,
    lines: VecDeque<String>,
    messages: Vec<String>,
}

impl ScriptOperator {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parser: CommandParser::new(),
            lines: lines.into_iter().map(Into::into).collect(),
            messages: Vec::new(),
        }
    }

    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        log::info!("Loaded script {}", path.display());
        Ok(Self::new(content.lines()))
    }

    /// Everything the session reported back, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

#[async_trait]
impl Operator for ScriptOperator {
    async fn next_command(&mut self, _state: &GameState) -> Option<Command> {
        while let Some(line) = self.lines.pop_front() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match self.parser.parse(trimmed) {
                Ok(command) => {
                    log::debug!("Script command: {command}");
                    return Some(command);
                }
                Err(err) => {
                    log::warn!("Skipping script line: {err}");
                    self.messages.push(err);
                }
            }
        }
        None
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
