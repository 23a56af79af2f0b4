//! Line-oriented host adapter
//!
//! Maps the external driver's named messages onto a `Game`:
//! - `update` advances one tick, replies with `event <kind>` lines then `didUpdate`
//! - `input <NONE|LEFT|RIGHT>` steers (or restarts after game over)
//! - `getPixels` replies with the snapshot line
//! - `initialize` starts a fresh session

use std::str::FromStr;

use thiserror::Error;

use crate::sim::{Direction, Game, ParseDirectionError};

/// Reply sent after every `update`
pub const DID_UPDATE: &str = "didUpdate";

/// Errors from parsing a host line; none of them touch the game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("rejected input: {0}")]
    InvalidDirection(#[from] ParseDirectionError),
}

/// One message from the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Update,
    Input(Direction),
    GetPixels,
    Initialize,
}

impl FromStr for HostCommand {
    type Err = HostError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(HostError::Empty)?;
        match name {
            "update" => Ok(HostCommand::Update),
            "getPixels" => Ok(HostCommand::GetPixels),
            "initialize" => Ok(HostCommand::Initialize),
            "input" => {
                let token = words.next().ok_or(HostError::MissingArgument("input"))?;
                Ok(HostCommand::Input(token.parse()?))
            }
            other => Err(HostError::UnknownCommand(other.to_string())),
        }
    }
}

/// Owns one game and answers driver messages
#[derive(Debug, Clone, Default)]
pub struct Host {
    game: Game,
}

impl Host {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run a parsed command, returning the reply lines
    pub fn handle(&mut self, command: HostCommand) -> Vec<String> {
        match command {
            HostCommand::Update => {
                let mut replies: Vec<String> = self
                    .game
                    .update()
                    .into_iter()
                    .map(|event| format!("event {event}"))
                    .collect();
                replies.push(DID_UPDATE.to_string());
                replies
            }
            HostCommand::Input(direction) => {
                log::debug!("Input {}", direction.as_str());
                self.game.input(direction);
                Vec::new()
            }
            HostCommand::GetPixels => vec![self.game.snapshot().to_string()],
            HostCommand::Initialize => {
                self.game.initialize();
                Vec::new()
            }
        }
    }

    /// Parse and run one line; blank lines are ignored
    pub fn handle_line(&mut self, line: &str) -> Result<Vec<String>, HostError> {
        if line.trim().is_empty() {
            return Ok(Vec::new());
        }
        let command: HostCommand = line.parse()?;
        Ok(self.handle(command))
    }
}
