//! Line-oriented user input.
//!
//! Each non-empty stdin line is one command; unknown lines are logged and
//! skipped. End of input is reported as `AppEvent::InputClosed`.

use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use todoapp_core::FilterMode;
use tracing::warn;

use crate::runtime::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Filter(FilterMode),
    Dismiss,
    Render,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command `{0}` (try all, active, completed, dismiss, render, quit)")]
pub struct ParseCommandError(String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        if let Ok(mode) = word.parse::<FilterMode>() {
            return Ok(Command::Filter(mode));
        }
        match word.to_ascii_lowercase().as_str() {
            "dismiss" => Ok(Command::Dismiss),
            "render" => Ok(Command::Render),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ParseCommandError(word.to_string())),
        }
    }
}

/// Forward commands read from `reader` until it ends or the loop goes away.
pub fn spawn_input_reader<R>(reader: R, events: UnboundedSender<AppEvent>) -> JoinHandle<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = reader.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match line.parse::<Command>() {
                        Ok(command) => {
                            if events.send(AppEvent::Command(command)).is_err() {
                                return;
                            }
                        }
                        Err(err) => warn!(%err, "ignoring input"),
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    warn!(%err, "stdin read failed");
                    break;
                }
            }
        }
        let _ = events.send(AppEvent::InputClosed);
    })
}
