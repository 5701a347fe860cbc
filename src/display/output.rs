//! Colored status messages
//!
//! Success lines go to stdout in green, errors to stderr in red. `colored`
//! honours `NO_COLOR` and `CLICOLOR_FORCE`.

use colored::Colorize;
use std::fmt;

/// Message categories used by the output helpers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Notice,
    Error,
}

/// Apply the color for `kind` to `message`
pub fn style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Success => text.bright_green().to_string(),
        MessageKind::Notice => text.yellow().to_string(),
        MessageKind::Error => text.bright_red().to_string(),
    }
}

pub fn success(message: impl fmt::Display) {
    println!("{}", style(MessageKind::Success, message));
}

pub fn notice(message: impl fmt::Display) {
    println!("{}", style(MessageKind::Notice, message));
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{}", style(MessageKind::Error, message));
}
