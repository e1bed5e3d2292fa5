use super::constants::{CMD_CLEAR, CMD_DISMISS, CMD_HELP, CMD_QUIT, CMD_SEARCH, CMD_TERM};

/// One gesture read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// New value of the search input.
    Input(String),
    Submit,
    /// 1-based position in the visible list.
    Dismiss(usize),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_line(line: &str) -> UserCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed == CMD_SEARCH {
        return UserCommand::Submit;
    }
    if !trimmed.starts_with('/') {
        return UserCommand::Input(line.to_string());
    }
    // Everything after "/term " is the term, slashes and spaces included.
    if let Some(rest) = line.trim_start().strip_prefix(CMD_TERM) {
        if rest.is_empty() {
            return UserCommand::Invalid(format!("usage: {CMD_TERM} TEXT"));
        }
        if let Some(term) = rest.strip_prefix(' ') {
            return UserCommand::Input(term.to_string());
        }
    }

    let mut parts = trimmed.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let arg = parts.next();
    match (command, arg) {
        (CMD_HELP, None) => UserCommand::Help,
        (CMD_QUIT, None) => UserCommand::Quit,
        (CMD_CLEAR, None) => UserCommand::Input(String::new()),
        (CMD_DISMISS, Some(n)) => match n.parse::<usize>() {
            Ok(index) if index > 0 => UserCommand::Dismiss(index),
            _ => UserCommand::Invalid(format!("not a story number: {n}")),
        },
        (CMD_DISMISS, None) => UserCommand::Invalid(format!("usage: {CMD_DISMISS} N")),
        _ => UserCommand::Invalid(format!("unknown command: {trimmed}")),
    }
}
