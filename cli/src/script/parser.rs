use crate::widget::{Direction, Unit, UnitError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

lazy_static! {
    /// One event per line: a command word, then an optional free-form argument.
    /// Examples: "unit px", "type 12,3", "commit \" 42 \"", "step increase", "render"
    static ref EVENT_LINE: Regex = Regex::new(
        r"^(?P<cmd>[A-Za-z]+)(?:\s+(?P<arg>.*?))?\s*$"
    ).unwrap();
}

/// A UI event as the DOM layer would deliver it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "arg", rename_all = "lowercase")]
pub enum ScriptEvent {
    /// Unit button click
    Unit(Unit),
    /// Input event: the field now holds this text
    Type(String),
    /// Focus loss. `None` commits whatever the field holds.
    Commit(Option<String>),
    /// Stepper button click
    Step(Direction),
    /// Snapshot only
    Render,
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptEvent::Unit(unit) => write!(f, "unit {}", unit),
            ScriptEvent::Type(text) => write!(f, "type {:?}", text),
            ScriptEvent::Commit(Some(text)) => write!(f, "commit {:?}", text),
            ScriptEvent::Commit(None) => write!(f, "commit"),
            ScriptEvent::Step(direction) => write!(f, "step {}", direction),
            ScriptEvent::Render => write!(f, "render"),
        }
    }
}

/// An event together with the script line it came from (1-based)
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub event: ScriptEvent,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: '{command}' needs an argument")]
    MissingArgument { line: usize, command: String },
    #[error("line {line}: '{command}' takes no argument")]
    UnexpectedArgument { line: usize, command: String },
    #[error("line {line}: {source}")]
    BadName {
        line: usize,
        #[source]
        source: UnitError,
    },
    #[error("line {line}: cannot parse '{text}'")]
    Malformed { line: usize, text: String },
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut events = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = parse_event(trimmed, line)?;
        events.push(ScriptLine { line, event });
    }
    Ok(events)
}

/// Parse a single event line
pub fn parse_event(text: &str, line: usize) -> Result<ScriptEvent, ScriptError> {
    let caps = EVENT_LINE
        .captures(text.trim())
        .ok_or_else(|| ScriptError::Malformed {
            line,
            text: text.to_string(),
        })?;

    let command = caps["cmd"].to_ascii_lowercase();
    let arg = caps
        .name("arg")
        .map(|m| m.as_str())
        .filter(|a| !a.is_empty())
        .map(unquote);

    let require = |arg: Option<String>| {
        arg.ok_or_else(|| ScriptError::MissingArgument {
            line,
            command: command.clone(),
        })
    };

    match command.as_str() {
        "unit" => require(arg)?
            .parse::<Unit>()
            .map(ScriptEvent::Unit)
            .map_err(|source| ScriptError::BadName { line, source }),
        "type" => Ok(ScriptEvent::Type(arg.unwrap_or_default())),
        "commit" => Ok(ScriptEvent::Commit(arg)),
        "step" => require(arg)?
            .parse::<Direction>()
            .map(ScriptEvent::Step)
            .map_err(|source| ScriptError::BadName { line, source }),
        "render" => match arg {
            None => Ok(ScriptEvent::Render),
            Some(_) => Err(ScriptError::UnexpectedArgument {
                line,
                command: command.clone(),
            }),
        },
        _ => Err(ScriptError::UnknownCommand {
            line,
            command: command.clone(),
        }),
    }
}

// "\" 42 \"" keeps its inner whitespace, "\"\"" is the empty string
fn unquote(arg: &str) -> String {
    if arg.len() >= 2 && arg.starts_with('"') && arg.ends_with('"') {
        arg[1..arg.len() - 1].to_string()
    } else {
        arg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_event("unit px", 1).unwrap(), ScriptEvent::Unit(Unit::Pixel));
        assert_eq!(
            parse_event("unit percent", 1).unwrap(),
            ScriptEvent::Unit(Unit::Percent)
        );
        assert_eq!(
            parse_event("type 12,3", 1).unwrap(),
            ScriptEvent::Type("12,3".to_string())
        );
        assert_eq!(
            parse_event("commit 150", 1).unwrap(),
            ScriptEvent::Commit(Some("150".to_string()))
        );
        assert_eq!(parse_event("commit", 1).unwrap(), ScriptEvent::Commit(None));
        assert_eq!(
            parse_event("step +", 1).unwrap(),
            ScriptEvent::Step(Direction::Increase)
        );
        assert_eq!(
            parse_event("STEP decrease", 1).unwrap(),
            ScriptEvent::Step(Direction::Decrease)
        );
        assert_eq!(parse_event("render", 1).unwrap(), ScriptEvent::Render);
    }

    #[test]
    fn test_quoted_arguments() {
        assert_eq!(
            parse_event(r#"commit " 42 ""#, 1).unwrap(),
            ScriptEvent::Commit(Some(" 42 ".to_string()))
        );
        assert_eq!(
            parse_event(r#"type """#, 1).unwrap(),
            ScriptEvent::Type(String::new())
        );
        assert_eq!(
            parse_event("type hello world", 1).unwrap(),
            ScriptEvent::Type("hello world".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_event("jump 3", 4),
            Err(ScriptError::UnknownCommand { line: 4, .. })
        ));
        assert!(matches!(
            parse_event("unit", 2),
            Err(ScriptError::MissingArgument { line: 2, .. })
        ));
        assert!(matches!(
            parse_event("unit em", 7),
            Err(ScriptError::BadName { line: 7, .. })
        ));
        assert!(matches!(
            parse_event("render now", 1),
            Err(ScriptError::UnexpectedArgument { .. })
        ));
        assert!(matches!(
            parse_event("12 34", 3),
            Err(ScriptError::Malformed { line: 3, .. })
        ));
    }

    #[test]
    fn test_parse_script_skips_comments() {
        let script = "# setup\nunit px\n\n   # indented comment\ncommit 500\nrender\n";
        let events = parse_script(script).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].line, 2);
        assert_eq!(events[1].line, 5);
        assert_eq!(events[2].event, ScriptEvent::Render);
    }

    #[test]
    fn test_error_message_names_line() {
        let err = parse_script("unit px\nstep sideways\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 2: Unknown stepper direction: 'sideways' (expected 'increase' or 'decrease')"
        );
    }
}
