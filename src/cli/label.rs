use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Node payload read from a JSON tree file.
///
/// Strings display without quotes, every other value in its JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub Value);

impl Label {
    /// Interprets a command line argument: JSON when it parses, plain string otherwise.
    pub fn parse_arg(arg: &str) -> Self {
        Self(serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string())))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}
