// Thu Feb 12 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Location {
    path: String,
    line: usize,
}

impl Location {
    pub fn new(path: impl Into<String>, line: usize) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

impl From<Location> for String {
    fn from(loc: Location) -> String {
        loc.to_string()
    }
}

impl FromStr for Location {
    type Err = String;

    // Splits on the last colon so Windows-style drive prefixes survive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, line) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("Invalid location format: {}", s))?;
        let line = line
            .parse::<usize>()
            .map_err(|_| format!("Invalid line number in location: {}", s))?;
        if path.is_empty() {
            return Err(format!("Invalid location format: {}", s));
        }
        Ok(Location::new(path, line))
    }
}

impl TryFrom<String> for Location {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
