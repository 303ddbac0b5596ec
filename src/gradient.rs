use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::mix::MixResult;

/// Gradient axis for the applied background
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "to right")]
    ToRight,
    #[serde(rename = "to left")]
    ToLeft,
    #[serde(rename = "to bottom")]
    ToBottom,
    #[serde(rename = "to top")]
    ToTop,
}

impl Direction {
    /// All selectable directions, in display order
    pub const ALL: [Direction; 4] = [
        Direction::ToRight,
        Direction::ToLeft,
        Direction::ToBottom,
        Direction::ToTop,
    ];

    /// The CSS literal for this direction
    pub fn css(self) -> &'static str {
        match self {
            Direction::ToRight => "to right",
            Direction::ToLeft => "to left",
            Direction::ToBottom => "to bottom",
            Direction::ToTop => "to top",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gradient direction '{0}' (expected to-right, to-left, to-bottom or to-top)")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts the CSS literal ("to right") or its kebab-case form
    /// ("to-right"), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', " ").as_str() {
            "to right" => Ok(Direction::ToRight),
            "to left" => Ok(Direction::ToLeft),
            "to bottom" => Ok(Direction::ToBottom),
            "to top" => Ok(Direction::ToTop),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Format the CSS background descriptor for a blended color
pub fn linear_gradient(direction: Direction, mix: &MixResult) -> String {
    format!("linear-gradient({}, {})", direction, mix)
}
