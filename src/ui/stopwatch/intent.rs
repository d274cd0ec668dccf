//! Intents for the stopwatch.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the stopwatch reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwatchIntent {
    /// Begin advancing elapsed time.
    Start,

    /// Freeze elapsed time.
    Stop,

    /// One period of the ticker has elapsed.
    Tick,

    /// A tag that names no known intent. Reduces to the unchanged state.
    Unknown(String),
}

impl StopwatchIntent {
    /// Parse an intent tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "START" => Self::Start,
            "STOP" => Self::Stop,
            "TICK" => Self::Tick,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::Start => "START",
            Self::Stop => "STOP",
            Self::Tick => "TICK",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for StopwatchIntent {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl Intent for StopwatchIntent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse() {
        assert_eq!(StopwatchIntent::from_tag("START"), StopwatchIntent::Start);
        assert_eq!(StopwatchIntent::from_tag("STOP"), StopwatchIntent::Stop);
        assert_eq!(StopwatchIntent::from_tag("TICK"), StopwatchIntent::Tick);
    }

    #[test]
    fn matching_is_exact() {
        for tag in ["start", "STAR", "STARTED", " START", "TICK!"] {
            let intent = StopwatchIntent::from_tag(tag);
            assert_eq!(intent, StopwatchIntent::Unknown(tag.to_string()));
            assert!(!intent.is_known());
        }
    }

    #[test]
    fn tag_returns_original_text() {
        assert_eq!(StopwatchIntent::Tick.tag(), "TICK");
        assert_eq!(StopwatchIntent::from("RESET").tag(), "RESET");
    }
}
