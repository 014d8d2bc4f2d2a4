use serde::Serialize;
use std::fmt;

/// Identifies the person taking the questionnaire, e.g. a Telegram user id.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for ParticipantId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
