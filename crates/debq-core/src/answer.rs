use serde::Serialize;

/// A validated Likert answer between [`Answer::MIN`] and [`Answer::MAX`].
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Answer(u8);

impl Answer {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns `None` for anything outside of the offered choices.
    #[must_use]
    pub fn new(raw: i64) -> Option<Self> {
        let value = u8::try_from(raw).ok()?;
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Flips the answer for reverse coded questions: 1↔5, 2↔4, 3 stays.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self(Self::MAX + Self::MIN - self.0)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikertOption {
    pub label: &'static str,
    pub value: u8,
}

/// The five choices offered for every question, in display order.
pub const LIKERT_OPTIONS: [LikertOption; 5] = [
    LikertOption {
        label: "Никогда",
        value: 1,
    },
    LikertOption {
        label: "Редко",
        value: 2,
    },
    LikertOption {
        label: "Иногда",
        value: 3,
    },
    LikertOption {
        label: "Часто",
        value: 4,
    },
    LikertOption {
        label: "Очень часто",
        value: 5,
    },
];
