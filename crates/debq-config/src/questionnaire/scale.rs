use crate::questionnaire::question::QuestionId;
use serde::Serialize;
use std::ops::RangeInclusive;
use strum::{EnumIter, IntoStaticStr};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScaleKey {
    Restrained,
    Emotional,
    External,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    pub key: ScaleKey,
    /// Questions averaged into this scale.
    pub questions: RangeInclusive<QuestionId>,
    /// Published reference mean.
    pub norm: f64,
}

impl Scale {
    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.questions.contains(&id)
    }
}

/// The three DEBQ scales. Their ranges partition the question ids.
pub static SCALES: [Scale; 3] = [
    Scale {
        key: ScaleKey::Restrained,
        questions: 1..=10,
        norm: 2.4,
    },
    Scale {
        key: ScaleKey::Emotional,
        questions: 11..=23,
        norm: 1.8,
    },
    Scale {
        key: ScaleKey::External,
        questions: 24..=33,
        norm: 2.7,
    },
];

/// Questions phrased in the opposite sense to the rest of their scale.
pub static REVERSE_CODED: [QuestionId; 1] = [31];

#[must_use]
pub fn is_reverse_coded(id: QuestionId) -> bool {
    REVERSE_CODED.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::question::QUESTION_COUNT;
    use strum::IntoEnumIterator;
    use test_log::test;

    #[test]
    fn test_scales_partition_question_ids() {
        for id in 1..=QUESTION_COUNT {
            let owners = SCALES.iter().filter(|scale| scale.contains(id)).count();
            assert_eq!(owners, 1, "question {id} belongs to {owners} scales");
        }
        assert!(!SCALES.iter().any(|scale| scale.contains(0)));
        assert!(!SCALES.iter().any(|scale| scale.contains(QUESTION_COUNT + 1)));
        let total: usize = SCALES.iter().map(|scale| scale.questions.clone().count()).sum();
        assert_eq!(total, QUESTION_COUNT as usize);
    }

    #[test]
    fn test_scales_in_key_order() {
        let keys: Vec<_> = SCALES.iter().map(|scale| scale.key).collect();
        assert_eq!(keys, ScaleKey::iter().collect::<Vec<_>>());
        assert_eq!(SCALES[1].questions, 11..=23);
        assert!((SCALES[2].norm - 2.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reverse_coded_ids_are_questions() {
        assert!(REVERSE_CODED.iter().all(|id| (1..=QUESTION_COUNT).contains(id)));
        assert!(is_reverse_coded(31));
        assert!(!is_reverse_coded(30));
        assert!(SCALES[2].contains(31));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(ScaleKey::Restrained.to_string(), "restrained");
        let name: &'static str = ScaleKey::External.into();
        assert_eq!(name, "external");
    }
}
