use crate::answer::Answer;
use crate::error::ScoringError;
use crate::interpretation::phrase;
use debq_config::questionnaire::question::{QUESTION_COUNT, QuestionId};
use debq_config::questionnaire::scale::{SCALES, Scale, ScaleKey, is_reverse_coded};
use serde::Serialize;
use std::collections::BTreeMap;
use strum::EnumIter;

pub type Answers = BTreeMap<QuestionId, Answer>;

/// Half width of the band around a norm that still counts as normal.
pub const NORM_BAND: f64 = 0.2;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Classification {
    Below,
    Within,
    Above,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScaleScore {
    pub key: ScaleKey,
    /// Mean of the scale's answers, rounded to two decimal places.
    pub mean: f64,
    pub norm: f64,
    pub classification: Classification,
    pub phrase: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// One entry per scale, in questionnaire order.
    pub scales: Vec<ScaleScore>,
}

impl ScoreResult {
    #[must_use]
    pub fn get(&self, key: ScaleKey) -> Option<&ScaleScore> {
        self.scales.iter().find(|score| score.key == key)
    }
}

/// Scores a complete set of answers.
///
/// Reverse coded questions are flipped first, then every scale is averaged, rounded to two
/// decimal places (half away from zero) and classified against its norm.
pub fn score(answers: &Answers) -> Result<ScoreResult, ScoringError> {
    check_complete(answers)?;
    let scales = SCALES
        .iter()
        .map(|scale| {
            let mean = round_to_hundredths(mean(scale, answers));
            let classification = classify(mean, scale.norm);
            ScaleScore {
                key: scale.key,
                mean,
                norm: scale.norm,
                classification,
                phrase: phrase(scale.key, classification),
            }
        })
        .collect();
    Ok(ScoreResult { scales })
}

fn check_complete(answers: &Answers) -> Result<(), ScoringError> {
    let missing: Vec<_> = (1..=QUESTION_COUNT).filter(|id| !answers.contains_key(id)).collect();
    let unexpected: Vec<_> = answers
        .keys()
        .copied()
        .filter(|id| !(1..=QUESTION_COUNT).contains(id))
        .collect();
    if missing.is_empty() && unexpected.is_empty() {
        return Ok(());
    }
    Err(ScoringError::IncompleteAnswers { missing, unexpected })
}

fn mean(scale: &Scale, answers: &Answers) -> f64 {
    let (sum, count) = scale
        .questions
        .clone()
        .filter_map(|id| {
            let answer = *answers.get(&id)?;
            Some(if is_reverse_coded(id) { answer.reversed() } else { answer })
        })
        .fold((0u32, 0u32), |(sum, count), answer| {
            (sum + u32::from(answer.value()), count + 1)
        });
    f64::from(sum) / f64::from(count)
}

#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[allow(clippy::cast_possible_truncation)]
fn hundredths(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Classifies a (rounded) mean. Both band edges count as [`Classification::Within`].
///
/// The comparison happens on whole hundredths so that edges like `2.4 - 0.2` are exact.
#[must_use]
pub fn classify(mean: f64, norm: f64) -> Classification {
    let mean = hundredths(mean);
    let norm = hundredths(norm);
    let band = hundredths(NORM_BAND);
    if mean < norm - band {
        Classification::Below
    } else if mean > norm + band {
        Classification::Above
    } else {
        Classification::Within
    }
}
