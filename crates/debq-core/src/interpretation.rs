use crate::scoring::Classification;
use debq_config::questionnaire::scale::ScaleKey;

#[must_use]
pub fn label(key: ScaleKey) -> &'static str {
    match key {
        ScaleKey::Restrained => "Ограничительное (диетическое) пищевое поведение",
        ScaleKey::Emotional => "Эмоциональное пищевое поведение",
        ScaleKey::External => "Экстернальное пищевое поведение",
    }
}

/// Short verdict shown next to a scale mean.
#[must_use]
pub fn phrase(key: ScaleKey, classification: Classification) -> &'static str {
    match (key, classification) {
        (ScaleKey::Restrained, Classification::Below) => "ниже нормы — тенденция к бесконтрольному приёму пищи",
        (ScaleKey::Restrained, Classification::Within) => "в пределах нормы — гибкие и разумные ограничения",
        (ScaleKey::Restrained, Classification::Above) => {
            "выше нормы — «осторожный/профессиональный» едок, напряжённые отношения с едой"
        }
        (ScaleKey::Emotional, Classification::Below) => "ниже нормы — выраженного заедания эмоций не отмечается",
        (ScaleKey::Emotional, Classification::Within) => "в пределах нормы — не склонны заедать эмоции",
        (ScaleKey::Emotional, Classification::Above) => "выше нормы — склонность «заедать» эмоции",
        (ScaleKey::External, Classification::Below) => "ниже нормы — обычно не переедаете из-за внешних стимулов",
        (ScaleKey::External, Classification::Within) => {
            "в пределах нормы — внешние стимулы мало влияют на объём пищи"
        }
        (ScaleKey::External, Classification::Above) => "выше нормы — склонность переедать из-за доступности/вида еды",
    }
}
