use crate::interpretation::label;
use crate::scoring::ScoreResult;
use debq_config::questionnaire::question::{QUESTION_COUNT, Question};
use std::fmt::Write;

pub const WELCOME: &str = "Привет! Это DEBQ-тест (33 вопроса) про пищевое поведение. \
Ответы: Никогда–Очень часто. Нажмите /test чтобы начать.\n\n\
Важно: это не медицинский диагноз.";

pub const NOT_STARTED: &str = "Сессия не найдена или устарела. Нажмите /test чтобы начать тест заново.";

const HEADER: &str = "🧮 Ваши результаты (средние баллы по шкалам)";

const EXPLANATION: &str = "\nℹ️ Пояснения:\n\
— По ограничительной шкале около нормы — проблем с гибкими ограничениями нет; выше нормы — напряжённые отношения с едой; \
ниже нормы — склонность к бесконтрольному приёму пищи. \
— Эмоциональная шкала: выше нормы — трудность справляться с эмоциями без еды; норма — обычно не «заедаете»; \
— Экстернальная шкала: выше нормы — переедание из-за вида/доступности еды; ниже — внешние стимулы мало влияют.";

const DISCLAIMER: &str = "\n⚠️ Это скрининг, а не диагноз. При выраженных беспокойствах стоит обратиться к врачу/психологу, \
особенно если есть подозрения на РПП.";

/// How emphasis is expressed in rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Markup {
    #[default]
    Plain,
    /// Telegram flavoured HTML.
    Html,
}

impl Markup {
    fn text(self, text: &str) -> String {
        match self {
            Self::Plain => text.to_owned(),
            Self::Html => escape_html(text),
        }
    }

    fn bold(self, text: &str) -> String {
        match self {
            Self::Plain => text.to_owned(),
            Self::Html => format!("<b>{}</b>", escape_html(text)),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Formats a score with at least one decimal place: `3.0`, `3.2`, `2.46`.
#[must_use]
pub fn format_score(value: f64) -> String {
    let formatted = value.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{formatted}.0")
    }
}

#[must_use]
pub fn question_prompt(question: &Question) -> String {
    format!(
        "Вопрос {}/{QUESTION_COUNT}\n\n{}\n\nВыберите вариант:",
        question.id, question.text
    )
}

/// Renders the final report: one line per scale followed by the explanations and the disclaimer.
#[must_use]
pub fn render_report(result: &ScoreResult, markup: Markup) -> String {
    let mut report = markup.bold(HEADER);
    for score in &result.scales {
        let _ = write!(
            report,
            "\n• {}: {} (норма {}) — {}",
            markup.text(label(score.key)),
            markup.bold(&format_score(score.mean)),
            format_score(score.norm),
            markup.text(score.phrase),
        );
    }
    report.push('\n');
    report.push_str(&markup.text(EXPLANATION));
    report.push('\n');
    report.push_str(&markup.text(DISCLAIMER));
    report
}
