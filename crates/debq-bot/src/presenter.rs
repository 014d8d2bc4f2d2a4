use async_trait::async_trait;
use debq_config::questionnaire::question::Question;
use debq_core::answer::LikertOption;
use debq_core::flow::Presenter;
use debq_core::participant::ParticipantId;
use debq_core::report::{Markup, question_prompt, render_report};
use debq_core::scoring::ScoreResult;
use teloxide::RequestError;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode};

pub(crate) const ANSWER_PREFIX: &str = "ans:";

/// Where the next thing is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    /// A new message in the chat.
    Send(ChatId),
    /// Replace the message that carried the pressed button.
    Edit(ChatId, MessageId),
}

pub(crate) struct TelegramPresenter {
    bot: Bot,
    target: Target,
}

impl TelegramPresenter {
    pub(crate) fn new(bot: Bot, target: Target) -> Self {
        Self { bot, target }
    }
}

pub(crate) fn keyboard(choices: &[LikertOption]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(choices.iter().map(|choice| {
        [InlineKeyboardButton::callback(
            choice.label,
            format!("{ANSWER_PREFIX}{}", choice.value),
        )]
    }))
}

/// Extracts the selected value from callback data. Anything but `ans:{integer}` is not a selection.
pub(crate) fn parse_selection(data: &str) -> Option<i64> {
    data.strip_prefix(ANSWER_PREFIX)?.trim().parse().ok()
}

#[async_trait]
impl Presenter for TelegramPresenter {
    type Error = RequestError;

    async fn present_notice(&self, participant_id: ParticipantId, text: &str) -> Result<(), Self::Error> {
        tracing::trace!(%participant_id, "sending notice");
        match self.target {
            Target::Send(chat_id) => {
                self.bot.send_message(chat_id, text).await?;
            }
            Target::Edit(chat_id, message_id) => {
                self.bot.edit_message_text(chat_id, message_id, text).await?;
            }
        }
        Ok(())
    }

    async fn present_question(
        &self,
        participant_id: ParticipantId,
        question: &Question,
        choices: &[LikertOption],
    ) -> Result<(), Self::Error> {
        tracing::trace!(%participant_id, question = question.id, "sending question");
        let text = question_prompt(question);
        let keyboard = keyboard(choices);
        match self.target {
            Target::Send(chat_id) => {
                self.bot.send_message(chat_id, text).reply_markup(keyboard).await?;
            }
            Target::Edit(chat_id, message_id) => {
                self.bot
                    .edit_message_text(chat_id, message_id, text)
                    .reply_markup(keyboard)
                    .await?;
            }
        }
        Ok(())
    }

    async fn present_result(&self, participant_id: ParticipantId, result: &ScoreResult) -> Result<(), Self::Error> {
        tracing::trace!(%participant_id, "sending report");
        let report = render_report(result, Markup::Html);
        match self.target {
            Target::Send(chat_id) => {
                self.bot.send_message(chat_id, report).parse_mode(ParseMode::Html).await?;
            }
            Target::Edit(chat_id, message_id) => {
                self.bot
                    .edit_message_text(chat_id, message_id, report)
                    .parse_mode(ParseMode::Html)
                    .await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debq_core::answer::LIKERT_OPTIONS;
    use teloxide::types::InlineKeyboardButtonKind;
    use test_log::test;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("ans:3"), Some(3));
        assert_eq!(parse_selection("ans:5"), Some(5));
        assert_eq!(parse_selection("ans:9"), Some(9));
        assert_eq!(parse_selection("ans:"), None);
        assert_eq!(parse_selection("ans:x"), None);
        assert_eq!(parse_selection("other:3"), None);
        assert_eq!(parse_selection("3"), None);
    }

    #[test]
    fn test_keyboard_has_one_row_per_choice() {
        let keyboard = keyboard(&LIKERT_OPTIONS);
        assert_eq!(keyboard.inline_keyboard.len(), 5);
        let first = &keyboard.inline_keyboard[0];
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].text, "Никогда");
        assert_eq!(
            first[0].kind,
            InlineKeyboardButtonKind::CallbackData("ans:1".to_owned())
        );
        let last = &keyboard.inline_keyboard[4][0];
        assert_eq!(last.text, "Очень часто");
        assert_eq!(last.kind, InlineKeyboardButtonKind::CallbackData("ans:5".to_owned()));
    }
}
