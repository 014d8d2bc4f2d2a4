use crate::presenter::{Target, TelegramPresenter, parse_selection};
use debq_core::flow::{FlowError, Outcome, QuestionnaireFlow};
use debq_core::participant::ParticipantId;
use teloxide::RequestError;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use thiserror::Error;

#[derive(BotCommands, Debug, Clone, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub(crate) enum Command {
    #[command(description = "show the introduction")]
    Start,
    #[command(description = "start the questionnaire from the beginning")]
    Test,
}

#[derive(Debug, Error)]
pub(crate) enum HandlerError {
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error(transparent)]
    Request(#[from] RequestError),
}

pub(crate) fn schema() -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(Update::filter_callback_query().endpoint(on_callback))
}

fn participant_of(user: &teloxide::types::User) -> ParticipantId {
    ParticipantId(user.id.0)
}

async fn on_command(bot: Bot, msg: Message, command: Command, flow: QuestionnaireFlow) -> Result<(), HandlerError> {
    let Some(user) = msg.from.as_ref() else {
        tracing::debug!(chat_id = %msg.chat.id, "ignoring command without sender");
        return Ok(());
    };
    let participant_id = participant_of(user);
    let presenter = TelegramPresenter::new(bot, Target::Send(msg.chat.id));
    let outcome = match command {
        Command::Start => flow.on_start(participant_id, &presenter).await?,
        Command::Test => flow.on_test(participant_id, &presenter).await?,
    };
    tracing::debug!(%participant_id, ?command, ?outcome, "handled command");
    Ok(())
}

async fn on_callback(bot: Bot, query: CallbackQuery, flow: QuestionnaireFlow) -> Result<(), HandlerError> {
    bot.answer_callback_query(query.id.clone()).await?;

    let Some(value) = query.data.as_deref().and_then(parse_selection) else {
        tracing::debug!(data = ?query.data, "ignoring callback data");
        return Ok(());
    };
    let Some(message) = query.message.as_ref() else {
        tracing::debug!("ignoring callback without message");
        return Ok(());
    };
    let participant_id = participant_of(&query.from);
    let presenter = TelegramPresenter::new(bot, Target::Edit(message.chat().id, message.id()));

    match flow.on_selection(participant_id, value, &presenter).await? {
        Outcome::Ignored(error) => {
            tracing::debug!(%participant_id, error = &error as &dyn std::error::Error, "selection ignored");
        }
        outcome => tracing::trace!(%participant_id, ?outcome, "handled selection"),
    }
    Ok(())
}
