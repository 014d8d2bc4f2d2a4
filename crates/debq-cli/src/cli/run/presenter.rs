use async_trait::async_trait;
use debq_config::questionnaire::question::Question;
use debq_core::answer::LikertOption;
use debq_core::flow::Presenter;
use debq_core::participant::ParticipantId;
use debq_core::report::{Markup, question_prompt, render_report};
use debq_core::scoring::ScoreResult;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Prints everything as plain text to a writer, normally stdout.
pub(crate) struct ConsolePresenter<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsolePresenter<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    fn print(&self, text: &str) -> std::io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{text}\n")?;
        out.flush()
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<W: Write + Send> Presenter for ConsolePresenter<W> {
    type Error = std::io::Error;

    async fn present_notice(&self, _participant_id: ParticipantId, text: &str) -> Result<(), Self::Error> {
        self.print(text)
    }

    async fn present_question(
        &self,
        _participant_id: ParticipantId,
        question: &Question,
        choices: &[LikertOption],
    ) -> Result<(), Self::Error> {
        let choices = choices
            .iter()
            .map(|choice| format!("  {}. {}", choice.value, choice.label))
            .collect::<Vec<_>>()
            .join("\n");
        self.print(&format!("{}\n{choices}", question_prompt(question)))
    }

    async fn present_result(&self, _participant_id: ParticipantId, result: &ScoreResult) -> Result<(), Self::Error> {
        self.print(&render_report(result, Markup::Plain))
    }
}
