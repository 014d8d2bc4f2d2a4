use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, PromptViMode};
use std::borrow::Cow;

pub static PROMPT_INDICATOR: &str = "〉";
pub static VI_INSERT_PROMPT_INDICATOR: &str = ": ";
pub static MULTILINE_INDICATOR: &str = "::: ";

/// Shows where the participant currently is, e.g. `5/33〉`.
#[derive(Clone, Default)]
pub struct ProgressPrompt {
    progress: Option<String>,
}

impl ProgressPrompt {
    pub fn set_progress(&mut self, progress: Option<String>) {
        self.progress = progress;
    }
}

impl Prompt for ProgressPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        self.progress.as_deref().map_or(Cow::Borrowed("debq"), Cow::Borrowed)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::from("")
    }

    fn render_prompt_indicator(&self, prompt_mode: PromptEditMode) -> Cow<'_, str> {
        match prompt_mode {
            PromptEditMode::Vi(PromptViMode::Insert) => VI_INSERT_PROMPT_INDICATOR.into(),
            PromptEditMode::Custom(mode) => format!("({mode})").into(),
            _ => PROMPT_INDICATOR.into(),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(MULTILINE_INDICATOR)
    }

    fn render_prompt_history_search_indicator(&self, history_search: PromptHistorySearch) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({prefix}search) \"{}\": ", history_search.term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_left_prompt_shows_progress() {
        let mut prompt = ProgressPrompt::default();
        assert_eq!(prompt.render_prompt_left(), "debq");
        prompt.set_progress(Some("5/33".to_owned()));
        assert_eq!(prompt.render_prompt_left(), "5/33");
        assert_eq!(prompt.render_prompt_indicator(PromptEditMode::Emacs), PROMPT_INDICATOR);
    }
}
