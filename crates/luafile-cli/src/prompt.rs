//! Interactive name prompt.
//!
//! The terminal cannot pre-select a range, so the suggestion is printed with
//! its editable span marked and the input box starts out holding the whole
//! default name.

use std::io;

use console::Term;
use dialoguer::{Input, theme::ColorfulTheme};
use tracing::debug;

use luafile_core::{
    application::ports::{NamePrompt, PromptRequest},
    error::{Context as _, LuafileResult},
};

use crate::output::render_suggestion;

/// [`NamePrompt`] backed by `dialoguer`. Talks to stderr.
pub struct DialoguerPrompt {
    color: bool,
    term: Term,
}

impl DialoguerPrompt {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            term: Term::stderr(),
        }
    }
}

impl NamePrompt for DialoguerPrompt {
    fn prompt(&self, request: &PromptRequest) -> LuafileResult<Option<String>> {
        let hint = format!(
            "Suggested: {}  (replace the marked part)",
            render_suggestion(&request.suggestion, self.color)
        );
        self.term
            .write_line(&hint)
            .context("terminal prompt failed")?;

        let theme = ColorfulTheme::default();
        let answer = Input::<String>::with_theme(&theme)
            .with_prompt(&request.message)
            .with_initial_text(request.default_value())
            // Empty submits reach the validator and are refused there
            .allow_empty(true)
            .validate_with(|input: &String| check_answer(request, input))
            .interact_text_on(&self.term);

        match answer {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                debug!("Prompt interrupted");
                Ok(None)
            }
            other => other.map(Some).context("terminal prompt failed"),
        }
    }
}

/// Inline validation for the input box. Only Ctrl-C dismisses the prompt.
fn check_answer(request: &PromptRequest, input: &str) -> Result<(), String> {
    request.validate(input).map(|_| ()).map_err(|e| e.to_string())
}
