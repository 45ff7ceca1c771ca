//! Non-interactive name prompts.

use std::collections::VecDeque;
use std::sync::Mutex;

use luafile_core::{
    application::ports::{NamePrompt, PromptRequest},
    error::{LuafileError, LuafileResult},
};
use tracing::debug;

/// What a scripted user does when asked for a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Press enter on the suggestion.
    AcceptDefault,
    /// Type over the pre-selected span.
    Splice(String),
    /// Clear the field and type this.
    Exact(String),
    /// Dismiss the prompt.
    Cancel,
}

impl ScriptedAnswer {
    fn apply(&self, request: &PromptRequest) -> Option<String> {
        match self {
            Self::AcceptDefault => Some(request.default_value().to_string()),
            Self::Splice(typed) => Some(request.suggestion.splice(typed)),
            Self::Exact(text) => Some(text.clone()),
            Self::Cancel => None,
        }
    }
}

/// Prompt that replays answers in order.
///
/// Like an input box, it refuses to submit a value the request's validator
/// rejects; the validation error is returned instead.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<ScriptedAnswer>>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
        }
    }

    /// A prompt answering once with `answer`.
    pub fn once(answer: ScriptedAnswer) -> Self {
        Self::new([answer])
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or_default()
    }
}

impl NamePrompt for ScriptedPrompt {
    fn prompt(&self, request: &PromptRequest) -> LuafileResult<Option<String>> {
        let answer = self
            .answers
            .lock()
            .map_err(|_| LuafileError::Internal {
                message: "scripted prompt lock poisoned".into(),
            })?
            .pop_front()
            .ok_or_else(|| LuafileError::Internal {
                message: "scripted prompt ran out of answers".into(),
            })?;

        debug!(message = %request.message, ?answer, "Scripted prompt");

        match answer.apply(request) {
            Some(value) => {
                request.validate(&value)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}
