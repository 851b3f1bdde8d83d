//! # Operator Prompts
//!
//! Some scans need one more answer from the operator before they can finish
//! (a name for an unknown code, a quantity to remove). The processor asks
//! through the [`Prompt`] trait and blocks on the reply.
//!
//! ## Suspension Point
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ScanProcessor::process                                                 │
//! │       │                                                                 │
//! │       ├── lookup                                                        │
//! │       │                                                                 │
//! │       ├── prompt.ask(request) ◄── single suspension, single resume     │
//! │       │        │                                                        │
//! │       │        ├── PromptReply::Value("Bolt")                          │
//! │       │        └── PromptReply::Cancelled                              │
//! │       │                                                                 │
//! │       └── mutate (or not)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! At most one prompt is outstanding at a time: `ask` takes `&mut self`.

use std::collections::VecDeque;
use std::fmt;

use crate::DEFAULT_REMOVAL_SUGGESTION;

/// A question put to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    /// An unknown code was scanned in add mode.
    ItemName { id: String },

    /// A known code was scanned in remove mode.
    RemovalQuantity { name: String, suggestion: String },

    /// The operator asked for admin access.
    AdminName,
}

impl PromptRequest {
    /// Builds a removal request with the default suggestion.
    pub fn removal(name: impl Into<String>) -> Self {
        PromptRequest::RemovalQuantity {
            name: name.into(),
            suggestion: DEFAULT_REMOVAL_SUGGESTION.to_string(),
        }
    }

    /// Pre-filled answer, if the prompt offers one.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            PromptRequest::RemovalQuantity { suggestion, .. } => Some(suggestion),
            _ => None,
        }
    }
}

impl fmt::Display for PromptRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptRequest::ItemName { id } => {
                write!(f, "New item detected ({id})! Enter item name:")
            }
            PromptRequest::RemovalQuantity { name, .. } => {
                write!(f, "Removing {name}. Enter quantity:")
            }
            PromptRequest::AdminName => f.write_str("Enter admin name:"),
        }
    }
}

/// The operator's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    /// Text entered (may be empty).
    Value(String),
    /// The operator declined to answer.
    Cancelled,
}

impl PromptReply {
    /// The entered text, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            PromptReply::Value(text) => Some(text),
            PromptReply::Cancelled => None,
        }
    }
}

/// Blocking operator input.
pub trait Prompt {
    /// Asks one question and waits for the reply.
    fn ask(&mut self, request: &PromptRequest) -> PromptReply;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, request: &PromptRequest) -> PromptReply {
        (**self).ask(request)
    }
}

// =============================================================================
// Scripted Prompt
// =============================================================================

/// Replays canned replies in order, then cancels.
///
/// Test double for operator input. Every request it receives is recorded.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    replies: VecDeque<PromptReply>,
    asked: Vec<PromptRequest>,
}

impl ScriptedPrompt {
    /// Creates a prompt that answers with each value in turn.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompt::from_replies(values.into_iter().map(|v| PromptReply::Value(v.into())))
    }

    /// Creates a prompt from explicit replies (including cancellations).
    pub fn from_replies(replies: impl IntoIterator<Item = PromptReply>) -> Self {
        ScriptedPrompt {
            replies: replies.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Requests received so far.
    pub fn asked(&self) -> &[PromptRequest] {
        &self.asked
    }

    /// Replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, request: &PromptRequest) -> PromptReply {
        self.asked.push(request.clone());
        self.replies.pop_front().unwrap_or(PromptReply::Cancelled)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_replays_then_cancels() {
        let mut prompt = ScriptedPrompt::new(["Bolt"]);
        let request = PromptRequest::ItemName {
            id: "ABC123".to_string(),
        };

        assert_eq!(prompt.ask(&request), PromptReply::Value("Bolt".to_string()));
        assert_eq!(prompt.ask(&request), PromptReply::Cancelled);
        assert_eq!(prompt.asked().len(), 2);
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn test_removal_request_suggests_one() {
        let request = PromptRequest::removal("Bolt");
        assert_eq!(request.suggestion(), Some("1"));
        assert_eq!(request.to_string(), "Removing Bolt. Enter quantity:");
        assert_eq!(PromptRequest::AdminName.suggestion(), None);
    }
}
