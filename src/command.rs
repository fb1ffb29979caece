use anyhow::Result;
use std::io::Write;

/// Object-safe trait for an action selected by the classifier.
///
/// An action owns whatever it captured from the tokens (a state code, a file name, ...)
/// and is consumed when executed, so a selected action runs at most once.
pub trait Action {
    /// Short, stable name of the action, e.g. "verify-state".
    fn name(&self) -> &'static str;

    /// Executes the action, writing human-readable text to `stdout`.
    fn execute(self: Box<Self>, stdout: &mut dyn Write) -> Result<()>;
}

/// A structural rule over a token sequence.
///
/// Returns `None` when the rule doesn't recognize the shape of `tokens`.
/// Rules are tried in order by [`crate::Classifier`]; the first `Some` wins.
pub trait CommandRule {
    /// Name of the rule, reported by tracing and returned from dispatch.
    fn name(&self) -> &'static str;

    /// Attempt to build the action for `tokens`.
    fn try_match(&self, tokens: &[&str]) -> Option<Box<dyn Action>>;
}
