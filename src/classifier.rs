use crate::command::{Action, CommandRule};
use crate::rules::*;
use anyhow::Result;
use std::io::Write;

/// The outcome of classifying a token sequence: the rule that fired and the
/// action it selected, not yet executed.
pub struct Selection {
    pub rule: &'static str,
    pub action: Box<dyn Action>,
}

/// Ordered, first-match-wins command classifier.
///
/// The classifier holds a list of [`CommandRule`] objects that are queried in order.
/// See [`Default`] for the built-in rule set, which matches every input.
///
/// Example
/// ```
/// use license_commands::Classifier;
/// let classifier = Classifier::default();
/// let mut out: Vec<u8> = Vec::new();
/// let rule = classifier.dispatch(&["verify", "--state", "VA"], &mut out).unwrap();
/// assert_eq!(rule, "verify-state");
/// ```
pub struct Classifier {
    rules: Vec<Box<dyn CommandRule>>,
}

impl Classifier {
    /// Create a classifier with a custom, ordered set of rules.
    pub fn new(rules: Vec<Box<dyn CommandRule>>) -> Self {
        Self { rules }
    }

    /// Names of the installed rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Select the action for `tokens` without running it.
    ///
    /// Returns `None` only when no rule matches, which can't happen with the
    /// default rule set.
    pub fn classify(&self, tokens: &[&str]) -> Option<Selection> {
        for rule in &self.rules {
            if let Some(action) = rule.try_match(tokens) {
                crate::trace_log!("rule `{}` matched {:?}", rule.name(), tokens);
                return Some(Selection {
                    rule: rule.name(),
                    action,
                });
            }
        }
        crate::trace_log!("no rule matched {:?}", tokens);
        None
    }

    /// Classify `tokens` and run the selected action once against `stdout`.
    ///
    /// Returns the name of the rule that fired, or an error if nothing matched
    /// or the action failed to write its output.
    pub fn dispatch(&self, tokens: &[&str], stdout: &mut dyn Write) -> Result<&'static str> {
        let Selection { rule, action } = self
            .classify(tokens)
            .ok_or_else(|| anyhow::anyhow!("no rule matches: {:?}", tokens))?;
        action.execute(stdout)?;
        Ok(rule)
    }
}

impl Default for Classifier {
    /// Create a classifier with the built-in rules, in precedence order:
    /// empty, help, verify-state, verify-license, verify-usage,
    /// batch-validation, config-set, config-usage, unknown.
    fn default() -> Self {
        Self::new(vec![
            Box::new(EmptyRule),
            Box::new(HelpRule),
            Box::new(VerifyStateRule),
            Box::new(VerifyLicenseRule),
            Box::new(VerifyUsageRule),
            Box::new(BatchValidationRule),
            Box::new(ConfigSetRule),
            Box::new(ConfigUsageRule),
            Box::new(UnknownRule),
        ])
    }
}
