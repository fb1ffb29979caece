//! The default rule set, one structural pattern per rule.
//!
//! Each rule only recognizes its own shape. Precedence between overlapping rules
//! (`verify-state` vs. `verify-usage`, say) is decided by their order in
//! [`crate::Classifier::default`], not here.

use crate::actions::*;
use crate::command::{Action, CommandRule};

/// `[]`
pub struct EmptyRule;

impl CommandRule for EmptyRule {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn try_match(&self, tokens: &[&str]) -> Option<Box<dyn Action>> {
        match tokens {
            [] => Some(Box::new(ShowHelp)),
            _ => None,
        }
    }
}

/// `help ..`, trailing tokens ignored.
pub struct HelpRule;

impl CommandRule for HelpRule {
    fn name(&self) -> &'static str {
        "help"
    }

    fn try_match(&self, tokens: &[&str]) -> Option<Box<dyn Action>> {
        match tokens {
            ["help", ..] => Some(Box::new(ShowHelp)),
            _ => None,
        }
    }
}

/// `verify --state <state>`
pub struct VerifyStateRule;

impl CommandRule for VerifyStateRule {
    fn name(&self) -> &'static str {
        "verify-state"
    }

    fn try_match(&self, tokens: &[&str]) -> Option<Box<dyn Action>> {
        match tokens {
            ["verify", "--state", state] => Some(Box::new(VerifyState {
                state: state.to_string(),
            })),
            _ => None,
        }
    }
}

/// `verify --state <state> --license <license>`
pub struct VerifyLicenseRule;

impl CommandRule for VerifyLicenseRule {
    fn name(&self) -> &'static str {
        "verify-license"
    }

    fn try_match(&self, tokens: &[&str]) -> Option<Box<dyn Action>> {
        match tokens {
            ["verify", "--state", state, "--license", license] => Some(Box::new(VerifyLicense {
                state: state.to_string(),
                license: license.to_string(),
            })),
            _ => None,
        }
    }
}

/// Any other `verify ..` shape.
pub struct VerifyUsageRule;

impl CommandRule for VerifyUsageRule {
    fn name(&self) -> &'static str {
        "verify-usage"
    }

    fn try_match(&self, tokens: &[&str]) -> Option<Box<dyn Action>> {
        match tokens {
            ["verify", ..] => Some(Box::new(ShowVerifyUsage)),
            _ => None,
        }
    }
}

/// `batch validation --file <file>`
pub struct BatchValidationRule;

impl CommandRule for BatchValidationRule {
    fn name(&self) -> &'static str {
        "batch-validation"
    }

    fn try_match(&self, tokens: &[&str]) -> Option<Box<dyn Action>> {
        match tokens {
            ["batch", "validation", "--file", file] => Some(Box::new(BatchValidation {
                file: file.to_string(),
            })),
            _ => None,
        }
    }
}

/// `config set <key> <value>`
pub struct ConfigSetRule;

impl CommandRule for ConfigSetRule {
    fn name(&self) -> &'static str {
        "config-set"
    }

    fn try_match(&self, tokens: &[&str]) -> Option<Box<dyn Action>> {
        match tokens {
            ["config", "set", key, value] => Some(Box::new(SetConfig {
                key: key.to_string(),
                value: value.to_string(),
            })),
            _ => None,
        }
    }
}

/// Any other `config ..` shape. There is deliberately no "get" form.
pub struct ConfigUsageRule;

impl CommandRule for ConfigUsageRule {
    fn name(&self) -> &'static str {
        "config-usage"
    }

    fn try_match(&self, tokens: &[&str]) -> Option<Box<dyn Action>> {
        match tokens {
            ["config", ..] => Some(Box::new(ShowConfigUsage)),
            _ => None,
        }
    }
}

/// Catch-all for any non-empty sequence.
pub struct UnknownRule;

impl CommandRule for UnknownRule {
    fn name(&self) -> &'static str {
        "unknown"
    }

    fn try_match(&self, tokens: &[&str]) -> Option<Box<dyn Action>> {
        match tokens {
            [command, ..] => Some(Box::new(UnknownCommand {
                command: command.to_string(),
            })),
            [] => None,
        }
    }
}
