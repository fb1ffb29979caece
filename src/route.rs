use crate::actions::*;
use crate::command::Action;

/// Every action the default rule set can select, with its captured parameters.
///
/// [`Route::parse`] makes the same decision as [`crate::Classifier::default`] in a
/// single `match`, which is handy when the rule set is fixed and callers want a
/// value to inspect rather than a boxed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `[]`
    Empty,
    /// `help ..`
    Help,
    VerifyState { state: String },
    VerifyLicense { state: String, license: String },
    VerifyUsage,
    BatchValidation { file: String },
    ConfigSet { key: String, value: String },
    ConfigUsage,
    Unknown { command: String },
}

impl Route {
    /// Classify `tokens`; arms are in precedence order and the first one wins.
    pub fn parse(tokens: &[&str]) -> Self {
        match tokens {
            [] => Route::Empty,
            ["help", ..] => Route::Help,
            ["verify", "--state", state] => Route::VerifyState {
                state: state.to_string(),
            },
            ["verify", "--state", state, "--license", license] => Route::VerifyLicense {
                state: state.to_string(),
                license: license.to_string(),
            },
            ["verify", ..] => Route::VerifyUsage,
            ["batch", "validation", "--file", file] => Route::BatchValidation {
                file: file.to_string(),
            },
            ["config", "set", key, value] => Route::ConfigSet {
                key: key.to_string(),
                value: value.to_string(),
            },
            ["config", ..] => Route::ConfigUsage,
            [command, ..] => Route::Unknown {
                command: command.to_string(),
            },
        }
    }

    /// Name of the matching rule in the default [`crate::Classifier`].
    pub fn rule_name(&self) -> &'static str {
        match self {
            Route::Empty => "empty",
            Route::Help => "help",
            Route::VerifyState { .. } => "verify-state",
            Route::VerifyLicense { .. } => "verify-license",
            Route::VerifyUsage => "verify-usage",
            Route::BatchValidation { .. } => "batch-validation",
            Route::ConfigSet { .. } => "config-set",
            Route::ConfigUsage => "config-usage",
            Route::Unknown { .. } => "unknown",
        }
    }

    pub fn into_action(self) -> Box<dyn Action> {
        match self {
            Route::Empty | Route::Help => Box::new(ShowHelp),
            Route::VerifyState { state } => Box::new(VerifyState { state }),
            Route::VerifyLicense { state, license } => Box::new(VerifyLicense { state, license }),
            Route::VerifyUsage => Box::new(ShowVerifyUsage),
            Route::BatchValidation { file } => Box::new(BatchValidation { file }),
            Route::ConfigSet { key, value } => Box::new(SetConfig { key, value }),
            Route::ConfigUsage => Box::new(ShowConfigUsage),
            Route::Unknown { command } => Box::new(UnknownCommand { command }),
        }
    }
}
