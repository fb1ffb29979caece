use std::collections::HashMap;
use std::env as stdenv;

/// Prompt shown by the interactive loop unless overridden.
pub const DEFAULT_PROMPT: &str = "dldv> ";

/// Settings for a [`crate::Session`], captured from the process environment.
///
/// Recognized variables:
/// - `LICENSE_COMMANDS_PROMPT`: prompt of the interactive loop.
/// - `LICENSE_COMMANDS_TRACE`: enable trace output on stderr.
/// - `LICENSE_COMMANDS_QUIET`: don't echo `*** Parsing Command: ... ***` banners.
///
/// Boolean variables accept `1`, `true`, `yes` or `on` in any case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub trace: bool,
    pub quiet: bool,
}

impl Config {
    /// Capture the current process environment into a new `Config`.
    pub fn from_env() -> Self {
        Self::from_vars(stdenv::vars())
    }

    /// Build a `Config` from explicit key-value pairs; unknown keys are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self {
            prompt: vars
                .get("LICENSE_COMMANDS_PROMPT")
                .cloned()
                .unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            trace: vars.get("LICENSE_COMMANDS_TRACE").is_some_and(|v| is_truthy(v)),
            quiet: vars.get("LICENSE_COMMANDS_QUIET").is_some_and(|v| is_truthy(v)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            trace: false,
            quiet: false,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
