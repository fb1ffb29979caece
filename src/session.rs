use crate::classifier::Classifier;
use crate::config::Config;
use crate::lexer;
use crate::route::Route;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;

/// Commands run by [`Session::demo`], in order.
pub const DEMO_COMMANDS: &[&[&str]] = &[
    &["help"],
    &["verify", "--bad", "param"],
    &["verify", "--state", "VA"],
    &["verify", "--state", "VA", "--license", "123456789"],
    &["batch", "validation", "--file", "licenses.csv"],
    &["config", "set", "timeout", "30"],
    &["config", "timeout"],
    &["unknown", "cmd", "param1", "param2"],
];

/// Run once more by [`Session::demo`], through [`Route`] instead of the classifier.
pub const DEMO_ROUTED: &[&str] = &["verify", "--state", "VA"];

const DEMO_TITLE: &str = "Practical Example - Command Parsing";
const BANNER_WIDTH: usize = 70;

/// Console host around a [`Classifier`].
///
/// A session echoes each command it is given, dispatches it and separates the
/// output of consecutive commands with a blank line.
///
/// Example
/// ```
/// use license_commands::Session;
/// let session = Session::default();
/// let mut out: Vec<u8> = Vec::new();
/// let rule = session.run_with_output(&["config", "timeout"], &mut out).unwrap();
/// assert_eq!(rule, "config-usage");
/// ```
pub struct Session {
    config: Config,
    classifier: Classifier,
}

impl Session {
    pub fn new(config: Config, classifier: Classifier) -> Self {
        Self { config, classifier }
    }

    /// Run one command against standard output.
    pub fn run(&self, tokens: &[&str]) -> Result<&'static str> {
        self.run_with_output(tokens, &mut std::io::stdout().lock())
    }

    /// Run one command, writing everything to `out`. Returns the rule that fired.
    pub fn run_with_output(&self, tokens: &[&str], out: &mut dyn Write) -> Result<&'static str> {
        self.write_banner(tokens, out)?;
        let rule = self.classifier.dispatch(tokens, out)?;
        writeln!(out)?;
        Ok(rule)
    }

    /// Like [`Session::run_with_output`], but decided by [`Route::parse`].
    pub fn run_routed(&self, tokens: &[&str], out: &mut dyn Write) -> Result<&'static str> {
        self.write_banner(tokens, out)?;
        let route = Route::parse(tokens);
        let rule = route.rule_name();
        crate::trace_log!("route `{}` matched {:?}", rule, tokens);
        route.into_action().execute(out)?;
        writeln!(out)?;
        Ok(rule)
    }

    fn write_banner(&self, tokens: &[&str], out: &mut dyn Write) -> Result<()> {
        if !self.config.quiet {
            writeln!(out, "*** Parsing Command: \"{}\" ***", tokens.join(" "))?;
            writeln!(out)?;
        }
        Ok(())
    }

    /// Split a raw line into tokens and run it.
    pub fn run_line(&self, line: &str, out: &mut dyn Write) -> Result<&'static str> {
        let tokens = lexer::split_into_tokens(line)?;
        crate::trace_log!("tokens = {:?}", tokens);
        let tokens: Vec<&str> = tokens.iter().map(|s| s.as_str()).collect();
        self.run_with_output(&tokens, out)
    }

    /// Print the demo banner, run every command of [`DEMO_COMMANDS`], then
    /// [`DEMO_ROUTED`] through [`Route`].
    pub fn demo(&self, out: &mut dyn Write) -> Result<()> {
        write_title(out, DEMO_TITLE)?;
        for tokens in DEMO_COMMANDS {
            self.run_with_output(tokens, out)?;
        }
        self.run_routed(DEMO_ROUTED, out)?;
        Ok(())
    }

    /// Interactive loop: read a line, run it, repeat until Ctrl-C or Ctrl-D.
    pub fn repl(&self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(&self.config.prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line.as_str())?;
                    let mut stdout = std::io::stdout().lock();
                    if let Err(err) = self.run_line(&line, &mut stdout) {
                        eprintln!("Error: {}", err);
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }
}

impl Default for Session {
    /// Configuration from the environment and the built-in rule set.
    fn default() -> Self {
        Self::new(Config::from_env(), Classifier::default())
    }
}

fn write_title(out: &mut dyn Write, title: &str) -> Result<()> {
    let rule = "─".repeat(BANNER_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(quiet: bool) -> Session {
        let config = Config {
            quiet,
            ..Config::default()
        };
        Session::new(config, Classifier::default())
    }

    #[test]
    fn test_run_echoes_command_and_separates_output() {
        let mut out: Vec<u8> = Vec::new();
        let rule = session(false)
            .run_with_output(&["verify", "--state", "VA"], &mut out)
            .unwrap();
        assert_eq!(rule, "verify-state");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "*** Parsing Command: \"verify --state VA\" ***\n\n\
             Verifying DLDV 3.0 state participation: VA\n \
             VA participates in DLDV 3.0.\n\n"
        );
    }

    #[test]
    fn test_quiet_skips_the_banner() {
        let mut out: Vec<u8> = Vec::new();
        session(true)
            .run_with_output(&["unknown", "cmd"], &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Unknown command: unknown\n  Type 'help' to see available commands\n\n"
        );
    }

    #[test]
    fn test_empty_command_shows_help() {
        let mut out: Vec<u8> = Vec::new();
        let rule = session(false).run_with_output(&[], &mut out).unwrap();
        assert_eq!(rule, "empty");
        let s = String::from_utf8(out).unwrap();
        assert!(s.starts_with("*** Parsing Command: \"\" ***\n\nAvailable Commands:\n"));
    }

    #[test]
    fn test_run_line_lexes_quotes() -> Result<()> {
        let mut out: Vec<u8> = Vec::new();
        let rule = session(true).run_line(
            "batch validation --file 'my licenses.csv'",
            &mut out,
        )?;
        assert_eq!(rule, "batch-validation");
        assert!(String::from_utf8(out)?.starts_with("Batch importing from: my licenses.csv\n"));
        Ok(())
    }

    #[test]
    fn test_run_line_reports_lexing_errors() {
        let mut out: Vec<u8> = Vec::new();
        let err = session(true)
            .run_line("verify --state 'VA", &mut out)
            .unwrap_err();
        assert_eq!(err.to_string(), "unfinished quote");
        assert!(out.is_empty());
    }

    #[test]
    fn test_blank_line_is_the_empty_command() -> Result<()> {
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(session(true).run_line("   ", &mut out)?, "empty");
        Ok(())
    }

    #[test]
    fn test_demo_runs_every_sample_in_order() -> Result<()> {
        let mut out: Vec<u8> = Vec::new();
        session(false).demo(&mut out)?;
        let s = String::from_utf8(out)?;

        let banner = "─".repeat(70);
        assert!(s.starts_with(&format!(
            "{banner}\nPractical Example - Command Parsing\n{banner}\n\n"
        )));

        let echoed: Vec<&str> = s
            .lines()
            .filter_map(|line| line.strip_prefix("*** Parsing Command: \""))
            .filter_map(|line| line.strip_suffix("\" ***"))
            .collect();
        assert_eq!(
            echoed,
            vec![
                "help",
                "verify --bad param",
                "verify --state VA",
                "verify --state VA --license 123456789",
                "batch validation --file licenses.csv",
                "config set timeout 30",
                "config timeout",
                "unknown cmd param1 param2",
                "verify --state VA",
            ]
        );
        assert!(s.ends_with(" VA participates in DLDV 3.0.\n\n"));
        Ok(())
    }

    #[test]
    fn test_run_routed_matches_run_with_output() -> Result<()> {
        let session = session(false);
        for tokens in [
            &["verify", "--state", "VA"][..],
            &["config", "timeout"][..],
            &[][..],
        ] {
            let mut routed: Vec<u8> = Vec::new();
            let mut classified: Vec<u8> = Vec::new();
            let a = session.run_routed(tokens, &mut routed)?;
            let b = session.run_with_output(tokens, &mut classified)?;
            assert_eq!(a, b);
            assert_eq!(routed, classified);
        }
        Ok(())
    }
}
