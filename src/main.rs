use argh::{EarlyExit, FromArgs};
use license_commands::config::Config;
use license_commands::{Classifier, Session, trace};
use std::process::ExitCode;

#[derive(FromArgs)]
/// Classify a license-verification command and run it.
/// Flags go first; every token after them is the command, even one starting
/// with a dash. Without a command, the list of available commands is shown.
struct Args {
    #[argh(switch)]
    /// read commands interactively, one per line.
    repl: bool,

    #[argh(switch)]
    /// run the built-in sample commands.
    demo: bool,

    #[argh(switch)]
    /// report which rule matched on standard error.
    trace: bool,

    #[argh(switch, short = 'q')]
    /// don't echo the parsed command before its output.
    quiet: bool,
}

/// Leading arguments treated as program flags; anything else starts the command.
const FLAGS: &[&str] = &["--repl", "--demo", "--trace", "--quiet", "-q"];
const HELP_FLAGS: &[&str] = &["--help", "-h"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Run,
    Demo,
    Repl,
}

/// What one process invocation asks for.
#[derive(Debug)]
struct Invocation {
    config: Config,
    mode: Mode,
    /// argh's flag usage, when `--help` was among the flags.
    usage: Option<String>,
    tokens: Vec<String>,
}

/// Map the arguments after the program name onto settings and a command.
///
/// Only the leading run of known flags is parsed by argh, so the command itself
/// is never rejected: whatever follows goes to the classifier untouched.
fn parse_invocation(name: &str, rest: &[&str], env_config: Config) -> Result<Invocation, String> {
    let flag_count = rest
        .iter()
        .take_while(|arg| FLAGS.contains(*arg) || HELP_FLAGS.contains(*arg))
        .count();
    let (flags, tokens) = rest.split_at(flag_count);

    let (help, switches): (Vec<&str>, Vec<&str>) =
        flags.iter().copied().partition(|arg| HELP_FLAGS.contains(arg));

    let args = Args::from_args(&[name], &switches).map_err(|EarlyExit { output, .. }| output)?;
    let usage = if help.is_empty() {
        None
    } else {
        match Args::from_args(&[name], &["--help"]) {
            Err(EarlyExit { output, .. }) => Some(output),
            Ok(_) => None,
        }
    };

    let mut config = env_config;
    config.trace |= args.trace;
    config.quiet |= args.quiet;

    let mode = if args.repl {
        Mode::Repl
    } else if args.demo {
        Mode::Demo
    } else {
        Mode::Run
    };

    Ok(Invocation {
        config,
        mode,
        usage,
        tokens: tokens.iter().map(|s| s.to_string()).collect(),
    })
}

fn main() -> ExitCode {
    let raw: Vec<String> = std::env::args().collect();
    let name = raw.first().map(String::as_str).unwrap_or("license_commands");
    let rest: Vec<&str> = raw.iter().skip(1).map(String::as_str).collect();

    let invocation = match parse_invocation(name, &rest, Config::from_env()) {
        Ok(invocation) => invocation,
        Err(output) => {
            eprintln!("{}", output);
            return ExitCode::FAILURE;
        }
    };

    if let Some(usage) = &invocation.usage {
        println!("{}", usage);
    }
    trace::set_enabled(invocation.config.trace);

    let session = Session::new(invocation.config, Classifier::default());
    let result = match invocation.mode {
        Mode::Repl => session.repl(),
        Mode::Demo => session.demo(&mut std::io::stdout().lock()),
        Mode::Run => {
            let tokens: Vec<&str> = invocation.tokens.iter().map(String::as_str).collect();
            session.run(&tokens).map(|_| ())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

fn report(err: anyhow::Error) -> ExitCode {
    eprintln!("Error: {:#}", err);
    ExitCode::FAILURE
}
