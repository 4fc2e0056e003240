mod config;
mod error;

use config::Config;
use env_logger::Env;
use lambda_compute::Session;
use lambda_parser::Constants;
use log::{debug, warn};
use rustyline::{
    completion::Completer,
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context,
    Editor,
    Helper,
};
use std::{io::{self, BufRead, IsTerminal}, path::PathBuf, process::ExitCode};

/// The words that can start a line, offered by tab completion.
const COMMANDS: [&str; 6] = ["define", "drop", "solve", "list", "help", "exit"];

const HELP: &str = "\
commands:
  define x = <expr>          store a simplified expression as the variable `x`
  define f(x, y) = <expr>    store a simplified expression as the function `f`
  drop x                     remove the variable or function `x`
  solve <expr> = <expr>      simplify both sides of an equation
  list                       show every definition
  <expr>                     evaluate an expression
  help                       show this message
  exit                       quit";

/// The help text, followed by the constants that can be used in expressions.
fn help(constants: &Constants) -> String {
    let mut text = HELP.to_string();
    text.push_str("\n\nconstants:");
    for (name, value) in constants.iter() {
        text.push_str(&format!("\n  {:<8} {}", name, value));
    }
    text
}

/// Returns the commands starting with the word under the cursor, and where that word starts.
///
/// Only the first word of a line is completed.
fn complete_command(line: &str, pos: usize) -> (usize, Vec<String>) {
    let before = &line[..pos];
    let start = before.len() - before.trim_start().len();
    let word = &before[start..];
    if word.contains(char::is_whitespace) {
        return (pos, Vec::new());
    }

    let candidates = COMMANDS.iter()
        .filter(|command| command.starts_with(word))
        .map(|command| command.to_string())
        .collect();
    (start, candidates)
}

/// Completes command names.
struct CommandHelper;

impl Completer for CommandHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        Ok(complete_command(line, pos))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}

impl Helper for CommandHelper {}

/// The file the shell's history is kept in between runs.
fn history_path() -> PathBuf {
    std::env::temp_dir().join(".lambda_calc_history")
}

/// Executes one line, printing the result to stdout or the error report to stderr.
fn execute(session: &mut Session, input: &str) {
    match session.execute(input) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            if let Err(io_err) = error::report_to_stderr(&err, input) {
                warn!("could not print report: {}", io_err);
                eprintln!("{}", err);
            }
        },
    }
}

/// Reads lines from the terminal until `exit`, end of input, or an interrupt.
fn read_lines(
    rl: &mut Editor<CommandHelper, DefaultHistory>,
    session: &mut Session,
    prompt: &str,
    help_text: &str,
) -> Result<(), ReadlineError> {
    loop {
        let input = match rl.readline(prompt) {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }
        rl.add_history_entry(&input)?;

        match trimmed {
            "exit" => return Ok(()),
            "help" => println!("{}", help_text),
            _ => execute(session, &input),
        }
    }
}

/// Runs the shell, keeping its history in [`history_path`].
fn interactive(session: &mut Session, prompt: &str, constants: &Constants) -> Result<(), ReadlineError> {
    let mut rl = Editor::<CommandHelper, DefaultHistory>::new()?;
    rl.set_helper(Some(CommandHelper));

    let path = history_path();
    if let Err(err) = rl.load_history(&path) {
        debug!("no history loaded from `{}`: {}", path.display(), err);
    }

    let result = read_lines(&mut rl, session, prompt, &help(constants));

    if let Err(err) = rl.save_history(&path) {
        warn!("could not save history to `{}`: {}", path.display(), err);
    }
    result
}

fn main() -> ExitCode {
    let config = match Config::load(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    let default_filter = if config.options.show_debug_process { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
    debug!("loaded configuration: {:?}", config);

    let constants = config.constants();
    let mut session = Session::new(config.symbols.clone(), constants.clone());

    if !io::stdin().is_terminal() {
        // piped input, one command per line
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim().is_empty() => (),
                Ok(line) => execute(&mut session, &line),
                Err(err) => {
                    eprintln!("{}", err);
                    return ExitCode::FAILURE;
                },
            }
        }
        return ExitCode::SUCCESS;
    }

    let prompt = if config.options.nerdfont { "\u{f061} " } else { ">>> " };
    match interactive(&mut session, prompt, &constants) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}
