use std::io::{BufRead, Write};

use crate::{
    common::{command::Command, error::AppError},
    io::store::Store,
    worker::processor::Processor,
};

const DEFAULT_DATA_FILE: &str = "bank_data.json";

const HELP: &str = "Commands:
  register <name>
  deposit <name> <amount>
  withdraw <name> <amount>
  balance <name>
  delete <name>
  list
  help
  quit";

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() > 2 {
        return Err(AppError::Usage);
    }
    let data_file = args.get(1).map(String::as_str).unwrap_or(DEFAULT_DATA_FILE);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(stdin.lock(), stdout.lock(), Store::new(data_file))
}

/// Runs one console session over any line-oriented input/output pair.
///
/// Each input line is answered with one status line. `help` and `quit` are
/// session-level keywords and never reach the ledger; malformed lines are
/// reported and the session continues.
pub fn run_session<R, W>(input: R, mut output: W, store: Store) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let mut ledger = store.load()?;
    writeln!(
        output,
        "Bank ledger ready (data file: {}). Type 'help' for commands.",
        store.path().display()
    )?;
    let processor = Processor::new(store);

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            _ => {}
        }

        match Command::parse(line) {
            Ok(command) => {
                let message = processor.process(&mut ledger, command)?;
                writeln!(output, "{message}")?;
            }
            Err(message) => writeln!(output, "{message}")?,
        }
    }

    Ok(())
}
