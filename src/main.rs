use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    if let Err(err) = bank_ledger::app::run(std::env::args()) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
