use crate::{
    common::{command::Command, error::AppError},
    domain::ledger::Ledger,
    io::store::Store,
    worker::handlers::{balance, delete, deposit, list, register, withdrawal},
};

/// Dispatches parsed commands to their handlers. Owns the [`Store`] so every
/// mutating handler persists through the same injected path.
#[derive(Debug)]
pub struct Processor {
    store: Store,
}

impl Processor {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Runs one command against the ledger and returns the status line to
    /// show the operator. Only environmental failures surface as errors;
    /// every domain outcome is a message.
    pub fn process(&self, ledger: &mut Ledger, command: Command) -> Result<String, AppError> {
        match command {
            Command::Register { name } => register::handle(ledger, &self.store, &name),
            Command::Deposit { name, amount } => {
                deposit::handle(ledger, &self.store, &name, amount)
            }
            Command::Withdraw { name, amount } => {
                withdrawal::handle(ledger, &self.store, &name, amount)
            }
            Command::Balance { name } => Ok(balance::handle(ledger, &name)),
            Command::Delete { name } => delete::handle(ledger, &self.store, &name),
            Command::List => Ok(list::handle(ledger)),
        }
    }
}
