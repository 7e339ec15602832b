use crate::{
    common::error::AppError,
    domain::{account::Account, ledger::Ledger},
    io::store::Store,
};

pub fn handle(ledger: &mut Ledger, store: &Store, name: &str) -> Result<String, AppError> {
    if ledger.contains(name) {
        return Ok("User already exists.".to_string());
    }

    ledger.insert(Account::new(name));
    store.save(ledger)?;
    Ok(format!("User {name} registered successfully."))
}
