use crate::{common::error::AppError, domain::ledger::Ledger, io::store::Store};

pub fn handle(ledger: &mut Ledger, store: &Store, name: &str) -> Result<String, AppError> {
    if ledger.remove(name).is_none() {
        return Ok("User not found.".to_string());
    }

    store.save(ledger)?;
    Ok(format!("User {name} deleted successfully."))
}
