use crate::{
    common::{error::AppError, money::Money},
    domain::{account::DepositOutcome, ledger::Ledger},
    io::store::Store,
};

pub fn handle(
    ledger: &mut Ledger,
    store: &Store,
    name: &str,
    amount: Money,
) -> Result<String, AppError> {
    let Some(account) = ledger.get_mut(name) else {
        return Ok("User not found.".to_string());
    };

    // The file is rewritten even when the amount is rejected, matching the
    // every-attempted-mutation persistence contract.
    let outcome = account.deposit(amount);
    store.save(ledger)?;

    Ok(match outcome {
        DepositOutcome::Accepted { balance } => {
            format!("Deposited ${amount}. New balance: ${balance}")
        }
        DepositOutcome::InvalidAmount => "Invalid deposit amount.".to_string(),
    })
}
