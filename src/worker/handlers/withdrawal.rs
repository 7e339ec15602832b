use crate::{
    common::{error::AppError, money::Money},
    domain::{account::WithdrawOutcome, ledger::Ledger},
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

    // Rejected withdrawals still rewrite the file, same as deposits.
    let outcome = account.withdraw(amount);
    store.save(ledger)?;

    Ok(match outcome {
        WithdrawOutcome::Accepted { balance } => {
            format!("Withdrew ${amount}. New balance: ${balance}")
        }
        WithdrawOutcome::Rejected => "Insufficient funds or invalid amount.".to_string(),
    })
}
