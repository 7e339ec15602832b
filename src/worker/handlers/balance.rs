use crate::domain::ledger::Ledger;

pub fn handle(ledger: &Ledger, name: &str) -> String {
    match ledger.get(name) {
        Some(account) => account.balance_report(),
        None => "User not found.".to_string(),
    }
}
