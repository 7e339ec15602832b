use crate::domain::ledger::Ledger;

pub fn handle(ledger: &Ledger) -> String {
    let names = ledger.names();
    if names.is_empty() {
        return "No users registered.".to_string();
    }

    names
        .iter()
        .map(|name| format!("- {name}"))
        .collect::<Vec<_>>()
        .join("\n")
}
