use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::common::{error::AppError, money::Money};
use crate::domain::{account::Account, ledger::Ledger};

#[derive(serde::Serialize, serde::Deserialize)]
/// On-disk account representation. The balance is kept as a two-decimal
/// string so the file round-trips exactly, without float re-parsing.
struct StoredAccount {
    name: String,
    balance: String,
}

/// Reads the persisted account set from a JSON reader.
///
/// The document is an object keyed by account name; each value carries
/// `name` and `balance`. The key is authoritative for the account name.
///
/// # Examples
///
/// ```
/// use bank_ledger::io::store::read_accounts;
///
/// let data = r#"{ "alice": { "name": "alice", "balance": "12.50" } }"#;
/// let accounts = read_accounts(data.as_bytes()).unwrap();
///
/// assert_eq!(accounts["alice"].balance.to_string_2dp(), "12.50");
/// ```
pub fn read_accounts<R: Read>(reader: R) -> Result<HashMap<String, Account>, AppError> {
    let stored: BTreeMap<String, StoredAccount> = serde_json::from_reader(reader)?;

    let mut accounts = HashMap::with_capacity(stored.len());
    for (name, entry) in stored {
        let balance = Money::from_str(&entry.balance)
            .map_err(|e| AppError::Parse(format!("bad stored balance for {name}: {e}")))?;
        accounts.insert(name.clone(), Account::with_balance(name, balance));
    }
    Ok(accounts)
}

/// Writes the full account set as pretty-printed JSON.
///
/// Accounts are keyed by name and sorted ascending so the file is stable
/// across rewrites.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use bank_ledger::domain::account::Account;
/// use bank_ledger::io::store::write_accounts;
///
/// let mut accounts = HashMap::new();
/// accounts.insert("bob".to_string(), Account::new("bob"));
/// accounts.insert("alice".to_string(), Account::new("alice"));
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, &accounts).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.find("alice").unwrap() < s.find("bob").unwrap());
/// ```
pub fn write_accounts<W: Write>(
    mut writer: W,
    accounts: &HashMap<String, Account>,
) -> Result<(), AppError> {
    // Deterministic output: sort by account name.
    let stored: BTreeMap<&str, StoredAccount> = accounts
        .iter()
        .map(|(name, account)| {
            (
                name.as_str(),
                StoredAccount {
                    name: account.name.clone(),
                    balance: account.balance.to_string_2dp(),
                },
            )
        })
        .collect();

    serde_json::to_writer_pretty(&mut writer, &stored)?;
    writer.flush()?;
    Ok(())
}

/// Binds the persistence codec to one state-file path. The path is injected
/// at construction so tests can point each ledger at its own location.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the ledger from the state file. A missing file is an empty
    /// ledger, not an error.
    pub fn load(&self) -> Result<Ledger, AppError> {
        if !self.path.exists() {
            log::debug!(
                "no state file at {}, starting with an empty ledger",
                self.path.display()
            );
            return Ok(Ledger::new());
        }

        let file = fs::File::open(&self.path)?;
        let accounts = read_accounts(std::io::BufReader::new(file))?;
        log::debug!(
            "loaded {} accounts from {}",
            accounts.len(),
            self.path.display()
        );
        Ok(Ledger::from_accounts(accounts))
    }

    /// Rewrites the whole state file from the current ledger contents.
    pub fn save(&self, ledger: &Ledger) -> Result<(), AppError> {
        let file = fs::File::create(&self.path)?;
        write_accounts(std::io::BufWriter::new(file), ledger.accounts())?;
        log::debug!(
            "saved {} accounts to {}",
            ledger.accounts().len(),
            self.path.display()
        );
        Ok(())
    }
}
