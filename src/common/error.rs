#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("too many arguments. usage: bank_ledger [data-file]")]
    Usage,
    #[error("state file i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("state file codec error: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("parse error: {0}")]
    Parse(String),
}
