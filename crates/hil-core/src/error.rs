use crate::Category;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read catalogue file: {0}")]
    FileRead(std::io::Error),
    #[error("record error: {0}")]
    Records(#[from] hil_records::RecordsError),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("scenario not found: {0}")]
    ScenarioNotFound(String),
    #[error("{category} not found: {name}")]
    EntityNotFound { category: Category, name: String },
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;
