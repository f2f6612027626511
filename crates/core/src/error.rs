#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("invalid validation code: '{0}' (expected 5 lowercase hex characters)")]
    InvalidValidationCode(String),
    #[error("unknown reagent type: '{0}'")]
    UnknownReagentType(String),
}

pub type LabelResult<T> = std::result::Result<T, LabelError>;
