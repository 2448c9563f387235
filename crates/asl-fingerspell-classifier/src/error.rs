/// Errors returned when building a classifier.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("invalid classifier parameters: {reason}")]
    InvalidParams { reason: String },
}
