use thiserror::Error;

#[derive(Error, Debug)]
pub enum IonmdError {
    /// JSON has no representation for NaN or infinity.
    #[error("Cannot encode non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type IonmdResult<T> = Result<T, IonmdError>;
