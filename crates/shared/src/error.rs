#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid slot: {day}/{slot}")]
    InvalidSlot { day: String, slot: String },

    #[error("malformed external data: {0}")]
    MalformedExternalData(String),

    #[error("meal `{0}` already exists in the catalog")]
    DuplicateMeal(String),

    #[error("meal `{0}` not found")]
    MealNotFound(String),

    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_slot(day: impl Into<String>, slot: impl Into<String>) -> Self {
        Self::InvalidSlot {
            day: day.into(),
            slot: slot.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedExternalData(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server($err.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}
