use thiserror::Error;

pub type StResult<T> = Result<T, StError>;

#[derive(Error, Debug)]
pub enum StError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StError::NonFinite {
            what: "pressure",
            value: f64::NAN,
        };
        assert!(err.to_string().contains("pressure"));

        let err = StError::InvalidArg {
            what: "duplicate property".into(),
        };
        assert!(err.to_string().contains("duplicate"));
    }
}
