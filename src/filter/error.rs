use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("{min} cannot be greater than {max}")]
    InvalidRange { min: &'static str, max: &'static str },
}
