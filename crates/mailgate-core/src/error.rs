use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("invalid format")]
    InvalidFormat,
    #[error("must be a gmail.com address")]
    WrongDomain,
    #[error("local part too short")]
    LocalPartTooShort,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error("password must exceed 4 characters")]
    PasswordTooShort,
    #[error("incorrect password")]
    PasswordMismatch,
}
