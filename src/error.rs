use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not convert string to amount: '{input}'")]
    InvalidAmount { input: String },
    #[error("cannot represent amount exactly: '{input}' (limits: 28 decimal places, 7.9e28)")]
    AmountOutOfRange { input: String },
    #[error("input closed before a response was read")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, PaymentError>;
