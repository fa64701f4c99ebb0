use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountingErrorKind {
    InvalidAmount,
    InsufficientBanked,
    NotFound,
    InvalidPool,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountingError {
    pub kind: AccountingErrorKind,
    pub message: String,
}

impl AccountingError {
    pub fn new(kind: AccountingErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for AccountingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AccountingError {}

pub fn invalid_amount(message: impl Into<String>) -> AccountingError {
    AccountingError::new(AccountingErrorKind::InvalidAmount, message)
}

pub fn insufficient_banked(message: impl Into<String>) -> AccountingError {
    AccountingError::new(AccountingErrorKind::InsufficientBanked, message)
}

pub fn not_found(message: impl Into<String>) -> AccountingError {
    AccountingError::new(AccountingErrorKind::NotFound, message)
}

pub fn invalid_pool(message: impl Into<String>) -> AccountingError {
    AccountingError::new(AccountingErrorKind::InvalidPool, message)
}

pub fn internal_error(message: impl Into<String>) -> AccountingError {
    AccountingError::new(AccountingErrorKind::Internal, message)
}
