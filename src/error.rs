use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("payment of ${payment:.2} does not cover the monthly interest of ${interest:.2}; the loan never amortizes")]
    NonAmortizingPayment { payment: f64, interest: f64 },
}

impl LoanError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        LoanError::InvalidInput {
            field,
            value,
            reason,
        }
    }

    /// process exit status used by the binary
    pub fn exit_code(&self) -> u8 {
        match self {
            LoanError::InvalidInput { .. } => 2,
            LoanError::NonAmortizingPayment { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
