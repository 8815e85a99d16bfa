use crate::national_code::NATIONAL_CODE_LENGTH;
use strum::IntoStaticStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NationalCodeError {
    /// Too few or too many digits once non-digit characters are removed
    #[error("A national code needs {} digits, found {}", expected_digits(.min_length), .length)]
    InvalidLength { length: usize, min_length: usize },

    /// Placeholder sequences such as `0000000000` are never issued
    #[error("A national code can't repeat the same digit ({digit}) ten times")]
    RepeatedDigits { digit: u32 },

    #[error("The check digit should be {expected}, found {actual}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("Payload digit at position {position} must be between 0 and 9, found {value}")]
    InvalidPayloadDigit { position: usize, value: u32 },
}

fn expected_digits(min_length: &usize) -> String {
    if *min_length >= NATIONAL_CODE_LENGTH {
        format!("exactly {}", NATIONAL_CODE_LENGTH)
    } else {
        format!("between {} and {}", min_length, NATIONAL_CODE_LENGTH)
    }
}

/// Why an input was rejected, as reported in metric labels.
///
/// `InvalidPayloadDigit` only comes from [crate::NationalCode::from_payload],
/// so a validator never counts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RejectionReason {
    InvalidLength,
    RepeatedDigits,
    ChecksumMismatch,
    InvalidPayloadDigit,
}

impl NationalCodeError {
    pub fn reason(&self) -> RejectionReason {
        match self {
            NationalCodeError::InvalidLength { .. } => RejectionReason::InvalidLength,
            NationalCodeError::RepeatedDigits { .. } => RejectionReason::RepeatedDigits,
            NationalCodeError::ChecksumMismatch { .. } => RejectionReason::ChecksumMismatch,
            NationalCodeError::InvalidPayloadDigit { .. } => RejectionReason::InvalidPayloadDigit,
        }
    }
}

impl RejectionReason {
    pub fn as_label(&self) -> &'static str {
        self.into()
    }
}
