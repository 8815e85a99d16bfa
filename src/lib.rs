// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod config;
mod error;
mod national_code;
mod observability;
mod stats;
mod validator;

// This is the public API of the national code library
pub use checksum::{compute_check_digit, IranianNationalCodeChecksum, Validator, PAYLOAD_LENGTH};
pub use config::ValidatorConfig;
pub use error::{NationalCodeError, RejectionReason};
pub use national_code::{validate, NationalCode, MIN_CLEANED_LENGTH, NATIONAL_CODE_LENGTH};
pub use validator::NationalCodeValidator;
