mod iranian_national_code_checksum;

pub use crate::checksum::iranian_national_code_checksum::IranianNationalCodeChecksum;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

pub const PAYLOAD_LENGTH: usize = 9;

const WEIGHTS: &[u64; PAYLOAD_LENGTH] = &[10, 9, 8, 7, 6, 5, 4, 3, 2];
const MODULO: u64 = 11;

/// Computes the check digit for the first 9 digits of a national code.
///
/// Each digit is multiplied by its weight (10 down to 2, left to right) and the
/// sum is reduced modulo 11. A remainder of 0 or 1 is the check digit itself,
/// any other remainder `r` gives `11 - r`.
pub fn compute_check_digit(payload: &[u32; PAYLOAD_LENGTH]) -> u32 {
    let sum: u64 = payload
        .iter()
        .zip(WEIGHTS)
        .map(|(digit, weight)| u64::from(*digit) * weight)
        .sum();

    match sum % MODULO {
        remainder @ (0 | 1) => remainder as u32,
        remainder => (MODULO - remainder) as u32,
    }
}
