use crate::checksum::{compute_check_digit, PAYLOAD_LENGTH};
use crate::error::NationalCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const NATIONAL_CODE_LENGTH: usize = 10;

/// Shortest cleaned code still accepted, since up to two leading zeros are
/// commonly dropped when codes are transcribed as numbers.
pub const MIN_CLEANED_LENGTH: usize = 8;

/// Returns true if `input` holds a valid Iranian National Code.
///
/// Every character that is not an ASCII digit is ignored, so `"658-745215-9"`
/// and `"6587452159"` get the same verdict. Codes with 8 or 9 digits are padded
/// with leading zeros before the checksum is verified.
pub fn validate(input: &str) -> bool {
    NationalCode::parse(input).is_ok()
}

/// A standardized national code whose check digit has been verified.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NationalCode([u8; NATIONAL_CODE_LENGTH]);

impl NationalCode {
    pub fn parse(input: &str) -> Result<Self, NationalCodeError> {
        Self::parse_with_min_length(input, MIN_CLEANED_LENGTH)
    }

    pub(crate) fn parse_with_min_length(
        input: &str,
        min_length: usize,
    ) -> Result<Self, NationalCodeError> {
        let digits = standardize(input, min_length)?;
        verify(&digits)?;
        Ok(NationalCode(digits))
    }

    /// Builds a valid code by appending the computed check digit to `payload`.
    pub fn from_payload(payload: [u32; PAYLOAD_LENGTH]) -> Result<Self, NationalCodeError> {
        let mut digits = [0; NATIONAL_CODE_LENGTH];
        for (position, (slot, value)) in digits.iter_mut().zip(payload).enumerate() {
            *slot = u8::try_from(value)
                .ok()
                .filter(|digit| *digit <= 9)
                .ok_or(NationalCodeError::InvalidPayloadDigit { position, value })?;
        }
        digits[PAYLOAD_LENGTH] = compute_check_digit(&payload) as u8;

        verify(&digits)?;
        Ok(NationalCode(digits))
    }

    /// All 10 digits, check digit last.
    pub fn digits(&self) -> [u32; NATIONAL_CODE_LENGTH] {
        self.0.map(u32::from)
    }

    pub fn payload(&self) -> [u32; PAYLOAD_LENGTH] {
        let mut payload = [0; PAYLOAD_LENGTH];
        for (slot, digit) in payload.iter_mut().zip(&self.0) {
            *slot = u32::from(*digit);
        }
        payload
    }

    pub fn check_digit(&self) -> u32 {
        u32::from(self.0[PAYLOAD_LENGTH])
    }
}

/// Keeps the ASCII digits of `input` and left-pads them with zeros to 10 digits.
fn standardize(
    input: &str,
    min_length: usize,
) -> Result<[u8; NATIONAL_CODE_LENGTH], NationalCodeError> {
    let mut cleaned = [0; NATIONAL_CODE_LENGTH];
    let mut length = 0;
    for digit in input.chars().filter_map(ascii_digit) {
        // keep counting past the buffer so the length gate sees the real length
        if let Some(slot) = cleaned.get_mut(length) {
            *slot = digit;
        }
        length += 1;
    }

    if length < min_length || length > NATIONAL_CODE_LENGTH {
        return Err(NationalCodeError::InvalidLength { length, min_length });
    }

    let mut standardized = [0; NATIONAL_CODE_LENGTH];
    standardized[NATIONAL_CODE_LENGTH - length..].copy_from_slice(&cleaned[..length]);
    Ok(standardized)
}

fn ascii_digit(c: char) -> Option<u8> {
    if c.is_ascii_digit() {
        Some(c as u8 - b'0')
    } else {
        None
    }
}

fn verify(digits: &[u8; NATIONAL_CODE_LENGTH]) -> Result<(), NationalCodeError> {
    let first = digits[0];
    if digits.iter().all(|digit| *digit == first) {
        return Err(NationalCodeError::RepeatedDigits {
            digit: u32::from(first),
        });
    }

    let code = NationalCode(*digits);
    let expected = compute_check_digit(&code.payload());
    let actual = code.check_digit();
    if expected != actual {
        return Err(NationalCodeError::ChecksumMismatch { expected, actual });
    }
    Ok(())
}

impl fmt::Display for NationalCode {
    /// `{}` prints the 10 digits, `{:#}` the grouped `XXX-XXXXXX-X` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, digit) in self.0.iter().enumerate() {
            if f.alternate() && (idx == 3 || idx == PAYLOAD_LENGTH) {
                f.write_str("-")?;
            }
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl fmt::Debug for NationalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NationalCode(\"{}\")", self)
    }
}

impl FromStr for NationalCode {
    type Err = NationalCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NationalCode::parse(s)
    }
}

impl TryFrom<String> for NationalCode {
    type Error = NationalCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NationalCode::parse(&value)
    }
}

impl From<NationalCode> for String {
    fn from(code: NationalCode) -> Self {
        code.to_string()
    }
}
