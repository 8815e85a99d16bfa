use crate::checksum::Validator;
use crate::national_code::validate;

pub struct IranianNationalCodeChecksum;

impl Validator for IranianNationalCodeChecksum {
    // https://fa.wikipedia.org/wiki/کارت_ملی_ایران
    // The national code is 10 digits, the last one being a mod 11 check digit.
    // Codes that lost their leading zeros (8 or 9 digits) are padded back.
    fn is_valid_match(&self, regex_match: &str) -> bool {
        validate(regex_match)
    }
}
