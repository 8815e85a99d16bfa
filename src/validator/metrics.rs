use crate::error::{NationalCodeError, RejectionReason};
use crate::national_code::NationalCode;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

pub struct ValidatorMetrics {
    pub valid: Counter,
    pub invalid_length: Counter,
    pub repeated_digits: Counter,
    pub checksum_mismatch: Counter,
}

impl ValidatorMetrics {
    pub fn new(labels: &Labels) -> Self {
        ValidatorMetrics {
            valid: counter!("national_code.valid", labels.clone()),
            invalid_length: rejected_counter(labels, RejectionReason::InvalidLength),
            repeated_digits: rejected_counter(labels, RejectionReason::RepeatedDigits),
            checksum_mismatch: rejected_counter(labels, RejectionReason::ChecksumMismatch),
        }
    }

    pub fn record(&self, result: &Result<NationalCode, NationalCodeError>) {
        let counter = match result {
            Ok(_) => &self.valid,
            Err(err) => match err.reason() {
                RejectionReason::InvalidLength => &self.invalid_length,
                RejectionReason::RepeatedDigits => &self.repeated_digits,
                RejectionReason::ChecksumMismatch => &self.checksum_mismatch,
                // parsing never checks a payload on its own
                RejectionReason::InvalidPayloadDigit => return,
            },
        };
        counter.increment(1);
    }
}

fn rejected_counter(labels: &Labels, reason: RejectionReason) -> Counter {
    counter!("national_code.rejected", labels.with_reason(reason))
}
