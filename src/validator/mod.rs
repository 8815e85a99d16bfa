mod metrics;

use crate::checksum::Validator;
use crate::config::ValidatorConfig;
use crate::error::NationalCodeError;
use crate::national_code::NationalCode;
use crate::observability::labels::Labels;
use crate::stats::GLOBAL_STATS;
use crate::validator::metrics::ValidatorMetrics;

/// Validates national codes according to a [ValidatorConfig] and counts the
/// outcome of every call.
pub struct NationalCodeValidator {
    config: ValidatorConfig,
    metrics: ValidatorMetrics,
}

impl NationalCodeValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        GLOBAL_STATS.validator_creations.increment(1);
        let metrics = ValidatorMetrics::new(&Labels::from_config(&config.labels));
        Self { config, metrics }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn parse(&self, input: &str) -> Result<NationalCode, NationalCodeError> {
        let result = NationalCode::parse_with_min_length(input, self.config.min_length());
        self.metrics.record(&result);
        result
    }
}

impl Default for NationalCodeValidator {
    fn default() -> Self {
        ValidatorConfig::default().build()
    }
}

impl Validator for NationalCodeValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        self.parse(regex_match).is_ok()
    }
}
