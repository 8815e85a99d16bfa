use crate::national_code::{MIN_CLEANED_LENGTH, NATIONAL_CODE_LENGTH};
use crate::validator::NationalCodeValidator;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use std::collections::BTreeMap;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ValidatorConfig {
    /// Only accept codes written with all 10 digits. By default codes that
    /// lost up to two leading zeros are padded back.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub strict_length: bool,

    /// Extra labels added to every metric emitted by the built validator.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_length(&self, strict_length: bool) -> Self {
        self.mutate_clone(|x| x.strict_length = strict_length)
    }

    pub fn labels(&self, labels: &[(&str, &str)]) -> Self {
        self.mutate_clone(|x| {
            x.labels = labels
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect()
        })
    }

    pub fn build(&self) -> NationalCodeValidator {
        NationalCodeValidator::new(self.clone())
    }

    pub(crate) fn min_length(&self) -> usize {
        if self.strict_length {
            NATIONAL_CODE_LENGTH
        } else {
            MIN_CLEANED_LENGTH
        }
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
