use crate::error::RejectionReason;
use metrics::{IntoLabels, Label};
use std::collections::BTreeMap;

/// Label key set by the validator on rejection counters. A configured label
/// with the same key is dropped.
pub const REASON: &str = "reason";

/// Labels attached to the counters of a single validator.
#[derive(Clone, Debug, Default)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn from_config(config_labels: &BTreeMap<String, String>) -> Self {
        Labels(
            config_labels
                .iter()
                .filter(|(key, _)| key.as_str() != REASON)
                .map(|(key, value)| Label::new(key.clone(), value.clone()))
                .collect(),
        )
    }

    /// Configured labels followed by the `reason` label.
    pub fn with_reason(&self, reason: RejectionReason) -> Labels {
        let mut labels = self.0.clone();
        labels.push(Label::new(REASON, reason.as_label()));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
