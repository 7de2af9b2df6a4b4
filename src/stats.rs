use crate::models::BatchResponse;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-name statistics aggregated over all batch responses.
///
/// Invariant: both maps always hold exactly the same key set. A record
/// whose age is absent contributes to neither map.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameStats {
    pub age_by_name: BTreeMap<String, u32>,
    pub count_by_name: BTreeMap<String, u64>,
}

impl NameStats {
    pub fn is_empty(&self) -> bool {
        self.age_by_name.is_empty()
    }
}

/// Flatten the ordered batch responses into [`NameStats`].
///
/// Records are visited in natural scan order (batch order, then record
/// order within a batch), so when the same name shows up more than once
/// the last occurrence wins in both maps. Unresolved names (absent age)
/// are skipped entirely.
pub fn aggregate(responses: &[BatchResponse]) -> NameStats {
    let mut stats = NameStats::default();

    for response in responses {
        for record in response.records() {
            if let Some(age) = record.age {
                stats.age_by_name.insert(record.name.clone(), age);
                stats
                    .count_by_name
                    .insert(record.name.clone(), record.count.unwrap_or(0));
            }
        }
    }

    stats
}
