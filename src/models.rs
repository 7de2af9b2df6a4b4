use serde::{Deserialize, Serialize};

/// One API result entry: a name with its estimated mean age and the number
/// of samples behind the estimate. Both may be absent when the API could
/// not resolve the name; extra response fields (e.g. `country_id`) are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameRecord {
    pub name: String,
    pub age: Option<u32>,
    pub count: Option<u64>,
}

/// Decoded body of one batch query.
///
/// The API answers a single-name query with a lone JSON object and a
/// multi-name query with a JSON array, so the decoding step surfaces the
/// shape explicitly instead of leaving it to the aggregation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BatchResponse {
    Many(Vec<NameRecord>),
    Single(NameRecord),
}

impl BatchResponse {
    /// View the response as a slice of records regardless of shape.
    pub fn records(&self) -> &[NameRecord] {
        match self {
            BatchResponse::Many(records) => records,
            BatchResponse::Single(record) => std::slice::from_ref(record),
        }
    }
}
