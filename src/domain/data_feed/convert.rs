//! Conversion: DataFeedResponse → DataFeed (TryFrom + validation).

use super::wire;
use super::{DataFeed, DataFeedEntry};
use crate::domain::{ValidationError, Validator};

impl TryFrom<wire::DataFeedResponse> for DataFeed {
    type Error = ValidationError;

    fn try_from(source: wire::DataFeedResponse) -> Result<Self, Self::Error> {
        let mut v = Validator::new();
        let mut entries = Vec::with_capacity(source.entries.len());

        for entry in source.entries {
            let value = v.required_decimal("entries.value", entry.value.as_deref());
            match entry.timestamp {
                Some(timestamp) => entries.push(DataFeedEntry { value, timestamp }),
                None => v.missing("entries.timestamp"),
            }
        }
        entries.sort_by_key(|e| e.timestamp);

        v.finish("DataFeed", &source.name)?;

        Ok(DataFeed {
            name: source.name,
            title: source.title,
            description: source.description,
            denomination: source.denomination,
            entries,
        })
    }
}
