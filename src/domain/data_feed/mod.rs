//! Data feed domain: named index feeds used to resolve markets.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct DataFeedEntry {
    pub value: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// A feed with its entries in ascending timestamp order.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFeed {
    pub name: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub denomination: Option<String>,
    pub entries: Vec<DataFeedEntry>,
}

impl DataFeed {
    pub fn latest(&self) -> Option<&DataFeedEntry> {
        self.entries.last()
    }

    /// Most recent entry at or before `at`.
    pub fn value_at(&self, at: DateTime<Utc>) -> Option<&DataFeedEntry> {
        let idx = self.entries.partition_point(|e| e.timestamp <= at);
        idx.checked_sub(1).map(|i| &self.entries[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_value_at() {
        let feed = DataFeed {
            name: "btc_usd".to_string(),
            title: None,
            description: None,
            denomination: None,
            entries: vec![
                DataFeedEntry { value: Decimal::from(1), timestamp: at(10) },
                DataFeedEntry { value: Decimal::from(2), timestamp: at(20) },
            ],
        };
        assert!(feed.value_at(at(5)).is_none());
        assert_eq!(feed.value_at(at(10)).unwrap().value, Decimal::from(1));
        assert_eq!(feed.value_at(at(15)).unwrap().value, Decimal::from(1));
        assert_eq!(feed.value_at(at(99)).unwrap().value, Decimal::from(2));
        assert_eq!(feed.latest().unwrap().value, Decimal::from(2));
    }
}
