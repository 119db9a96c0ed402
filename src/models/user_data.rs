use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One record per completed calendar date. Written once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub completed: bool,
    pub timestamp: DateTime<Utc>,
    pub day_id: String,
}

/// The durable progress aggregate, shared between local and remote storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub streak: u32,
    pub total_completed: u32,
    /// Keyed by completion date as `YYYY-MM-DD`.
    pub history: BTreeMap<String, HistoryEntry>,
    pub joined_date: DateTime<Utc>,
}

impl Default for UserData {
    fn default() -> Self {
        Self {
            streak: 0,
            total_completed: 0,
            history: BTreeMap::new(),
            joined_date: Utc::now(),
        }
    }
}

impl UserData {
    /// The day number to show next: one past the number of completed days.
    pub fn current_day(&self) -> u32 {
        self.history.len() as u32 + 1
    }

    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.history
            .get(&date_key(date))
            .map(|entry| entry.completed)
            .unwrap_or(false)
    }
}

/// History map key for a calendar date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_day_from_history() {
        let mut data = UserData::default();
        assert_eq!(data.current_day(), 1);

        data.history.insert(
            "2025-06-01".to_string(),
            HistoryEntry {
                completed: true,
                timestamp: Utc::now(),
                day_id: "1".to_string(),
            },
        );
        assert_eq!(data.current_day(), 2);
    }

    #[test]
    fn test_is_completed_on() {
        let mut data = UserData::default();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(!data.is_completed_on(date));

        data.history.insert(
            date_key(date),
            HistoryEntry {
                completed: true,
                timestamp: Utc::now(),
                day_id: "1".to_string(),
            },
        );
        assert!(data.is_completed_on(date));
    }

    #[test]
    fn test_user_data_json_roundtrip() {
        let mut data = UserData::default();
        data.streak = 3;
        data.total_completed = 5;
        data.history.insert(
            "2025-06-01".to_string(),
            HistoryEntry {
                completed: true,
                timestamp: Utc::now(),
                day_id: "generated-5".to_string(),
            },
        );

        let json = serde_json::to_string(&data).unwrap();
        let parsed: UserData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }
}
