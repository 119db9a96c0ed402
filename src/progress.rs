//! Completion and streak tracking.
//!
//! A single mutating operation: marking a calendar date complete. Streak
//! rules: growing by one when yesterday has an entry, resetting to one
//! when a positive streak meets a gap, and climbing from zero to one.

use chrono::{NaiveDate, Utc};

use crate::models::{date_key, HistoryEntry, UserData};

/// Marks `today` complete and returns the updated aggregate.
///
/// Calling this twice for the same date is a no-op: the history entry is
/// written once and `total_completed` counts each date once.
pub fn mark_complete(
    data: &UserData,
    today: NaiveDate,
    yesterday: NaiveDate,
    devotional_id: &str,
) -> UserData {
    if data.is_completed_on(today) {
        return data.clone();
    }

    let mut updated = data.clone();
    updated.history.insert(
        date_key(today),
        HistoryEntry {
            completed: true,
            timestamp: Utc::now(),
            day_id: devotional_id.to_string(),
        },
    );

    let yesterday_present = data.history.contains_key(&date_key(yesterday));
    updated.streak = if yesterday_present {
        data.streak + 1
    } else if data.streak > 0 {
        // Positive streak with a missed yesterday: back to one.
        1
    } else {
        data.streak + 1
    };

    updated.total_completed = data.total_completed + 1;
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn completed_entry(id: &str) -> HistoryEntry {
        HistoryEntry {
            completed: true,
            timestamp: Utc::now(),
            day_id: id.to_string(),
        }
    }

    #[test]
    fn test_first_completion_starts_streak_at_one() {
        let data = UserData::default();
        let updated = mark_complete(&data, day(10), day(9), "1");

        assert_eq!(updated.streak, 1);
        assert_eq!(updated.total_completed, 1);
        assert!(updated.is_completed_on(day(10)));
    }

    #[test]
    fn test_yesterday_present_grows_streak() {
        let mut data = UserData::default();
        data.streak = 3;
        data.total_completed = 3;
        data.history.insert(date_key(day(9)), completed_entry("3"));

        let updated = mark_complete(&data, day(10), day(9), "4");
        assert_eq!(updated.streak, 4);
        assert_eq!(updated.total_completed, 4);
    }

    #[test]
    fn test_gap_resets_streak_to_one() {
        let mut data = UserData::default();
        data.streak = 3;
        data.total_completed = 3;
        data.history.insert(date_key(day(5)), completed_entry("3"));

        let updated = mark_complete(&data, day(10), day(9), "4");
        assert_eq!(updated.streak, 1);
        assert_eq!(updated.total_completed, 4);
    }

    #[test]
    fn test_double_completion_same_day_is_noop() {
        let data = UserData::default();
        let once = mark_complete(&data, day(10), day(9), "1");
        let twice = mark_complete(&once, day(10), day(9), "1");

        assert_eq!(twice, once);
        assert_eq!(twice.total_completed, 1);
        assert_eq!(twice.streak, 1);
    }

    #[test]
    fn test_history_entry_records_devotional_id() {
        let data = UserData::default();
        let updated = mark_complete(&data, day(10), day(9), "generated-12");

        let entry = updated.history.get(&date_key(day(10))).unwrap();
        assert!(entry.completed);
        assert_eq!(entry.day_id, "generated-12");
    }

    #[test]
    fn test_total_completed_matches_history_count() {
        let mut data = UserData::default();
        for d in 10..15 {
            data = mark_complete(&data, day(d), day(d - 1), "x");
        }
        assert_eq!(data.total_completed as usize, data.history.len());
        assert_eq!(data.streak, 5);
    }
}
