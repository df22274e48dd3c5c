//! Phase entity model.
//!
//! A phase is a dated window inside a campaign. Dates are stored once as
//! naive wall-clock values; the `*_timestamp` accessors are UTC projections
//! of the same field.

use campaign_core::types::{DbId, LocalDateTime, Timestamp, UNSAVED_ID};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `campaign_phases` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Phase {
    pub id: DbId,
    /// Owning campaign. Not checked against `campaigns` at this layer.
    pub campaign_id: DbId,
    pub starting_date: Option<LocalDateTime>,
    pub ending_date: Option<LocalDateTime>,
    pub label: String,
    /// Display position within the campaign. Neither unique nor contiguous.
    pub order_num: i32,
}

impl Phase {
    /// Build an unsaved phase for `campaign_id`.
    pub fn new(
        campaign_id: DbId,
        label: impl Into<String>,
        starting_date: LocalDateTime,
        ending_date: LocalDateTime,
        order_num: i32,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            campaign_id,
            starting_date: Some(starting_date),
            ending_date: Some(ending_date),
            label: label.into(),
            order_num,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }

    pub fn same_identity(&self, other: &Self) -> bool {
        self.is_persisted() && self.id == other.id
    }

    pub fn starting_timestamp(&self) -> Option<Timestamp> {
        self.starting_date.map(|d| d.and_utc())
    }

    /// Set the starting date from a UTC timestamp. `None` is ignored.
    pub fn set_starting_timestamp(&mut self, timestamp: Option<Timestamp>) {
        if let Some(t) = timestamp {
            self.starting_date = Some(t.naive_utc());
        }
    }

    pub fn ending_timestamp(&self) -> Option<Timestamp> {
        self.ending_date.map(|d| d.and_utc())
    }

    /// Set the ending date from a UTC timestamp. `None` is ignored.
    pub fn set_ending_timestamp(&mut self, timestamp: Option<Timestamp>) {
        if let Some(t) = timestamp {
            self.ending_date = Some(t.naive_utc());
        }
    }

    /// Whether `at` falls inside `[starting_date, ending_date]`.
    ///
    /// False when either bound is unset. A reversed window contains nothing.
    pub fn is_open_at(&self, at: LocalDateTime) -> bool {
        match (self.starting_date, self.ending_date) {
            (Some(start), Some(end)) => start <= at && at <= end,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32) -> LocalDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .unwrap()
    }

    fn sample() -> Phase {
        Phase::new(1, "Dépôt", dt(2026, 3, 1, 9), dt(2026, 4, 1, 18), 1)
    }

    #[test]
    fn fields_round_trip() {
        let mut p = Phase::default();
        p.id = 3;
        p.campaign_id = 7;
        p.starting_date = Some(dt(2026, 1, 1, 0));
        p.ending_date = Some(dt(2026, 2, 1, 0));
        p.label = "Vote".into();
        p.order_num = 2;

        assert_eq!(p.id, 3);
        assert_eq!(p.campaign_id, 7);
        assert_eq!(p.starting_date, Some(dt(2026, 1, 1, 0)));
        assert_eq!(p.ending_date, Some(dt(2026, 2, 1, 0)));
        assert_eq!(p.label, "Vote");
        assert_eq!(p.order_num, 2);
    }

    #[test]
    fn none_timestamp_leaves_dates_unchanged() {
        let mut p = sample();
        p.set_starting_timestamp(None);
        p.set_ending_timestamp(None);
        assert_eq!(p.starting_date, Some(dt(2026, 3, 1, 9)));
        assert_eq!(p.ending_date, Some(dt(2026, 4, 1, 18)));
    }

    #[test]
    fn none_timestamp_on_unset_date_keeps_it_unset() {
        let mut p = Phase::default();
        p.set_starting_timestamp(None);
        assert_eq!(p.starting_date, None);
        assert_eq!(p.starting_timestamp(), None);
    }

    #[test]
    fn timestamp_setter_writes_the_date_field() {
        let mut p = sample();
        let t = Utc.with_ymd_and_hms(2026, 5, 10, 12, 30, 0).unwrap();
        p.set_starting_timestamp(Some(t));
        p.set_ending_timestamp(Some(t));
        assert_eq!(p.starting_date, Some(t.naive_utc()));
        assert_eq!(p.ending_date, Some(t.naive_utc()));
    }

    #[test]
    fn timestamp_getter_projects_the_same_instant() {
        let mut p = sample();
        let d = dt(2026, 7, 14, 10);
        p.starting_date = Some(d);
        p.ending_date = Some(d);

        let expected = Utc.with_ymd_and_hms(2026, 7, 14, 10, 0, 0).unwrap();
        assert_eq!(p.starting_timestamp(), Some(expected));
        assert_eq!(p.ending_timestamp(), Some(expected));
    }

    #[test]
    fn sub_second_precision_survives_projection() {
        let mut p = Phase::default();
        let t = Utc.timestamp_opt(1_780_000_000, 123_456_789).unwrap();
        p.set_ending_timestamp(Some(t));
        assert_eq!(p.ending_timestamp(), Some(t));
    }

    #[test]
    fn open_window_is_inclusive() {
        let p = sample();
        assert!(p.is_open_at(dt(2026, 3, 1, 9)));
        assert!(p.is_open_at(dt(2026, 3, 15, 0)));
        assert!(p.is_open_at(dt(2026, 4, 1, 18)));
        assert!(!p.is_open_at(dt(2026, 4, 2, 0)));
    }

    #[test]
    fn reversed_or_partial_window_is_never_open() {
        let mut p = sample();
        p.starting_date = Some(dt(2026, 5, 1, 0));
        assert!(!p.is_open_at(dt(2026, 4, 15, 0)));

        p.ending_date = None;
        assert!(!p.is_open_at(dt(2026, 5, 1, 0)));
    }
}
