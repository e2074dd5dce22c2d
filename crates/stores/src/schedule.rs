//! Weekly operating schedule.

use std::collections::HashSet;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

const ALL_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Weekly opening hours of a store.
///
/// The opening boundary is inclusive and the closing boundary exclusive: a
/// store with hours 09:00–18:00 is open at exactly 09:00 and already closed
/// at exactly 18:00.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    opens_at: NaiveTime,
    closes_at: NaiveTime,
    open_days: HashSet<Weekday>,
}

impl OpeningHours {
    pub fn new(
        opens_at: NaiveTime,
        closes_at: NaiveTime,
        open_days: impl IntoIterator<Item = Weekday>,
    ) -> Self {
        Self {
            opens_at,
            closes_at,
            open_days: open_days.into_iter().collect(),
        }
    }

    pub fn opens_at(&self) -> NaiveTime {
        self.opens_at
    }

    pub fn closes_at(&self) -> NaiveTime {
        self.closes_at
    }

    pub fn open_days(&self) -> &HashSet<Weekday> {
        &self.open_days
    }

    /// Whether the schedule covers `day` at `time`.
    pub fn is_open_at(&self, day: Weekday, time: NaiveTime) -> bool {
        self.open_days.contains(&day) && self.opens_at <= time && time < self.closes_at
    }
}

impl Default for OpeningHours {
    /// 08:00 to 22:00, every day of the week.
    fn default() -> Self {
        Self {
            opens_at: NaiveTime::from_hms_opt(8, 0, 0).expect("08:00 is a valid time"),
            closes_at: NaiveTime::from_hms_opt(22, 0, 0).expect("22:00 is a valid time"),
            open_days: ALL_WEEK.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn opening_boundary_is_inclusive_closing_exclusive() {
        let hours = OpeningHours::new(at(9, 0), at(18, 0), [Weekday::Mon]);

        assert!(hours.is_open_at(Weekday::Mon, at(9, 0)));
        assert!(hours.is_open_at(Weekday::Mon, at(17, 59)));
        assert!(!hours.is_open_at(Weekday::Mon, at(18, 0)));
        assert!(!hours.is_open_at(Weekday::Mon, at(8, 59)));
    }

    #[test]
    fn closed_days_gate_the_schedule() {
        let hours = OpeningHours::new(at(9, 0), at(18, 0), [Weekday::Mon, Weekday::Tue]);

        assert!(hours.is_open_at(Weekday::Tue, at(12, 0)));
        assert!(!hours.is_open_at(Weekday::Sun, at(12, 0)));
    }

    #[test]
    fn default_covers_every_day_from_8_to_22() {
        let hours = OpeningHours::default();

        assert_eq!(hours.open_days().len(), 7);
        assert!(hours.is_open_at(Weekday::Sun, at(8, 0)));
        assert!(hours.is_open_at(Weekday::Wed, at(21, 59)));
        assert!(!hours.is_open_at(Weekday::Wed, at(22, 0)));
        assert!(!hours.is_open_at(Weekday::Wed, at(7, 30)));
    }
}
