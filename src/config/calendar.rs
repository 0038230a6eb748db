//! The twelve-period calendar.
//!
//! This module provides [`PeriodCalendar`], the static mapping from a period
//! identifier to its primary range and optional premium range. The mapping is
//! configuration: it is built once from `schedule.yaml` (or the built-in 2025
//! schedule) and never changes afterwards.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, LAST_PERIOD, PeriodDefinition, is_valid_period_id};

use super::types::{PeriodEntry, ScheduleConfig};

/// The built-in 2025 schedule: `(id, label, primary start, primary end, premium range)`.
///
/// Periods 1-4 have their start date after their end date and select nothing.
/// They are kept exactly as the schedule was issued. The premium ranges of
/// periods 5-12 are placeholders pending product input and mirror
/// `config/pay-months-2025/schedule.yaml`.
const BUILTIN_2025: [(u32, &str, NaiveDate, NaiveDate, Option<(NaiveDate, NaiveDate)>); 12] = [
    (1, "January", ymd(2025, 1, 11), ymd(2024, 12, 9), None),
    (2, "February", ymd(2025, 2, 11), ymd(2025, 1, 9), None),
    (3, "March", ymd(2025, 3, 11), ymd(2025, 2, 9), None),
    (4, "April", ymd(2025, 4, 11), ymd(2025, 3, 9), None),
    (5, "May (Jan 11 - Apr 9)", ymd(2025, 1, 11), ymd(2025, 4, 9), Some((ymd(2025, 4, 11), ymd(2025, 5, 9)))),
    (6, "June (Feb 11 - May 9)", ymd(2025, 2, 11), ymd(2025, 5, 9), Some((ymd(2025, 5, 11), ymd(2025, 6, 9)))),
    (7, "July (Mar 11 - Jun 9)", ymd(2025, 3, 11), ymd(2025, 6, 9), Some((ymd(2025, 6, 11), ymd(2025, 7, 9)))),
    (8, "August (Apr 11 - Jul 9)", ymd(2025, 4, 11), ymd(2025, 7, 9), Some((ymd(2025, 7, 11), ymd(2025, 8, 9)))),
    (9, "September (May 11 - Aug 9)", ymd(2025, 5, 11), ymd(2025, 8, 9), Some((ymd(2025, 8, 11), ymd(2025, 9, 9)))),
    (10, "October (Jun 11 - Sep 9)", ymd(2025, 6, 11), ymd(2025, 9, 9), Some((ymd(2025, 9, 11), ymd(2025, 10, 9)))),
    (11, "November (Jul 11 - Oct 9)", ymd(2025, 7, 11), ymd(2025, 10, 9), Some((ymd(2025, 10, 11), ymd(2025, 11, 9)))),
    (12, "December (Aug 11 - Nov 9)", ymd(2025, 8, 11), ymd(2025, 11, 9), Some((ymd(2025, 11, 11), ymd(2025, 12, 9)))),
];

/// A calendar date for the built-in table. Evaluated at compile time, so an
/// impossible date fails the build.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid date in the built-in schedule"),
    }
}

/// Maps period identifiers 1-12 to their date ranges.
///
/// # Example
///
/// ```
/// use hours_analyzer::config::PeriodCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = PeriodCalendar::builtin();
///
/// let primary = calendar.range_for(5).unwrap();
/// assert_eq!(primary.start, NaiveDate::from_ymd_opt(2025, 1, 11).unwrap());
/// assert_eq!(primary.end, NaiveDate::from_ymd_opt(2025, 4, 9).unwrap());
///
/// assert!(calendar.premium_range_for(1).unwrap().is_none());
/// assert!(calendar.range_for(13).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodCalendar {
    /// Period definitions ordered by id; index `i` holds period `i + 1`.
    periods: Vec<PeriodDefinition>,
}

impl PeriodCalendar {
    /// Builds a calendar from period definitions.
    ///
    /// Returns `InvalidSchedule` unless every id 1-12 appears exactly once.
    pub fn new(periods: Vec<PeriodDefinition>) -> EngineResult<Self> {
        let mut slots: Vec<Option<PeriodDefinition>> = vec![None; LAST_PERIOD as usize];

        for period in periods {
            if !is_valid_period_id(period.id) {
                return Err(EngineError::InvalidSchedule {
                    message: format!("period id {} is outside 1-12", period.id),
                });
            }
            let slot = &mut slots[(period.id - 1) as usize];
            if slot.is_some() {
                return Err(EngineError::InvalidSchedule {
                    message: format!("period {} is defined more than once", period.id),
                });
            }
            *slot = Some(period);
        }

        let mut ordered = Vec::with_capacity(slots.len());
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(period) => ordered.push(period),
                None => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!("period {} is missing", index + 1),
                    });
                }
            }
        }

        Ok(Self { periods: ordered })
    }

    /// Builds a calendar from a parsed `schedule.yaml`.
    pub fn from_schedule(schedule: &ScheduleConfig) -> EngineResult<Self> {
        let periods = schedule
            .periods
            .iter()
            .map(period_from_entry)
            .collect::<EngineResult<Vec<_>>>()?;
        Self::new(periods)
    }

    /// The 2025 schedule compiled into the binary.
    pub fn builtin() -> Self {
        let periods = BUILTIN_2025
            .iter()
            .map(|(id, label, start, end, premium)| PeriodDefinition {
                id: *id,
                label: (*label).to_string(),
                primary_range: DateRange::new(*start, *end),
                premium_range: premium.map(|(start, end)| DateRange::new(start, end)),
            })
            .collect();
        Self { periods }
    }

    /// Returns the definition of a period.
    ///
    /// # Errors
    ///
    /// `InvalidPeriod` if `period_id` is not in 1-12.
    pub fn period(&self, period_id: u32) -> EngineResult<&PeriodDefinition> {
        if !is_valid_period_id(period_id) {
            return Err(EngineError::InvalidPeriod { period_id });
        }
        self.periods
            .get((period_id - 1) as usize)
            .ok_or(EngineError::InvalidPeriod { period_id })
    }

    /// Returns the primary range of a period.
    ///
    /// # Errors
    ///
    /// `InvalidPeriod` if `period_id` is not in 1-12.
    pub fn range_for(&self, period_id: u32) -> EngineResult<DateRange> {
        Ok(self.period(period_id)?.primary_range)
    }

    /// Returns the premium range of a period, or `None` if it has none.
    ///
    /// # Errors
    ///
    /// `InvalidPeriod` if `period_id` is not in 1-12.
    pub fn premium_range_for(&self, period_id: u32) -> EngineResult<Option<DateRange>> {
        Ok(self.period(period_id)?.premium_range)
    }

    /// Returns the label of a period.
    pub fn label_for(&self, period_id: u32) -> EngineResult<&str> {
        Ok(self.period(period_id)?.label.as_str())
    }

    /// Returns all twelve periods ordered by id.
    pub fn periods(&self) -> &[PeriodDefinition] {
        &self.periods
    }
}

impl Default for PeriodCalendar {
    fn default() -> Self {
        Self::builtin()
    }
}

fn period_from_entry(entry: &PeriodEntry) -> EngineResult<PeriodDefinition> {
    let premium_range = match (entry.premium_start_date, entry.premium_end_date) {
        (Some(start), Some(end)) => Some(DateRange::new(start, end)),
        (None, None) => None,
        _ => {
            return Err(EngineError::InvalidSchedule {
                message: format!(
                    "period {} must give both premium_start_date and premium_end_date or neither",
                    entry.id
                ),
            });
        }
    };

    Ok(PeriodDefinition {
        id: entry.id,
        label: entry.label.clone(),
        primary_range: DateRange::new(entry.start_date, entry.end_date),
        premium_range,
    })
}
