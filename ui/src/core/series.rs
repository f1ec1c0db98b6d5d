//! Canonical daily value series and trailing-window slicing per period.

use serde::{Deserialize, Serialize};
use time::{Date, Duration};

use super::error::{ChartError, ChartResult};

/// One observation of the portfolio value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Position within the slice it was taken from (0 = oldest).
    pub index: usize,
    pub value: f64,
    pub date: Date,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    #[default]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL")]
    All,
}

impl Period {
    /// Selector order, shortest window first.
    pub const ALL: [Period; 6] = [
        Period::OneWeek,
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
        Period::All,
    ];

    /// Short code shown on the selector pill.
    pub fn code(self) -> &'static str {
        match self {
            Period::OneWeek => "1W",
            Period::OneMonth => "1M",
            Period::ThreeMonths => "3M",
            Period::SixMonths => "6M",
            Period::OneYear => "1Y",
            Period::All => "ALL",
        }
    }

    /// Phrase used in "last {display_name}" under the headline value.
    pub fn display_name(self) -> &'static str {
        match self {
            Period::OneWeek => "week",
            Period::OneMonth => "month",
            Period::ThreeMonths => "3 months",
            Period::SixMonths => "6 months",
            Period::OneYear => "year",
            Period::All => "all time",
        }
    }
}

/// Number of trailing daily samples each period shows.
///
/// The longer periods share the 90 day window until the backing series holds
/// more history than the demo data does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodWindows {
    pub one_week: usize,
    pub one_month: usize,
    pub three_months: usize,
    pub six_months: usize,
    pub one_year: usize,
    pub all: usize,
}

impl Default for PeriodWindows {
    fn default() -> Self {
        Self {
            one_week: 7,
            one_month: 30,
            three_months: 90,
            six_months: 90,
            one_year: 90,
            all: 90,
        }
    }
}

impl PeriodWindows {
    /// Every period mapped to the same window; handy for short series.
    pub fn uniform(days: usize) -> Self {
        Self {
            one_week: days,
            one_month: days,
            three_months: days,
            six_months: days,
            one_year: days,
            all: days,
        }
    }

    pub fn window(&self, period: Period) -> usize {
        match period {
            Period::OneWeek => self.one_week,
            Period::OneMonth => self.one_month,
            Period::ThreeMonths => self.three_months,
            Period::SixMonths => self.six_months,
            Period::OneYear => self.one_year,
            Period::All => self.all,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStore {
    values: Vec<f64>,
    windows: PeriodWindows,
    anchor: Date,
}

impl SeriesStore {
    /// Build a store over daily values (oldest first) whose last sample falls
    /// on `anchor`. Non-finite values are rejected.
    pub fn new(values: Vec<f64>, anchor: Date) -> ChartResult<Self> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ChartError::InvalidValue { index, value });
        }
        Ok(Self {
            values,
            windows: PeriodWindows::default(),
            anchor,
        })
    }

    pub fn with_windows(mut self, windows: PeriodWindows) -> Self {
        self.windows = windows;
        self
    }

    pub fn windows(&self) -> &PeriodWindows {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Trailing window for `period`, re-indexed from zero and re-dated so the
    /// last sample lands on the anchor date. A series shorter than the window
    /// is returned whole.
    pub fn slice(&self, period: Period) -> ChartResult<Vec<Sample>> {
        if self.values.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        let window = self.windows.window(period).clamp(1, self.values.len());
        let start = self.values.len() - window;

        let samples = self.values[start..]
            .iter()
            .enumerate()
            .map(|(index, &value)| Sample {
                index,
                value,
                date: self.anchor - Duration::days((window - 1 - index) as i64),
            })
            .collect();

        Ok(samples)
    }

    pub fn latest(&self) -> ChartResult<f64> {
        self.values.last().copied().ok_or(ChartError::EmptySeries)
    }

    /// First value of the trailing window for `period`.
    pub fn period_start(&self, period: Period) -> ChartResult<f64> {
        if self.values.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        let window = self.windows.window(period).max(1);
        let start = self.values.len().saturating_sub(window);
        Ok(self.values[start])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn store(len: usize) -> SeriesStore {
        let values = (0..len).map(|i| 1000.0 + i as f64).collect();
        SeriesStore::new(values, date!(2026 - 10 - 19)).unwrap()
    }

    #[test]
    fn slice_length_matches_window_for_every_period() {
        let store = store(90);
        for period in Period::ALL {
            let samples = store.slice(period).unwrap();
            assert_eq!(samples.len(), store.windows().window(period), "{period:?}");
        }
    }

    #[test]
    fn slice_is_suffix_of_canonical_series() {
        let store = store(90);
        let samples = store.slice(Period::OneWeek).unwrap();
        let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
        assert_eq!(values.as_slice(), &store.values()[83..]);
        assert_eq!(samples[0].index, 0);
        assert_eq!(samples[6].index, 6);
    }

    #[test]
    fn slice_dates_end_on_anchor() {
        let store = store(90);
        let samples = store.slice(Period::OneMonth).unwrap();
        assert_eq!(samples.last().unwrap().date, date!(2026 - 10 - 19));
        assert_eq!(samples[0].date, date!(2026 - 09 - 20));
    }

    #[test]
    fn short_series_is_returned_whole() {
        let store = store(4);
        let samples = store.slice(Period::ThreeMonths).unwrap();
        assert_eq!(samples.len(), 4);
    }

    #[test]
    fn empty_series_cannot_be_sliced() {
        let store = SeriesStore::new(Vec::new(), date!(2026 - 10 - 19)).unwrap();
        for period in Period::ALL {
            assert!(matches!(store.slice(period), Err(ChartError::EmptySeries)));
        }
        assert!(matches!(store.latest(), Err(ChartError::EmptySeries)));
    }

    #[test]
    fn nan_values_are_rejected() {
        let err = SeriesStore::new(vec![1.0, f64::NAN], date!(2026 - 10 - 19)).unwrap_err();
        assert!(matches!(err, ChartError::InvalidValue { index: 1, .. }));
    }

    #[test]
    fn period_start_uses_trailing_window() {
        let store = store(90);
        assert_eq!(store.period_start(Period::OneWeek).unwrap(), 1083.0);
        assert_eq!(store.period_start(Period::All).unwrap(), 1000.0);
    }

    #[test]
    fn periods_have_headline_names() {
        let names: Vec<_> = Period::ALL.iter().map(|p| p.display_name()).collect();
        assert_eq!(
            names,
            ["week", "month", "3 months", "6 months", "year", "all time"]
        );
        assert_eq!(Period::default().display_name(), "3 months");
    }
}
