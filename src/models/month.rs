use chrono::{Datelike, NaiveDate};

/// Years a month key may name. Keeps `succ`/`pred` and date formatting in range.
pub(crate) const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month, the join key between transactions and budgets.
///
/// Ordering is chronological: year first, then month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// `month` is 1-based. Returns `None` outside 1..=12 or when `year` is
    /// outside [`YEAR_RANGE`].
    pub(crate) fn new(year: i32, month: u32) -> Option<Self> {
        ((1..=12).contains(&month) && YEAR_RANGE.contains(&year)).then_some(Self { year, month })
    }

    pub(crate) fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub(crate) fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS[(self.month - 1) as usize]
    }

    /// Accepts `"Jul 2025"` (abbreviation is case-insensitive) or `"2025-07"`.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some((name, year)) = s.split_once(' ') {
            let idx = MONTH_ABBREVIATIONS
                .iter()
                .position(|m| m.eq_ignore_ascii_case(name.trim()))?;
            let year = year.trim().parse().ok()?;
            return Self::new(year, idx as u32 + 1);
        }
        let (year, month) = s.split_once('-')?;
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    /// All twelve months of `year`, January first.
    pub(crate) fn year_months(year: i32) -> Vec<Self> {
        (1..=12).map(|month| Self { year, month }).collect()
    }

    pub(crate) fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year.saturating_add(1),
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub(crate) fn pred(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year.saturating_sub(1),
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.abbreviation(), self.year)
    }
}
