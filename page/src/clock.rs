//! Calendar year source for the footer's copyright line.

use chrono::Datelike;

/// Supplies the current calendar year.
///
/// Injected into [`crate::render`] so rendering never reads ambient time itself.
pub trait YearProvider: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Local wall-clock year.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl YearProvider for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always reports the same year. Used for reproducible exports and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl YearProvider for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}
