//! Run configuration.
//!
//! One immutable value constructed at startup from CLI arguments and passed
//! explicitly to each pipeline component.

use chrono::{DateTime, Utc};

/// Resource URI base the source UUID is appended to.
pub const DEFAULT_BASE_URL: &str = "https://curve.carleton.ca/";

/// Institution fields rendered into every dissertation element.
pub const DEFAULT_INSTITUTION_NAME: &str = "Carleton University";
pub const DEFAULT_INSTITUTION_PLACE: &str = "Ottawa, Ontario";

/// DOI assignment policy. The policies produce mutually incompatible
/// identifier shapes; one is selected explicitly per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoiStrategyKind {
    /// Time-ordered identifier with seeded random entropy, shortened to
    /// fifteen lowercase characters.
    Random,
    /// `{prefix}/etd/{year}-{seq:05}`, seq = input line + starting offset.
    Sequential,
    /// `{prefix}-{year}-{last UUID segment}`.
    Derived,
}

impl DoiStrategyKind {
    pub const ALL: [DoiStrategyKind; 3] = [
        DoiStrategyKind::Random,
        DoiStrategyKind::Sequential,
        DoiStrategyKind::Derived,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DoiStrategyKind::Random => "random",
            DoiStrategyKind::Sequential => "sequential",
            DoiStrategyKind::Derived => "derived",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DoiStrategyKind::Random => {
                "Time-ordered randomized suffix; unpredictable, collision-checked"
            }
            DoiStrategyKind::Sequential => {
                "Line-numbered suffix; predictable and auditable, fixed structure"
            }
            DoiStrategyKind::Derived => "Suffix derived from year and source UUID; reproducible",
        }
    }
}

/// Accepted approval-year range, inclusive on both ends.
#[derive(Debug, Clone, Copy)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl Default for YearBounds {
    fn default() -> Self {
        Self {
            min: 1930,
            max: 2999,
        }
    }
}

impl YearBounds {
    pub fn contains(self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// DOI prefix issued by the registration agency.
    pub prefix: String,
    pub depositor_name: String,
    pub depositor_email: String,
    pub registrant: String,
    pub base_url: String,
    pub institution_name: String,
    pub institution_place: String,
    pub strategy: DoiStrategyKind,
    pub year_bounds: YearBounds,
    /// Starting offset added to the line number (sequential strategy only).
    pub start_seq: u64,
    /// Records per output batch; 0 keeps everything in one batch.
    pub max_batch_size: usize,
    /// Instant the run is stamped with. Taken from the clock unless the
    /// operator pins it for a reproducible run.
    pub run_at: DateTime<Utc>,
}
