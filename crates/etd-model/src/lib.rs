pub mod batch;
pub mod config;
pub mod error;
pub mod record;
pub mod summary;

pub use batch::{Batch, BatchHeader};
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_INSTITUTION_NAME, DEFAULT_INSTITUTION_PLACE, DoiStrategyKind,
    RunConfig, YearBounds,
};
pub use error::{EtdError, Result};
pub use record::{Dissertation, RawRecord};
pub use summary::RunSummary;
