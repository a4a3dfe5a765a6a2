//! Core pipeline stages: validation, DOI assignment, batch building.

pub mod batch;
pub mod confirm;
pub mod doi;
pub mod validate;

pub use batch::build_batches;
pub use confirm::{AssumeYes, Confirm};
pub use doi::DoiMinter;
pub use validate::{DOI_URL_MARKER, has_registered_doi, validate_record};
