//! Output rendering for the ETD CrossRef converter.

pub mod crossref;
pub mod report;

pub use crossref::{
    CROSSREF_NS, CROSSREF_SCHEMA_LOCATION, CROSSREF_SCHEMA_VERSION, XSI_NS, batch_output_path,
    render_crossref_xml, write_crossref_xml,
};
pub use report::ReportWriter;
