//! Field validation and normalization.
//!
//! Rules run in a fixed order and every failure is fatal for the whole run;
//! there is no partial-success mode.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use etd_model::{Dissertation, EtdError, RawRecord, Result, RunConfig};

use crate::confirm::Confirm;

/// Marker identifying rows registered on a previous run.
pub const DOI_URL_MARKER: &str = "https://doi.org";

static PROQUEST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"pqdiss: (\w+)\|http").expect("proquest id pattern"));

/// True when the export row already carries a registered DOI URL.
///
/// Such rows are skipped before validation, which is what makes re-running
/// over a partially annotated export idempotent.
pub fn has_registered_doi(record: &RawRecord) -> bool {
    record.identifier.contains(DOI_URL_MARKER)
}

/// Validate one raw row into a [`Dissertation`] with every field but `doi`
/// populated.
pub fn validate_record(
    record: &RawRecord,
    config: &RunConfig,
    confirm: &mut dyn Confirm,
) -> Result<Dissertation> {
    let line = record.line;

    let title = record.title.trim();
    if title.is_empty() {
        return Err(EtdError::record(line, "empty title"));
    }

    let (surname, given_name) = split_name(record, confirm)?;

    let year = validate_year(record, config)?;

    let degree_name = record.degree_name.trim();
    if degree_name.is_empty() {
        return Err(EtdError::record(line, "empty degree name"));
    }

    let external_id = PROQUEST_ID
        .captures(&record.identifier)
        .map(|captures| captures[1].to_string());

    let source_uuid = record.source_uuid.trim();
    if source_uuid.is_empty() {
        return Err(EtdError::record(line, "empty source uuid"));
    }
    let resource_uri = format!("{}{}", config.base_url, source_uuid);

    Ok(Dissertation {
        line,
        title: title.to_string(),
        surname,
        given_name,
        year,
        degree_name: degree_name.to_string(),
        external_id,
        source_uuid: source_uuid.to_string(),
        resource_uri,
        doi: String::new(),
    })
}

/// Split the "surname, given-name(s)" field.
///
/// A field without a comma may be a mononymous author; the operator decides.
fn split_name(record: &RawRecord, confirm: &mut dyn Confirm) -> Result<(String, String)> {
    let line = record.line;
    let mut parts = record.full_name.splitn(2, ',');
    let first = parts.next().unwrap_or("");
    match parts.next() {
        None => {
            warn!(line, name = %record.full_name, "record with a single name");
            if !confirm.confirm("Mononymous name?")? {
                return Err(EtdError::ConfirmationDeclined { line });
            }
            Ok((first.trim().to_string(), String::new()))
        }
        Some(rest) => {
            let surname = first.trim();
            if surname.is_empty() {
                return Err(EtdError::record(line, "empty surname"));
            }
            // Only the first given name goes into the registration.
            let given_name = rest.trim().split_whitespace().next().unwrap_or("");
            if given_name.is_empty() {
                return Err(EtdError::record(line, "empty given name"));
            }
            Ok((surname.to_string(), given_name.to_string()))
        }
    }
}

fn validate_year(record: &RawRecord, config: &RunConfig) -> Result<String> {
    let line = record.line;
    if record.year.is_empty() {
        return Err(EtdError::record(line, "empty year"));
    }
    let year: String = record.year.chars().take(4).collect();
    let value: i32 = year
        .parse()
        .map_err(|_| EtdError::record(line, format!("year {year:?} is not an integer")))?;
    if !config.year_bounds.contains(value) {
        return Err(EtdError::record(line, format!("likely an invalid year: {value}")));
    }
    Ok(year)
}
