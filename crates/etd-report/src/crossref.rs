//! CrossRef dissertation batch XML output.
//!
//! The schema is fixed: `doi_batch` 4.4.1 with one `dissertation` element per
//! record. Text content goes through the event writer, so the five reserved
//! XML characters are always escaped.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use etd_model::{Batch, Dissertation, RunConfig};

pub const CROSSREF_SCHEMA_VERSION: &str = "4.4.1";
pub const CROSSREF_NS: &str = "http://www.crossref.org/schema/4.4.1";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const CROSSREF_SCHEMA_LOCATION: &str =
    "http://www.crossref.org/schema/4.4.1 http://www.crossref.org/schemas/crossref4.4.1.xsd";

/// Write one batch to `output_path`, creating parent directories as needed.
pub fn write_crossref_xml(output_path: &Path, batch: &Batch, config: &RunConfig) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let file = File::create(output_path)
        .with_context(|| format!("create {}", output_path.display()))?;
    render_crossref_xml(BufWriter::new(file), batch, config)
        .with_context(|| format!("write {}", output_path.display()))
}

/// Render one batch into any writer.
pub fn render_crossref_xml<W: Write>(writer: W, batch: &Batch, config: &RunConfig) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("doi_batch");
    root.push_attribute(("version", CROSSREF_SCHEMA_VERSION));
    root.push_attribute(("xmlns", CROSSREF_NS));
    root.push_attribute(("xmlns:xsi", XSI_NS));
    root.push_attribute(("xsi:schemaLocation", CROSSREF_SCHEMA_LOCATION));
    xml.write_event(Event::Start(root))?;

    write_head(&mut xml, batch)?;

    xml.write_event(Event::Start(BytesStart::new("body")))?;
    for dissertation in &batch.records {
        write_dissertation(&mut xml, dissertation, config)?;
    }
    xml.write_event(Event::End(BytesEnd::new("body")))?;

    xml.write_event(Event::End(BytesEnd::new("doi_batch")))?;
    Ok(())
}

/// Output path for batch `index`: the configured name for the first batch,
/// then `name-2.xml`, `name-3.xml`, and so on.
pub fn batch_output_path(base: &Path, index: usize) -> PathBuf {
    if index == 0 {
        return base.to_path_buf();
    }
    let stem = base
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("crossref");
    let number = index + 1;
    let name = match base.extension().and_then(|value| value.to_str()) {
        Some(extension) => format!("{stem}-{number}.{extension}"),
        None => format!("{stem}-{number}"),
    };
    base.with_file_name(name)
}

fn write_head<W: Write>(xml: &mut Writer<W>, batch: &Batch) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("head")))?;
    write_text_element(xml, "doi_batch_id", &batch.header.batch_id.to_string())?;
    write_text_element(xml, "timestamp", &batch.header.timestamp.to_string())?;

    xml.write_event(Event::Start(BytesStart::new("depositor")))?;
    write_text_element(xml, "depositor_name", &batch.header.depositor_name)?;
    write_text_element(xml, "email_address", &batch.header.depositor_email)?;
    xml.write_event(Event::End(BytesEnd::new("depositor")))?;

    write_text_element(xml, "registrant", &batch.header.registrant)?;
    xml.write_event(Event::End(BytesEnd::new("head")))?;
    Ok(())
}

fn write_dissertation<W: Write>(
    xml: &mut Writer<W>,
    record: &Dissertation,
    config: &RunConfig,
) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("dissertation")))?;

    let mut person = BytesStart::new("person_name");
    person.push_attribute(("sequence", "first"));
    person.push_attribute(("contributor_role", "author"));
    xml.write_event(Event::Start(person))?;
    if !record.given_name.is_empty() {
        write_text_element(xml, "given_name", &record.given_name)?;
    }
    write_text_element(xml, "surname", &record.surname)?;
    xml.write_event(Event::End(BytesEnd::new("person_name")))?;

    xml.write_event(Event::Start(BytesStart::new("titles")))?;
    write_text_element(xml, "title", &record.title)?;
    xml.write_event(Event::End(BytesEnd::new("titles")))?;

    let mut approval = BytesStart::new("approval_date");
    approval.push_attribute(("media_type", "electronic"));
    xml.write_event(Event::Start(approval))?;
    write_text_element(xml, "year", &record.year)?;
    xml.write_event(Event::End(BytesEnd::new("approval_date")))?;

    xml.write_event(Event::Start(BytesStart::new("institution")))?;
    write_text_element(xml, "institution_name", &config.institution_name)?;
    write_text_element(xml, "institution_place", &config.institution_place)?;
    xml.write_event(Event::End(BytesEnd::new("institution")))?;

    write_text_element(xml, "degree", &record.degree_name)?;

    if let Some(external_id) = &record.external_id {
        xml.write_event(Event::Start(BytesStart::new("publisher_item")))?;
        let mut identifier = BytesStart::new("identifier");
        identifier.push_attribute(("id_type", "dai"));
        xml.write_event(Event::Start(identifier))?;
        xml.write_event(Event::Text(BytesText::new(external_id)))?;
        xml.write_event(Event::End(BytesEnd::new("identifier")))?;
        xml.write_event(Event::End(BytesEnd::new("publisher_item")))?;
    }

    xml.write_event(Event::Start(BytesStart::new("doi_data")))?;
    write_text_element(xml, "doi", &record.doi)?;
    write_text_element(xml, "resource", &record.resource_uri)?;
    xml.write_event(Event::End(BytesEnd::new("doi_data")))?;

    xml.write_event(Event::End(BytesEnd::new("dissertation")))?;
    Ok(())
}

fn write_text_element<W: Write>(xml: &mut Writer<W>, name: &str, value: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(value)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
