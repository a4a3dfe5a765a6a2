use std::fs;

use tempfile::TempDir;

use etd_ingest::ExportReader;

fn export_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write export");
    path
}

#[test]
fn reads_rows_with_line_numbers() {
    let dir = TempDir::new().expect("temp dir");
    let path = export_file(
        &dir,
        "etd.csv",
        "Thesis One,\"Smith, Jane\",2019,PhD,pqdiss: 1|http://x,uuid-1\n\
         Thesis Two,\"Doe, John\",2020,MSc,,uuid-2\n",
    );

    let mut reader = ExportReader::open(&path).expect("open export");

    let first = reader.next_record().expect("row").expect("valid row");
    assert_eq!(first.line, 1);
    assert_eq!(first.title, "Thesis One");
    assert_eq!(first.full_name, "Smith, Jane");
    assert_eq!(first.source_uuid, "uuid-1");

    let second = reader.next_record().expect("row").expect("valid row");
    assert_eq!(second.line, 2);
    assert_eq!(second.year, "2020");
    assert_eq!(second.identifier, "");

    assert!(reader.next_record().is_none());
}

#[test]
fn short_row_is_a_line_tagged_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = export_file(
        &dir,
        "short.csv",
        "Thesis One,\"Smith, Jane\",2019,PhD,pqdiss: 1|http://x,uuid-1\n\
         Thesis Two,\"Doe, John\",2020\n",
    );

    let mut reader = ExportReader::open(&path).expect("open export");
    assert!(reader.next_record().expect("row").is_ok());

    let error = reader
        .next_record()
        .expect("row")
        .expect_err("short row rejected");
    assert!(error.to_string().starts_with("line 2:"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let error = ExportReader::open(&dir.path().join("absent.csv")).expect_err("open fails");
    assert!(matches!(error, etd_model::EtdError::Io(_)));
}

#[test]
fn iterator_yields_every_row() {
    let dir = TempDir::new().expect("temp dir");
    let path = export_file(
        &dir,
        "iter.csv",
        "A,\"B, C\",2019,PhD,,u1\nD,\"E, F\",2020,MSc,,u2\nG,\"H, I\",2021,MA,,u3\n",
    );

    let reader = ExportReader::open(&path).expect("open export");
    let rows: Vec<_> = reader.collect::<Result<Vec<_>, _>>().expect("all rows");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].line, 3);
}
