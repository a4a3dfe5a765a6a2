use chrono::{TimeZone, Utc};

use etd_core::confirm::Confirm;
use etd_core::{AssumeYes, has_registered_doi, validate_record};
use etd_model::{
    DEFAULT_BASE_URL, DEFAULT_INSTITUTION_NAME, DEFAULT_INSTITUTION_PLACE, DoiStrategyKind,
    EtdError, RawRecord, Result, RunConfig, YearBounds,
};

fn test_config() -> RunConfig {
    RunConfig {
        prefix: "10.22215".to_string(),
        depositor_name: "Library".to_string(),
        depositor_email: "doi@example.edu".to_string(),
        registrant: "Example University".to_string(),
        base_url: DEFAULT_BASE_URL.to_string(),
        institution_name: DEFAULT_INSTITUTION_NAME.to_string(),
        institution_place: DEFAULT_INSTITUTION_PLACE.to_string(),
        strategy: DoiStrategyKind::Random,
        year_bounds: YearBounds::default(),
        start_seq: 0,
        max_batch_size: 0,
        run_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

fn raw_record(line: u64) -> RawRecord {
    RawRecord {
        line,
        title: "My Thesis".to_string(),
        full_name: "Smith, Jane Q.".to_string(),
        year: "2019-06-01".to_string(),
        degree_name: "Doctor of Philosophy".to_string(),
        identifier: "pqdiss: 12345|http://x".to_string(),
        source_uuid: "abcd-1234".to_string(),
    }
}

/// Records yes/no answers and the prompts they were given for.
struct Scripted {
    answer: bool,
    prompts: Vec<String>,
}

impl Scripted {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Vec::new(),
        }
    }
}

impl Confirm for Scripted {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        Ok(self.answer)
    }
}

#[test]
fn normalizes_a_complete_row() {
    let config = test_config();
    let record = raw_record(1);

    let dissertation =
        validate_record(&record, &config, &mut AssumeYes).expect("valid record");

    assert_eq!(dissertation.title, "My Thesis");
    assert_eq!(dissertation.surname, "Smith");
    assert_eq!(dissertation.given_name, "Jane");
    assert_eq!(dissertation.year, "2019");
    assert_eq!(dissertation.degree_name, "Doctor of Philosophy");
    assert_eq!(dissertation.external_id.as_deref(), Some("12345"));
    assert_eq!(dissertation.source_uuid, "abcd-1234");
    assert_eq!(
        dissertation.resource_uri,
        format!("{DEFAULT_BASE_URL}abcd-1234")
    );
    assert!(dissertation.doi.is_empty());
}

#[test]
fn empty_title_is_fatal() {
    let config = test_config();
    let mut record = raw_record(3);
    record.title = "   ".to_string();

    let error = validate_record(&record, &config, &mut AssumeYes).expect_err("rejected");
    assert_eq!(error.to_string(), "line 3: empty title");
}

#[test]
fn mononymous_name_accepted_by_operator() {
    let config = test_config();
    let mut record = raw_record(1);
    record.full_name = "Prince".to_string();

    let mut confirm = Scripted::new(true);
    let dissertation = validate_record(&record, &config, &mut confirm).expect("accepted");

    assert_eq!(dissertation.surname, "Prince");
    assert!(dissertation.given_name.is_empty());
    assert_eq!(confirm.prompts, vec!["Mononymous name?"]);
}

#[test]
fn mononymous_name_declined_aborts() {
    let config = test_config();
    let mut record = raw_record(7);
    record.full_name = "Prince".to_string();

    let mut confirm = Scripted::new(false);
    let error = validate_record(&record, &config, &mut confirm).expect_err("declined");
    assert!(matches!(error, EtdError::ConfirmationDeclined { line: 7 }));
}

#[test]
fn empty_surname_is_fatal() {
    let config = test_config();
    let mut record = raw_record(2);
    record.full_name = " , Jane".to_string();

    let error = validate_record(&record, &config, &mut AssumeYes).expect_err("rejected");
    assert_eq!(error.to_string(), "line 2: empty surname");
}

#[test]
fn empty_given_name_is_fatal() {
    let config = test_config();
    let mut record = raw_record(2);
    record.full_name = "Smith,  ".to_string();

    let error = validate_record(&record, &config, &mut AssumeYes).expect_err("rejected");
    assert_eq!(error.to_string(), "line 2: empty given name");
}

#[test]
fn only_first_given_name_is_kept() {
    let config = test_config();
    let mut record = raw_record(1);
    record.full_name = "Garcia Marquez,  Gabriel Jose ".to_string();

    let dissertation = validate_record(&record, &config, &mut AssumeYes).expect("valid");
    assert_eq!(dissertation.surname, "Garcia Marquez");
    assert_eq!(dissertation.given_name, "Gabriel");
}

#[test]
fn year_below_lower_bound_is_fatal() {
    let config = test_config();
    let mut record = raw_record(4);
    record.year = "1899".to_string();

    let error = validate_record(&record, &config, &mut AssumeYes).expect_err("rejected");
    assert_eq!(error.to_string(), "line 4: likely an invalid year: 1899");
}

#[test]
fn year_above_configured_upper_bound_is_fatal() {
    let mut config = test_config();
    config.year_bounds = YearBounds {
        min: 1930,
        max: 2099,
    };
    let mut record = raw_record(4);
    record.year = "2500".to_string();

    assert!(validate_record(&record, &config, &mut AssumeYes).is_err());
}

#[test]
fn unparseable_year_is_fatal() {
    let config = test_config();
    let mut record = raw_record(5);
    record.year = "abcd".to_string();

    let error = validate_record(&record, &config, &mut AssumeYes).expect_err("rejected");
    assert!(error.to_string().contains("not an integer"));
}

#[test]
fn empty_year_is_fatal() {
    let config = test_config();
    let mut record = raw_record(5);
    record.year = String::new();

    let error = validate_record(&record, &config, &mut AssumeYes).expect_err("rejected");
    assert_eq!(error.to_string(), "line 5: empty year");
}

#[test]
fn empty_degree_is_fatal() {
    let config = test_config();
    let mut record = raw_record(6);
    record.degree_name = String::new();

    let error = validate_record(&record, &config, &mut AssumeYes).expect_err("rejected");
    assert_eq!(error.to_string(), "line 6: empty degree name");
}

#[test]
fn missing_proquest_id_is_not_fatal() {
    let config = test_config();
    let mut record = raw_record(1);
    record.identifier = "no match here".to_string();

    let dissertation = validate_record(&record, &config, &mut AssumeYes).expect("valid");
    assert!(dissertation.external_id.is_none());
}

#[test]
fn empty_uuid_is_fatal() {
    let config = test_config();
    let mut record = raw_record(8);
    record.source_uuid = "  ".to_string();

    let error = validate_record(&record, &config, &mut AssumeYes).expect_err("rejected");
    assert_eq!(error.to_string(), "line 8: empty source uuid");
}

#[test]
fn uuid_is_trimmed_before_building_uri() {
    let config = test_config();
    let mut record = raw_record(1);
    record.source_uuid = "  abcd-1234  ".to_string();

    let dissertation = validate_record(&record, &config, &mut AssumeYes).expect("valid");
    assert_eq!(dissertation.source_uuid, "abcd-1234");
    assert_eq!(
        dissertation.resource_uri,
        format!("{DEFAULT_BASE_URL}abcd-1234")
    );
}

#[test]
fn rows_with_registered_doi_are_flagged_for_skipping() {
    let mut record = raw_record(1);
    record.identifier = "pqdiss: 12345|https://doi.org/10.22215/etd-x".to_string();
    assert!(has_registered_doi(&record));

    record.identifier = "pqdiss: 12345|http://proquest.example".to_string();
    assert!(!has_registered_doi(&record));
}
