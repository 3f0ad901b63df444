use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use revtriage::{
    ChatModel, ClassifyParams, CohereClient, CohereError, ReviewsError, classify_file_to_path,
};

/// Replays a fixed list of responses, one per call, in order.
struct ScriptedModel {
    responses: RefCell<Vec<String>>,
    calls: RefCell<usize>,
}

impl ScriptedModel {
    fn new(responses: &[&str]) -> Self {
        Self {
            responses: RefCell::new(responses.iter().map(|s| s.to_string()).collect()),
            calls: RefCell::new(0),
        }
    }

    fn calls(&self) -> usize {
        *self.calls.borrow()
    }
}

impl ChatModel for ScriptedModel {
    fn generate(
        &self,
        _prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String, CohereError> {
        *self.calls.borrow_mut() += 1;
        Ok(self.responses.borrow_mut().remove(0))
    }
}

/// Fails every call, standing in for an unhealthy endpoint.
struct FailingModel;

impl ChatModel for FailingModel {
    fn generate(
        &self,
        _prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String, CohereError> {
        Err(CohereError::Api {
            status: 500,
            body: "internal error".to_string(),
        })
    }
}

fn fast_params() -> ClassifyParams {
    ClassifyParams {
        sleep_between_calls: Duration::ZERO,
        ..ClassifyParams::default()
    }
}

fn write_input(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("reviews.csv");
    fs::write(&path, body).expect("failed writing input csv");
    path
}

fn read_rows(path: &PathBuf) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).expect("failed opening output csv");
    reader.records().map(|r| r.unwrap()).collect()
}

#[test]
fn parsed_response_is_reproduced_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "review\nGreat app but crashes on launch\n");
    let output = dir.path().join("classified.csv");

    let raw = r#"{"category":"Bug/Crash","sentiment":"Negative","severity":4,"summary":"User enjoys the app but reports a launch crash."}"#;
    let model = ScriptedModel::new(&[raw]);

    let report = classify_file_to_path(&input, &output, &fast_params(), &model).unwrap();
    assert_eq!(report.total, 1);
    assert_eq!(report.parsed, 1);
    assert_eq!(report.fallback, 0);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "Great app but crashes on launch");
    assert_eq!(&rows[0][1], "Bug/Crash");
    assert_eq!(&rows[0][2], "Negative");
    assert_eq!(&rows[0][3], "4");
    assert_eq!(&rows[0][4], "User enjoys the app but reports a launch crash.");
    assert_eq!(&rows[0][5], raw);
}

#[test]
fn non_json_response_falls_back_to_the_default_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "review\nsome review\n");
    let output = dir.path().join("classified.csv");

    let model = ScriptedModel::new(&["I think this is mixed feedback."]);

    let report = classify_file_to_path(&input, &output, &fast_params(), &model).unwrap();
    assert_eq!(report.fallback, 1);

    let rows = read_rows(&output);
    assert_eq!(&rows[0][1], "Other");
    assert_eq!(&rows[0][2], "Neutral");
    assert_eq!(&rows[0][3], "3");
    assert_eq!(&rows[0][4], "I think this is mixed feedback.");
    assert_eq!(&rows[0][5], "I think this is mixed feedback.");
}

#[test]
fn one_output_row_per_input_row_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "rating,review\n5,alpha review\n1,beta review\n3,gamma review\n",
    );
    let output = dir.path().join("classified.csv");

    let model = ScriptedModel::new(&[
        r#"{"category":"Praise","sentiment":"Positive","severity":1,"summary":"a"}"#,
        "unstructured",
        r#"{"category":"Usability","sentiment":"Neutral","severity":2,"summary":"c"}"#,
    ]);

    let report = classify_file_to_path(&input, &output, &fast_params(), &model).unwrap();
    assert_eq!(report.total, 3);
    assert_eq!(report.parsed, 2);
    assert_eq!(report.fallback, 1);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "alpha review");
    assert_eq!(&rows[1][0], "beta review");
    assert_eq!(&rows[2][0], "gamma review");
}

#[test]
fn missing_column_aborts_before_any_call_or_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "rating,comment\n5,nice\n");
    let output = dir.path().join("classified.csv");

    let model = ScriptedModel::new(&[]);

    let err = classify_file_to_path(&input, &output, &fast_params(), &model).unwrap_err();
    assert!(matches!(
        err,
        revtriage::Error::Reviews(ReviewsError::MissingColumn { .. })
    ));
    assert_eq!(model.calls(), 0);
    assert!(!output.exists());
}

#[test]
fn transport_error_aborts_the_run_with_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "review\nfirst\nsecond\n");
    let output = dir.path().join("classified.csv");

    let err = classify_file_to_path(&input, &output, &fast_params(), &FailingModel).unwrap_err();
    assert!(err.to_string().contains("500"));
    assert!(!output.exists());
}

#[test]
fn missing_credential_is_a_fatal_startup_error() {
    // No other test in this binary touches the environment.
    unsafe { std::env::remove_var("COHERE_API_KEY") };
    let err = CohereClient::from_env(revtriage::DEFAULT_MODEL).unwrap_err();
    assert!(matches!(err, CohereError::MissingApiKey));
}

#[test]
fn existing_output_file_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "review\nonly row\n");
    let output = dir.path().join("classified.csv");
    fs::write(&output, "old run\n").unwrap();

    let model = ScriptedModel::new(&[r#"{"category":"Praise"}"#]);
    classify_file_to_path(&input, &output, &fast_params(), &model).unwrap();

    let body = fs::read_to_string(&output).unwrap();
    assert!(!body.contains("old run"));
    assert_eq!(read_rows(&output).len(), 1);
}
