use super::{
    expand_env_placeholders, load_runner_config, resolve_runner_config, validate_runner_config,
    RunnerConfig, RunnerConfigError,
};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn load_runner_config_parses_yaml_with_defaults() {
    let path = write_temp_file(
        "config-ok",
        "yaml",
        r##"
schema: pixel-runner/0.0.1
dataset_file: data/grid.json
unclaimed_sentinel: "<FREE>"
"##,
    );

    let config = load_runner_config(path.as_path()).expect("config must load");
    assert_eq!(config.dataset_file, "data/grid.json");
    assert_eq!(config.unclaimed_sentinel, "<FREE>");
    assert_eq!(config.record_path_prefix, "/data/");

    let options = config.review_options();
    assert_eq!(options.dataset_file, "data/grid.json");
    assert_eq!(options.validator.unclaimed_sentinel, "<FREE>");
}

#[test]
fn load_runner_config_parses_json() {
    let path = write_temp_file(
        "config-json",
        "json",
        r##"{"schema":"pixel-runner/0.0.1","thank_you_message":"merci"}"##,
    );

    let config = load_runner_config(path.as_path()).expect("config must load");
    assert_eq!(config.thank_you_message, "merci");
    assert_eq!(config.dataset_file, "_data/pixels.json");
}

#[test]
fn load_runner_config_expands_env_placeholders() {
    std::env::set_var("PIXEL_RUNNER_TEST_DATASET", "pixels/all.json");
    let path = write_temp_file(
        "config-env",
        "yaml",
        "schema: pixel-runner/0.0.1\ndataset_file: ${PIXEL_RUNNER_TEST_DATASET}\n",
    );

    let config = load_runner_config(path.as_path()).expect("config must load");
    assert_eq!(config.dataset_file, "pixels/all.json");
}

#[test]
fn validation_reports_every_issue() {
    let config = RunnerConfig {
        schema: "pixel-runner/9".to_string(),
        dataset_file: "/abs/pixels.json".to_string(),
        unclaimed_sentinel: String::new(),
        record_path_prefix: "data".to_string(),
        thank_you_message: " ".to_string(),
    };

    let references = validate_runner_config(&config)
        .into_iter()
        .map(|issue| issue.reference)
        .collect::<Vec<_>>();
    assert_eq!(
        references,
        vec![
            "runner.config.schema",
            "runner.config.dataset_file.relative",
            "runner.config.unclaimed_sentinel.non_empty",
            "runner.config.record_path_prefix",
            "runner.config.thank_you_message.non_empty",
        ]
    );
}

#[test]
fn invalid_config_file_is_rejected_with_issues() {
    let path = write_temp_file("config-bad", "yaml", "schema: other/1\n");
    match load_runner_config(path.as_path()) {
        Err(RunnerConfigError::Validation(issues)) => {
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].field, "schema");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn missing_config_file_is_a_read_error() {
    let error = load_runner_config(std::path::Path::new("/nonexistent/pixel-runner.yaml"))
        .expect_err("must fail");
    assert!(matches!(error, RunnerConfigError::ReadFile { .. }));
}

#[test]
fn resolve_without_path_uses_defaults() {
    let config = resolve_runner_config(None).expect("defaults must resolve");
    assert_eq!(config, RunnerConfig::default());
    assert!(validate_runner_config(&config).is_empty());
}

#[test]
fn placeholder_errors_are_reported() {
    assert!(expand_env_placeholders("a ${").is_err());
    assert!(expand_env_placeholders("a ${}").is_err());
    assert!(expand_env_placeholders("${PIXEL_RUNNER_DEFINITELY_UNSET_VAR}").is_err());
    assert_eq!(expand_env_placeholders("plain").as_deref(), Ok("plain"));
}

fn write_temp_file(prefix: &str, extension: &str, content: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time must be monotonic")
        .as_nanos();
    path.push(format!(
        "pixel-runner-{prefix}-{}-{nanos}.{extension}",
        std::process::id()
    ));
    fs::write(&path, content).expect("must write temp file");
    path
}
