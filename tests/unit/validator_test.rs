//! Tests for the validation orchestrator with the default adapters
//!
//! Each test builds a throwaway project on disk and runs the full pipeline:
//! resolve, scan, render, locate, compare.

use std::fs;
use std::sync::Arc;

use typed_styles::config::Config;
use typed_styles::core::models::{CheckOutcome, Verdict};

use crate::common::{AlertKind, RecordingAlerts, TestProject, expected_declaration, validator};

fn write_up_to_date(project: &TestProject, config: &Config) {
    project.add_file(
        "src/button.scss.d.ts",
        &expected_declaration(&["button", "primaryAction"], config),
    );
    project.add_file("src/card/card.css.d.ts", &expected_declaration(&["card"], config));
}

#[tokio::test]
async fn test_all_declarations_up_to_date() {
    let project = TestProject::new();
    let config = Config::default();
    write_up_to_date(&project, &config);

    let alerts = RecordingAlerts::new();
    let report = validator(&project, &alerts)
        .run(&project.pattern("src/**/*.*ss"), Arc::new(config))
        .await
        .unwrap();

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.verdict(), Verdict::Passed);
    assert!(alerts.of(AlertKind::Error).is_empty());
    assert_eq!(alerts.of(AlertKind::Success).len(), 1);
}

#[tokio::test]
async fn test_missing_declaration_fails_run() {
    let project = TestProject::new();
    let alerts = RecordingAlerts::new();

    let report = validator(&project, &alerts)
        .run(&project.pattern("src/*.scss"), Arc::new(Config::default()))
        .await
        .unwrap();

    assert_eq!(report.verdict(), Verdict::Failed);
    assert_eq!(
        report.outcome_for(project.join("src/button.scss")),
        Some(&CheckOutcome::FailMissing {
            declaration: project.join("src/button.scss.d.ts"),
        })
    );
    let errors = alerts.of(AlertKind::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("[INVALID TYPES] Type file needs to be generated for"));
    assert!(alerts.of(AlertKind::Success).is_empty());
}

#[tokio::test]
async fn test_stale_declaration_is_reported_and_left_alone() {
    let project = TestProject::new();
    let config = Config::default();
    write_up_to_date(&project, &config);
    let stale = "export declare const button: string;\n";
    project.add_file("src/button.scss.d.ts", stale);

    let alerts = RecordingAlerts::new();
    let report = validator(&project, &alerts)
        .run(&project.pattern("src/**/*.*ss"), Arc::new(config))
        .await
        .unwrap();

    assert_eq!(report.verdict(), Verdict::Failed);
    assert_eq!(report.failures().count(), 1);
    assert!(matches!(
        report.outcome_for(project.join("src/button.scss")),
        Some(CheckOutcome::FailMismatch { .. })
    ));
    assert_eq!(
        report.outcome_for(project.join("src/card/card.css")),
        Some(&CheckOutcome::Pass)
    );
    assert_eq!(project.read("src/button.scss.d.ts"), stale);

    let errors = alerts.of(AlertKind::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("[INVALID TYPES] Check type definitions for"));
}

#[tokio::test]
async fn test_no_files_is_success_with_one_notice() {
    let project = TestProject::empty();
    let alerts = RecordingAlerts::new();

    let report = validator(&project, &alerts)
        .run(&project.pattern("**/*.scss"), Arc::new(Config::default()))
        .await
        .unwrap();

    assert!(report.files.is_empty());
    assert_eq!(report.verdict(), Verdict::Passed);
    assert_eq!(alerts.of(AlertKind::Notice), vec!["No files found.".to_string()]);
    assert_eq!(alerts.len(), 1);
}

#[tokio::test]
async fn test_stylesheet_without_classes_passes() {
    let project = TestProject::empty();
    project.add_file("reset.css", "html { margin: 0; }\n");
    // A declaration left over from an older version does not matter
    project.add_file("reset.css.d.ts", "export declare const old: string;\n");

    let alerts = RecordingAlerts::new();
    let report = validator(&project, &alerts)
        .run(&project.pattern("*.css"), Arc::new(Config::default()))
        .await
        .unwrap();

    assert_eq!(report.verdict(), Verdict::Passed);
    assert!(alerts.of(AlertKind::Error).is_empty());
}

#[tokio::test]
async fn test_parse_error_is_isolated() {
    let project = TestProject::new();
    let config = Config::default();
    write_up_to_date(&project, &config);
    project.add_file("src/broken.scss", ".broken { color: red;\n");

    let alerts = RecordingAlerts::new();
    let report = validator(&project, &alerts)
        .run(&project.pattern("src/**/*.*ss"), Arc::new(config))
        .await
        .unwrap();

    assert_eq!(report.files.len(), 3);
    assert_eq!(report.failures().count(), 1);
    assert!(matches!(
        report.outcome_for(project.join("src/broken.scss")),
        Some(CheckOutcome::FailError { .. })
    ));
    let errors = alerts.of(AlertKind::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("An error occurred checking"));
}

#[tokio::test]
async fn test_repeated_runs_agree() {
    let project = TestProject::new();
    let config = Arc::new(Config::default());
    project.add_file("src/button.scss.d.ts", "stale\n");

    let alerts = RecordingAlerts::new();
    let validator = validator(&project, &alerts);
    let pattern = project.pattern("src/**/*.*ss");

    let first = validator.run(&pattern, Arc::clone(&config)).await.unwrap();
    let second = validator.run(&pattern, config).await.unwrap();

    let mut first_files = first.files.clone();
    let mut second_files = second.files.clone();
    first_files.sort_by(|a, b| a.file.cmp(&b.file));
    second_files.sort_by(|a, b| a.file.cmp(&b.file));
    assert_eq!(first_files, second_files);
    assert_eq!(project.read("src/button.scss.d.ts"), "stale\n");
}

#[tokio::test]
async fn test_ignore_patterns_exclude_files() {
    let project = TestProject::new();
    let config = Config {
        ignore: vec![project.pattern("src/card/**")],
        ..Config::default()
    };
    project.add_file(
        "src/button.scss.d.ts",
        &expected_declaration(&["button", "primaryAction"], &config),
    );

    let alerts = RecordingAlerts::new();
    let report = validator(&project, &alerts)
        .run(&project.pattern("src/**/*.*ss"), Arc::new(config))
        .await
        .unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.verdict(), Verdict::Passed);
}

#[tokio::test]
async fn test_directory_pattern_expands_to_stylesheets() {
    let project = TestProject::new();
    let config = Config::default();
    write_up_to_date(&project, &config);

    let alerts = RecordingAlerts::new();
    let report = validator(&project, &alerts)
        .run(&project.join("src").display().to_string(), Arc::new(config))
        .await
        .unwrap();

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.verdict(), Verdict::Passed);
}

#[tokio::test]
async fn test_output_folder_mirrors_source_tree() {
    let project = TestProject::new();
    let types = project.join("types");
    let config = Config {
        output_folder: Some(types.clone()),
        ..Config::default()
    };
    fs::create_dir_all(types.join("src/card")).unwrap();
    project.add_file(
        "types/src/button.scss.d.ts",
        &expected_declaration(&["button", "primaryAction"], &config),
    );
    project.add_file("types/src/card/card.css.d.ts", &expected_declaration(&["card"], &config));

    let alerts = RecordingAlerts::new();
    let report = validator(&project, &alerts)
        .run(&project.pattern("src/**/*.*ss"), Arc::new(config))
        .await
        .unwrap();

    assert_eq!(report.verdict(), Verdict::Passed, "{:?}", alerts.of(AlertKind::Error));
}

#[tokio::test]
async fn test_bounded_concurrency_checks_every_file() {
    let project = TestProject::empty();
    for i in 0..12 {
        project.add_file(&format!("m{i}.css"), &format!(".item{i} {{ color: red; }}\n"));
    }
    let config = Config {
        concurrency: Some(2),
        ..Config::default()
    };

    let alerts = RecordingAlerts::new();
    let report = validator(&project, &alerts)
        .run(&project.pattern("*.css"), Arc::new(config))
        .await
        .unwrap();

    assert_eq!(report.files.len(), 12);
    assert_eq!(report.failures().count(), 12);
    assert_eq!(alerts.of(AlertKind::Error).len(), 12);
}
