//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing typed-styles components.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use typed_styles::adapters::{SelectorScanner, TypeScriptGenerator, TypeScriptLocator};
use typed_styles::config::Config;
use typed_styles::core::models::ClassNames;
use typed_styles::core::ports::Alerts;
use typed_styles::core::services::{ConsistencyChecker, Validator};

/// A temporary project holding stylesheets and declarations
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create a project with standard structure:
    /// ```text
    /// /
    /// ├── src/
    /// │   ├── button.scss
    /// │   └── card/
    /// │       └── card.css
    /// └── README.md
    /// ```
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        fs::create_dir_all(dir.path().join("src/card")).unwrap();
        fs::write(
            dir.path().join("src/button.scss"),
            ".button {\n  color: red;\n  &:hover { color: blue; }\n}\n.primary-action { margin: 0; }\n",
        )
        .unwrap();
        fs::write(dir.path().join("src/card/card.css"), ".card { padding: 4px; }\n").unwrap();
        fs::write(dir.path().join("README.md"), "# Test\n").unwrap();

        Self { dir }
    }

    /// Create an empty project
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Get the root path of the project
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a project-relative file
    pub fn join(&self, path: &str) -> PathBuf {
        self.dir.path().join(path)
    }

    /// Add a file to the project
    pub fn add_file(&self, path: &str, content: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Read a project file
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).unwrap()
    }

    /// Absolute glob pattern rooted at the project
    pub fn pattern(&self, glob: &str) -> String {
        format!("{}/{glob}", self.dir.path().display())
    }
}

/// Declaration the default adapters expect for these class names
pub fn expected_declaration(names: &[&str], config: &Config) -> String {
    let class_names: ClassNames = names.iter().copied().collect();
    typed_styles::adapters::typescript::render_declaration(&class_names, config)
        .expect("class names should render")
}

/// Alert kinds recorded by [`RecordingAlerts`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Notice,
    Info,
    Success,
}

/// Alert sink that remembers every message
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    messages: Mutex<Vec<(AlertKind, String)>>,
}

impl RecordingAlerts {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, kind: AlertKind, message: &str) {
        self.messages.lock().unwrap().push((kind, message.to_string()));
    }

    /// Messages of one kind, in emission order
    pub fn of(&self, kind: AlertKind) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Total number of recorded messages
    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl Alerts for RecordingAlerts {
    fn error(&self, message: &str) {
        self.push(AlertKind::Error, message);
    }

    fn notice(&self, message: &str) {
        self.push(AlertKind::Notice, message);
    }

    fn info(&self, message: &str) {
        self.push(AlertKind::Info, message);
    }

    fn success(&self, message: &str) {
        self.push(AlertKind::Success, message);
    }
}

/// Validator wired to the default adapters and a recording sink
pub fn validator(project: &TestProject, alerts: &Arc<RecordingAlerts>) -> Validator {
    let checker = ConsistencyChecker::new(
        Arc::new(SelectorScanner),
        Arc::new(TypeScriptGenerator),
        Arc::new(TypeScriptLocator::new(project.path())),
        Arc::clone(alerts) as Arc<dyn Alerts>,
    );
    Validator::new(checker)
}
