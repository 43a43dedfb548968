//! Declaration path derivation

use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::core::ports::DeclarationLocator;

/// Places declarations next to their stylesheet or under an output folder
#[derive(Debug, Clone)]
pub struct TypeScriptLocator {
    root: PathBuf,
}

impl TypeScriptLocator {
    /// Create a locator; `root` anchors paths mirrored into an output folder
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DeclarationLocator for TypeScriptLocator {
    fn locate(&self, file: &Path, config: &Config) -> PathBuf {
        let file_name = declaration_file_name(file, config.allow_arbitrary_extensions);

        let dir = file.parent().unwrap_or_else(|| Path::new(""));
        match &config.output_folder {
            Some(folder) => {
                let relative = dir.strip_prefix(&self.root).unwrap_or(dir);
                let mirrored: PathBuf = relative
                    .components()
                    .filter(|c| matches!(c, Component::Normal(_)))
                    .collect();
                folder.join(mirrored).join(file_name)
            },
            None => dir.join(file_name),
        }
    }
}

/// `a.scss` -> `a.scss.d.ts`, or `a.d.scss.ts` with arbitrary extensions
fn declaration_file_name(file: &Path, arbitrary_extensions: bool) -> String {
    let name = file.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
    if !arbitrary_extensions {
        return format!("{name}.d.ts");
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}.d.{ext}.ts"),
        _ => format!("{name}.d.ts"),
    }
}
