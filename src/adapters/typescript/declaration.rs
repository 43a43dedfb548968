//! TypeScript declaration rendering

use std::collections::BTreeSet;

use async_trait::async_trait;

use super::names::{is_valid_named_export, transform};
use crate::config::Config;
use crate::core::models::{ClassNames, ExportType};
use crate::core::ports::{DeclarationGenerator, GenerateError};

/// Renders `.d.ts` content for CSS module class names
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptGenerator;

#[async_trait]
impl DeclarationGenerator for TypeScriptGenerator {
    async fn generate(
        &self,
        class_names: &ClassNames,
        config: &Config,
    ) -> Result<Option<String>, GenerateError> {
        Ok(render_declaration(class_names, config))
    }
}

/// Render the declaration for `class_names`, or `None` when there is nothing to declare
#[must_use]
pub fn render_declaration(class_names: &ClassNames, config: &Config) -> Option<String> {
    let names: BTreeSet<String> =
        class_names.iter().map(|n| transform(n, config.name_format)).collect();

    let body = match config.export_type {
        ExportType::Named => render_named(&names)?,
        ExportType::Default => render_default(&names, config)?,
    };

    Some(match &config.banner {
        Some(banner) => format!("{banner}\n{body}"),
        None => body,
    })
}

fn render_named(names: &BTreeSet<String>) -> Option<String> {
    let mut out = String::new();
    for name in names {
        if is_valid_named_export(name) {
            out.push_str(&format!("export declare const {name}: string;\n"));
        } else {
            log::warn!("Skipping {name:?}: not a valid name for a named export");
        }
    }
    (!out.is_empty()).then_some(out)
}

fn render_default(names: &BTreeSet<String>, config: &Config) -> Option<String> {
    if names.is_empty() {
        return None;
    }
    let quote = config.quote_type.as_char();
    let interface = &config.export_type_interface;
    let key_type = &config.export_type_name;

    let mut out = format!("export type {interface} = {{\n");
    for name in names {
        let escaped = escape(name, quote);
        out.push_str(&format!("  {quote}{escaped}{quote}: string;\n"));
    }
    out.push_str("};\n\n");
    out.push_str(&format!("export type {key_type} = keyof {interface};\n\n"));
    out.push_str(&format!("declare const styles: {interface};\n\n"));
    out.push_str("export default styles;\n");
    Some(out)
}

fn escape(name: &str, quote: char) -> String {
    name.replace('\\', "\\\\").replace(quote, &format!("\\{quote}"))
}
