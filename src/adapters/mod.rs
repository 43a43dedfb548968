//! Adapter implementations for port traits
//!
//! This module contains the concrete implementations that handle I/O:
//!
//! - `stylesheet/` - class-name extraction from `.css` / `.scss` sources
//! - `typescript/` - declaration rendering and declaration path lookup
//! - `console/` - terminal alert sink

pub mod console;
pub mod stylesheet;
pub mod typescript;

pub use console::ConsoleAlerts;
pub use stylesheet::SelectorScanner;
pub use typescript::{TypeScriptGenerator, TypeScriptLocator};
