//! TypeScript declaration adapters
//!
//! - [`TypeScriptGenerator`] - renders `.d.ts` content (named or default export)
//! - [`TypeScriptLocator`] - derives where that content is expected on disk
//! - [`names`] - class name formats and named-export rules

mod declaration;
mod locator;
pub mod names;

pub use declaration::{TypeScriptGenerator, render_declaration};
pub use locator::TypeScriptLocator;
