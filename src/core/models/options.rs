//! Option enumerations shared by the configuration and the adapters
//!
//! Each parses from its lowercase name, both from TOML and from the CLI.

use serde::{Deserialize, Serialize};

/// How class names are transformed before they become exported names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameFormat {
    /// `foo-bar_baz` -> `fooBarBaz`
    #[default]
    Camel,
    /// `fooBar` -> `foo-bar`
    Kebab,
    /// Alias of kebab
    Param,
    /// `foo-bar` -> `foo_bar`
    Snake,
    /// Only dashes become camel case: `foo-bar_baz` -> `fooBar_baz`
    Dashes,
    /// Names are exported unchanged
    None,
}

impl std::fmt::Display for NameFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Camel => write!(f, "camel"),
            Self::Kebab => write!(f, "kebab"),
            Self::Param => write!(f, "param"),
            Self::Snake => write!(f, "snake"),
            Self::Dashes => write!(f, "dashes"),
            Self::None => write!(f, "none"),
        }
    }
}

impl std::str::FromStr for NameFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" => Ok(Self::Camel),
            "kebab" => Ok(Self::Kebab),
            "param" => Ok(Self::Param),
            "snake" => Ok(Self::Snake),
            "dashes" => Ok(Self::Dashes),
            "none" => Ok(Self::None),
            _ => Err(format!(
                "Invalid name format: {s}. Use: camel, kebab, param, snake, dashes, none"
            )),
        }
    }
}

/// Shape of the generated declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    /// One `export declare const` per class name
    #[default]
    Named,
    /// A single default-exported object type
    Default,
}

impl std::fmt::Display for ExportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named => write!(f, "named"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl std::str::FromStr for ExportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "named" => Ok(Self::Named),
            "default" => Ok(Self::Default),
            _ => Err(format!("Invalid export type: {s}. Use: named, default")),
        }
    }
}

/// Quote character used for keys of the default export type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteType {
    /// `'name'`
    #[default]
    Single,
    /// `"name"`
    Double,
}

impl QuoteType {
    /// The quote character
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

impl std::fmt::Display for QuoteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Double => write!(f, "double"),
        }
    }
}

impl std::str::FromStr for QuoteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            _ => Err(format!("Invalid quote type: {s}. Use: single, double")),
        }
    }
}

/// How much the alert sink prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Nothing at all
    Silent,
    /// Errors and notices
    #[default]
    Minimal,
    /// Everything, including info and success lines
    Verbose,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Silent => write!(f, "silent"),
            Self::Minimal => write!(f, "minimal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "minimal" => Ok(Self::Minimal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("Invalid log level: {s}. Use: silent, minimal, verbose")),
        }
    }
}
