//! Format-specific parsing of documents.

use camino::Utf8Path;
use serde_json::Value;

use crate::{CfgError, CfgResult, DocumentOrigin};

/// Syntax of a configuration file, chosen from its extension.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DocumentFormat {
    /// JSON text. Used for every extension other than `.toml`.
    Json,
    /// TOML text, converted into the document model after parsing.
    Toml,
}

impl DocumentFormat {
    /// Select the format for `path` by its (case-insensitive) extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use mochi_cfg::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_path(Utf8Path::new("margo.TOML")), DocumentFormat::Toml);
    /// assert_eq!(DocumentFormat::from_path(Utf8Path::new("margo.json")), DocumentFormat::Json);
    /// assert_eq!(DocumentFormat::from_path(Utf8Path::new("margo")), DocumentFormat::Json);
    /// ```
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Parse JSON `text` into a document value.
///
/// # Errors
///
/// Returns [`CfgError::Parse`] tagged with `origin` when `text` is not well
/// formed.
pub fn parse_text(text: &str, origin: DocumentOrigin) -> CfgResult<Value> {
    serde_json::from_str(text).map_err(|err| CfgError::json_parse(origin, &err))
}

/// Read and parse the configuration file at `path`.
///
/// # Errors
///
/// Returns [`CfgError::File`] when the file cannot be read (or is a TOML file
/// while the `toml` feature is disabled) and [`CfgError::Parse`] when its
/// contents are malformed.
pub fn parse_file(path: &Utf8Path) -> CfgResult<Value> {
    let data = std::fs::read_to_string(path).map_err(|err| CfgError::file(path, err))?;
    match DocumentFormat::from_path(path) {
        DocumentFormat::Json => parse_text(&data, DocumentOrigin::ConfigFile(path.to_path_buf())),
        DocumentFormat::Toml => parse_toml(path, &data),
    }
}

#[cfg(feature = "toml")]
fn parse_toml(path: &Utf8Path, data: &str) -> CfgResult<Value> {
    let table: toml::Table = toml::from_str(data).map_err(|err| {
        let (line, column) = err
            .span()
            .map_or((1, 1), |span| line_and_column(data, span.start));
        std::sync::Arc::new(CfgError::Parse {
            origin: DocumentOrigin::ConfigFile(path.to_path_buf()),
            line,
            column,
            message: err.message().to_owned(),
        })
    })?;
    toml_to_document(toml::Value::Table(table), "").map_err(|key| {
        std::sync::Arc::new(CfgError::Parse {
            origin: DocumentOrigin::ConfigFile(path.to_path_buf()),
            line: 0,
            column: 0,
            message: format!("non-finite float at '{key}' has no JSON representation"),
        })
    })
}

#[cfg(not(feature = "toml"))]
fn parse_toml(path: &Utf8Path, _data: &str) -> CfgResult<Value> {
    Err(CfgError::file(
        path,
        std::io::Error::other(
            "toml feature disabled: enable the 'toml' feature to support this file format",
        ),
    ))
}

/// One-based line and column of byte `offset` within `data`.
#[cfg(feature = "toml")]
fn line_and_column(data: &str, offset: usize) -> (usize, usize) {
    let prefix = data.get(..offset).unwrap_or(data);
    let line = prefix.matches('\n').count() + 1;
    let column = prefix
        .rsplit('\n')
        .next()
        .map_or(0, |tail| tail.chars().count())
        + 1;
    (line, column)
}

/// Convert a TOML value into the document model.
///
/// Fails with the dotted path of the first non-finite float, which has no
/// JSON representation.
#[cfg(feature = "toml")]
fn toml_to_document(value: toml::Value, key_path: &str) -> Result<Value, String> {
    Ok(match value {
        toml::Value::String(text) => Value::String(text),
        toml::Value::Integer(number) => Value::from(number),
        toml::Value::Float(number) => serde_json::Number::from_f64(number)
            .map(Value::Number)
            .ok_or_else(|| key_path.to_owned())?,
        toml::Value::Boolean(flag) => Value::Bool(flag),
        toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| toml_to_document(item, &format!("{key_path}[{index}]")))
                .collect::<Result<_, _>>()?,
        ),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, item)| {
                    let child = if key_path.is_empty() {
                        key.clone()
                    } else {
                        format!("{key_path}.{key}")
                    };
                    toml_to_document(item, &child).map(|converted| (key, converted))
                })
                .collect::<Result<_, _>>()?,
        ),
    })
}
