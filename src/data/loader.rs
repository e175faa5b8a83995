use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use thiserror::Error;

use super::model::{Catalog, Resource};

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Dataset shape violations. All of these abort the load; there is no
/// partial-catalog fallback.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("record '{title}': empty '{field}' field")]
    EmptyField { title: String, field: &'static str },

    #[error("record '{title}': 'updated' value '{value}' is not an epoch-millisecond number")]
    BadTimestamp { title: String, value: String },

    #[error("duplicate title '{title}'")]
    DuplicateTitle { title: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a resource catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – array of record objects (canonical)
/// * `.csv`  – header `title,description,url,tags,updated`;
///             `tags` cells pack labels as `"free;paid"`
pub fn load_file(path: &Path) -> Result<Catalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// [
///   {
///     "title": "Exercism",
///     "description": "coding exercises with mentor feedback",
///     "url": "https://exercism.org",
///     "tags": ["free", "programming"],
///     "updated": "1733400000000"
///   },
///   ...
/// ]
/// ```
///
/// Legacy datasets carry `description` as a `{short, long}` object; both
/// shapes parse, the legacy one keeping its `short` field.
fn load_json(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<Catalog> {
    let records: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON")?;

    let mut resources = Vec::with_capacity(records.len());
    for (row, raw) in records.into_iter().enumerate() {
        resources.push(validate(raw).with_context(|| format!("row {row}"))?);
    }
    build_catalog(resources)
}

/// One record as it appears on the wire, before validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    title: String,
    description: DescriptionField,
    url: String,
    tags: Vec<String>,
    updated: String,
}

/// Canonical flat description, or the legacy `{short, long}` object.
/// Only `short` was ever displayed or searched; `long` is dropped here.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DescriptionField {
    Flat(String),
    Split { short: String },
}

impl DescriptionField {
    fn normalize(self) -> String {
        match self {
            DescriptionField::Flat(s) => s,
            DescriptionField::Split { short } => short,
        }
    }
}

fn validate(raw: RawRecord) -> Result<Resource> {
    for (field, value) in [("title", &raw.title), ("url", &raw.url)] {
        if value.trim().is_empty() {
            return Err(DatasetError::EmptyField {
                title: raw.title.clone(),
                field,
            }
            .into());
        }
    }

    // `updated` arrives as a numeric string; anything unparseable is a
    // load error rather than a record that silently sorts wrong.
    let updated_ms: i64 = raw.updated.trim().parse().map_err(|_| DatasetError::BadTimestamp {
        title: raw.title.clone(),
        value: raw.updated.clone(),
    })?;

    Ok(Resource {
        title: raw.title,
        description: raw.description.normalize(),
        url: raw.url,
        tags: raw.tags,
        updated_ms,
    })
}

fn build_catalog(resources: Vec<Resource>) -> Result<Catalog> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for res in &resources {
        if !seen.insert(res.title.as_str()) {
            return Err(DatasetError::DuplicateTitle {
                title: res.title.clone(),
            }
            .into());
        }
    }
    Ok(Catalog::from_resources(resources))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row `title,description,url,tags,updated`.
/// The `tags` column packs labels as semicolon-separated text:
///   `"free;programming"`
fn load_csv(path: &Path) -> Result<Catalog> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    parse_csv(file)
}

fn parse_csv<R: Read>(input: R) -> Result<Catalog> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };
    let title_idx = column("title")?;
    let description_idx = column("description")?;
    let url_idx = column("url")?;
    let tags_idx = column("tags")?;
    let updated_idx = column("updated")?;

    let mut resources = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();

        let raw = RawRecord {
            title: cell(title_idx),
            description: DescriptionField::Flat(cell(description_idx)),
            url: cell(url_idx),
            tags: split_tags(record.get(tags_idx).unwrap_or("")),
            updated: cell(updated_idx),
        };
        resources.push(validate(raw).with_context(|| format!("CSV row {row_no}"))?);
    }

    build_catalog(resources)
}

fn split_tags(s: &str) -> Vec<String> {
    s.split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_json() {
        let catalog = parse_json(
            r#"[
                {
                    "title": "Exercism",
                    "description": "coding exercises",
                    "url": "https://exercism.org",
                    "tags": ["free", "programming"],
                    "updated": "1000"
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        let res = &catalog.resources[0];
        assert_eq!(res.title, "Exercism");
        assert_eq!(res.description, "coding exercises");
        assert_eq!(res.updated_ms, 1000);
        assert!(catalog.tags.contains("free"));
    }

    #[test]
    fn legacy_description_normalizes_to_short() {
        let catalog = parse_json(
            r#"[
                {
                    "title": "A",
                    "description": {"short": "brief", "long": "much longer text"},
                    "url": "https://a.example",
                    "tags": [],
                    "updated": "1"
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.resources[0].description, "brief");
    }

    #[test]
    fn non_numeric_updated_is_a_load_error() {
        let err = parse_json(
            r#"[{"title": "A", "description": "d", "url": "https://a", "tags": [], "updated": "soon"}]"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("not an epoch-millisecond number"));
    }

    #[test]
    fn duplicate_titles_are_a_load_error() {
        let err = parse_json(
            r#"[
                {"title": "A", "description": "d", "url": "https://a", "tags": [], "updated": "1"},
                {"title": "A", "description": "d", "url": "https://a", "tags": [], "updated": "2"}
            ]"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("duplicate title 'A'"));
    }

    #[test]
    fn missing_field_is_a_load_error() {
        // No `url` at all: serde refuses the record.
        assert!(parse_json(r#"[{"title": "A", "description": "d", "tags": [], "updated": "1"}]"#).is_err());
        // Present but blank: validation refuses it.
        let err = parse_json(
            r#"[{"title": "A", "description": "d", "url": "  ", "tags": [], "updated": "1"}]"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("empty 'url' field"));
    }

    #[test]
    fn parses_csv_with_semicolon_tags() {
        let csv = "title,description,url,tags,updated\n\
                   Exercism,coding exercises,https://exercism.org,free;programming,1000\n\
                   LeetCode,interview prep,https://leetcode.com,free;paid,2000\n";
        let catalog = parse_csv(csv.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resources[0].tags, vec!["free", "programming"]);
        assert_eq!(catalog.resources[1].updated_ms, 2000);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("resources.xml")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }
}
