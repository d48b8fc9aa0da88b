use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use pagebuilder_core::PageDocument;

/// Reads a page document; `None` yields an empty page.
pub fn read_document(path: Option<&Path>) -> Result<PageDocument, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(PageDocument::default());
    };
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("failed to read document {}: {e}", path.display()))?;
    let document = serde_json::from_str(&raw)
        .map_err(|e| format!("invalid page document {}: {e}", path.display()))?;
    Ok(document)
}

/// Reads the `blocks` array of a generation response file.
pub fn read_candidates(path: &Path) -> Result<Vec<Value>, Box<dyn Error>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let value: Value =
        serde_json::from_str(&raw).map_err(|e| format!("invalid JSON in {}: {e}", path.display()))?;
    match value {
        Value::Object(mut object) => match object.remove("blocks") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(format!("{} has no 'blocks' array", path.display()).into()),
        },
        _ => Err(format!("{} has no 'blocks' array", path.display()).into()),
    }
}

/// Pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_json<T: Serialize>(path: Option<&Path>, value: &T) -> Result<(), Box<dyn Error>> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, text)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_document_path_means_empty_page() {
        let document = read_document(None).expect("empty");
        assert!(document.content.is_empty());
    }

    #[test]
    fn document_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pages/home.json");
        let page = json!({
            "root": { "props": { "siteName": "Cafe" } },
            "content": [{ "type": "Hero", "props": { "id": "Hero-aaaaaaaa", "title": "Hi" } }]
        });

        write_json(Some(&path), &page).expect("write");
        let document = read_document(Some(&path)).expect("read");

        assert_eq!(document.content.len(), 1);
        assert_eq!(document.content[0].id(), Some("Hero-aaaaaaaa"));
        assert_eq!(document.root.props["siteName"], "Cafe");
    }

    #[test]
    fn candidates_require_a_blocks_array() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        fs::write(&good, r#"{"blocks":[{"type":"Hero"},{"type":"CTA"}]}"#).expect("write");
        fs::write(&bad, r#"{"items":[]}"#).expect("write");

        assert_eq!(read_candidates(&good).expect("good").len(), 2);
        let err = read_candidates(&bad).expect_err("bad");
        assert!(err.to_string().contains("no 'blocks' array"));
    }

    #[test]
    fn unreadable_document_names_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.json");
        let err = read_document(Some(&path)).expect_err("missing");
        assert!(err.to_string().contains("missing.json"));
    }
}
