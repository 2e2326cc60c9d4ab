use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::tree::RawNode;

/// Parse a JSON document into an input tree.
pub fn parse_tree(json: &str) -> Result<RawNode> {
    serde_json::from_str(json).context("failed to parse repomap data")
}

/// Fetch collaborator: supplies the input tree. The widget calls `load`
/// exactly once, when initialization is requested; a failure is reported
/// and leaves the widget uninitialized.
pub trait DataSource {
    fn load(&self) -> Result<RawNode>;
}

/// File-backed source (CLI and tests; the browser glue supplies its own
/// fetch-based implementation).
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn load(&self) -> Result<RawNode> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        parse_tree(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generator_output_shape() {
        let raw = parse_tree(
            r#"{"label":"[root]","children":[
                {"label":"src","path":"src/","children":[
                    {"label":"main.c","weight":120,"size":120,"change":-12,"value":-10.0,"path":"src/main.c"}
                ]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(raw.label, "[root]");
        let src = &raw.children.as_ref().unwrap()[0];
        let file = &src.children.as_ref().unwrap()[0];
        assert_eq!(file.weight, Some(120.0));
        assert_eq!(file.change, Some(-12.0));
        assert_eq!(file.value, Some(-10.0));
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(parse_tree("{not json").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = FileSource::new("/nonexistent/repomap-data.json");
        assert!(source.load().is_err());
    }
}
