use super::{collect_records, decode_utf8};
use crate::ports::outbound::LockfileParser;
use crate::shared::error::DiffError;
use crate::shared::Result;
use crate::version_diff::domain::VersionMap;
use serde::Deserialize;

const GLIDE_LOCKFILE: &str = "glide.lock";

#[derive(Debug, Deserialize)]
struct GlideLock {
    #[serde(default)]
    imports: Vec<GlideImport>,
}

#[derive(Debug, Deserialize)]
struct GlideImport {
    name: String,
    version: String,
}

/// GlideLockParser adapter for glide's YAML lockfile
///
/// Reads the `imports` list; `testImports` and every other key are ignored.
pub struct GlideLockParser;

impl GlideLockParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GlideLockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileParser for GlideLockParser {
    fn lockfile_name(&self) -> &'static str {
        GLIDE_LOCKFILE
    }

    fn parse(&self, content: &[u8]) -> Result<VersionMap> {
        let text = decode_utf8(content, GLIDE_LOCKFILE)?;
        let lockfile: GlideLock =
            serde_yaml_ng::from_str(text).map_err(|e| DiffError::LockfileParseError {
                source_label: GLIDE_LOCKFILE.to_string(),
                details: e.to_string(),
            })?;

        collect_records(
            lockfile
                .imports
                .into_iter()
                .map(|import| (import.name, import.version)),
            GLIDE_LOCKFILE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
hash: 0a1f3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708
updated: 2017-06-01T12:00:00.000000000-04:00
imports:
- name: github.com/gogo/protobuf
  version: 100ba4e885062801d56799d78530b73b178a78f3
  subpackages:
  - proto
- name: golang.org/x/net
  version: f2499483f923065a842d38eb4c7f1927e6fc6e6d
testImports:
- name: github.com/stretchr/testify
  version: 69483b4bd14f5845b5a1e55bca19e954e827f1d0
"#;

    #[test]
    fn test_parse_imports() {
        let versions = GlideLockParser::new().parse(SAMPLE.as_bytes()).unwrap();

        assert_eq!(versions.len(), 2);
        assert_eq!(
            versions.get("github.com/gogo/protobuf"),
            Some("100ba4e885062801d56799d78530b73b178a78f3")
        );
        assert_eq!(
            versions.get("golang.org/x/net"),
            Some("f2499483f923065a842d38eb4c7f1927e6fc6e6d")
        );
        assert!(!versions.contains("github.com/stretchr/testify"));
    }

    fn version_of(yaml_version: &str) -> String {
        let content = format!("imports:\n- name: github.com/a/b\n  version: {}\n", yaml_version);
        let versions = GlideLockParser::new().parse(content.as_bytes()).unwrap();
        versions.get("github.com/a/b").unwrap().to_string()
    }

    #[test]
    fn test_parse_unquoted_numeric_version() {
        assert_eq!(version_of("12345678"), "12345678");
    }

    #[test]
    fn test_parse_numeric_looking_versions_keep_their_text() {
        assert_eq!(version_of("1.10"), "1.10");
        assert_eq!(version_of("0123"), "0123");
        assert_eq!(version_of("1e5"), "1e5");
    }

    #[test]
    fn test_trailing_zero_version_bump_is_an_update() {
        use crate::version_diff::services::VersionComparator;

        let parser = GlideLockParser::new();
        let before = parser
            .parse(b"imports:\n- name: github.com/a/b\n  version: 1.1\n")
            .unwrap();
        let after = parser
            .parse(b"imports:\n- name: github.com/a/b\n  version: 1.10\n")
            .unwrap();

        let changes = VersionComparator::compare(&before, &after);

        assert_eq!(changes.update_count(), 1);
        assert_eq!(changes.updates()[0].from_revision(), "1.1");
        assert_eq!(changes.updates()[0].to_revision(), "1.10");
    }

    #[test]
    fn test_parse_missing_imports_is_empty() {
        let versions = GlideLockParser::new()
            .parse(b"hash: abc\nupdated: 2017-06-01\n")
            .unwrap();
        assert!(versions.is_empty());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = GlideLockParser::new()
            .parse(b"imports: [[[broken")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DiffError>(),
            Some(DiffError::LockfileParseError { .. })
        ));
    }

    #[test]
    fn test_parse_record_without_version() {
        let err = GlideLockParser::new()
            .parse(b"imports:\n- name: github.com/a/b\n")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to parse glide.lock"));
    }

    #[test]
    fn test_parse_empty_name_rejected() {
        let err = GlideLockParser::new()
            .parse(b"imports:\n- name: \"\"\n  version: abc\n")
            .unwrap_err();
        assert!(err.to_string().contains("empty name"));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let err = GlideLockParser::new().parse(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_lockfile_name() {
        assert_eq!(GlideLockParser::new().lockfile_name(), "glide.lock");
    }
}
