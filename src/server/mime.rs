//! Content type classification by file extension.

/// Content type for paths with no extension or an unknown one.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Extension to content type, matched in order.
pub const MIME_TYPES: &[(&str, &str)] = &[
    ("gif", "image/gif"),
    ("jpg", "image/jpg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("html", "text/html"),
    ("txt", "text/plain"),
    ("json", "application/json"),
];

/// Classify a path by the text after its last `.`.
///
/// Matching is case-sensitive and looks at the whole path string, so a dot
/// in a directory name counts when the file name has none.
pub fn mime_type(path: &str) -> &'static str {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return DEFAULT_MIME_TYPE;
    };

    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_MIME_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        for (ext, content_type) in MIME_TYPES {
            assert_eq!(mime_type(&format!("file.{ext}")), *content_type);
        }
        assert_eq!(mime_type("index.html"), "text/html");
        assert_eq!(mime_type("photo.jpg"), "image/jpg");
    }

    #[test]
    fn test_unknown_or_missing_extension() {
        assert_eq!(mime_type("README"), "text/plain");
        assert_eq!(mime_type("style.css"), "text/plain");
        assert_eq!(mime_type("trailing."), "text/plain");
        assert_eq!(mime_type(""), "text/plain");
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(mime_type("INDEX.HTML"), "text/plain");
        assert_eq!(mime_type("Photo.Png"), "text/plain");
    }

    #[test]
    fn test_last_dot_wins() {
        assert_eq!(mime_type("archive.tar.gif"), "image/gif");
        assert_eq!(mime_type("data.json.txt"), "text/plain");
        assert_eq!(mime_type("v1.2/notes"), "text/plain");
    }
}
