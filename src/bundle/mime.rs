//! MIME type detection from file extensions.
//!
//! Only the extension is consulted; file content is never sniffed.

use std::path::Path;

/// MIME type constants used by the resolver.
pub mod types {
    pub const HTML: &str = "text/html";
    pub const CSS: &str = "text/css";
    pub const JAVASCRIPT: &str = "application/javascript";
    pub const JSON: &str = "application/json";
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";

    /// Fallback for unknown extensions and missing lookups.
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Guess MIME type from file extension.
pub fn from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    from_extension(ext.as_deref())
}

/// Guess MIME type from a lowercased extension string.
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext {
        Some("html") => types::HTML,
        Some("css") => types::CSS,
        Some("js") => types::JAVASCRIPT,
        Some("json") => types::JSON,
        Some("png") => types::PNG,
        Some("jpg" | "jpeg") => types::JPEG,
        Some("gif") => types::GIF,
        Some("svg") => types::SVG,
        Some("ico") => types::ICO,
        _ => types::OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(&PathBuf::from("index.html")), types::HTML);
        assert_eq!(from_path(&PathBuf::from("css/style.css")), types::CSS);
        assert_eq!(from_path(&PathBuf::from("app.js")), types::JAVASCRIPT);
        assert_eq!(from_path(&PathBuf::from("data.json")), types::JSON);
        assert_eq!(from_path(&PathBuf::from("logo.png")), types::PNG);
        assert_eq!(from_path(&PathBuf::from("photo.jpg")), types::JPEG);
        assert_eq!(from_path(&PathBuf::from("photo.jpeg")), types::JPEG);
        assert_eq!(from_path(&PathBuf::from("anim.gif")), types::GIF);
        assert_eq!(from_path(&PathBuf::from("logo.svg")), types::SVG);
        assert_eq!(from_path(&PathBuf::from("favicon.ico")), types::ICO);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(from_path(&PathBuf::from("INDEX.HTML")), types::HTML);
        assert_eq!(from_path(&PathBuf::from("Photo.JpEg")), types::JPEG);
    }

    #[test]
    fn test_unknown_falls_back_to_octet_stream() {
        assert_eq!(from_path(&PathBuf::from("data.bin")), types::OCTET_STREAM);
        assert_eq!(from_path(&PathBuf::from("README")), types::OCTET_STREAM);
        assert_eq!(from_path(&PathBuf::from("page.htm")), types::OCTET_STREAM);
    }
}
