//! Splitter for single-file shader sources.
//!
//! A shader document carries both pipeline stages in one file, separated by
//! marker lines:
//!
//! ```text
//! #shader vertex
//! ...vertex stage...
//! #shader fragment
//! ...fragment stage...
//! ```
//!
//! This crate is intentionally dependency-free. It never looks inside the
//! stage code; compiling it is the GPU layer's job.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`source`] | `ShaderSource`, `ShaderStage` |
//! | [`error`] | `ShaderSourceError` |
//! | [`splitter`] | `classify_line`, `parse_str`, `load` |
//!
//! # Quick start
//!
//! ```rust
//! use trigon_shader::parse_str;
//!
//! let src = "#shader vertex\nfoo\n#shader fragment\nbar\n";
//!
//! let shader = parse_str(src);
//! assert_eq!(shader.vertex(), "foo\n");
//! assert_eq!(shader.fragment(), "bar\n");
//! ```

pub mod error;
pub mod source;
pub mod splitter;

pub use error::ShaderSourceError;
pub use source::{ShaderSource, ShaderStage};
pub use splitter::{classify_line, load, parse_str, LineKind, MARKER};

#[cfg(test)]
mod load_tests {
    use super::*;
    use std::io::{ErrorKind, Write};

    fn write_tmp(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_splits_file() {
        let f = write_tmp(b"#shader vertex\nfoo\n#shader fragment\nbar\n");
        let s = load(f.path()).unwrap();
        assert_eq!(s, ShaderSource::new("foo\n", "bar\n"));
    }

    #[test]
    fn load_matches_parse_str() {
        let text = "header\n#shader fragment\nb\n#shader vertex\na\n#shader fragment\nc";
        let f = write_tmp(text.as_bytes());
        assert_eq!(load(f.path()).unwrap(), parse_str(text));
    }

    #[test]
    fn load_twice_is_identical() {
        let f = write_tmp(b"#shader vertex\na\n#shader fragment\nb\n");
        assert_eq!(load(f.path()).unwrap(), load(f.path()).unwrap());
    }

    #[test]
    fn load_does_not_modify_file() {
        let text = b"#shader vertex\na\n";
        let f = write_tmp(text);
        load(f.path()).unwrap();
        assert_eq!(std::fs::read(f.path()).unwrap(), text);
    }

    #[test]
    fn load_empty_file() {
        let f = write_tmp(b"");
        assert!(load(f.path()).unwrap().is_empty());
    }

    #[test]
    fn load_accepts_invalid_utf8() {
        let f = write_tmp(b"#shader vertex\nok \xff\n#shader fragment\nfine\n");
        let s = load(f.path()).unwrap();
        assert_eq!(s.vertex(), "ok \u{FFFD}\n");
        assert_eq!(s.fragment(), "fine\n");
    }

    #[test]
    fn load_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.shader");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ShaderSourceError::Open { .. }));
        assert_eq!(err.io_kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains("missing.shader"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn into_parts_returns_vertex_then_fragment() {
        let (v, f) = parse_str("#shader fragment\nf\n#shader vertex\nv\n").into_parts();
        assert_eq!(v, "v\n");
        assert_eq!(f, "f\n");
    }

    #[test]
    fn stage_display_matches_marker_name() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
