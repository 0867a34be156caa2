use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ShaderSourceError;
use crate::source::{ShaderSource, ShaderStage};

/// Token that turns a line into a section marker.
pub const MARKER: &str = "#shader";

// ── Line classification ───────────────────────────────────────────────────

/// What a single line of a shader document is.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LineKind {
    /// Contains [`MARKER`]. `None` when no known stage name follows; such a
    /// line is still swallowed but leaves the active section unchanged.
    Marker(Option<ShaderStage>),
    /// Anything else.
    Code,
}

/// Classifies one line (without its terminator).
///
/// Matching is by substring: `#shader` anywhere makes a marker, and `vertex`
/// or `fragment` anywhere on that line names the stage. `vertex` is tested
/// first, so a line containing both selects the vertex stage.
pub fn classify_line(line: &str) -> LineKind {
    if !line.contains(MARKER) {
        return LineKind::Code;
    }

    let stage = if line.contains(ShaderStage::Vertex.as_str()) {
        Some(ShaderStage::Vertex)
    } else if line.contains(ShaderStage::Fragment.as_str()) {
        Some(ShaderStage::Fragment)
    } else {
        None
    };

    LineKind::Marker(stage)
}

// ── Splitter ──────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Section {
    None,
    Vertex,
    Fragment,
}

impl Section {
    fn stage(self) -> Option<ShaderStage> {
        match self {
            Section::None => None,
            Section::Vertex => Some(ShaderStage::Vertex),
            Section::Fragment => Some(ShaderStage::Fragment),
        }
    }
}

impl From<ShaderStage> for Section {
    fn from(stage: ShaderStage) -> Self {
        match stage {
            ShaderStage::Vertex => Section::Vertex,
            ShaderStage::Fragment => Section::Fragment,
        }
    }
}

/// Splits an in-memory document into its vertex and fragment sections.
///
/// Lines before the first marker are dropped. Repeated markers append to the
/// existing blob. `\r\n` and `\n` terminators are both accepted; every kept
/// line is re-terminated with `\n`.
pub fn parse_str(src: &str) -> ShaderSource {
    let mut out = ShaderSource::default();
    let mut active = Section::None;

    for line in src.lines() {
        match classify_line(line) {
            LineKind::Marker(Some(stage)) => active = stage.into(),
            LineKind::Marker(None) => {}
            LineKind::Code => {
                if let Some(stage) = active.stage() {
                    let blob = out.section_mut(stage);
                    blob.push_str(line);
                    blob.push('\n');
                }
            }
        }
    }

    out
}

/// Reads `path` and splits it with [`parse_str`].
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn load(path: impl AsRef<Path>) -> Result<ShaderSource, ShaderSourceError> {
    let path = path.as_ref();

    let mut file = File::open(path).map_err(|source| ShaderSourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| ShaderSourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(parse_str(&String::from_utf8_lossy(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── classify_line ─────────────────────────────────────────────────────

    #[test]
    fn plain_code_is_code() {
        assert_eq!(classify_line("void main() {}"), LineKind::Code);
        assert_eq!(classify_line("@vertex"), LineKind::Code);
    }

    #[test]
    fn marker_names_stage() {
        assert_eq!(classify_line("#shader vertex"), LineKind::Marker(Some(ShaderStage::Vertex)));
        assert_eq!(
            classify_line("#shader fragment"),
            LineKind::Marker(Some(ShaderStage::Fragment))
        );
    }

    #[test]
    fn marker_matching_is_substring_based() {
        assert_eq!(
            classify_line("  // #shader   fragment  (lighting pass)"),
            LineKind::Marker(Some(ShaderStage::Fragment))
        );
        assert_eq!(
            classify_line("#shadervertexmain"),
            LineKind::Marker(Some(ShaderStage::Vertex))
        );
    }

    #[test]
    fn marker_is_case_sensitive() {
        assert_eq!(classify_line("#SHADER vertex"), LineKind::Code);
        assert_eq!(classify_line("#shader VERTEX"), LineKind::Marker(None));
    }

    #[test]
    fn vertex_wins_when_both_names_present() {
        assert_eq!(
            classify_line("#shader fragment after vertex"),
            LineKind::Marker(Some(ShaderStage::Vertex))
        );
    }

    #[test]
    fn marker_without_stage_name() {
        assert_eq!(classify_line("#shader geometry"), LineKind::Marker(None));
    }

    // ── parse_str ─────────────────────────────────────────────────────────

    #[test]
    fn two_sections() {
        let s = parse_str("#shader vertex\nfoo\n#shader fragment\nbar\n");
        assert_eq!(s.vertex(), "foo\n");
        assert_eq!(s.fragment(), "bar\n");
    }

    #[test]
    fn assignment_follows_marker_not_position() {
        let s = parse_str("#shader fragment\nbar\n#shader vertex\nfoo\n");
        assert_eq!(s.vertex(), "foo\n");
        assert_eq!(s.fragment(), "bar\n");
    }

    #[test]
    fn lines_before_first_marker_are_dropped() {
        let s = parse_str("junk\n#shader vertex\nfoo\n");
        assert_eq!(s.vertex(), "foo\n");
        assert_eq!(s.fragment(), "");
    }

    #[test]
    fn repeated_marker_appends() {
        let s = parse_str("#shader vertex\na\n#shader fragment\nb\n#shader vertex\nc\n");
        assert_eq!(s.vertex(), "a\nc\n");
        assert_eq!(s.fragment(), "b\n");
    }

    #[test]
    fn no_marker_yields_empty_blobs() {
        let s = parse_str("int x;\nfloat y;\n");
        assert!(s.is_empty());
        assert!(parse_str("").is_empty());
    }

    #[test]
    fn only_vertex_section() {
        let s = parse_str("#shader vertex\nv\n");
        assert_eq!(s.vertex(), "v\n");
        assert!(s.fragment().is_empty());
    }

    #[test]
    fn unknown_marker_keeps_active_section() {
        let s = parse_str("#shader vertex\na\n#shader geometry\nb\n");
        assert_eq!(s.vertex(), "a\nb\n");
        assert_eq!(s.fragment(), "");
    }

    #[test]
    fn unknown_marker_before_any_section_drops_lines() {
        let s = parse_str("#shader compute\nx\n#shader fragment\ny\n");
        assert_eq!(s.vertex(), "");
        assert_eq!(s.fragment(), "y\n");
    }

    #[test]
    fn marker_lines_never_reach_output() {
        let s = parse_str("#shader vertex // entry\na\n#shader fragment\nb\n#shader vertex\nc\n");
        for stage in ShaderStage::ALL {
            assert!(!s.stage(stage).contains(MARKER));
        }
    }

    #[test]
    fn blank_lines_are_kept() {
        let s = parse_str("#shader vertex\na\n\nb\n");
        assert_eq!(s.vertex(), "a\n\nb\n");
    }

    #[test]
    fn missing_final_newline_is_terminated() {
        let s = parse_str("#shader fragment\nlast");
        assert_eq!(s.fragment(), "last\n");
    }

    #[test]
    fn crlf_terminators() {
        let s = parse_str("#shader vertex\r\nfoo\r\n#shader fragment\r\nbar\r\n");
        assert_eq!(s.vertex(), "foo\n");
        assert_eq!(s.fragment(), "bar\n");
    }

    #[test]
    fn order_within_section_is_preserved() {
        let src = "#shader vertex\n1\n2\n#shader fragment\nx\n#shader vertex\n3\n4\n";
        assert_eq!(parse_str(src).vertex(), "1\n2\n3\n4\n");
    }

    #[test]
    fn parsing_is_deterministic() {
        let src = "pre\n#shader fragment\nb\n#shader vertex\na\n";
        assert_eq!(parse_str(src), parse_str(src));
    }
}
