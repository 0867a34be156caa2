use std::fmt;

/// Programmable pipeline stage a block of source belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    /// Section name as written after `#shader`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertex and fragment source split out of one document.
///
/// Each blob is the concatenation of its section's lines in file order, every
/// line terminated by `\n`. Either blob may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSource {
    pub(crate) vertex: String,
    pub(crate) fragment: String,
}

impl ShaderSource {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    #[inline]
    pub fn vertex(&self) -> &str {
        &self.vertex
    }

    #[inline]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    /// True when neither section received any lines.
    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty() && self.fragment.is_empty()
    }

    /// Consumes the pair, returning `(vertex, fragment)`.
    pub fn into_parts(self) -> (String, String) {
        (self.vertex, self.fragment)
    }

    pub(crate) fn section_mut(&mut self, stage: ShaderStage) -> &mut String {
        match stage {
            ShaderStage::Vertex => &mut self.vertex,
            ShaderStage::Fragment => &mut self.fragment,
        }
    }
}
