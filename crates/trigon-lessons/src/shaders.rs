//! Shader sources for the lessons.
//!
//! The first two lessons embed their stages as string constants; the third
//! reads both from one file on disk.

use std::path::PathBuf;

use trigon_shader::ShaderSource;

const FLAT_COLOR_VERTEX: &str = r#"
@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position, 1.0);
}
"#;

const FLAT_COLOR_FRAGMENT: &str = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(0.8, 0.8, 0.02, 1.0);
}
"#;

/// Position-only input, every fragment the same yellow.
pub fn flat_color() -> ShaderSource {
    ShaderSource::new(FLAT_COLOR_VERTEX, FLAT_COLOR_FRAGMENT)
}

/// Location of the interpolated-color shader document.
pub fn basic_triangle_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join("shaders")
        .join("basic_triangle.shader")
}
