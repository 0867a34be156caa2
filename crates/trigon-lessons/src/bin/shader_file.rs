//! Lesson 3: per-vertex colors, with both shader stages read from a single
//! `.shader` file and split on its `#shader` markers.

use anyhow::Context;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::paint::Color;
use trigon_engine::render::TriangleRenderer;
use trigon_lessons::{meshes, shaders, LessonConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let path = shaders::basic_triangle_path();
    let source = trigon_shader::load(&path)
        .with_context(|| format!("cannot start without {}", path.display()))?;

    let renderer = TriangleRenderer::new("rgb triangle", source, meshes::rgb_triangle())?;

    let config = LessonConfig::new("Trigon: Shaders and Organization")
        .clear_color(Color::BLACK)
        .verbose(true);

    trigon_lessons::run(config, renderer)
}
