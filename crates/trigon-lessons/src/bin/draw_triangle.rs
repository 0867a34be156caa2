//! Lesson 1: a single triangle from a vertex buffer, fixed fragment color.

use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::render::TriangleRenderer;
use trigon_lessons::{meshes, shaders, LessonConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let renderer = TriangleRenderer::new("triangle", shaders::flat_color(), meshes::triangle())?;

    trigon_lessons::run(LessonConfig::new("Trigon: Draw a Triangle"), renderer)
}
