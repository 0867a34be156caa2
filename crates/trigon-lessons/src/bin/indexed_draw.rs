//! Lesson 2: eight shared vertices drawn as eight triangles through an
//! index buffer. Starts in wireframe so the shared edges are visible.

use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::render::TriangleRenderer;
use trigon_lessons::{meshes, shaders, LessonConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let renderer = TriangleRenderer::new("fan", shaders::flat_color(), meshes::fan())?;

    trigon_lessons::run(
        LessonConfig::new("Trigon: Index Buffers").wireframe(true),
        renderer,
    )
}
