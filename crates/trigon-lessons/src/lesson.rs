use anyhow::Result;
use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::device::GpuInit;
use trigon_engine::render::{PolygonMode, TriangleRenderer, Vertex};
use trigon_engine::window::Runtime;
use trigon_shader::ShaderStage;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use crate::config::LessonConfig;

/// Frames between debug frame-rate reports.
const FPS_LOG_INTERVAL: u64 = 600;

/// A lesson: one renderer, a clear color, and the wireframe/quit keys.
pub struct Lesson<V: Vertex> {
    config: LessonConfig,
    renderer: TriangleRenderer<V>,
    title_dirty: bool,
}

impl<V: Vertex> Lesson<V> {
    pub fn new(config: LessonConfig, renderer: TriangleRenderer<V>) -> Self {
        let renderer = renderer.with_polygon_mode(PolygonMode::from_wireframe(config.wireframe));
        Self {
            config,
            renderer,
            // Start dirty so the title reflects the initial mode.
            title_dirty: true,
        }
    }

    pub fn config(&self) -> &LessonConfig {
        &self.config
    }

    pub fn polygon_mode(&self) -> PolygonMode {
        self.renderer.polygon_mode()
    }

    /// Applies a key press; returns `Exit` for Escape.
    pub fn on_key(&mut self, key: KeyCode) -> AppControl {
        match key {
            KeyCode::Escape => AppControl::Exit,
            KeyCode::KeyW => {
                let mode = self.renderer.toggle_wireframe();
                log::info!("polygon mode: {mode:?}");
                self.title_dirty = true;
                AppControl::Continue
            }
            _ => AppControl::Continue,
        }
    }

    fn log_sources(&self) {
        let source = self.renderer.source();
        for stage in ShaderStage::ALL {
            log::info!("{} shader:\n{}", stage.as_str().to_uppercase(), source.stage(stage));
        }
    }
}

impl<V: Vertex> App for Lesson<V> {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.on_key(*code),
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        if ctx.time.frame_index == 0 {
            let info = ctx.gpu.adapter_info();
            let (w, h) = ctx.window.physical_size();
            log::info!("first frame on {} at {w}x{h}", info.name);
        } else if ctx.time.frame_index % FPS_LOG_INTERVAL == 0 {
            log::debug!("frame {}: {:.1} fps", ctx.time.frame_index, ctx.time.fps());
        }

        if self.title_dirty {
            ctx.runtime
                .set_title(self.config.window_title(self.renderer.polygon_mode()));
            self.title_dirty = false;
        }

        let renderer = &mut self.renderer;
        ctx.render(self.config.clear_color, |rctx, target| {
            renderer.render(rctx, target)
        })
    }
}

/// Opens the lesson window and runs until it is closed.
///
/// Line polygon mode is requested from the device so `W` works everywhere it
/// is supported. The surface is non-sRGB so colors reach the screen exactly
/// as written in the shaders.
pub fn run<V: Vertex + 'static>(config: LessonConfig, renderer: TriangleRenderer<V>) -> Result<()> {
    let lesson = Lesson::new(config, renderer);

    if lesson.config.verbose {
        lesson.log_sources();
    }

    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    }
    .with_wireframe();

    Runtime::run(lesson.config.runtime_config(), gpu_init, lesson)
}
