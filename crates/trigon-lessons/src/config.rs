use trigon_engine::paint::Color;
use trigon_engine::render::PolygonMode;
use trigon_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Dark blue-grey used behind the first two lessons.
pub const SLATE: Color = Color::rgb(0.07, 0.13, 0.17);

/// Per-lesson settings.
#[derive(Debug, Clone)]
pub struct LessonConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: Color,
    /// Start in wireframe mode.
    pub wireframe: bool,
    /// Log both shader stages before the window opens.
    pub verbose: bool,
}

impl LessonConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn wireframe(mut self, on: bool) -> Self {
        self.wireframe = on;
        self
    }

    pub fn verbose(mut self, on: bool) -> Self {
        self.verbose = on;
        self
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width as f64, self.height as f64),
        }
    }

    /// Window title for the given mode; wireframe is called out.
    pub fn window_title(&self, mode: PolygonMode) -> String {
        match mode {
            PolygonMode::Fill => self.title.clone(),
            PolygonMode::Line => format!("{} [wireframe]", self.title),
        }
    }
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            title: "trigon".to_string(),
            width: 800,
            height: 600,
            clear_color: SLATE,
            wireframe: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = LessonConfig::default();
        assert_eq!((cfg.width, cfg.height), (800, 600));
        assert_eq!(cfg.clear_color, SLATE);
        assert!(!cfg.wireframe);
        assert!(!cfg.verbose);
    }

    #[test]
    fn runtime_config_carries_title_and_size() {
        let rc = LessonConfig::new("Lesson").runtime_config();
        assert_eq!(rc.title, "Lesson");
        assert_eq!(rc.initial_size, LogicalSize::new(800.0, 600.0));
    }

    #[test]
    fn wireframe_is_shown_in_title() {
        let cfg = LessonConfig::new("Fan").wireframe(true);
        assert_eq!(cfg.window_title(PolygonMode::Fill), "Fan");
        assert_eq!(cfg.window_title(PolygonMode::Line), "Fan [wireframe]");
    }
}
