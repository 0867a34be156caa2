/// How triangles are rasterized.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PolygonMode {
    #[default]
    Fill,
    /// Edges only. Needs `wgpu::Features::POLYGON_MODE_LINE`.
    Line,
}

impl PolygonMode {
    pub fn from_wireframe(wireframe: bool) -> Self {
        if wireframe { PolygonMode::Line } else { PolygonMode::Fill }
    }

    pub fn toggled(self) -> Self {
        match self {
            PolygonMode::Fill => PolygonMode::Line,
            PolygonMode::Line => PolygonMode::Fill,
        }
    }

    /// Mode the device can actually rasterize: `Line` degrades to `Fill`
    /// when the feature is not enabled.
    pub fn resolve(self, features: wgpu::Features) -> Self {
        match self {
            PolygonMode::Line if !features.contains(wgpu::Features::POLYGON_MODE_LINE) => {
                PolygonMode::Fill
            }
            mode => mode,
        }
    }

    pub fn to_wgpu(self) -> wgpu::PolygonMode {
        match self {
            PolygonMode::Fill => wgpu::PolygonMode::Fill,
            PolygonMode::Line => wgpu::PolygonMode::Line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(PolygonMode::Fill.toggled(), PolygonMode::Line);
        assert_eq!(PolygonMode::Fill.toggled().toggled(), PolygonMode::Fill);
    }

    #[test]
    fn wireframe_flag() {
        assert_eq!(PolygonMode::from_wireframe(true), PolygonMode::Line);
        assert_eq!(PolygonMode::from_wireframe(false), PolygonMode::Fill);
    }

    #[test]
    fn line_falls_back_without_feature() {
        assert_eq!(PolygonMode::Line.resolve(wgpu::Features::empty()), PolygonMode::Fill);
        assert_eq!(
            PolygonMode::Line.resolve(wgpu::Features::POLYGON_MODE_LINE),
            PolygonMode::Line
        );
        assert_eq!(PolygonMode::Fill.resolve(wgpu::Features::empty()), PolygonMode::Fill);
    }
}
