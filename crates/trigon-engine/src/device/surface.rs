use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = formats.first().copied()?;

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        if let Some(f) = preferred.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
        return Some(first);
    }

    // Adapters commonly list the sRGB variant first.
    Some(formats.iter().copied().find(|f| !f.is_srgb()).unwrap_or(first))
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Required features plus whichever optional ones the adapter offers.
pub(crate) fn resolve_features(
    required: wgpu::Features,
    optional: wgpu::Features,
    adapter: wgpu::Features,
) -> wgpu::Features {
    required | (optional & adapter)
}

/// Maps a surface error to what the frame loop should do next.
///
/// `Lost`/`Outdated` require the caller to reconfigure the surface.
pub(crate) fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as Alpha, Features, TextureFormat as Fmt};

    #[test]
    fn no_formats_means_no_surface() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn srgb_preferred_when_available() {
        let formats = [Fmt::Bgra8Unorm, Fmt::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(Fmt::Rgba8UnormSrgb));
    }

    #[test]
    fn first_format_without_srgb_preference() {
        let formats = [Fmt::Bgra8Unorm, Fmt::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, false), Some(Fmt::Bgra8Unorm));
    }

    #[test]
    fn non_srgb_chosen_when_srgb_listed_first() {
        let formats = [Fmt::Bgra8UnormSrgb, Fmt::Bgra8Unorm];
        assert_eq!(choose_surface_format(&formats, false), Some(Fmt::Bgra8Unorm));
    }

    #[test]
    fn first_format_when_only_srgb_offered() {
        let formats = [Fmt::Rgba8UnormSrgb, Fmt::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, false), Some(Fmt::Rgba8UnormSrgb));
    }

    #[test]
    fn first_format_when_no_srgb_offered() {
        let formats = [Fmt::Rgba16Float, Fmt::Bgra8Unorm];
        assert_eq!(choose_surface_format(&formats, true), Some(Fmt::Rgba16Float));
    }

    #[test]
    fn requested_alpha_mode_honored_if_supported() {
        let supported = [Alpha::Opaque, Alpha::PreMultiplied];
        assert_eq!(choose_alpha_mode(&supported, Some(Alpha::PreMultiplied)), Alpha::PreMultiplied);
    }

    #[test]
    fn unsupported_alpha_mode_falls_back() {
        assert_eq!(choose_alpha_mode(&[Alpha::Opaque], Some(Alpha::PostMultiplied)), Alpha::Opaque);
        assert_eq!(choose_alpha_mode(&[], None), Alpha::Auto);
    }

    #[test]
    fn optional_features_masked_by_adapter() {
        let got = resolve_features(Features::empty(), Features::POLYGON_MODE_LINE, Features::empty());
        assert_eq!(got, Features::empty());

        let got = resolve_features(
            Features::empty(),
            Features::POLYGON_MODE_LINE,
            Features::POLYGON_MODE_LINE | Features::POLYGON_MODE_POINT,
        );
        assert_eq!(got, Features::POLYGON_MODE_LINE);
    }

    #[test]
    fn surface_error_actions() {
        use wgpu::SurfaceError as E;
        assert_eq!(classify_surface_error(&E::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&E::Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&E::OutOfMemory), SurfaceErrorAction::Fatal);
        assert_eq!(classify_surface_error(&E::Timeout), SurfaceErrorAction::SkipFrame);
    }
}
