use std::borrow::Cow;

use anyhow::{anyhow, ensure, Context, Result};
use naga::valid::Capabilities;
use trigon_shader::{ShaderSource, ShaderStage};

/// One compiled stage: its module and the entry point to call.
pub struct StageModule {
    pub module: wgpu::ShaderModule,
    pub entry_point: String,
}

/// Vertex + fragment modules built from a split [`ShaderSource`].
///
/// Each stage is its own WGSL module, so anything both stages use (e.g. the
/// inter-stage struct) must be declared in both sections.
pub struct ShaderProgram {
    pub vertex: StageModule,
    pub fragment: StageModule,
}

impl ShaderProgram {
    /// Checks both stages without touching the GPU, against the capabilities
    /// every device has.
    pub fn check(source: &ShaderSource) -> Result<()> {
        for stage in ShaderStage::ALL {
            check_stage(stage, source.stage(stage))?;
        }
        Ok(())
    }

    /// Validates and compiles both stages on `device`.
    pub fn compile(device: &wgpu::Device, label: &str, source: &ShaderSource) -> Result<Self> {
        let caps = capabilities_for(device.features());
        let vertex = compile_stage(device, caps, label, ShaderStage::Vertex, source.vertex())?;
        let fragment =
            compile_stage(device, caps, label, ShaderStage::Fragment, source.fragment())?;
        Ok(Self { vertex, fragment })
    }
}

/// Shader capabilities unlocked by the enabled device features.
pub fn capabilities_for(features: wgpu::Features) -> Capabilities {
    let mut caps = Capabilities::empty();
    if features.contains(wgpu::Features::SHADER_F64) {
        caps |= Capabilities::FLOAT64;
    }
    if features.contains(wgpu::Features::SHADER_F16) {
        caps |= Capabilities::SHADER_FLOAT16;
    }
    if features.contains(wgpu::Features::SHADER_PRIMITIVE_INDEX) {
        caps |= Capabilities::PRIMITIVE_INDEX;
    }
    caps
}

/// [`check_stage_with`] using only the baseline capabilities.
pub fn check_stage(stage: ShaderStage, src: &str) -> Result<String> {
    check_stage_with(stage, src, Capabilities::empty())
}

/// Parses and validates one stage's WGSL, returning the name of its entry
/// point for that stage.
///
/// Fails if the section is empty, does not parse, needs more than `caps`,
/// or has no entry point of the matching stage.
pub fn check_stage_with(stage: ShaderStage, src: &str, caps: Capabilities) -> Result<String> {
    ensure!(!src.trim().is_empty(), "{stage} section is empty");

    let module = naga::front::wgsl::parse_str(src)
        .map_err(|e| anyhow!("{stage} shader failed to parse:\n{}", e.emit_to_string(src)))?;

    naga::valid::Validator::new(naga::valid::ValidationFlags::all(), caps)
        .validate(&module)
        .map_err(|e| anyhow!("{stage} shader failed validation: {}", e.into_inner()))?;

    let wanted = match stage {
        ShaderStage::Vertex => naga::ShaderStage::Vertex,
        ShaderStage::Fragment => naga::ShaderStage::Fragment,
    };

    module
        .entry_points
        .iter()
        .find(|ep| ep.stage == wanted)
        .map(|ep| ep.name.clone())
        .with_context(|| format!("{stage} section has no @{stage} entry point"))
}

fn compile_stage(
    device: &wgpu::Device,
    caps: Capabilities,
    label: &str,
    stage: ShaderStage,
    src: &str,
) -> Result<StageModule> {
    // wgpu runs the same naga validation; anything it would reject must fail here,
    // since a rejected module goes to the uncaptured-error handler and panics.
    let entry_point = check_stage_with(stage, src, caps)
        .with_context(|| format!("{stage} shader failed to compile"))?;

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&format!("{label} {stage} shader")),
        source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(src)),
    });

    log::debug!("{label}: compiled {stage} stage (entry point `{entry_point}`)");

    Ok(StageModule { module, entry_point })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = "@vertex\nfn vs_main(@location(0) p: vec3<f32>) -> @builtin(position) vec4<f32> {\n    return vec4<f32>(p, 1.0);\n}\n";
    const FS: &str = "@fragment\nfn fs_main() -> @location(0) vec4<f32> {\n    return vec4<f32>(1.0, 0.0, 0.0, 1.0);\n}\n";

    #[test]
    fn finds_entry_points() {
        assert_eq!(check_stage(ShaderStage::Vertex, VS).unwrap(), "vs_main");
        assert_eq!(check_stage(ShaderStage::Fragment, FS).unwrap(), "fs_main");
    }

    #[test]
    fn empty_section_is_an_error() {
        let err = check_stage(ShaderStage::Fragment, "\n  \n").unwrap_err();
        assert!(err.to_string().contains("fragment section is empty"));
    }

    #[test]
    fn stage_mismatch_is_an_error() {
        let err = check_stage(ShaderStage::Fragment, VS).unwrap_err();
        assert!(err.to_string().contains("no @fragment entry point"));
    }

    #[test]
    fn syntax_error_names_stage() {
        let err = check_stage(ShaderStage::Vertex, "fn broken( {").unwrap_err();
        assert!(err.to_string().starts_with("vertex shader failed to parse"));
    }

    #[test]
    fn missing_capability_is_rejected() {
        let vs = "@vertex\nfn vs_main() -> @builtin(position) vec4<f32> {\n    let x: f64 = 1.0lf;\n    return vec4<f32>(f32(x), 0.0, 0.0, 1.0);\n}\n";
        let err = check_stage(ShaderStage::Vertex, vs).unwrap_err();
        assert!(err.to_string().starts_with("vertex shader failed"));
    }

    #[test]
    fn capabilities_follow_device_features() {
        assert_eq!(capabilities_for(wgpu::Features::empty()), Capabilities::empty());
        assert!(capabilities_for(wgpu::Features::SHADER_F64).contains(Capabilities::FLOAT64));
        assert!(!capabilities_for(wgpu::Features::SHADER_F16).contains(Capabilities::FLOAT64));
    }

    #[test]
    fn check_covers_both_stages() {
        ShaderProgram::check(&ShaderSource::new(VS, FS)).unwrap();
        assert!(ShaderProgram::check(&ShaderSource::new(VS, "")).is_err());
    }
}
