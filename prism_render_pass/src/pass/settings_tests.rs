use super::*;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_pass_settings_defaults() {
    let settings = PassSettings::default();

    assert_eq!(settings.alpha_threshold, 0.5);
    assert!(settings.resolve_multisample_aov);
    assert!(settings.multi_sample_enabled);
    assert!(settings.depth.test_enabled);
    assert_eq!(settings.depth.func, CompareOp::LessOrEqual);
    assert!(!settings.stencil.enabled);
    assert!(!settings.blend.enabled);
    assert_eq!(settings.cull_style, CullStyle::Nothing);
    assert_eq!(settings.point_size, 3.0);
    assert_eq!(settings.tess_level, 32.0);
}

#[test]
fn test_missing_color_mask_writes_rgba() {
    let mut settings = PassSettings::default();
    settings.color_masks = vec![ColorWriteMask::RGB];

    assert_eq!(settings.color_mask(0), ColorWriteMask::RGB);
    assert_eq!(settings.color_mask(1), ColorWriteMask::ALL);
}

// ============================================================================
// Alpha mask policy
// ============================================================================

#[test]
fn test_default_policy_open_interval() {
    assert!(default_alpha_mask_policy(false, 0.5));
    assert!(!default_alpha_mask_policy(false, 0.0));
    assert!(!default_alpha_mask_policy(false, 1.0));
    assert!(!default_alpha_mask_policy(true, 0.5));
}

#[test]
fn test_custom_policy_is_used() {
    fn always(_: bool, _: f32) -> bool {
        true
    }

    let mut settings = PassSettings::default();
    assert!(!settings.alpha_mask_active(true));

    settings.alpha_mask_policy = always;
    assert!(settings.alpha_mask_active(true));
}

// ============================================================================
// Depth / stencil
// ============================================================================

#[test]
fn test_depth_stencil_state_from_settings() {
    let mut settings = PassSettings::default();
    settings.depth.write_enabled = false;
    settings.stencil.enabled = true;
    settings.stencil.reference = 7;
    settings.stencil.pass_op = StencilOp::Replace;

    let state = settings.depth_stencil_state();

    assert!(!state.depth_write_enable);
    assert!(state.stencil_test_enable);
    assert_eq!(state.front.reference, 7);
    assert_eq!(state.back.pass_op, StencilOp::Replace);
}
