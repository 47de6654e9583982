use crate::components::ChargedSfxPlayback;
use crate::plugin::ChargedSfxPluginConfig;
use bevy::diagnostic::{Diagnostic, DiagnosticPath, Diagnostics, RegisterDiagnostic};
use bevy::prelude::*;

/// Highest charge ratio across all live cues this frame.
pub const CHARGE_RATIO_PATH: DiagnosticPath = DiagnosticPath::const_new("charged_sfx/charge_ratio");

/// Register the plugin's diagnostics with the app.
pub fn register(app: &mut App) {
    app.register_diagnostic(Diagnostic::new(CHARGE_RATIO_PATH));
}

/// Record the per-frame diagnostic measurements.
pub fn update_diagnostics(
    config: Res<ChargedSfxPluginConfig>,
    mut diagnostics: Diagnostics,
    playbacks: Query<&ChargedSfxPlayback>,
) {
    if !config.diagnostics {
        return;
    }

    let mut max_ratio = 0.0f64;

    for playback in playbacks.iter() {
        max_ratio = max_ratio.max(playback.charge_ratio() as f64);
    }

    diagnostics.add_measurement(&CHARGE_RATIO_PATH, || max_ratio);
}
