use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use rendering::TransitFrameSet;

pub mod control_panel;
pub mod layer_toggles;

/// The egui control panel and the timeline-driven layer visibility.
pub struct ControlPanelPlugin;

impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin);
        }
        app.init_resource::<control_panel::ControlPanelVisible>()
            .init_resource::<layer_toggles::LayerToggles>()
            .add_systems(
                Update,
                (
                    control_panel::control_panel_keybind,
                    control_panel::control_panel_ui,
                    layer_toggles::sync_layer_visibility,
                )
                    .chain()
                    .before(TransitFrameSet),
            );
    }
}
