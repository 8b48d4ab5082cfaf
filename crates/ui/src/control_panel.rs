//! The Zagreb 2050 control panel.
//!
//! One egui window with:
//! - plan switch (Realistic / Ambitious)
//! - year slider and the phase in effect
//! - per-line visibility toggle, build status and speed slider
//! - a reset-view button (Home does the same)

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use network::config::{TIMELINE_FIRST_YEAR, TIMELINE_LAST_YEAR};
use network::data::LineKey;
use network::{ElementStatus, PlanType, TimelineSelection};
use rendering::camera::OrbitCamera;
use rendering::map_view::MapOrigin;
use rendering::TransitControls;

use crate::layer_toggles::LayerToggles;

/// Fastest speed the sliders offer, in route lengths per frame.
pub const MAX_SLIDER_SPEED: f64 = 0.002;

/// Whether the control panel is shown. Toggled with `P`.
#[derive(Resource)]
pub struct ControlPanelVisible(pub bool);

impl Default for ControlPanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

pub fn status_label(status: ElementStatus) -> &'static str {
    match status {
        ElementStatus::None => "planned",
        ElementStatus::Partial => "partly open",
        ElementStatus::Full => "open",
    }
}

fn egui_color(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

pub fn control_panel_keybind(
    keys: Res<ButtonInput<KeyCode>>,
    mut visible: ResMut<ControlPanelVisible>,
) {
    if keys.just_pressed(KeyCode::KeyP) {
        visible.0 = !visible.0;
    }
}

pub fn control_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<ControlPanelVisible>,
    mut selection: ResMut<TimelineSelection>,
    mut toggles: ResMut<LayerToggles>,
    controls: Res<TransitControls>,
    origin: Res<MapOrigin>,
    orbit: Option<ResMut<OrbitCamera>>,
) {
    if !visible.0 {
        return;
    }

    // Copies so unchanged frames do not trip change detection.
    let mut plan = selection.plan;
    let mut year = selection.year;
    let mut shown: Vec<(LineKey, bool)> = LineKey::ALL
        .iter()
        .map(|&line| (line, toggles.is_on(line)))
        .collect();
    let mut reset_view = false;

    let mut open = true;
    egui::Window::new("Zagreb 2050")
        .open(&mut open)
        .resizable(false)
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;

            // --- Plan ---
            ui.horizontal(|ui| {
                for candidate in PlanType::ALL {
                    let name = candidate.plan().name;
                    if ui.selectable_label(plan == candidate, name).clicked() {
                        plan = candidate;
                    }
                }
            });
            let info = plan.plan();
            ui.label(info.description);
            ui.small(info.cost);

            ui.separator();

            // --- Timeline ---
            ui.add(
                egui::Slider::new(&mut year, TIMELINE_FIRST_YEAR..=TIMELINE_LAST_YEAR)
                    .text("year"),
            );
            match info.phase_at(year) {
                Some(phase) => {
                    ui.strong(format!("{} ({})", phase.label, phase.year));
                    ui.label(phase.description);
                }
                None => {
                    ui.label("Construction has not started.");
                }
            }

            ui.separator();

            // --- Lines ---
            let elements = network::timeline::active_elements(year, plan);
            for (line, on) in &mut shown {
                let line_info = line.info();
                ui.horizontal(|ui| {
                    ui.checkbox(on, "");
                    ui.colored_label(egui_color(line_info.color), line_info.name);
                    ui.weak(status_label(elements.line(*line)));
                });
                if let Some(handle) = controls.get(*line) {
                    let mut speed = handle.speed();
                    let response = ui.add(
                        egui::Slider::new(&mut speed, 0.0..=MAX_SLIDER_SPEED)
                            .text("speed")
                            .custom_formatter(|v, _| format!("{:.2}‰", v * 1000.0)),
                    );
                    if response.changed() {
                        handle.set_speed(speed);
                    }
                }
            }

            ui.separator();
            if ui.button("Reset view").clicked() {
                reset_view = true;
            }
        });

    if !open {
        visible.0 = false;
    }
    if plan != selection.plan || year != selection.year {
        selection.plan = plan;
        selection.year = year;
    }
    for (line, on) in shown {
        if toggles.is_on(line) != on {
            toggles.set(line, on);
        }
    }
    if reset_view {
        if let Some(mut orbit) = orbit {
            *orbit = OrbitCamera::home(&origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_are_distinct() {
        let labels = [
            status_label(ElementStatus::None),
            status_label(ElementStatus::Partial),
            status_label(ElementStatus::Full),
        ];
        assert_ne!(labels[0], labels[1]);
        assert_ne!(labels[1], labels[2]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn test_slider_covers_default_speeds() {
        for line in LineKey::ALL {
            let speed = rendering::map_view::line_layer_config(line).speed;
            assert!(speed > 0.0 && speed <= MAX_SLIDER_SPEED, "{line:?} got: {speed}");
        }
    }
}
