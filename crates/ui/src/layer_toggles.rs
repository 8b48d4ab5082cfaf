//! Which transit layers are shown.
//!
//! A layer is visible when the user has it switched on and its line has at
//! least one open segment in the selected year.

use bevy::prelude::*;

use network::data::LineKey;
use network::{ElementStatus, TimelineSelection};
use rendering::TransitControls;

/// Per-line user toggles, all on by default.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct LayerToggles {
    shown: [bool; LineKey::ALL.len()],
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self {
            shown: [true; LineKey::ALL.len()],
        }
    }
}

impl LayerToggles {
    fn slot(line: LineKey) -> usize {
        LineKey::ALL
            .iter()
            .position(|&l| l == line)
            .unwrap_or_default()
    }

    pub fn is_on(&self, line: LineKey) -> bool {
        self.shown[Self::slot(line)]
    }

    pub fn set(&mut self, line: LineKey, on: bool) {
        self.shown[Self::slot(line)] = on;
    }
}

pub fn layer_should_show(toggled_on: bool, status: ElementStatus) -> bool {
    toggled_on && status.is_visible()
}

/// Push toggle and timeline changes into the layers' controls.
pub fn sync_layer_visibility(
    selection: Res<TimelineSelection>,
    toggles: Res<LayerToggles>,
    controls: Res<TransitControls>,
) {
    if !(selection.is_changed() || toggles.is_changed() || controls.is_changed()) {
        return;
    }
    let elements = selection.elements();
    for (line, handle) in &controls.entries {
        let show = layer_should_show(toggles.is_on(*line), elements.line(*line));
        if handle.is_visible() != show {
            debug!("{} layer visible: {show}", line.info().name);
            handle.set_visible(show);
        }
    }
}
