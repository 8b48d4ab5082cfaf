use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use rendering::map_view::spawn_transit_layers;

mod config;
mod screenshots;

use config::{apply_app_config, AppConfig};

const BACKGROUND: Color = Color::srgb(0.06, 0.07, 0.09);

fn main() {
    let config = AppConfig::from_env();
    let screenshots = config.screenshots;

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Zagreb 2050".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // Idle until input arrives or a visible layer asks for the next frame.
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_secs(1)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_secs(5)),
    })
    .insert_resource(ClearColor(BACKGROUND))
    .insert_resource(config)
    .add_plugins((
        network::NetworkPlugin,
        rendering::TransitLayersPlugin,
        ui::ControlPanelPlugin,
    ))
    .add_systems(Startup, apply_app_config.after(spawn_transit_layers));

    if screenshots {
        app.init_resource::<screenshots::ScreenshotQueue>()
            .add_systems(Update, screenshots::drive_screenshots);
    }

    app.run();
}
