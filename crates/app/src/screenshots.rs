//! Preset screenshot run: frames a few views of the network, saves a PNG of
//! each to /tmp and exits.

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use network::config::STATION_GLAVNI_KOLODVOR;
use network::LngLat;
use rendering::camera::{zoom_to_distance, OrbitCamera};
use rendering::map_view::MapOrigin;

/// Frames to wait before the first shot so the layers have attached.
const WARMUP_FRAMES: u32 = 120;
/// Frames per preset; the shot is taken halfway through.
const FRAMES_PER_SHOT: u32 = 12;

#[derive(Debug, Clone, Copy)]
struct ShotPreset {
    name: &'static str,
    focus: LngLat,
    yaw: f32,
    pitch_deg: f32,
    zoom: f64,
}

const PRESETS: &[ShotPreset] = &[
    ShotPreset {
        name: "01_overview",
        focus: STATION_GLAVNI_KOLODVOR,
        yaw: 0.0,
        pitch_deg: 60.0,
        zoom: 11.0,
    },
    ShotPreset {
        name: "02_main_station",
        focus: STATION_GLAVNI_KOLODVOR,
        yaw: 0.4,
        pitch_deg: 35.0,
        zoom: 15.5,
    },
    ShotPreset {
        name: "03_skyway",
        focus: LngLat::new(15.9534, 45.7934),
        yaw: -0.6,
        pitch_deg: 30.0,
        zoom: 15.0,
    },
    ShotPreset {
        name: "04_airport",
        focus: LngLat::new(15.9456, 45.7534),
        yaw: 0.2,
        pitch_deg: 40.0,
        zoom: 14.0,
    },
];

#[derive(Resource, Default)]
pub struct ScreenshotQueue {
    frame: u32,
    current: usize,
}

pub fn drive_screenshots(
    mut commands: Commands,
    mut queue: ResMut<ScreenshotQueue>,
    origin: Res<MapOrigin>,
    mut orbit: ResMut<OrbitCamera>,
    mut exit: EventWriter<AppExit>,
) {
    queue.frame += 1;
    if queue.frame < WARMUP_FRAMES {
        return;
    }

    let idx = queue.current;
    let Some(preset) = PRESETS.get(idx) else {
        // Give the last save a few frames to land.
        if queue.frame > WARMUP_FRAMES + PRESETS.len() as u32 * FRAMES_PER_SHOT + 20 {
            exit.send(AppExit::Success);
        }
        return;
    };

    match (queue.frame - WARMUP_FRAMES) % FRAMES_PER_SHOT {
        0 => {
            orbit.focus = origin.to_world(preset.focus);
            orbit.yaw = preset.yaw;
            orbit.pitch = preset.pitch_deg.to_radians();
            orbit.distance = zoom_to_distance(preset.zoom);
        }
        6 => {
            let path = format!("/tmp/zagreb2050_{}.png", preset.name);
            info!("Saving screenshot {path}");
            commands
                .spawn(Screenshot::primary_window())
                .observe(save_to_disk(path));
            queue.current += 1;
        }
        _ => {}
    }
}
