use bevy::prelude::*;

use network::data::{all_stations, LineKey, DEVELOPMENT_ZONES};
use network::{LngLat, TimelineSelection};

use super::types::MapOrigin;
use crate::vehicle_meshes::colors::from_rgb;

const LINE_Y: f32 = 0.3;
const STATION_Y: f32 = 0.4;
const ZONE_Y: f32 = 0.2;
const STATION_HALF: f32 = 40.0;
const INTERCHANGE_HALF: f32 = 70.0;
const STATION_COLOR: Color = Color::srgb(0.95, 0.95, 0.95);

/// Draw the open part of every line, the stations on it and, once the
/// riverfront is being developed, the development zones.
pub fn draw_network_overlays(
    selection: Res<TimelineSelection>,
    origin: Res<MapOrigin>,
    mut gizmos: Gizmos,
) {
    let at = |p: LngLat, y: f32| origin.to_world(p).with_y(y);

    for line in LineKey::ALL {
        let segments = line.segments();
        let color = from_rgb(line.info().color);
        for id in selection.segments(line) {
            let Some(segment) = segments.get(id) else {
                continue;
            };
            gizmos.linestrip(segment.points.iter().map(|p| at(*p, LINE_Y)), color);
        }
    }

    let open = network::timeline::active_station_names(selection.year, selection.plan);
    for station in all_stations().filter(|s| open.contains(&s.name)) {
        let half = if station.is_interchange {
            INTERCHANGE_HALF
        } else {
            STATION_HALF
        };
        let center = at(station.position, STATION_Y);
        let top = center - Vec3::Z * half;
        let right = center + Vec3::X * half;
        let bottom = center + Vec3::Z * half;
        let left = center - Vec3::X * half;
        gizmos.line(top, right, STATION_COLOR);
        gizmos.line(right, bottom, STATION_COLOR);
        gizmos.line(bottom, left, STATION_COLOR);
        gizmos.line(left, top, STATION_COLOR);
    }

    if !selection.elements().development.is_visible() {
        return;
    }
    for zone in DEVELOPMENT_ZONES {
        let color = from_rgb(zone.kind.color());
        gizmos.linestrip(
            zone.ring.iter().map(|p| at(LngLat::from(*p), ZONE_Y)),
            color,
        );
    }
}
