use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use network::config::{DEFAULT_ZOOM, STATION_GLAVNI_KOLODVOR};

use crate::map_view::MapOrigin;

const PAN_SPEED: f32 = 500.0;
const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 50.0;
const MAX_DISTANCE: f32 = 60_000.0;
const MIN_PITCH: f32 = 10.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.005;

/// How far the focus may wander from the map origin, in meters.
const FOCUS_LIMIT: f32 = 40_000.0;

/// Pixels the cursor must travel before a left press becomes a pan.
const LEFT_DRAG_THRESHOLD: f32 = 5.0;

/// Far enough to see the whole clamped map from the farthest orbit.
const FAR_PLANE: f32 = MAX_DISTANCE + 2.0 * FOCUS_LIMIT;

/// Perspective for a camera that orbits kilometers above the map.
pub fn map_perspective() -> PerspectiveProjection {
    PerspectiveProjection {
        far: FAR_PLANE,
        ..default()
    }
}

/// True while egui is using the pointer, so map gestures stay out of panels.
#[inline]
fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// Camera distance that shows about as much ground as a web map at `zoom`.
pub fn zoom_to_distance(zoom: f64) -> f32 {
    (40_000_000.0 / 2f64.powf(zoom)) as f32
}

/// Orbital map camera: looks at a ground point from `distance` meters away.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Ground point the camera looks at, in map meters.
    pub focus: Vec3,
    /// Rotation around the focus in radians; 0 looks north.
    pub yaw: f32,
    /// Elevation angle, clamped between `MIN_PITCH` and `MAX_PITCH`.
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitCamera {
    /// The "reset view" framing: main station, default zoom, tilted.
    pub fn home(origin: &MapOrigin) -> Self {
        Self {
            focus: origin.to_world(STATION_GLAVNI_KOLODVOR),
            yaw: 0.0,
            pitch: 50.0_f32.to_radians(),
            distance: zoom_to_distance(DEFAULT_ZOOM),
        }
    }

    /// Eye position and look-at target.
    pub fn eye_and_target(&self) -> (Vec3, Vec3) {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        (self.focus + Vec3::new(x, y, z), self.focus)
    }

    fn pan_screen(&mut self, delta: Vec2) {
        let scale = self.distance / 1000.0;
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.focus.x += (-delta.x * cos_yaw - delta.y * sin_yaw) * scale;
        self.focus.z += (delta.x * sin_yaw - delta.y * cos_yaw) * scale;
        clamp_focus(&mut self.focus);
    }
}

#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

/// Left-button press state; becomes a pan once past `LEFT_DRAG_THRESHOLD`.
#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    pub is_dragging: bool,
}

fn clamp_focus(focus: &mut Vec3) {
    focus.x = focus.x.clamp(-FOCUS_LIMIT, FOCUS_LIMIT);
    focus.z = focus.z.clamp(-FOCUS_LIMIT, FOCUS_LIMIT);
}

pub fn setup_camera(mut commands: Commands, origin: Res<MapOrigin>) {
    let orbit = OrbitCamera::home(&origin);
    let (eye, target) = orbit.eye_and_target();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(map_perspective()),
        Transform::from_translation(eye).looking_at(target, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}

/// System: apply OrbitCamera state to the camera Transform.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    let (eye, target) = orbit.eye_and_target();
    *transform = Transform::from_translation(eye).looking_at(target, Vec3::Y);
}

/// WASD/Arrow keys: pan relative to the current yaw. Home: reset view.
pub fn camera_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    origin: Res<MapOrigin>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if keys.just_pressed(KeyCode::Home) {
        *orbit = OrbitCamera::home(&origin);
        return;
    }

    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }
    if dir == Vec2::ZERO {
        return;
    }

    let dir = dir.normalize();
    let delta = PAN_SPEED * (orbit.distance / 1000.0) * time.delta_secs();
    let (sin_yaw, cos_yaw) = orbit.yaw.sin_cos();
    orbit.focus.x += (dir.x * cos_yaw + dir.y * sin_yaw) * delta;
    orbit.focus.z += (-dir.x * sin_yaw + dir.y * cos_yaw) * delta;
    clamp_focus(&mut orbit.focus);
}

/// Left-mouse drag: pan the map.
pub fn camera_left_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut left_drag: ResMut<LeftClickDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            *left_drag = LeftClickDrag {
                pressed: true,
                start_pos: pos,
                last_pos: pos,
                is_dragging: false,
            };
        }
    }
    if buttons.just_released(MouseButton::Left) {
        left_drag.pressed = false;
        left_drag.is_dragging = false;
    }
    if !left_drag.pressed {
        return;
    }
    let Some(pos) = window.cursor_position() else {
        return;
    };

    if !left_drag.is_dragging && (pos - left_drag.start_pos).length() > LEFT_DRAG_THRESHOLD {
        left_drag.is_dragging = true;
        left_drag.last_pos = pos;
    }
    if left_drag.is_dragging {
        orbit.pan_screen(pos - left_drag.last_pos);
        left_drag.last_pos = pos;
    }
}

/// Right-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraOrbitDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Right) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }
    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            orbit.yaw += delta.x * ORBIT_SENSITIVITY;
            orbit.pitch = (orbit.pitch - delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
            drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        orbit.distance = (orbit.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

#[cfg(test)]
mod tests {
    use bevy::render::camera::CameraProjection;
    use bevy::render::primitives::{Frustum, Sphere};

    use super::*;

    /// Whether a 10 m sphere at the orbit focus survives frustum culling.
    fn focus_is_visible(orbit: &OrbitCamera) -> bool {
        let projection = map_perspective();
        let (eye, target) = orbit.eye_and_target();
        let transform = Transform::from_translation(eye).looking_at(target, Vec3::Y);
        let clip_from_world =
            projection.get_clip_from_view() * transform.compute_matrix().inverse();
        let frustum = Frustum::from_clip_from_world_custom_far(
            &clip_from_world,
            &transform.translation,
            &transform.back().as_vec3(),
            projection.far(),
        );
        let sphere = Sphere {
            center: target.into(),
            radius: 10.0,
        };
        frustum.intersects_sphere(&sphere, true)
    }

    #[test]
    fn test_zoom_distance_shrinks_with_zoom() {
        assert!(zoom_to_distance(12.0) < zoom_to_distance(11.0));
        let d = zoom_to_distance(DEFAULT_ZOOM);
        assert!(d > 5_000.0 && d < 30_000.0, "got: {d}");
    }

    #[test]
    fn test_home_looks_at_main_station() {
        let origin = MapOrigin::default();
        let orbit = OrbitCamera::home(&origin);
        let (eye, target) = orbit.eye_and_target();
        assert_eq!(target, origin.to_world(STATION_GLAVNI_KOLODVOR));
        assert!(eye.y > 0.0);
        assert!((eye.distance(target) - orbit.distance).abs() < 1.0);
    }

    #[test]
    fn test_pan_is_clamped() {
        let mut orbit = OrbitCamera::home(&MapOrigin::default());
        orbit.distance = MAX_DISTANCE;
        for _ in 0..100 {
            orbit.pan_screen(Vec2::new(-1000.0, 0.0));
        }
        assert_eq!(orbit.focus.x, FOCUS_LIMIT);
    }

    #[test]
    fn test_far_plane_covers_every_orbit() {
        assert!(map_perspective().far >= MAX_DISTANCE + FOCUS_LIMIT);
    }

    #[test]
    fn test_home_focus_is_inside_frustum() {
        let orbit = OrbitCamera::home(&MapOrigin::default());
        assert!(orbit.distance > PerspectiveProjection::default().far);
        assert!(focus_is_visible(&orbit));
    }

    #[test]
    fn test_focus_visible_when_fully_zoomed_out() {
        let mut orbit = OrbitCamera::home(&MapOrigin::default());
        orbit.distance = MAX_DISTANCE;
        orbit.pitch = MIN_PITCH;
        orbit.focus = Vec3::new(FOCUS_LIMIT, 0.0, -FOCUS_LIMIT);
        assert!(focus_is_visible(&orbit));
    }
}
