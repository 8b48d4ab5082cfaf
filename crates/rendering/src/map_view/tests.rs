#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bevy::math::{DMat4, DVec3};
    use bevy::prelude::*;

    use network::config::ZAGREB_CENTER;
    use network::data::LineKey;
    use network::LngLat;

    use crate::animated_layer::{AnimatedLayer, LayerState, VehicleKind};
    use crate::host::{CameraMatrix, CustomLayer, DrawCall, MapHost, RenderSurface, SceneLight};
    use crate::map_view::*;
    use crate::projection::{Projection as _, WebMercator, OBJECT_SCALE};
    use crate::vehicle_meshes::colors::STEEL;
    use crate::vehicle_meshes::PartMaterial;

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    #[derive(Default)]
    struct TestAssets {
        meshes: Assets<Mesh>,
        materials: Assets<StandardMaterial>,
        registry: MeshRegistry,
        frame: FrameDraws,
    }

    impl TestAssets {
        fn surface(&mut self, world_from_clip: DMat4) -> BevySurface<'_> {
            BevySurface {
                meshes: &mut self.meshes,
                materials: &mut self.materials,
                registry: &mut self.registry,
                frame: &mut self.frame,
                lights: Vec::new(),
                world_from_clip,
            }
        }
    }

    /// A perspective camera hovering south of the city, looking at it.
    fn clip_from_world() -> DMat4 {
        let clip_from_view =
            Mat4::perspective_infinite_reverse_rh(45f32.to_radians(), 16.0 / 9.0, 0.1).as_dmat4();
        let world_from_view = Transform::from_xyz(0.0, 6_000.0, 6_000.0)
            .looking_at(Vec3::ZERO, Vec3::Y)
            .compute_matrix()
            .as_dmat4();
        clip_from_view * world_from_view.inverse()
    }

    fn host() -> (Arc<RepaintFlag>, Arc<dyn MapHost>) {
        let flag = Arc::new(RepaintFlag::default());
        let host: Arc<dyn MapHost> = flag.clone();
        (flag, host)
    }

    // -----------------------------------------------------------------------
    // MapOrigin
    // -----------------------------------------------------------------------

    #[test]
    fn test_origin_center_is_world_zero() {
        let origin = MapOrigin::default();
        assert_eq!(origin.center, ZAGREB_CENTER);
        assert!(origin.to_world(ZAGREB_CENTER).length() < 1e-3);
    }

    #[test]
    fn test_origin_axes() {
        let origin = MapOrigin::default();
        let east = origin.to_world(LngLat::new(ZAGREB_CENTER.lng + 0.01, ZAGREB_CENTER.lat));
        let north = origin.to_world(LngLat::new(ZAGREB_CENTER.lng, ZAGREB_CENTER.lat + 0.01));
        // 0.01 degrees of longitude is about 776 m at this latitude.
        assert!(east.x > 700.0 && east.x < 850.0, "got: {east:?}");
        assert!(east.z.abs() < 1.0);
        assert!(north.z < -1_000.0, "got: {north:?}");
    }

    #[test]
    fn test_world_from_mercator_matches_to_world() {
        let origin = MapOrigin::default();
        let p = LngLat::new(15.9456, 45.7534);
        let mercator = WebMercator.project(p);
        let world = origin
            .world_from_mercator()
            .transform_point3(DVec3::new(mercator.x, mercator.y, 0.0));
        let expected = origin.to_world(p);
        assert!((world.as_vec3() - expected).length() < 0.01, "got: {world:?}");
    }

    #[test]
    fn test_world_from_mercator_lifts_height() {
        let origin = MapOrigin::default();
        let meter = 1.0 / origin.world_from_mercator().x_axis.x;
        let world = origin
            .world_from_mercator()
            .transform_vector3(DVec3::new(0.0, 0.0, 10.0 * meter));
        assert!((world - DVec3::new(0.0, 10.0, 0.0)).length() < 1e-9, "got: {world:?}");
    }

    #[test]
    fn test_camera_matrix_composes_world_from_mercator() {
        let origin = MapOrigin::default();
        let camera = origin.camera_matrix(DMat4::IDENTITY);
        assert_eq!(camera.to_dmat4(), origin.world_from_mercator());
    }

    // -----------------------------------------------------------------------
    // Host handle and lighting
    // -----------------------------------------------------------------------

    #[test]
    fn test_repaint_flag_is_drained() {
        let (flag, host) = host();
        assert!(!flag.take());
        host.trigger_repaint();
        host.trigger_repaint();
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn test_scene_lighting_keeps_strongest() {
        let mut lighting = SceneLighting::default();
        lighting.declare(&SceneLight::Ambient {
            color: Color::WHITE,
            intensity: 0.4,
        });
        lighting.declare(&SceneLight::Ambient {
            color: Color::BLACK,
            intensity: 0.7,
        });
        lighting.declare(&SceneLight::Ambient {
            color: Color::WHITE,
            intensity: 0.5,
        });
        assert_eq!(lighting.ambient, Some((Color::BLACK, 0.7)));
        assert!(lighting.directional.is_none());

        lighting.declare(&SceneLight::Directional {
            color: Color::WHITE,
            intensity: 0.8,
            direction: Vec3::Y,
        });
        assert_eq!(lighting.directional, Some((Color::WHITE, 0.8, Vec3::Y)));
    }

    // -----------------------------------------------------------------------
    // Layer configs
    // -----------------------------------------------------------------------

    #[test]
    fn test_every_line_builds_a_layer() {
        for line in LineKey::ALL {
            let config = line_layer_config(line);
            assert_eq!(config.id, format!("{}-3d", line.slug()));
            let (layer, _) = AnimatedLayer::new(config).unwrap();
            let full = line.segments().splice_all().unwrap();
            assert_eq!(layer.route(), &full, "{line:?}");
        }
    }

    #[test]
    fn test_line_layer_kinds() {
        assert!(matches!(
            line_layer_config(LineKey::MetroB).kind,
            VehicleKind::Train { car_count: 3 }
        ));
        assert_eq!(line_layer_config(LineKey::Premetro).kind, VehicleKind::Tram);

        let gondola = line_layer_config(LineKey::Gondola);
        assert_eq!(gondola.kind, VehicleKind::Cabin);
        assert_eq!(gondola.instance_count, GONDOLA_CABINS);
        assert_eq!(gondola.speed, GONDOLA_SPEED);
    }

    #[test]
    fn test_transit_controls_lookup() {
        let mut controls = TransitControls::default();
        let (_, handle) = AnimatedLayer::new(line_layer_config(LineKey::MetroC)).unwrap();
        handle.set_speed(0.5);
        controls.entries.push((LineKey::MetroC, handle));
        assert_eq!(controls.get(LineKey::MetroC).map(|c| c.speed()), Some(0.5));
        assert!(controls.get(LineKey::MetroA).is_none());
    }

    // -----------------------------------------------------------------------
    // Bevy surface
    // -----------------------------------------------------------------------

    #[test]
    fn test_standard_material_alpha_modes() {
        let solid = standard_material(&PartMaterial::solid(STEEL));
        assert_eq!(solid.alpha_mode, AlphaMode::Opaque);
        let glass = standard_material(&PartMaterial::translucent(STEEL, 0.5));
        assert_eq!(glass.alpha_mode, AlphaMode::Blend);
        assert!((glass.base_color.alpha() - 0.5).abs() < 1e-6);
        let lamp = standard_material(&PartMaterial::glowing(STEEL));
        assert_ne!(lamp.emissive, LinearRgba::BLACK);
    }

    #[test]
    fn test_draw_outside_pass_is_dropped() {
        let mut assets = TestAssets::default();
        let mut surface = assets.surface(DMat4::IDENTITY);
        let model = VehicleKind::Tram.build_instance(STEEL);
        let mesh = surface.upload_mesh(&model.parts[0]);
        let call = DrawCall {
            mesh,
            projection: DMat4::IDENTITY,
            model: Mat4::IDENTITY,
        };
        surface.draw(&call);
        assert!(surface.frame.draws.is_empty());

        surface.reset_state();
        surface.draw(&call);
        surface.restore_state();
        assert_eq!(surface.frame.draws.len(), 1);
        assert!(!surface.frame.in_pass);
    }

    #[test]
    fn test_layers_attach_once_and_release_on_removal() {
        let (flag, host) = host();
        let mut assets = TestAssets::default();
        let mut layers = TransitLayers::default();
        let (layer, _) = AnimatedLayer::new(line_layer_config(LineKey::Gondola)).unwrap();
        layers.add(layer);
        assert_eq!(layers.ids().collect::<Vec<_>>(), ["gondola-3d"]);

        let camera = MapOrigin::default().camera_matrix(clip_from_world());
        let world_from_clip = clip_from_world().inverse();
        let mut lights = Vec::new();
        for _ in 0..3 {
            let mut surface = assets.surface(world_from_clip);
            layers.render_all(&host, &mut surface, &camera);
            lights.append(&mut surface.lights);
        }
        // Lights come with the attach, not with every frame.
        assert_eq!(lights.len(), 2);
        assert!(flag.take());

        let uploaded = assets.registry.entries.len();
        // Cabin parts, pylon parts and the cable.
        assert_eq!(uploaded, 4 + 2 + 1);
        // Five cabins, a pylon per route vertex and the cable, three frames.
        let points = line_layer_config(LineKey::Gondola)
            .route
            .resolve()
            .unwrap()
            .points()
            .len();
        assert_eq!(assets.frame.draws.len(), 3 * (GONDOLA_CABINS * 4 + points * 2 + 1));

        layers.remove_all(&mut assets.surface(DMat4::IDENTITY));
        assert!(layers.is_empty());
        assert!(assets.registry.entries.is_empty());
    }

    #[test]
    fn test_vehicles_land_on_their_route_in_world_space() {
        let origin = MapOrigin::default();
        let (host_flag, host) = host();
        let mut assets = TestAssets::default();
        let config = line_layer_config(LineKey::MetroA);
        let kind = config.kind;
        let (mut layer, _) = AnimatedLayer::new(config).unwrap();

        let clip_from_world = clip_from_world();
        let camera: CameraMatrix = origin.camera_matrix(clip_from_world);
        let mut surface = assets.surface(clip_from_world.inverse());
        layer.on_add(host, &mut surface);
        layer.render(&mut surface, &camera);
        assert_eq!(layer.state(), LayerState::Ready);
        assert!(host_flag.take());

        let parts = kind.build_instance(Color::WHITE).parts;
        let draws = &assets.frame.draws;
        assert_eq!(draws.len(), layer.instance_count() * parts.len());

        let world_from_local = origin.world_from_mercator() * layer.local_frame().anchor_matrix();
        for index in 0..layer.instance_count() {
            let pose = layer.pose(index);
            let instance = pose.transform.compute_matrix();
            for (p, part) in parts.iter().enumerate() {
                let expected = world_from_local
                    * (instance * part.transform.compute_matrix()).as_dmat4();
                let placed = &draws[index * parts.len() + p].transform;
                let error = (placed.translation.as_dvec3() - expected.w_axis.truncate()).length();
                assert!(error < 0.05, "instance {index} part {p} off by {error} m");
                assert!(placed.compute_matrix().determinant() > 0.0);
            }

            // The vehicle rides on the line, lifted by its ride height.
            let ground = origin.to_world(pose.position);
            let center = (world_from_local * instance.as_dmat4()).w_axis.truncate().as_vec3();
            assert!((center.xz() - ground.xz()).length() < 0.05, "got: {center:?}");
            let lift = kind.ride_height() * OBJECT_SCALE as f32;
            assert!((center.y - lift).abs() < 0.01, "got: {center:?}");
        }
    }
}
