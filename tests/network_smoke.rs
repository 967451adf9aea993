use plexus_engine::{DriverState, Network, NetworkConfig, NetworkCore, Vec3};

#[test]
fn default_network_matches_reference_layout() {
    let network = Network::new();
    assert_eq!(network.particle_count(), 100);
    assert_eq!(network.positions_len(), 300);
    assert_eq!(network.max_connections(), 2000);
    assert_eq!(network.line_positions_len(), 12_000);
    assert_eq!(network.state(), DriverState::Idle);
}

#[test]
fn positions_stay_in_bounds_over_long_run() {
    let config = NetworkConfig { seed: Some(77), ..NetworkConfig::default() };
    let mut core = NetworkCore::with_config(config.clone()).unwrap();
    let max_v = (0..core.particle_count())
        .map(|i| core.particle_velocity(i).unwrap())
        .fold(0.0f32, |m, v| m.max(v.x.abs()).max(v.y.abs()).max(v.z.abs()));

    for _ in 0..3000 {
        core.tick();
        assert!(core
            .positions()
            .iter()
            .all(|p| p.abs() <= config.radius + max_v + 1e-5));
        assert!(core.connection_count() <= core.max_connections());
    }
}

#[test]
fn connections_are_unique_and_within_threshold() {
    let config = NetworkConfig { seed: Some(3), ..NetworkConfig::default() };
    let mut core = NetworkCore::with_config(config.clone()).unwrap();
    for _ in 0..10 {
        core.tick();
    }

    let pairs: Vec<(u32, u32)> = core.connection_pairs().collect();
    assert_eq!(pairs.len(), core.connection_count());
    for (n, &(i, j)) in pairs.iter().enumerate() {
        assert!(i < j);
        assert!(!pairs.contains(&(j, i)));
        let (a, b) = core.connection(n).unwrap();
        assert_eq!(Some(a), core.particle_position(i as usize));
        assert_eq!(Some(b), core.particle_position(j as usize));
        assert!((a - b).length() < config.connection_distance);
    }

    // Every close pair is present when the buffer did not overflow
    if core.overflowed_pairs() == 0 {
        let n = core.particle_count();
        let mut expected = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                let a = core.particle_position(i).unwrap();
                let b = core.particle_position(j).unwrap();
                if (a - b).length() < config.connection_distance {
                    expected += 1;
                }
            }
        }
        assert_eq!(expected, core.connection_count());
    }
}

#[test]
fn facade_end_to_end_two_particles() {
    let mut network =
        Network::from_config(r#"{"count": 2, "connectionDistance": 1.0, "seed": 1}"#.to_string())
            .unwrap();
    assert!(network.set_particle(0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
    assert!(network.set_particle(1, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0));

    assert!(network.tick());
    assert_eq!(network.connection_count(), 1);
    assert_eq!(network.line_draw_count(), 2);
    assert!(network.take_lines_changed());
    assert_eq!(
        network.core().connection(0),
        Some((Vec3::zero(), Vec3::new(0.5, 0.0, 0.0)))
    );

    network.dispose();
    assert!(network.disposed());
    assert!(!network.tick());
}

#[test]
fn config_json_round_trips_through_facade() {
    let mut network = Network::new();
    network
        .load_config(r#"{"count": 64, "radius": 3.0, "seed": 11}"#.to_string())
        .unwrap();
    let json = network.get_config_json();
    let config = NetworkConfig::from_json(&json).unwrap();
    assert_eq!(config.count, 64);
    assert_eq!(config.radius, 3.0);
    assert_eq!(config.seed, Some(11));
    assert_eq!(network.particle_count(), 64);
}
