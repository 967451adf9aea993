use plexus_engine::Network;

#[test]
fn perf_smoke_tick() {
    let mut network = Network::new();
    network.enable_perf_metrics(true);
    network.set_pointer(0.2, -0.3);
    for _ in 0..60 {
        assert!(network.tick());
    }
    let stats = network.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 100);
    assert_eq!(stats.frame(), 60);
    assert!(stats.connections() as usize <= network.max_connections());
}
