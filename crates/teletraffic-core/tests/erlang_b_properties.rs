use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use teletraffic_core::{
    blocking_probability, erlangs_offered, estimate_bandwidth_kbps, required_channels,
    BlockingTarget, Codec, ErlangLoad, NetworkLayer,
};

fn load(value: f64) -> ErlangLoad {
    ErlangLoad::new(value).expect("valid load")
}

fn target(value: f64) -> BlockingTarget {
    BlockingTarget::new(value).expect("valid target")
}

#[test]
fn blocking_is_non_increasing_in_channels() {
    let mut rng = StdRng::seed_from_u64(0x0e71_a46b);
    for _ in 0..200 {
        let erlangs = load(rng.gen_range(0.01..300.0));
        let mut previous = blocking_probability(erlangs, 0);
        for channels in 1..=400 {
            let current = blocking_probability(erlangs, channels);
            assert!(
                current <= previous,
                "B({}, {channels}) = {current} rose above {previous}",
                erlangs.value()
            );
            assert!((0.0..=1.0).contains(&current));
            previous = current;
        }
    }
}

#[test]
fn sizing_returns_smallest_channel_count_below_target() {
    let mut rng = StdRng::seed_from_u64(0x5eed_c4a1);
    for _ in 0..300 {
        let erlangs = load(rng.gen_range(0.05..150.0));
        let goal = target(rng.gen_range(0.001..0.5));
        let channels = required_channels(erlangs, goal).expect("search converges");

        assert!(channels >= 1);
        assert!(
            blocking_probability(erlangs, channels) < goal.value() + 1e-12,
            "B({}, {channels}) misses target {}",
            erlangs.value(),
            goal.value()
        );
        for fewer in 0..channels {
            assert!(
                blocking_probability(erlangs, fewer) >= goal.value() - 1e-12,
                "B({}, {fewer}) already meets target {}",
                erlangs.value(),
                goal.value()
            );
        }
    }
}

#[test]
fn recurrences_agree_on_round_trip() {
    let pairs = [
        (5.0, 8),
        (1.0, 2),
        (2.5, 4),
        (10.0, 5),
        (10.0, 12),
        (30.0, 35),
        (50.0, 20),
        (200.0, 60),
    ];
    for (erlangs, channels) in pairs {
        let blocking = blocking_probability(load(erlangs), channels);
        let sized = required_channels(load(erlangs), target(blocking + 0.0001))
            .expect("search converges");
        assert!(
            sized == channels || sized + 1 == channels,
            "L={erlangs} C={channels} sized back to {sized}"
        );
    }
}

#[test]
fn documented_reference_points() {
    assert_eq!(erlangs_offered(60, 0, 60), 1.0);
    assert_eq!(
        estimate_bandwidth_kbps(
            1,
            Codec::G711.profile(),
            NetworkLayer::Ip.overhead_bytes(),
            0
        ),
        80.0
    );
    assert!((blocking_probability(load(10.0), 5) - 0.5640).abs() < 1e-4);
}
