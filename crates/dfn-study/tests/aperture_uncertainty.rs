//! Aperture uncertainty on the 3x3 grid network.

use std::collections::BTreeMap;

use dfn_core::units::constants::SECONDS_PER_YEAR;
use dfn_fluids::Fluid;
use dfn_network::NetworkTopology;
use dfn_study::{ApertureSampling, ApertureStudy, StudyError};
use dfn_thermal::{ThermalNetwork, ThermalProperties};

fn grid_study(n_sims: usize, relative_sigma: f64) -> ApertureStudy {
    let connectivity = vec![
        (0, 1),
        (1, 2),
        (2, 3),
        (1, 4),
        (2, 5),
        (3, 6),
        (4, 5),
        (5, 6),
        (4, 7),
        (5, 8),
        (6, 9),
        (7, 8),
        (8, 9),
        (9, 10),
    ];
    let n = connectivity.len();
    let mut length = vec![250.0; n];
    length[0] = 100.0;
    length[n - 1] = 100.0;
    let topology = NetworkTopology::new(connectivity, length, vec![500.0; n], vec![1e-3; n]).unwrap();
    let rock = ThermalProperties::from_rock(2.9, 2700.0, 1050.0).unwrap();

    ApertureStudy {
        network: ThermalNetwork::new(topology, rock).unwrap(),
        fluid: Fluid::new(1000.0, 1e-3).with_heat_capacity(4300.0),
        essential_bc: BTreeMap::from([(0, 0.0)]),
        point_sources: BTreeMap::from([(10, -50.0)]),
        segment: 13,
        distance: 100.0,
        time: 17.33 * SECONDS_PER_YEAR,
        sampling: ApertureSampling::new(1e-3, relative_sigma, n_sims, 0),
    }
}

#[test]
fn zero_spread_matches_deterministic_network() {
    let study = grid_study(3, 0.0);

    let mut net = study.network.clone();
    net.calculate_flow(&study.fluid, &study.essential_bc, &study.point_sources, true)
        .unwrap();
    let theta = net
        .calculate_temperature(&study.fluid, 13, &[study.distance], &[study.time])
        .unwrap()[(0, 0)];

    let outcome = study.run().unwrap();
    for sample in &outcome.samples {
        assert!((sample - theta).abs() < 1e-9);
    }
    assert!((outcome.percentiles.p50 - theta).abs() < 1e-9);
}

#[test]
fn independent_of_thread_count() {
    let study = grid_study(64, 0.2);
    let parallel = study.run().unwrap();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap();
    let serial = pool.install(|| study.run()).unwrap();

    assert_eq!(parallel, serial);
}

#[test]
fn spread_grows_with_sigma() {
    let study = grid_study(200, 0.0);
    let outcomes = study.sweep(&[0.05, 0.4]).unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].relative_sigma, 0.05);
    assert!(outcomes[1].percentiles.spread() > outcomes[0].percentiles.spread());
    for outcome in &outcomes {
        assert!(outcome.samples.iter().all(|t| (0.0..=1.0).contains(t)));
    }
}

#[test]
fn unknown_segment_rejected() {
    let mut study = grid_study(1, 0.1);
    study.segment = 14;
    assert!(matches!(
        study.run(),
        Err(StudyError::UnknownSegment { segment: 14, .. })
    ));
}
