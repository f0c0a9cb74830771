use rand::rngs::StdRng;
use rand::SeedableRng;
use site_layout::prelude::*;

const SEEDS: std::ops::Range<u64> = 0..64;

fn assert_layout_invariants(config: &SiteConfig, buildings: &[PlacedBuilding]) {
    assert!(buildings.len() <= config.target_count);

    for b in buildings {
        let r = &b.rect;
        assert!(r.x >= config.setback, "{b:?} violates left setback");
        assert!(r.y >= config.setback, "{b:?} violates top setback");
        assert!(r.x + r.w <= config.width - config.setback, "{b:?} violates right setback");
        assert!(r.y + r.h <= config.height - config.setback, "{b:?} violates bottom setback");
        assert!(!r.intersects(&config.plaza), "{b:?} intersects the plaza");

        let footprint = config.footprint(&b.footprint).expect("known footprint");
        assert_eq!((r.w, r.h, b.area), (footprint.w, footprint.h, footprint.area));
    }

    for (i, a) in buildings.iter().enumerate() {
        for b in &buildings[i + 1..] {
            assert!(
                squared_gap_distance(&a.rect, &b.rect) >= config.min_distance_sq(),
                "{a:?} and {b:?} are closer than {}",
                config.min_distance
            );
        }
    }
}

#[test]
fn default_site_holds_invariants_across_seeds() {
    let config = SiteConfig::default();
    for seed in SEEDS {
        let buildings = generate(&config, &mut StdRng::seed_from_u64(seed));
        assert!(!buildings.is_empty(), "seed {seed} placed nothing");
        assert_layout_invariants(&config, &buildings);
    }
}

#[test]
fn custom_sites_hold_invariants() {
    let configs = [
        SiteConfig::default()
            .with_min_distance(0.0)
            .with_target_count(200),
        SiteConfig::default()
            .with_setback(0.0)
            .with_plaza(Rect::new(0.0, 0.0, 100.0, 140.0)),
        SiteConfig::new(500.0, 300.0)
            .with_plaza(Rect::new(200.0, 100.0, 100.0, 100.0))
            .with_setback(25.0)
            .with_min_distance(8.0)
            .with_neighbor_distance(40.0)
            .with_target_count(120)
            .with_max_attempts(20_000)
            .with_footprint(Footprint::new("A", 40.0, 25.0, 1000.0).with_weight(2.0))
            .with_footprint(Footprint::new("B", 15.0, 15.0, 225.0))
            .with_footprint(Footprint::new("C", 60.0, 10.0, 500.0).with_weight(0.5)),
    ];
    for config in &configs {
        config.validate().expect("valid config");
        for seed in SEEDS.take(16) {
            let buildings = generate(config, &mut StdRng::seed_from_u64(seed));
            assert_layout_invariants(config, &buildings);
        }
    }
}

#[test]
fn impossible_target_yields_fewer_buildings_without_error() {
    // Interior is 180x120 minus a 40x40 plaza; 1000 footprints cannot fit.
    let config = SiteConfig::default()
        .with_target_count(1000)
        .with_max_attempts(5000);
    for seed in SEEDS.take(8) {
        let run = generate_with_events(&config, &mut StdRng::seed_from_u64(seed), &mut ());
        assert!(run.buildings.len() < config.target_count);
        assert_eq!(run.attempts, config.max_attempts);
        assert_layout_invariants(&config, &run.buildings);
    }
}

#[test]
fn setback_leaving_no_interior_places_nothing() {
    let config = SiteConfig::default().with_setback(80.0);
    let run = generate_with_events(&config, &mut StdRng::seed_from_u64(1), &mut ());
    assert!(run.buildings.is_empty());
    assert_eq!(run.attempts, config.max_attempts);
    assert_eq!(run.rejected_bounds, config.max_attempts);
}

#[test]
fn footprint_larger_than_site_places_nothing() {
    let config = SiteConfig::new(50.0, 50.0)
        .with_target_count(3)
        .with_max_attempts(100)
        .with_footprint(Footprint::new("huge", 80.0, 10.0, 800.0));
    let buildings = generate(&config, &mut StdRng::seed_from_u64(9));
    assert!(buildings.is_empty());
}

#[test]
fn repeated_runs_start_from_empty_accumulator() {
    // Ten times the default area, so ten buildings always fit.
    let config = SiteConfig::default()
        .with_size(2000.0, 1400.0)
        .with_plaza(Rect::new(800.0, 500.0, 400.0, 400.0))
        .with_target_count(10);
    let mut rng = StdRng::seed_from_u64(77);
    let first = generate(&config, &mut rng);

    let mut replay = rng.clone();
    let second = generate(&config, &mut rng);
    let fresh = generate(&config, &mut replay);

    assert_eq!(first.len(), config.target_count);
    assert_eq!(second.len(), config.target_count);
    assert_eq!(second, fresh);
    assert_layout_invariants(&config, &second);
}

#[test]
fn adjacency_verdict_does_not_change_placements() {
    let config = SiteConfig::default();
    let buildings = generate(&config, &mut StdRng::seed_from_u64(2024));
    let verdict = check_neighbor_rule(&buildings, config.neighbor_distance);
    let report = LayoutReport::new(&config, &buildings);

    assert_eq!(report.rule("adjacency").map(|r| r.passed), Some(verdict));
    for name in ["setback", "plaza", "separation"] {
        assert_eq!(report.rule(name).map(|r| r.passed), Some(true), "{name}");
    }
    assert_eq!(report.summary.placed, buildings.len());
    assert_eq!(
        report.summary.count(TYPE_A) + report.summary.count(TYPE_B),
        buildings.len()
    );
}

#[test]
fn event_stream_matches_run_result() {
    let config = SiteConfig::default().with_max_attempts(400);
    let mut sink = VecSink::new();
    let run = generate_with_events(&config, &mut StdRng::seed_from_u64(5), &mut sink);

    let placed: Vec<PlacedBuilding> = sink
        .as_slice()
        .iter()
        .filter_map(|e| match e {
            LayoutEvent::BuildingPlaced { building, .. } => Some(building.clone()),
            _ => None,
        })
        .collect();
    let rejected = sink
        .as_slice()
        .iter()
        .filter(|e| e.kind() == LayoutEventKind::CandidateRejected)
        .count();

    assert_eq!(placed, run.buildings);
    assert_eq!(rejected, run.rejected());
    match sink.as_slice().last() {
        Some(LayoutEvent::RunFinished { run: finished }) => assert_eq!(finished, &run),
        other => panic!("expected RunFinished last, got {other:?}"),
    }
}
