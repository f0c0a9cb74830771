//! Rejection-sampling runner that places buildings until the target count is reached or
//! the attempt budget runs out.
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::layout::events::{EventSink, LayoutEvent, LayoutEventKind};
use crate::layout::validator::{check_candidate, Rejection};
use crate::sampling::{draw_position, pick_footprint};
use crate::site::{PlacedBuilding, SiteConfig};

/// Result of one generation run.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutRun {
    /// Accepted buildings in acceptance order.
    pub buildings: Vec<PlacedBuilding>,
    /// Sampling attempts consumed.
    pub attempts: usize,
    /// Candidates rejected by the setback bounds.
    pub rejected_bounds: usize,
    /// Candidates rejected by the plaza.
    pub rejected_plaza: usize,
    /// Candidates rejected for being too close to another building.
    pub rejected_separation: usize,
}

impl LayoutRun {
    /// Creates a new empty [`LayoutRun`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rejected candidates.
    pub fn rejected(&self) -> usize {
        self.rejected_bounds + self.rejected_plaza + self.rejected_separation
    }

    /// Whether the run placed `target_count` buildings.
    pub fn reached(&self, target_count: usize) -> bool {
        self.buildings.len() >= target_count
    }

    fn record(&mut self, reason: Rejection) {
        match reason {
            Rejection::Bounds => self.rejected_bounds += 1,
            Rejection::Plaza => self.rejected_plaza += 1,
            Rejection::Separation { .. } => self.rejected_separation += 1,
        }
    }
}

/// Holds a validated [`SiteConfig`] and runs layouts against it.
pub struct LayoutRunner {
    /// Site configuration applied to every run.
    pub config: SiteConfig,
}

impl LayoutRunner {
    pub fn try_new(config: SiteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: SiteConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "site configuration must be valid"
        );
        Self { config }
    }

    /// Runs one layout, returning the result.
    pub fn run(&self, rng: &mut impl RngCore) -> LayoutRun {
        generate_with_events(&self.config, rng, &mut ())
    }

    pub fn run_with_events(&self, rng: &mut impl RngCore, sink: &mut dyn EventSink) -> LayoutRun {
        generate_with_events(&self.config, rng, sink)
    }
}

/// Places buildings by rejection sampling and returns them in acceptance order.
///
/// Never fails: a configuration too dense for `target_count` yields fewer buildings.
pub fn generate<R: RngCore>(config: &SiteConfig, rng: &mut R) -> Vec<PlacedBuilding> {
    generate_with_events(config, rng, &mut ()).buildings
}

/// Same as [`generate`] but reports progress to `sink` and returns run statistics.
pub fn generate_with_events<R: RngCore>(
    config: &SiteConfig,
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> LayoutRun {
    if sink.wants(LayoutEventKind::RunStarted) {
        sink.send(LayoutEvent::RunStarted {
            target_count: config.target_count,
            max_attempts: config.max_attempts,
            footprints: config.footprints.iter().map(|f| f.id.clone()).collect(),
        });
    }

    let mut run = LayoutRun::new();

    if config.footprints.iter().all(|f| f.weight <= 0.0) {
        warn!("Site has no footprint with positive weight; nothing to place.");
        if sink.wants(LayoutEventKind::Warning) {
            sink.send(LayoutEvent::Warning {
                context: "footprints".into(),
                message: "No footprint with positive weight; nothing to place".into(),
            });
        }
        return finish(run, sink);
    }

    while run.buildings.len() < config.target_count && run.attempts < config.max_attempts {
        run.attempts += 1;

        let Some(footprint) = pick_footprint(&config.footprints, rng) else {
            break;
        };
        let position = draw_position(footprint, config, rng);
        let candidate = PlacedBuilding::new(footprint, position.x, position.y);

        match check_candidate(&candidate.rect, &run.buildings, config) {
            Ok(()) => {
                if sink.wants(LayoutEventKind::BuildingPlaced) {
                    sink.send(LayoutEvent::BuildingPlaced {
                        attempt: run.attempts,
                        index: run.buildings.len(),
                        building: candidate.clone(),
                    });
                }
                run.buildings.push(candidate);
            }
            Err(reason) => {
                run.record(reason);
                if sink.wants(LayoutEventKind::CandidateRejected) {
                    sink.send(LayoutEvent::CandidateRejected {
                        attempt: run.attempts,
                        footprint: footprint.id.clone(),
                        reason,
                    });
                }
            }
        }
    }

    if !run.reached(config.target_count) {
        debug!(
            "Attempt budget of {} exhausted with {}/{} buildings placed.",
            config.max_attempts,
            run.buildings.len(),
            config.target_count
        );
        if sink.wants(LayoutEventKind::BudgetExhausted) {
            sink.send(LayoutEvent::BudgetExhausted {
                placed: run.buildings.len(),
                target_count: config.target_count,
                attempts: run.attempts,
            });
        }
    }

    info!(
        "Layout: {}/{} buildings | attempts: {} | rejected bounds: {}, plaza: {}, separation: {}.",
        run.buildings.len(),
        config.target_count,
        run.attempts,
        run.rejected_bounds,
        run.rejected_plaza,
        run.rejected_separation,
    );

    finish(run, sink)
}

fn finish(run: LayoutRun, sink: &mut dyn EventSink) -> LayoutRun {
    if sink.wants(LayoutEventKind::RunFinished) {
        sink.send(LayoutEvent::RunFinished { run: run.clone() });
    }
    run
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::geometry::Rect;
    use crate::layout::events::VecSink;
    use crate::site::{Footprint, TYPE_A, TYPE_B};

    /// Replays a scripted sequence of uniform draws and counts how many were taken.
    struct ScriptedRng {
        draws: VecDeque<f64>,
        taken: usize,
    }

    impl ScriptedRng {
        fn new(draws: &[f64]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
                taken: 0,
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.taken += 1;
            let u = self.draws.pop_front().unwrap_or(0.0);
            (u * 4_294_967_296.0) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for b in dest.iter_mut() {
                *b = self.next_u32() as u8;
            }
        }
    }

    #[test]
    fn scripted_draws_place_expected_buildings() {
        let config = SiteConfig::default()
            .with_target_count(2)
            .with_max_attempts(10);
        // attempt 1: A at (0.125*170, 0.25*120) = (21.25, 30)
        // attempt 2: B at (0.0, 0.0) -> outside setback
        // attempt 3: B at (0.75*180, 0.75*120) = (135, 90)
        let mut rng = ScriptedRng::new(&[0.5, 0.125, 0.25, 0.25, 0.0, 0.0, 0.25, 0.75, 0.75]);
        let mut sink = VecSink::new();
        let run = generate_with_events(&config, &mut rng, &mut sink);

        assert_eq!(run.attempts, 3);
        assert_eq!(run.rejected_bounds, 1);
        assert_eq!(rng.taken, 9);
        assert_eq!(
            run.buildings,
            vec![
                PlacedBuilding {
                    footprint: TYPE_A.into(),
                    rect: Rect::new(21.25, 30.0, 30.0, 20.0),
                    area: 600.0,
                },
                PlacedBuilding {
                    footprint: TYPE_B.into(),
                    rect: Rect::new(135.0, 90.0, 20.0, 20.0),
                    area: 400.0,
                },
            ]
        );

        let kinds: Vec<_> = sink.as_slice().iter().map(LayoutEvent::kind).collect();
        assert_eq!(
            kinds,
            vec![
                LayoutEventKind::RunStarted,
                LayoutEventKind::BuildingPlaced,
                LayoutEventKind::CandidateRejected,
                LayoutEventKind::BuildingPlaced,
                LayoutEventKind::RunFinished,
            ]
        );
    }

    #[test]
    fn attempts_never_exceed_budget() {
        let config = SiteConfig::default()
            .with_target_count(10_000)
            .with_max_attempts(250);
        let mut rng = StdRng::seed_from_u64(3);
        let run = generate_with_events(&config, &mut rng, &mut ());
        assert_eq!(run.attempts, 250);
        assert_eq!(run.rejected() + run.buildings.len(), run.attempts);
        assert!(run.buildings.len() < 10_000);
    }

    #[test]
    fn zero_target_places_nothing_and_draws_nothing() {
        let config = SiteConfig::default().with_target_count(0);
        let mut rng = ScriptedRng::new(&[]);
        let run = generate_with_events(&config, &mut rng, &mut ());
        assert!(run.buildings.is_empty());
        assert_eq!(run.attempts, 0);
        assert_eq!(rng.taken, 0);
    }

    #[test]
    fn impossible_target_reports_budget_exhaustion() {
        let config = SiteConfig::default()
            .with_target_count(500)
            .with_max_attempts(2000);
        let mut rng = StdRng::seed_from_u64(11);
        let mut sink = VecSink::only(&[LayoutEventKind::BudgetExhausted]);
        let run = generate_with_events(&config, &mut rng, &mut sink);

        assert!(run.buildings.len() < 500);
        match sink.as_slice() {
            [LayoutEvent::BudgetExhausted {
                placed, attempts, ..
            }] => {
                assert_eq!(*placed, run.buildings.len());
                assert_eq!(*attempts, 2000);
            }
            other => panic!("expected a single BudgetExhausted event, got {other:?}"),
        }
    }

    #[test]
    fn zero_weight_footprints_emit_warning() {
        let config = SiteConfig::default()
            .with_footprints(vec![Footprint::new("X", 10.0, 10.0, 100.0).with_weight(0.0)])
            .with_target_count(5)
            .with_max_attempts(5);
        let mut rng = ScriptedRng::new(&[]);
        let mut sink = VecSink::only(&[LayoutEventKind::Warning]);
        let run = generate_with_events(&config, &mut rng, &mut sink);
        assert!(run.buildings.is_empty());
        assert_eq!(run.attempts, 0);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn same_seed_replays_same_layout() {
        let config = SiteConfig::default();
        let a = generate(&config, &mut StdRng::seed_from_u64(42));
        let b = generate(&config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let c = generate(&config, &mut StdRng::seed_from_u64(43));
        assert_ne!(a, c);
    }

    #[test]
    fn runner_rejects_invalid_config() {
        assert!(LayoutRunner::try_new(SiteConfig::default().with_setback(-5.0)).is_err());

        let runner = LayoutRunner::try_new(SiteConfig::default()).expect("valid config");
        let mut rng = StdRng::seed_from_u64(5);
        let run = runner.run(&mut rng);
        assert!(!run.buildings.is_empty());
        assert!(run.buildings.len() <= runner.config.target_count);
    }
}
