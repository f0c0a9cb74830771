use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use site_layout::prelude::*;
use site_layout_examples::{init_tracing, seed_from_args};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SiteConfig::default();
    let runner = LayoutRunner::try_new(config)?;

    // Tally rejections per footprint and reason, and note the attempt of each placement.
    let mut rejections: BTreeMap<(String, String), usize> = BTreeMap::new();
    let mut placed_at: Vec<usize> = Vec::new();
    let mut sink = FnSink::new(|event| match event {
        LayoutEvent::CandidateRejected {
            footprint, reason, ..
        } => {
            let reason = match reason {
                Rejection::Separation { .. } => "separation".to_owned(),
                other => other.to_string(),
            };
            *rejections.entry((footprint, reason)).or_default() += 1;
        }
        LayoutEvent::BuildingPlaced { attempt, .. } => placed_at.push(attempt),
        _ => {}
    });

    let mut rng = StdRng::seed_from_u64(seed_from_args(1));
    let run = runner.run_with_events(&mut rng, &mut sink);

    for ((footprint, reason), n) in &rejections {
        println!("{footprint}: {n:>5} x {reason}");
    }
    if let (Some(first), Some(last)) = (placed_at.first(), placed_at.last()) {
        println!(
            "{} placements between attempt {first} and {last} of {}",
            run.buildings.len(),
            run.attempts
        );
    }

    Ok(())
}
