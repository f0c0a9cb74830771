use rand::rngs::StdRng;
use rand::SeedableRng;
use site_layout::prelude::*;
use site_layout_examples::{init_tracing, render_layout_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Far more buildings than the interior can hold: the run stops at the attempt
    // budget and reports the shortfall instead of failing.
    let config = SiteConfig::default()
        .with_target_count(400)
        .with_max_attempts(20_000)
        .with_min_distance(5.0)
        .with_footprint_weight(TYPE_B, 1.0)?;

    let mut sink = VecSink::only(&[LayoutEventKind::BudgetExhausted]);
    let mut rng = StdRng::seed_from_u64(7);
    let run = generate_with_events(&config, &mut rng, &mut sink);

    let summary = LayoutSummary::new(&config, &run.buildings);
    println!("{summary}");
    println!(
        "rejected: bounds {}, plaza {}, separation {}",
        run.rejected_bounds, run.rejected_plaza, run.rejected_separation
    );
    if let Some(LayoutEvent::BudgetExhausted { placed, target_count, attempts }) =
        sink.as_slice().first()
    {
        println!("budget of {attempts} attempts exhausted at {placed}/{target_count}");
    }

    render_layout_to_png(
        &run.buildings,
        &config,
        &RenderConfig::default(),
        "layout-dense-budget.png",
    )?;

    Ok(())
}
