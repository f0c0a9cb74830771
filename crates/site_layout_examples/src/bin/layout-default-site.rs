use rand::rngs::StdRng;
use rand::SeedableRng;
use site_layout::prelude::*;
use site_layout_examples::{init_tracing, render_layout_to_png, seed_from_args, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Reference site: 200x140, central plaza, towers A (30x20) and B (20x20).
    let config = SiteConfig::default();
    let runner = LayoutRunner::try_new(config)?;

    let seed = seed_from_args(42);
    let mut rng = StdRng::seed_from_u64(seed);
    let run = runner.run(&mut rng);

    // The adjacency rule is only reported, never enforced.
    let report = LayoutReport::new(&runner.config, &run.buildings);
    println!("seed {seed}, {} attempts\n{report}", run.attempts);

    let rc = RenderConfig::default().with_setback_outline([241, 245, 249]);
    render_layout_to_png(&run.buildings, &runner.config, &rc, "layout-default-site.png")?;

    Ok(())
}
