use rand::rngs::StdRng;
use rand::SeedableRng;
use site_layout::prelude::*;
use site_layout_examples::{init_tracing, load_site_config, render_layout_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = std::env::args().nth(1).unwrap_or_else(|| {
        concat!(env!("CARGO_MANIFEST_DIR"), "/assets/default_site.ron").to_owned()
    });
    let config = load_site_config(&path)?;

    let mut rng = StdRng::seed_from_u64(2024);
    let buildings = generate(&config, &mut rng);
    let neighbor_rule = check_neighbor_rule(&buildings, config.neighbor_distance);

    println!("{}", LayoutSummary::new(&config, &buildings));
    println!("neighbor rule: {}", if neighbor_rule { "PASS" } else { "FAIL" });

    render_layout_to_png(&buildings, &config, &RenderConfig::default(), "layout-from-ron.png")?;

    Ok(())
}
