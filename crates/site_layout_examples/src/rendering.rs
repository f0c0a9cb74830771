//! PNG rendering of layouts and tracing setup shared by the example binaries.
use std::path::Path;

use glam::Vec2;
use image::{Rgb, RgbImage};
use site_layout::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Colors and scale used to draw a layout.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Pixels per site unit.
    pub scale: u32,
    pub background: [u8; 3],
    pub boundary: [u8; 3],
    pub plaza: [u8; 3],
    pub setback: Option<[u8; 3]>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 4,
            background: [255, 255, 255],
            boundary: [203, 213, 225],
            plaza: [226, 232, 240],
            setback: None,
        }
    }
}

impl RenderConfig {
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn with_background(mut self, color: [u8; 3]) -> Self {
        self.background = color;
        self
    }

    /// Outline the buildable interior in the given color.
    pub fn with_setback_outline(mut self, color: [u8; 3]) -> Self {
        self.setback = Some(color);
        self
    }
}

/// Draws the site boundary, the plaza and every building filled with its footprint color.
pub fn render_layout(
    buildings: &[PlacedBuilding],
    site: &SiteConfig,
    rc: &RenderConfig,
) -> RgbImage {
    let scale = rc.scale as f32;
    let width = (site.width * scale).ceil().max(1.0) as u32;
    let height = (site.height * scale).ceil().max(1.0) as u32;
    let mut img = RgbImage::from_pixel(width, height, Rgb(rc.background));

    fill_rect(&mut img, &site.plaza, scale, rc.plaza);
    if let Some(color) = rc.setback {
        let (min, max) = site.interior();
        let interior = Rect::from_position_size(min.into(), (max - min).max(Vec2::ZERO).into());
        outline_rect(&mut img, &interior, scale, color);
    }

    for b in buildings {
        let color = site
            .footprint(&b.footprint)
            .map_or([64, 64, 64], |f| f.style.color);
        fill_rect(&mut img, &b.rect, scale, color);
        outline_rect(&mut img, &b.rect, scale, darken(color));
        mark_center(&mut img, b.rect.center() * scale, [255, 255, 255]);
    }

    outline_rect(&mut img, &Rect::new(0.0, 0.0, site.width, site.height), scale, rc.boundary);
    img
}

/// Renders a layout and writes it as PNG to `path`.
pub fn render_layout_to_png(
    buildings: &[PlacedBuilding],
    site: &SiteConfig,
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    render_layout(buildings, site, rc).save(path)?;
    tracing::info!("Wrote {}.", path.display());
    Ok(())
}

fn pixel_span(rect: &Rect, scale: f32, img: &RgbImage) -> Option<(u32, u32, u32, u32)> {
    let x0 = (rect.x * scale).floor().max(0.0) as u32;
    let y0 = (rect.y * scale).floor().max(0.0) as u32;
    let x1 = ((rect.right() * scale).ceil() as u32).min(img.width());
    let y1 = ((rect.bottom() * scale).ceil() as u32).min(img.height());
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

fn fill_rect(img: &mut RgbImage, rect: &Rect, scale: f32, color: [u8; 3]) {
    let Some((x0, y0, x1, y1)) = pixel_span(rect, scale, img) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, Rgb(color));
        }
    }
}

fn outline_rect(img: &mut RgbImage, rect: &Rect, scale: f32, color: [u8; 3]) {
    let Some((x0, y0, x1, y1)) = pixel_span(rect, scale, img) else {
        return;
    };
    for x in x0..x1 {
        img.put_pixel(x, y0, Rgb(color));
        img.put_pixel(x, y1 - 1, Rgb(color));
    }
    for y in y0..y1 {
        img.put_pixel(x0, y, Rgb(color));
        img.put_pixel(x1 - 1, y, Rgb(color));
    }
}

fn mark_center(img: &mut RgbImage, p: Vec2, color: [u8; 3]) {
    let cx = p.x as i64;
    let cy = p.y as i64;
    for (dx, dy) in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)] {
        let (x, y) = (cx + dx, cy + dy);
        if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }
}

fn darken(color: [u8; 3]) -> [u8; 3] {
    color.map(|c| (c as u16 * 3 / 4) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_size_follows_scale() {
        let site = SiteConfig::default();
        let img = render_layout(&[], &site, &RenderConfig::default().with_scale(2));
        assert_eq!(img.dimensions(), (400, 280));
    }

    #[test]
    fn buildings_use_footprint_color() {
        let site = SiteConfig::default();
        let a = site.footprint(TYPE_A).unwrap();
        let building = PlacedBuilding::new(a, 10.0, 10.0);
        let img = render_layout(&[building], &site, &RenderConfig::default().with_scale(1));

        assert_eq!(img.get_pixel(15, 15).0, a.style.color);
        assert_eq!(img.get_pixel(100, 70).0, RenderConfig::default().plaza);
        assert_eq!(img.get_pixel(5, 100).0, RenderConfig::default().background);
    }
}
