// Top-down preview of a frame: x/z pick the pixel, y picks the colour.

use graph_core::{Frame, Vec3};
use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

const BACKGROUND: Rgb<u8> = Rgb([18, 18, 24]);

pub struct SnapshotRenderer {
    size: u32,
    gradient: Gradient<LinSrgb>,
}

impl SnapshotRenderer {
    pub fn new(size: u32) -> Self {
        // Low to high: deep blue, teal, sand, white
        let gradient = Gradient::with_domain(vec![
            (0.00, LinSrgb::new(0.02, 0.05, 0.35)),
            (0.40, LinSrgb::new(0.05, 0.45, 0.55)),
            (0.70, LinSrgb::new(0.85, 0.80, 0.55)),
            (1.00, LinSrgb::new(1.0, 1.0, 1.0)),
        ]);
        Self { size, gradient }
    }

    fn color(&self, y: f32, half_extent: f32) -> Rgb<u8> {
        let h = ((y + half_extent) / (2.0 * half_extent)).clamp(0.0, 1.0);
        let col: LinSrgb = self.gradient.get(h);
        let rgb = col.into_format::<u8>();
        Rgb([rgb.red, rgb.green, rgb.blue])
    }

    // Domain coordinate to pixel, z pointing up the image
    fn to_pixel(&self, p: Vec3, half_extent: f32) -> (i64, i64) {
        let scale = self.size as f32 / (2.0 * half_extent);
        let px = ((p.x + half_extent) * scale).floor() as i64;
        let py = ((half_extent - p.z) * scale).floor() as i64;
        (px, py)
    }

    pub fn render(&self, frame: &Frame<'_>) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.size, self.size, BACKGROUND);
        let half_extent = 0.5 * frame.extent;

        // Each point is drawn as a square the size of one cell
        let cell = frame.step / (2.0 * half_extent) * self.size as f32;
        let radius = ((cell * 0.5).ceil() as i64).max(1);

        // Painter's order: higher points cover lower ones
        let mut order: Vec<usize> = (0..frame.positions.len()).collect();
        order.sort_by(|&a, &b| frame.positions[a].y.total_cmp(&frame.positions[b].y));

        let size = self.size as i64;
        for i in order {
            let p = frame.positions[i];
            let color = self.color(p.y, half_extent);
            let (cx, cy) = self.to_pixel(p, half_extent);
            for py in (cy - radius + 1).max(0)..(cy + radius).min(size) {
                for px in (cx - radius + 1).max(0)..(cx + radius).min(size) {
                    img.put_pixel(px as u32, py as u32, color);
                }
            }
        }
        img
    }
}
