// Renders one frame of every catalog function as a top-down height image.

use graph_core::{FunctionId, GridSpec, ShapeParameters, TransitionState, evaluate_grid};
use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

fn main() {
    let resolution = 256;
    let spec = GridSpec::new(resolution).unwrap();
    let params = ShapeParameters::default();
    let t = 0.4;

    // Low to high: deep blue, teal, sand, white
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.02, 0.05, 0.35)),
        (0.40, LinSrgb::new(0.05, 0.45, 0.55)),
        (0.70, LinSrgb::new(0.85, 0.80, 0.55)),
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)),
    ]);

    for id in FunctionId::ALL {
        let state = TransitionState::new(id);
        let positions = evaluate_grid(spec, &state, &params, t).unwrap();

        // Every catalog surface fits in [-1, 1]³; map y into 0..1 for coloring
        let mut img = RgbImage::new(resolution, resolution);
        for (i, p) in positions.iter().enumerate() {
            let x = i as u32 % resolution;
            let z = i as u32 / resolution;
            let h = ((p.y + 1.0) * 0.5).clamp(0.0, 1.0);
            let col: LinSrgb = gradient.get(h);
            let rgb = col.into_format::<u8>();
            img.put_pixel(x, resolution - 1 - z, Rgb([rgb.red, rgb.green, rgb.blue]));
        }

        let filename = format!("surface_{}.png", id.name().to_lowercase());
        img.save(&filename).unwrap();
        println!("Saved {}", filename);
    }
}
