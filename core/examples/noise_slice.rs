// Writes z-slices of the gradient noise kernel as grayscale PNGs.

use graph_core::{GradientNoise3, NoiseGenerator};
use image::{GrayImage, Luma};
use std::path::Path;

fn save_slice<N: NoiseGenerator>(generator: &N, size: usize, scale: f32, z: f32, filename: &str) {
    let mut img = GrayImage::new(size as u32, size as u32);
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    let mut data = vec![vec![0.0f32; size]; size];

    // Sample noise over [-scale, scale]²
    for y in 0..size {
        for x in 0..size {
            let fx = (x as f32 / size as f32 * 2.0 - 1.0) * scale;
            let fy = (y as f32 / size as f32 * 2.0 - 1.0) * scale;
            let v = generator.get3(fx, fy, z);
            data[y][x] = v;
            min = min.min(v);
            max = max.max(v);
        }
    }

    for y in 0..size {
        for x in 0..size {
            let v = data[y][x];
            let norm = if (max - min).abs() < f32::EPSILON {
                0.5
            } else {
                (v - min) / (max - min)
            };
            let gray = (norm * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {} (range {:.3}..{:.3})", filename, min, max);
}

fn main() {
    let size = 256;
    let noise = GradientNoise3;
    // Same spatial scale the SimplexNoise surface uses
    save_slice(&noise, size, 1.7, 0.0, "noise3_z0.png");
    save_slice(&noise, size, 1.7, 0.5, "noise3_z05.png");
    // Wider view showing several lattice cells
    save_slice(&noise, size, 8.0, 0.25, "noise3_wide.png");
}
