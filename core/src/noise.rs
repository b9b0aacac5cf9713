// Classic 3D gradient noise over a fixed permutation table.
// There is no seed: the same input always lands on the same lattice hashes,
// so the output is reproducible bit for bit.

// Ken Perlin's reference permutation of 0..=255
#[rustfmt::skip]
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30,
    69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94,
    252, 219, 203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171,
    168, 68, 175, 74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60,
    211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1,
    216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86,
    164, 100, 109, 198, 173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118,
    126, 255, 82, 85, 212, 207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170,
    213, 119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39,
    253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34,
    242, 193, 238, 210, 144, 12, 191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49,
    192, 214, 31, 181, 199, 106, 157, 184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254,
    138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

// Duplicated into 512 entries so `perm[i + 1]` never needs a wrap
const PERM: [u8; 512] = {
    let mut perm = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        perm[i] = PERMUTATION[i & 255];
        i += 1;
    }
    perm
};

// Edge midpoints of the unit cube
const GRAD3: [[f32; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Anything that can be sampled as a 3D scalar field.
pub trait NoiseGenerator {
    fn get3(&self, x: f32, y: f32, z: f32) -> f32;
}

/// Zero-sized handle on [`noise3`], for code that is generic over the kernel.
#[derive(Debug, Default, Clone, Copy)]
pub struct GradientNoise3;

impl NoiseGenerator for GradientNoise3 {
    #[inline]
    fn get3(&self, x: f32, y: f32, z: f32) -> f32 {
        noise3(x, y, z)
    }
}

// Fade function 6t^5 − 15t^4 + 10t^3
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (6.0 * t - 15.0) + 10.0)
}

#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

#[inline]
fn dot(g: [f32; 3], x: f32, y: f32, z: f32) -> f32 {
    g[0] * x + g[1] * y + g[2] * z
}

#[inline]
fn hash(x: usize, y: usize, z: usize) -> usize {
    PERM[x + PERM[y + PERM[z] as usize] as usize] as usize % 12
}

/// Single-octave gradient noise at `(x, y, z)`.
///
/// Not normalized. For this gradient set the result stays roughly inside
/// `[-1, 1]`; callers scale it themselves.
pub fn noise3(x: f32, y: f32, z: f32) -> f32 {
    // Lattice cell. floor() rather than a cast so that -0.5 lands in cell -1
    let cx = x.floor();
    let cy = y.floor();
    let cz = z.floor();

    // Relative coordinates within the cell
    let xf = x - cx;
    let yf = y - cy;
    let zf = z - cz;

    let xi = (cx as i32 & 255) as usize;
    let yi = (cy as i32 & 255) as usize;
    let zi = (cz as i32 & 255) as usize;

    // Gradient index at each corner
    let g000 = hash(xi, yi, zi);
    let g001 = hash(xi, yi, zi + 1);
    let g010 = hash(xi, yi + 1, zi);
    let g011 = hash(xi, yi + 1, zi + 1);
    let g100 = hash(xi + 1, yi, zi);
    let g101 = hash(xi + 1, yi, zi + 1);
    let g110 = hash(xi + 1, yi + 1, zi);
    let g111 = hash(xi + 1, yi + 1, zi + 1);

    // Corner contributions
    let n000 = dot(GRAD3[g000], xf, yf, zf);
    let n100 = dot(GRAD3[g100], xf - 1.0, yf, zf);
    let n010 = dot(GRAD3[g010], xf, yf - 1.0, zf);
    let n110 = dot(GRAD3[g110], xf - 1.0, yf - 1.0, zf);
    let n001 = dot(GRAD3[g001], xf, yf, zf - 1.0);
    let n101 = dot(GRAD3[g101], xf - 1.0, yf, zf - 1.0);
    let n011 = dot(GRAD3[g011], xf, yf - 1.0, zf - 1.0);
    let n111 = dot(GRAD3[g111], xf - 1.0, yf - 1.0, zf - 1.0);

    let u = fade(xf);
    let v = fade(yf);
    let w = fade(zf);

    // Along x
    let nx00 = mix(n000, n100, u);
    let nx01 = mix(n001, n101, u);
    let nx10 = mix(n010, n110, u);
    let nx11 = mix(n011, n111, u);
    // Along y
    let nxy0 = mix(nx00, nx10, v);
    let nxy1 = mix(nx01, nx11, v);
    // Along z
    mix(nxy0, nxy1, w)
}

#[cfg(test)]
mod tests {
    use super::{GradientNoise3, NoiseGenerator, PERM, fade, noise3};

    #[test]
    fn noise3_determinism() {
        let a = noise3(1.23, 4.56, 7.89);
        let b = noise3(1.23, 4.56, 7.89);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn noise3_zero_on_lattice_points() {
        // Every corner offset is zero at an integer point
        for &(x, y, z) in &[(0.0, 0.0, 0.0), (3.0, -2.0, 7.0), (-1.0, -1.0, -1.0)] {
            assert_eq!(noise3(x, y, z), 0.0);
        }
    }

    #[test]
    fn noise3_range() {
        let mut p = 0.0f32;
        for i in 0..2000 {
            p += 0.173;
            let v = noise3(p, -p * 0.7, (i as f32) * 0.031);
            assert!(v.is_finite());
            assert!(v >= -1.1 && v <= 1.1, "value {} out of expected range", v);
        }
    }

    #[test]
    fn noise3_floors_negative_coordinates() {
        // Right below zero the lattice cell is -1. With a truncating cast the
        // fractional part would go negative and the field would jump at 0.
        let below = noise3(-1e-4, 0.3, 0.6);
        let above = noise3(1e-4, 0.3, 0.6);
        assert!((below - above).abs() < 1e-2);
    }

    #[test]
    fn noise3_wraps_every_256_cells() {
        let a = noise3(0.25, 0.5, 0.75);
        let b = noise3(256.25, 0.5, 0.75);
        assert!((a - b).abs() < 1e-3);
    }

    #[test]
    fn perm_is_doubled() {
        for i in 0..256 {
            assert_eq!(PERM[i], PERM[i + 256]);
        }
    }

    #[test]
    fn fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn generator_matches_free_function() {
        let g = GradientNoise3;
        assert_eq!(g.get3(0.4, -2.2, 9.1).to_bits(), noise3(0.4, -2.2, 9.1).to_bits());
    }
}
