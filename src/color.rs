use crate::prelude::*;
use std::io::{self, Write};

pub type Color = Vec3;

/// Upper clamp keeps `256 * x` strictly below 256.
const INTENSITY: Interval = Interval::new(0.000, 0.999);

/// Square-root gamma (γ = 2). Non-positive and NaN inputs map to black.
#[inline]
pub fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

/// Averages a radiance sum over `samples_per_pixel` and tone-maps it to bytes.
pub fn to_rgb8(pixel_color: Color, samples_per_pixel: u32) -> [u8; 3] {
    let scale = 1.0 / samples_per_pixel.max(1) as f64;
    let averaged = pixel_color * scale;

    [averaged.x, averaged.y, averaged.z]
        .map(|c| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8)
}

pub fn write_color<W: Write>(out: &mut W, rgb: [u8; 3]) -> io::Result<()> {
    let [r, g, b] = rgb;
    writeln!(out, "{} {} {}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_radiance_saturates_at_255() {
        for samples in [1, 2, 7, 200, 10_000] {
            let sum = Color::splat(1.0) * samples as f64;
            assert_eq!(to_rgb8(sum, samples), [255, 255, 255]);
        }
    }

    #[test]
    fn over_bright_radiance_clamps() {
        assert_eq!(to_rgb8(Color::splat(15.0), 1), [255, 255, 255]);
    }

    #[test]
    fn black_and_invalid_values_map_to_zero() {
        assert_eq!(to_rgb8(Color::zero(), 4), [0, 0, 0]);
        assert_eq!(to_rgb8(Color::new(-1.0, f64::NAN, -0.0), 1), [0, 0, 0]);
    }

    #[test]
    fn gamma_is_square_root() {
        // sqrt(0.25) = 0.5 -> 128
        assert_eq!(to_rgb8(Color::splat(0.25), 1), [128, 128, 128]);
        assert_eq!(to_rgb8(Color::new(1.0, 0.0, 0.0), 4), [128, 0, 0]);
    }

    #[test]
    fn writes_one_line_per_pixel() {
        let mut out = Vec::new();
        write_color(&mut out, [1, 22, 255]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 22 255\n");
    }
}
