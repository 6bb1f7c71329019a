//! Dense cosine-basis transform over linear RGB.
//!
//! Both directions are the straightforward O(width * height * nx * ny)
//! sums from the BlurHash definition. Component counts are capped at 9x9
//! and inputs are thumbnail-sized, so there is nothing to gain from an
//! FFT; the only optimization is precomputing the cosine tables per call.
//!
//! Summation order is fixed (x outer, y inner on the forward pass) so
//! that encoded hashes are bit-identical to the reference across
//! platforms with IEEE 754 doubles.

use std::f64::consts::PI;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::{linear_to_srgb, srgb_to_linear};

/// Bytes per pixel in the RGBA buffers this crate consumes and produces.
pub const BYTES_PER_PIXEL: usize = 4;

/// cos_table[i][x] = cos(PI * i * x / extent) for i < components.
fn cosine_table(components: usize, extent: usize) -> Vec<Vec<f64>> {
    (0..components)
        .map(|i| {
            (0..extent)
                .map(|x| (PI * i as f64 * x as f64 / extent as f64).cos())
                .collect()
        })
        .collect()
}

/// Project an RGBA image onto the cosine basis.
///
/// Returns one linear-RGB triplet per basis pair in row-major (j outer,
/// i inner) order; index 0 is the DC (average color) term. The alpha
/// channel is ignored — callers are expected to have flattened
/// transparency onto a background color already.
///
/// `pixels.len()` must be exactly `width * height * 4`; the public
/// [`encode`](crate::encode) entry point validates this before calling.
pub fn multiply_basis(
    pixels: &[u8],
    width: usize,
    height: usize,
    components_x: usize,
    components_y: usize,
) -> Vec<[f64; 3]> {
    debug_assert_eq!(pixels.len(), width * height * BYTES_PER_PIXEL);

    let cos_x = cosine_table(components_x, width);
    let cos_y = cosine_table(components_y, height);

    // Gamma-decode every pixel once up front; each sample is reused by
    // all components.
    let linear: Vec<[f64; 3]> = (0..width * height)
        .map(|idx| {
            let base = idx * BYTES_PER_PIXEL;
            [
                srgb_to_linear(pixels[base]),
                srgb_to_linear(pixels[base + 1]),
                srgb_to_linear(pixels[base + 2]),
            ]
        })
        .collect();

    let scale = 1.0 / (width as f64 * height as f64);
    let project = |component: usize| -> [f64; 3] {
        let j = component / components_x;
        let i = component % components_x;
        let normalisation = if i == 0 && j == 0 { 1.0 } else { 2.0 };

        let mut r = 0.0f64;
        let mut g = 0.0f64;
        let mut b = 0.0f64;
        for x in 0..width {
            let cos_ix = normalisation * cos_x[i][x];
            for y in 0..height {
                let basis = cos_ix * cos_y[j][y];
                let px = &linear[y * width + x];
                r += basis * px[0];
                g += basis * px[1];
                b += basis * px[2];
            }
        }
        [r * scale, g * scale, b * scale]
    };

    let total = components_x * components_y;
    #[cfg(feature = "parallel")]
    {
        (0..total).into_par_iter().map(project).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..total).map(project).collect()
    }
}

/// Reconstruct an RGBA image from cosine-basis triplets.
///
/// `colors` holds `num_x * num_y` triplets in the same row-major order
/// `multiply_basis` produces. Every output pixel gets alpha 255.
pub fn reconstruct(
    colors: &[[f64; 3]],
    num_x: usize,
    num_y: usize,
    width: usize,
    height: usize,
) -> Vec<u8> {
    debug_assert_eq!(colors.len(), num_x * num_y);

    let cos_x = cosine_table(num_x, width);
    let cos_y = cosine_table(num_y, height);

    let render_row = |y: usize, row: &mut [u8]| {
        for x in 0..width {
            let mut r = 0.0f64;
            let mut g = 0.0f64;
            let mut b = 0.0f64;
            for j in 0..num_y {
                let cos_jy = cos_y[j][y];
                for i in 0..num_x {
                    let basis = cos_x[i][x] * cos_jy;
                    let color = &colors[j * num_x + i];
                    r += color[0] * basis;
                    g += color[1] * basis;
                    b += color[2] * basis;
                }
            }
            let idx = x * BYTES_PER_PIXEL;
            row[idx] = linear_to_srgb(r);
            row[idx + 1] = linear_to_srgb(g);
            row[idx + 2] = linear_to_srgb(b);
            row[idx + 3] = 255;
        }
    };

    let mut pixels = vec![0u8; width * height * BYTES_PER_PIXEL];
    #[cfg(feature = "parallel")]
    {
        pixels
            .par_chunks_mut(width * BYTES_PER_PIXEL)
            .enumerate()
            .for_each(|(y, row)| render_row(y, row));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in pixels.chunks_mut(width * BYTES_PER_PIXEL).enumerate() {
            render_row(y, row);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_rgba(width: usize, height: usize, r: u8, g: u8, b: u8) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
        pixels
    }

    #[test]
    fn dc_of_solid_image_is_its_linear_color() {
        let pixels = solid_rgba(8, 8, 128, 64, 32);
        let factors = multiply_basis(&pixels, 8, 8, 3, 3);
        assert_eq!(factors.len(), 9);
        let dc = factors[0];
        assert!((dc[0] - srgb_to_linear(128)).abs() < 1e-9);
        assert!((dc[1] - srgb_to_linear(64)).abs() < 1e-9);
        assert!((dc[2] - srgb_to_linear(32)).abs() < 1e-9);
    }

    #[test]
    fn ac_of_solid_image_vanishes() {
        let pixels = solid_rgba(8, 8, 200, 200, 200);
        let factors = multiply_basis(&pixels, 8, 8, 4, 4);
        for (idx, factor) in factors.iter().enumerate().skip(1) {
            for channel in factor {
                assert!(
                    channel.abs() < 1e-9,
                    "AC component {idx} should vanish, got {channel}"
                );
            }
        }
    }

    #[test]
    fn alpha_is_ignored_on_the_way_in() {
        let opaque = solid_rgba(4, 4, 10, 20, 30);
        let mut transparent = opaque.clone();
        for px in 0..16 {
            transparent[px * 4 + 3] = 0;
        }
        assert_eq!(
            multiply_basis(&opaque, 4, 4, 2, 2),
            multiply_basis(&transparent, 4, 4, 2, 2)
        );
    }

    #[test]
    fn reconstruct_dc_only_is_uniform() {
        let colors = [[srgb_to_linear(77), srgb_to_linear(77), srgb_to_linear(77)]];
        let pixels = reconstruct(&colors, 1, 1, 5, 3);
        assert_eq!(pixels.len(), 5 * 3 * 4);
        for px in pixels.chunks(4) {
            assert_eq!(px, [77, 77, 77, 255]);
        }
    }

    #[test]
    fn reconstruct_sets_alpha_opaque() {
        let colors = [[0.5, 0.1, 0.9], [0.01, -0.02, 0.005]];
        let pixels = reconstruct(&colors, 2, 1, 7, 4);
        for px in pixels.chunks(4) {
            assert_eq!(px[3], 255);
        }
    }
}
