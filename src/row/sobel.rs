/*
 * Copyright (c) Radzivon Bartoshyk, 11/2024. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::row::permute::{permute_bytes, BROADCAST_TO_ARGB};

/// Lanes of sobel compositions into ARGB
pub const SOBEL_LANES: usize = 16;
/// Lanes of sobel composition into a plane
pub const SOBEL_TO_PLANE_LANES: usize = 32;

/// Composes gradient rows into opaque gray ARGB, `s = sat(x + y)` into B, G and R.
///
/// # Arguments
///
/// * `src_sobelx`: Horizontal gradient magnitudes, at least `width` bytes.
/// * `src_sobely`: Vertical gradient magnitudes, at least `width` bytes.
/// * `dst_argb`: Destination, at least `width * 4` bytes.
/// * `width`: Pixel count, multiple of [SOBEL_LANES].
///
pub fn sobel_row(src_sobelx: &[u8], src_sobely: &[u8], dst_argb: &mut [u8], width: usize) {
    debug_assert!(width % SOBEL_LANES == 0);
    for ((x, y), dst) in src_sobelx[..width]
        .chunks_exact(4)
        .zip(src_sobely[..width].chunks_exact(4))
        .zip(dst_argb[..width * 4].chunks_exact_mut(16))
    {
        let mut magnitude = [0u8; 4];
        for ((m, &x), &y) in magnitude.iter_mut().zip(x).zip(y) {
            *m = x.saturating_add(y);
        }
        permute_bytes(&magnitude, &BROADCAST_TO_ARGB, dst);
    }
}

/// Composes gradient rows into a single channel, `sat(x + y)`.
pub fn sobel_to_plane_row(src_sobelx: &[u8], src_sobely: &[u8], dst_y: &mut [u8], width: usize) {
    debug_assert!(width % SOBEL_TO_PLANE_LANES == 0);
    for ((&x, &y), dst) in src_sobelx[..width]
        .iter()
        .zip(src_sobely[..width].iter())
        .zip(dst_y[..width].iter_mut())
    {
        *dst = x.saturating_add(y);
    }
}

/// Composes gradient rows into a two-channel visualization.
///
/// Vertical gradient goes to B, horizontal to R, `sat(x + y)` to both G and A.
pub fn sobel_xy_row(src_sobelx: &[u8], src_sobely: &[u8], dst_argb: &mut [u8], width: usize) {
    debug_assert!(width % SOBEL_LANES == 0);
    for ((&x, &y), dst) in src_sobelx[..width]
        .iter()
        .zip(src_sobely[..width].iter())
        .zip(dst_argb[..width * 4].chunks_exact_mut(4))
    {
        let s = x.saturating_add(y);
        dst.copy_from_slice(&[y, s, x, s]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_row(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random_range(0..=255u8)).collect()
    }

    const WIDTH: usize = 64;

    #[test]
    fn test_sobel_outputs() {
        let gx = random_row(WIDTH);
        let gy = random_row(WIDTH);
        let mut argb = vec![0u8; WIDTH * 4];
        let mut plane = vec![0u8; WIDTH];
        let mut xy = vec![0u8; WIDTH * 4];
        sobel_row(&gx, &gy, &mut argb, WIDTH);
        sobel_to_plane_row(&gx, &gy, &mut plane, WIDTH);
        sobel_xy_row(&gx, &gy, &mut xy, WIDTH);
        for i in 0..WIDTH {
            let s = (gx[i] as u32 + gy[i] as u32).min(255) as u8;
            assert_eq!(plane[i], s);
            assert_eq!(&argb[i * 4..i * 4 + 4], &[s, s, s, 255]);
            assert_eq!(&xy[i * 4..i * 4 + 4], &[gy[i], s, gx[i], s]);
        }
    }

    #[test]
    fn test_sobel_saturates() {
        let g = vec![200u8; WIDTH];
        let mut plane = vec![0u8; WIDTH];
        sobel_to_plane_row(&g, &g, &mut plane, WIDTH);
        assert!(plane.iter().all(|&x| x == 255));
    }
}
