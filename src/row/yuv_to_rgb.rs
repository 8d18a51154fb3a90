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
use crate::row::packing::{pack_argb1555, pack_argb4444, pack_rgb565, write_u16};
use crate::row::permute::{permute_bytes, ARGB_TO_RGB24, SWAP_CHROMA_PAIRS};
use crate::yuv_support::{RgbLayout, YuvNVOrder};
use crate::YuvConstants;

/// Lanes of planar 4:2:2 to 32 and 16 bit packed RGB kernels
pub const I422_TO_ARGB_LANES: usize = 8;
/// Lanes of planar 4:2:2 to RGB24 kernel
pub const I422_TO_RGB24_LANES: usize = 16;
/// Lanes of semi-planar kernels
pub const NV_TO_ARGB_LANES: usize = 8;

#[inline(always)]
fn store_pixel<const DST: u8>(dst: &mut [u8], bgr: [u8; 3], a: u8) {
    let layout: RgbLayout = DST.into();
    dst[layout.get_b_channel_offset()] = bgr[0];
    dst[layout.get_g_channel_offset()] = bgr[1];
    dst[layout.get_r_channel_offset()] = bgr[2];
    if layout.has_alpha() {
        dst[layout.get_a_channel_offset()] = a;
    }
}

/// Walks a 4:2:2 row in batches and hands every converted pixel to `store`
/// together with its column.
#[inline(always)]
fn i422_row_impl<const BPP: usize, F>(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    dst: &mut [u8],
    constants: &YuvConstants,
    width: usize,
    store: F,
) where
    F: Fn(usize, [u8; 3], &mut [u8]),
{
    const LANES: usize = I422_TO_ARGB_LANES;
    debug_assert!(width % LANES == 0, "Width {} is not aligned to {}", width, LANES);
    let chroma_width = width / 2;
    for (batch, (((y_batch, u_batch), v_batch), dst_batch)) in y_row[..width]
        .chunks_exact(LANES)
        .zip(u_row[..chroma_width].chunks_exact(LANES / 2))
        .zip(v_row[..chroma_width].chunks_exact(LANES / 2))
        .zip(dst[..width * BPP].chunks_exact_mut(LANES * BPP))
        .enumerate()
    {
        for (pair, (((y_pair, &u), &v), dst_pair)) in y_batch
            .chunks_exact(2)
            .zip(u_batch.iter())
            .zip(v_batch.iter())
            .zip(dst_batch.chunks_exact_mut(2 * BPP))
            .enumerate()
        {
            let x = batch * LANES + pair * 2;
            let (first, second) = dst_pair.split_at_mut(BPP);
            store(x, constants.yuv_to_bgr(y_pair[0], u, v), first);
            store(x + 1, constants.yuv_to_bgr(y_pair[1], u, v), second);
        }
    }
}

/// Same as 4:2:2 walk, but chroma is interleaved in one row in `ORDER`.
#[inline(always)]
fn nv_row_impl<const ORDER: u8, const BPP: usize, F>(
    y_row: &[u8],
    uv_row: &[u8],
    dst: &mut [u8],
    constants: &YuvConstants,
    width: usize,
    store: F,
) where
    F: Fn([u8; 3], &mut [u8]),
{
    const LANES: usize = NV_TO_ARGB_LANES;
    let order: YuvNVOrder = ORDER.into();
    debug_assert!(width % LANES == 0, "Width {} is not aligned to {}", width, LANES);
    for ((y_batch, uv_batch), dst_batch) in y_row[..width]
        .chunks_exact(LANES)
        .zip(uv_row[..width].chunks_exact(LANES))
        .zip(dst[..width * BPP].chunks_exact_mut(LANES * BPP))
    {
        let mut chroma = [0u8; LANES];
        match order {
            YuvNVOrder::UV => chroma.copy_from_slice(uv_batch),
            YuvNVOrder::VU => permute_bytes(uv_batch, &SWAP_CHROMA_PAIRS, &mut chroma),
        }
        for ((y_pair, uv), dst_pair) in y_batch
            .chunks_exact(2)
            .zip(chroma.chunks_exact(2))
            .zip(dst_batch.chunks_exact_mut(2 * BPP))
        {
            let (first, second) = dst_pair.split_at_mut(BPP);
            store(constants.yuv_to_bgr(y_pair[0], uv[0], uv[1]), first);
            store(constants.yuv_to_bgr(y_pair[1], uv[0], uv[1]), second);
        }
    }
}

/// Converts one row of planar 4:2:2 into ARGB (B, G, R, A in memory) with opaque alpha.
///
/// # Arguments
///
/// * `y_row`: Luma row, at least `width` samples.
/// * `u_row`: U row, at least `width / 2` samples.
/// * `v_row`: V row, at least `width / 2` samples.
/// * `dst_argb`: Destination, at least `width * 4` bytes.
/// * `constants`: Fixed point YUV to RGB table, see [YuvConstants].
/// * `width`: Pixel count, multiple of [I422_TO_ARGB_LANES].
///
pub fn i422_to_argb_row(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    dst_argb: &mut [u8],
    constants: &YuvConstants,
    width: usize,
) {
    i422_row_impl::<4, _>(y_row, u_row, v_row, dst_argb, constants, width, |_, bgr, dst| {
        store_pixel::<{ RgbLayout::Argb as u8 }>(dst, bgr, 255)
    });
}

/// Converts one row of planar 4:2:2 into RGBA (A, B, G, R in memory) with opaque alpha.
///
/// Arguments are the same as [i422_to_argb_row].
pub fn i422_to_rgba_row(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    dst_rgba: &mut [u8],
    constants: &YuvConstants,
    width: usize,
) {
    i422_row_impl::<4, _>(y_row, u_row, v_row, dst_rgba, constants, width, |_, bgr, dst| {
        store_pixel::<{ RgbLayout::Rgba as u8 }>(dst, bgr, 255)
    });
}

/// Converts one row of planar 4:2:2 into ARGB, alpha is taken from `a_row`.
pub fn i422_alpha_to_argb_row(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    a_row: &[u8],
    dst_argb: &mut [u8],
    constants: &YuvConstants,
    width: usize,
) {
    let a_row = &a_row[..width];
    i422_row_impl::<4, _>(y_row, u_row, v_row, dst_argb, constants, width, |x, bgr, dst| {
        store_pixel::<{ RgbLayout::Argb as u8 }>(dst, bgr, a_row[x])
    });
}

/// Converts one row of planar 4:2:2 into RGB24 (B, G, R in memory).
///
/// `width` must be multiple of [I422_TO_RGB24_LANES].
pub fn i422_to_rgb24_row(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    dst_rgb24: &mut [u8],
    constants: &YuvConstants,
    width: usize,
) {
    debug_assert!(width % I422_TO_RGB24_LANES == 0);
    let chroma_width = width / 2;
    for (((y_quad, u_pair), v_pair), dst_quad) in y_row[..width]
        .chunks_exact(4)
        .zip(u_row[..chroma_width].chunks_exact(2))
        .zip(v_row[..chroma_width].chunks_exact(2))
        .zip(dst_rgb24[..width * 3].chunks_exact_mut(12))
    {
        let mut argb = [0u8; 16];
        for (i, pixel) in argb.chunks_exact_mut(4).enumerate() {
            let bgr = constants.yuv_to_bgr(y_quad[i], u_pair[i / 2], v_pair[i / 2]);
            store_pixel::<{ RgbLayout::Argb as u8 }>(pixel, bgr, 255);
        }
        permute_bytes(&argb, &ARGB_TO_RGB24, dst_quad);
    }
}

/// Converts one row of planar 4:2:2 into RGB565.
///
/// `width` must be multiple of [I422_TO_ARGB_LANES], destination holds `width * 2` bytes.
pub fn i422_to_rgb565_row(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    dst_rgb565: &mut [u8],
    constants: &YuvConstants,
    width: usize,
) {
    i422_row_impl::<2, _>(y_row, u_row, v_row, dst_rgb565, constants, width, |_, bgr, dst| {
        write_u16(dst, pack_rgb565(bgr[0], bgr[1], bgr[2]))
    });
}

/// Converts one row of planar 4:2:2 into ARGB4444, alpha nibble is always `0xF`.
pub fn i422_to_argb4444_row(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    dst_argb4444: &mut [u8],
    constants: &YuvConstants,
    width: usize,
) {
    i422_row_impl::<2, _>(
        y_row,
        u_row,
        v_row,
        dst_argb4444,
        constants,
        width,
        |_, bgr, dst| write_u16(dst, pack_argb4444(bgr[0], bgr[1], bgr[2], 255)),
    );
}

/// Converts one row of planar 4:2:2 into ARGB1555, alpha bit is always set.
pub fn i422_to_argb1555_row(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    dst_argb1555: &mut [u8],
    constants: &YuvConstants,
    width: usize,
) {
    i422_row_impl::<2, _>(
        y_row,
        u_row,
        v_row,
        dst_argb1555,
        constants,
        width,
        |_, bgr, dst| write_u16(dst, pack_argb1555(bgr[0], bgr[1], bgr[2], 255)),
    );
}

/// Converts one row of NV12 (luma + interleaved U, V) into ARGB.
///
/// # Arguments
///
/// * `y_row`: Luma row, at least `width` samples.
/// * `uv_row`: Interleaved chroma, at least `width` bytes.
/// * `dst_argb`: Destination, at least `width * 4` bytes.
/// * `width`: Pixel count, multiple of [NV_TO_ARGB_LANES].
///
pub fn nv12_to_argb_row(
    y_row: &[u8],
    uv_row: &[u8],
    dst_argb: &mut [u8],
    constants: &YuvConstants,
    width: usize,
) {
    nv_row_impl::<{ YuvNVOrder::UV as u8 }, 4, _>(
        y_row,
        uv_row,
        dst_argb,
        constants,
        width,
        |bgr, dst| store_pixel::<{ RgbLayout::Argb as u8 }>(dst, bgr, 255),
    );
}

/// Converts one row of NV21 (luma + interleaved V, U) into ARGB.
pub fn nv21_to_argb_row(
    y_row: &[u8],
    vu_row: &[u8],
    dst_argb: &mut [u8],
    constants: &YuvConstants,
    width: usize,
) {
    nv_row_impl::<{ YuvNVOrder::VU as u8 }, 4, _>(
        y_row,
        vu_row,
        dst_argb,
        constants,
        width,
        |bgr, dst| store_pixel::<{ RgbLayout::Argb as u8 }>(dst, bgr, 255),
    );
}

/// Converts one row of NV12 into RGB565.
pub fn nv12_to_rgb565_row(
    y_row: &[u8],
    uv_row: &[u8],
    dst_rgb565: &mut [u8],
    constants: &YuvConstants,
    width: usize,
) {
    nv_row_impl::<{ YuvNVOrder::UV as u8 }, 2, _>(
        y_row,
        uv_row,
        dst_rgb565,
        constants,
        width,
        |bgr, dst| write_u16(dst, pack_rgb565(bgr[0], bgr[1], bgr[2])),
    );
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
    fn test_i422_to_argb_matches_reference() {
        let constants = YuvConstants::BT601;
        let y = random_row(WIDTH);
        let u = random_row(WIDTH / 2);
        let v = random_row(WIDTH / 2);
        let mut argb = vec![0u8; WIDTH * 4];
        i422_to_argb_row(&y, &u, &v, &mut argb, &constants, WIDTH);
        for (x, pixel) in argb.chunks_exact(4).enumerate() {
            let bgr = constants.yuv_to_bgr(y[x], u[x / 2], v[x / 2]);
            assert_eq!(&pixel[..3], &bgr, "Mismatch at {}", x);
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn test_mid_gray_is_white() {
        let constants = YuvConstants::BT601;
        let y = vec![235u8; WIDTH];
        let uv = vec![128u8; WIDTH / 2];
        let mut argb = vec![0u8; WIDTH * 4];
        i422_to_argb_row(&y, &uv, &uv, &mut argb, &constants, WIDTH);
        for &channel in argb.iter() {
            assert!(channel >= 254, "Channel was {}", channel);
        }
    }

    #[test]
    fn test_rgba_order_and_alpha_plane() {
        let constants = YuvConstants::JPEG;
        let y = random_row(WIDTH);
        let u = random_row(WIDTH / 2);
        let v = random_row(WIDTH / 2);
        let a = random_row(WIDTH);
        let mut argb = vec![0u8; WIDTH * 4];
        let mut rgba = vec![0u8; WIDTH * 4];
        let mut alpha_argb = vec![0u8; WIDTH * 4];
        i422_to_argb_row(&y, &u, &v, &mut argb, &constants, WIDTH);
        i422_to_rgba_row(&y, &u, &v, &mut rgba, &constants, WIDTH);
        i422_alpha_to_argb_row(&y, &u, &v, &a, &mut alpha_argb, &constants, WIDTH);
        for x in 0..WIDTH {
            let src = &argb[x * 4..x * 4 + 4];
            assert_eq!(&rgba[x * 4..x * 4 + 4], &[255, src[0], src[1], src[2]]);
            assert_eq!(&alpha_argb[x * 4..x * 4 + 3], &src[..3]);
            assert_eq!(alpha_argb[x * 4 + 3], a[x]);
        }
    }

    #[test]
    fn test_rgb24_and_16_bit_outputs() {
        let constants = YuvConstants::BT709;
        let y = random_row(WIDTH);
        let u = random_row(WIDTH / 2);
        let v = random_row(WIDTH / 2);
        let mut argb = vec![0u8; WIDTH * 4];
        let mut rgb24 = vec![0u8; WIDTH * 3];
        let mut rgb565 = vec![0u8; WIDTH * 2];
        let mut argb4444 = vec![0u8; WIDTH * 2];
        let mut argb1555 = vec![0u8; WIDTH * 2];
        i422_to_argb_row(&y, &u, &v, &mut argb, &constants, WIDTH);
        i422_to_rgb24_row(&y, &u, &v, &mut rgb24, &constants, WIDTH);
        i422_to_rgb565_row(&y, &u, &v, &mut rgb565, &constants, WIDTH);
        i422_to_argb4444_row(&y, &u, &v, &mut argb4444, &constants, WIDTH);
        i422_to_argb1555_row(&y, &u, &v, &mut argb1555, &constants, WIDTH);
        for x in 0..WIDTH {
            let p = &argb[x * 4..x * 4 + 4];
            assert_eq!(&rgb24[x * 3..x * 3 + 3], &p[..3]);
            let w565 = u16::from_le_bytes([rgb565[x * 2], rgb565[x * 2 + 1]]);
            assert_eq!(w565, pack_rgb565(p[0], p[1], p[2]));
            let w4444 = u16::from_le_bytes([argb4444[x * 2], argb4444[x * 2 + 1]]);
            assert_eq!(w4444 >> 12, 0xF);
            assert_eq!(w4444, pack_argb4444(p[0], p[1], p[2], 255));
            let w1555 = u16::from_le_bytes([argb1555[x * 2], argb1555[x * 2 + 1]]);
            assert_eq!(w1555 >> 15, 1);
            assert_eq!(w1555, pack_argb1555(p[0], p[1], p[2], 255));
        }
    }

    #[test]
    fn test_nv_matches_planar() {
        let constants = YuvConstants::BT601;
        let y = random_row(WIDTH);
        let u = random_row(WIDTH / 2);
        let v = random_row(WIDTH / 2);
        let uv: Vec<u8> = u.iter().zip(v.iter()).flat_map(|(&u, &v)| [u, v]).collect();
        let vu: Vec<u8> = u.iter().zip(v.iter()).flat_map(|(&u, &v)| [v, u]).collect();

        let mut planar = vec![0u8; WIDTH * 4];
        let mut nv12 = vec![0u8; WIDTH * 4];
        let mut nv21 = vec![0u8; WIDTH * 4];
        i422_to_argb_row(&y, &u, &v, &mut planar, &constants, WIDTH);
        nv12_to_argb_row(&y, &uv, &mut nv12, &constants, WIDTH);
        nv21_to_argb_row(&y, &vu, &mut nv21, &constants, WIDTH);
        assert_eq!(planar, nv12);
        assert_eq!(planar, nv21);

        let mut planar565 = vec![0u8; WIDTH * 2];
        let mut nv565 = vec![0u8; WIDTH * 2];
        i422_to_rgb565_row(&y, &u, &v, &mut planar565, &constants, WIDTH);
        nv12_to_rgb565_row(&y, &uv, &mut nv565, &constants, WIDTH);
        assert_eq!(planar565, nv565);
    }

    #[test]
    fn test_destination_tail_untouched() {
        let constants = YuvConstants::BT601;
        let y = random_row(WIDTH);
        let uv = random_row(WIDTH / 2);
        let mut argb = vec![0x5Au8; WIDTH * 4 + 8];
        i422_to_argb_row(&y, &uv, &uv, &mut argb, &constants, WIDTH);
        assert!(argb[WIDTH * 4..].iter().all(|&x| x == 0x5A));
    }
}
