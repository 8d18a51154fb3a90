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
use crate::numerics::clamp_u8;
use crate::row::packing::{
    fields_argb1555, fields_rgb565, read_u16, unpack_argb1555, unpack_rgb565,
};
use crate::yuv_support::RgbLayout;

/// Lanes of every RGB to luma kernel
pub const RGB_TO_Y_LANES: usize = 16;
/// Lanes of ARGB to 4:2:0 chroma kernel
pub const ARGB_TO_UV_LANES: usize = 32;
/// Lanes of RGB24, RAW, RGB565 and ARGB1555 to 4:2:0 chroma kernels
pub const RGB_TO_UV_LANES: usize = 16;
/// Lanes of ARGB to 4:4:4 chroma kernel
pub const ARGB_TO_UV444_LANES: usize = 16;

/// BT.601 limited range luma, `(25B + 129G + 66R + 0x1080) >> 8`
#[inline(always)]
pub(crate) fn rgb_to_y(b: u8, g: u8, r: u8) -> u8 {
    ((25 * b as u32 + 129 * g as u32 + 66 * r as u32 + 0x1080) >> 8) as u8
}

/// BT.601 limited range chroma, returns U and V
#[inline(always)]
pub(crate) fn rgb_to_uv(b: u16, g: u16, r: u16) -> (u8, u8) {
    let (b, g, r) = (b as i32, g as i32, r as i32);
    let u = (112 * b - 74 * g - 38 * r + 0x8080) >> 8;
    let v = (112 * r - 94 * g - 18 * b + 0x8080) >> 8;
    (clamp_u8(u), clamp_u8(v))
}

/// Sum of four 5 bit fields scaled to the 8 bit average
#[inline(always)]
const fn widen_sum5(sum: u16) -> u16 {
    (sum << 1) | (sum >> 6)
}

#[inline(always)]
fn rgb_to_y_impl<const SRC: u8>(src: &[u8], dst_y: &mut [u8], width: usize) {
    let layout: RgbLayout = SRC.into();
    let channels = layout.get_channels_count();
    debug_assert!(width % RGB_TO_Y_LANES == 0);
    for (src_batch, y_batch) in src[..width * channels]
        .chunks_exact(RGB_TO_Y_LANES * channels)
        .zip(dst_y[..width].chunks_exact_mut(RGB_TO_Y_LANES))
    {
        for (src, dst) in src_batch.chunks_exact(channels).zip(y_batch.iter_mut()) {
            *dst = rgb_to_y(
                src[layout.get_b_channel_offset()],
                src[layout.get_g_channel_offset()],
                src[layout.get_r_channel_offset()],
            );
        }
    }
}

#[inline(always)]
fn rgb16_to_y_impl(src: &[u8], dst_y: &mut [u8], width: usize, unpack: impl Fn(u16) -> [u8; 3]) {
    debug_assert!(width % RGB_TO_Y_LANES == 0);
    for (src_batch, y_batch) in src[..width * 2]
        .chunks_exact(RGB_TO_Y_LANES * 2)
        .zip(dst_y[..width].chunks_exact_mut(RGB_TO_Y_LANES))
    {
        for (src, dst) in src_batch.chunks_exact(2).zip(y_batch.iter_mut()) {
            let [b, g, r] = unpack(read_u16(src));
            *dst = rgb_to_y(b, g, r);
        }
    }
}

/// Box filters 2x2 block of two rows, then applies chroma matrix.
#[inline(always)]
fn rgb_to_uv_impl<const SRC: u8, const LANES: usize>(
    src: &[u8],
    src_next: &[u8],
    dst_u: &mut [u8],
    dst_v: &mut [u8],
    width: usize,
) {
    let layout: RgbLayout = SRC.into();
    let channels = layout.get_channels_count();
    let (b_pos, g_pos, r_pos) = (
        layout.get_b_channel_offset(),
        layout.get_g_channel_offset(),
        layout.get_r_channel_offset(),
    );
    debug_assert!(width % LANES == 0);
    let chroma_width = width / 2;
    for (((src_batch, next_batch), u_batch), v_batch) in src[..width * channels]
        .chunks_exact(LANES * channels)
        .zip(src_next[..width * channels].chunks_exact(LANES * channels))
        .zip(dst_u[..chroma_width].chunks_exact_mut(LANES / 2))
        .zip(dst_v[..chroma_width].chunks_exact_mut(LANES / 2))
    {
        for (((src, next), u), v) in src_batch
            .chunks_exact(channels * 2)
            .zip(next_batch.chunks_exact(channels * 2))
            .zip(u_batch.iter_mut())
            .zip(v_batch.iter_mut())
        {
            let sum = |pos: usize| -> u16 {
                src[pos] as u16
                    + src[pos + channels] as u16
                    + next[pos] as u16
                    + next[pos + channels] as u16
            };
            (*u, *v) = rgb_to_uv(sum(b_pos) >> 2, sum(g_pos) >> 2, sum(r_pos) >> 2);
        }
    }
}

#[inline(always)]
fn rgb16_to_uv_impl<const GREEN_6_BITS: bool>(
    src: &[u8],
    src_next: &[u8],
    dst_u: &mut [u8],
    dst_v: &mut [u8],
    width: usize,
    fields: impl Fn(u16) -> [u16; 3],
) {
    debug_assert!(width % RGB_TO_UV_LANES == 0);
    let chroma_width = width / 2;
    for (((src, next), u), v) in src[..width * 2]
        .chunks_exact(4)
        .zip(src_next[..width * 2].chunks_exact(4))
        .zip(dst_u[..chroma_width].iter_mut())
        .zip(dst_v[..chroma_width].iter_mut())
    {
        let mut sums = [0u16; 3];
        for word in [
            read_u16(&src[0..2]),
            read_u16(&src[2..4]),
            read_u16(&next[0..2]),
            read_u16(&next[2..4]),
        ] {
            for (sum, field) in sums.iter_mut().zip(fields(word)) {
                *sum += field;
            }
        }
        let [b, g, r] = sums;
        let g = if GREEN_6_BITS { g } else { widen_sum5(g) };
        (*u, *v) = rgb_to_uv(widen_sum5(b), g, widen_sum5(r));
    }
}

/// Computes luma of an ARGB row.
///
/// # Arguments
///
/// * `src_argb`: Source, B, G, R, A in memory, at least `width * 4` bytes.
/// * `dst_y`: Luma destination, at least `width` bytes.
/// * `width`: Pixel count, multiple of [RGB_TO_Y_LANES].
///
pub fn argb_to_y_row(src_argb: &[u8], dst_y: &mut [u8], width: usize) {
    rgb_to_y_impl::<{ RgbLayout::Argb as u8 }>(src_argb, dst_y, width);
}

/// Computes luma of a RGB24 (B, G, R) row.
pub fn rgb24_to_y_row(src_rgb24: &[u8], dst_y: &mut [u8], width: usize) {
    rgb_to_y_impl::<{ RgbLayout::Rgb24 as u8 }>(src_rgb24, dst_y, width);
}

/// Computes luma of a RAW (R, G, B) row.
pub fn raw_to_y_row(src_raw: &[u8], dst_y: &mut [u8], width: usize) {
    rgb_to_y_impl::<{ RgbLayout::Raw as u8 }>(src_raw, dst_y, width);
}

/// Computes luma of a RGB565 row, fields are widened before the transform.
pub fn rgb565_to_y_row(src_rgb565: &[u8], dst_y: &mut [u8], width: usize) {
    rgb16_to_y_impl(src_rgb565, dst_y, width, unpack_rgb565);
}

/// Computes luma of an ARGB1555 row, alpha is ignored.
pub fn argb1555_to_y_row(src_argb1555: &[u8], dst_y: &mut [u8], width: usize) {
    rgb16_to_y_impl(src_argb1555, dst_y, width, |v| {
        let [b, g, r, _] = unpack_argb1555(v);
        [b, g, r]
    });
}

/// Computes 4:2:0 chroma of two adjacent ARGB rows.
///
/// Every output sample is the transform of the truncated mean of a 2x2 block.
///
/// # Arguments
///
/// * `src_argb`: Upper row, at least `width * 4` bytes.
/// * `src_argb_next`: Lower row, at least `width * 4` bytes.
/// * `dst_u`: U destination, at least `width / 2` bytes.
/// * `dst_v`: V destination, at least `width / 2` bytes.
/// * `width`: Pixel count, multiple of [ARGB_TO_UV_LANES].
///
pub fn argb_to_uv_row(
    src_argb: &[u8],
    src_argb_next: &[u8],
    dst_u: &mut [u8],
    dst_v: &mut [u8],
    width: usize,
) {
    rgb_to_uv_impl::<{ RgbLayout::Argb as u8 }, ARGB_TO_UV_LANES>(
        src_argb,
        src_argb_next,
        dst_u,
        dst_v,
        width,
    );
}

/// Computes 4:2:0 chroma of two adjacent RGB24 rows, `width` is multiple of [RGB_TO_UV_LANES].
pub fn rgb24_to_uv_row(
    src_rgb24: &[u8],
    src_rgb24_next: &[u8],
    dst_u: &mut [u8],
    dst_v: &mut [u8],
    width: usize,
) {
    rgb_to_uv_impl::<{ RgbLayout::Rgb24 as u8 }, RGB_TO_UV_LANES>(
        src_rgb24,
        src_rgb24_next,
        dst_u,
        dst_v,
        width,
    );
}

/// Computes 4:2:0 chroma of two adjacent RAW rows, `width` is multiple of [RGB_TO_UV_LANES].
pub fn raw_to_uv_row(
    src_raw: &[u8],
    src_raw_next: &[u8],
    dst_u: &mut [u8],
    dst_v: &mut [u8],
    width: usize,
) {
    rgb_to_uv_impl::<{ RgbLayout::Raw as u8 }, RGB_TO_UV_LANES>(
        src_raw,
        src_raw_next,
        dst_u,
        dst_v,
        width,
    );
}

/// Computes 4:2:0 chroma of two adjacent RGB565 rows.
///
/// Fields are summed at their native depth, 5 bit sums are rescaled with
/// `(sum << 1) | (sum >> 6)`, the 6 bit green sum is already an 8 bit mean.
pub fn rgb565_to_uv_row(
    src_rgb565: &[u8],
    src_rgb565_next: &[u8],
    dst_u: &mut [u8],
    dst_v: &mut [u8],
    width: usize,
) {
    rgb16_to_uv_impl::<true>(src_rgb565, src_rgb565_next, dst_u, dst_v, width, fields_rgb565);
}

/// Computes 4:2:0 chroma of two adjacent ARGB1555 rows.
pub fn argb1555_to_uv_row(
    src_argb1555: &[u8],
    src_argb1555_next: &[u8],
    dst_u: &mut [u8],
    dst_v: &mut [u8],
    width: usize,
) {
    rgb16_to_uv_impl::<false>(
        src_argb1555,
        src_argb1555_next,
        dst_u,
        dst_v,
        width,
        fields_argb1555,
    );
}

/// Computes full resolution chroma of an ARGB row.
pub fn argb_to_uv444_row(src_argb: &[u8], dst_u: &mut [u8], dst_v: &mut [u8], width: usize) {
    debug_assert!(width % ARGB_TO_UV444_LANES == 0);
    for ((src, u), v) in src_argb[..width * 4]
        .chunks_exact(4)
        .zip(dst_u[..width].iter_mut())
        .zip(dst_v[..width].iter_mut())
    {
        (*u, *v) = rgb_to_uv(src[0] as u16, src[1] as u16, src[2] as u16);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::packing::{pack_argb1555, pack_rgb565};
    use rand::Rng;

    fn random_row(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random_range(0..=255u8)).collect()
    }

    const WIDTH: usize = 64;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(rgb_to_y(0, 0, 0), 16);
        assert_eq!(rgb_to_y(255, 255, 255), 235);
    }

    #[test]
    fn test_gray_has_neutral_chroma() {
        for c in 0..=255u16 {
            assert_eq!(rgb_to_uv(c, c, c), (128, 128));
        }
    }

    #[test]
    fn test_y_of_all_8_bit_layouts_agree() {
        let argb = random_row(WIDTH * 4);
        let rgb24: Vec<u8> = argb.chunks_exact(4).flat_map(|p| [p[0], p[1], p[2]]).collect();
        let raw: Vec<u8> = argb.chunks_exact(4).flat_map(|p| [p[2], p[1], p[0]]).collect();
        let mut y0 = vec![0u8; WIDTH];
        let mut y1 = vec![0u8; WIDTH];
        let mut y2 = vec![0u8; WIDTH];
        argb_to_y_row(&argb, &mut y0, WIDTH);
        rgb24_to_y_row(&rgb24, &mut y1, WIDTH);
        raw_to_y_row(&raw, &mut y2, WIDTH);
        for (x, p) in argb.chunks_exact(4).enumerate() {
            let expected =
                (25 * p[0] as u32 + 129 * p[1] as u32 + 66 * p[2] as u32 + 4224) >> 8;
            assert_eq!(y0[x] as u32, expected);
        }
        assert_eq!(y0, y1);
        assert_eq!(y0, y2);
    }

    #[test]
    fn test_y_of_16_bit_layouts() {
        let words: Vec<u16> = random_row(WIDTH * 2)
            .chunks_exact(2)
            .map(|x| u16::from_le_bytes([x[0], x[1]]))
            .collect();
        let bytes: Vec<u8> = words.iter().flat_map(|x| x.to_le_bytes()).collect();
        let mut y565 = vec![0u8; WIDTH];
        let mut y1555 = vec![0u8; WIDTH];
        rgb565_to_y_row(&bytes, &mut y565, WIDTH);
        argb1555_to_y_row(&bytes, &mut y1555, WIDTH);
        for (x, &word) in words.iter().enumerate() {
            let [b, g, r] = unpack_rgb565(word);
            assert_eq!(y565[x], rgb_to_y(b, g, r));
            let [b, g, r, _] = unpack_argb1555(word);
            assert_eq!(y1555[x], rgb_to_y(b, g, r));
        }
    }

    #[test]
    fn test_argb_uv_box_filter() {
        let top = random_row(WIDTH * 4);
        let bottom = random_row(WIDTH * 4);
        let mut u = vec![0u8; WIDTH / 2];
        let mut v = vec![0u8; WIDTH / 2];
        argb_to_uv_row(&top, &bottom, &mut u, &mut v, WIDTH);
        for i in 0..WIDTH / 2 {
            let mean = |c: usize| -> i32 {
                let s = top[i * 8 + c] as i32
                    + top[i * 8 + 4 + c] as i32
                    + bottom[i * 8 + c] as i32
                    + bottom[i * 8 + 4 + c] as i32;
                s / 4
            };
            let (b, g, r) = (mean(0), mean(1), mean(2));
            let expected_u = (112 * b - 74 * g - 38 * r + 32896) >> 8;
            let expected_v = (112 * r - 94 * g - 18 * b + 32896) >> 8;
            assert_eq!(u[i] as i32, expected_u);
            assert_eq!(v[i] as i32, expected_v);
        }
    }

    #[test]
    fn test_uv_of_8_bit_layouts_agree() {
        let top = random_row(WIDTH * 4);
        let bottom = random_row(WIDTH * 4);
        let to_rgb24 = |x: &[u8]| -> Vec<u8> {
            x.chunks_exact(4).flat_map(|p| [p[0], p[1], p[2]]).collect()
        };
        let to_raw = |x: &[u8]| -> Vec<u8> {
            x.chunks_exact(4).flat_map(|p| [p[2], p[1], p[0]]).collect()
        };
        let mut reference = (vec![0u8; WIDTH / 2], vec![0u8; WIDTH / 2]);
        argb_to_uv_row(&top, &bottom, &mut reference.0, &mut reference.1, WIDTH);

        let mut from_rgb24 = (vec![0u8; WIDTH / 2], vec![0u8; WIDTH / 2]);
        rgb24_to_uv_row(
            &to_rgb24(&top),
            &to_rgb24(&bottom),
            &mut from_rgb24.0,
            &mut from_rgb24.1,
            WIDTH,
        );
        assert_eq!(from_rgb24, reference);

        let mut from_raw = (vec![0u8; WIDTH / 2], vec![0u8; WIDTH / 2]);
        raw_to_uv_row(
            &to_raw(&top),
            &to_raw(&bottom),
            &mut from_raw.0,
            &mut from_raw.1,
            WIDTH,
        );
        assert_eq!(from_raw, reference);
    }

    #[test]
    fn test_uv_of_16_bit_layouts() {
        let black565: Vec<u8> = (0..WIDTH)
            .flat_map(|_| pack_rgb565(0, 0, 0).to_le_bytes())
            .collect();
        let mut u = vec![0u8; WIDTH / 2];
        let mut v = vec![0u8; WIDTH / 2];
        rgb565_to_uv_row(&black565, &black565, &mut u, &mut v, WIDTH);
        assert!(u.iter().all(|&x| x == 128));
        assert!(v.iter().all(|&x| x == 128));

        // Pure blue pulls U up and V down
        let blue1555: Vec<u8> = (0..WIDTH)
            .flat_map(|_| pack_argb1555(255, 0, 0, 255).to_le_bytes())
            .collect();
        argb1555_to_uv_row(&blue1555, &blue1555, &mut u, &mut v, WIDTH);
        // sums of 31 widen to 249
        let (expected_u, expected_v) = rgb_to_uv(249, 0, 0);
        assert!(u.iter().all(|&x| x == expected_u));
        assert!(v.iter().all(|&x| x == expected_v));
        assert!(expected_u > 200);
        assert!(expected_v < 128);

        let green565: Vec<u8> = (0..WIDTH)
            .flat_map(|_| pack_rgb565(0, 255, 0).to_le_bytes())
            .collect();
        rgb565_to_uv_row(&green565, &green565, &mut u, &mut v, WIDTH);
        let (expected_u, expected_v) = rgb_to_uv(0, 252, 0);
        assert!(u.iter().all(|&x| x == expected_u));
        assert!(v.iter().all(|&x| x == expected_v));
    }

    #[test]
    fn test_uv444() {
        let argb = random_row(WIDTH * 4);
        let mut u = vec![0u8; WIDTH];
        let mut v = vec![0u8; WIDTH];
        argb_to_uv444_row(&argb, &mut u, &mut v, WIDTH);
        for (x, p) in argb.chunks_exact(4).enumerate() {
            assert_eq!((u[x], v[x]), rgb_to_uv(p[0] as u16, p[1] as u16, p[2] as u16));
        }
    }
}
