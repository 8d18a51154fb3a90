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
    pack_argb1555, pack_argb4444, pack_rgb565, read_u16, unpack_argb1555, unpack_argb4444,
    unpack_rgb565, write_u16,
};
use crate::row::permute::{
    permute_bytes, ARGB_TO_RAW, ARGB_TO_RGB24, RAW_TO_ARGB, RGB24_TO_ARGB,
};

/// Lanes of ARGB to and from 24 bit layouts
pub const RGB24_LANES: usize = 16;
/// Lanes of ARGB to and from 16 bit layouts
pub const RGB16_LANES: usize = 8;

#[inline(always)]
fn permute_row_impl<const SRC_GROUP: usize, const DST_GROUP: usize, const N: usize>(
    src: &[u8],
    dst: &mut [u8],
    table: &[u8; N],
    width: usize,
) {
    debug_assert!(width % RGB24_LANES == 0);
    // Each table moves 4 pixels
    let groups = width / 4;
    for (src, dst) in src[..groups * SRC_GROUP]
        .chunks_exact(SRC_GROUP)
        .zip(dst[..groups * DST_GROUP].chunks_exact_mut(DST_GROUP))
    {
        permute_bytes(src, table, dst);
    }
}

#[inline(always)]
fn argb_to_rgb16_impl(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    pack: impl Fn(usize, &[u8]) -> u16,
) {
    debug_assert!(width % RGB16_LANES == 0);
    for (x, (src, dst)) in src[..width * 4]
        .chunks_exact(4)
        .zip(dst[..width * 2].chunks_exact_mut(2))
        .enumerate()
    {
        write_u16(dst, pack(x, src));
    }
}

#[inline(always)]
fn rgb16_to_argb_impl(src: &[u8], dst: &mut [u8], width: usize, unpack: impl Fn(u16) -> [u8; 4]) {
    debug_assert!(width % RGB16_LANES == 0);
    for (src, dst) in src[..width * 2]
        .chunks_exact(2)
        .zip(dst[..width * 4].chunks_exact_mut(4))
    {
        dst.copy_from_slice(&unpack(read_u16(src)));
    }
}

/// Drops alpha, B, G, R, A into B, G, R.
///
/// `width` must be multiple of [RGB24_LANES].
pub fn argb_to_rgb24_row(src_argb: &[u8], dst_rgb24: &mut [u8], width: usize) {
    permute_row_impl::<16, 12, 12>(src_argb, dst_rgb24, &ARGB_TO_RGB24, width);
}

/// Drops alpha and swaps R and B, B, G, R, A into R, G, B.
pub fn argb_to_raw_row(src_argb: &[u8], dst_raw: &mut [u8], width: usize) {
    permute_row_impl::<16, 12, 12>(src_argb, dst_raw, &ARGB_TO_RAW, width);
}

/// Adds opaque alpha, B, G, R into B, G, R, A.
pub fn rgb24_to_argb_row(src_rgb24: &[u8], dst_argb: &mut [u8], width: usize) {
    permute_row_impl::<12, 16, 16>(src_rgb24, dst_argb, &RGB24_TO_ARGB, width);
}

/// Adds opaque alpha and swaps R and B, R, G, B into B, G, R, A.
pub fn raw_to_argb_row(src_raw: &[u8], dst_argb: &mut [u8], width: usize) {
    permute_row_impl::<12, 16, 16>(src_raw, dst_argb, &RAW_TO_ARGB, width);
}

/// Truncates ARGB into RGB565, alpha is dropped.
///
/// # Arguments
///
/// * `src_argb`: Source, at least `width * 4` bytes.
/// * `dst_rgb565`: Destination, at least `width * 2` bytes, little-endian words.
/// * `width`: Pixel count, multiple of [RGB16_LANES].
///
pub fn argb_to_rgb565_row(src_argb: &[u8], dst_rgb565: &mut [u8], width: usize) {
    argb_to_rgb16_impl(src_argb, dst_rgb565, width, |_, p| pack_rgb565(p[0], p[1], p[2]));
}

/// Truncates ARGB into ARGB1555, alpha keeps its top bit.
pub fn argb_to_argb1555_row(src_argb: &[u8], dst_argb1555: &mut [u8], width: usize) {
    argb_to_rgb16_impl(src_argb, dst_argb1555, width, |_, p| {
        pack_argb1555(p[0], p[1], p[2], p[3])
    });
}

/// Truncates ARGB into ARGB4444.
pub fn argb_to_argb4444_row(src_argb: &[u8], dst_argb4444: &mut [u8], width: usize) {
    argb_to_rgb16_impl(src_argb, dst_argb4444, width, |_, p| {
        pack_argb4444(p[0], p[1], p[2], p[3])
    });
}

/// Truncates ARGB into RGB565 with an ordered dither.
///
/// Byte `x & 3` of little-endian `dither4` is added to every channel of
/// pixel `x` with saturation before truncation.
pub fn argb_to_rgb565_dither_row(
    src_argb: &[u8],
    dst_rgb565: &mut [u8],
    dither4: u32,
    width: usize,
) {
    let dither = dither4.to_le_bytes();
    argb_to_rgb16_impl(src_argb, dst_rgb565, width, |x, p| {
        let d = dither[x & 3] as u16;
        pack_rgb565(
            clamp_u8(p[0] as u16 + d),
            clamp_u8(p[1] as u16 + d),
            clamp_u8(p[2] as u16 + d),
        )
    });
}

/// Widens RGB565 into opaque ARGB with bit replication.
///
/// `width` must be multiple of [RGB16_LANES].
pub fn rgb565_to_argb_row(src_rgb565: &[u8], dst_argb: &mut [u8], width: usize) {
    rgb16_to_argb_impl(src_rgb565, dst_argb, width, |v| {
        let [b, g, r] = unpack_rgb565(v);
        [b, g, r, 255]
    });
}

/// Widens ARGB1555 into ARGB, alpha bit becomes 0 or 255.
pub fn argb1555_to_argb_row(src_argb1555: &[u8], dst_argb: &mut [u8], width: usize) {
    rgb16_to_argb_impl(src_argb1555, dst_argb, width, unpack_argb1555);
}

/// Widens ARGB4444 into ARGB by nibble replication.
pub fn argb4444_to_argb_row(src_argb4444: &[u8], dst_argb: &mut [u8], width: usize) {
    rgb16_to_argb_impl(src_argb4444, dst_argb, width, unpack_argb4444);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_row(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random_range(0..=255u8)).collect()
    }

    const WIDTH: usize = 48;

    #[test]
    fn test_rgb24_round_trip_with_opaque_alpha() {
        let mut argb = random_row(WIDTH * 4);
        for pixel in argb.chunks_exact_mut(4) {
            pixel[3] = 255;
        }
        let mut rgb24 = vec![0u8; WIDTH * 3];
        let mut restored = vec![0u8; WIDTH * 4];
        argb_to_rgb24_row(&argb, &mut rgb24, WIDTH);
        rgb24_to_argb_row(&rgb24, &mut restored, WIDTH);
        assert_eq!(restored, argb);

        let mut raw = vec![0u8; WIDTH * 3];
        argb_to_raw_row(&argb, &mut raw, WIDTH);
        assert_eq!(&raw[..3], &[argb[2], argb[1], argb[0]]);
        raw_to_argb_row(&raw, &mut restored, WIDTH);
        assert_eq!(restored, argb);
    }

    #[test]
    fn test_rgb565_idempotent_after_first_pass() {
        let src = random_row(WIDTH * 2);
        let mut argb = vec![0u8; WIDTH * 4];
        let mut packed = vec![0u8; WIDTH * 2];
        rgb565_to_argb_row(&src, &mut argb, WIDTH);
        argb_to_rgb565_row(&argb, &mut packed, WIDTH);
        assert_eq!(packed, src);
        assert!(argb.chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn test_argb1555_and_4444_round_trip() {
        let src = random_row(WIDTH * 2);
        let mut argb = vec![0u8; WIDTH * 4];
        let mut packed = vec![0u8; WIDTH * 2];
        argb1555_to_argb_row(&src, &mut argb, WIDTH);
        assert!(argb.chunks_exact(4).all(|p| p[3] == 0 || p[3] == 255));
        argb_to_argb1555_row(&argb, &mut packed, WIDTH);
        assert_eq!(packed, src);

        argb4444_to_argb_row(&src, &mut argb, WIDTH);
        argb_to_argb4444_row(&argb, &mut packed, WIDTH);
        assert_eq!(packed, src);
    }

    #[test]
    fn test_zero_dither_matches_plain() {
        let argb = random_row(WIDTH * 4);
        let mut plain = vec![0u8; WIDTH * 2];
        let mut dithered = vec![0u8; WIDTH * 2];
        argb_to_rgb565_row(&argb, &mut plain, WIDTH);
        argb_to_rgb565_dither_row(&argb, &mut dithered, 0, WIDTH);
        assert_eq!(plain, dithered);
    }

    #[test]
    fn test_dither_pattern_and_saturation() {
        let mut argb = vec![0u8; WIDTH * 4];
        for (x, pixel) in argb.chunks_exact_mut(4).enumerate() {
            let c = if x < WIDTH / 2 { 4 } else { 254 };
            pixel.copy_from_slice(&[c, c, c, 255]);
        }
        let mut dst = vec![0u8; WIDTH * 2];
        // bytes 0, 4, 0, 4
        argb_to_rgb565_dither_row(&argb, &mut dst, 0x0400_0400, WIDTH);
        for x in 0..WIDTH {
            let word = u16::from_le_bytes([dst[x * 2], dst[x * 2 + 1]]);
            let c: u16 = if x < WIDTH / 2 { 4 } else { 254 };
            let d: u16 = if x & 1 == 1 { 4 } else { 0 };
            let v = (c + d).min(255) as u8;
            assert_eq!(word, pack_rgb565(v, v, v), "Pixel {}", x);
        }
    }
}
