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
use crate::numerics::{qrshr, replicate_u16};
use crate::row::permute::{permute_bytes, shuffle_table};

/// Lanes of saturating add and subtract
pub const ARGB_ADD_LANES: usize = 8;
/// Lanes of multiply and shade
pub const ARGB_MULTIPLY_LANES: usize = 4;
/// Lanes of attenuate, gray, sepia and shuffle
pub const ARGB_EFFECT_LANES: usize = 8;

#[inline(always)]
fn binary_row_impl<const LANES: usize>(
    src0: &[u8],
    src1: &[u8],
    dst: &mut [u8],
    width: usize,
    op: impl Fn(u8, u8) -> u8,
) {
    debug_assert!(width % LANES == 0);
    let bytes = width * 4;
    for ((src0, src1), dst) in src0[..bytes]
        .chunks_exact(LANES * 4)
        .zip(src1[..bytes].chunks_exact(LANES * 4))
        .zip(dst[..bytes].chunks_exact_mut(LANES * 4))
    {
        for ((&a, &b), dst) in src0.iter().zip(src1.iter()).zip(dst.iter_mut()) {
            *dst = op(a, b);
        }
    }
}

/// Adds two ARGB rows byte by byte with saturation, alpha included.
///
/// `width` must be multiple of [ARGB_ADD_LANES].
pub fn argb_add_row(src_argb0: &[u8], src_argb1: &[u8], dst_argb: &mut [u8], width: usize) {
    binary_row_impl::<ARGB_ADD_LANES>(src_argb0, src_argb1, dst_argb, width, u8::saturating_add);
}

/// Subtracts second ARGB row from the first one with saturation, alpha included.
pub fn argb_subtract_row(src_argb0: &[u8], src_argb1: &[u8], dst_argb: &mut [u8], width: usize) {
    binary_row_impl::<ARGB_ADD_LANES>(src_argb0, src_argb1, dst_argb, width, u8::saturating_sub);
}

/// Multiplies two ARGB rows as fractions of 255, `(a * 0x0101 * b) >> 16`.
///
/// `width` must be multiple of [ARGB_MULTIPLY_LANES].
pub fn argb_multiply_row(src_argb0: &[u8], src_argb1: &[u8], dst_argb: &mut [u8], width: usize) {
    binary_row_impl::<ARGB_MULTIPLY_LANES>(src_argb0, src_argb1, dst_argb, width, |a, b| {
        ((replicate_u16(a) * b as u32) >> 16) as u8
    });
}

/// Premultiplies color channels by the pixel's own alpha.
///
/// Alpha itself is copied from the source unchanged.
///
/// # Arguments
///
/// * `src_argb`: Source, at least `width * 4` bytes.
/// * `dst_argb`: Destination, at least `width * 4` bytes.
/// * `width`: Pixel count, multiple of [ARGB_EFFECT_LANES].
///
pub fn argb_attenuate_row(src_argb: &[u8], dst_argb: &mut [u8], width: usize) {
    debug_assert!(width % ARGB_EFFECT_LANES == 0);
    for (src, dst) in src_argb[..width * 4]
        .chunks_exact(4)
        .zip(dst_argb[..width * 4].chunks_exact_mut(4))
    {
        let a = replicate_u16(src[3]);
        for (&c, dst) in src[..3].iter().zip(dst[..3].iter_mut()) {
            *dst = ((replicate_u16(c) * a) >> 24) as u8;
        }
        dst[3] = src[3];
    }
}

/// Scales every channel by the matching byte of `value`.
///
/// Byte 0 of little-endian `value` scales B, byte 3 scales A, so `0xFFFFFFFF`
/// keeps the row as is.
pub fn argb_shade_row(src_argb: &[u8], dst_argb: &mut [u8], width: usize, value: u32) {
    debug_assert!(width % ARGB_MULTIPLY_LANES == 0);
    let scale = value.to_le_bytes().map(replicate_u16);
    for (src, dst) in src_argb[..width * 4]
        .chunks_exact(4)
        .zip(dst_argb[..width * 4].chunks_exact_mut(4))
    {
        for ((&c, &s), dst) in src.iter().zip(scale.iter()).zip(dst.iter_mut()) {
            *dst = ((replicate_u16(c) * s) >> 24) as u8;
        }
    }
}

/// Replaces color with its luma, `(15B + 75G + 38R + 64) >> 7`, alpha is kept.
pub fn argb_gray_row(src_argb: &[u8], dst_argb: &mut [u8], width: usize) {
    debug_assert!(width % ARGB_EFFECT_LANES == 0);
    for (src, dst) in src_argb[..width * 4]
        .chunks_exact(4)
        .zip(dst_argb[..width * 4].chunks_exact_mut(4))
    {
        let y = qrshr::<7, 8>(15 * src[0] as i32 + 75 * src[1] as i32 + 38 * src[2] as i32) as u8;
        dst.copy_from_slice(&[y, y, y, src[3]]);
    }
}

/// Applies sepia tone in place, alpha is kept.
pub fn argb_sepia_row(dst_argb: &mut [u8], width: usize) {
    debug_assert!(width % ARGB_EFFECT_LANES == 0);
    for pixel in dst_argb[..width * 4].chunks_exact_mut(4) {
        let (b, g, r) = (pixel[0] as u32, pixel[1] as u32, pixel[2] as u32);
        let sb = (17 * b + 68 * g + 35 * r) >> 7;
        let sg = (22 * b + 88 * g + 45 * r) >> 7;
        let sr = (24 * b + 98 * g + 50 * r) >> 7;
        pixel[0] = sb.min(255) as u8;
        pixel[1] = sg.min(255) as u8;
        pixel[2] = sr.min(255) as u8;
    }
}

/// Reorders bytes inside every pixel, `dst[i] = src[shuffler[i]]`.
///
/// Indices are taken modulo 4, `[2, 1, 0, 3]` swaps R and B.
pub fn argb_shuffle_row(src_argb: &[u8], dst_argb: &mut [u8], shuffler: &[u8; 4], width: usize) {
    debug_assert!(width % ARGB_EFFECT_LANES == 0);
    let table = shuffle_table(*shuffler);
    for (src, dst) in src_argb[..width * 4]
        .chunks_exact(16)
        .zip(dst_argb[..width * 4].chunks_exact_mut(16))
    {
        permute_bytes(src, &table, dst);
    }
}
