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
#![forbid(unsafe_code)]
use num_traits::AsPrimitive;

#[inline(always)]
/// Saturating rounding shift right against bit depth
pub(crate) fn qrshr<const PRECISION: i32, const BIT_DEPTH: usize>(val: i32) -> i32 {
    let rounding: i32 = 1 << (PRECISION - 1);
    let max_value: i32 = (1 << BIT_DEPTH) - 1;
    ((val + rounding) >> PRECISION).min(max_value).max(0)
}

#[inline(always)]
/// Arithmetic shift right and saturation into `u8`
pub(crate) fn shr_sat_u8<const PRECISION: i32>(val: i32) -> u8 {
    (val >> PRECISION).clamp(0, 255) as u8
}

#[inline(always)]
/// Saturates any integer intermediate into `u8`
pub(crate) fn clamp_u8<V: AsPrimitive<i32>>(val: V) -> u8 {
    val.as_().clamp(0, 255) as u8
}

#[inline(always)]
/// Rounding half up average of two samples
pub(crate) fn avg_round(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16 + 1) >> 1) as u8
}

#[inline(always)]
/// Places value into both bytes of 16-bit word, turns [0, 255] into [0, 65535] fraction
pub(crate) const fn replicate_u16(v: u8) -> u32 {
    v as u32 * 0x0101
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qrshr_rounds_half_up() {
        assert_eq!(qrshr::<7, 8>(64), 1);
        assert_eq!(qrshr::<7, 8>(63), 0);
        assert_eq!(qrshr::<7, 8>(255 << 7), 255);
        assert_eq!(qrshr::<7, 8>(-500), 0);
        assert_eq!(qrshr::<7, 8>(300 << 7), 255);
    }

    #[test]
    fn test_shr_sat_is_arithmetic() {
        assert_eq!(shr_sat_u8::<6>(-64), 0);
        assert_eq!(shr_sat_u8::<6>(-1), 0);
        assert_eq!(shr_sat_u8::<6>(255 << 6), 255);
        assert_eq!(shr_sat_u8::<6>(256 << 6), 255);
        assert_eq!(shr_sat_u8::<6>(100 << 6 | 63), 100);
    }

    #[test]
    fn test_avg_round() {
        assert_eq!(avg_round(10, 11), 11);
        assert_eq!(avg_round(255, 255), 255);
        assert_eq!(avg_round(0, 1), 1);
        assert_eq!(avg_round(0, 0), 0);
    }

    #[test]
    fn test_clamp_and_replicate() {
        assert_eq!(clamp_u8(-3i32), 0);
        assert_eq!(clamp_u8(512u16), 255);
        assert_eq!(clamp_u8(77u32), 77);
        assert_eq!(replicate_u16(255), 0xFFFF);
        assert_eq!(replicate_u16(0x12), 0x1212);
    }
}
