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
use crate::numerics::shr_sat_u8;
use crate::yuv_support::{get_kr_kb, get_yuv_range, YuvRange, YuvStandardMatrix};
use crate::YuvError;

/// Fixed point YUV to RGB transform.
///
/// Scales are stored in Q6, luma scale is applied to a byte replicated luma
/// (`Y * 0x0101`) and reduced by 16 bits, so the result of every channel is
/// `clamp(((y_term - chroma_term) + bias) >> 6)`.
///
/// Value is immutable and cheap to copy, kernels only ever take it by reference.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct YuvConstants {
    /// U contribution to B, negated.
    pub ub_scale: i32,
    /// V contribution to R, negated.
    pub vr_scale: i32,
    /// U contribution to G.
    pub ug_scale: i32,
    /// V contribution to G.
    pub vg_scale: i32,
    pub bias_b: i32,
    pub bias_g: i32,
    pub bias_r: i32,
    /// Luma scale applied to `Y * 0x0101`, reduced by `>> 16`.
    pub y_scale: i32,
}

impl YuvConstants {
    /// BT.601 limited range
    pub const BT601: YuvConstants = YuvConstants::from_fixed(18997, -1160, -128, 25, 52, -102);
    /// BT.601 full range as used by JPEG
    pub const JPEG: YuvConstants = YuvConstants::from_fixed(16320, 32, -113, 22, 46, -90);
    /// BT.709 limited range
    pub const BT709: YuvConstants = YuvConstants::from_fixed(18997, -1160, -128, 14, 34, -115);

    /// Assembles a table from Q6 chroma coefficients and luma gain.
    ///
    /// # Arguments
    ///
    /// * `yg`: luma gain, `round(y_coef * 64 * 65536 / 257)`.
    /// * `ygb`: luma bias in Q6, rounding term included.
    /// * `ub`, `ug`, `vg`, `vr`: chroma coefficients in Q6, `ub` and `vr` are negated.
    ///
    pub const fn from_fixed(yg: i32, ygb: i32, ub: i32, ug: i32, vg: i32, vr: i32) -> Self {
        YuvConstants {
            ub_scale: ub,
            vr_scale: vr,
            ug_scale: ug,
            vg_scale: vg,
            bias_b: ub * 128 + ygb,
            bias_g: ug * 128 + vg * 128 + ygb,
            bias_r: vr * 128 + ygb,
            y_scale: yg,
        }
    }

    /// Builds table from Kr, Kb of the given matrix, check
    /// [ITU-R](https://www.itu.int/rec/T-REC-H.273/en) for more info.
    ///
    /// Returns an error when Kr, Kb leave no green weight (`kr + kb >= 1`) or
    /// when any resulting coefficient does not fit into 16 bits.
    pub fn new(range: YuvRange, matrix: YuvStandardMatrix) -> Result<Self, YuvError> {
        let kr_kb = get_kr_kb(matrix);
        let chroma_range = get_yuv_range(range);
        let (kr, kb) = (kr_kb.kr, kr_kb.kb);
        let kg = 1.0f32 - kr - kb;
        if !kr.is_finite() || !kb.is_finite() || kg.is_nan() || kg <= 0f32 {
            return Err(YuvError::InvalidMatrix(kr, kb));
        }
        let range_uv = 255f32 / chroma_range.range_uv as f32;
        let y_coef = 255f32 / chroma_range.range_y as f32;
        let cr_coef = (2f32 * (1f32 - kr)) * range_uv;
        let cb_coef = (2f32 * (1f32 - kb)) * range_uv;
        let g_coeff_1 = (2f32 * ((1f32 - kr) * kr / kg)) * range_uv;
        let g_coeff_2 = (2f32 * ((1f32 - kb) * kb / kg)) * range_uv;

        const PRECISION: f32 = 64.;
        let to_q6 = |v: f32| -> Result<i32, YuvError> {
            let v = (v * PRECISION).round();
            if !(i16::MIN as f32..=i16::MAX as f32).contains(&v) {
                return Err(YuvError::InvalidMatrix(kr, kb));
            }
            Ok(v as i32)
        };
        let yg = (y_coef * PRECISION * 65536f32 / 257f32).round() as i32;
        let ygb =
            (-(y_coef * PRECISION * chroma_range.bias_y as f32) + PRECISION / 2.).round() as i32;
        let ub = -to_q6(cb_coef)?;
        let ug = to_q6(g_coeff_2)?;
        let vg = to_q6(g_coeff_1)?;
        let vr = -to_q6(cr_coef)?;
        Ok(YuvConstants::from_fixed(yg, ygb, ub, ug, vg, vr))
    }

    /// Converts single pixel, returns channels in B, G, R order.
    ///
    /// This is the reference every YUV to RGB row kernel shares.
    #[inline(always)]
    pub fn yuv_to_bgr(&self, y: u8, u: u8, v: u8) -> [u8; 3] {
        let y1 = (y as i32 * 0x0101 * self.y_scale) >> 16;
        let u = u as i32;
        let v = v as i32;
        let b = shr_sat_u8::<6>(y1 - u * self.ub_scale + self.bias_b);
        let g = shr_sat_u8::<6>(y1 - (u * self.ug_scale + v * self.vg_scale) + self.bias_g);
        let r = shr_sat_u8::<6>(y1 - v * self.vr_scale + self.bias_r);
        [b, g, r]
    }
}

impl Default for YuvConstants {
    fn default() -> Self {
        YuvConstants::BT601
    }
}
