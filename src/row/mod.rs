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

//! Row kernels.
//!
//! Every kernel converts exactly `width` pixels of one row (or one pair of rows
//! for 4:2:0 chroma) and never allocates. `width` must be a multiple of the
//! kernel's lane constant, tails are completed by the frame level functions.
//! Kernels share no state, so different rows may be converted concurrently.

mod argb_math;
mod mirror;
pub(crate) mod packing;
pub(crate) mod permute;
mod rgb_packed;
pub(crate) mod rgb_to_yuv;
mod sobel;
mod yuv_to_rgb;
mod yuy2;

pub use argb_math::{
    argb_add_row, argb_attenuate_row, argb_gray_row, argb_multiply_row, argb_sepia_row,
    argb_shade_row, argb_shuffle_row, argb_subtract_row, ARGB_ADD_LANES, ARGB_EFFECT_LANES,
    ARGB_MULTIPLY_LANES,
};
pub use mirror::{argb_mirror_row, mirror_row, ARGB_MIRROR_LANES, MIRROR_LANES};
pub use rgb_packed::{
    argb1555_to_argb_row, argb4444_to_argb_row, argb_to_argb1555_row, argb_to_argb4444_row,
    argb_to_raw_row, argb_to_rgb24_row, argb_to_rgb565_dither_row, argb_to_rgb565_row,
    raw_to_argb_row, rgb24_to_argb_row, rgb565_to_argb_row, RGB16_LANES, RGB24_LANES,
};
pub use rgb_to_yuv::{
    argb1555_to_uv_row, argb1555_to_y_row, argb_to_uv444_row, argb_to_uv_row, argb_to_y_row,
    raw_to_uv_row, raw_to_y_row, rgb24_to_uv_row, rgb24_to_y_row, rgb565_to_uv_row,
    rgb565_to_y_row, ARGB_TO_UV444_LANES, ARGB_TO_UV_LANES, RGB_TO_UV_LANES, RGB_TO_Y_LANES,
};
pub use sobel::{sobel_row, sobel_to_plane_row, sobel_xy_row, SOBEL_LANES, SOBEL_TO_PLANE_LANES};
pub use yuv_to_rgb::{
    i422_alpha_to_argb_row, i422_to_argb1555_row, i422_to_argb4444_row, i422_to_argb_row,
    i422_to_rgb24_row, i422_to_rgb565_row, i422_to_rgba_row, nv12_to_argb_row,
    nv12_to_rgb565_row, nv21_to_argb_row, I422_TO_ARGB_LANES, I422_TO_RGB24_LANES,
    NV_TO_ARGB_LANES,
};
pub use yuy2::{
    i422_to_uyvy_row, i422_to_yuy2_row, uyvy_to_uv422_row, uyvy_to_uv_row, uyvy_to_y_row,
    yuy2_to_uv422_row, yuy2_to_uv_row, yuy2_to_y_row, YUY2_LANES,
};
