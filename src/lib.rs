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
mod argb_effects;
mod images;
mod numerics;
mod packed_rgb;
mod rgba_to_yuv;
pub mod row;
mod row_handler;
mod sobel;
mod yuv_constants;
mod yuv_error;
mod yuv_nv_to_rgba;
mod yuv_support;
mod yuv_to_rgba;
mod yuv_to_yuy2;
mod yuy2_to_yuv;

pub use yuv_support::YuvChromaSubsampling;
pub use yuv_support::YuvNVOrder;
pub use yuv_support::YuvRange;
pub use yuv_support::YuvStandardMatrix;
pub use yuv_support::RgbLayout;

pub use yuv_constants::YuvConstants;

pub use yuv_error::MismatchedSize;
pub use yuv_error::YuvError;

pub use images::BufferStoreMut;
pub use images::YuvBiPlanarImage;
pub use images::YuvPackedImage;
pub use images::YuvPlanarImage;
pub use images::YuvPlanarImageMut;
pub use images::YuvPlanarImageWithAlpha;

pub use yuv_to_rgba::yuv420_alpha_to_argb;
pub use yuv_to_rgba::yuv420_to_argb;
pub use yuv_to_rgba::yuv420_to_argb1555;
pub use yuv_to_rgba::yuv420_to_argb4444;
pub use yuv_to_rgba::yuv420_to_rgb24;
pub use yuv_to_rgba::yuv420_to_rgb565;
pub use yuv_to_rgba::yuv420_to_rgba;
pub use yuv_to_rgba::yuv422_to_argb;

pub use yuv_nv_to_rgba::yuv_nv12_to_argb;
pub use yuv_nv_to_rgba::yuv_nv12_to_rgb565;
pub use yuv_nv_to_rgba::yuv_nv21_to_argb;

pub use yuv_to_yuy2::yuv422_to_uyvy422;
pub use yuv_to_yuy2::yuv422_to_yuyv422;

pub use yuy2_to_yuv::uyvy422_to_yuv420;
pub use yuy2_to_yuv::uyvy422_to_yuv422;
pub use yuy2_to_yuv::yuyv422_to_yuv420;
pub use yuy2_to_yuv::yuyv422_to_yuv422;

pub use rgba_to_yuv::argb1555_to_yuv420;
pub use rgba_to_yuv::argb_to_yuv420;
pub use rgba_to_yuv::argb_to_yuv444;
pub use rgba_to_yuv::raw_to_yuv420;
pub use rgba_to_yuv::rgb24_to_yuv420;
pub use rgba_to_yuv::rgb565_to_yuv420;

pub use packed_rgb::argb1555_to_argb;
pub use packed_rgb::argb4444_to_argb;
pub use packed_rgb::argb_to_argb1555;
pub use packed_rgb::argb_to_argb4444;
pub use packed_rgb::argb_to_raw;
pub use packed_rgb::argb_to_rgb24;
pub use packed_rgb::argb_to_rgb565;
pub use packed_rgb::argb_to_rgb565_dither;
pub use packed_rgb::raw_to_argb;
pub use packed_rgb::rgb24_to_argb;
pub use packed_rgb::rgb565_to_argb;

pub use argb_effects::argb_add;
pub use argb_effects::argb_attenuate;
pub use argb_effects::argb_gray;
pub use argb_effects::argb_mirror;
pub use argb_effects::argb_multiply;
pub use argb_effects::argb_sepia;
pub use argb_effects::argb_shade;
pub use argb_effects::argb_shuffle;
pub use argb_effects::argb_subtract;
pub use argb_effects::mirror_plane;

pub use sobel::sobel_to_argb;
pub use sobel::sobel_to_plane;
pub use sobel::sobel_xy_to_argb;
pub use sobel::SobelGradients;
