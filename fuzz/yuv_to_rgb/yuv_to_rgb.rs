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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuvrow::{
    yuv420_alpha_to_argb, yuv420_to_argb, yuv420_to_argb1555, yuv420_to_argb4444,
    yuv420_to_rgb24, yuv420_to_rgb565, yuv420_to_rgba, yuv422_to_argb, YuvConstants,
    YuvPlanarImage, YuvPlanarImageWithAlpha,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8)| {
    let constants = match data.5 % 3 {
        0 => YuvConstants::BT601,
        1 => YuvConstants::JPEG,
        _ => YuvConstants::BT709,
    };
    fuzz_yuv_420(data.0, data.1, data.2, data.3, data.4, &constants);
    fuzz_yuv_422(data.0, data.1, data.2, data.3, &constants);
});

fn fuzz_yuv_420(
    i_width: u8,
    i_height: u8,
    y_value: u8,
    uv_value: u8,
    a_value: u8,
    constants: &YuvConstants,
) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let width = i_width as usize;
    let height = i_height as usize;
    let y_plane = vec![y_value; width * height];
    let u_plane = vec![uv_value; width.div_ceil(2) * height.div_ceil(2)];
    let v_plane = vec![uv_value; width.div_ceil(2) * height.div_ceil(2)];
    let a_plane = vec![a_value; width * height];

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: i_width as u32,
        u_plane: &u_plane,
        u_stride: (i_width as u32).div_ceil(2),
        v_plane: &v_plane,
        v_stride: (i_width as u32).div_ceil(2),
        width: i_width as u32,
        height: i_height as u32,
    };

    let mut target_argb = vec![0u8; width * height * 4];
    yuv420_to_argb(&planar_image, &mut target_argb, i_width as u32 * 4, constants).unwrap();
    yuv420_to_rgba(&planar_image, &mut target_argb, i_width as u32 * 4, constants).unwrap();

    let mut target_rgb = vec![0u8; width * height * 3];
    yuv420_to_rgb24(&planar_image, &mut target_rgb, i_width as u32 * 3, constants).unwrap();

    let mut target_16 = vec![0u8; width * height * 2];
    yuv420_to_rgb565(&planar_image, &mut target_16, i_width as u32 * 2, constants).unwrap();
    yuv420_to_argb4444(&planar_image, &mut target_16, i_width as u32 * 2, constants).unwrap();
    yuv420_to_argb1555(&planar_image, &mut target_16, i_width as u32 * 2, constants).unwrap();

    let alpha_image = YuvPlanarImageWithAlpha {
        y_plane: &y_plane,
        y_stride: i_width as u32,
        u_plane: &u_plane,
        u_stride: (i_width as u32).div_ceil(2),
        v_plane: &v_plane,
        v_stride: (i_width as u32).div_ceil(2),
        a_plane: &a_plane,
        a_stride: i_width as u32,
        width: i_width as u32,
        height: i_height as u32,
    };
    yuv420_alpha_to_argb(&alpha_image, &mut target_argb, i_width as u32 * 4, constants).unwrap();
    assert!(target_argb.chunks_exact(4).all(|px| px[3] == a_value));
}

fn fuzz_yuv_422(i_width: u8, i_height: u8, y_value: u8, uv_value: u8, constants: &YuvConstants) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let width = i_width as usize;
    let height = i_height as usize;
    let y_plane = vec![y_value; width * height];
    let u_plane = vec![uv_value; width.div_ceil(2) * height];
    let v_plane = vec![uv_value; width.div_ceil(2) * height];

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: i_width as u32,
        u_plane: &u_plane,
        u_stride: (i_width as u32).div_ceil(2),
        v_plane: &v_plane,
        v_stride: (i_width as u32).div_ceil(2),
        width: i_width as u32,
        height: i_height as u32,
    };

    let mut target_argb = vec![0u8; width * height * 4];
    yuv422_to_argb(&planar_image, &mut target_argb, i_width as u32 * 4, constants).unwrap();
}
