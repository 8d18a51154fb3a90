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
    uyvy422_to_yuv420, yuv422_to_uyvy422, yuv422_to_yuyv422, yuyv422_to_yuv420,
    yuyv422_to_yuv422, YuvChromaSubsampling, YuvPackedImage, YuvPlanarImage, YuvPlanarImageMut,
};

fuzz_target!(|data: (u8, u8, u8, u8)| {
    fuzz_yuv_422(data.0, data.1, data.2, data.3);
});

fn fuzz_yuv_422(i_width: u8, i_height: u8, y_value: u8, uv_value: u8) {
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

    let yuy2_stride = width.div_ceil(2) * 4;
    let mut yuy2_plane = vec![0u8; yuy2_stride * height];

    yuv422_to_uyvy422(&planar_image, &mut yuy2_plane, yuy2_stride as u32).unwrap();
    let packed_image = YuvPackedImage {
        yuy: &yuy2_plane,
        yuy_stride: yuy2_stride as u32,
        width: i_width as u32,
        height: i_height as u32,
    };
    let mut target =
        YuvPlanarImageMut::alloc(i_width as u32, i_height as u32, YuvChromaSubsampling::Yuv420);
    uyvy422_to_yuv420(&mut target, &packed_image).unwrap();

    yuv422_to_yuyv422(&planar_image, &mut yuy2_plane, yuy2_stride as u32).unwrap();
    let packed_image = YuvPackedImage {
        yuy: &yuy2_plane,
        yuy_stride: yuy2_stride as u32,
        width: i_width as u32,
        height: i_height as u32,
    };
    yuyv422_to_yuv420(&mut target, &packed_image).unwrap();
    assert!(target.u_plane.borrow().iter().all(|&x| x == uv_value));

    let mut target_422 =
        YuvPlanarImageMut::alloc(i_width as u32, i_height as u32, YuvChromaSubsampling::Yuv422);
    yuyv422_to_yuv422(&mut target_422, &packed_image).unwrap();
    assert_eq!(target_422.y_plane.borrow(), &y_plane[..]);
}
