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
    argb_add, argb_attenuate, argb_gray, argb_mirror, argb_multiply, argb_sepia, argb_shade,
    argb_shuffle, argb_subtract, mirror_plane, sobel_to_argb, sobel_to_plane, sobel_xy_to_argb,
    SobelGradients,
};

fuzz_target!(|data: (u8, u8, u8, u8, u32, [u8; 4])| {
    fuzz_effects(data.0, data.1, data.2, data.3, data.4, data.5);
});

fn fuzz_effects(i_width: u8, i_height: u8, v0: u8, v1: u8, shade: u32, shuffler: [u8; 4]) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let (width, height) = (i_width as u32, i_height as u32);
    let pixels = i_width as usize * i_height as usize;
    let stride = width * 4;

    let src0 = vec![v0; pixels * 4];
    let src1 = vec![v1; pixels * 4];
    let mut dst = vec![0u8; pixels * 4];

    argb_add(&src0, stride, &src1, stride, &mut dst, stride, width, height).unwrap();
    assert!(dst.iter().all(|&x| x == v0.saturating_add(v1)));
    argb_subtract(&src0, stride, &src1, stride, &mut dst, stride, width, height).unwrap();
    argb_multiply(&src0, stride, &src1, stride, &mut dst, stride, width, height).unwrap();
    argb_attenuate(&src0, stride, &mut dst, stride, width, height).unwrap();
    argb_shade(&src0, stride, &mut dst, stride, width, height, shade).unwrap();
    argb_gray(&src0, stride, &mut dst, stride, width, height).unwrap();
    argb_sepia(&mut dst, stride, width, height).unwrap();
    argb_shuffle(&src0, stride, &mut dst, stride, width, height, &shuffler).unwrap();
    argb_mirror(&src0, stride, &mut dst, stride, width, height).unwrap();
    assert_eq!(src0, dst);

    let plane0 = vec![v0; pixels];
    let plane1 = vec![v1; pixels];
    let mut plane_dst = vec![0u8; pixels];
    mirror_plane(&plane0, width, &mut plane_dst, width, width, height).unwrap();

    let gradients = SobelGradients {
        sobel_x: &plane0,
        sobel_x_stride: width,
        sobel_y: &plane1,
        sobel_y_stride: width,
        width,
        height,
    };
    sobel_to_plane(&gradients, &mut plane_dst, width).unwrap();
    sobel_to_argb(&gradients, &mut dst, stride).unwrap();
    sobel_xy_to_argb(&gradients, &mut dst, stride).unwrap();
}
