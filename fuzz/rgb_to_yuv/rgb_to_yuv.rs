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
    argb1555_to_yuv420, argb_to_yuv420, argb_to_yuv444, raw_to_yuv420, rgb24_to_yuv420,
    rgb565_to_yuv420, YuvChromaSubsampling, YuvPlanarImageMut,
};

fuzz_target!(|data: (u8, u8, u8)| {
    fuzz_rgb_to_yuv(data.0, data.1, data.2);
});

fn fuzz_rgb_to_yuv(i_width: u8, i_height: u8, value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let width = i_width as usize;
    let height = i_height as usize;

    let mut planar_image =
        YuvPlanarImageMut::alloc(i_width as u32, i_height as u32, YuvChromaSubsampling::Yuv420);

    let argb = vec![value; width * height * 4];
    argb_to_yuv420(&mut planar_image, &argb, i_width as u32 * 4).unwrap();

    let rgb = vec![value; width * height * 3];
    rgb24_to_yuv420(&mut planar_image, &rgb, i_width as u32 * 3).unwrap();
    raw_to_yuv420(&mut planar_image, &rgb, i_width as u32 * 3).unwrap();

    let rgb16 = vec![value; width * height * 2];
    rgb565_to_yuv420(&mut planar_image, &rgb16, i_width as u32 * 2).unwrap();
    argb1555_to_yuv420(&mut planar_image, &rgb16, i_width as u32 * 2).unwrap();

    let mut planar_444 =
        YuvPlanarImageMut::alloc(i_width as u32, i_height as u32, YuvChromaSubsampling::Yuv444);
    argb_to_yuv444(&mut planar_444, &argb, i_width as u32 * 4).unwrap();
}
