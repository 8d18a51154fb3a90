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
    argb1555_to_argb, argb4444_to_argb, argb_to_argb1555, argb_to_argb4444, argb_to_raw,
    argb_to_rgb24, argb_to_rgb565, argb_to_rgb565_dither, raw_to_argb, rgb24_to_argb,
    rgb565_to_argb,
};

fuzz_target!(|data: (u8, u8, u8, u32)| {
    fuzz_packed(data.0, data.1, data.2, data.3);
});

fn fuzz_packed(i_width: u8, i_height: u8, value: u8, dither: u32) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let (width, height) = (i_width as u32, i_height as u32);
    let pixels = i_width as usize * i_height as usize;

    let mut argb = vec![value; pixels * 4];
    let mut rgb = vec![0u8; pixels * 3];
    let mut rgb16 = vec![0u8; pixels * 2];

    argb_to_rgb24(&argb, width * 4, &mut rgb, width * 3, width, height).unwrap();
    rgb24_to_argb(&rgb, width * 3, &mut argb, width * 4, width, height).unwrap();
    argb_to_raw(&argb, width * 4, &mut rgb, width * 3, width, height).unwrap();
    raw_to_argb(&rgb, width * 3, &mut argb, width * 4, width, height).unwrap();

    argb_to_rgb565(&argb, width * 4, &mut rgb16, width * 2, width, height).unwrap();
    rgb565_to_argb(&rgb16, width * 2, &mut argb, width * 4, width, height).unwrap();
    argb_to_argb1555(&argb, width * 4, &mut rgb16, width * 2, width, height).unwrap();
    argb1555_to_argb(&rgb16, width * 2, &mut argb, width * 4, width, height).unwrap();
    argb_to_argb4444(&argb, width * 4, &mut rgb16, width * 2, width, height).unwrap();
    argb4444_to_argb(&rgb16, width * 2, &mut argb, width * 4, width, height).unwrap();

    let matrix = [dither, dither.rotate_left(8), dither.rotate_left(16), dither.rotate_left(24)];
    argb_to_rgb565_dither(&argb, width * 4, &mut rgb16, width * 2, width, height, &matrix)
        .unwrap();
}
