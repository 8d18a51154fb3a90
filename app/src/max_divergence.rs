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
use rand::Rng;
use yuvrow::{
    argb_to_yuv420, yuv420_to_argb, YuvChromaSubsampling, YuvConstants, YuvPlanarImageMut,
};

/// Round trips a solid color image through YUV 420, returns max absolute error per channel
pub(crate) fn matrix(or: u8, og: u8, ob: u8, constants: &YuvConstants) -> (u32, u32, u32) {
    let image_width = 33usize;
    let image_height = 17usize;

    let random_point_x = rand::rng().random_range(0..image_width);
    let random_point_y = rand::rng().random_range(0..image_height);

    const CHANNELS: usize = 4;

    let mut source_argb = vec![0u8; image_width * image_height * CHANNELS];
    for pixel in source_argb.chunks_exact_mut(CHANNELS) {
        pixel.copy_from_slice(&[ob, og, or, 255]);
    }

    let mut planar_image = YuvPlanarImageMut::<u8>::alloc(
        image_width as u32,
        image_height as u32,
        YuvChromaSubsampling::Yuv420,
    );

    argb_to_yuv420(
        &mut planar_image,
        &source_argb,
        image_width as u32 * CHANNELS as u32,
    )
    .unwrap();

    let mut dest_argb = vec![0u8; image_width * image_height * CHANNELS];

    let fixed_planar = planar_image.to_fixed();

    yuv420_to_argb(
        &fixed_planar,
        &mut dest_argb,
        image_width as u32 * CHANNELS as u32,
        constants,
    )
    .unwrap();

    let pixel_points = [
        [0, 0],
        [image_width - 1, image_height - 1],
        [image_width - 1, 0],
        [0, image_height - 1],
        [(image_width - 1) / 2, (image_height - 1) / 2],
        [random_point_x, random_point_y],
    ];

    let mut max_diff = (0u32, 0u32, 0u32);

    for point in &pixel_points {
        let offset = (point[1] * image_width + point[0]) * CHANNELS;
        let b = dest_argb[offset] as i32;
        let g = dest_argb[offset + 1] as i32;
        let r = dest_argb[offset + 2] as i32;
        assert_eq!(dest_argb[offset + 3], 255);

        max_diff.0 = max_diff.0.max((r - or as i32).unsigned_abs());
        max_diff.1 = max_diff.1.max((g - og as i32).unsigned_abs());
        max_diff.2 = max_diff.2.max((b - ob as i32).unsigned_abs());
    }

    max_diff
}

pub(crate) fn check_divergence(constants: &YuvConstants, iterations: usize) -> (u32, u32, u32) {
    let mut max_diff = (0u32, 0u32, 0u32);
    let mut rng = rand::rng();
    for _ in 0..iterations {
        let or = rng.random_range(0..=255u8);
        let og = rng.random_range(0..=255u8);
        let ob = rng.random_range(0..=255u8);
        let diff = matrix(or, og, ob, constants);
        max_diff.0 = max_diff.0.max(diff.0);
        max_diff.1 = max_diff.1.max(diff.1);
        max_diff.2 = max_diff.2.max(diff.2);
    }
    max_diff
}
