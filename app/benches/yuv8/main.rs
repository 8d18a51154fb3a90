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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuvrow::{
    argb_attenuate, argb_mirror, argb_to_rgb565, argb_to_yuv420, yuv420_to_argb,
    yuyv422_to_yuv420, YuvChromaSubsampling, YuvConstants, YuvPackedImage, YuvPlanarImageMut,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1919u32;
    let height = 1081u32;
    let mut rng = rand::rng();
    let argb: Vec<u8> = (0..width as usize * height as usize * 4)
        .map(|_| rng.random_range(0..=255u8))
        .collect();
    let stride = width * 4;

    let mut planar_image =
        YuvPlanarImageMut::<u8>::alloc(width, height, YuvChromaSubsampling::Yuv420);
    argb_to_yuv420(&mut planar_image, &argb, stride).unwrap();

    c.bench_function("yuvrow ARGB -> YUV 4:2:0", |b| {
        let mut planar_image =
            YuvPlanarImageMut::<u8>::alloc(width, height, YuvChromaSubsampling::Yuv420);
        b.iter(|| {
            argb_to_yuv420(&mut planar_image, &argb, stride).unwrap();
        })
    });

    c.bench_function("yuvrow YUV 4:2:0 -> ARGB", |b| {
        let fixed = planar_image.to_fixed();
        let mut target = vec![0u8; argb.len()];
        b.iter(|| {
            yuv420_to_argb(&fixed, &mut target, stride, &YuvConstants::BT601).unwrap();
        })
    });

    let yuy2_stride = width.div_ceil(2) * 4;
    let yuy2: Vec<u8> = (0..yuy2_stride as usize * height as usize)
        .map(|_| rng.random_range(0..=255u8))
        .collect();

    c.bench_function("yuvrow YUYV -> YUV 4:2:0", |b| {
        let packed_image = YuvPackedImage {
            yuy: &yuy2,
            yuy_stride: yuy2_stride,
            width,
            height,
        };
        let mut planar_image =
            YuvPlanarImageMut::<u8>::alloc(width, height, YuvChromaSubsampling::Yuv420);
        b.iter(|| {
            yuyv422_to_yuv420(&mut planar_image, &packed_image).unwrap();
        })
    });

    c.bench_function("yuvrow ARGB -> RGB565", |b| {
        let mut target = vec![0u8; width as usize * height as usize * 2];
        b.iter(|| {
            argb_to_rgb565(&argb, stride, &mut target, width * 2, width, height).unwrap();
        })
    });

    c.bench_function("yuvrow ARGB attenuate", |b| {
        let mut target = vec![0u8; argb.len()];
        b.iter(|| {
            argb_attenuate(&argb, stride, &mut target, stride, width, height).unwrap();
        })
    });

    c.bench_function("yuvrow ARGB mirror", |b| {
        let mut target = vec![0u8; argb.len()];
        b.iter(|| {
            argb_mirror(&argb, stride, &mut target, stride, width, height).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
