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
use crate::images::YuvPlanarImageMut;
use crate::row::{
    argb1555_to_uv_row, argb1555_to_y_row, argb_to_uv444_row, argb_to_uv_row, argb_to_y_row,
    raw_to_uv_row, raw_to_y_row, rgb24_to_uv_row, rgb24_to_y_row, rgb565_to_uv_row,
    rgb565_to_y_row, ARGB_TO_UV444_LANES, ARGB_TO_UV_LANES, RGB_TO_UV_LANES, RGB_TO_Y_LANES,
};
use crate::row_handler::{process_row, PixelUnit, ARGB, CHROMA, LUMA, RGB16, RGB24};
use crate::yuv_error::check_packed_source;
use crate::yuv_support::YuvChromaSubsampling;
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Row kernels of a single packed RGB source
struct RgbSourceKernels<Y, UV> {
    unit: PixelUnit,
    y_row: Y,
    uv_row: UV,
    uv_lanes: usize,
}

fn rgbx_to_yuv_impl<Y, UV>(
    planar_image: &mut YuvPlanarImageMut<u8>,
    chroma_subsampling: YuvChromaSubsampling,
    src: &[u8],
    src_stride: u32,
    kernels: RgbSourceKernels<Y, UV>,
) -> Result<(), YuvError>
where
    Y: Fn(&[u8], &mut [u8], usize) + Sync,
    UV: Fn(&[u8], &[u8], &mut [u8], &mut [u8], usize) + Sync,
{
    planar_image.check_constraints(chroma_subsampling)?;
    check_packed_source(
        src,
        src_stride,
        planar_image.width,
        planar_image.height,
        kernels.unit.bytes,
    )?;

    let width = planar_image.width as usize;
    let height = planar_image.height as usize;
    let chroma_width = chroma_subsampling.chroma_width(width);
    let src_row = |y: usize| &src[y * src_stride as usize..][..kernels.unit.bytes_for(width)];

    let y_stride = planar_image.y_stride as usize;
    let y_plane = planar_image.y_plane.borrow_mut();

    let y_iter;
    #[cfg(feature = "rayon")]
    {
        y_iter = y_plane.par_chunks_exact_mut(y_stride).enumerate();
    }
    #[cfg(not(feature = "rayon"))]
    {
        y_iter = y_plane.chunks_exact_mut(y_stride).enumerate();
    }

    y_iter.for_each(|(y, y_row)| {
        process_row(
            [(src_row(y), kernels.unit)],
            [(&mut y_row[..width], LUMA)],
            width,
            RGB_TO_Y_LANES,
            |[src], [dst], w| (kernels.y_row)(src, dst, w),
        );
    });

    let u_stride = planar_image.u_stride as usize;
    let v_stride = planar_image.v_stride as usize;
    let u_plane = planar_image.u_plane.borrow_mut();
    let v_plane = planar_image.v_plane.borrow_mut();

    let uv_iter;
    #[cfg(feature = "rayon")]
    {
        uv_iter = u_plane
            .par_chunks_exact_mut(u_stride)
            .zip(v_plane.par_chunks_exact_mut(v_stride))
            .enumerate();
    }
    #[cfg(not(feature = "rayon"))]
    {
        uv_iter = u_plane
            .chunks_exact_mut(u_stride)
            .zip(v_plane.chunks_exact_mut(v_stride))
            .enumerate();
    }

    let chroma_unit = match chroma_subsampling {
        YuvChromaSubsampling::Yuv420 | YuvChromaSubsampling::Yuv422 => CHROMA,
        YuvChromaSubsampling::Yuv444 => LUMA,
    };

    uv_iter.for_each(|(cy, (u_row, v_row))| {
        let (y, next_y) = match chroma_subsampling {
            YuvChromaSubsampling::Yuv420 => (cy * 2, (cy * 2 + 1).min(height - 1)),
            YuvChromaSubsampling::Yuv422 | YuvChromaSubsampling::Yuv444 => (cy, cy),
        };
        process_row(
            [(src_row(y), kernels.unit), (src_row(next_y), kernels.unit)],
            [
                (&mut u_row[..chroma_width], chroma_unit),
                (&mut v_row[..chroma_width], chroma_unit),
            ],
            width,
            kernels.uv_lanes,
            |[src, src_next], [u, v], w| (kernels.uv_row)(src, src_next, u, v, w),
        );
    });

    Ok(())
}

/// Convert ARGB (B, G, R, A in memory) to YUV 420 planar format.
///
/// Luma and chroma use BT.601 limited range coefficients. Each chroma sample
/// is computed from the mean of a 2x2 block, the last column and row are
/// replicated for odd dimensions.
///
/// # Arguments
///
/// * `planar_image`: Target planar 4:2:0 image.
/// * `argb`: Source ARGB data.
/// * `argb_stride`: Bytes per source row.
///
/// # Errors
///
/// Returns an error if planes or source do not match image dimensions.
///
pub fn argb_to_yuv420(
    planar_image: &mut YuvPlanarImageMut<u8>,
    argb: &[u8],
    argb_stride: u32,
) -> Result<(), YuvError> {
    rgbx_to_yuv_impl(
        planar_image,
        YuvChromaSubsampling::Yuv420,
        argb,
        argb_stride,
        RgbSourceKernels {
            unit: ARGB,
            y_row: argb_to_y_row,
            uv_row: argb_to_uv_row,
            uv_lanes: ARGB_TO_UV_LANES,
        },
    )
}

/// Convert RGB24 (B, G, R in memory) to YUV 420 planar format.
pub fn rgb24_to_yuv420(
    planar_image: &mut YuvPlanarImageMut<u8>,
    rgb24: &[u8],
    rgb24_stride: u32,
) -> Result<(), YuvError> {
    rgbx_to_yuv_impl(
        planar_image,
        YuvChromaSubsampling::Yuv420,
        rgb24,
        rgb24_stride,
        RgbSourceKernels {
            unit: RGB24,
            y_row: rgb24_to_y_row,
            uv_row: rgb24_to_uv_row,
            uv_lanes: RGB_TO_UV_LANES,
        },
    )
}

/// Convert RAW (R, G, B in memory) to YUV 420 planar format.
pub fn raw_to_yuv420(
    planar_image: &mut YuvPlanarImageMut<u8>,
    raw: &[u8],
    raw_stride: u32,
) -> Result<(), YuvError> {
    rgbx_to_yuv_impl(
        planar_image,
        YuvChromaSubsampling::Yuv420,
        raw,
        raw_stride,
        RgbSourceKernels {
            unit: RGB24,
            y_row: raw_to_y_row,
            uv_row: raw_to_uv_row,
            uv_lanes: RGB_TO_UV_LANES,
        },
    )
}

/// Convert little endian RGB565 to YUV 420 planar format, stride is in bytes.
pub fn rgb565_to_yuv420(
    planar_image: &mut YuvPlanarImageMut<u8>,
    rgb565: &[u8],
    rgb565_stride: u32,
) -> Result<(), YuvError> {
    rgbx_to_yuv_impl(
        planar_image,
        YuvChromaSubsampling::Yuv420,
        rgb565,
        rgb565_stride,
        RgbSourceKernels {
            unit: RGB16,
            y_row: rgb565_to_y_row,
            uv_row: rgb565_to_uv_row,
            uv_lanes: RGB_TO_UV_LANES,
        },
    )
}

/// Convert little endian ARGB1555 to YUV 420 planar format, stride is in bytes.
///
/// Alpha bit is ignored.
pub fn argb1555_to_yuv420(
    planar_image: &mut YuvPlanarImageMut<u8>,
    argb1555: &[u8],
    argb1555_stride: u32,
) -> Result<(), YuvError> {
    rgbx_to_yuv_impl(
        planar_image,
        YuvChromaSubsampling::Yuv420,
        argb1555,
        argb1555_stride,
        RgbSourceKernels {
            unit: RGB16,
            y_row: argb1555_to_y_row,
            uv_row: argb1555_to_uv_row,
            uv_lanes: RGB_TO_UV_LANES,
        },
    )
}

/// Convert ARGB (B, G, R, A in memory) to YUV 444 planar format.
pub fn argb_to_yuv444(
    planar_image: &mut YuvPlanarImageMut<u8>,
    argb: &[u8],
    argb_stride: u32,
) -> Result<(), YuvError> {
    rgbx_to_yuv_impl(
        planar_image,
        YuvChromaSubsampling::Yuv444,
        argb,
        argb_stride,
        RgbSourceKernels {
            unit: ARGB,
            y_row: argb_to_y_row,
            uv_row: |src: &[u8], _: &[u8], u: &mut [u8], v: &mut [u8], w: usize| {
                argb_to_uv444_row(src, u, v, w)
            },
            uv_lanes: ARGB_TO_UV444_LANES,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::packing::{unpack_argb1555, unpack_rgb565};
    use crate::row::rgb_to_yuv::{rgb_to_uv, rgb_to_y};
    use rand::Rng;

    fn random_argb(width: usize, height: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..width * height * 4)
            .map(|_| rng.random_range(0..=255u8))
            .collect()
    }

    /// Reference with replicated right column and bottom row
    fn reference_yuv420(argb: &[u8], width: usize, height: usize) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let px = |x: usize, y: usize| {
            let offset = (y.min(height - 1) * width + x.min(width - 1)) * 4;
            [argb[offset] as u16, argb[offset + 1] as u16, argb[offset + 2] as u16]
        };
        let mut y_plane = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let [b, g, r] = px(x, y);
                y_plane.push(rgb_to_y(b as u8, g as u8, r as u8));
            }
        }
        let (mut u_plane, mut v_plane) = (Vec::new(), Vec::new());
        for cy in 0..height.div_ceil(2) {
            for cx in 0..width.div_ceil(2) {
                let mut sum = [0u16; 3];
                for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                    let p = px(cx * 2 + dx, cy * 2 + dy);
                    for c in 0..3 {
                        sum[c] += p[c];
                    }
                }
                let (u, v) = rgb_to_uv(sum[0] >> 2, sum[1] >> 2, sum[2] >> 2);
                u_plane.push(u);
                v_plane.push(v);
            }
        }
        (y_plane, u_plane, v_plane)
    }

    #[test]
    fn test_argb_to_yuv420_odd_dimensions() {
        for (width, height) in [(1usize, 1usize), (3, 5), (33, 3), (64, 2), (71, 4)] {
            let argb = random_argb(width, height);
            let mut planar =
                YuvPlanarImageMut::alloc(width as u32, height as u32, YuvChromaSubsampling::Yuv420);
            argb_to_yuv420(&mut planar, &argb, width as u32 * 4).unwrap();
            let (y_plane, u_plane, v_plane) = reference_yuv420(&argb, width, height);
            assert_eq!(planar.y_plane.borrow(), &y_plane[..]);
            assert_eq!(planar.u_plane.borrow(), &u_plane[..]);
            assert_eq!(planar.v_plane.borrow(), &v_plane[..]);
        }
    }

    #[test]
    fn test_rgb24_and_raw_agree_with_argb() {
        let (width, height) = (21usize, 5usize);
        let argb = random_argb(width, height);
        let rgb24: Vec<u8> = argb.chunks_exact(4).flat_map(|x| [x[0], x[1], x[2]]).collect();
        let raw: Vec<u8> = argb.chunks_exact(4).flat_map(|x| [x[2], x[1], x[0]]).collect();
        let alloc = || {
            YuvPlanarImageMut::alloc(width as u32, height as u32, YuvChromaSubsampling::Yuv420)
        };
        let mut from_argb = alloc();
        let mut from_rgb24 = alloc();
        let mut from_raw = alloc();
        argb_to_yuv420(&mut from_argb, &argb, width as u32 * 4).unwrap();
        rgb24_to_yuv420(&mut from_rgb24, &rgb24, width as u32 * 3).unwrap();
        raw_to_yuv420(&mut from_raw, &raw, width as u32 * 3).unwrap();
        for image in [&from_rgb24, &from_raw] {
            assert_eq!(image.y_plane.borrow(), from_argb.y_plane.borrow());
            assert_eq!(image.u_plane.borrow(), from_argb.u_plane.borrow());
            assert_eq!(image.v_plane.borrow(), from_argb.v_plane.borrow());
        }
    }

    #[test]
    fn test_rgb16_sources_use_widened_fields() {
        let (width, height) = (13usize, 3usize);
        let mut rng = rand::rng();
        let words: Vec<u16> = (0..width * height).map(|_| rng.random_range(0..=u16::MAX)).collect();
        let packed: Vec<u8> = words.iter().flat_map(|x| x.to_le_bytes()).collect();
        let mut from_565 =
            YuvPlanarImageMut::alloc(width as u32, height as u32, YuvChromaSubsampling::Yuv420);
        let mut from_1555 =
            YuvPlanarImageMut::alloc(width as u32, height as u32, YuvChromaSubsampling::Yuv420);
        rgb565_to_yuv420(&mut from_565, &packed, width as u32 * 2).unwrap();
        argb1555_to_yuv420(&mut from_1555, &packed, width as u32 * 2).unwrap();
        let expected_565: Vec<u8> = words
            .iter()
            .map(|&x| {
                let [b, g, r] = unpack_rgb565(x);
                rgb_to_y(b, g, r)
            })
            .collect();
        let expected_1555: Vec<u8> = words
            .iter()
            .map(|&x| {
                let [b, g, r, _] = unpack_argb1555(x);
                rgb_to_y(b, g, r)
            })
            .collect();
        assert_eq!(from_565.y_plane.borrow(), &expected_565[..]);
        assert_eq!(from_1555.y_plane.borrow(), &expected_1555[..]);
    }

    #[test]
    fn test_argb_to_yuv444() {
        let (width, height) = (19usize, 2usize);
        let argb = random_argb(width, height);
        let mut planar =
            YuvPlanarImageMut::alloc(width as u32, height as u32, YuvChromaSubsampling::Yuv444);
        argb_to_yuv444(&mut planar, &argb, width as u32 * 4).unwrap();
        for (i, px) in argb.chunks_exact(4).enumerate() {
            let (u, v) = rgb_to_uv(px[0] as u16, px[1] as u16, px[2] as u16);
            assert_eq!(planar.y_plane.borrow()[i], rgb_to_y(px[0], px[1], px[2]));
            assert_eq!(planar.u_plane.borrow()[i], u);
            assert_eq!(planar.v_plane.borrow()[i], v);
        }
    }

    #[test]
    fn test_wrong_stride() {
        let argb = vec![0u8; 4 * 4 * 4];
        let mut planar = YuvPlanarImageMut::alloc(4, 4, YuvChromaSubsampling::Yuv420);
        assert!(matches!(
            argb_to_yuv420(&mut planar, &argb[..60], 15),
            Err(YuvError::InvalidStride { .. })
        ));
    }
}
