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
use crate::images::YuvPlanarImage;
use crate::row::{i422_to_uyvy_row, i422_to_yuy2_row, YUY2_LANES};
use crate::row_handler::{process_row, CHROMA, LUMA, MACROPIXEL};
use crate::yuv_error::check_packed_destination;
use crate::yuv_support::{YuvChromaSubsampling, Yuy2Description};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

fn yuv422_to_yuy2_impl<const YUY2_TARGET: usize>(
    planar_image: &YuvPlanarImage<u8>,
    yuy2_store: &mut [u8],
    yuy2_stride: u32,
) -> Result<(), YuvError> {
    let yuy2_target: Yuy2Description = YUY2_TARGET.into();
    planar_image.check_constraints(YuvChromaSubsampling::Yuv422)?;
    let width = planar_image.width as usize;
    let macropixels = width.div_ceil(2);
    check_packed_destination(
        yuy2_store,
        yuy2_stride,
        macropixels as u32,
        planar_image.height,
        4,
    )?;

    let y_stride = planar_image.y_stride as usize;
    let u_stride = planar_image.u_stride as usize;
    let v_stride = planar_image.v_stride as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = yuy2_store
            .par_chunks_exact_mut(yuy2_stride as usize)
            .enumerate();
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = yuy2_store.chunks_exact_mut(yuy2_stride as usize).enumerate();
    }

    iter.for_each(|(y, yuy2_row)| {
        let y_row = &planar_image.y_plane[y * y_stride..][..width];
        let u_row = &planar_image.u_plane[y * u_stride..][..macropixels];
        let v_row = &planar_image.v_plane[y * v_stride..][..macropixels];
        let yuy2_row = &mut yuy2_row[..macropixels * 4];
        process_row(
            [(y_row, LUMA), (u_row, CHROMA), (v_row, CHROMA)],
            [(yuy2_row, MACROPIXEL)],
            width,
            YUY2_LANES,
            |[y, u, v], [dst], w| match yuy2_target {
                Yuy2Description::YUYV => i422_to_yuy2_row(y, u, v, dst, w),
                Yuy2Description::UYVY => i422_to_uyvy_row(y, u, v, dst, w),
            },
        );
    });

    Ok(())
}

/// Convert YUV 422 planar format to YUYV (YUY2) packed format.
///
/// For odd width the last macropixel repeats the final luma sample.
///
/// # Arguments
///
/// * `planar_image`: Source planar 4:2:2 image.
/// * `yuy2_store`: Destination, each row holds `width.div_ceil(2) * 4` bytes.
/// * `yuy2_stride`: Bytes per destination row.
///
/// # Errors
///
/// Returns an error if planes or destination do not match image dimensions.
///
pub fn yuv422_to_yuyv422(
    planar_image: &YuvPlanarImage<u8>,
    yuy2_store: &mut [u8],
    yuy2_stride: u32,
) -> Result<(), YuvError> {
    yuv422_to_yuy2_impl::<{ Yuy2Description::YUYV as usize }>(planar_image, yuy2_store, yuy2_stride)
}

/// Convert YUV 422 planar format to UYVY packed format.
///
/// Arguments are the same as [yuv422_to_yuyv422].
pub fn yuv422_to_uyvy422(
    planar_image: &YuvPlanarImage<u8>,
    uyvy_store: &mut [u8],
    uyvy_stride: u32,
) -> Result<(), YuvError> {
    yuv422_to_yuy2_impl::<{ Yuy2Description::UYVY as usize }>(planar_image, uyvy_store, uyvy_stride)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_yuv422_to_packed_odd_width() {
        let mut rng = rand::rng();
        for (width, height) in [(1usize, 1usize), (7, 3), (35, 2), (64, 1)] {
            let chroma_width = width.div_ceil(2);
            let y_plane: Vec<u8> = (0..width * height)
                .map(|_| rng.random_range(0..=255u8))
                .collect();
            let u_plane: Vec<u8> = (0..chroma_width * height)
                .map(|_| rng.random_range(0..=255u8))
                .collect();
            let v_plane: Vec<u8> = (0..chroma_width * height)
                .map(|_| rng.random_range(0..=255u8))
                .collect();
            let image = YuvPlanarImage {
                y_plane: &y_plane,
                y_stride: width as u32,
                u_plane: &u_plane,
                u_stride: chroma_width as u32,
                v_plane: &v_plane,
                v_stride: chroma_width as u32,
                width: width as u32,
                height: height as u32,
            };
            let stride = chroma_width * 4;
            let mut yuyv = vec![0u8; stride * height];
            let mut uyvy = vec![0u8; stride * height];
            yuv422_to_yuyv422(&image, &mut yuyv, stride as u32).unwrap();
            yuv422_to_uyvy422(&image, &mut uyvy, stride as u32).unwrap();
            for y in 0..height {
                for cx in 0..chroma_width {
                    let y0 = y_plane[y * width + cx * 2];
                    let y1 = y_plane[y * width + (cx * 2 + 1).min(width - 1)];
                    let u = u_plane[y * chroma_width + cx];
                    let v = v_plane[y * chroma_width + cx];
                    let offset = y * stride + cx * 4;
                    assert_eq!(&yuyv[offset..offset + 4], &[y0, u, y1, v]);
                    assert_eq!(&uyvy[offset..offset + 4], &[u, y0, v, y1]);
                }
            }
        }
    }

    #[test]
    fn test_rejects_420_chroma() {
        let y_plane = vec![0u8; 4 * 4];
        let chroma = vec![0u8; 2 * 2];
        let image = YuvPlanarImage {
            y_plane: &y_plane,
            y_stride: 4,
            u_plane: &chroma,
            u_stride: 2,
            v_plane: &chroma,
            v_stride: 2,
            width: 4,
            height: 4,
        };
        let mut dst = vec![0u8; 8 * 4];
        assert!(yuv422_to_yuyv422(&image, &mut dst, 8).is_err());
    }
}
