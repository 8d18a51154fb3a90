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
use crate::images::{YuvPackedImage, YuvPlanarImageMut};
use crate::row::{
    uyvy_to_uv422_row, uyvy_to_uv_row, uyvy_to_y_row, yuy2_to_uv422_row, yuy2_to_uv_row,
    yuy2_to_y_row, YUY2_LANES,
};
use crate::row_handler::{process_row, CHROMA, LUMA, MACROPIXEL};
use crate::yuv_error::check_images_sizes;
use crate::yuv_support::{YuvChromaSubsampling, Yuy2Description};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// `AVERAGE_ROWS` selects 4:2:0 output, otherwise chroma stays 4:2:2.
fn yuy2_to_yuv_impl<const AVERAGE_ROWS: bool, const YUY2_SOURCE: usize>(
    planar_image: &mut YuvPlanarImageMut<u8>,
    packed_image: &YuvPackedImage<u8>,
) -> Result<(), YuvError> {
    let yuy2_source: Yuy2Description = YUY2_SOURCE.into();
    let chroma_subsampling = if AVERAGE_ROWS {
        YuvChromaSubsampling::Yuv420
    } else {
        YuvChromaSubsampling::Yuv422
    };

    packed_image.check_constraints()?;
    planar_image.check_constraints(chroma_subsampling)?;
    check_images_sizes(
        packed_image.width,
        packed_image.height,
        planar_image.width,
        planar_image.height,
    )?;

    let width = planar_image.width as usize;
    let height = planar_image.height as usize;
    let chroma_width = chroma_subsampling.chroma_width(width);
    let packed_width = MACROPIXEL.bytes_for(width);
    let yuy_stride = packed_image.yuy_stride as usize;
    let packed_row = |y: usize| &packed_image.yuy[y * yuy_stride..][..packed_width];

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
            [(packed_row(y), MACROPIXEL)],
            [(&mut y_row[..width], LUMA)],
            width,
            YUY2_LANES,
            |[src], [dst], w| match yuy2_source {
                Yuy2Description::YUYV => yuy2_to_y_row(src, dst, w),
                Yuy2Description::UYVY => uyvy_to_y_row(src, dst, w),
            },
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

    uv_iter.for_each(|(cy, (u_row, v_row))| {
        let u_row = &mut u_row[..chroma_width];
        let v_row = &mut v_row[..chroma_width];
        if AVERAGE_ROWS {
            // Odd height pairs the last row with itself.
            let next_y = (cy * 2 + 1).min(height - 1);
            process_row(
                [(packed_row(cy * 2), MACROPIXEL), (packed_row(next_y), MACROPIXEL)],
                [(u_row, CHROMA), (v_row, CHROMA)],
                width,
                YUY2_LANES,
                |[src, src_next], [u, v], w| match yuy2_source {
                    Yuy2Description::YUYV => yuy2_to_uv_row(src, src_next, u, v, w),
                    Yuy2Description::UYVY => uyvy_to_uv_row(src, src_next, u, v, w),
                },
            );
        } else {
            process_row(
                [(packed_row(cy), MACROPIXEL)],
                [(u_row, CHROMA), (v_row, CHROMA)],
                width,
                YUY2_LANES,
                |[src], [u, v], w| match yuy2_source {
                    Yuy2Description::YUYV => yuy2_to_uv422_row(src, u, v, w),
                    Yuy2Description::UYVY => uyvy_to_uv422_row(src, u, v, w),
                },
            );
        }
    });

    Ok(())
}

/// Convert YUYV (YUY2) packed format to YUV 420 planar format.
///
/// Chroma of two adjacent rows is averaged with rounding half up.
///
/// # Arguments
///
/// * `planar_image`: Target planar image, must be 4:2:0 of the same size.
/// * `packed_image`: Source packed image.
///
/// # Errors
///
/// Returns an error if planes or source do not match image dimensions.
///
pub fn yuyv422_to_yuv420(
    planar_image: &mut YuvPlanarImageMut<u8>,
    packed_image: &YuvPackedImage<u8>,
) -> Result<(), YuvError> {
    yuy2_to_yuv_impl::<true, { Yuy2Description::YUYV as usize }>(planar_image, packed_image)
}

/// Convert UYVY packed format to YUV 420 planar format.
pub fn uyvy422_to_yuv420(
    planar_image: &mut YuvPlanarImageMut<u8>,
    packed_image: &YuvPackedImage<u8>,
) -> Result<(), YuvError> {
    yuy2_to_yuv_impl::<true, { Yuy2Description::UYVY as usize }>(planar_image, packed_image)
}

/// Convert YUYV (YUY2) packed format to YUV 422 planar format.
pub fn yuyv422_to_yuv422(
    planar_image: &mut YuvPlanarImageMut<u8>,
    packed_image: &YuvPackedImage<u8>,
) -> Result<(), YuvError> {
    yuy2_to_yuv_impl::<false, { Yuy2Description::YUYV as usize }>(planar_image, packed_image)
}

/// Convert UYVY packed format to YUV 422 planar format.
pub fn uyvy422_to_yuv422(
    planar_image: &mut YuvPlanarImageMut<u8>,
    packed_image: &YuvPackedImage<u8>,
) -> Result<(), YuvError> {
    yuy2_to_yuv_impl::<false, { Yuy2Description::UYVY as usize }>(planar_image, packed_image)
}
