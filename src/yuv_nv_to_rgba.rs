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
use crate::images::YuvBiPlanarImage;
use crate::row::{nv12_to_argb_row, nv12_to_rgb565_row, nv21_to_argb_row, NV_TO_ARGB_LANES};
use crate::row_handler::{process_row, PixelUnit, ARGB, CHROMA_PAIR, LUMA, RGB16};
use crate::yuv_error::check_packed_destination;
use crate::yuv_support::{YuvChromaSubsampling, YuvNVOrder};
use crate::{YuvConstants, YuvError};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

fn yuv_nv12_to_packed_impl<F>(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    dst: &mut [u8],
    dst_stride: u32,
    dst_unit: PixelUnit,
    kernel: F,
) -> Result<(), YuvError>
where
    F: Fn(&[u8], &[u8], &mut [u8], usize) + Sync,
{
    bi_planar_image.check_constraints(YuvChromaSubsampling::Yuv420)?;
    check_packed_destination(
        dst,
        dst_stride,
        bi_planar_image.width,
        bi_planar_image.height,
        dst_unit.bytes,
    )?;

    let width = bi_planar_image.width as usize;
    let y_stride = bi_planar_image.y_stride as usize;
    let uv_stride = bi_planar_image.uv_stride as usize;
    let uv_width = CHROMA_PAIR.bytes_for(width);

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(dst_stride as usize).enumerate();
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(dst_stride as usize).enumerate();
    }

    iter.for_each(|(y, dst_row)| {
        let y_row = &bi_planar_image.y_plane[y * y_stride..][..width];
        let uv_row = &bi_planar_image.uv_plane[(y >> 1) * uv_stride..][..uv_width];
        let dst_row = &mut dst_row[..dst_unit.bytes_for(width)];
        process_row(
            [(y_row, LUMA), (uv_row, CHROMA_PAIR)],
            [(dst_row, dst_unit)],
            width,
            NV_TO_ARGB_LANES,
            |[y, uv], [dst], w| kernel(y, uv, dst, w),
        );
    });

    Ok(())
}

fn yuv_nv_to_argb_impl<const UV_ORDER: u8>(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    argb: &mut [u8],
    argb_stride: u32,
    constants: &YuvConstants,
) -> Result<(), YuvError> {
    let order: YuvNVOrder = UV_ORDER.into();
    match order {
        YuvNVOrder::UV => yuv_nv12_to_packed_impl(
            bi_planar_image,
            argb,
            argb_stride,
            ARGB,
            |y, uv, dst, w| nv12_to_argb_row(y, uv, dst, constants, w),
        ),
        YuvNVOrder::VU => yuv_nv12_to_packed_impl(
            bi_planar_image,
            argb,
            argb_stride,
            ARGB,
            |y, vu, dst, w| nv21_to_argb_row(y, vu, dst, constants, w),
        ),
    }
}

/// Convert YUV NV12 format to ARGB (B, G, R, A in memory) format.
///
/// NV12 is a bi-planar 4:2:0 format, chroma plane is interleaved as U, V.
///
/// # Arguments
///
/// * `bi_planar_image`: Source bi-planar image.
/// * `argb`: A mutable slice to store the converted ARGB data.
/// * `argb_stride`: Elements per row.
/// * `constants`: Fixed point YUV to RGB table, see [YuvConstants].
///
/// # Errors
///
/// Returns an error if planes or destination do not match image dimensions.
///
pub fn yuv_nv12_to_argb(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    argb: &mut [u8],
    argb_stride: u32,
    constants: &YuvConstants,
) -> Result<(), YuvError> {
    yuv_nv_to_argb_impl::<{ YuvNVOrder::UV as u8 }>(bi_planar_image, argb, argb_stride, constants)
}

/// Convert YUV NV21 format to ARGB (B, G, R, A in memory) format.
///
/// Same as [yuv_nv12_to_argb] with chroma interleaved as V, U.
pub fn yuv_nv21_to_argb(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    argb: &mut [u8],
    argb_stride: u32,
    constants: &YuvConstants,
) -> Result<(), YuvError> {
    yuv_nv_to_argb_impl::<{ YuvNVOrder::VU as u8 }>(bi_planar_image, argb, argb_stride, constants)
}

/// Convert YUV NV12 format to RGB565, stride is in bytes.
pub fn yuv_nv12_to_rgb565(
    bi_planar_image: &YuvBiPlanarImage<u8>,
    rgb565: &mut [u8],
    rgb565_stride: u32,
    constants: &YuvConstants,
) -> Result<(), YuvError> {
    yuv_nv12_to_packed_impl(bi_planar_image, rgb565, rgb565_stride, RGB16, |y, uv, dst, w| {
        nv12_to_rgb565_row(y, uv, dst, constants, w)
    })
}
