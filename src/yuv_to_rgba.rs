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
use crate::images::{YuvPlanarImage, YuvPlanarImageWithAlpha};
use crate::row::{
    i422_alpha_to_argb_row, i422_to_argb1555_row, i422_to_argb4444_row, i422_to_argb_row,
    i422_to_rgb24_row, i422_to_rgb565_row, i422_to_rgba_row, I422_TO_ARGB_LANES,
    I422_TO_RGB24_LANES,
};
use crate::row_handler::{process_row, PixelUnit, ARGB, CHROMA, LUMA, RGB16, RGB24};
use crate::yuv_error::check_packed_destination;
use crate::yuv_support::YuvChromaSubsampling;
use crate::{YuvConstants, YuvError};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

fn yuv_to_packed_impl<const SAMPLING: u8, F>(
    planar_image: &YuvPlanarImage<u8>,
    alpha: Option<(&[u8], u32)>,
    dst: &mut [u8],
    dst_stride: u32,
    dst_unit: PixelUnit,
    lanes: usize,
    kernel: F,
) -> Result<(), YuvError>
where
    F: Fn(&[u8], &[u8], &[u8], &[u8], &mut [u8], usize) + Sync,
{
    let chroma_subsampling: YuvChromaSubsampling = SAMPLING.into();
    planar_image.check_constraints(chroma_subsampling)?;
    check_packed_destination(
        dst,
        dst_stride,
        planar_image.width,
        planar_image.height,
        dst_unit.bytes,
    )?;

    let width = planar_image.width as usize;
    let chroma_width = chroma_subsampling.chroma_width(width);
    let y_stride = planar_image.y_stride as usize;
    let u_stride = planar_image.u_stride as usize;
    let v_stride = planar_image.v_stride as usize;

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
        let chroma_y = match chroma_subsampling {
            YuvChromaSubsampling::Yuv420 => y >> 1,
            YuvChromaSubsampling::Yuv422 | YuvChromaSubsampling::Yuv444 => y,
        };
        let y_row = &planar_image.y_plane[y * y_stride..][..width];
        let u_row = &planar_image.u_plane[chroma_y * u_stride..][..chroma_width];
        let v_row = &planar_image.v_plane[chroma_y * v_stride..][..chroma_width];
        let dst_row = &mut dst_row[..dst_unit.bytes_for(width)];
        match alpha {
            Some((a_plane, a_stride)) => {
                let a_row = &a_plane[y * a_stride as usize..][..width];
                process_row(
                    [(y_row, LUMA), (u_row, CHROMA), (v_row, CHROMA), (a_row, LUMA)],
                    [(dst_row, dst_unit)],
                    width,
                    lanes,
                    |[y, u, v, a], [dst], w| kernel(y, u, v, a, dst, w),
                );
            }
            None => {
                process_row(
                    [(y_row, LUMA), (u_row, CHROMA), (v_row, CHROMA)],
                    [(dst_row, dst_unit)],
                    width,
                    lanes,
                    |[y, u, v], [dst], w| kernel(y, u, v, &[], dst, w),
                );
            }
        }
    });

    Ok(())
}

/// Convert YUV 420 planar format to ARGB (B, G, R, A in memory) format.
///
/// # Arguments
///
/// * `planar_image`: Source planar image.
/// * `argb`: A mutable slice to store the converted ARGB data.
/// * `argb_stride`: Elements per row.
/// * `constants`: Fixed point YUV to RGB table, see [YuvConstants].
///
/// # Errors
///
/// Returns an error if planes or destination do not match image dimensions.
///
pub fn yuv420_to_argb(
    planar_image: &YuvPlanarImage<u8>,
    argb: &mut [u8],
    argb_stride: u32,
    constants: &YuvConstants,
) -> Result<(), YuvError> {
    yuv_to_packed_impl::<{ YuvChromaSubsampling::Yuv420 as u8 }, _>(
        planar_image,
        None,
        argb,
        argb_stride,
        ARGB,
        I422_TO_ARGB_LANES,
        |y, u, v, _, dst, w| i422_to_argb_row(y, u, v, dst, constants, w),
    )
}

/// Convert YUV 422 planar format to ARGB (B, G, R, A in memory) format.
///
/// Arguments are the same as [yuv420_to_argb].
pub fn yuv422_to_argb(
    planar_image: &YuvPlanarImage<u8>,
    argb: &mut [u8],
    argb_stride: u32,
    constants: &YuvConstants,
) -> Result<(), YuvError> {
    yuv_to_packed_impl::<{ YuvChromaSubsampling::Yuv422 as u8 }, _>(
        planar_image,
        None,
        argb,
        argb_stride,
        ARGB,
        I422_TO_ARGB_LANES,
        |y, u, v, _, dst, w| i422_to_argb_row(y, u, v, dst, constants, w),
    )
}

/// Convert YUV 420 planar format to RGBA (A, B, G, R in memory) format.
pub fn yuv420_to_rgba(
    planar_image: &YuvPlanarImage<u8>,
    rgba: &mut [u8],
    rgba_stride: u32,
    constants: &YuvConstants,
) -> Result<(), YuvError> {
    yuv_to_packed_impl::<{ YuvChromaSubsampling::Yuv420 as u8 }, _>(
        planar_image,
        None,
        rgba,
        rgba_stride,
        ARGB,
        I422_TO_ARGB_LANES,
        |y, u, v, _, dst, w| i422_to_rgba_row(y, u, v, dst, constants, w),
    )
}

/// Convert YUV 420 planar format with alpha plane to ARGB format.
///
/// Alpha plane must have the same dimensions as luma.
pub fn yuv420_alpha_to_argb(
    planar_image: &YuvPlanarImageWithAlpha<u8>,
    argb: &mut [u8],
    argb_stride: u32,
    constants: &YuvConstants,
) -> Result<(), YuvError> {
    planar_image.check_constraints(YuvChromaSubsampling::Yuv420)?;
    yuv_to_packed_impl::<{ YuvChromaSubsampling::Yuv420 as u8 }, _>(
        &planar_image.planar(),
        Some((planar_image.a_plane, planar_image.a_stride)),
        argb,
        argb_stride,
        ARGB,
        I422_TO_ARGB_LANES,
        |y, u, v, a, dst, w| i422_alpha_to_argb_row(y, u, v, a, dst, constants, w),
    )
}

/// Convert YUV 420 planar format to RGB24 (B, G, R in memory) format.
pub fn yuv420_to_rgb24(
    planar_image: &YuvPlanarImage<u8>,
    rgb24: &mut [u8],
    rgb24_stride: u32,
    constants: &YuvConstants,
) -> Result<(), YuvError> {
    yuv_to_packed_impl::<{ YuvChromaSubsampling::Yuv420 as u8 }, _>(
        planar_image,
        None,
        rgb24,
        rgb24_stride,
        RGB24,
        I422_TO_RGB24_LANES,
        |y, u, v, _, dst, w| i422_to_rgb24_row(y, u, v, dst, constants, w),
    )
}

/// Convert YUV 420 planar format to RGB565, stride is in bytes.
pub fn yuv420_to_rgb565(
    planar_image: &YuvPlanarImage<u8>,
    rgb565: &mut [u8],
    rgb565_stride: u32,
    constants: &YuvConstants,
) -> Result<(), YuvError> {
    yuv_to_packed_impl::<{ YuvChromaSubsampling::Yuv420 as u8 }, _>(
        planar_image,
        None,
        rgb565,
        rgb565_stride,
        RGB16,
        I422_TO_ARGB_LANES,
        |y, u, v, _, dst, w| i422_to_rgb565_row(y, u, v, dst, constants, w),
    )
}

/// Convert YUV 420 planar format to ARGB4444 with opaque alpha, stride is in bytes.
pub fn yuv420_to_argb4444(
    planar_image: &YuvPlanarImage<u8>,
    argb4444: &mut [u8],
    argb4444_stride: u32,
    constants: &YuvConstants,
) -> Result<(), YuvError> {
    yuv_to_packed_impl::<{ YuvChromaSubsampling::Yuv420 as u8 }, _>(
        planar_image,
        None,
        argb4444,
        argb4444_stride,
        RGB16,
        I422_TO_ARGB_LANES,
        |y, u, v, _, dst, w| i422_to_argb4444_row(y, u, v, dst, constants, w),
    )
}

/// Convert YUV 420 planar format to ARGB1555 with opaque alpha, stride is in bytes.
pub fn yuv420_to_argb1555(
    planar_image: &YuvPlanarImage<u8>,
    argb1555: &mut [u8],
    argb1555_stride: u32,
    constants: &YuvConstants,
) -> Result<(), YuvError> {
    yuv_to_packed_impl::<{ YuvChromaSubsampling::Yuv420 as u8 }, _>(
        planar_image,
        None,
        argb1555,
        argb1555_stride,
        RGB16,
        I422_TO_ARGB_LANES,
        |y, u, v, _, dst, w| i422_to_argb1555_row(y, u, v, dst, constants, w),
    )
}
