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
use crate::row::{
    argb1555_to_argb_row, argb4444_to_argb_row, argb_to_argb1555_row, argb_to_argb4444_row,
    argb_to_raw_row, argb_to_rgb24_row, argb_to_rgb565_dither_row, argb_to_rgb565_row,
    raw_to_argb_row, rgb24_to_argb_row, rgb565_to_argb_row, RGB16_LANES, RGB24_LANES,
};
use crate::row_handler::{process_row, PixelUnit, ARGB, RGB16, RGB24};
use crate::yuv_error::{check_packed_destination, check_packed_source};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Converts every row of a packed image with a row kernel.
///
/// Kernel receives row index, source row, destination row and aligned width.
#[allow(clippy::too_many_arguments)]
pub(crate) fn packed_to_packed_impl<F>(
    src: &[u8],
    src_stride: u32,
    src_unit: PixelUnit,
    dst: &mut [u8],
    dst_stride: u32,
    dst_unit: PixelUnit,
    width: u32,
    height: u32,
    lanes: usize,
    kernel: F,
) -> Result<(), YuvError>
where
    F: Fn(usize, &[u8], &mut [u8], usize) + Sync,
{
    check_packed_source(src, src_stride, width, height, src_unit.bytes)?;
    check_packed_destination(dst, dst_stride, width, height, dst_unit.bytes)?;

    let width = width as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_exact_mut(dst_stride as usize)
            .zip(src.par_chunks_exact(src_stride as usize))
            .enumerate();
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_exact_mut(dst_stride as usize)
            .zip(src.chunks_exact(src_stride as usize))
            .enumerate();
    }

    iter.for_each(|(y, (dst, src))| {
        process_row(
            [(&src[..src_unit.bytes_for(width)], src_unit)],
            [(&mut dst[..dst_unit.bytes_for(width)], dst_unit)],
            width,
            lanes,
            |[src], [dst], w| kernel(y, src, dst, w),
        );
    });

    Ok(())
}

/// Converts ARGB (B, G, R, A in memory) to RGB24 (B, G, R in memory).
///
/// # Arguments
///
/// * `src`: Source slice
/// * `src_stride`: Source slice stride in bytes
/// * `dst`: Destination slice
/// * `dst_stride`: Destination slice stride in bytes
/// * `width`: Image width
/// * `height`: Image height
///
/// returns: Result<(), YuvError>
///
pub fn argb_to_rgb24(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        ARGB,
        dst,
        dst_stride,
        RGB24,
        width,
        height,
        RGB24_LANES,
        |_, src, dst, w| argb_to_rgb24_row(src, dst, w),
    )
}

/// Converts ARGB to RAW (R, G, B in memory), arguments as in [argb_to_rgb24].
pub fn argb_to_raw(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        ARGB,
        dst,
        dst_stride,
        RGB24,
        width,
        height,
        RGB24_LANES,
        |_, src, dst, w| argb_to_raw_row(src, dst, w),
    )
}

/// Converts RGB24 to opaque ARGB.
pub fn rgb24_to_argb(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        RGB24,
        dst,
        dst_stride,
        ARGB,
        width,
        height,
        RGB24_LANES,
        |_, src, dst, w| rgb24_to_argb_row(src, dst, w),
    )
}

/// Converts RAW to opaque ARGB.
pub fn raw_to_argb(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        RGB24,
        dst,
        dst_stride,
        ARGB,
        width,
        height,
        RGB24_LANES,
        |_, src, dst, w| raw_to_argb_row(src, dst, w),
    )
}

/// Converts ARGB to little endian RGB565, alpha is dropped.
pub fn argb_to_rgb565(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        ARGB,
        dst,
        dst_stride,
        RGB16,
        width,
        height,
        RGB16_LANES,
        |_, src, dst, w| argb_to_rgb565_row(src, dst, w),
    )
}

/// Converts ARGB to RGB565 with 4x4 ordered dither.
///
/// Row `y` uses `dither[y & 3]`, byte `x & 3` of that little endian word is
/// added to every channel of pixel `x` before truncation.
///
/// # Arguments
///
/// * `src`: Source ARGB slice
/// * `src_stride`: Source slice stride in bytes
/// * `dst`: Destination RGB565 slice
/// * `dst_stride`: Destination slice stride in bytes
/// * `width`: Image width
/// * `height`: Image height
/// * `dither`: Four rows of four dither offsets
///
pub fn argb_to_rgb565_dither(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    dither: &[u32; 4],
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        ARGB,
        dst,
        dst_stride,
        RGB16,
        width,
        height,
        RGB16_LANES,
        |y, src, dst, w| argb_to_rgb565_dither_row(src, dst, dither[y & 3], w),
    )
}

/// Converts ARGB to little endian ARGB1555, alpha keeps its top bit.
pub fn argb_to_argb1555(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        ARGB,
        dst,
        dst_stride,
        RGB16,
        width,
        height,
        RGB16_LANES,
        |_, src, dst, w| argb_to_argb1555_row(src, dst, w),
    )
}

/// Converts ARGB to little endian ARGB4444.
pub fn argb_to_argb4444(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        ARGB,
        dst,
        dst_stride,
        RGB16,
        width,
        height,
        RGB16_LANES,
        |_, src, dst, w| argb_to_argb4444_row(src, dst, w),
    )
}

/// Converts little endian RGB565 to opaque ARGB.
pub fn rgb565_to_argb(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        RGB16,
        dst,
        dst_stride,
        ARGB,
        width,
        height,
        RGB16_LANES,
        |_, src, dst, w| rgb565_to_argb_row(src, dst, w),
    )
}

/// Converts little endian ARGB1555 to ARGB.
pub fn argb1555_to_argb(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        RGB16,
        dst,
        dst_stride,
        ARGB,
        width,
        height,
        RGB16_LANES,
        |_, src, dst, w| argb1555_to_argb_row(src, dst, w),
    )
}

/// Converts little endian ARGB4444 to ARGB.
pub fn argb4444_to_argb(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        RGB16,
        dst,
        dst_stride,
        ARGB,
        width,
        height,
        RGB16_LANES,
        |_, src, dst, w| argb4444_to_argb_row(src, dst, w),
    )
}
