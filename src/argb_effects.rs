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
use crate::packed_rgb::packed_to_packed_impl;
use crate::row::{
    argb_add_row, argb_attenuate_row, argb_gray_row, argb_mirror_row, argb_multiply_row,
    argb_sepia_row, argb_shade_row, argb_shuffle_row, argb_subtract_row, mirror_row,
    ARGB_ADD_LANES, ARGB_EFFECT_LANES, ARGB_MIRROR_LANES, ARGB_MULTIPLY_LANES, MIRROR_LANES,
};
use crate::row_handler::{fill_edge, process_row, ARGB, LUMA, SCRATCH_SIZE};
use crate::yuv_error::{check_packed_destination, check_packed_source};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

#[allow(clippy::too_many_arguments)]
fn argb_binary_impl<F>(
    src0: &[u8],
    src0_stride: u32,
    src1: &[u8],
    src1_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    lanes: usize,
    kernel: F,
) -> Result<(), YuvError>
where
    F: Fn(&[u8], &[u8], &mut [u8], usize) + Sync,
{
    check_packed_source(src0, src0_stride, width, height, 4)?;
    check_packed_source(src1, src1_stride, width, height, 4)?;
    check_packed_destination(dst, dst_stride, width, height, 4)?;

    let width = width as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_exact_mut(dst_stride as usize)
            .zip(src0.par_chunks_exact(src0_stride as usize))
            .zip(src1.par_chunks_exact(src1_stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_exact_mut(dst_stride as usize)
            .zip(src0.chunks_exact(src0_stride as usize))
            .zip(src1.chunks_exact(src1_stride as usize));
    }

    iter.for_each(|((dst, src0), src1)| {
        process_row(
            [(&src0[..width * 4], ARGB), (&src1[..width * 4], ARGB)],
            [(&mut dst[..width * 4], ARGB)],
            width,
            lanes,
            |[src0, src1], [dst], w| kernel(src0, src1, dst, w),
        );
    });

    Ok(())
}

/// Adds two ARGB images channel by channel with saturation.
///
/// # Arguments
///
/// * `src0`: First source ARGB slice
/// * `src0_stride`: First source stride in bytes
/// * `src1`: Second source ARGB slice
/// * `src1_stride`: Second source stride in bytes
/// * `dst`: Destination ARGB slice
/// * `dst_stride`: Destination stride in bytes
/// * `width`: Image width
/// * `height`: Image height
///
/// returns: Result<(), YuvError>
///
#[allow(clippy::too_many_arguments)]
pub fn argb_add(
    src0: &[u8],
    src0_stride: u32,
    src1: &[u8],
    src1_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    argb_binary_impl(
        src0,
        src0_stride,
        src1,
        src1_stride,
        dst,
        dst_stride,
        width,
        height,
        ARGB_ADD_LANES,
        argb_add_row,
    )
}

/// Subtracts `src1` from `src0` clamping at zero, arguments as in [argb_add].
#[allow(clippy::too_many_arguments)]
pub fn argb_subtract(
    src0: &[u8],
    src0_stride: u32,
    src1: &[u8],
    src1_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    argb_binary_impl(
        src0,
        src0_stride,
        src1,
        src1_stride,
        dst,
        dst_stride,
        width,
        height,
        ARGB_ADD_LANES,
        argb_subtract_row,
    )
}

/// Multiplies two ARGB images, every channel is `(a * 257 * b) >> 16`.
#[allow(clippy::too_many_arguments)]
pub fn argb_multiply(
    src0: &[u8],
    src0_stride: u32,
    src1: &[u8],
    src1_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    argb_binary_impl(
        src0,
        src0_stride,
        src1,
        src1_stride,
        dst,
        dst_stride,
        width,
        height,
        ARGB_MULTIPLY_LANES,
        argb_multiply_row,
    )
}

/// Premultiplies color channels by alpha, alpha is kept.
///
/// # Arguments
///
/// * `src`: Source ARGB slice
/// * `src_stride`: Source stride in bytes
/// * `dst`: Destination ARGB slice
/// * `dst_stride`: Destination stride in bytes
/// * `width`: Image width
/// * `height`: Image height
///
pub fn argb_attenuate(
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
        ARGB,
        width,
        height,
        ARGB_EFFECT_LANES,
        |_, src, dst, w| argb_attenuate_row(src, dst, w),
    )
}

/// Scales every channel, alpha included, by the matching byte of `value`.
///
/// `value` holds B, G, R, A scale factors in little endian byte order.
#[allow(clippy::too_many_arguments)]
pub fn argb_shade(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    value: u32,
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        ARGB,
        dst,
        dst_stride,
        ARGB,
        width,
        height,
        ARGB_MULTIPLY_LANES,
        |_, src, dst, w| argb_shade_row(src, dst, w, value),
    )
}

/// Replaces color with its luma `(15B + 75G + 38R + 64) >> 7`, alpha is kept.
pub fn argb_gray(
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
        ARGB,
        width,
        height,
        ARGB_EFFECT_LANES,
        |_, src, dst, w| argb_gray_row(src, dst, w),
    )
}

/// Applies sepia tone in place, alpha is kept.
///
/// # Arguments
///
/// * `dst`: ARGB image to modify
/// * `dst_stride`: Stride in bytes
/// * `width`: Image width
/// * `height`: Image height
///
pub fn argb_sepia(
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    check_packed_destination(dst, dst_stride, width, height, 4)?;

    let width = width as usize;
    let aligned = width - width % ARGB_EFFECT_LANES;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(dst_stride as usize);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(dst_stride as usize);
    }

    iter.for_each(|row| {
        if aligned > 0 {
            argb_sepia_row(&mut row[..aligned * 4], aligned);
        }
        if aligned < width {
            let tail = &mut row[aligned * 4..width * 4];
            let mut scratch = [0u8; SCRATCH_SIZE];
            let scratch = &mut scratch[..ARGB_EFFECT_LANES * 4];
            fill_edge(scratch, tail, 4);
            argb_sepia_row(scratch, ARGB_EFFECT_LANES);
            let len = tail.len();
            tail.copy_from_slice(&scratch[..len]);
        }
    });

    Ok(())
}

/// Reorders channels of every pixel, `dst[i] = src[shuffler[i]]`.
///
/// `[2, 1, 0, 3]` converts ARGB to ABGR (R, G, B, A in memory) and back.
#[allow(clippy::too_many_arguments)]
pub fn argb_shuffle(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    shuffler: &[u8; 4],
) -> Result<(), YuvError> {
    packed_to_packed_impl(
        src,
        src_stride,
        ARGB,
        dst,
        dst_stride,
        ARGB,
        width,
        height,
        ARGB_EFFECT_LANES,
        |_, src, dst, w| argb_shuffle_row(src, dst, shuffler, w),
    )
}

#[allow(clippy::too_many_arguments)]
fn mirror_impl<F>(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    bytes_per_pixel: usize,
    lanes: usize,
    kernel: F,
) -> Result<(), YuvError>
where
    F: Fn(&[u8], &mut [u8], usize) + Sync,
{
    check_packed_source(src, src_stride, width, height, bytes_per_pixel)?;
    check_packed_destination(dst, dst_stride, width, height, bytes_per_pixel)?;

    let width = width as usize;
    let rest = width % lanes;
    let aligned = width - rest;
    let bpp = bytes_per_pixel;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_exact_mut(dst_stride as usize)
            .zip(src.par_chunks_exact(src_stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_exact_mut(dst_stride as usize)
            .zip(src.chunks_exact(src_stride as usize));
    }

    iter.for_each(|(dst, src)| {
        // Last `aligned` source pixels land at the start of the destination.
        if aligned > 0 {
            kernel(&src[rest * bpp..width * bpp], &mut dst[..aligned * bpp], aligned);
        }
        if rest > 0 {
            let mut src_scratch = [0u8; SCRATCH_SIZE];
            let mut dst_scratch = [0u8; SCRATCH_SIZE];
            src_scratch[..rest * bpp].copy_from_slice(&src[..rest * bpp]);
            kernel(&src_scratch[..lanes * bpp], &mut dst_scratch[..lanes * bpp], lanes);
            dst[aligned * bpp..width * bpp]
                .copy_from_slice(&dst_scratch[(lanes - rest) * bpp..lanes * bpp]);
        }
    });

    Ok(())
}

/// Mirrors ARGB image horizontally.
///
/// Source and destination must be distinct buffers.
///
/// # Arguments
///
/// * `src`: Source ARGB slice
/// * `src_stride`: Source stride in bytes
/// * `dst`: Destination ARGB slice
/// * `dst_stride`: Destination stride in bytes
/// * `width`: Image width
/// * `height`: Image height
///
pub fn argb_mirror(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    mirror_impl(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        ARGB.bytes,
        ARGB_MIRROR_LANES,
        argb_mirror_row,
    )
}

/// Mirrors single channel plane horizontally.
pub fn mirror_plane(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    mirror_impl(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        LUMA.bytes,
        MIRROR_LANES,
        mirror_row,
    )
}
