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
use crate::yuv_support::YuvChromaSubsampling;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum YuvError {
    #[error("Destination size mismatch: expected={}, received={}", .0.expected, .0.received)]
    DestinationSizeMismatch(MismatchedSize),
    #[error("Destination must have size at least {} but it is {}", .0.expected, .0.received)]
    MinimumDestinationSizeMismatch(MismatchedSize),
    #[error("Source size mismatch: expected={}, received={}", .0.expected, .0.received)]
    SourceSizeMismatch(MismatchedSize),
    #[error("Image size overflow pointer capabilities")]
    PointerOverflow,
    #[error("Zero sized images is not supported")]
    ZeroBaseSize,
    #[error("Luma plane have invalid size, it must be {}, but it was {}", .0.expected, .0.received)]
    LumaPlaneSizeMismatch(MismatchedSize),
    #[error("Luma plane have invalid size, it must be at least {}, but it was {}", .0.expected, .0.received)]
    LumaPlaneMinimumSizeMismatch(MismatchedSize),
    #[error("Chroma plane have invalid size, it must be {}, but it was {}", .0.expected, .0.received)]
    ChromaPlaneSizeMismatch(MismatchedSize),
    #[error("Chroma plane have invalid size, it must be at least {}, but it was {}", .0.expected, .0.received)]
    ChromaPlaneMinimumSizeMismatch(MismatchedSize),
    #[error("Alpha plane have invalid size, it must be {}, but it was {}", .0.expected, .0.received)]
    AlphaPlaneSizeMismatch(MismatchedSize),
    #[error("Source image is {0}x{1} but destination is {2}x{3}")]
    ImagesSizesNotMatch(u32, u32, u32, u32),
    #[error("Invalid stride {stride}, row requires at least {minimum} elements")]
    InvalidStride { stride: u32, minimum: usize },
    #[error("Matrix with kr={0}, kb={1} has zero green weight")]
    InvalidMatrix(f32, f32),
}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), YuvError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<(), YuvError> {
    let (product0, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    let (_, overflow) = product0.overflowing_mul(v2);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_non_zero(width: u32, height: u32) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_images_sizes(
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
) -> Result<(), YuvError> {
    if src_width != dst_width || src_height != dst_height {
        return Err(YuvError::ImagesSizesNotMatch(
            src_width, src_height, dst_width, dst_height,
        ));
    }
    Ok(())
}

/// Validates packed destination of `channels` bytes per pixel
#[inline]
pub(crate) fn check_packed_destination(
    arr: &[u8],
    stride: u32,
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), YuvError> {
    check_non_zero(width, height)?;
    check_overflow_v3(width as usize, height as usize, channels)?;
    check_overflow_v2(stride as usize, height as usize)?;
    if (stride as usize) < width as usize * channels {
        return Err(YuvError::MinimumDestinationSizeMismatch(MismatchedSize {
            expected: width as usize * height as usize * channels,
            received: stride as usize * height as usize,
        }));
    }
    if arr.len() != stride as usize * height as usize {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: arr.len(),
        }));
    }
    Ok(())
}

/// Validates packed source of `channels` bytes per pixel
#[inline]
pub(crate) fn check_packed_source(
    arr: &[u8],
    stride: u32,
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), YuvError> {
    check_non_zero(width, height)?;
    check_overflow_v3(width as usize, height as usize, channels)?;
    check_overflow_v2(stride as usize, height as usize)?;
    if (stride as usize) < width as usize * channels {
        return Err(YuvError::InvalidStride {
            stride,
            minimum: width as usize * channels,
        });
    }
    if arr.len() != stride as usize * height as usize {
        return Err(YuvError::SourceSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: arr.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_y8_channel<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    check_non_zero(width, height)?;
    check_overflow_v2(stride as usize, height as usize)?;
    check_overflow_v2(width as usize, height as usize)?;
    if (stride as usize) < (width as usize) {
        return Err(YuvError::LumaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: width as usize * height as usize,
            received: stride as usize * height as usize,
        }));
    }
    if stride as usize * height as usize != data.len() {
        return Err(YuvError::LumaPlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_alpha_channel<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    check_overflow_v2(stride as usize, height as usize)?;
    if (stride as usize) < (width as usize) || stride as usize * height as usize != data.len() {
        return Err(YuvError::AlphaPlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}

/// Validates planar chroma channel, `elements` is 2 for interleaved chroma
#[inline]
pub(crate) fn check_chroma_channel<V>(
    data: &[V],
    stride: u32,
    image_width: u32,
    image_height: u32,
    sampling: YuvChromaSubsampling,
    elements: usize,
) -> Result<(), YuvError> {
    let chroma_min_width = sampling.chroma_width(image_width as usize) * elements;
    let chroma_height = sampling.chroma_height(image_height as usize);
    check_overflow_v2(stride as usize, chroma_height)?;
    check_overflow_v2(chroma_min_width, chroma_height)?;
    if (stride as usize) < chroma_min_width {
        return Err(YuvError::ChromaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: chroma_min_width * chroma_height,
            received: stride as usize * chroma_height,
        }));
    }
    if stride as usize * chroma_height != data.len() {
        return Err(YuvError::ChromaPlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * chroma_height,
            received: data.len(),
        }));
    }
    Ok(())
}
