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
use crate::row::{sobel_row, sobel_to_plane_row, sobel_xy_row, SOBEL_LANES, SOBEL_TO_PLANE_LANES};
use crate::row_handler::{process_row, PixelUnit, ARGB, LUMA};
use crate::yuv_error::{check_packed_destination, check_y8_channel};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Gradient planes produced by a sobel filter
#[derive(Debug, Clone)]
pub struct SobelGradients<'a> {
    /// Horizontal gradient magnitudes
    pub sobel_x: &'a [u8],
    /// Elements per row
    pub sobel_x_stride: u32,
    /// Vertical gradient magnitudes
    pub sobel_y: &'a [u8],
    /// Elements per row
    pub sobel_y_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl SobelGradients<'_> {
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_y8_channel(self.sobel_x, self.sobel_x_stride, self.width, self.height)?;
        check_y8_channel(self.sobel_y, self.sobel_y_stride, self.width, self.height)?;
        Ok(())
    }
}

fn sobel_impl<F>(
    gradients: &SobelGradients,
    dst: &mut [u8],
    dst_stride: u32,
    dst_unit: PixelUnit,
    lanes: usize,
    kernel: F,
) -> Result<(), YuvError>
where
    F: Fn(&[u8], &[u8], &mut [u8], usize) + Sync,
{
    gradients.check_constraints()?;
    check_packed_destination(
        dst,
        dst_stride,
        gradients.width,
        gradients.height,
        dst_unit.bytes,
    )?;

    let width = gradients.width as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_exact_mut(dst_stride as usize)
            .zip(gradients.sobel_x.par_chunks_exact(gradients.sobel_x_stride as usize))
            .zip(gradients.sobel_y.par_chunks_exact(gradients.sobel_y_stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_exact_mut(dst_stride as usize)
            .zip(gradients.sobel_x.chunks_exact(gradients.sobel_x_stride as usize))
            .zip(gradients.sobel_y.chunks_exact(gradients.sobel_y_stride as usize));
    }

    iter.for_each(|((dst, sobel_x), sobel_y)| {
        process_row(
            [(&sobel_x[..width], LUMA), (&sobel_y[..width], LUMA)],
            [(&mut dst[..dst_unit.bytes_for(width)], dst_unit)],
            width,
            lanes,
            |[x, y], [dst], w| kernel(x, y, dst, w),
        );
    });

    Ok(())
}

/// Composes gradients into opaque gray ARGB.
///
/// Every color channel receives `min(x + y, 255)`, alpha is 255.
///
/// # Arguments
///
/// * `gradients`: Horizontal and vertical gradient planes.
/// * `argb`: Destination ARGB slice.
/// * `argb_stride`: Bytes per destination row.
///
/// # Errors
///
/// Returns an error if planes or destination do not match dimensions.
///
pub fn sobel_to_argb(
    gradients: &SobelGradients,
    argb: &mut [u8],
    argb_stride: u32,
) -> Result<(), YuvError> {
    sobel_impl(gradients, argb, argb_stride, ARGB, SOBEL_LANES, sobel_row)
}

/// Composes gradients into a single plane of `min(x + y, 255)`.
pub fn sobel_to_plane(
    gradients: &SobelGradients,
    plane: &mut [u8],
    plane_stride: u32,
) -> Result<(), YuvError> {
    sobel_impl(
        gradients,
        plane,
        plane_stride,
        LUMA,
        SOBEL_TO_PLANE_LANES,
        sobel_to_plane_row,
    )
}

/// Composes gradients into ARGB visualization.
///
/// Vertical gradient is stored as B, horizontal as R, the saturated sum as G and alpha.
pub fn sobel_xy_to_argb(
    gradients: &SobelGradients,
    argb: &mut [u8],
    argb_stride: u32,
) -> Result<(), YuvError> {
    sobel_impl(gradients, argb, argb_stride, ARGB, SOBEL_LANES, sobel_xy_row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_plane(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random_range(0..=255u8)).collect()
    }

    #[test]
    fn test_sobel_compositions() {
        for (width, height) in [(1usize, 1usize), (15, 2), (33, 3), (64, 1)] {
            let sobel_x = random_plane(width * height);
            let sobel_y = random_plane(width * height);
            let gradients = SobelGradients {
                sobel_x: &sobel_x,
                sobel_x_stride: width as u32,
                sobel_y: &sobel_y,
                sobel_y_stride: width as u32,
                width: width as u32,
                height: height as u32,
            };
            let mut argb = vec![0u8; width * 4 * height];
            let mut xy = vec![0u8; width * 4 * height];
            let mut plane = vec![0u8; width * height];
            sobel_to_argb(&gradients, &mut argb, width as u32 * 4).unwrap();
            sobel_xy_to_argb(&gradients, &mut xy, width as u32 * 4).unwrap();
            sobel_to_plane(&gradients, &mut plane, width as u32).unwrap();
            for i in 0..width * height {
                let (x, y) = (sobel_x[i], sobel_y[i]);
                let s = x.saturating_add(y);
                assert_eq!(&argb[i * 4..i * 4 + 4], &[s, s, s, 255]);
                assert_eq!(&xy[i * 4..i * 4 + 4], &[y, s, x, s]);
                assert_eq!(plane[i], s);
            }
        }
    }

    #[test]
    fn test_mismatched_gradients() {
        let sobel_x = vec![0u8; 16];
        let sobel_y = vec![0u8; 12];
        let gradients = SobelGradients {
            sobel_x: &sobel_x,
            sobel_x_stride: 4,
            sobel_y: &sobel_y,
            sobel_y_stride: 4,
            width: 4,
            height: 4,
        };
        let mut plane = vec![0u8; 16];
        assert!(matches!(
            sobel_to_plane(&gradients, &mut plane, 4),
            Err(YuvError::LumaPlaneSizeMismatch(_))
        ));
    }
}
