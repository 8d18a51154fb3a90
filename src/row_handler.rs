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

/// Largest batch in bytes any row kernel reads or writes per plane
pub(crate) const SCRATCH_SIZE: usize = 128;

/// Smallest addressable group of a plane: `bytes` bytes cover `pixels` image columns.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct PixelUnit {
    pub(crate) bytes: usize,
    pub(crate) pixels: usize,
}

impl PixelUnit {
    pub(crate) const fn new(bytes: usize) -> Self {
        PixelUnit { bytes, pixels: 1 }
    }

    /// Bytes occupied by `pixels` columns
    #[inline(always)]
    pub(crate) const fn bytes_for(&self, pixels: usize) -> usize {
        pixels.div_ceil(self.pixels) * self.bytes
    }
}

pub(crate) const LUMA: PixelUnit = PixelUnit::new(1);
pub(crate) const ARGB: PixelUnit = PixelUnit::new(4);
pub(crate) const RGB24: PixelUnit = PixelUnit::new(3);
pub(crate) const RGB16: PixelUnit = PixelUnit::new(2);
/// Planar chroma sample shared by two columns
pub(crate) const CHROMA: PixelUnit = PixelUnit {
    bytes: 1,
    pixels: 2,
};
/// Interleaved chroma pair shared by two columns
pub(crate) const CHROMA_PAIR: PixelUnit = PixelUnit {
    bytes: 2,
    pixels: 2,
};
/// YUYV or UYVY macropixel
pub(crate) const MACROPIXEL: PixelUnit = PixelUnit {
    bytes: 4,
    pixels: 2,
};

/// Copies `src` into the head of `dst` and repeats its last `unit` bytes over the rest.
#[inline]
pub(crate) fn fill_edge(dst: &mut [u8], src: &[u8], unit: usize) {
    let (head, tail) = dst.split_at_mut(src.len());
    head.copy_from_slice(src);
    if let Some(start) = src.len().checked_sub(unit) {
        let last = &src[start..];
        for chunk in tail.chunks_exact_mut(unit) {
            chunk.copy_from_slice(last);
        }
    }
}

/// Runs `kernel` over a full row of `width` columns.
///
/// The lane aligned part is handed to the kernel directly, the remainder is
/// converted as one more batch in scratch memory, with inputs padded by their
/// last unit, and only the remainder is copied back.
#[inline]
pub(crate) fn process_row<const IN: usize, const OUT: usize, F>(
    src: [(&[u8], PixelUnit); IN],
    mut dst: [(&mut [u8], PixelUnit); OUT],
    width: usize,
    lanes: usize,
    kernel: F,
) where
    F: Fn([&[u8]; IN], [&mut [u8]; OUT], usize),
{
    let aligned = width - width % lanes;
    if aligned > 0 {
        kernel(
            src.map(|(plane, _)| plane),
            dst.each_mut().map(|(plane, _)| &mut **plane),
            aligned,
        );
    }
    let rest = width - aligned;
    if rest == 0 {
        return;
    }

    let mut src_scratch = [[0u8; SCRATCH_SIZE]; IN];
    for (scratch, (plane, unit)) in src_scratch.iter_mut().zip(src.iter()) {
        debug_assert!(unit.bytes_for(lanes) <= SCRATCH_SIZE);
        let start = unit.bytes_for(aligned);
        let end = start + unit.bytes_for(rest);
        fill_edge(
            &mut scratch[..unit.bytes_for(lanes)],
            &plane[start..end],
            unit.bytes,
        );
    }

    let mut dst_scratch = [[0u8; SCRATCH_SIZE]; OUT];
    kernel(
        src_scratch.each_ref().map(|x| &x[..]),
        dst_scratch.each_mut().map(|x| &mut x[..]),
        lanes,
    );

    for (scratch, (plane, unit)) in dst_scratch.iter().zip(dst.iter_mut()) {
        let start = unit.bytes_for(aligned);
        let count = unit.bytes_for(rest);
        plane[start..start + count].copy_from_slice(&scratch[..count]);
    }
}
