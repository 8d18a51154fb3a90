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

/// Table entry that produces an opaque `0xFF` byte instead of a source byte.
pub const OPAQUE: u8 = 0xFF;

/// Gathers `dst[i] = src[table[i]]` for every table entry, `OPAQUE` writes `0xFF`.
///
/// Destination must hold at least `N` bytes, source must cover every index in the table.
#[inline(always)]
pub fn permute_bytes<const N: usize>(src: &[u8], table: &[u8; N], dst: &mut [u8]) {
    for (dst, &index) in dst[..N].iter_mut().zip(table.iter()) {
        *dst = if index == OPAQUE {
            0xFF
        } else {
            src[index as usize]
        };
    }
}

/// 4 pixels B,G,R,A into 4 pixels B,G,R
pub const ARGB_TO_RGB24: [u8; 12] = [0, 1, 2, 4, 5, 6, 8, 9, 10, 12, 13, 14];

/// 4 pixels B,G,R,A into 4 pixels R,G,B
pub const ARGB_TO_RAW: [u8; 12] = [2, 1, 0, 6, 5, 4, 10, 9, 8, 14, 13, 12];

/// 4 pixels B,G,R into 4 pixels B,G,R,A with opaque alpha
pub const RGB24_TO_ARGB: [u8; 16] = [
    0, 1, 2, OPAQUE, 3, 4, 5, OPAQUE, 6, 7, 8, OPAQUE, 9, 10, 11, OPAQUE,
];

/// 4 pixels R,G,B into 4 pixels B,G,R,A with opaque alpha
pub const RAW_TO_ARGB: [u8; 16] = [
    2, 1, 0, OPAQUE, 5, 4, 3, OPAQUE, 8, 7, 6, OPAQUE, 11, 10, 9, OPAQUE,
];

/// 16 bytes in reverse order
pub const REVERSE_BYTES: [u8; 16] = [15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];

/// 4 pixels of 4 bytes in reverse order, bytes inside pixel are kept
pub const REVERSE_PIXELS: [u8; 16] = [12, 13, 14, 15, 8, 9, 10, 11, 4, 5, 6, 7, 0, 1, 2, 3];

/// 4 interleaved chroma pairs V,U into U,V
pub const SWAP_CHROMA_PAIRS: [u8; 8] = [1, 0, 3, 2, 5, 4, 7, 6];

/// 4 gray samples into 4 opaque pixels with gray in B, G and R
pub const BROADCAST_TO_ARGB: [u8; 16] = [
    0, 0, 0, OPAQUE, 1, 1, 1, OPAQUE, 2, 2, 2, OPAQUE, 3, 3, 3, OPAQUE,
];

/// Expands per pixel channel order into a table for 4 pixels.
///
/// Each entry is taken modulo 4 so pixels never read from their neighbours.
pub const fn shuffle_table(shuffler: [u8; 4]) -> [u8; 16] {
    let mut table = [0u8; 16];
    let mut i = 0usize;
    while i < 16 {
        table[i] = (i as u8 & !3) + (shuffler[i & 3] & 3);
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_to_rgb24_drops_alpha() {
        let src: [u8; 16] = core::array::from_fn(|i| i as u8 + 1);
        let mut dst = [0u8; 12];
        permute_bytes(&src, &ARGB_TO_RGB24, &mut dst);
        assert_eq!(dst, [1, 2, 3, 5, 6, 7, 9, 10, 11, 13, 14, 15]);
    }

    #[test]
    fn test_argb_to_raw_swaps_red_blue() {
        let src = [10, 20, 30, 40, 11, 21, 31, 41, 12, 22, 32, 42, 13, 23, 33, 43];
        let mut dst = [0u8; 12];
        permute_bytes(&src, &ARGB_TO_RAW, &mut dst);
        assert_eq!(dst, [30, 20, 10, 31, 21, 11, 32, 22, 12, 33, 23, 13]);
    }

    #[test]
    fn test_rgb24_and_raw_to_argb() {
        let src = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let mut dst = [0u8; 16];
        permute_bytes(&src, &RGB24_TO_ARGB, &mut dst);
        assert_eq!(
            dst,
            [1, 2, 3, 255, 4, 5, 6, 255, 7, 8, 9, 255, 10, 11, 12, 255]
        );
        permute_bytes(&src, &RAW_TO_ARGB, &mut dst);
        assert_eq!(
            dst,
            [3, 2, 1, 255, 6, 5, 4, 255, 9, 8, 7, 255, 12, 11, 10, 255]
        );
    }

    #[test]
    fn test_reverse_tables() {
        let src: [u8; 16] = core::array::from_fn(|i| i as u8);
        let mut dst = [0u8; 16];
        permute_bytes(&src, &REVERSE_BYTES, &mut dst);
        assert_eq!(dst[0], 15);
        assert_eq!(dst[15], 0);
        permute_bytes(&src, &REVERSE_PIXELS, &mut dst);
        assert_eq!(dst, [12, 13, 14, 15, 8, 9, 10, 11, 4, 5, 6, 7, 0, 1, 2, 3]);
    }

    #[test]
    fn test_swap_and_broadcast() {
        let vu = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut uv = [0u8; 8];
        permute_bytes(&vu, &SWAP_CHROMA_PAIRS, &mut uv);
        assert_eq!(uv, [2, 1, 4, 3, 6, 5, 8, 7]);

        let gray = [7, 8, 9, 10];
        let mut argb = [0u8; 16];
        permute_bytes(&gray, &BROADCAST_TO_ARGB, &mut argb);
        assert_eq!(
            argb,
            [7, 7, 7, 255, 8, 8, 8, 255, 9, 9, 9, 255, 10, 10, 10, 255]
        );
    }

    #[test]
    fn test_shuffle_table_stays_inside_pixel() {
        let table = shuffle_table([3, 2, 1, 0]);
        assert_eq!(table, [3, 2, 1, 0, 7, 6, 5, 4, 11, 10, 9, 8, 15, 14, 13, 12]);
        let table = shuffle_table([7, 4, 5, 6]);
        assert_eq!(&table[4..8], &[7, 4, 5, 6]);
    }
}
