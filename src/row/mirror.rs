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
use crate::row::permute::{permute_bytes, REVERSE_BYTES, REVERSE_PIXELS};

/// Lanes of byte mirroring
pub const MIRROR_LANES: usize = 64;
/// Lanes of ARGB pixel mirroring
pub const ARGB_MIRROR_LANES: usize = 16;

#[inline(always)]
fn mirror_impl<const LANES: usize>(src: &[u8], dst: &mut [u8], bytes: usize, table: &[u8; 16]) {
    debug_assert!(bytes % LANES == 0);
    // Source is walked from the end while destination from the start.
    for (src, dst) in src[..bytes]
        .rchunks_exact(16)
        .zip(dst[..bytes].chunks_exact_mut(16))
    {
        permute_bytes(src, table, dst);
    }
}

/// Writes bytes of `src` in reverse order.
///
/// # Arguments
///
/// * `src`: Source row, at least `width` bytes.
/// * `dst`: Destination row, at least `width` bytes, must not alias `src`.
/// * `width`: Byte count, multiple of [MIRROR_LANES].
///
pub fn mirror_row(src: &[u8], dst: &mut [u8], width: usize) {
    mirror_impl::<MIRROR_LANES>(src, dst, width, &REVERSE_BYTES);
}

/// Writes ARGB pixels of `src_argb` in reverse order, channel order is kept.
///
/// `width` is a pixel count, multiple of [ARGB_MIRROR_LANES].
pub fn argb_mirror_row(src_argb: &[u8], dst_argb: &mut [u8], width: usize) {
    debug_assert!(width % ARGB_MIRROR_LANES == 0);
    mirror_impl::<{ ARGB_MIRROR_LANES * 4 }>(src_argb, dst_argb, width * 4, &REVERSE_PIXELS);
}
