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

//! Bit layouts of 16 bit packed RGB, all little-endian words.
//!
//! | format   | bits 15..0                 |
//! |----------|----------------------------|
//! | RGB565   | `RRRRRGGG GGGBBBBB`        |
//! | ARGB1555 | `ARRRRRGG GGGBBBBB`        |
//! | ARGB4444 | `AAAARRRR GGGGBBBB`        |
//!
//! Narrowing truncates low bits, widening replicates the top bits of the field
//! into the vacated low bits so that full intensity stays full intensity.

/// Widens 5 bit field to 8 bits
#[inline(always)]
pub const fn expand5(v: u16) -> u8 {
    let v = v & 0x1F;
    ((v << 3) | (v >> 2)) as u8
}

/// Widens 6 bit field to 8 bits
#[inline(always)]
pub const fn expand6(v: u16) -> u8 {
    let v = v & 0x3F;
    ((v << 2) | (v >> 4)) as u8
}

/// Widens 4 bit field to 8 bits
#[inline(always)]
pub const fn expand4(v: u16) -> u8 {
    let v = v & 0xF;
    (v | (v << 4)) as u8
}

#[inline(always)]
pub const fn pack_rgb565(b: u8, g: u8, r: u8) -> u16 {
    (b as u16 >> 3) | ((g as u16 >> 2) << 5) | ((r as u16 >> 3) << 11)
}

/// Returns B, G, R
#[inline(always)]
pub const fn unpack_rgb565(v: u16) -> [u8; 3] {
    [expand5(v), expand6(v >> 5), expand5(v >> 11)]
}

#[inline(always)]
pub const fn pack_argb1555(b: u8, g: u8, r: u8, a: u8) -> u16 {
    (b as u16 >> 3) | ((g as u16 >> 3) << 5) | ((r as u16 >> 3) << 10) | ((a as u16 >> 7) << 15)
}

/// Returns B, G, R, A. Alpha bit becomes 0 or 255.
#[inline(always)]
pub const fn unpack_argb1555(v: u16) -> [u8; 4] {
    [
        expand5(v),
        expand5(v >> 5),
        expand5(v >> 10),
        0u8.wrapping_sub((v >> 15) as u8),
    ]
}

#[inline(always)]
pub const fn pack_argb4444(b: u8, g: u8, r: u8, a: u8) -> u16 {
    (b as u16 >> 4) | ((g as u16 >> 4) << 4) | ((r as u16 >> 4) << 8) | ((a as u16 >> 4) << 12)
}

/// Returns B, G, R, A
#[inline(always)]
pub const fn unpack_argb4444(v: u16) -> [u8; 4] {
    [expand4(v), expand4(v >> 4), expand4(v >> 8), expand4(v >> 12)]
}

#[inline(always)]
pub(crate) fn read_u16(src: &[u8]) -> u16 {
    u16::from_le_bytes([src[0], src[1]])
}

#[inline(always)]
pub(crate) fn write_u16(dst: &mut [u8], v: u16) {
    dst[..2].copy_from_slice(&v.to_le_bytes());
}

/// Raw fields of RGB565 without widening, B, G, R
#[inline(always)]
pub(crate) const fn fields_rgb565(v: u16) -> [u16; 3] {
    [v & 0x1F, (v >> 5) & 0x3F, v >> 11]
}

/// Raw color fields of ARGB1555 without widening, B, G, R
#[inline(always)]
pub(crate) const fn fields_argb1555(v: u16) -> [u16; 3] {
    [v & 0x1F, (v >> 5) & 0x1F, (v >> 10) & 0x1F]
}
