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

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
/// Declares YUV range TV (limited) or Full
pub enum YuvRange {
    /// Limited range Y ∈ [16, 235], UV ∈ [16, 240]
    TV,
    /// Full range Y ∈ [0, 255], UV ∈ [0, 255]
    Full,
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct YuvChromaRange {
    pub bias_y: u32,
    pub bias_uv: u32,
    pub range_y: u32,
    pub range_uv: u32,
    pub range: YuvRange,
}

pub const fn get_yuv_range(range: YuvRange) -> YuvChromaRange {
    match range {
        YuvRange::TV => YuvChromaRange {
            bias_y: 16,
            bias_uv: 128,
            range_y: 219,
            range_uv: 224,
            range,
        },
        YuvRange::Full => YuvChromaRange {
            bias_y: 0,
            bias_uv: 128,
            range_uv: 255,
            range_y: 255,
            range,
        },
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
/// Declares standard prebuilt YUV conversion matrices, check
/// [ITU-R](https://www.itu.int/rec/T-REC-H.273/en) information for more info
pub enum YuvStandardMatrix {
    Bt601,
    Bt709,
    Bt2020,
    Smpte240,
    Bt470_6,
    /// Custom parameters first goes for kr, second for kb.
    Custom(f32, f32),
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct YuvBias {
    pub kr: f32,
    pub kb: f32,
}

pub const fn get_kr_kb(matrix: YuvStandardMatrix) -> YuvBias {
    match matrix {
        YuvStandardMatrix::Bt601 => YuvBias {
            kr: 0.299f32,
            kb: 0.114f32,
        },
        YuvStandardMatrix::Bt709 => YuvBias {
            kr: 0.2126f32,
            kb: 0.0722f32,
        },
        YuvStandardMatrix::Bt2020 => YuvBias {
            kr: 0.2627f32,
            kb: 0.0593f32,
        },
        YuvStandardMatrix::Smpte240 => YuvBias {
            kr: 0.087f32,
            kb: 0.212f32,
        },
        YuvStandardMatrix::Bt470_6 => YuvBias {
            kr: 0.2220f32,
            kb: 0.0713f32,
        },
        YuvStandardMatrix::Custom(kr, kb) => YuvBias { kr, kb },
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum YuvNVOrder {
    UV = 0,
    VU = 1,
}

impl From<u8> for YuvNVOrder {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvNVOrder::UV,
            1 => YuvNVOrder::VU,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum YuvChromaSubsampling {
    Yuv420 = 0,
    Yuv422 = 1,
    Yuv444 = 2,
}

impl From<u8> for YuvChromaSubsampling {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvChromaSubsampling::Yuv420,
            1 => YuvChromaSubsampling::Yuv422,
            2 => YuvChromaSubsampling::Yuv444,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl YuvChromaSubsampling {
    #[inline]
    pub(crate) const fn chroma_width(&self, width: usize) -> usize {
        match self {
            YuvChromaSubsampling::Yuv420 | YuvChromaSubsampling::Yuv422 => width.div_ceil(2),
            YuvChromaSubsampling::Yuv444 => width,
        }
    }

    #[inline]
    pub(crate) const fn chroma_height(&self, height: usize) -> usize {
        match self {
            YuvChromaSubsampling::Yuv420 => height.div_ceil(2),
            YuvChromaSubsampling::Yuv422 | YuvChromaSubsampling::Yuv444 => height,
        }
    }
}

/// Byte order of 8 bit per channel packed RGB in memory.
///
/// Names follow little-endian word order, so `Argb` is stored as B, G, R, A.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RgbLayout {
    /// B, G, R, A
    Argb = 0,
    /// A, B, G, R
    Rgba = 1,
    /// B, G, R
    Rgb24 = 2,
    /// R, G, B
    Raw = 3,
}

impl From<u8> for RgbLayout {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => RgbLayout::Argb,
            1 => RgbLayout::Rgba,
            2 => RgbLayout::Rgb24,
            3 => RgbLayout::Raw,
            _ => {
                panic!("Unknown value {}", value)
            }
        }
    }
}

impl RgbLayout {
    #[inline(always)]
    pub const fn get_channels_count(&self) -> usize {
        match self {
            RgbLayout::Argb | RgbLayout::Rgba => 4,
            RgbLayout::Rgb24 | RgbLayout::Raw => 3,
        }
    }

    #[inline(always)]
    pub const fn has_alpha(&self) -> bool {
        match self {
            RgbLayout::Argb | RgbLayout::Rgba => true,
            RgbLayout::Rgb24 | RgbLayout::Raw => false,
        }
    }

    #[inline(always)]
    pub const fn get_b_channel_offset(&self) -> usize {
        match self {
            RgbLayout::Argb | RgbLayout::Rgb24 => 0,
            RgbLayout::Rgba => 1,
            RgbLayout::Raw => 2,
        }
    }

    #[inline(always)]
    pub const fn get_g_channel_offset(&self) -> usize {
        match self {
            RgbLayout::Argb | RgbLayout::Rgb24 | RgbLayout::Raw => 1,
            RgbLayout::Rgba => 2,
        }
    }

    #[inline(always)]
    pub const fn get_r_channel_offset(&self) -> usize {
        match self {
            RgbLayout::Argb | RgbLayout::Rgb24 => 2,
            RgbLayout::Rgba => 3,
            RgbLayout::Raw => 0,
        }
    }

    /// Alpha offset, meaningful only for layouts with alpha
    #[inline(always)]
    pub const fn get_a_channel_offset(&self) -> usize {
        match self {
            RgbLayout::Argb => 3,
            RgbLayout::Rgba => 0,
            RgbLayout::Rgb24 | RgbLayout::Raw => 0,
        }
    }
}

#[repr(usize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Yuy2Description {
    YUYV = 0,
    UYVY = 1,
}

impl From<usize> for Yuy2Description {
    fn from(value: usize) -> Self {
        match value {
            0 => Yuy2Description::YUYV,
            1 => Yuy2Description::UYVY,
            _ => {
                panic!("Not supported value {}", value)
            }
        }
    }
}

impl Yuy2Description {
    #[inline]
    pub(crate) const fn get_u_position(&self) -> usize {
        match self {
            Yuy2Description::YUYV => 1,
            Yuy2Description::UYVY => 0,
        }
    }

    #[inline]
    pub(crate) const fn get_v_position(&self) -> usize {
        match self {
            Yuy2Description::YUYV => 3,
            Yuy2Description::UYVY => 2,
        }
    }

    #[inline(always)]
    pub(crate) const fn get_first_y_position(&self) -> usize {
        match self {
            Yuy2Description::YUYV => 0,
            Yuy2Description::UYVY => 1,
        }
    }

    #[inline]
    pub(crate) const fn get_second_y_position(&self) -> usize {
        match self {
            Yuy2Description::YUYV => 2,
            Yuy2Description::UYVY => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_offsets_are_distinct() {
        for layout in [
            RgbLayout::Argb,
            RgbLayout::Rgba,
            RgbLayout::Rgb24,
            RgbLayout::Raw,
        ] {
            let mut offsets = vec![
                layout.get_b_channel_offset(),
                layout.get_g_channel_offset(),
                layout.get_r_channel_offset(),
            ];
            if layout.has_alpha() {
                offsets.push(layout.get_a_channel_offset());
            }
            offsets.sort();
            offsets.dedup();
            assert_eq!(offsets.len(), layout.get_channels_count());
            assert!(offsets.iter().all(|&x| x < layout.get_channels_count()));
            assert_eq!(RgbLayout::from(layout as u8), layout);
        }
    }

    #[test]
    fn test_yuy2_positions() {
        let yuyv = Yuy2Description::YUYV;
        assert_eq!(
            [
                yuyv.get_first_y_position(),
                yuyv.get_u_position(),
                yuyv.get_second_y_position(),
                yuyv.get_v_position()
            ],
            [0, 1, 2, 3]
        );
        let uyvy = Yuy2Description::UYVY;
        assert_eq!(
            [
                uyvy.get_u_position(),
                uyvy.get_first_y_position(),
                uyvy.get_v_position(),
                uyvy.get_second_y_position()
            ],
            [0, 1, 2, 3]
        );
    }

    #[test]
    fn test_chroma_dimensions() {
        assert_eq!(YuvChromaSubsampling::Yuv420.chroma_width(7), 4);
        assert_eq!(YuvChromaSubsampling::Yuv420.chroma_height(7), 4);
        assert_eq!(YuvChromaSubsampling::Yuv422.chroma_height(7), 7);
        assert_eq!(YuvChromaSubsampling::Yuv444.chroma_width(7), 7);
    }
}
