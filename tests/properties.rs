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
use proptest::prelude::*;
use yuvrow::row::{
    argb_add_row, argb_attenuate_row, argb_mirror_row, argb_to_rgb24_row, argb_to_rgb565_row,
    i422_to_argb1555_row, i422_to_argb4444_row, i422_to_argb_row, i422_to_rgb565_row,
    mirror_row, rgb24_to_argb_row, rgb565_to_argb_row, yuy2_to_uv_row, ARGB_ADD_LANES,
    ARGB_EFFECT_LANES, ARGB_MIRROR_LANES, I422_TO_ARGB_LANES, MIRROR_LANES, RGB16_LANES,
    RGB24_LANES, YUY2_LANES,
};
use yuvrow::{argb_to_rgb24, rgb24_to_argb, yuv420_to_argb, YuvConstants, YuvPlanarImage};

fn any_constants() -> impl Strategy<Value = YuvConstants> {
    prop_oneof![
        Just(YuvConstants::BT601),
        Just(YuvConstants::JPEG),
        Just(YuvConstants::BT709),
    ]
}

fn bytes(len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), len)
}

proptest! {
    #[test]
    fn yuv_to_rgb_alpha_is_opaque_and_16_bit_fields_in_range(
        y in bytes(I422_TO_ARGB_LANES),
        u in bytes(I422_TO_ARGB_LANES / 2),
        v in bytes(I422_TO_ARGB_LANES / 2),
        constants in any_constants(),
    ) {
        let width = I422_TO_ARGB_LANES;
        let mut argb = vec![0u8; width * 4];
        i422_to_argb_row(&y, &u, &v, &mut argb, &constants, width);
        prop_assert!(argb.chunks_exact(4).all(|px| px[3] == 255));

        let mut argb4444 = vec![0u8; width * 2];
        let mut argb1555 = vec![0u8; width * 2];
        let mut rgb565 = vec![0u8; width * 2];
        i422_to_argb4444_row(&y, &u, &v, &mut argb4444, &constants, width);
        i422_to_argb1555_row(&y, &u, &v, &mut argb1555, &constants, width);
        i422_to_rgb565_row(&y, &u, &v, &mut rgb565, &constants, width);
        for ((a, b), px) in argb4444
            .chunks_exact(2)
            .zip(argb1555.chunks_exact(2))
            .zip(argb.chunks_exact(4))
        {
            let a = u16::from_le_bytes([a[0], a[1]]);
            let b = u16::from_le_bytes([b[0], b[1]]);
            prop_assert_eq!(a >> 12, 0xF);
            prop_assert_eq!(b >> 15, 1);
            prop_assert_eq!((a & 0xF) as u8, px[0] >> 4);
            prop_assert_eq!((b & 0x1F) as u8, px[0] >> 3);
        }
    }

    #[test]
    fn argb_rgb24_round_trip(pixels in bytes(RGB24_LANES * 3), width in 1usize..=RGB24_LANES) {
        let rgb: Vec<u8> = pixels[..width * 3].to_vec();
        let argb: Vec<u8> = rgb.chunks_exact(3).flat_map(|x| [x[0], x[1], x[2], 255]).collect();
        let mut packed = vec![0u8; width * 3];
        argb_to_rgb24(
            &argb,
            width as u32 * 4,
            &mut packed,
            width as u32 * 3,
            width as u32,
            1,
        )
        .unwrap();
        prop_assert_eq!(&packed, &rgb);
        let mut back = vec![0u8; width * 4];
        rgb24_to_argb(
            &packed,
            width as u32 * 3,
            &mut back,
            width as u32 * 4,
            width as u32,
            1,
        )
        .unwrap();
        prop_assert_eq!(&back, &argb);
    }

    #[test]
    fn argb_rgb24_row_round_trip(rgb in bytes(RGB24_LANES * 3)) {
        let mut argb = vec![0u8; RGB24_LANES * 4];
        rgb24_to_argb_row(&rgb, &mut argb, RGB24_LANES);
        let mut packed = vec![0u8; RGB24_LANES * 3];
        argb_to_rgb24_row(&argb, &mut packed, RGB24_LANES);
        prop_assert_eq!(packed, rgb);
    }

    #[test]
    fn rgb565_widen_then_truncate_is_identity(words in bytes(RGB16_LANES * 2)) {
        let mut argb = vec![0u8; RGB16_LANES * 4];
        rgb565_to_argb_row(&words, &mut argb, RGB16_LANES);
        let mut packed = vec![0u8; RGB16_LANES * 2];
        argb_to_rgb565_row(&argb, &mut packed, RGB16_LANES);
        prop_assert_eq!(&packed, &words);
        let mut again = vec![0u8; RGB16_LANES * 4];
        rgb565_to_argb_row(&packed, &mut again, RGB16_LANES);
        prop_assert_eq!(again, argb);
    }

    #[test]
    fn mirror_twice_is_identity(
        row in bytes(MIRROR_LANES * 2),
        argb in bytes(ARGB_MIRROR_LANES * 4),
    ) {
        let mut once = vec![0u8; row.len()];
        let mut twice = vec![0u8; row.len()];
        mirror_row(&row, &mut once, row.len());
        mirror_row(&once, &mut twice, row.len());
        prop_assert_eq!(&twice, &row);

        let mut once = vec![0u8; argb.len()];
        let mut twice = vec![0u8; argb.len()];
        argb_mirror_row(&argb, &mut once, ARGB_MIRROR_LANES);
        argb_mirror_row(&once, &mut twice, ARGB_MIRROR_LANES);
        prop_assert_eq!(&twice, &argb);
    }

    #[test]
    fn add_saturates(a in bytes(ARGB_ADD_LANES * 4), b in bytes(ARGB_ADD_LANES * 4)) {
        let mut dst = vec![0u8; a.len()];
        argb_add_row(&a, &b, &mut dst, ARGB_ADD_LANES);
        for ((&a, &b), &d) in a.iter().zip(b.iter()).zip(dst.iter()) {
            prop_assert!(d >= a && d >= b);
            prop_assert_eq!(d, a.saturating_add(b));
        }
    }

    #[test]
    fn yuy2_chroma_is_rounded_half_up(
        top in bytes(YUY2_LANES * 2),
        bottom in bytes(YUY2_LANES * 2),
    ) {
        let mut u = vec![0u8; YUY2_LANES / 2];
        let mut v = vec![0u8; YUY2_LANES / 2];
        yuy2_to_uv_row(&top, &bottom, &mut u, &mut v, YUY2_LANES);
        for (i, (t, b)) in top.chunks_exact(4).zip(bottom.chunks_exact(4)).enumerate() {
            prop_assert_eq!(u[i] as u16, (t[1] as u16 + b[1] as u16 + 1) >> 1);
            prop_assert_eq!(v[i] as u16, (t[3] as u16 + b[3] as u16 + 1) >> 1);
        }
    }

    #[test]
    fn attenuate_zero_alpha_clears_color(colors in bytes(ARGB_EFFECT_LANES * 4)) {
        let src: Vec<u8> = colors
            .chunks_exact(4)
            .flat_map(|x| [x[0], x[1], x[2], 0])
            .collect();
        let mut dst = vec![0xAAu8; src.len()];
        argb_attenuate_row(&src, &mut dst, ARGB_EFFECT_LANES);
        prop_assert!(dst.iter().all(|&x| x == 0));
    }

    #[test]
    fn frame_matches_reference_for_any_width(
        width in 1u32..70,
        height in 1u32..6,
        seed in any::<u8>(),
    ) {
        let chroma_width = width.div_ceil(2) as usize;
        let chroma_height = height.div_ceil(2) as usize;
        let y_plane: Vec<u8> = (0..width as usize * height as usize)
            .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
            .collect();
        let u_plane: Vec<u8> = (0..chroma_width * chroma_height)
            .map(|i| (i as u8).wrapping_mul(7) ^ seed)
            .collect();
        let v_plane: Vec<u8> = (0..chroma_width * chroma_height)
            .map(|i| (i as u8).wrapping_mul(13) ^ seed)
            .collect();
        let image = YuvPlanarImage {
            y_plane: &y_plane,
            y_stride: width,
            u_plane: &u_plane,
            u_stride: chroma_width as u32,
            v_plane: &v_plane,
            v_stride: chroma_width as u32,
            width,
            height,
        };
        let constants = YuvConstants::BT601;
        let mut argb = vec![0u8; width as usize * 4 * height as usize];
        yuv420_to_argb(&image, &mut argb, width * 4, &constants).unwrap();
        for y in 0..height as usize {
            for x in 0..width as usize {
                let chroma = (y / 2) * chroma_width + x / 2;
                let bgr = constants.yuv_to_bgr(
                    y_plane[y * width as usize + x],
                    u_plane[chroma],
                    v_plane[chroma],
                );
                let offset = (y * width as usize + x) * 4;
                prop_assert_eq!(&argb[offset..offset + 3], &bgr[..]);
            }
        }
    }
}

#[test]
fn limited_range_white_is_white() {
    let width = I422_TO_ARGB_LANES;
    let y = vec![235u8; width];
    let chroma = vec![128u8; width / 2];
    let mut argb = vec![0u8; width * 4];
    for constants in [YuvConstants::BT601, YuvConstants::BT709] {
        i422_to_argb_row(&y, &chroma, &chroma, &mut argb, &constants, width);
        for px in argb.chunks_exact(4) {
            for &c in &px[..3] {
                assert!(c >= 254, "Channel {} is not white", c);
            }
        }
    }
}

#[test]
fn saturating_add_does_not_wrap() {
    let a = vec![0xFFu8; ARGB_ADD_LANES * 4];
    let b = vec![0x10u8; ARGB_ADD_LANES * 4];
    let mut dst = vec![0u8; ARGB_ADD_LANES * 4];
    argb_add_row(&a, &b, &mut dst, ARGB_ADD_LANES);
    assert!(dst.iter().all(|&x| x == 0xFF));
}
