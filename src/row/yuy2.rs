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
use crate::numerics::avg_round;
use crate::yuv_support::Yuy2Description;

/// Lanes of every packed 4:2:2 kernel, in luma samples
pub const YUY2_LANES: usize = 32;

#[inline(always)]
fn packed_to_y_impl<const YUY2_SOURCE: usize>(src: &[u8], dst_y: &mut [u8], width: usize) {
    let description: Yuy2Description = YUY2_SOURCE.into();
    debug_assert!(width % YUY2_LANES == 0);
    for (src_batch, y_batch) in src[..width * 2]
        .chunks_exact(YUY2_LANES * 2)
        .zip(dst_y[..width].chunks_exact_mut(YUY2_LANES))
    {
        for (src, y_pair) in src_batch.chunks_exact(4).zip(y_batch.chunks_exact_mut(2)) {
            y_pair[0] = src[description.get_first_y_position()];
            y_pair[1] = src[description.get_second_y_position()];
        }
    }
}

#[inline(always)]
fn packed_to_uv_impl<const YUY2_SOURCE: usize>(
    src: &[u8],
    src_next: &[u8],
    dst_u: &mut [u8],
    dst_v: &mut [u8],
    width: usize,
) {
    let description: Yuy2Description = YUY2_SOURCE.into();
    debug_assert!(width % YUY2_LANES == 0);
    let chroma_width = width / 2;
    for (((src_batch, next_batch), u_batch), v_batch) in src[..width * 2]
        .chunks_exact(YUY2_LANES * 2)
        .zip(src_next[..width * 2].chunks_exact(YUY2_LANES * 2))
        .zip(dst_u[..chroma_width].chunks_exact_mut(YUY2_LANES / 2))
        .zip(dst_v[..chroma_width].chunks_exact_mut(YUY2_LANES / 2))
    {
        for (((src, next), u), v) in src_batch
            .chunks_exact(4)
            .zip(next_batch.chunks_exact(4))
            .zip(u_batch.iter_mut())
            .zip(v_batch.iter_mut())
        {
            let u_pos = description.get_u_position();
            let v_pos = description.get_v_position();
            *u = avg_round(src[u_pos], next[u_pos]);
            *v = avg_round(src[v_pos], next[v_pos]);
        }
    }
}

#[inline(always)]
fn packed_to_uv422_impl<const YUY2_SOURCE: usize>(
    src: &[u8],
    dst_u: &mut [u8],
    dst_v: &mut [u8],
    width: usize,
) {
    let description: Yuy2Description = YUY2_SOURCE.into();
    debug_assert!(width % YUY2_LANES == 0);
    let chroma_width = width / 2;
    for ((src, u), v) in src[..width * 2]
        .chunks_exact(4)
        .zip(dst_u[..chroma_width].iter_mut())
        .zip(dst_v[..chroma_width].iter_mut())
    {
        *u = src[description.get_u_position()];
        *v = src[description.get_v_position()];
    }
}

#[inline(always)]
fn i422_to_packed_impl<const YUY2_TARGET: usize>(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    dst: &mut [u8],
    width: usize,
) {
    let description: Yuy2Description = YUY2_TARGET.into();
    debug_assert!(width % YUY2_LANES == 0);
    let chroma_width = width / 2;
    for (((y_batch, u_batch), v_batch), dst_batch) in y_row[..width]
        .chunks_exact(YUY2_LANES)
        .zip(u_row[..chroma_width].chunks_exact(YUY2_LANES / 2))
        .zip(v_row[..chroma_width].chunks_exact(YUY2_LANES / 2))
        .zip(dst[..width * 2].chunks_exact_mut(YUY2_LANES * 2))
    {
        for (((y_pair, &u), &v), dst) in y_batch
            .chunks_exact(2)
            .zip(u_batch.iter())
            .zip(v_batch.iter())
            .zip(dst_batch.chunks_exact_mut(4))
        {
            dst[description.get_first_y_position()] = y_pair[0];
            dst[description.get_u_position()] = u;
            dst[description.get_second_y_position()] = y_pair[1];
            dst[description.get_v_position()] = v;
        }
    }
}

/// Extracts luma from a YUY2 (Y0, U, Y1, V) row.
///
/// # Arguments
///
/// * `src_yuy2`: Packed row, at least `width * 2` bytes.
/// * `dst_y`: Luma destination, at least `width` bytes.
/// * `width`: Pixel count, multiple of [YUY2_LANES].
///
pub fn yuy2_to_y_row(src_yuy2: &[u8], dst_y: &mut [u8], width: usize) {
    packed_to_y_impl::<{ Yuy2Description::YUYV as usize }>(src_yuy2, dst_y, width);
}

/// Extracts luma from a UYVY (U, Y0, V, Y1) row.
pub fn uyvy_to_y_row(src_uyvy: &[u8], dst_y: &mut [u8], width: usize) {
    packed_to_y_impl::<{ Yuy2Description::UYVY as usize }>(src_uyvy, dst_y, width);
}

/// Produces 4:2:0 chroma from two vertically adjacent YUY2 rows.
///
/// Samples of both rows are averaged with rounding half up.
///
/// # Arguments
///
/// * `src_yuy2`: Upper packed row, at least `width * 2` bytes.
/// * `src_yuy2_next`: Lower packed row, at least `width * 2` bytes.
/// * `dst_u`: U destination, at least `width / 2` bytes.
/// * `dst_v`: V destination, at least `width / 2` bytes.
/// * `width`: Pixel count, multiple of [YUY2_LANES].
///
pub fn yuy2_to_uv_row(
    src_yuy2: &[u8],
    src_yuy2_next: &[u8],
    dst_u: &mut [u8],
    dst_v: &mut [u8],
    width: usize,
) {
    packed_to_uv_impl::<{ Yuy2Description::YUYV as usize }>(
        src_yuy2,
        src_yuy2_next,
        dst_u,
        dst_v,
        width,
    );
}

/// Produces 4:2:0 chroma from two vertically adjacent UYVY rows.
pub fn uyvy_to_uv_row(
    src_uyvy: &[u8],
    src_uyvy_next: &[u8],
    dst_u: &mut [u8],
    dst_v: &mut [u8],
    width: usize,
) {
    packed_to_uv_impl::<{ Yuy2Description::UYVY as usize }>(
        src_uyvy,
        src_uyvy_next,
        dst_u,
        dst_v,
        width,
    );
}

/// Splits chroma of a YUY2 row without vertical averaging.
pub fn yuy2_to_uv422_row(src_yuy2: &[u8], dst_u: &mut [u8], dst_v: &mut [u8], width: usize) {
    packed_to_uv422_impl::<{ Yuy2Description::YUYV as usize }>(src_yuy2, dst_u, dst_v, width);
}

/// Splits chroma of a UYVY row without vertical averaging.
pub fn uyvy_to_uv422_row(src_uyvy: &[u8], dst_u: &mut [u8], dst_v: &mut [u8], width: usize) {
    packed_to_uv422_impl::<{ Yuy2Description::UYVY as usize }>(src_uyvy, dst_u, dst_v, width);
}

/// Interleaves planar 4:2:2 row into YUY2.
///
/// # Arguments
///
/// * `y_row`: Luma row, at least `width` samples.
/// * `u_row`: U row, at least `width / 2` samples.
/// * `v_row`: V row, at least `width / 2` samples.
/// * `dst_yuy2`: Destination, at least `width * 2` bytes.
/// * `width`: Pixel count, multiple of [YUY2_LANES].
///
pub fn i422_to_yuy2_row(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    dst_yuy2: &mut [u8],
    width: usize,
) {
    i422_to_packed_impl::<{ Yuy2Description::YUYV as usize }>(y_row, u_row, v_row, dst_yuy2, width);
}

/// Interleaves planar 4:2:2 row into UYVY.
pub fn i422_to_uyvy_row(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    dst_uyvy: &mut [u8],
    width: usize,
) {
    i422_to_packed_impl::<{ Yuy2Description::UYVY as usize }>(y_row, u_row, v_row, dst_uyvy, width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_row(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random_range(0..=255u8)).collect()
    }

    const WIDTH: usize = 96;

    #[test]
    fn test_pack_then_split_restores_planes() {
        let y = random_row(WIDTH);
        let u = random_row(WIDTH / 2);
        let v = random_row(WIDTH / 2);
        let mut yuy2 = vec![0u8; WIDTH * 2];
        let mut uyvy = vec![0u8; WIDTH * 2];
        i422_to_yuy2_row(&y, &u, &v, &mut yuy2, WIDTH);
        i422_to_uyvy_row(&y, &u, &v, &mut uyvy, WIDTH);

        assert_eq!(&yuy2[..4], &[y[0], u[0], y[1], v[0]]);
        assert_eq!(&uyvy[..4], &[u[0], y[0], v[0], y[1]]);

        let mut y_out = vec![0u8; WIDTH];
        let mut u_out = vec![0u8; WIDTH / 2];
        let mut v_out = vec![0u8; WIDTH / 2];

        yuy2_to_y_row(&yuy2, &mut y_out, WIDTH);
        yuy2_to_uv422_row(&yuy2, &mut u_out, &mut v_out, WIDTH);
        assert_eq!(y_out, y);
        assert_eq!(u_out, u);
        assert_eq!(v_out, v);

        uyvy_to_y_row(&uyvy, &mut y_out, WIDTH);
        uyvy_to_uv422_row(&uyvy, &mut u_out, &mut v_out, WIDTH);
        assert_eq!(y_out, y);
        assert_eq!(u_out, u);
        assert_eq!(v_out, v);
    }

    #[test]
    fn test_vertical_average_rounds_half_up() {
        let mut top = vec![0u8; WIDTH * 2];
        let mut bottom = vec![0u8; WIDTH * 2];
        for (t, b) in top.chunks_exact_mut(4).zip(bottom.chunks_exact_mut(4)) {
            t.copy_from_slice(&[16, 100, 16, 7]);
            b.copy_from_slice(&[16, 101, 16, 10]);
        }
        let mut u = vec![0u8; WIDTH / 2];
        let mut v = vec![0u8; WIDTH / 2];
        yuy2_to_uv_row(&top, &bottom, &mut u, &mut v, WIDTH);
        assert!(u.iter().all(|&x| x == 101));
        assert!(v.iter().all(|&x| x == 9));
    }

    #[test]
    fn test_uyvy_average_matches_reference() {
        let top = random_row(WIDTH * 2);
        let bottom = random_row(WIDTH * 2);
        let mut u = vec![0u8; WIDTH / 2];
        let mut v = vec![0u8; WIDTH / 2];
        uyvy_to_uv_row(&top, &bottom, &mut u, &mut v, WIDTH);
        for i in 0..WIDTH / 2 {
            let expected_u = (top[i * 4] as u32 + bottom[i * 4] as u32).div_ceil(2);
            let expected_v = (top[i * 4 + 2] as u32 + bottom[i * 4 + 2] as u32).div_ceil(2);
            assert_eq!(u[i] as u32, expected_u);
            assert_eq!(v[i] as u32, expected_v);
        }
    }
}
