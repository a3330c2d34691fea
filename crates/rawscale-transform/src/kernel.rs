//! Reconstruction kernels
//!
//! Each kernel turns one mapped source position into the `(r, g, b)`
//! value of a destination pixel.
//!
//! - **Point**: copy of the nearest (floored, clamped) source pixel
//! - **NeighborhoodAverage**: mean of the floored source pixel and its
//!   in-bounds 4-connected neighbours
//! - **Bilinear**: weighted blend of the 2x2 block below-right of the
//!   continuous source position
//!
//! All results are truncated toward zero into `u8`.

use crate::mapper::SourceCoord;
use rawscale_core::{Dimensions, PixelBuffer};

/// 4-connected neighbour offsets: left, down, right, up.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Reconstruction policy used for every pixel of one resample call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingPolicy {
    /// Nearest-neighbour copy (replicate when enlarging, decimate when shrinking)
    Point,
    /// Mean over a 4-connected cross around the sampled pixel
    NeighborhoodAverage,
    /// Bilinear interpolation between four source pixels
    Bilinear,
}

/// Compute one destination pixel from the source at `coord`.
#[inline]
pub fn reconstruct(policy: SamplingPolicy, src: &PixelBuffer, coord: SourceCoord) -> (u8, u8, u8) {
    match policy {
        SamplingPolicy::Point => {
            let (x, y) = coord.snap(src.dims());
            src.get_rgb_unchecked(x, y)
        }
        SamplingPolicy::NeighborhoodAverage => {
            let (x, y) = coord.snap(src.dims());
            neighborhood_average(src, x, y)
        }
        SamplingPolicy::Bilinear => bilinear(src, coord),
    }
}

/// Pixels that contribute to the neighbourhood average at `(cx, cy)`:
/// the centre first, then each in-bounds neighbour in [`NEIGHBOR_OFFSETS`] order.
///
/// Yields between 1 (a 1x1 image) and 5 (an interior pixel) coordinates.
pub fn neighborhood(dims: Dimensions, cx: u32, cy: u32) -> impl Iterator<Item = (u32, u32)> {
    let center = std::iter::once((cx, cy));
    let neighbors = NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let nx = cx as i64 + dx;
        let ny = cy as i64 + dy;
        dims.contains(nx, ny).then_some((nx as u32, ny as u32))
    });
    center.chain(neighbors)
}

fn neighborhood_average(src: &PixelBuffer, cx: u32, cy: u32) -> (u8, u8, u8) {
    let mut sum = [0u32; 3];
    let mut count = 0u32;
    for (x, y) in neighborhood(src.dims(), cx, cy) {
        let (r, g, b) = src.get_rgb_unchecked(x, y);
        sum[0] += r as u32;
        sum[1] += g as u32;
        sum[2] += b as u32;
        count += 1;
    }
    // count >= 1: the centre is always included
    (
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
    )
}

fn bilinear(src: &PixelBuffer, coord: SourceCoord) -> (u8, u8, u8) {
    let (x1, y1) = coord.snap(src.dims());
    let x2 = (x1 + 1).min(src.width() - 1);
    let y2 = (y1 + 1).min(src.height() - 1);

    // Positions past the last row/column (only reachable when shrinking)
    // are held at the edge pixel.
    let dx = (coord.x - x1 as f32).clamp(0.0, 1.0);
    let dy = (coord.y - y1 as f32).clamp(0.0, 1.0);

    let tl = src.get_rgb_unchecked(x1, y1);
    let tr = src.get_rgb_unchecked(x2, y1);
    let bl = src.get_rgb_unchecked(x1, y2);
    let br = src.get_rgb_unchecked(x2, y2);

    (
        interpolate_channel(tl.0, tr.0, bl.0, br.0, dx, dy),
        interpolate_channel(tl.1, tr.1, bl.1, br.1, dx, dy),
        interpolate_channel(tl.2, tr.2, bl.2, br.2, dx, dy),
    )
}

/// Horizontal lerp along both rows, then vertical lerp; truncated.
#[inline]
fn interpolate_channel(p00: u8, p10: u8, p01: u8, p11: u8, fx: f32, fy: f32) -> u8 {
    let top = lerp(p00 as f32, p10 as f32, fx);
    let bottom = lerp(p01 as f32, p11 as f32, fx);
    lerp(top, bottom, fy) as u8
}

/// `a + (b - a) * t`. Stays within `[min(a, b), max(a, b)]` for `t` in
/// `[0, 1]`, and returns `a` exactly when `a == b`.
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: u32, h: u32) -> Dimensions {
        Dimensions::new(w, h).unwrap()
    }

    fn coord(x: f32, y: f32) -> SourceCoord {
        SourceCoord { x, y }
    }

    /// 3x3 image where pixel (x, y) has red = 10 * (y * 3 + x).
    fn ramp3() -> PixelBuffer {
        let mut buf = PixelBuffer::new(dims(3, 3));
        for y in 0..3 {
            for x in 0..3 {
                let v = (10 * (y * 3 + x)) as u8;
                buf.set_rgb(x, y, v, 0, 255 - v).unwrap();
            }
        }
        buf
    }

    #[test]
    fn test_neighborhood_counts() {
        let d = dims(3, 3);
        assert_eq!(neighborhood(d, 1, 1).count(), 5);
        assert_eq!(neighborhood(d, 0, 0).count(), 3);
        assert_eq!(neighborhood(d, 1, 0).count(), 4);
        assert_eq!(neighborhood(d, 2, 2).count(), 3);
        assert_eq!(neighborhood(dims(1, 1), 0, 0).count(), 1);
        assert_eq!(neighborhood(dims(1, 3), 0, 1).count(), 3);
    }

    #[test]
    fn test_neighborhood_order_and_no_diagonals() {
        let got: Vec<_> = neighborhood(dims(3, 3), 1, 1).collect();
        assert_eq!(got, vec![(1, 1), (0, 1), (1, 2), (2, 1), (1, 0)]);
    }

    #[test]
    fn test_point_copies_verbatim() {
        let src = ramp3();
        assert_eq!(
            reconstruct(SamplingPolicy::Point, &src, coord(2.9, 1.2)),
            (50, 0, 205)
        );
    }

    #[test]
    fn test_neighborhood_average_interior() {
        let src = ramp3();
        // centre 40, neighbours 30, 70, 50, 10 -> 200 / 5
        assert_eq!(
            reconstruct(SamplingPolicy::NeighborhoodAverage, &src, coord(1.0, 1.0)),
            (40, 0, 215)
        );
    }

    #[test]
    fn test_neighborhood_average_corner_truncates() {
        let src = ramp3();
        // centre 0, right 10, down 30 -> 40 / 3 = 13.33
        let (r, g, b) = reconstruct(SamplingPolicy::NeighborhoodAverage, &src, coord(0.0, 0.0));
        assert_eq!(r, 13);
        assert_eq!(g, 0);
        // 255 + 245 + 225 = 725 / 3 = 241.67
        assert_eq!(b, 241);
    }

    #[test]
    fn test_bilinear_exact_on_grid() {
        let src = ramp3();
        assert_eq!(
            reconstruct(SamplingPolicy::Bilinear, &src, coord(1.0, 2.0)),
            src.get_rgb(1, 2).unwrap()
        );
    }

    #[test]
    fn test_bilinear_midpoint() {
        let src = ramp3();
        // (0,0)=0, (1,0)=10, (0,1)=30, (1,1)=40 -> 20
        let (r, _, b) = reconstruct(SamplingPolicy::Bilinear, &src, coord(0.5, 0.5));
        assert_eq!(r, 20);
        assert_eq!(b, 235);
    }

    #[test]
    fn test_bilinear_last_column_clamped() {
        let src = ramp3();
        // x1 = 2, x2 = min(3, 2) = 2: horizontal weight has no effect
        let (r, _, _) = reconstruct(SamplingPolicy::Bilinear, &src, coord(2.0, 0.5));
        // between (2,0)=20 and (2,1)=50
        assert_eq!(r, 35);
    }

    #[test]
    fn test_lerp_constant_is_exact() {
        for &t in &[0.0f32, 0.1, 0.333_333_34, 0.666_666_7, 0.999_999] {
            assert_eq!(interpolate_channel(255, 255, 255, 255, t, t), 255);
            assert_eq!(interpolate_channel(7, 7, 7, 7, t, 1.0 - t), 7);
        }
    }
}
