//! Resample regression test
//!
//! Exercises the policy table, the three kernels and the grid walk on
//! small synthetic images with known answers.

use rawscale_core::{Dimensions, PixelBuffer};
use rawscale_test::{RegParams, fixtures};
use rawscale_transform::{
    CoordinateMapper, PolicySelector, ResampleOptions, SamplingPolicy, neighborhood, resample,
    resample_with_options, resample_with_policy,
};

const RED: (u8, u8, u8) = (255, 0, 0);
const GREEN: (u8, u8, u8) = (0, 255, 0);

fn dims(w: u32, h: u32) -> Dimensions {
    Dimensions::new(w, h).unwrap()
}

/// 2x2 source: (0,0) black, (1,0) white, (0,1) red, (1,1) blue.
fn corners() -> PixelBuffer {
    let mut src = PixelBuffer::new(dims(2, 2));
    src.set_rgb(0, 0, 0, 0, 0).unwrap();
    src.set_rgb(1, 0, 255, 255, 255).unwrap();
    src.set_rgb(0, 1, 255, 0, 0).unwrap();
    src.set_rgb(1, 1, 0, 0, 255).unwrap();
    src
}

#[test]
fn resample_reg() {
    let mut rp = RegParams::new("resample");

    // --- Test 1: point downsample picks (2,2) for destination (1,1) ---
    let mut src = PixelBuffer::filled(dims(4, 4), RED.0, RED.1, RED.2);
    src.set_rgb(2, 2, GREEN.0, GREEN.1, GREEN.2).unwrap();
    let down = resample(&src, dims(2, 2), PolicySelector::Sample).expect("point downsample");
    rp.compare_rgb(GREEN, down.get_rgb(1, 1).unwrap());
    rp.compare_rgb(RED, down.get_rgb(0, 0).unwrap());
    rp.compare_rgb(RED, down.get_rgb(1, 0).unwrap());
    rp.compare_rgb(RED, down.get_rgb(0, 1).unwrap());
    rp.write_buffer_if_display(&down, "point_down").unwrap();

    // --- Test 2: bilinear 2x2 -> 3x3, centre at fractional offset 2/3 ---
    let up3 = resample(&corners(), dims(3, 3), PolicySelector::Smooth).expect("bilinear 3x3");
    rp.compare_rgb((113, 56, 170), up3.get_rgb(1, 1).unwrap());
    // Grid-aligned destination pixels reproduce the source exactly
    rp.compare_rgb((0, 0, 0), up3.get_rgb(0, 0).unwrap());
    rp.write_buffer_if_display(&up3, "bilinear_3x3").unwrap();

    // --- Test 3: bilinear 2x2 -> 4x4, (1,1) sits at offsets (0.5, 0.5) ---
    let up4 = resample(&corners(), dims(4, 4), PolicySelector::Smooth).expect("bilinear 4x4");
    // Mean of the four corners, truncated: (127.5, 63.75, 127.5)
    rp.compare_rgb((127, 63, 127), up4.get_rgb(1, 1).unwrap());
    // Last column/row clamp onto the edge pixel
    rp.compare_rgb((0, 0, 255), up4.get_rgb(3, 3).unwrap());

    // --- Test 4: equal dimensions reproduce the source for both methods ---
    let grad = fixtures::gradient(7, 5).unwrap();
    for sel in [PolicySelector::Sample, PolicySelector::Smooth] {
        let same = resample(&grad, grad.dims(), sel).expect("identity");
        rp.compare_buffers(&grad, &same);
    }

    // --- Test 5: output length for the presets ---
    let small = fixtures::gradient(64, 48).unwrap();
    for code in ["O1", "O2", "O3"] {
        let preset: rawscale_core::OutputPreset = code.parse().unwrap();
        let d = preset.dimensions();
        let out = resample(&small, d, PolicySelector::Smooth).expect("preset");
        rp.compare_values(
            (d.width() * d.height() * 3) as f64,
            out.as_bytes().len() as f64,
            0.0,
        );
    }

    assert!(rp.cleanup(), "resample regression test failed");
}

#[test]
fn point_magnification_replicates_blocks() {
    let mut rp = RegParams::new("resample_replicate");
    let src = fixtures::gradient(3, 3).unwrap();

    for k in [2u32, 3, 4] {
        let dst = resample(&src, dims(3 * k, 3 * k), PolicySelector::Sample).unwrap();
        for y in 0..3 * k {
            for x in 0..3 * k {
                let expected = src.get_rgb(x / k, y / k).unwrap();
                if !rp.compare_rgb(expected, dst.get_rgb(x, y).unwrap()) {
                    eprintln!("  k={k} at ({x},{y})");
                }
            }
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn bilinear_stays_within_corner_range() {
    let mut rp = RegParams::new("resample_bilinear_bounds");
    let src = fixtures::from_fn(5, 4, |x, y| {
        (
            (x * 61 + y * 7) as u8,
            (255 - x * 50) as u8,
            if (x + y) % 2 == 0 { 255 } else { 0 },
        )
    })
    .unwrap();
    let dst_dims = dims(13, 11);
    let dst = resample(&src, dst_dims, PolicySelector::Smooth).unwrap();
    let mapper = CoordinateMapper::new(src.dims(), dst_dims);

    for y in 0..dst_dims.height() {
        for x in 0..dst_dims.width() {
            let c = mapper.map_continuous(x, y);
            let (x1, y1) = c.snap(src.dims());
            let x2 = (x1 + 1).min(src.width() - 1);
            let y2 = (y1 + 1).min(src.height() - 1);
            let quad = [
                src.get_rgb(x1, y1).unwrap(),
                src.get_rgb(x2, y1).unwrap(),
                src.get_rgb(x1, y2).unwrap(),
                src.get_rgb(x2, y2).unwrap(),
            ];
            let got = dst.get_rgb(x, y).unwrap();
            let channels: [fn((u8, u8, u8)) -> u8; 3] = [|p| p.0, |p| p.1, |p| p.2];
            for ch in channels {
                let lo = quad.iter().map(|&p| ch(p)).min().unwrap();
                let hi = quad.iter().map(|&p| ch(p)).max().unwrap();
                let v = ch(got);
                rp.check(lo <= v && v <= hi, &format!("({x},{y}) {v} not in [{lo},{hi}]"));
            }
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn neighborhood_average_sample_counts() {
    let mut rp = RegParams::new("resample_neighborhood");

    // Corner of any image of at least 2x2 uses centre + right + down
    for (w, h) in [(2, 2), (3, 5), (16, 9)] {
        rp.compare_values(3.0, neighborhood(dims(w, h), 0, 0).count() as f64, 0.0);
        rp.compare_values(3.0, neighborhood(dims(w, h), w - 1, h - 1).count() as f64, 0.0);
    }

    // A 1x1 source always averages over the centre alone
    let single = PixelBuffer::filled(dims(1, 1), 37, 101, 200);
    rp.compare_values(1.0, neighborhood(single.dims(), 0, 0).count() as f64, 0.0);
    let out = resample_with_policy(
        &single,
        dims(3, 2),
        SamplingPolicy::NeighborhoodAverage,
        &ResampleOptions::default(),
    )
    .unwrap();
    rp.check(
        out.pixels().all(|p| p == (37, 101, 200)),
        "1x1 source averages to itself",
    );

    // Minification with method 2 averages the cross, not the full 3x3 box
    let cb = fixtures::checkerboard(4, 4, 1, (0, 0, 0), (255, 255, 255)).unwrap();
    let out = resample(&cb, dims(2, 2), PolicySelector::Smooth).unwrap();
    // (0,0) black centre, two white neighbours: 510 / 3
    rp.compare_rgb((170, 170, 170), out.get_rgb(0, 0).unwrap());
    // (2,2) black centre, four white neighbours: 1020 / 5
    rp.compare_rgb((204, 204, 204), out.get_rgb(1, 1).unwrap());

    assert!(rp.cleanup());
}

#[test]
fn non_uniform_axes_map_independently() {
    let mut rp = RegParams::new("resample_non_uniform");
    // Red encodes the source column, green the source row
    let src = fixtures::from_fn(8, 3, |x, y| ((x * 10) as u8, (y * 10) as u8, 0)).unwrap();

    // Width halves (ratio 2), height doubles (ratio 0.5): a minification
    let out = resample(&src, dims(4, 6), PolicySelector::Sample).unwrap();
    for y in 0..6 {
        for x in 0..4 {
            let expected = ((x * 2 * 10) as u8, (y / 2 * 10) as u8, 0);
            rp.compare_rgb(expected, out.get_rgb(x, y).unwrap());
        }
    }

    let mapper = CoordinateMapper::new(src.dims(), dims(4, 6));
    rp.compare_values(2.0, mapper.ratio().x as f64, 0.0);
    rp.compare_values(0.5, mapper.ratio().y as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn serial_and_parallel_agree_on_presets() {
    let src = fixtures::gradient(80, 45).unwrap();
    let d = dims(640, 480);
    for sel in [PolicySelector::Sample, PolicySelector::Smooth] {
        let serial = resample_with_options(&src, d, sel, &ResampleOptions::serial()).unwrap();
        let parallel = resample_with_options(&src, d, sel, &ResampleOptions::default()).unwrap();
        assert_eq!(serial, parallel, "{sel:?}");
    }
}
