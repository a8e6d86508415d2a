//! Sigma filter regression test
//!
//! Checks the sigma filter against brute-force references:
//!   (1) sigma 255 keeps every neighbor, so the result is a plain box mean
//!   (2) sigma 0 keeps only equal neighbors, so the result is the input
//!   (3) flat regions split by a strong edge are left intact
//!   (4) every output lies within sigma of its input sample
//!
//! The sliding histogram is also walked over a full image to check that
//! it never underflows and always covers exactly the clipped window.

use pixkern_core::{Error, Layout};
use pixkern_filter::{FilterError, HistogramWindow, SigmaOptions, sigma_filter, sigma_filter_with};
use pixkern_test::{RegParams, box_mean, random_image, step_image};

#[test]
fn sigma_filter_reg_full_range_is_box_mean() {
    let mut rp = RegParams::new("sigma_full_range");

    for (w, h) in [(13, 9), (5, 17), (1, 4), (6, 1)] {
        for channels in [1, 3] {
            for radius in [1, 2, 3] {
                let input = random_image(w, h, channels, (w * 100 + h * 10 + channels) as u64);
                let mut output = vec![0u8; input.len()];
                sigma_filter(&input, &mut output, w, h, channels, 255, radius).unwrap();

                let expected = box_mean(&input, w, h, channels, radius);
                eprintln!("  {}x{}x{} radius={}", w, h, channels, radius);
                rp.compare_buffers(&expected, &output);
            }
        }
    }

    assert!(rp.cleanup(), "sigma_full_range regression test failed");
}

#[test]
fn sigma_filter_reg_zero_sigma_is_identity() {
    let mut rp = RegParams::new("sigma_zero");

    for channels in [1, 3] {
        for radius in [0, 1, 4] {
            let input = random_image(11, 8, channels, 42 + radius as u64);
            let mut output = vec![0u8; input.len()];
            sigma_filter(&input, &mut output, 11, 8, channels, 0, radius).unwrap();
            rp.compare_buffers(&input, &output);
        }
    }

    assert!(rp.cleanup(), "sigma_zero regression test failed");
}

#[test]
fn sigma_filter_reg_scenario() {
    let mut rp = RegParams::new("sigma_scenario");

    let input = [
        10u8, 12, 200, 210, //
        11, 13, 205, 215, //
        9, 14, 198, 220, //
        8, 15, 190, 225,
    ];
    let mut output = [0u8; 16];
    sigma_filter(&input, &mut output, 4, 4, 1, 10, 1).unwrap();

    rp.compare_values(12.0, output[0] as f64, 0.0);
    rp.compare_values(205.0, output[2] as f64, 0.0);
    for row in 0..4 {
        rp.compare_values(1.0, (output[row * 4 + 1] < 20) as u8 as f64, 0.0);
        rp.compare_values(1.0, (output[row * 4 + 2] > 185) as u8 as f64, 0.0);
    }

    assert!(rp.cleanup(), "sigma_scenario regression test failed");
}

#[test]
fn sigma_filter_reg_edge_preserved() {
    let mut rp = RegParams::new("sigma_edge");

    for channels in [1, 3] {
        let (w, h) = (10, 6);
        let input = step_image(w, h, channels, 20, 220);
        let mut output = vec![0u8; input.len()];
        let opts = SigmaOptions::new(50).radius(2);
        sigma_filter_with(&input, &mut output, w, h, channels, &opts).unwrap();
        rp.compare_buffers(&input, &output);
    }

    assert!(rp.cleanup(), "sigma_edge regression test failed");
}

#[test]
fn sigma_filter_reg_output_within_sigma() {
    let mut rp = RegParams::new("sigma_bounds");

    let (w, h, channels) = (16, 12, 3);
    let input = random_image(w, h, channels, 7);
    for sigma in [5u8, 30, 100] {
        let mut output = vec![0u8; input.len()];
        sigma_filter(&input, &mut output, w, h, channels, sigma, 2).unwrap();

        let outside = input
            .iter()
            .zip(&output)
            .filter(|&(&v, &o)| v.abs_diff(o) > sigma)
            .count();
        eprintln!("  sigma={}: {} samples outside range", sigma, outside);
        rp.compare_values(0.0, outside as f64, 0.0);
    }

    assert!(rp.cleanup(), "sigma_bounds regression test failed");
}

#[test]
fn sigma_filter_reg_histogram_walk() {
    let mut rp = RegParams::new("histogram_walk");

    for radius in [0, 1, 3, 20] {
        let (w, h, channels) = (9, 7, 3);
        let input = random_image(w, h, channels, 99);
        let layout = Layout::new(w, h, channels).unwrap();
        let mut window = HistogramWindow::new(&input, layout, radius);

        let mut inconsistent = 0;
        for row in 0..h {
            for col in 0..w {
                if col == 0 {
                    window.reset(row);
                } else {
                    window.slide(col).unwrap();
                }
                let rows = (row.saturating_sub(radius), (row + radius).min(h - 1));
                let cols = (col.saturating_sub(radius), (col + radius).min(w - 1));
                let area = ((rows.1 - rows.0 + 1) * (cols.1 - cols.0 + 1)) as u64;
                if !window.is_consistent()
                    || window.area() != area
                    || window.rows() != rows
                    || window.cols() != cols
                {
                    inconsistent += 1;
                }
            }
        }
        eprintln!("  radius={}: {} inconsistent positions", radius, inconsistent);
        rp.compare_values(0.0, inconsistent as f64, 0.0);
    }

    assert!(rp.cleanup(), "histogram_walk regression test failed");
}

#[test]
fn sigma_filter_reg_rejects_bad_layout() {
    let mut rp = RegParams::new("sigma_reject");

    for channels in [0, 2, 4] {
        let input = [5u8; 24];
        let mut output = [77u8; 24];
        let result = sigma_filter(&input, &mut output, 2, 3, channels, 10, 1);
        let rejected = matches!(
            result,
            Err(FilterError::Core(Error::UnsupportedChannelCount(c))) if c == channels
        );
        rp.compare_values(1.0, rejected as u8 as f64, 0.0);
        rp.compare_buffers(&[77u8; 24], &output);
    }

    let input = [5u8; 12];
    let mut output = [0u8; 12];
    let result = sigma_filter(&input, &mut output, 0, 4, 3, 10, 1);
    rp.compare_values(
        1.0,
        matches!(result, Err(FilterError::Core(Error::InvalidDimension { .. }))) as u8 as f64,
        0.0,
    );

    // Geometries whose sample count overflows are rejected, not computed
    for (w, h, channels) in [(1usize << 63, 2, 1), (usize::MAX, usize::MAX, 3)] {
        let result = sigma_filter(&[], &mut [], w, h, channels, 10, 1);
        let rejected = matches!(result, Err(FilterError::Core(Error::InvalidDimension { .. })));
        rp.compare_values(1.0, rejected as u8 as f64, 0.0);
    }

    assert!(rp.cleanup(), "sigma_reject regression test failed");
}
