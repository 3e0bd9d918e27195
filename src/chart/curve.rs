//! Natural cubic spline interpolation for the timeline path.
//!
//! The spline has zero second derivative at the endpoints; each segment
//! between adjacent points becomes one cubic Bezier curve whose control
//! points come from a tridiagonal solve over each coordinate independently.

use std::fmt::Write as _;

/// SVG path data for a natural spline through `points`. Two points degrade
/// to a straight segment, one point to a bare move.
pub fn natural_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    match points {
        [] => {}
        [(x, y)] => {
            let _ = write!(d, "M{x:.2} {y:.2}");
        }
        [(x0, y0), (x1, y1)] => {
            let _ = write!(d, "M{x0:.2} {y0:.2} L{x1:.2} {y1:.2}");
        }
        _ => {
            let xs: Vec<f64> = points.iter().map(|(x, _)| *x).collect();
            let ys: Vec<f64> = points.iter().map(|(_, y)| *y).collect();
            let (cx1, cx2) = control_points(&xs);
            let (cy1, cy2) = control_points(&ys);
            let _ = write!(d, "M{:.2} {:.2}", xs[0], ys[0]);
            for i in 0..points.len() - 1 {
                let _ = write!(
                    d,
                    " C{:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                    cx1[i],
                    cy1[i],
                    cx2[i],
                    cy2[i],
                    xs[i + 1],
                    ys[i + 1]
                );
            }
        }
    }
    d
}

/// First and second Bezier control points for each of the `n - 1` spline
/// segments through `values`, via the Thomas algorithm. The arrays are
/// reused across the forward elimination and back substitution.
fn control_points(values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = values.len() - 1;
    debug_assert!(n >= 2);

    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    b[0] = 2.0;
    r[0] = values[0] + 2.0 * values[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * values[i] + 2.0 * values[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * values[n - 1] + values[n];

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }

    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }
    b[n - 1] = (values[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * values[i + 1] - a[i + 1];
    }

    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn two_points_make_a_straight_segment() {
        let d = natural_path(&[(0.0, 0.0), (10.0, 5.0)]);
        assert_eq!(d, "M0.00 0.00 L10.00 5.00");
    }

    #[test]
    fn collinear_points_give_collinear_control_points() {
        // A straight line is its own natural spline; the control points sit
        // at the thirds of each segment.
        let (c1, c2) = control_points(&[0.0, 1.0, 2.0]);
        assert_close(c1[0], 1.0 / 3.0);
        assert_close(c2[0], 2.0 / 3.0);
        assert_close(c1[1], 4.0 / 3.0);
        assert_close(c2[1], 5.0 / 3.0);
    }

    #[test]
    fn spline_path_interpolates_the_endpoints() {
        let points = [(50.0, 300.0), (150.0, 120.0), (250.0, 200.0), (350.0, 80.0)];
        let d = natural_path(&points);
        assert!(d.starts_with("M50.00 300.00"));
        assert!(d.ends_with("350.00 80.00"));
        assert_eq!(d.matches(" C").count(), points.len() - 1);
    }
}
