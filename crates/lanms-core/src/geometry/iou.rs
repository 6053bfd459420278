//! Intersection-over-union of arbitrarily rotated quadrilaterals

use super::polygon::polygon_intersection;
use crate::quad::Quad;

/// Area of the overlap between two quads
///
/// Degenerate quads (see [`Quad::is_degenerate`]) overlap nothing. Concave quads are handled
/// by clipping their convex pieces pairwise.
pub fn intersection_area(a: &Quad, b: &Quad) -> f32 {
    if a.is_degenerate() || b.is_degenerate() {
        return 0.0;
    }

    let clips = b.convex_pieces();
    a.convex_pieces()
        .iter()
        .flat_map(|subject| {
            clips
                .iter()
                .map(move |clip| polygon_intersection(subject.as_slice(), clip.as_slice()).area())
        })
        .sum()
}

/// Intersection area divided by union area, in `[0, 1]`
pub fn iou(a: &Quad, b: &Quad) -> f32 {
    let intersection = intersection_area(a, b);
    if !(intersection > 0.0) {
        return 0.0;
    }

    let union = a.area() + b.area() - intersection;
    if !(union > 0.0) {
        return 0.0;
    }

    (intersection / union).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn square(x0: f32, y0: f32, side: f32) -> Quad {
        Quad::from_corners(x0, y0, x0 + side, y0 + side)
    }

    #[test]
    fn test_iou_with_itself() {
        let q = square(0.0, 0.0, 10.0);
        assert_relative_eq!(iou(&q, &q), 1.0);
    }

    #[test]
    fn test_iou_half_shifted() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 0.0, 10.0);
        assert_relative_eq!(iou(&a, &b), 0.5 / 1.5, epsilon = 1e-6);
    }

    #[test]
    fn test_iou_no_overlap() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(20.0, 0.0, 10.0);
        assert_eq!(iou(&a, &b), 0.0);

        // Touching edges share no area
        let c = square(10.0, 0.0, 10.0);
        assert_eq!(iou(&a, &c), 0.0);
    }

    #[test]
    fn test_iou_degenerate_is_zero() {
        let a = square(0.0, 0.0, 10.0);
        let flat = Quad::from([[5.0, 0.0], [5.0, 0.0], [5.0, 10.0], [5.0, 10.0]]);
        assert_eq!(iou(&a, &flat), 0.0);

        let bowtie = Quad::from([[0.0, 0.0], [10.0, 10.0], [10.0, 0.0], [0.0, 10.0]]);
        assert_eq!(iou(&a, &bowtie), 0.0);
        assert_eq!(iou(&bowtie, &bowtie), 0.0);
    }

    #[test]
    fn test_iou_contained() {
        let outer = square(0.0, 0.0, 100.0);
        let inner = square(0.0, 0.0, 10.0);
        assert_relative_eq!(iou(&outer, &inner), 100.0 / 10000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_iou_independent_of_winding() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 0.0, 10.0);
        let [p0, p1, p2, p3] = *b.points();
        let b_clockwise = Quad::new([p3, p2, p1, p0]);
        assert_relative_eq!(iou(&a, &b), iou(&a, &b_clockwise), epsilon = 1e-6);
        assert_relative_eq!(iou(&b_clockwise, &a), iou(&a, &b), epsilon = 1e-6);
    }

    #[test]
    fn test_iou_rotated_square_on_square() {
        let a = square(100.0, 100.0, 100.0);
        let b = Quad::from([[150.0, 79.0], [221.0, 150.0], [150.0, 221.0], [79.0, 150.0]]);
        let inter = intersection_area(&a, &b);
        // Square minus its four corner triangles (legs of 29)
        assert_relative_eq!(inter, 10000.0 - 4.0 * (29.0 * 29.0 / 2.0), epsilon = 1e-1);
        let expected = inter / (a.area() + b.area() - inter);
        assert_relative_eq!(iou(&a, &b), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_iou_rotation_invariant() {
        let a = Quad::from_corners(50.0, 50.0, 150.0, 100.0);
        let b = a.translate(10.0, 5.0);
        let angle = PI / 8.0;
        assert_relative_eq!(
            iou(&a, &b),
            iou(&a.rotate(angle), &b.rotate(angle)),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_iou_concave() {
        let dart = Quad::from([[0.0, 0.0], [5.0, 3.0], [10.0, 0.0], [5.0, 10.0]]);
        assert_relative_eq!(iou(&dart, &dart), 1.0, epsilon = 1e-5);

        let bbox = Quad::from_corners(0.0, 0.0, 10.0, 10.0);
        assert_relative_eq!(iou(&dart, &bbox), dart.area() / bbox.area(), epsilon = 1e-5);
    }
}
