//! Drawing primitives on RGBA layers
//!
//! Shapes are filled by testing pixel centres, so edges are hard; the
//! generator softens them afterwards with [`soft_edge`].

use image::imageops;
use image::{Rgba, RgbaImage};

/// Fully transparent pixel
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Creates an empty layer with the same size as `like`
pub fn layer_like(like: &RgbaImage) -> RgbaImage {
    RgbaImage::from_pixel(like.width(), like.height(), TRANSPARENT)
}

/// Sets every pixel inside the bounding box whose centre satisfies `inside`
fn fill_where<F>(img: &mut RgbaImage, bounds: [f32; 4], color: Rgba<u8>, inside: F)
where
    F: Fn(f32, f32) -> bool,
{
    let [x0, y0, x1, y1] = bounds;
    let clamp = |v: f32, max: u32| (v.max(0.0) as u32).min(max);

    let x_start = clamp(x0.floor(), img.width());
    let x_end = clamp(x1.ceil() + 1.0, img.width());
    let y_start = clamp(y0.floor(), img.height());
    let y_end = clamp(y1.ceil() + 1.0, img.height());

    for y in y_start..y_end {
        for x in x_start..x_end {
            if inside(x as f32 + 0.5, y as f32 + 0.5) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Filled circle
pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
    fill_ellipse(img, cx, cy, r, r, color);
}

/// Filled axis-aligned ellipse
pub fn fill_ellipse(img: &mut RgbaImage, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgba<u8>) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    fill_where(img, [cx - rx, cy - ry, cx + rx, cy + ry], color, |px, py| {
        let nx = (px - cx) / rx;
        let ny = (py - cy) / ry;
        nx * nx + ny * ny <= 1.0
    });
}

/// Filled axis-aligned rectangle
pub fn fill_rect(img: &mut RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba<u8>) {
    fill_where(img, [x0, y0, x1, y1], color, |px, py| {
        px >= x0 && px <= x1 && py >= y0 && py <= y1
    });
}

/// Filled rectangle with circular corners
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    bounds: [f32; 4],
    radius: f32,
    color: Rgba<u8>,
) {
    let [x0, y0, x1, y1] = bounds;
    let radius = radius.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0).max(0.0);
    fill_where(img, bounds, color, |px, py| {
        if px < x0 || px > x1 || py < y0 || py > y1 {
            return false;
        }
        let qx = px.clamp(x0 + radius, x1 - radius);
        let qy = py.clamp(y0 + radius, y1 - radius);
        let (dx, dy) = (px - qx, py - qy);
        dx * dx + dy * dy <= radius * radius
    });
}

/// Filled polygon using the even-odd rule
pub fn fill_polygon(img: &mut RgbaImage, points: &[(f32, f32)], color: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }
    let bounds = points.iter().fold(
        [f32::MAX, f32::MAX, f32::MIN, f32::MIN],
        |[x0, y0, x1, y1], &(x, y)| [x0.min(x), y0.min(y), x1.max(x), y1.max(y)],
    );
    fill_where(img, bounds, color, |px, py| point_in_polygon(points, px, py));
}

fn point_in_polygon(points: &[(f32, f32)], px: f32, py: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Straight line of the given stroke width
pub fn draw_line(
    img: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgba<u8>,
) {
    let half = width / 2.0;
    let bounds = [
        from.0.min(to.0) - half,
        from.1.min(to.1) - half,
        from.0.max(to.0) + half,
        from.1.max(to.1) + half,
    ];
    fill_where(img, bounds, color, |px, py| {
        distance_to_segment(px, py, from, to) <= half
    });
}

fn distance_to_segment(px: f32, py: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - a.0) * dx + (py - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (qx, qy) = (a.0 + t * dx, a.1 + t * dy);
    ((px - qx).powi(2) + (py - qy).powi(2)).sqrt()
}

/// Elliptical arc stroked inwards from the ellipse outline
///
/// Angles are in degrees, clockwise from three o'clock, with
/// `start_deg < end_deg` inside `0..=360`.
#[allow(clippy::too_many_arguments)]
pub fn draw_arc(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    start_deg: f32,
    end_deg: f32,
    width: f32,
    color: Rgba<u8>,
) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let (irx, iry) = (rx - width, ry - width);
    fill_where(img, [cx - rx, cy - ry, cx + rx, cy + ry], color, |px, py| {
        let (dx, dy) = (px - cx, py - cy);
        let outer = (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0;
        let inner = irx > 0.0 && iry > 0.0 && (dx / irx).powi(2) + (dy / iry).powi(2) < 1.0;
        if !outer || inner {
            return false;
        }
        let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
        angle >= start_deg && angle <= end_deg
    });
}

/// Composites `top` over `base` with straight alpha
///
/// Both layers must have the same size.
pub fn alpha_over(base: &mut RgbaImage, top: &RgbaImage) {
    debug_assert_eq!(base.dimensions(), top.dimensions());

    for (base_pixel, top_pixel) in base.pixels_mut().zip(top.pixels()) {
        if top_pixel[3] == 0 {
            continue;
        }
        let top_alpha = top_pixel[3] as f32 / 255.0;
        let base_alpha = base_pixel[3] as f32 / 255.0;
        let out_alpha = top_alpha + base_alpha * (1.0 - top_alpha);

        let blend = |t: u8, b: u8| {
            let value =
                (t as f32 * top_alpha + b as f32 * base_alpha * (1.0 - top_alpha)) / out_alpha;
            value.round().clamp(0.0, 255.0) as u8
        };

        *base_pixel = Rgba([
            blend(top_pixel[0], base_pixel[0]),
            blend(top_pixel[1], base_pixel[1]),
            blend(top_pixel[2], base_pixel[2]),
            (out_alpha * 255.0).round() as u8,
        ]);
    }
}

/// Lays a Gaussian-blurred copy under the image to soften hard edges
pub fn soft_edge(img: &RgbaImage, sigma: f32) -> RgbaImage {
    let mut soft = imageops::blur(img, sigma);
    alpha_over(&mut soft, img);
    soft
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn canvas() -> RgbaImage {
        RgbaImage::from_pixel(40, 40, TRANSPARENT)
    }

    #[test]
    fn test_circle_covers_centre_not_corners() {
        let mut img = canvas();
        fill_circle(&mut img, 20.0, 20.0, 10.0, RED);
        assert_eq!(*img.get_pixel(20, 20), RED);
        assert_eq!(*img.get_pixel(12, 20), RED);
        assert_eq!(*img.get_pixel(12, 12), TRANSPARENT);
        assert_eq!(*img.get_pixel(0, 0), TRANSPARENT);
    }

    #[test]
    fn test_shapes_clip_at_the_border() {
        let mut img = canvas();
        fill_circle(&mut img, -5.0, -5.0, 12.0, RED);
        fill_rect(&mut img, 30.0, 30.0, 100.0, 100.0, RED);
        assert_eq!(*img.get_pixel(0, 0), RED);
        assert_eq!(*img.get_pixel(39, 39), RED);
    }

    #[test]
    fn test_polygon_triangle() {
        let mut img = canvas();
        fill_polygon(&mut img, &[(0.0, 0.0), (40.0, 0.0), (0.0, 40.0)], RED);
        assert_eq!(*img.get_pixel(5, 5), RED);
        assert_eq!(*img.get_pixel(35, 35), TRANSPARENT);
    }

    #[test]
    fn test_line_width() {
        let mut img = canvas();
        draw_line(&mut img, (5.0, 20.0), (35.0, 20.0), 4.0, RED);
        assert_eq!(*img.get_pixel(20, 19), RED);
        assert_eq!(*img.get_pixel(20, 20), RED);
        assert_eq!(*img.get_pixel(20, 24), TRANSPARENT);
        assert_eq!(*img.get_pixel(1, 20), TRANSPARENT);
    }

    #[test]
    fn test_upper_arc_only_covers_top() {
        let mut img = canvas();
        draw_arc(&mut img, 20.0, 20.0, 15.0, 10.0, 200.0, 340.0, 3.0, RED);
        assert_eq!(*img.get_pixel(20, 11), RED);
        assert_eq!(*img.get_pixel(20, 28), TRANSPARENT);
        assert_eq!(*img.get_pixel(20, 20), TRANSPARENT);
    }

    #[test]
    fn test_rounded_rect_corners_are_cut() {
        let mut img = canvas();
        fill_rounded_rect(&mut img, [0.0, 0.0, 40.0, 40.0], 10.0, RED);
        assert_eq!(*img.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*img.get_pixel(20, 0), RED);
        assert_eq!(*img.get_pixel(20, 20), RED);
    }

    #[test]
    fn test_alpha_over() {
        let mut base = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 255, 255]));
        let mut top = RgbaImage::from_pixel(2, 1, TRANSPARENT);
        top.put_pixel(0, 0, Rgba([255, 0, 0, 128]));
        alpha_over(&mut base, &top);

        let blended = base.get_pixel(0, 0);
        assert_eq!(blended[3], 255);
        assert!(blended[0] > 120 && blended[0] < 135);
        assert!(blended[2] > 120 && blended[2] < 135);
        assert_eq!(*base.get_pixel(1, 0), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_alpha_over_onto_transparent_keeps_colour() {
        let mut base = RgbaImage::from_pixel(1, 1, TRANSPARENT);
        let top = RgbaImage::from_pixel(1, 1, Rgba([90, 210, 235, 100]));
        alpha_over(&mut base, &top);
        assert_eq!(*base.get_pixel(0, 0), Rgba([90, 210, 235, 100]));
    }

    #[test]
    fn test_soft_edge_keeps_opaque_interior() {
        let mut img = canvas();
        fill_circle(&mut img, 20.0, 20.0, 10.0, RED);
        let soft = soft_edge(&img, 1.2);
        assert_eq!(*soft.get_pixel(20, 20), RED);
        assert!(soft.get_pixel(20, 30)[3] > 0);
    }
}
