//! Eyes and mouths in the cartoon-eyeball style

use crate::canvas::{
    alpha_over, draw_arc, draw_line, fill_circle, fill_ellipse, fill_polygon, fill_rect,
    layer_like, TRANSPARENT,
};
use image::{Rgba, RgbaImage};

/// Edge length of the drawing canvas in pixels
pub const CANVAS: u32 = 160;

pub const DARK: Rgba<u8> = Rgba([15, 50, 70, 255]);
pub const DARK_MID: Rgba<u8> = Rgba([25, 70, 95, 255]);
pub const CYAN: Rgba<u8> = Rgba([90, 210, 235, 255]);
pub const CYAN_LIGHT: Rgba<u8> = Rgba([160, 240, 250, 255]);
pub const CYAN_PALE: Rgba<u8> = Rgba([190, 248, 253, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Ring between sclera and iris
const DEPTH: Rgba<u8> = Rgba([50, 130, 160, 255]);

pub const CX: f32 = CANVAS as f32 / 2.0;
pub const EYE_Y: f32 = 58.0;
pub const EYE_SEP: f32 = 38.0;
pub const EYE_R: f32 = 28.0;
pub const MOUTH_Y: f32 = 120.0;
pub const MOUTH_RX: f32 = 28.0;
pub const MOUTH_RY: f32 = 14.0;

const IRIS_RATIO: f32 = 0.72;
const HIGHLIGHT_RATIO: f32 = 0.20;

/// Left eye centre
pub const LX: f32 = CX - EYE_SEP;
/// Right eye centre
pub const RX: f32 = CX + EYE_SEP;

/// Full round eye: cyan ring, dark iris, white highlight
pub fn eye(img: &mut RgbaImage, cx: f32, cy: f32, r: f32) {
    fill_circle(img, cx, cy, r, CYAN);
    fill_circle(img, cx, cy, r * 0.88, DEPTH);
    let iris = r * IRIS_RATIO;
    fill_circle(img, cx, cy, iris, DARK);
    fill_circle(img, cx, cy, iris * 0.5, DARK_MID);

    let highlight = (r * HIGHLIGHT_RATIO).max(3.0);
    fill_circle(img, cx - r * 0.32, cy - r * 0.32, highlight, WHITE);
}

/// Eye with the bottom cut off along a tilted line (droopy)
pub fn eye_half_top(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, angle_deg: f32) {
    let mut layer = layer_like(img);
    eye(&mut layer, cx, cy, r);

    let cut_y = cy + r * 0.15;
    let (dx, dy) = lid_offsets(r, angle_deg);
    let below = cy + r + 10.0;
    fill_polygon(
        &mut layer,
        &[
            (cx - dx, cut_y - dy),
            (cx + dx, cut_y + dy),
            (cx + dx, below),
            (cx - dx, below),
        ],
        TRANSPARENT,
    );
    alpha_over(img, &layer);
}

/// Eye with the top cut off along a tilted line (lids pushed down)
pub fn eye_half_bottom(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, angle_deg: f32) {
    let mut layer = layer_like(img);
    eye(&mut layer, cx, cy, r);

    let cut_y = cy - r * 0.15;
    let (dx, dy) = lid_offsets(r, angle_deg);
    let above = cy - r - 10.0;
    fill_polygon(
        &mut layer,
        &[
            (cx - dx, cut_y + dy),
            (cx + dx, cut_y - dy),
            (cx + dx, above),
            (cx - dx, above),
        ],
        TRANSPARENT,
    );
    alpha_over(img, &layer);
}

fn lid_offsets(r: f32, angle_deg: f32) -> (f32, f32) {
    let angle = angle_deg.to_radians();
    (r * 1.5 * angle.cos(), r * 1.5 * angle.sin())
}

/// Crescent eye for sleepy and grateful faces
pub fn arc_eye(img: &mut RgbaImage, cx: f32, cy: f32, r: f32) {
    draw_arc(img, cx, cy, r, r * 0.6, 200.0, 340.0, (r * 0.22).max(5.0), CYAN);
    draw_arc(
        img,
        cx,
        cy,
        r * 0.8,
        r * 0.45,
        210.0,
        330.0,
        (r * 0.13).max(3.0),
        CYAN_LIGHT,
    );
}

/// Closed eye drawn as a flat line
pub fn line_eye(img: &mut RgbaImage, cx: f32, cy: f32) {
    let w = EYE_R * 0.9;
    draw_line(img, (cx - w, cy), (cx + w, cy), 4.0, CYAN);
}

/// `#`-shaped eye
pub fn hash_eye(img: &mut RgbaImage, cx: f32, cy: f32) {
    let r = EYE_R * 0.55;
    let o = r * 0.45;
    draw_line(img, (cx - r, cy - o), (cx + r, cy - o), 4.0, CYAN);
    draw_line(img, (cx - r, cy + o), (cx + r, cy + o), 4.0, CYAN);
    draw_line(img, (cx - o, cy - r), (cx - o, cy + r), 4.0, CYAN);
    draw_line(img, (cx + o, cy - r), (cx + o, cy + r), 4.0, CYAN);
}

/// Heart-shaped eye with a lighter centre
pub fn heart_eye(img: &mut RgbaImage, cx: f32, cy: f32) {
    let s = EYE_R * 1.1;
    let bump = s * 0.44;
    fill_circle(img, cx - bump * 0.6, cy - bump * 0.25, bump, CYAN);
    fill_circle(img, cx + bump * 0.6, cy - bump * 0.25, bump, CYAN);
    fill_polygon(
        img,
        &[(cx - s * 0.82, cy), (cx + s * 0.82, cy), (cx, cy + s * 0.85)],
        CYAN,
    );

    let inner = bump * 0.6;
    fill_circle(img, cx - bump * 0.55, cy - bump * 0.2, inner, CYAN_LIGHT);
    fill_circle(img, cx + bump * 0.55, cy - bump * 0.2, inner, CYAN_LIGHT);
    fill_polygon(
        img,
        &[
            (cx - s * 0.5, cy + s * 0.05),
            (cx + s * 0.5, cy + s * 0.05),
            (cx, cy + s * 0.55),
        ],
        CYAN_LIGHT,
    );
    fill_circle(img, cx, cy - bump * 0.05, inner * 0.35, CYAN_PALE);
}

/// Round eye with tear drops below it
pub fn tear_eye(img: &mut RgbaImage, cx: f32, cy: f32, r: f32) {
    eye(img, cx, cy, r);
    let tear = r * 0.28;
    fill_circle(img, cx - r * 0.45, cy + r * 0.85, tear, CYAN_LIGHT);
    fill_circle(img, cx + r * 0.25, cy + r, tear * 0.7, CYAN_LIGHT);
    fill_circle(img, cx - r * 0.5, cy + r * 0.75, tear * 0.3, WHITE);
}

/// Lower half of an ellipse
pub fn smile(img: &mut RgbaImage, cx: f32, cy: f32, rx: f32, ry: f32) {
    let mut layer = layer_like(img);
    fill_ellipse(&mut layer, cx, cy, rx, ry, CYAN);
    fill_ellipse(&mut layer, cx, cy - ry * 0.1, rx * 0.6, ry * 0.55, CYAN_LIGHT);
    let w = layer.width() as f32;
    fill_rect(&mut layer, 0.0, 0.0, w, cy, TRANSPARENT);
    alpha_over(img, &layer);
}

/// Upper half of an ellipse
pub fn frown(img: &mut RgbaImage, cx: f32, cy: f32, rx: f32, ry: f32) {
    let mut layer = layer_like(img);
    fill_ellipse(&mut layer, cx, cy, rx, ry, CYAN);
    fill_ellipse(&mut layer, cx, cy + ry * 0.1, rx * 0.6, ry * 0.55, CYAN_LIGHT);
    let (w, h) = (layer.width() as f32, layer.height() as f32);
    fill_rect(&mut layer, 0.0, cy, w, h, TRANSPARENT);
    alpha_over(img, &layer);
}

pub fn small_smile(img: &mut RgbaImage, cx: f32, cy: f32) {
    smile(img, cx, cy, MOUTH_RX * 0.65, MOUTH_RY * 0.65);
}

pub fn small_frown(img: &mut RgbaImage, cx: f32, cy: f32) {
    frown(img, cx, cy, MOUTH_RX * 0.65, MOUTH_RY * 0.65);
}

/// Straight mouth with half-width `w`
pub fn flat_mouth(img: &mut RgbaImage, cx: f32, cy: f32, w: f32) {
    draw_line(img, (cx - w, cy), (cx + w, cy), 4.0, CYAN);
}

/// Small round "o" mouth
pub fn open_mouth(img: &mut RgbaImage, cx: f32, cy: f32) {
    let r = MOUTH_RY * 0.6;
    fill_circle(img, cx, cy, r, CYAN);
    fill_circle(img, cx, cy, r * 0.5, CYAN_LIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> RgbaImage {
        RgbaImage::from_pixel(CANVAS, CANVAS, TRANSPARENT)
    }

    #[test]
    fn test_eye_layers() {
        let mut img = canvas();
        eye(&mut img, CX, EYE_Y, EYE_R);
        assert_eq!(*img.get_pixel(CX as u32, EYE_Y as u32), DARK_MID);
        assert_eq!(*img.get_pixel((CX + EYE_R - 1.0) as u32, EYE_Y as u32), CYAN);
        let highlight = (CX - EYE_R * 0.32, EYE_Y - EYE_R * 0.32);
        assert_eq!(*img.get_pixel(highlight.0 as u32, highlight.1 as u32), WHITE);
    }

    #[test]
    fn test_half_top_eye_loses_bottom() {
        let mut img = canvas();
        eye_half_top(&mut img, CX, EYE_Y, EYE_R, 0.0);
        assert_eq!(img.get_pixel(CX as u32, (EYE_Y + EYE_R - 2.0) as u32)[3], 0);
        assert_eq!(img.get_pixel(CX as u32, (EYE_Y - EYE_R + 2.0) as u32)[3], 255);
    }

    #[test]
    fn test_half_bottom_eye_loses_top() {
        let mut img = canvas();
        eye_half_bottom(&mut img, CX, EYE_Y, EYE_R, 0.0);
        assert_eq!(img.get_pixel(CX as u32, (EYE_Y - EYE_R + 2.0) as u32)[3], 0);
        assert_eq!(img.get_pixel(CX as u32, (EYE_Y + EYE_R - 2.0) as u32)[3], 255);
    }

    #[test]
    fn test_smile_and_frown_are_opposite_halves() {
        let mut smiling = canvas();
        smile(&mut smiling, CX, MOUTH_Y, MOUTH_RX, MOUTH_RY);
        let below = (CX as u32, (MOUTH_Y + MOUTH_RY - 2.0) as u32);
        let above = (CX as u32, (MOUTH_Y - MOUTH_RY + 2.0) as u32);
        assert_eq!(smiling.get_pixel(below.0, below.1)[3], 255);
        assert_eq!(smiling.get_pixel(above.0, above.1)[3], 0);

        let mut frowning = canvas();
        frown(&mut frowning, CX, MOUTH_Y, MOUTH_RX, MOUTH_RY);
        assert_eq!(frowning.get_pixel(below.0, below.1)[3], 0);
        assert_eq!(frowning.get_pixel(above.0, above.1)[3], 255);
    }
}
