//! Drawing recipe and description for every face

use crate::canvas::{draw_line, fill_circle, fill_rounded_rect};
use crate::features::*;
use faces_core::Face;
use image::{Rgba, RgbaImage};

/// Horizontal eye shift for the looking faces
const LOOK_OFFSET: f32 = 8.0;

/// One-line description of a face's artwork
pub fn describe(face: Face) -> &'static str {
    match face {
        Face::Awake => "Open eyes, neutral",
        Face::Happy => "Round eyes, smile",
        Face::Sad => "Droopy half-closed eyes, frown",
        Face::Excited => "Big eyes, big smile",
        Face::Bored => "Half-closed eyes, flat mouth",
        Face::Angry => "Angry angled eyes, frown",
        Face::Cool => "Dark sunglasses, small smile",
        Face::Grateful => "Arc eyes, smile",
        Face::Motivated => "Wide eyes, smile",
        Face::Demotivated => "Half-closed eyes, flat mouth",
        Face::Intense => "Wide eyes, open mouth",
        Face::Smart => "Round eyes, small smile",
        Face::Lonely => "Small eyes, small frown",
        Face::Sleep => "Crescent eyes, small flat mouth",
        Face::Sleep2 => "Crescent eyes, tiny flat mouth",
        Face::Friend => "Heart eyes, smile",
        Face::Broken => "Teary eyes, frown",
        Face::Debug => "Hash eyes, flat mouth",
        Face::LookR => "Eyes right, neutral",
        Face::LookL => "Eyes left, neutral",
        Face::LookRHappy => "Eyes right, smile",
        Face::LookLHappy => "Eyes left, smile",
        Face::Upload => "1-0 uploading",
        Face::Upload1 => "1-1 uploading",
        Face::Upload2 => "0-1 uploading",
    }
}

/// Draws `face` onto a transparent canvas of [`CANVAS`] pixels
pub fn draw(face: Face, img: &mut RgbaImage) {
    match face {
        Face::Awake => {
            eyes(img, 0.0, EYE_R);
            flat_mouth(img, CX, MOUTH_Y, MOUTH_RX);
        }
        Face::Happy => {
            eyes(img, 0.0, EYE_R);
            smile(img, CX, MOUTH_Y, MOUTH_RX, MOUTH_RY);
        }
        Face::Sad => {
            eye_half_top(img, LX, EYE_Y, EYE_R, 10.0);
            eye_half_top(img, RX, EYE_Y, EYE_R, -10.0);
            frown(img, CX, MOUTH_Y, MOUTH_RX, MOUTH_RY);
        }
        Face::Excited => {
            eyes(img, 0.0, EYE_R * 1.25);
            smile(img, CX, MOUTH_Y, MOUTH_RX * 1.15, MOUTH_RY * 1.15);
        }
        Face::Bored => {
            eye_half_bottom(img, LX, EYE_Y, EYE_R, 0.0);
            eye_half_bottom(img, RX, EYE_Y, EYE_R, 0.0);
            flat_mouth(img, CX, MOUTH_Y, MOUTH_RX * 0.7);
        }
        Face::Angry => {
            eye_half_bottom(img, LX, EYE_Y, EYE_R, -20.0);
            eye_half_bottom(img, RX, EYE_Y, EYE_R, 20.0);
            frown(img, CX, MOUTH_Y, MOUTH_RX * 0.8, MOUTH_RY * 0.8);
        }
        Face::Cool => {
            sunglasses(img);
            small_smile(img, CX, MOUTH_Y + 5.0);
        }
        Face::Grateful => {
            arc_eye(img, LX, EYE_Y, EYE_R);
            arc_eye(img, RX, EYE_Y, EYE_R);
            smile(img, CX, MOUTH_Y, MOUTH_RX, MOUTH_RY);
        }
        Face::Motivated => {
            eyes(img, 0.0, EYE_R * 1.15);
            smile(img, CX, MOUTH_Y, MOUTH_RX, MOUTH_RY);
        }
        Face::Demotivated => {
            eye_half_bottom(img, LX, EYE_Y, EYE_R, 0.0);
            eye_half_bottom(img, RX, EYE_Y, EYE_R, 0.0);
            flat_mouth(img, CX, MOUTH_Y, MOUTH_RX * 0.6);
        }
        Face::Intense => {
            eyes(img, 0.0, EYE_R * 1.25);
            open_mouth(img, CX, MOUTH_Y);
        }
        Face::Smart => {
            eyes(img, 0.0, EYE_R);
            small_smile(img, CX, MOUTH_Y);
        }
        Face::Lonely => {
            eyes(img, 0.0, EYE_R * 0.85);
            small_frown(img, CX, MOUTH_Y);
        }
        Face::Sleep => {
            arc_eye(img, LX, EYE_Y, EYE_R);
            arc_eye(img, RX, EYE_Y, EYE_R);
            flat_mouth(img, CX, MOUTH_Y, MOUTH_RX * 0.5);
        }
        Face::Sleep2 => {
            arc_eye(img, LX, EYE_Y, EYE_R);
            arc_eye(img, RX, EYE_Y, EYE_R);
            flat_mouth(img, CX, MOUTH_Y, MOUTH_RX * 0.35);
        }
        Face::Friend => {
            heart_eye(img, LX, EYE_Y);
            heart_eye(img, RX, EYE_Y);
            smile(img, CX, MOUTH_Y, MOUTH_RX, MOUTH_RY);
        }
        Face::Broken => {
            tear_eye(img, LX, EYE_Y, EYE_R);
            tear_eye(img, RX, EYE_Y, EYE_R);
            frown(img, CX, MOUTH_Y, MOUTH_RX * 0.6, MOUTH_RY * 0.6);
        }
        Face::Debug => {
            hash_eye(img, LX, EYE_Y);
            hash_eye(img, RX, EYE_Y);
            flat_mouth(img, CX, MOUTH_Y, MOUTH_RX * 0.5);
        }
        Face::LookR => {
            eyes(img, LOOK_OFFSET, EYE_R);
            flat_mouth(img, CX, MOUTH_Y, MOUTH_RX);
        }
        Face::LookL => {
            eyes(img, -LOOK_OFFSET, EYE_R);
            flat_mouth(img, CX, MOUTH_Y, MOUTH_RX);
        }
        Face::LookRHappy => {
            eyes(img, LOOK_OFFSET, EYE_R);
            smile(img, CX, MOUTH_Y, MOUTH_RX, MOUTH_RY);
        }
        Face::LookLHappy => {
            eyes(img, -LOOK_OFFSET, EYE_R);
            smile(img, CX, MOUTH_Y, MOUTH_RX, MOUTH_RY);
        }
        Face::Upload => {
            eye(img, LX, EYE_Y, EYE_R);
            line_eye(img, RX, EYE_Y);
            open_mouth(img, CX, MOUTH_Y);
        }
        Face::Upload1 => {
            eyes(img, 0.0, EYE_R);
            open_mouth(img, CX, MOUTH_Y);
        }
        Face::Upload2 => {
            line_eye(img, LX, EYE_Y);
            eye(img, RX, EYE_Y, EYE_R);
            open_mouth(img, CX, MOUTH_Y);
        }
    }
}

/// Pair of round eyes shifted horizontally by `offset`
fn eyes(img: &mut RgbaImage, offset: f32, r: f32) {
    eye(img, LX + offset, EYE_Y, r);
    eye(img, RX + offset, EYE_Y, r);
}

fn sunglasses(img: &mut RgbaImage) {
    let lens_w = EYE_R * 1.35;
    let lens_h = EYE_R * 0.95;
    let frame = 5.0;

    for cx in [LX, RX] {
        fill_rounded_rect(
            img,
            [cx - lens_w, EYE_Y - lens_h, cx + lens_w, EYE_Y + lens_h],
            lens_h * 0.45,
            CYAN,
        );
        fill_rounded_rect(
            img,
            [
                cx - lens_w + frame,
                EYE_Y - lens_h + frame,
                cx + lens_w - frame,
                EYE_Y + lens_h - frame,
            ],
            lens_h * 0.35,
            DARK,
        );

        let dot = (lens_h * 0.15).max(4.0);
        fill_circle(img, cx - lens_w * 0.35, EYE_Y - lens_h * 0.3, dot, WHITE);
        fill_circle(
            img,
            cx + lens_w * 0.15,
            EYE_Y + lens_h * 0.1,
            dot * 0.5,
            Rgba([200, 230, 240, 255]),
        );
    }

    let bridge_y = EYE_Y - lens_h * 0.15;
    draw_line(img, (LX + lens_w, bridge_y), (RX - lens_w, bridge_y), 5.0, CYAN);
}
