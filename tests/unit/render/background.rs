use super::*;
use crate::foundation::core::Rgba8;

fn solid(w: u32, h: u32, px: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, image::Rgba(px)))
}

#[test]
fn cover_fit_always_matches_target_size() {
    let target = CanvasSize::new(384, 108);
    for (w, h) in [(384, 108), (100, 100), (50, 400), (4000, 30), (1, 1), (77, 21)] {
        let fitted = cover_fit(&solid(w, h, [1, 2, 3, 255]), target);
        assert_eq!(fitted.dimensions(), (384, 108), "source {w}x{h}");
    }
}

#[test]
fn cover_fit_crops_center_instead_of_letterboxing() {
    // Three horizontal bands on a square source; a wide target keeps only the middle band.
    let mut src = RgbaImage::new(90, 90);
    for (_, y, px) in src.enumerate_pixels_mut() {
        *px = if y < 30 {
            image::Rgba([255, 0, 0, 255])
        } else if y < 60 {
            image::Rgba([0, 255, 0, 255])
        } else {
            image::Rgba([0, 0, 255, 255])
        };
    }
    let fitted = cover_fit(&DynamicImage::ImageRgba8(src), CanvasSize::new(90, 30));
    assert_eq!(fitted.dimensions(), (90, 30));
    assert_eq!(fitted.get_pixel(45, 15).0, [0, 255, 0, 255]);
    assert_eq!(fitted.get_pixel(0, 0).0, [0, 255, 0, 255]);
    assert_eq!(fitted.get_pixel(89, 29).0, [0, 255, 0, 255]);
}

#[test]
fn background_leaves_no_uncovered_pixels() {
    let mut canvas = Canvas::filled(CanvasSize::new(64, 18), Rgba8::new(1, 1, 1, 255));
    draw_background_image(&mut canvas, &solid(10, 40, [200, 100, 50, 255]));

    assert_eq!(canvas.size(), CanvasSize::new(64, 18));
    for (x, y, px) in canvas.pixels().enumerate_pixels() {
        let on_edge = x == 0 || y == 0 || x == 63 || y == 17;
        if on_edge {
            assert!(px.0[0].abs_diff(200) <= 1, "edge pixel {x},{y} = {:?}", px.0);
        }
    }
}

#[test]
fn draw_background_reports_missing_file() {
    let mut canvas = Canvas::new(CanvasSize::new(4, 4));
    let err = draw_background(&mut canvas, Path::new("no/such/background.jpg")).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::BackdropError::ImageLoad(_)
    ));
}
