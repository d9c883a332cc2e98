use std::io::Cursor;

use super::*;

fn png_bytes(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_alpha() {
    let src = image::RgbaImage::from_raw(2, 1, vec![100, 50, 200, 128, 1, 2, 3, 255]).unwrap();
    let img = decode_image(&png_bytes(src)).unwrap();
    assert_eq!((img.width(), img.height()), (2, 1));
    assert_eq!(img.to_rgba8().get_pixel(0, 0).0, [100, 50, 200, 128]);
}

#[test]
fn decode_garbage_is_image_load_error() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, BackdropError::ImageLoad(_)));
}

#[test]
fn missing_file_is_image_load_error_naming_path() {
    let path = std::env::temp_dir().join(format!(
        "backdrop_missing_{}_{}.png",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let err = load_image(&path).unwrap_err();
    assert!(matches!(err, BackdropError::ImageLoad(_)));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn load_image_reads_from_disk() {
    let dir = std::env::temp_dir().join(format!("backdrop_decode_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("px.png");
    std::fs::write(
        &path,
        png_bytes(image::RgbaImage::from_pixel(3, 4, image::Rgba([9, 9, 9, 255]))),
    )
    .unwrap();

    let img = load_image(&path).unwrap();
    assert_eq!((img.width(), img.height()), (3, 4));

    std::fs::remove_dir_all(&dir).ok();
}
