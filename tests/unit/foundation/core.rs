use super::*;

#[test]
fn extent_follows_axis() {
    let size = CanvasSize::new(3840, 1080);
    assert_eq!(size.extent(Axis::Horizontal), 3840);
    assert_eq!(size.extent(Axis::Vertical), 1080);
}

#[test]
fn unknown_axis_name_falls_back_to_horizontal() {
    assert_eq!(Axis::from_name("vertical"), Axis::Vertical);
    assert_eq!(Axis::from_name("horizontal"), Axis::Horizontal);
    assert_eq!(Axis::from_name("diagonal"), Axis::Horizontal);
    assert_eq!(Axis::from_name(""), Axis::Horizontal);
}

#[test]
fn fixed_sizes_share_height() {
    assert_eq!(CANVAS_SIZE.height, TEXTURE_SIZE.height);
    assert!(TEXTURE_SIZE.width.is_power_of_two());
}

#[test]
fn color_converts_to_pixel() {
    assert_eq!(
        Rgba8::new(128, 0, 0, 64).to_pixel(),
        image::Rgba([128, 0, 0, 64])
    );
    assert_eq!(Rgba8::transparent().to_pixel(), image::Rgba([0, 0, 0, 0]));
}
