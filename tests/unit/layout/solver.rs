use super::*;

const CANVAS: CanvasSize = CanvasSize {
    width: 3840,
    height: 1080,
};

fn spec(h: HorizontalAlign, v: VerticalAlign) -> PlacementSpec {
    PlacementSpec {
        horizontal_align: h,
        vertical_align: v,
        ..PlacementSpec::default()
    }
}

#[test]
fn zero_percent_is_zero_pixels_on_both_axes() {
    assert_eq!(percent_to_pixels(CANVAS, 0.0, Axis::Horizontal), 0);
    assert_eq!(percent_to_pixels(CANVAS, 0.0, Axis::Vertical), 0);
}

#[test]
fn percent_uses_axis_extent() {
    assert_eq!(percent_to_pixels(CANVAS, 10.0, Axis::Horizontal), 384);
    assert_eq!(percent_to_pixels(CANVAS, 10.0, Axis::Vertical), 108);
    assert_eq!(percent_to_pixels(CANVAS, 3.5, Axis::Vertical), 38);
    assert_eq!(
        percent_to_pixels(CANVAS, 5.0, Axis::from_name("sideways")),
        192
    );
}

#[test]
fn percent_is_monotonic_in_canvas_size() {
    for percent in [0.0, 1.0, 3.5, 33.3, 66.0, 100.0, 150.0] {
        let mut prev = i64::MIN;
        for extent in (0..2000).step_by(7) {
            let canvas = CanvasSize::new(extent, extent);
            let px = percent_to_pixels(canvas, percent, Axis::Vertical);
            assert!(px >= prev, "percent {percent} extent {extent}");
            prev = px;
        }
    }
}

#[test]
fn negative_percent_propagates_without_validation() {
    assert_eq!(percent_to_pixels(CANVAS, -1.0, Axis::Horizontal), -38);
}

#[test]
fn left_align_with_zero_padding_touches_left_edge() {
    let p = resolve_placement(
        CANVAS,
        CanvasSize::new(200, 100),
        &spec(HorizontalAlign::Left, VerticalAlign::Top),
    );
    assert_eq!(p, Placement { x: 0, y: 0 });
}

#[test]
fn left_and_top_padding_push_inward() {
    let mut s = spec(HorizontalAlign::Left, VerticalAlign::Top);
    s.padding_left = 1.0;
    s.padding_top = 2.0;
    let p = resolve_placement(CANVAS, CanvasSize::new(200, 100), &s);
    assert_eq!(p, Placement { x: 38, y: 22 });
}

#[test]
fn center_align_centers_within_rounding() {
    for width in [1u32, 100, 215, 216, 999, 3839] {
        let p = resolve_placement(
            CANVAS,
            CanvasSize::new(width, 10),
            &spec(HorizontalAlign::Center, VerticalAlign::Middle),
        );
        let exact = (f64::from(CANVAS.width) - f64::from(width)) / 2.0;
        assert!((p.x as f64 - exact).abs() <= 1.0, "width {width}");
    }
}

#[test]
fn center_is_shifted_by_left_minus_right_padding() {
    let mut s = spec(HorizontalAlign::Center, VerticalAlign::Middle);
    s.padding_left = 2.0;
    s.padding_right = 1.0;
    s.padding_top = 0.0;
    s.padding_bottom = 10.0;
    let p = resolve_placement(CANVAS, CanvasSize::new(100, 100), &s);
    assert_eq!(p.x, 1870 + 77 - 38);
    assert_eq!(p.y, 490 - 108);
}

#[test]
fn right_padding_pushes_past_the_right_edge() {
    let canvas = CanvasSize::new(100, 50);
    let mut s = spec(HorizontalAlign::Right, VerticalAlign::Top);
    let p = resolve_placement(canvas, CanvasSize::new(20, 10), &s);
    assert_eq!(p.x, 80);

    s.padding_right = 10.0;
    let p = resolve_placement(canvas, CanvasSize::new(20, 10), &s);
    assert_eq!(p.x, 90);
}

#[test]
fn bottom_padding_pushes_up() {
    let mut s = spec(HorizontalAlign::Left, VerticalAlign::Bottom);
    s.padding_bottom = 3.5;
    let p = resolve_placement(CANVAS, CanvasSize::new(216, 108), &s);
    assert_eq!(p.y, 1080 - 108 - 38);
}

#[test]
fn scaling_to_ten_percent_of_1080_gives_108() {
    let scaled = scaled_element_size(CANVAS, CanvasSize::new(400, 200), Some(10.0));
    assert_eq!(scaled, CanvasSize::new(216, 108));

    let scaled = scaled_element_size(CANVAS, CanvasSize::new(1234, 567), Some(10.0));
    assert!(scaled.height.abs_diff(108) <= 1);
    let ratio_in = 1234.0 / 567.0;
    let ratio_out = f64::from(scaled.width) / f64::from(scaled.height);
    assert!((ratio_in - ratio_out).abs() < 0.02);
}

#[test]
fn missing_or_zero_scale_leaves_size_alone() {
    let el = CanvasSize::new(33, 44);
    assert_eq!(scaled_element_size(CANVAS, el, None), el);
    assert_eq!(scaled_element_size(CANVAS, el, Some(0.0)), el);
}

#[test]
fn logo_placement_lands_bottom_center() {
    let spec = PlacementSpec::logo();
    let size = scaled_element_size(CANVAS, CanvasSize::new(400, 200), spec.scaled_height_percent);
    let p = resolve_placement(CANVAS, size, &spec);
    assert_eq!(p, Placement { x: 1812, y: 934 });
}

#[test]
fn unknown_alignment_names_are_rejected() {
    assert_eq!(
        "right".parse::<HorizontalAlign>().unwrap(),
        HorizontalAlign::Right
    );
    assert_eq!(
        "middle".parse::<VerticalAlign>().unwrap(),
        VerticalAlign::Middle
    );
    assert!(matches!(
        "centre".parse::<HorizontalAlign>(),
        Err(BackdropError::Validation(_))
    ));
    assert!(matches!(
        "center".parse::<VerticalAlign>(),
        Err(BackdropError::Validation(_))
    ));
}

#[test]
fn placement_spec_reads_partial_json() {
    let s: PlacementSpec =
        serde_json::from_str(r#"{"horizontal_align":"right","padding_right":2.5}"#).unwrap();
    assert_eq!(s.horizontal_align, HorizontalAlign::Right);
    assert_eq!(s.vertical_align, VerticalAlign::Middle);
    assert_eq!(s.padding_right, 2.5);
    assert_eq!(s.scaled_height_percent, None);

    assert!(serde_json::from_str::<PlacementSpec>(r#"{"vertical_align":"centre"}"#).is_err());
    assert!(serde_json::from_str::<PlacementSpec>(r#"{"padding":1}"#).is_err());
}

#[test]
fn validate_rejects_non_finite_numbers() {
    assert!(PlacementSpec::logo().validate().is_ok());

    let s = PlacementSpec {
        padding_top: f64::NAN,
        ..PlacementSpec::default()
    };
    assert!(matches!(s.validate(), Err(BackdropError::Validation(_))));

    let s = PlacementSpec {
        scaled_height_percent: Some(f64::INFINITY),
        ..PlacementSpec::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn centered_offset_rounds_half_to_even() {
    assert_eq!(centered_offset(3840, 535), 1652);
    assert_eq!(centered_offset(1080, 713), 184);
    assert_eq!(centered_offset(10, 3), 4);
}

#[test]
fn huge_finite_paddings_saturate_instead_of_overflowing() {
    let element = CanvasSize::new(200, 100);

    let mut s = spec(HorizontalAlign::Right, VerticalAlign::Bottom);
    s.padding_right = 1e20;
    s.padding_bottom = 1e20;
    assert!(s.validate().is_ok());
    let p = resolve_placement(CANVAS, element, &s);
    assert_eq!(p.x, i64::MAX);
    assert_eq!(p.y, 1080 - 100 - i64::MAX);

    let mut s = spec(HorizontalAlign::Left, VerticalAlign::Top);
    s.padding_left = 1e20;
    s.padding_top = -1e20;
    let p = resolve_placement(CANVAS, element, &s);
    assert_eq!(p, Placement { x: i64::MAX, y: i64::MIN });

    let mut s = spec(HorizontalAlign::Center, VerticalAlign::Middle);
    s.padding_left = 1e20;
    s.padding_bottom = 1e20;
    let p = resolve_placement(CANVAS, element, &s);
    assert_eq!(p.x, i64::MAX);
    assert!(p.y < 0);
}
