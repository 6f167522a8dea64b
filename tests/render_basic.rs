use badgefactory::test_support::{covered_pixels, pixel, white_pixels};
use badgefactory::{BadgeError, BadgeFactory, BadgeStyle, Color, DisplayScale, Palette};
use pretty_assertions::assert_eq;

fn red_factory() -> BadgeFactory {
    BadgeFactory::with_color(DisplayScale::default(), Color::RED)
}

#[test]
fn circular_badge_red_fill_white_text() {
    let mut f = red_factory();
    f.set_count("3");
    let img = f.build().unwrap();
    assert_eq!((img.width(), img.height()), (20, 20));
    // Center sits on the red disc, corners stay transparent.
    assert_eq!(pixel(&img, 10, 10), [255, 0, 0, 255]);
    assert_eq!(pixel(&img, 0, 0)[3], 0);
    assert_eq!(pixel(&img, 19, 0)[3], 0);
    assert!(white_pixels(&img) > 0, "count text must be drawn in white");
}

#[test]
fn pill_badge_dimensions_and_content() {
    let mut f = red_factory();
    f.set_count("999");
    let img = f.build().unwrap();
    assert!(img.width() > img.height());
    assert_eq!(img.height(), 20);
    // Top edge of the band is filled, corners beyond the caps are not.
    assert_eq!(pixel(&img, img.width() / 2, 0), [255, 0, 0, 255]);
    assert_eq!(pixel(&img, 0, 0)[3], 0);
    assert_eq!(pixel(&img, img.width() - 1, 0)[3], 0);
    assert!(white_pixels(&img) > 0);
}

#[test]
fn build_with_matches_set_count_then_build() {
    let mut a = red_factory();
    a.set_count("17");
    let img_a = a.build().unwrap();

    let mut b = red_factory();
    let img_b = b.build_with("17").unwrap();

    assert_eq!(img_a.as_raw(), img_b.as_raw());
}

#[test]
fn build_value_matches_string_form() {
    let mut a = red_factory();
    let img_a = a.build_value(17).unwrap();
    let mut b = red_factory();
    let img_b = b.build_with("17").unwrap();
    assert_eq!(img_a.as_raw(), img_b.as_raw());
}

#[test]
fn factory_is_reusable_across_builds() {
    let mut f = red_factory();
    let first = f.build_with("3").unwrap();
    let _ = f.build_with("999").unwrap();
    let again = f.build_with("3").unwrap();
    assert_eq!(first.as_raw(), again.as_raw());
}

#[test]
fn strict_build_without_color_fails() {
    let mut f = BadgeFactory::new(DisplayScale::default());
    f.set_style(BadgeStyle::strict());
    f.set_count("3");
    assert!(matches!(f.build(), Err(BadgeError::ColorUnset)));
}

#[test]
fn classic_build_without_color_renders_transparent_fill() {
    let mut f = BadgeFactory::new(DisplayScale::default());
    f.set_style(BadgeStyle::classic());
    f.set_count("9");
    let img = f.build().unwrap();
    // No shape fill, only the white count survives.
    assert_eq!(pixel(&img, 0, 0)[3], 0);
    assert_eq!(covered_pixels(&img), white_pixels(&img));
    assert!(white_pixels(&img) > 0);
}

#[test]
fn empty_count_renders_shape_only() {
    let mut f = red_factory();
    f.set_count("");
    let img = f.build().unwrap();
    assert_eq!((img.width(), img.height()), (20, 20));
    assert_eq!(white_pixels(&img), 0);
    assert!(covered_pixels(&img) > 0);
}

#[test]
fn color_via_hex_string_then_build() {
    let mut f = BadgeFactory::new(DisplayScale::default());
    f.set_badge_color_str("#008080").unwrap();
    let img = f.build_with("4").unwrap();
    // Probe left of the glyph cells, well inside the disc.
    assert_eq!(pixel(&img, 2, 10), [0, 0x80, 0x80, 255]);
}

#[test]
fn invalid_color_string_fails_before_build() {
    let mut f = BadgeFactory::new(DisplayScale::default());
    let err = f.set_badge_color_str("not-a-color").unwrap_err();
    assert!(matches!(err, BadgeError::InvalidColorFormat(_)));
    // The factory still has no color, so a strict build keeps failing.
    f.set_count("3");
    assert!(matches!(f.build(), Err(BadgeError::ColorUnset)));
}

#[test]
fn color_via_resolver() {
    let mut palette = Palette::new();
    palette.insert(11, Color::BLUE);

    let mut f = BadgeFactory::new(DisplayScale::default());
    f.set_badge_color_res(&palette, 11).unwrap();
    let img = f.build_with("6").unwrap();
    assert_eq!(pixel(&img, 2, 10), [0, 0, 255, 255]);

    let err = f.set_badge_color_res(&palette, 99).unwrap_err();
    assert!(matches!(err, BadgeError::UnknownColorResource(99)));
}

#[test]
fn translucent_pill_fill_is_uniform() {
    let mut f = BadgeFactory::new(DisplayScale::default());
    f.set_badge_color_str("#80FF0000").unwrap();
    let img = f.build_with("999").unwrap();
    // Band interior, cap interior next to the band seam, and deep inside a
    // cap must all carry a single blend of the translucent fill.
    let expected = [255, 0, 0, 128];
    assert_eq!(pixel(&img, 20, 10), expected);
    assert_eq!(pixel(&img, 16, 10), expected);
    assert_eq!(pixel(&img, 5, 10), expected);
    assert_eq!(pixel(&img, img.width() - 6, 10), expected);
}

#[test]
fn left_alignment_shifts_the_text() {
    let min_white_x = |img: &image::RgbaImage| {
        img.enumerate_pixels()
            .filter(|(_, _, p)| p.0 == [255, 255, 255, 255])
            .map(|(x, _, _)| x)
            .min()
            .unwrap()
    };

    let mut style = BadgeStyle::classic();
    let mut f = red_factory();
    f.set_style(style);
    let centered = f.build_with("999").unwrap();

    style.text_align = badgefactory::TextAlign::Left;
    f.set_style(style);
    let left = f.build_with("999").unwrap();

    assert!(min_white_x(&left) < min_white_x(&centered));
}

#[test]
fn display_scale_scales_the_raster() {
    let mut f = BadgeFactory::with_color(DisplayScale::new(2.0), Color::RED);
    f.set_count("3");
    let img = f.build().unwrap();
    assert_eq!((img.width(), img.height()), (40, 40));
}
