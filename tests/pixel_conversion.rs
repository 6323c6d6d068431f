use skyline_atlas::{convert_pixel, PixelFormat};

#[test]
fn r_to_rgba_replicates_channel() {
    let mut out = Vec::new();
    convert_pixel(&[200], PixelFormat::R, &mut out, PixelFormat::Rgba);
    assert_eq!(out, vec![200, 200, 200, 200]);
}

#[test]
fn ra_to_rgb_premultiplies() {
    let mut out = Vec::new();
    convert_pixel(&[255, 128], PixelFormat::RA, &mut out, PixelFormat::Rgb);
    let expected = ((255u16 * 128u16) / 255) as u8;
    assert_eq!(out, vec![expected, expected, expected]);
}

#[test]
fn ra_to_rgba_keeps_colour_and_alpha_unpremultiplied() {
    let mut out = Vec::new();
    convert_pixel(&[255, 128], PixelFormat::RA, &mut out, PixelFormat::Rgba);
    assert_eq!(out, vec![255, 255, 255, 128]);
}

#[test]
fn rgb_to_r_applies_greyscale_coefficients() {
    let mut out = Vec::new();
    convert_pixel(&[100, 200, 50], PixelFormat::Rgb, &mut out, PixelFormat::R);
    let expected = (100.0f32 * 0.21 + 200.0f32 * 0.72 + 50.0f32 * 0.07).round() as u8;
    assert_eq!(out, vec![expected]);
}

#[test]
fn rgba_to_r_premultiplies_greyscale_by_alpha() {
    let mut out = Vec::new();
    convert_pixel(&[255, 255, 255, 64], PixelFormat::Rgba, &mut out, PixelFormat::R);
    let grey = 255u8; // pure white greyscales to 255
    let expected = ((grey as f32) * (64.0 / 255.0)).round() as u8;
    assert_eq!(out, vec![expected]);
}

#[test]
fn rgba_to_rgba_is_passthrough() {
    let mut out = Vec::new();
    convert_pixel(&[1, 2, 3, 4], PixelFormat::Rgba, &mut out, PixelFormat::Rgba);
    assert_eq!(out, vec![1, 2, 3, 4]);
}

#[test]
fn bytes_per_pixel_matches_format_tag() {
    assert_eq!(PixelFormat::R.bytes_per_pixel(), 1);
    assert_eq!(PixelFormat::RA.bytes_per_pixel(), 2);
    assert_eq!(PixelFormat::Rgb.bytes_per_pixel(), 3);
    assert_eq!(PixelFormat::Rgba.bytes_per_pixel(), 4);
}
