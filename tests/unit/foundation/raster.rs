use super::*;

#[test]
fn from_rgba8_checks_length() {
    assert!(Image::from_rgba8(2, 2, vec![0; 16]).is_ok());
    let err = Image::from_rgba8(2, 2, vec![0; 15]).unwrap_err();
    assert!(matches!(err, TryOnError::Validation(_)));
}

#[test]
fn zero_area_is_rejected() {
    assert!(Image::solid(0, 4, [0, 0, 0, 255]).is_err());
    assert!(Image::solid(4, 0, [0, 0, 0, 255]).is_err());
    assert!(Image::from_rgba8(0, 0, vec![]).is_err());
}

#[test]
fn solid_fills_every_pixel() {
    let img = Image::solid(3, 2, [1, 2, 3, 4]).unwrap();
    assert_eq!(img.dimensions(), (3, 2));
    assert!(img.as_raw().chunks_exact(4).all(|px| px == [1, 2, 3, 4]));
    assert_eq!(img.pixel(2, 1), Some([1, 2, 3, 4]));
    assert_eq!(img.pixel(3, 0), None);
}

#[test]
fn clone_shares_storage_and_compares_by_pixels() {
    let a = Image::solid(2, 2, [9, 9, 9, 255]).unwrap();
    let b = a.clone();
    assert!(a.shares_pixels_with(&b));

    let c = Image::solid(2, 2, [9, 9, 9, 255]).unwrap();
    assert!(!a.shares_pixels_with(&c));
    assert_eq!(a, c);
}

#[test]
fn from_dynamic_converts_rgb_to_opaque_rgba() {
    let rgb = image::RgbImage::from_pixel(1, 1, image::Rgb([10, 20, 30]));
    let img = Image::from_dynamic(DynamicImage::ImageRgb8(rgb)).unwrap();
    assert_eq!(img.pixel(0, 0), Some([10, 20, 30, 255]));
}

#[test]
fn debug_omits_pixel_data() {
    let img = Image::solid(5, 7, [0, 0, 0, 0]).unwrap();
    assert_eq!(format!("{img:?}"), "Image { width: 5, height: 7 }");
}
