use std::io::Cursor;

use super::*;

fn png_bytes(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_straight_alpha() {
    let src = image::RgbaImage::from_raw(1, 1, vec![100u8, 50, 200, 128]).unwrap();
    let img = decode_image(&png_bytes(src)).unwrap();
    assert_eq!(img.dimensions(), (1, 1));
    assert_eq!(img.as_raw(), &[100, 50, 200, 128]);
}

#[test]
fn decode_jpeg_is_opaque() {
    let rgb = image::RgbImage::from_pixel(8, 4, image::Rgb([200, 200, 200]));
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(rgb)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Jpeg)
        .unwrap();

    let img = decode_image(&buf).unwrap();
    assert_eq!(img.dimensions(), (8, 4));
    assert!(img.as_raw().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn garbage_is_a_decode_error() {
    assert!(matches!(
        decode_image(b"definitely not an image"),
        Err(TryOnError::Decode(_))
    ));
    assert!(matches!(decode_image(&[]), Err(TryOnError::Decode(_))));
}

#[test]
fn truncated_png_is_a_decode_error() {
    let src = image::RgbaImage::from_pixel(16, 16, image::Rgba([1, 2, 3, 255]));
    let bytes = png_bytes(src);
    let err = decode_image(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, TryOnError::Decode(_)));
}

#[test]
fn load_missing_file_is_io_error() {
    let err = load_image("target/does-not-exist/person.png").unwrap_err();
    assert!(matches!(err, TryOnError::Io(_)));
}

#[test]
fn load_names_the_file_on_decode_failure() {
    let dir = std::path::PathBuf::from("target").join("unit_decode");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.png");
    std::fs::write(&path, b"nope").unwrap();

    let err = load_image(&path).unwrap_err();
    assert!(err.to_string().contains("broken.png"), "{err}");
}

/// Insert an APP1 Exif segment carrying a single Orientation tag right after SOI.
fn with_exif_orientation(jpeg: &[u8], orientation: u8) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM\x00\x2A\x00\x00\x00\x08"); // big-endian, IFD0 at 8
    tiff.extend_from_slice(&[0x00, 0x01]); // one entry
    tiff.extend_from_slice(&[0x01, 0x12, 0x00, 0x03]); // Orientation, SHORT
    tiff.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]); // count
    tiff.extend_from_slice(&[0x00, orientation, 0x00, 0x00]);
    tiff.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // no next IFD

    let payload_len = (2 + 6 + tiff.len()) as u16;
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend_from_slice(&payload_len.to_be_bytes());
    out.extend_from_slice(b"Exif\x00\x00");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&jpeg[2..]);
    out
}

#[test]
fn decode_jpeg_applies_exif_rotation() {
    // Left half red, right half blue; 16 px blocks keep the colors clean through JPEG.
    let src = image::RgbImage::from_fn(32, 16, |x, _| {
        if x < 16 {
            image::Rgb([255, 0, 0])
        } else {
            image::Rgb([0, 0, 255])
        }
    });
    let mut jpeg = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, 95)
        .encode_image(&src)
        .unwrap();

    let upright = decode_image(&jpeg).unwrap();
    assert_eq!(upright.dimensions(), (32, 16));

    // Orientation 6: rotate 90 degrees clockwise, so the left half ends up on top.
    let rotated = decode_image(&with_exif_orientation(&jpeg, 6)).unwrap();
    assert_eq!(rotated.dimensions(), (16, 32));

    let top = rotated.pixel(8, 4).unwrap();
    assert!(top[0] > 200 && top[2] < 60, "top {top:?}");
    let bottom = rotated.pixel(8, 28).unwrap();
    assert!(bottom[2] > 200 && bottom[0] < 60, "bottom {bottom:?}");
}
