use std::path::PathBuf;

use super::*;
use crate::assets::decode::{decode_image, load_image};

#[test]
fn format_from_extension() {
    assert_eq!(
        OutputFormat::from_path(Path::new("a/b.png")).unwrap(),
        OutputFormat::Png
    );
    assert_eq!(
        OutputFormat::from_path(Path::new("out.JPG")).unwrap(),
        OutputFormat::Jpeg {
            quality: DEFAULT_JPEG_QUALITY
        }
    );
    assert!(OutputFormat::from_path(Path::new("out.jpeg")).is_ok());
    assert!(OutputFormat::from_path(Path::new("out.gif")).is_err());
    assert!(OutputFormat::from_path(Path::new("out")).is_err());
}

#[test]
fn png_is_lossless_including_alpha() {
    let img = Image::from_rgba8(2, 1, vec![1, 2, 3, 4, 250, 251, 252, 0]).unwrap();
    let bytes = encode_image(&img, OutputFormat::Png).unwrap();
    assert_eq!(decode_image(&bytes).unwrap(), img);
}

#[test]
fn jpeg_drops_alpha() {
    let img = Image::solid(8, 8, [120, 60, 30, 10]).unwrap();
    let bytes = encode_image(&img, OutputFormat::Jpeg { quality: 92 }).unwrap();
    let back = decode_image(&bytes).unwrap();
    assert_eq!(back.dimensions(), (8, 8));
    assert!(back.as_raw().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn save_creates_parent_dirs() {
    let dir = PathBuf::from("target").join("unit_encode").join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("out.png");

    let img = Image::solid(3, 3, [9, 8, 7, 255]).unwrap();
    save_image(&img, &path).unwrap();
    assert_eq!(load_image(&path).unwrap(), img);
}

#[test]
fn save_rejects_unknown_extension() {
    let img = Image::solid(1, 1, [0, 0, 0, 255]).unwrap();
    let err = save_image(&img, "target/unit_encode/out.bmpx").unwrap_err();
    assert!(matches!(err, TryOnError::Validation(_)));
}
