use super::*;

#[test]
fn lerp_weight_0_is_dst_and_255_is_src() {
    let dst = [1, 2, 3, 4];
    let src = [200, 201, 202, 203];
    assert_eq!(lerp(dst, src, 0), dst);
    assert_eq!(lerp(dst, src, 255), src);
}

#[test]
fn lerp_half_averages_red_and_blue() {
    let out = lerp([255, 0, 0, 255], [0, 0, 255, 255], 128);
    assert!(out[0] == 127 || out[0] == 128, "{out:?}");
    assert_eq!(out[1], 0);
    assert!(out[2] == 127 || out[2] == 128, "{out:?}");
    assert_eq!(out[3], 255);
}

#[test]
fn lerp_blends_alpha_like_any_channel() {
    let out = lerp([0, 0, 0, 255], [0, 0, 0, 0], 255);
    assert_eq!(out, [0, 0, 0, 0]);
}

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 255), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 255), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 255), src);
}

#[test]
fn over_half_alpha_on_opaque_matches_lerp() {
    let dst = [255, 0, 0, 255];
    let src = [0, 0, 255, 128];
    let out = over(dst, src, 255);
    assert_eq!(out[3], 255);
    assert_eq!(out, lerp(dst, [0, 0, 255, 255], 128));
}

#[test]
fn blend_row_uniform_full_opacity_copies() {
    let mut dst = vec![1u8; 8];
    let src = vec![9u8, 8, 7, 6, 5, 4, 3, 2];
    blend_row_in_place(&mut dst, &src, 255, BlendMode::Uniform);
    assert_eq!(dst, src);
}

#[test]
fn blend_row_source_over_skips_transparent_pixels() {
    let mut dst = vec![10u8, 20, 30, 255, 10, 20, 30, 255];
    let src = vec![0u8, 0, 0, 0, 200, 200, 200, 255];
    blend_row_in_place(&mut dst, &src, 255, BlendMode::SourceOver);
    assert_eq!(dst, vec![10, 20, 30, 255, 200, 200, 200, 255]);
}
