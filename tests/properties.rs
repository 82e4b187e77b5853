//! Cross-format properties of the public encode/decode API.

use f3d_texture::{
    DecodeJob, EncodeJob, Img, ImgVec, Palette, ResourceLimits, Rgba, TextureError, TextureFormat,
    bits_per_pixel, decode, encode, name_to_code, palette_from_be_bytes,
};
use rayon::prelude::*;

/// 16×16 buffer touching every 8-bit value on each channel.
fn ramp() -> ImgVec<Rgba<u8>> {
    let pixels = (0..=255u8)
        .map(|v| Rgba::new(v, v.wrapping_mul(7), 255 - v, v.wrapping_mul(13)))
        .collect();
    Img::new(pixels, 16, 16)
}

/// Gray ramp with binary alpha, the inputs the intensity formats can represent.
fn gray_ramp() -> ImgVec<Rgba<u8>> {
    let pixels = (0..=255u8)
        .map(|v| Rgba::new(v, v, v, if v % 3 == 0 { 255 } else { 0 }))
        .collect();
    Img::new(pixels, 16, 16)
}

fn round_trip(format: TextureFormat, img: &ImgVec<Rgba<u8>>) -> Vec<Rgba<u8>> {
    let packed = encode(format.code(), img.as_ref()).unwrap();
    let out = decode(
        format.code(),
        packed.bytes(),
        img.width() as u32,
        img.height() as u32,
        None,
    )
    .unwrap();
    out.pixels().pixels().collect()
}

fn binary_alpha(a: u8) -> u8 {
    if a == 255 { 255 } else { 0 }
}

#[test]
fn rgba32_round_trip_is_exact() {
    let img = ramp();
    let decoded = round_trip(TextureFormat::Rgba32, &img);
    assert_eq!(decoded, img.buf().clone());
}

#[test]
fn rgba16_error_within_expansion_step() {
    let img = ramp();
    let decoded = round_trip(TextureFormat::Rgba16, &img);
    for (src, dst) in img.as_ref().pixels().zip(decoded) {
        for (s, d) in [(src.r, dst.r), (src.g, dst.g), (src.b, dst.b)] {
            assert!(d <= s && s - d <= 7, "{s} decoded as {d}");
        }
        assert_eq!(dst.a, binary_alpha(src.a));
    }
}

#[test]
fn intensity_formats_error_within_step() {
    let img = gray_ramp();
    for (format, step) in [
        (TextureFormat::Ia16, 1u8),
        (TextureFormat::Ia8, 16),
        (TextureFormat::Ia4, 32),
        (TextureFormat::I8, 1),
        (TextureFormat::I4, 16),
    ] {
        let decoded = round_trip(format, &img);
        for (src, dst) in img.as_ref().pixels().zip(decoded) {
            assert_eq!(dst.r, dst.g);
            assert_eq!(dst.g, dst.b);
            assert!(
                dst.r <= src.r && src.r - dst.r < step,
                "{format}: {} decoded as {}",
                src.r,
                dst.r
            );
            match format {
                TextureFormat::Ia16 => assert_eq!(dst.a, src.a),
                TextureFormat::Ia4 => assert_eq!(dst.a, binary_alpha(src.a)),
                TextureFormat::I4 => assert_eq!(dst.a, 255),
                TextureFormat::I8 => assert_eq!(dst.a, dst.r),
                _ => {}
            }
        }
    }
}

#[test]
fn one_bit_keeps_coverage() {
    let img = ramp();
    let decoded = round_trip(TextureFormat::OneBitAlpha, &img);
    for (src, dst) in img.as_ref().pixels().zip(decoded) {
        let v = if src.a > 0 { 255 } else { 0 };
        assert_eq!(dst, Rgba::new(v, v, v, v));
    }
}

#[test]
fn re_encoding_decoded_output_is_stable() {
    let img = ramp();
    for format in TextureFormat::ALL.into_iter().filter(|f| f.supports_encode()) {
        let first = encode(format.code(), img.as_ref()).unwrap();
        let decoded = decode(format.code(), first.bytes(), 16, 16, None).unwrap();
        let second = encode(format.code(), decoded.pixels()).unwrap();
        assert_eq!(first, second, "{format}");
    }
}

#[test]
fn packed_length_matches_bits_per_pixel() {
    for (width, height) in [(8usize, 1usize), (16, 16), (24, 3), (64, 32)] {
        let img = Img::new(vec![Rgba::new(10, 20, 30, 40); width * height], width, height);
        for format in TextureFormat::ALL.into_iter().filter(|f| f.supports_encode()) {
            let out = encode(format.code(), img.as_ref()).unwrap();
            let bits = (width * height) as u32 * bits_per_pixel(format.code());
            assert_eq!(out.len(), bits.div_ceil(8) as usize, "{format} {width}x{height}");
        }
    }
}

#[test]
fn names_fold_case_and_default() {
    assert_eq!(name_to_code("RGBA16"), name_to_code("rgba16"));
    assert_eq!(name_to_code("Ci8"), 0x48);
    assert_eq!(name_to_code("bogus"), 0x10);
    assert_eq!(name_to_code(""), name_to_code("rgba16"));
    for format in TextureFormat::ALL {
        assert_eq!(name_to_code(format.short_name()), format.code());
        assert_eq!(name_to_code(format.name()), format.code());
    }
}

#[test]
fn white_rgba16_scenario() {
    let img = Img::new(vec![Rgba::new(255, 255, 255, 255); 4], 2, 2);
    let packed = encode(0x10, img.as_ref()).unwrap();
    assert_eq!(packed.bytes(), &[0xFF; 8]);
    let out = decode(0x10, packed.bytes(), 2, 2, None).unwrap();
    assert!(
        out.pixels()
            .pixels()
            .all(|p| p == Rgba::new(248, 248, 248, 255))
    );
}

#[test]
fn transparent_one_bit_scenario() {
    let img = Img::new(vec![Rgba::new(0, 0, 0, 0); 64], 8, 8);
    let packed = encode(0x00, img.as_ref()).unwrap();
    assert_eq!(packed.bytes(), &[0u8; 8]);
    let out = decode(0x00, packed.bytes(), 8, 8, None).unwrap();
    assert!(out.pixels().pixels().all(|p| p == Rgba::new(0, 0, 0, 0)));
}

#[test]
fn ci4_scenario_with_stored_palette() {
    // palette as it sits in an asset: big-endian words
    let entries = palette_from_be_bytes(&[0x00, 0x00, 0x84, 0x21]);
    let out = decode(0x40, &[0x01], 2, 1, Some(Palette::new(&entries))).unwrap();
    assert_eq!(out.pixel(0, 0), Some(Rgba::new(0, 0, 0, 0)));
    assert_eq!(out.pixel(1, 0), Some(Rgba::new(128, 128, 128, 255)));
    assert_eq!(out.info().to_string(), "CI4 2x1");
}

#[test]
fn indexed_formats_refuse_encode() {
    let img = Img::new(vec![Rgba::new(0, 0, 0, 255); 4], 2, 2);
    for code in [0x40, 0x48] {
        assert!(matches!(
            encode(code, img.as_ref()),
            Err(TextureError::UnsupportedEncode(_))
        ));
    }
}

#[test]
fn limits_apply_to_both_directions() {
    let limits = ResourceLimits::none().with_max_pixels(100);
    let img = Img::new(vec![Rgba::new(0, 0, 0, 255); 256], 16, 16);
    assert!(matches!(
        EncodeJob::new(TextureFormat::I8)
            .with_limits(limits)
            .encode(img.as_ref()),
        Err(TextureError::Limit(_))
    ));
    assert!(matches!(
        DecodeJob::new(TextureFormat::I8)
            .with_limits(limits)
            .decode(&[0; 256], 16, 16),
        Err(TextureError::Limit(_))
    ));
}

#[test]
fn independent_calls_run_concurrently() {
    let inputs: Vec<ImgVec<Rgba<u8>>> = (0..64u8)
        .map(|seed| {
            let pixels = (0..256u32)
                .map(|i| {
                    let v = (i as u8).wrapping_mul(seed | 1);
                    Rgba::new(v, v, v, if i % 2 == 0 { 255 } else { 0 })
                })
                .collect();
            Img::new(pixels, 16, 16)
        })
        .collect();

    let formats: Vec<TextureFormat> = TextureFormat::ALL
        .into_iter()
        .filter(|f| f.supports_encode())
        .collect();

    let sequential: Vec<Vec<u8>> = inputs
        .iter()
        .flat_map(|img| {
            formats
                .iter()
                .map(move |f| encode(f.code(), img.as_ref()).unwrap().into_vec())
        })
        .collect();

    let parallel: Vec<Vec<u8>> = inputs
        .par_iter()
        .flat_map_iter(|img| {
            formats.iter().map(move |f| {
                let packed = encode(f.code(), img.as_ref()).unwrap();
                // decode concurrently too; result must be well formed
                let out = decode(f.code(), packed.bytes(), 16, 16, None).unwrap();
                assert_eq!(out.width(), 16);
                packed.into_vec()
            })
        })
        .collect();

    assert_eq!(sequential, parallel);
}
