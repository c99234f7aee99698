use super::*;

#[test]
fn from_premul_rejects_wrong_length() {
    assert!(SourceImage::from_premul_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(SourceImage::from_premul_rgba8(0, 2, vec![]).is_err());
    assert!(SourceImage::from_premul_rgba8(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn from_rgba_image_premultiplies() {
    let img = image::RgbaImage::from_raw(1, 1, vec![200, 100, 50, 0]).unwrap();
    let src = SourceImage::from_rgba_image(img).unwrap();
    assert_eq!(src.texel(0, 0), [0, 0, 0, 0]);
}

#[test]
fn rendered_size_defaults_to_intrinsic() {
    let src = SourceImage::from_premul_rgba8(3, 2, vec![0; 24]).unwrap();
    assert_eq!(src.rendered_size(), Canvas::new(3, 2).unwrap());

    let scaled = src
        .with_rendered_size(Canvas::new(30, 20).unwrap())
        .unwrap();
    assert_eq!(scaled.rendered_size().width, 30);
    assert_eq!(scaled.intrinsic_size().width, 3);
    assert_eq!(scaled.size(), (3, 2));
}

#[test]
fn texel_reads_row_major() {
    let mut data = vec![0u8; 2 * 2 * 4];
    data[(2 + 1) * 4..(2 + 1) * 4 + 4].copy_from_slice(&[1, 2, 3, 255]);
    let src = SourceImage::from_premul_rgba8(2, 2, data).unwrap();
    assert_eq!(src.texel(1, 1), [1, 2, 3, 255]);
    assert_eq!(src.texel(0, 1), [0, 0, 0, 0]);
}

#[test]
fn frame_pixel_is_bounds_checked() {
    let f = FrameRGBA::transparent(Canvas::new(2, 1).unwrap());
    assert_eq!(f.pixel(1, 0), Some([0, 0, 0, 0]));
    assert_eq!(f.pixel(2, 0), None);
    assert!(f.premultiplied);
}

#[test]
fn rendered_size_is_validated() {
    let src = SourceImage::from_premul_rgba8(1, 1, vec![0; 4]).unwrap();
    let huge = Canvas {
        width: 100_000,
        height: 100_000,
    };
    let err = src.clone().with_rendered_size(huge).unwrap_err();
    assert!(err.to_string().contains("validation error:"));

    let empty = Canvas {
        width: 0,
        height: 3,
    };
    assert!(src.with_rendered_size(empty).is_err());
}
