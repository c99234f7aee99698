use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixelbrushError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PixelbrushError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        PixelbrushError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        PixelbrushError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixelbrushError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
