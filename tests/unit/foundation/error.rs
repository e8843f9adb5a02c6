use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DeckmorphError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        DeckmorphError::construction("x")
            .to_string()
            .contains("construction error:")
    );
    assert!(
        DeckmorphError::image_store("x")
            .to_string()
            .contains("image store error:")
    );
    assert!(
        DeckmorphError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DeckmorphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: DeckmorphError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, DeckmorphError::Serde(_)));
}
