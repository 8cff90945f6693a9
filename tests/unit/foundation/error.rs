use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IconError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(IconError::raster("x").to_string().contains("raster error:"));
    assert!(
        IconError::from(MissingCapability::png())
            .to_string()
            .contains("missing capability:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = IconError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn remediation_is_two_fixed_lines() {
    let lines = MissingCapability::png().remediation_lines();
    assert_eq!(
        lines[0],
        "PNG support (the `png` feature of eye-icon) is required. Rebuild with: cargo build --features png"
    );
    assert_eq!(
        lines[1],
        "Alternatively, you can create simple icon PNG files manually."
    );
    assert!(lines.iter().all(|l| !l.contains('\n')));
}

#[test]
fn missing_capability_is_recoverable_from_error() {
    let err: IconError = MissingCapability::png().into();
    assert_eq!(err.as_missing_capability(), Some(&MissingCapability::png()));
    assert!(IconError::validation("x").as_missing_capability().is_none());
}
