use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TminusError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(TminusError::font("x").to_string().contains("font error:"));
    assert!(TminusError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TminusError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn io_errors_convert_with_question_mark() {
    fn fails() -> TminusResult<()> {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))?;
        Ok(())
    }
    assert!(matches!(fails(), Err(TminusError::Io(_))));
}
