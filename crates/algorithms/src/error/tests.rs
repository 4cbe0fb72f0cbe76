use super::*;

#[test]
fn test_validation_functions() {
    assert!(validate::length("buffer", 97, 97).is_ok());
    let err = validate::length("buffer", 49, 97).unwrap_err();
    match err {
        Error::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 97);
            assert_eq!(actual, 49);
        }
        _ => panic!("Expected InvalidLength error"),
    }
}

#[test]
fn test_point_predicates() {
    assert!(validate::on_curve(true, "G1Affine::from_bytes").is_ok());
    let err = validate::on_curve(false, "G1Affine::from_bytes").unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedEncoding {
            context: "G1Affine::from_bytes",
            ..
        }
    ));

    let err = validate::in_subgroup(false, "G2Affine::from_bytes_validated").unwrap_err();
    assert_eq!(err.context(), "G2Affine::from_bytes_validated");
}

#[test]
fn test_context_rewrite() {
    let res: Result<()> = validate::encoding(false, "inner", "bad flag");
    let err = res.with_context("Fp12::from_bytes").unwrap_err();
    assert_eq!(err.context(), "Fp12::from_bytes");
}
