use super::*;

#[test]
fn can_format_front_errors() {
    assert_eq!(FrontError::InvalidInput("odd".to_string()).to_string(), "invalid input: odd");
    assert_eq!(FrontError::EmptyInput("no points".to_string()).to_string(), "empty input: no points");
    assert_eq!(FrontError::NumericError("nan".to_string()).to_string(), "numeric error: nan");
}

#[test]
fn can_convert_io_error() {
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "cannot find file");

    assert_eq!(FrontError::from(err), FrontError::Io("cannot find file".to_string()));
}

#[test]
fn can_convert_front_error_into_generic() {
    let err: GenericError = FrontError::EmptyInput("no points to rank".to_string()).into();

    assert_eq!(err, GenericError::Front(FrontError::EmptyInput("no points to rank".to_string())));
    assert_eq!(err.to_string(), "empty input: no points to rank");
}

#[test]
fn can_convert_io_error_into_generic() {
    let err: GenericError = std::io::Error::other("disk is full").into();

    assert_eq!(err, GenericError::Front(FrontError::Io("disk is full".to_string())));
    assert_eq!(err.to_string(), "io error: disk is full");
}

#[test]
fn can_join_many_errors() {
    let errs = vec![
        GenericError::from("first"),
        GenericError::from("second".to_string()),
        GenericError::from(FrontError::NumericError("nan".to_string())),
    ];

    assert_eq!(GenericError::join_many(&errs, "\n"), "first\nsecond\nnumeric error: nan");
}
