use super::*;
use pretty_assertions::assert_eq;

#[test]
fn error_construction() {
    let err = EscapeError::trailing_backslash(7);
    assert_eq!(err, EscapeError::MalformedEscape { offset: 7 });
    assert_eq!(err.offset(), 7);
}

#[test]
fn error_message_names_offset() {
    let err = EscapeError::trailing_backslash(3);
    assert_eq!(
        err.to_string(),
        "invalid escape sequence: trailing backslash at byte 3"
    );
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&EscapeError::trailing_backslash(0));
}
