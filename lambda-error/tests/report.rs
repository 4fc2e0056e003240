use ariadne::Source;
use lambda_attrs::ErrorKind;
use lambda_error::{Error, ErrorKind as _};
use pretty_assertions::assert_eq;

#[derive(Debug, ErrorKind)]
#[error(
    code = 7,
    message = format!("`{}` could not be bent", self.name),
    labels = ["this bolt", "and this nut"],
    help = "try a bigger wrench",
)]
struct Stuck {
    name: String,
}

#[derive(Debug, ErrorKind)]
#[error(code = 8, message = "nothing to see")]
struct Quiet;

/// Renders the report of the given error without colors.
fn render(err: &Error, src: &str) -> String {
    let mut buf = Vec::new();
    err.build_report("input")
        .write(("input", Source::from(src)), &mut buf)
        .unwrap();
    strip_ansi_escapes::strip_str(String::from_utf8(buf).unwrap())
}

#[test]
fn derived_metadata() {
    let kind = Stuck { name: "bolt".to_string() };
    assert_eq!(kind.code(), 7);
    assert_eq!(kind.message(), "`bolt` could not be bent");
}

#[test]
fn report_contains_labels_and_help() {
    let err = Error::new(vec![0..4, 7..10], Stuck { name: "bolt".to_string() });
    let rendered = render(&err, "bolt + nut");

    assert!(rendered.contains("`bolt` could not be bent"));
    assert!(rendered.contains("this bolt"));
    assert!(rendered.contains("and this nut"));
    assert!(rendered.contains("try a bigger wrench"));
}

#[test]
fn spanless_error_still_renders() {
    let err = Error::from(Quiet);
    assert!(err.spans.is_empty());

    let rendered = render(&err, "1 + 1");
    assert!(rendered.contains("nothing to see"));
}

#[test]
fn attach_and_shift_spans() {
    let err = Error::from(Quiet).or_span(2..5).or_span(0..1);
    assert_eq!(err.spans, vec![2..5]);

    let err = err.offset(3);
    assert_eq!(err.spans, vec![5..8]);
}

#[test]
fn inspect_kind() {
    let err = Error::from(Stuck { name: "nut".to_string() });
    assert!(err.is::<Stuck>());
    assert!(!err.is::<Quiet>());
    assert_eq!(err.downcast_ref::<Stuck>().map(|k| k.name.as_str()), Some("nut"));
    assert_eq!(err.code(), 7);
    assert_eq!(err.to_string(), "error 7: `nut` could not be bent");
}
