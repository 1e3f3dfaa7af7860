use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_format_content_canonical_form() {
    let formatted = format_content(
        Path::new("a.cn"),
        "Foo ( a = 1 , b ) [ Bar ]",
        &FormatConfig::default(),
    );
    assert_eq!(formatted.unwrap(), "Foo(a=1,b=true)[Bar]\n");
}

#[test]
fn test_format_content_rejects_malformed() {
    let error = format_content(Path::new("a.cn"), "Foo(a=1", &FormatConfig::default());
    assert!(matches!(error, Err(CommandError::Parse { line: 1, column: 4, .. })));
}

#[test]
fn test_format_content_is_stable() {
    let config = FormatConfig {
        max_width: 12,
        ..FormatConfig::pretty()
    };
    let once = format_content(Path::new("a.cn"), "Root[Alpha(x=1), Beta[Gamma]]", &config).unwrap();
    let twice = format_content(Path::new("a.cn"), &once, &config).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_render_diff() {
    let diff = render_diff(Path::new("a.cn"), "A\nB\nC\n", "A\nX\nC\n");
    assert_eq!(diff, "--- a.cn\n+++ a.cn\n@@ -1,3 +1,3 @@\n A\n-B\n+X\n C\n");
}

#[test]
fn test_parse_fmt_args() {
    let (options, paths) =
        parse_fmt_args(&args(&["--check", "--pretty", "--precision=3", "x.cn"])).unwrap();
    assert!(options.check);
    assert!(!options.diff);
    assert_eq!(options.format.layout, Layout::Pretty);
    assert_eq!(options.format.float_precision, Some(3));
    assert_eq!(paths, vec![PathBuf::from("x.cn")]);
}

#[test]
fn test_parse_fmt_args_defaults_to_current_dir() {
    let (options, paths) = parse_fmt_args(&[]).unwrap();
    assert_eq!(options, FmtOptions::default());
    assert_eq!(paths, vec![PathBuf::from(".")]);
}

#[test]
fn test_parse_fmt_args_rejects_unknown() {
    assert!(matches!(
        parse_fmt_args(&args(&["--bogus"])),
        Err(CommandError::Usage(_))
    ));
    assert!(matches!(
        parse_fmt_args(&args(&["--precision=x"])),
        Err(CommandError::Usage(_))
    ));
}
