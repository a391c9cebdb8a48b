use std::fs;

use pretty_assertions::assert_eq;
use scalex_diagnostic::emitter::ColorMode;

use super::*;

fn quiet() -> LexConfig {
    LexConfig {
        color: ColorMode::Never,
        ..LexConfig::default()
    }
}

fn run(command: Command, config: LexConfig) -> (Result<Status, CliError>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = dispatch(&Invocation { command, config }, &mut out, &mut err);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

// === Status ===

#[test]
fn status_codes() {
    assert_eq!(Status::Success.code(), 0);
    assert_eq!(Status::LexicalErrors.code(), 1);
    assert_eq!(Status::from_error_count(0), Status::Success);
    assert_eq!(Status::from_error_count(3), Status::LexicalErrors);
}

// === Help and version ===

#[test]
fn help_prints_usage() {
    let (result, out, err) = run(Command::Help, quiet());
    assert_eq!(result.unwrap(), Status::Success);
    assert_eq!(out, USAGE);
    assert!(err.is_empty());
}

#[test]
fn version_prints_package_version() {
    let (_, out, _) = run(Command::Version, quiet());
    assert_eq!(out, format!("scalex {}\n", env!("CARGO_PKG_VERSION")));
}

// === File handling ===

#[test]
fn read_file_reports_path() {
    let err = read_file(Path::new("/definitely/not/here.scx")).unwrap_err();
    assert!(matches!(err, CliError::ReadFile { .. }));
    assert!(err.to_string().contains("/definitely/not/here.scx"));
}

#[test]
fn map_files_keeps_input_order() {
    let paths: Vec<PathBuf> = (0..16).map(|i| PathBuf::from(format!("f{i}"))).collect();
    for parallel in [true, false] {
        let names = map_files(&paths, parallel, |p| Ok(p.display().to_string())).unwrap();
        let expected: Vec<String> = (0..16).map(|i| format!("f{i}")).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn map_files_propagates_errors() {
    let paths = vec![PathBuf::from("ok"), PathBuf::from("bad")];
    let result = map_files(&paths, true, |p| {
        if p == Path::new("bad") {
            Err(CliError::MissingArgument("test"))
        } else {
            Ok(())
        }
    });
    assert!(matches!(result, Err(CliError::MissingArgument("test"))));
}

#[test]
fn missing_file_is_an_error_not_a_status() {
    let (result, out, _) = run(
        Command::Check(vec![PathBuf::from("/definitely/not/here.scx")]),
        quiet(),
    );
    assert!(matches!(result, Err(CliError::ReadFile { .. })));
    assert!(out.is_empty());
}

// === Check ===

#[test]
fn check_clean_and_dirty_files() {
    let dir = tempfile::tempdir().unwrap();
    let clean = dir.path().join("clean.scx");
    let dirty = dir.path().join("dirty.scx");
    fs::write(&clean, "object A { val x = 1 }\n").unwrap();
    fs::write(&dirty, "val y = 2;\n/* open").unwrap();

    let (result, out, err) = run(Command::Check(vec![clean.clone()]), quiet());
    assert_eq!(result.unwrap(), Status::Success);
    assert!(out.is_empty());
    assert!(err.is_empty());

    let (result, _, err) = run(Command::Check(vec![clean, dirty]), quiet());
    assert_eq!(result.unwrap(), Status::LexicalErrors);
    assert!(err.contains("error[E0002]: unrecognized character `;`"), "{err}");
    assert!(err.contains("dirty.scx:1:10"), "{err}");
    assert!(err.contains("error[E0001]: unterminated block comment"), "{err}");
    assert!(err.contains("dirty.scx:2:1"), "{err}");
    assert!(err.contains("\n |        - input ends here\n"), "{err}");
    assert!(err.ends_with("error: found 2 lexical errors\n"), "{err}");
    assert!(!err.contains("\x1b["));
}

#[test]
fn check_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.scx");
    fs::write(&path, "x ! y").unwrap();

    let config = LexConfig {
        format: crate::config::OutputFormat::Json,
        ..quiet()
    };
    let (result, out, err) = run(Command::Check(vec![path]), config);
    assert_eq!(result.unwrap(), Status::LexicalErrors);
    assert!(err.is_empty());
    assert!(out.starts_with("[\n  {\n    \"file\": "), "{out}");
    assert!(out.contains("\"errors\": 1,"), "{out}");
    assert!(out.contains("\"code\": \"E0002\""), "{out}");
    assert!(out.contains("\"line\": 1,"), "{out}");
    assert!(out.contains("\"column\": 3,"), "{out}");
    assert!(out.ends_with("\n]\n"), "{out}");
}

// === Keywords and explain ===

#[test]
fn keywords_text_lists_every_keyword() {
    let (result, out, _) = run(Command::Keywords, quiet());
    assert_eq!(result.unwrap(), Status::Success);
    assert_eq!(out.lines().count(), scalex_lexer::keywords::keywords().count());
    assert!(out.lines().any(|l| l.split_whitespace().eq(["class", "Class"])));
    assert!(out.lines().any(|l| l.split_whitespace().eq(["with", "With"])));
}

#[test]
fn keywords_json() {
    let config = LexConfig {
        format: crate::config::OutputFormat::Json,
        ..quiet()
    };
    let (_, out, _) = run(Command::Keywords, config);
    assert!(out.starts_with("[\n"));
    assert!(out.contains("{\"keyword\": \"yield\", \"kind\": \"Yield\"}"));
}

#[test]
fn explain_known_and_unknown_codes() {
    let (result, out, _) = run(Command::Explain("e0002".to_owned()), quiet());
    assert_eq!(result.unwrap(), Status::Success);
    assert!(out.starts_with("# E0002"));

    let (result, _, _) = run(Command::Explain("E1234".to_owned()), quiet());
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "unknown error code `E1234`");
    assert!(!err.is_usage());
}
