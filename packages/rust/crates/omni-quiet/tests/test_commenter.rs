//! Tests for commenter module - line-level rewriting of console calls.

use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

use omni_quiet::{CommentError, LineCommenter};

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    File::create(&path)
        .expect("Create file")
        .write_all(content.as_bytes())
        .expect("Write content");
    path
}

#[test]
fn test_indentation_preserved() {
    let result = LineCommenter::comment_source("  foo.log(x);\n  console.log(x);");
    assert_eq!(result.modified, "  foo.log(x);\n  // console.log(x);");
}

#[test]
fn test_single_line_complete_call() {
    let result = LineCommenter::comment_source("console.log(\"hi\");");
    assert_eq!(result.modified, "// console.log(\"hi\");");
    assert!(result.changed());
}

#[test]
fn test_multiline_call_span() {
    let content = "function f(x) {\n  console.warn(\n    \"value:\", x\n  );\n  return x;\n}\n";
    let result = LineCommenter::comment_source(content);

    assert_eq!(
        result.modified,
        "function f(x) {\n  // console.warn(\n    // \"value:\", x\n  // );\n  return x;\n}\n"
    );
    assert_eq!(result.spans.len(), 1);
    assert_eq!(result.spans[0].start_line, 2);
    assert_eq!(result.spans[0].end_line, 4);
}

#[test]
fn test_all_recognized_methods() {
    let content = "console.log(1);\nconsole.error(2);\nconsole.warn(3);\nconsole.debug(4);\nconsole.info(5);";
    let result = LineCommenter::comment_source(content);

    assert_eq!(result.spans.len(), 5);
    assert!(result.modified.lines().all(|l| l.starts_with("// console.")));
}

#[test]
fn test_non_target_lines_untouched() {
    let content = "logger.custom(a);\nconsole.table(rows);\nconsole.trace();\nconst log = 1;";
    let result = LineCommenter::comment_source(content);

    assert_eq!(result.modified, content);
    assert!(!result.changed());
    assert!(result.spans.is_empty());
}

#[test]
fn test_already_commented_skipped() {
    let content = "    // console.log(x);\n\t//console.error(e)";
    let result = LineCommenter::comment_source(content);
    assert_eq!(result.modified, content);
}

#[test]
fn test_call_after_code_on_same_line() {
    let result = LineCommenter::comment_source("    if (err) console.error(err);");
    assert_eq!(result.modified, "    // if (err) console.error(err);");
}

#[test]
fn test_template_file() {
    let content = "<script setup lang=\"ts\">\nonMounted(() => {\n\tconsole.log(`mounted ${id}`)\n})\n</script>\n";
    let result = LineCommenter::comment_source(content);
    assert_eq!(
        result.modified,
        "<script setup lang=\"ts\">\nonMounted(() => {\n\t// console.log(`mounted ${id}`)\n})\n</script>\n"
    );
}

#[test]
fn test_idempotent_on_disk() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = write_file(
        &dir,
        "api.ts",
        "export async function load() {\n  console.info(\n    'loading'\n  );\n  console.log('done');\n}\n",
    );

    assert!(LineCommenter::process_file(&path));
    let first = std::fs::read_to_string(&path).expect("Read file");

    assert!(!LineCommenter::process_file(&path));
    let second = std::fs::read_to_string(&path).expect("Read file");

    assert_eq!(first, second);
    assert_eq!(
        first,
        "export async function load() {\n  // console.info(\n    // 'loading'\n  // );\n  // console.log('done');\n}\n"
    );
}

#[test]
fn test_unchanged_file_not_rewritten() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = write_file(&dir, "clean.ts", "export const a = 1;\n");
    let before = std::fs::metadata(&path)
        .expect("Read metadata")
        .modified()
        .expect("Read mtime");

    let outcome = LineCommenter::comment_file(&path).expect("Should process");
    assert!(!outcome.changed);

    let after = std::fs::metadata(&path)
        .expect("Read metadata")
        .modified()
        .expect("Read mtime");
    assert_eq!(before, after);
}

#[test]
fn test_invalid_utf8_reported_not_written() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = dir.path().join("latin1.ts");
    std::fs::write(&path, b"console.log('caf\xe9');\n").expect("Write bytes");

    let result = LineCommenter::comment_file(&path);
    assert!(matches!(result, Err(CommentError::Read { .. })));
    assert!(!LineCommenter::process_file(&path));

    let bytes = std::fs::read(&path).expect("Read bytes");
    assert_eq!(bytes, b"console.log('caf\xe9');\n");
}

#[test]
fn test_missing_file_reports_false() {
    assert!(!LineCommenter::process_file("/nonexistent/main.ts"));
}

#[test]
fn test_error_message_names_cause_only() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = dir.path().join("bad.ts");
    std::fs::write(&path, b"ok\xff\n").expect("Write bytes");

    let err = LineCommenter::comment_file(&path).expect_err("Should fail to decode");
    assert_eq!(err.to_string(), "Read error: UTF-8 decoding error at byte 2");
}

#[cfg(unix)]
#[test]
fn test_read_only_file_left_alone() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().expect("Create temp dir");
    let path = write_file(&dir, "locked.ts", "console.log(1);\n");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o444))
        .expect("Set permissions");

    // Privileged users bypass mode bits; nothing to check then.
    if std::fs::OpenOptions::new().write(true).open(&path).is_ok() {
        return;
    }

    assert!(matches!(
        LineCommenter::comment_file(&path),
        Err(CommentError::Write { .. })
    ));
    assert!(!LineCommenter::process_file(&path));
    let content = std::fs::read_to_string(&path).expect("Read file");
    assert_eq!(content, "console.log(1);\n");
}

#[cfg(unix)]
#[test]
fn test_hard_link_sees_rewrite() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = write_file(&dir, "a.ts", "console.log(1);\n");
    let linked = dir.path().join("b.ts");
    std::fs::hard_link(&path, &linked).expect("Create hard link");

    assert!(LineCommenter::process_file(&path));

    let content = std::fs::read_to_string(&linked).expect("Read link");
    assert_eq!(content, "// console.log(1);\n");
}
