//! Hygiene: production sources must not panic or swallow errors.
//!
//! Handlers run inside a page the user is working in. A panic kills every
//! handler on the page and a discarded error leaves no diagnostic, so the
//! budget for each pattern below is zero.

use std::fs;
use std::path::Path;

/// Pattern, label, and a line fragment that legitimately contains the pattern.
const FORBIDDEN: &[(&str, &str, Option<&str>)] = &[
    (".unwrap()", "unwrap", None),
    (".expect(", "expect", None),
    ("panic!(", "panic", None),
    ("unreachable!(", "unreachable", None),
    ("todo!(", "todo", None),
    ("unimplemented!(", "unimplemented", None),
    ("let _ =", "silent discard", None),
    // `gloo_net::http::Response::ok` is a status check, not `Result::ok`.
    (".ok()", "error to option", Some("resp.ok()")),
    ("#[allow(dead_code)]", "dead code allowance", None),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`; `*_test.rs` files are exempt.
fn production_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str, exempt: Option<&str>) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern) && !exempt.is_some_and(|allowed| line.contains(allowed)))
                .map(move |(idx, line)| format!("  {}:{}: {}", file.path, idx + 1, line.trim()))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = production_sources();
    assert!(files.iter().any(|f| f.path.ends_with("panel.rs")), "src/ scan found no panel.rs");
}

#[test]
fn status_check_exemption_does_not_hide_result_ok() {
    let files = [SourceFile { path: "x.rs".to_owned(), content: "if !resp.ok() {}\nlet v = parse().ok();".to_owned() }];
    let found = hits(&files, ".ok()", Some("resp.ok()"));
    assert_eq!(found.len(), 1);
    assert!(found[0].contains("parse().ok()"));
}

#[test]
fn forbidden_patterns_are_absent() {
    let files = production_sources();
    let report: Vec<String> = FORBIDDEN
        .iter()
        .filter_map(|(pattern, label, exempt)| {
            let found = hits(&files, pattern, *exempt);
            if found.is_empty() { None } else { Some(format!("{label} ({pattern}):\n{}", found.join("\n"))) }
        })
        .collect();
    assert!(report.is_empty(), "hygiene violations:\n{}", report.join("\n"));
}
