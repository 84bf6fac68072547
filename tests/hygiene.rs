//! Hygiene: enforces coding standards at test time.
//!
//! Scans the production sources under `src/` for patterns the crate does not
//! allow. Every budget is zero; sibling `*_test.rs` files are exempt.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Pattern, human label, applies to the binary entry point too.
const BUDGETS: &[(&str, &str, bool)] = &[
    // Panics.
    (".unwrap()", ".unwrap()", true),
    (".expect(", ".expect()", true),
    ("panic!(", "panic!()", true),
    ("unreachable!(", "unreachable!()", true),
    ("todo!(", "todo!()", true),
    ("unimplemented!(", "unimplemented!()", true),
    // Silent loss.
    ("let _ =", "let _ =", true),
    (".ok()", ".ok()", true),
    // Structure.
    ("#[allow(dead_code)]", "#[allow(dead_code)]", true),
    // The library reports through tracing; only the binary prints.
    ("println!(", "println!()", false),
    ("eprintln!(", "eprintln!()", false),
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn is_entry_point(path: &str) -> bool {
    Path::new(path).file_name().is_some_and(|n| n == "main.rs")
}

fn hits(files: &[SourceFile], pattern: &str, include_main: bool) -> Vec<(String, usize)> {
    files
        .iter()
        .filter(|file| include_main || !is_entry_point(&file.path))
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "hygiene scan found no sources under src/");
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn every_budget_is_zero() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, label, include_main) in BUDGETS {
        for (path, count) in hits(&files, pattern, *include_main) {
            report.push(format!("  {label}: {path}: {count}"));
        }
    }
    assert!(report.is_empty(), "hygiene budget exceeded:\n{}", report.join("\n"));
}

#[test]
fn locks_recover_from_poison() {
    let files = source_files();
    let mut offenders = Vec::new();
    for file in &files {
        let lines: Vec<&str> = file.content.lines().collect();
        for (n, line) in lines.iter().enumerate() {
            let locks = line.contains(".lock()") || line.contains(".read()") || line.contains(".write()");
            // Chained calls may put the recovery on the following line.
            let recovered = lines[n..lines.len().min(n + 2)].iter().any(|l| l.contains("PoisonError::into_inner"));
            if locks && !recovered {
                offenders.push(format!("  {}:{}", file.path, n + 1));
            }
        }
    }
    assert!(offenders.is_empty(), "lock acquired without poison recovery:\n{}", offenders.join("\n"));
}
