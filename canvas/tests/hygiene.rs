//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the canvas crate source tree for antipatterns. Render code
//! runs inside a browser event handler, so a panic takes the whole page down
//! and a swallowed `JsValue` error hides a blank canvas. Each pattern has a
//! budget (ideally zero); the budget never grows.

use std::fs;
use std::path::Path;

struct Budget {
    label: &'static str,
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    // Panics: these crash the page.
    Budget { label: ".unwrap()", pattern: ".unwrap()", max: 0 },
    Budget { label: ".expect()", pattern: ".expect(", max: 0 },
    Budget { label: "panic!()", pattern: "panic!(", max: 0 },
    Budget { label: "unreachable!()", pattern: "unreachable!(", max: 0 },
    Budget { label: "todo!()", pattern: "todo!(", max: 0 },
    Budget { label: "unimplemented!()", pattern: "unimplemented!(", max: 0 },
    // Silent loss: discards errors without inspecting.
    Budget { label: "let _ =", pattern: "let _ =", max: 0 },
    Budget { label: ".ok()", pattern: ".ok()", max: 0 },
    // Style / structure.
    Budget { label: "#[allow(dead_code)]", pattern: "#[allow(dead_code)]", max: 0 },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `canvas/src/`, excluding test files.
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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path.extension().is_some_and(|e| e == "rs") && !path_str.ends_with("_test.rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn source_tree_is_scanned() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("render.rs")), "render.rs not found under src/");
}

#[test]
fn budgets_are_respected() {
    let files = source_files();
    let mut report = Vec::new();
    for budget in BUDGETS {
        let hits = hits_for(&files, budget.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            report.push(format!("{} budget exceeded: found {count}, max {}", budget.label, budget.max));
            report.extend(hits.iter().map(|(path, c)| format!("  {path}: {c}")));
        }
    }
    assert!(report.is_empty(), "{}", report.join("\n"));
}

#[test]
fn only_render_touches_the_2d_context_draw_calls() {
    let files = source_files();
    let offenders: Vec<&str> = files
        .iter()
        .filter(|f| !f.path.ends_with("render.rs") && f.content.contains(".stroke()"))
        .map(|f| f.path.as_str())
        .collect();
    assert!(offenders.is_empty(), "draw calls outside render.rs: {offenders:?}");
}
