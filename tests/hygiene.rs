//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's production sources for antipatterns that have no place
//! in an enhancement layer that must never break a page. Each pattern has a
//! budget (zero). If you must add a hit, you have to fix an existing one
//! first; the budget never grows.

use std::fs;
use std::path::Path;

/// Patterns checked against every production source line, with their budget.
const BUDGETS: &[(&str, usize)] = &[
    // Panics take down the whole WASM module.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss: browser call results are inspected, not discarded.
    ("let _ =", 0),
    (".ok()", 0),
    // Structure.
    ("#[allow(dead_code)]", 0),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding the sibling
/// `*_test.rs` modules.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");
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

#[test]
fn source_budgets() {
    let files = source_files();
    let mut report = String::new();

    for (needle, budget) in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .filter_map(|file| {
                let count = file
                    .content
                    .lines()
                    .filter(|line| line.contains(needle))
                    .count();
                (count > 0).then(|| (file.path.clone(), count))
            })
            .collect();
        let total: usize = hits.iter().map(|(_, c)| c).sum();

        if total > *budget {
            report.push_str(&format!(
                "`{needle}` budget exceeded: found {total}, max {budget}\n"
            ));
            for (path, count) in hits {
                report.push_str(&format!("  {path}: {count}\n"));
            }
        }
    }

    assert!(report.is_empty(), "\n{report}");
}
