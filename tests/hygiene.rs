//! Hygiene: coding-standard budgets enforced at test time.
//!
//! Production sources under `src/` (test files excluded) are scanned for
//! patterns that crash the app or swallow errors. Non-zero budgets cover the
//! native stubs that discard their arguments outside the browser build and
//! the `Response::ok()` status checks. Budgets never grow.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
}

const PANICS: [Budget; 6] = [
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
];

const DISCARDS: [Budget; 2] = [Budget { pattern: "let _ =", max: 6 }, Budget { pattern: ".ok()", max: 4 }];

const STYLE: [Budget; 1] = [Budget { pattern: "#[allow(dead_code)]", max: 0 }];

fn source_files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");
    for budget in budgets {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|(path, content)| (path.clone(), content.lines().filter(|l| l.contains(budget.pattern)).count()))
            .filter(|(_, count)| *count > 0)
            .collect();
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        let detail: Vec<String> = hits.iter().map(|(path, c)| format!("  {path}: {c}")).collect();
        assert!(
            count <= budget.max,
            "`{}` budget exceeded: found {count}, max {}.\n{}",
            budget.pattern,
            budget.max,
            detail.join("\n")
        );
    }
}

#[test]
fn panic_budgets() {
    check(&PANICS);
}

#[test]
fn discard_budgets() {
    check(&DISCARDS);
}

#[test]
fn style_budgets() {
    check(&STYLE);
}
