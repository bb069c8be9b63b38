//! Hygiene: source-level rules for code that runs inside host pages
//!
//! The widget must never panic into, inject markup into, or restyle the page
//! that embeds it. These tests scan `src/` (excluding `*_test.rs`) for the
//! patterns that would. Each pattern has a budget; adding an occurrence
//! means removing another first.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const PANIC_BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics abort the widget" },
    Budget { pattern: ".expect(", max: 0, why: "panics abort the widget" },
    Budget { pattern: "panic!(", max: 0, why: "panics abort the widget" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics abort the widget" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished code" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished code" },
];

const DISCARD_BUDGETS: &[Budget] = &[
    // Native transport stub.
    Budget { pattern: "let _ =", max: 1, why: "discards a value without inspecting it" },
    // localStorage/querySelector lookups and `Response::ok()`.
    Budget { pattern: ".ok()", max: 4, why: "drops an error without logging it" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" },
];

const HOST_PAGE_BUDGETS: &[Budget] = &[
    Budget { pattern: "inner_html", max: 0, why: "reply text must never become raw markup" },
    Budget { pattern: "set_inner_html", max: 0, why: "reply text must never become raw markup" },
    Budget { pattern: " class=", max: 0, why: "host stylesheets could target widget classes" },
    Budget { pattern: " id=", max: 0, why: "widget ids could collide with host ids" },
];

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_source = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_source || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    let mut failures = Vec::new();

    for budget in budgets {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|f| (f.path.display().to_string(), f.content.lines().filter(|l| l.contains(budget.pattern)).count()))
            .filter(|(_, n)| *n > 0)
            .collect();
        let found: usize = hits.iter().map(|(_, n)| n).sum();
        if found > budget.max {
            let listing = hits.iter().map(|(p, n)| format!("  {p}: {n}")).collect::<Vec<_>>().join("\n");
            failures.push(format!(
                "`{}` budget exceeded ({}): found {found}, max {}\n{listing}",
                budget.pattern, budget.why, budget.max
            ));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}

#[test]
fn panic_budgets() {
    check(PANIC_BUDGETS);
}

#[test]
fn discard_budgets() {
    check(DISCARD_BUDGETS);
}

#[test]
fn host_page_budgets() {
    check(HOST_PAGE_BUDGETS);
}
