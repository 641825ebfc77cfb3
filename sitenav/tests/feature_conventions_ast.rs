use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree};

const SIDE_EFFECT_PATTERNS: [&str; 5] = [
    "Task::",
    "iced::Task",
    "tokio::",
    "std::fs::",
    "crate::app::",
];
const RUNTIME_TIME_PATTERNS: [&str; 3] =
    ["Instant::now", ".elapsed(", "thread::sleep"];

#[test]
fn given_features_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let features_dir = manifest_dir.join("src/features");
    let mut violations: Vec<String> = Vec::new();

    let entries = fs::read_dir(&features_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", features_dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        if path.is_dir() {
            validate_feature_dir(&path, &mut violations);
        }
    }

    assert!(
        violations.is_empty(),
        "feature convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_popup_machine_when_scanned_then_it_never_reads_the_clock() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let popup = manifest_dir.join("../sitenav-ui/nav/src/popup.rs");
    let source = read(&popup);

    for forbidden in RUNTIME_TIME_PATTERNS.iter().chain(["tokio::"].iter()) {
        assert!(
            !source.contains(forbidden),
            "{}: timers must be scheduled by the host, found {forbidden}",
            popup.display()
        );
    }
}

fn validate_feature_dir(dir: &Path, violations: &mut Vec<String>) {
    let mod_rs = dir.join("mod.rs");
    let mod_file = parse(&mod_rs);

    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod) if item_mod.content.is_none() => {
                declared_modules.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: inline module '{}' is forbidden",
                mod_rs.display(),
                item_mod.ident
            )),
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    let mut fs_modules = BTreeSet::new();
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        let stem = path
            .file_stem()
            .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
            .to_string_lossy()
            .to_string();
        if stem != "mod" {
            fs_modules.insert(stem);
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match file modules {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for required in ["event", "feature"] {
        if !fs_modules.contains(required) {
            violations.push(format!(
                "{}: feature is missing its {required}.rs module",
                dir.display()
            ));
        }
    }

    for module in &fs_modules {
        let file_path = dir.join(format!("{module}.rs"));
        validate_feature_file(module, &file_path, violations);
    }
}

fn validate_feature_file(
    module: &str,
    file_path: &Path,
    violations: &mut Vec<String>,
) {
    let source = read(file_path);
    let file = parse(file_path);
    let production = production_source(&source);

    for item in &file.items {
        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            }
        }
    }

    for forbidden in RUNTIME_TIME_PATTERNS {
        if production.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden runtime-time pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    // Only reducers and storage may reach the runtime.
    if matches!(module, "state" | "model" | "event" | "errors") {
        for forbidden in SIDE_EFFECT_PATTERNS {
            if production.contains(forbidden) {
                violations.push(format!(
                    "{}: forbidden side-effect pattern detected: {forbidden}",
                    file_path.display()
                ));
            }
        }
    }
}

fn production_source(source: &str) -> &str {
    source
        .find("#[cfg(test)]")
        .map_or(source, |index| &source[..index])
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}
