#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Entry points and module wiring carry no logic of their own
    fn is_wiring(relative: &str) -> bool {
        let name = relative.rsplit('/').next().unwrap_or(relative);
        matches!(name, "main.rs" | "lib.rs" | "mod.rs")
    }

    fn source_files(dir: &Path, base: &Path) -> io::Result<BTreeSet<String>> {
        let mut files = BTreeSet::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                files.extend(source_files(&path, base)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path.strip_prefix(base).map_err(io::Error::other)?;
                files.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(files)
    }

    fn mirrored_pair() -> (BTreeSet<String>, BTreeSet<String>) {
        let src = source_files(Path::new(SRC_DIR), Path::new(SRC_DIR))
            .unwrap_or_else(|error| unreachable!("Failed to read src directory: {error}"));
        let unit = source_files(Path::new(UNIT_DIR), Path::new(UNIT_DIR)).unwrap_or_default();
        (src, unit)
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let (src, unit) = mirrored_pair();

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_wiring(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let (src, unit) = mirrored_pair();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !is_wiring(path) && !src.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let files = source_files(Path::new(TESTS_DIR), Path::new(TESTS_DIR))
            .unwrap_or_else(|error| unreachable!("Failed to scan tests directory: {error}"));

        let mut without_tests = Vec::new();
        for relative in files.iter().filter(|path| !is_wiring(path)) {
            let content = fs::read_to_string(Path::new(TESTS_DIR).join(relative))
                .unwrap_or_default();
            if !content.contains("#[test]") {
                without_tests.push(format!("  - tests/{relative}"));
            }
        }

        assert!(
            without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            without_tests.join("\n")
        );
    }
}
