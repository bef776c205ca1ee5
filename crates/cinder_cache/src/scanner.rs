//! Textual scan for `#include` directives.
//!
//! This is a best-effort line scanner, not a preprocessor: conditional
//! compilation is ignored and every include directive in the text counts.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

/// Matches `#include "NAME"` and `#include <NAME>` with leading whitespace
/// tolerated; anything after the closing quote or bracket is ignored.
fn include_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\s*#include\s*["<]([^">]*)[">]"#).expect("include pattern compiles")
    })
}

/// Extracts the names referenced by include directives, in order of first
/// appearance.
///
/// Duplicates are kept; de-duplication is the dependency cache's concern.
pub fn scan_includes(text: &str) -> Vec<String> {
    let re = include_re();
    text.lines()
        .filter_map(|line| re.captures(line))
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Scans `text` for includes and keeps only names that resolve to an existing
/// file directly inside `build_path`.
///
/// System and library includes that do not resolve locally are silently
/// dropped; they are outside the build directory and cannot trigger a
/// rebuild decision.
pub fn scan_local_deps(text: &str, build_path: &Path) -> Vec<String> {
    scan_includes(text)
        .into_iter()
        .filter(|name| build_path.join(name).is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_include() {
        assert_eq!(scan_includes("#include \"util.h\""), vec!["util.h"]);
    }

    #[test]
    fn angle_include() {
        assert_eq!(scan_includes("#include <stdio.h>"), vec!["stdio.h"]);
    }

    #[test]
    fn leading_whitespace_tolerated() {
        assert_eq!(scan_includes("   \t#include \"a.h\""), vec!["a.h"]);
    }

    #[test]
    fn trailing_content_ignored() {
        assert_eq!(
            scan_includes("#include \"a.h\" /* runtime glue */"),
            vec!["a.h"]
        );
    }

    #[test]
    fn spacing_variants() {
        assert_eq!(scan_includes("#include\"a.h\""), vec!["a.h"]);
        assert_eq!(scan_includes("#include   <b.h>"), vec!["b.h"]);
    }

    #[test]
    fn non_include_lines_skipped() {
        let src = "int x;\n// #in\n#define INCLUDE 1\nreturn include;\n";
        assert!(scan_includes(src).is_empty());
    }

    #[test]
    fn order_of_first_appearance() {
        let src = "#include \"b.h\"\nint x;\n#include \"a.h\"\n";
        assert_eq!(scan_includes(src), vec!["b.h", "a.h"]);
    }

    #[test]
    fn duplicates_kept() {
        let src = "#include \"a.h\"\n#include \"a.h\"\n";
        assert_eq!(scan_includes(src), vec!["a.h", "a.h"]);
    }

    #[test]
    fn local_filter_drops_unresolved() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("util.h"), "").unwrap();

        let src = "#include \"util.h\"\n#include <stdio.h>\n#include \"missing.h\"\n";
        assert_eq!(scan_local_deps(src, dir.path()), vec!["util.h"]);
    }

    #[test]
    fn local_filter_keeps_angle_includes_that_resolve() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("generated.h"), "").unwrap();

        let src = "#include <generated.h>\n";
        assert_eq!(scan_local_deps(src, dir.path()), vec!["generated.h"]);
    }
}
