//! Language tags inferred from file extensions.

use std::path::Path;

/// Tag used when nothing better is known.
pub const FALLBACK_LANGUAGE: &str = "plaintext";

const EXTENSIONS: &[(&str, &str)] = &[
    ("c", "c"),
    ("cc", "cpp"),
    ("cpp", "cpp"),
    ("cs", "csharp"),
    ("cxx", "cpp"),
    ("go", "go"),
    ("h", "c"),
    ("hpp", "cpp"),
    ("java", "java"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("kt", "kotlin"),
    ("mjs", "javascript"),
    ("php", "php"),
    ("py", "python"),
    ("rb", "ruby"),
    ("rs", "rust"),
    ("scala", "scala"),
    ("swift", "swift"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
];

/// Language tag for `path`'s extension, if it is a known one.
pub fn infer_language(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    EXTENSIONS
        .binary_search_by(|(known, _)| known.cmp(&ext.as_str()))
        .ok()
        .map(|idx| EXTENSIONS[idx].1)
}
