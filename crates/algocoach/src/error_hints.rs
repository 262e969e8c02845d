use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<&'static str> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out = Vec::new();

    if haystack.contains("no such file or directory") || haystack.contains("cannot find the") {
        out.push("Verify the input path exists and is readable.");
    }

    if haystack.contains("failed to parse settings toml") {
        out.push("Check the settings file against the `[catalog]` / `[output]` layout.");
    }

    if haystack.contains("invalid pattern catalog") {
        out.push("Every pattern needs a unique name and at least one single-word indicator token.");
    }

    if haystack.contains("failed to load settings") && haystack.contains("failed to read") {
        out.push("Unset ALGOCOACH_CONFIG or pass --config with an existing file.");
    }

    out
}
