//! Filecheck directive matching using the filecheck crate.

use filecheck::{Checker, CheckerBuilder, NO_VARIABLES};

/// Build a filechecker from text containing directives (`check:`, `nextln:`, ...).
///
/// Blank lines are skipped; every other line must be a directive.
pub fn build_filechecker(directives: &str) -> Result<Checker, String> {
    let mut builder = CheckerBuilder::new();

    for line in directives.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let is_directive = builder
            .directive(trimmed)
            .map_err(|e| format!("Failed to parse filecheck directive '{}': {}", trimmed, e))?;
        if !is_directive {
            return Err(format!("Not a filecheck directive: '{}'", trimmed));
        }
    }

    Ok(builder.finish())
}

/// Match actual output against filecheck directives.
pub fn match_filecheck(actual: &str, directives: &str) -> Result<(), String> {
    let checker = build_filechecker(directives)?;

    if checker
        .check(actual, NO_VARIABLES)
        .map_err(|e| format!("Filecheck error: {}", e))?
    {
        Ok(())
    } else {
        // Get explanation for why matching failed
        let (_, explain) = checker
            .explain(actual, NO_VARIABLES)
            .map_err(|e| format!("Failed to get filecheck explanation: {}", e))?;

        Err(format!("Filecheck failed:\n{}", explain))
    }
}
