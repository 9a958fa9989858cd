use crate::domain::model::TestCase;
use regex::Regex;
use std::sync::LazyLock;

/// Field labels in the order they appear in a row. `pyret` must precede
/// `pyretast`; the trailing `:` keeps the two apart.
pub const MARKERS: [&str; 9] = [
    "expr",
    "local",
    "server",
    "firstdifference",
    "reason",
    "desugar",
    "bytecode",
    "pyret",
    "pyretast",
];

static MARKER_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = MARKERS.join("|");
    Regex::new(&format!(r"(?:, )?(?:{}): ?", alternatives)).expect("marker pattern is valid")
});

/// Splits one row of feed text into a [`TestCase`].
///
/// Text before the first marker is dropped. Fields whose markers are missing
/// come back empty, and markers past the ninth chunk are ignored. Marker text
/// appearing inside a field value also starts a new field.
pub fn parse_row(raw: &str) -> TestCase {
    let chunks: Vec<&str> = MARKER_SPLIT.split(raw).skip(1).take(MARKERS.len()).collect();
    let field = |i: usize| chunks.get(i).copied().unwrap_or_default().to_string();

    TestCase {
        expr: field(0).trim_start().to_string(),
        local: field(1),
        server: field(2),
        difference: field(3),
        reason: field(4),
        desugar: field(5),
        bytecode: field(6),
        pyret_src: field(7),
        pyret_ast: field(8),
    }
}
