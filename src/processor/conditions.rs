//! Maps source-level selector vocabulary onto target selectors inside the
//! conditions of an `execute` statement.
//!
//! Plain substring replacement, applied in table order. New vocabulary goes
//! into `REWRITES`; nothing else needs to change.

const REWRITES: &[(&str, &str)] = &[
    ("Player.all", "@a"),
    // qualifier is implied by the target's default execution context
    (" at current", ""),
];

pub fn rewrite_conditions(raw: &str) -> String {
    REWRITES
        .iter()
        .fold(raw.to_string(), |acc, (from, to)| acc.replace(from, to))
}
