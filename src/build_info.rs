//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `pocket-arcade <date> (<commit>)`, as printed by `--version`.
pub fn version_line() -> String {
    format!("pocket-arcade {} ({})", BUILD_DATE, BUILD_COMMIT)
}
