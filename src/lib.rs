//! Workspace root package.
//!
//! Exists to anchor repository-wide tooling (cargo-husky git hooks). All
//! functionality lives in `crates/*`.
