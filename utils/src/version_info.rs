//! Version information populated at build time by `build.rs`.
//!
//! Display format for a running service:
//! - Local/Test: `main:{commit}`
//! - Prod: `stable:{version}`

/// Environment the service was started in, as far as version reporting cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Local,
    Test,
    Prod,
}

/// Build date in RFC3339 format.
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Short git commit hash, or `unknown` outside a git checkout.
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Git branch name, or `unknown` outside a git checkout.
pub fn build_branch() -> &'static str {
    env!("BUILD_BRANCH")
}

pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Format the version string reported for `env`.
pub fn format_version_for_runtime_env(env: RuntimeEnv) -> String {
    match env {
        RuntimeEnv::Local | RuntimeEnv::Test => format!("main:{}", build_commit()),
        RuntimeEnv::Prod => format!("stable:{}", build_version()),
    }
}
