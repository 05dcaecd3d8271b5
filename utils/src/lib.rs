//! Shared utilities for the roster workspace.
//!
//! Currently this only carries build metadata, which the server reports in
//! its health headers and page footer.

pub mod version_info;
