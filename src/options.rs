//! Options accepted by [`crate::parse`].

use serde::{Deserialize, Serialize};

/// Parse options.
///
/// Deserializes from either `findRenames` or `find_renames`; unknown
/// fields are ignored and missing ones default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Run the rename detection pass after parsing.
    #[serde(alias = "find_renames")]
    pub find_renames: bool,
}

impl ParseOptions {
    /// Options with rename detection enabled.
    pub fn with_renames() -> Self {
        Self { find_renames: true }
    }
}
