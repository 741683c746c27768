//! Parser configuration.

/// Nesting limit used when no other is configured.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Highest nesting limit the parser accepts. The parser recurses once per
/// container, so larger limits are clamped to keep deep input inside a
/// 2 MiB thread stack.
pub const MAX_SUPPORTED_DEPTH: usize = 512;

/// Knobs for a single parse.
///
/// ```
/// use rdjson_core::{parse_with_options, ParseOptions, MAX_SUPPORTED_DEPTH};
///
/// let options = ParseOptions::default().with_max_depth(2);
/// assert!(parse_with_options("[[1]]", &options).is_ok());
/// assert!(parse_with_options("[[[1]]]", &options).is_err());
///
/// let clamped = ParseOptions::default().with_max_depth(usize::MAX);
/// assert_eq!(clamped.max_depth(), MAX_SUPPORTED_DEPTH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    max_depth: usize,
}

impl ParseOptions {
    /// Deepest allowed container nesting, clamped to [`MAX_SUPPORTED_DEPTH`].
    /// The root container is depth 1.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_SUPPORTED_DEPTH);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
