//! Diff configuration.

/// The unit the diff engine aligns on.
///
/// Emitted lengths are always in characters regardless of granularity, so patches produced
/// with either setting are applied the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// Unicode scalar values (`char`).
    #[default]
    Char,
    /// Extended grapheme clusters. Edits never split a cluster such as `"e\u{301}"` or an emoji
    /// with a skin-tone modifier.
    Grapheme,
}

/// Options that control how a diff is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffOptions {
    /// Alignment unit.
    pub granularity: Granularity,
    /// Upper bound on the edit distance the search explores.
    ///
    /// When the texts (after trimming their common prefix and suffix) differ by more than this
    /// many units, the differing middle is replaced wholesale. The patch is still correct, just
    /// not minimal. `None` means unbounded.
    pub max_edit_cost: Option<usize>,
}

impl DiffOptions {
    /// Set the alignment unit.
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Cap the edit distance the search explores.
    pub fn with_max_edit_cost(mut self, max_edit_cost: usize) -> Self {
        self.max_edit_cost = Some(max_edit_cost);
        self
    }
}
