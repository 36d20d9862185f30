//! View filter modes

use std::str::FromStr;

/// Filter modes determine which entries are shown and in what order,
/// before the search text is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every entry, insertion order (newest inserted first)
    #[default]
    All,
    /// Only bookmarked entries
    Bookmarked,
    /// Every entry, sorted newest-first by date
    Newest,
}

impl FilterMode {
    /// All modes, in the order the UI cycles through them
    pub const ALL_MODES: [FilterMode; 3] =
        [FilterMode::All, FilterMode::Bookmarked, FilterMode::Newest];

    /// The next mode in the cycle; any mode may follow any mode
    pub fn next(self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::Bookmarked,
            FilterMode::Bookmarked => FilterMode::Newest,
            FilterMode::Newest => FilterMode::All,
        }
    }

    /// Short label for the header
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Bookmarked => "Bookmarked",
            FilterMode::Newest => "Newest",
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "bookmarked" => Ok(FilterMode::Bookmarked),
            "newest" => Ok(FilterMode::Newest),
            _ => Err(format!(
                "Invalid filter: '{}'. Valid filters are: all, bookmarked, newest",
                s
            )),
        }
    }
}
