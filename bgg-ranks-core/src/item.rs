use serde::Serialize;

/// Rank value reported for items without a numeric rank.
pub const NOT_RANKED: &str = "Not Ranked";

/// Type code of base games.
pub const PRIMARY_TYPE_CODE: &str = "boardgame";

/// Type code of expansions.
pub const EXTENSION_TYPE_CODE: &str = "boardgameexpansion";

/// Output group an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A base game, ordered by rank.
    Primary,
    /// An expansion, ordered by rating.
    Extension,
}

impl Category {
    /// Map a declared type code to a category. Unknown codes yield `None`.
    pub fn from_type_code(code: &str) -> Option<Self> {
        match code {
            PRIMARY_TYPE_CODE => Some(Self::Primary),
            EXTENSION_TYPE_CODE => Some(Self::Extension),
            _ => None,
        }
    }
}

/// A normalized catalog record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    /// Publication year exactly as the source reported it (may be empty).
    pub year: String,
    pub rating: f64,
    /// Numeric rank as text, or a non-numeric marker such as [`NOT_RANKED`].
    pub rank: String,
    pub weight: f64,
    /// `"min-max"` player count, carried as display text.
    pub players: String,
    /// `"min-max"` play time in minutes, carried as display text.
    pub time: String,
    #[serde(skip)]
    pub category: Category,
}

impl Item {
    /// Numeric rank, if the rank text parses as an integer.
    pub fn numeric_rank(&self) -> Option<i64> {
        self.rank.trim().parse().ok()
    }

    /// Sort key for rank ordering: unparseable ranks sort after every number
    /// and tie with each other.
    pub fn rank_sort_key(&self) -> (bool, i64) {
        match self.numeric_rank() {
            Some(rank) => (false, rank),
            None => (true, 0),
        }
    }
}
