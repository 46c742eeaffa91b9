use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Career track a quiz answer counts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "S")]
    Science,
    #[serde(rename = "T")]
    Technology,
    #[serde(rename = "M")]
    Mathematics,
}

impl Category {
    /// All categories in display order (S, T, M)
    pub const ALL: [Category; 3] = [Category::Science, Category::Technology, Category::Mathematics];

    /// Map a form selection index to a category.
    /// Index 0 is the "unanswered" placeholder; 1..=3 map to M, S, T.
    pub fn from_selection(index: u8) -> Option<Category> {
        match index {
            1 => Some(Category::Mathematics),
            2 => Some(Category::Science),
            3 => Some(Category::Technology),
            _ => None,
        }
    }

    /// Inverse of `from_selection`
    pub fn selection_index(self) -> u8 {
        match self {
            Category::Mathematics => 1,
            Category::Science => 2,
            Category::Technology => 3,
        }
    }

    /// Single-letter code (S, T, M)
    pub fn code(self) -> char {
        match self {
            Category::Science => 'S',
            Category::Technology => 'T',
            Category::Mathematics => 'M',
        }
    }

    /// Full name of the recommended field
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Science => "Biology & Life Sciences",
            Category::Technology => "Computer Science & Technology",
            Category::Mathematics => "Mathematics & Analytics",
        }
    }

    /// Short label used in score breakdowns
    pub fn short_name(self) -> &'static str {
        match self {
            Category::Science => "Biology",
            Category::Technology => "Technology",
            Category::Mathematics => "Mathematics",
        }
    }

    /// Static page describing this career track, relative to the site root
    pub fn destination_page(self) -> &'static str {
        match self {
            Category::Science => "pages/science.html",
            Category::Technology => "pages/tech_eng.html",
            Category::Mathematics => "pages/math.html",
        }
    }

    /// Destination page joined onto an optional site base URL.
    pub fn destination(self, base_url: Option<&str>) -> String {
        match base_url {
            Some(base) if !base.trim().is_empty() => {
                format!("{}/{}", base.trim().trim_end_matches('/'), self.destination_page())
            }
            _ => self.destination_page().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Category::Science),
            "T" => Ok(Category::Technology),
            "M" => Ok(Category::Mathematics),
            other => Err(format!("unknown category code '{}' (expected S, T or M)", other)),
        }
    }
}
