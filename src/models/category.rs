use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub(crate) enum Category {
    #[default]
    Groceries,
    Dining,
    Transport,
    Housing,
    Health,
    Entertainment,
    Utilities,
    Travel,
    Other,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Dining => "Dining",
            Self::Transport => "Transport",
            Self::Housing => "Housing",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive; anything unrecognized lands in `Other`.
    pub(crate) fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "groceries" | "grocery" => Self::Groceries,
            "dining" | "food" | "restaurants" => Self::Dining,
            "transport" | "transportation" => Self::Transport,
            "housing" | "rent" => Self::Housing,
            "health" => Self::Health,
            "entertainment" => Self::Entertainment,
            "utilities" => Self::Utilities,
            "travel" => Self::Travel,
            _ => Self::Other,
        }
    }

    /// Strict lookup used for user input where a typo should not silently
    /// become `Other`.
    pub(crate) fn from_name(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == lower)
    }

    /// Fixed enumeration order. The form selector and the breakdown follow it.
    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Groceries,
            Self::Dining,
            Self::Transport,
            Self::Housing,
            Self::Health,
            Self::Entertainment,
            Self::Utilities,
            Self::Travel,
            Self::Other,
        ]
    }

    pub(crate) fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        if idx == 0 {
            all[all.len() - 1]
        } else {
            all[idx - 1]
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}
