use std::cmp::Ordering;

/// The fixed set of categories a transaction or budget line can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) enum Category {
    Food,
    Rent,
    Salary,
    Entertainment,
    Utilities,
    Travel,
    #[default]
    Other,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Salary => "Salary",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }

    /// Unknown names fall back to `Other`.
    pub(crate) fn parse(s: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .unwrap_or_default()
    }

    /// Categories in form order.
    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Rent,
            Self::Salary,
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
        all[(idx + all.len() - 1) % all.len()]
    }
}

// Ordered by name so sorted views read alphabetically.
impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
