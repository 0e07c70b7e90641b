/// The fixed expense categories the API accepts, in the order the server
/// enumerates them. Selection-only on the client; no further validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    FoodDrink,
    Transportation,
    Shopping,
    Bills,
    Health,
    Entertainment,
    Education,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodDrink => "Food & Drink",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive lookup, with a few short aliases for command input.
    /// Unknown labels are rejected rather than mapped to `Other`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food & drink" | "food and drink" | "food" => Some(Self::FoodDrink),
            "transportation" | "transport" => Some(Self::Transportation),
            "shopping" => Some(Self::Shopping),
            "bills" => Some(Self::Bills),
            "health" => Some(Self::Health),
            "entertainment" => Some(Self::Entertainment),
            "education" => Some(Self::Education),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::FoodDrink,
            Self::Transportation,
            Self::Shopping,
            Self::Bills,
            Self::Health,
            Self::Entertainment,
            Self::Education,
            Self::Other,
        ]
    }

    /// The category after `self` in enumeration order, wrapping around.
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
