use std::ops::RangeInclusive;

use serde::Serialize;

const FOOD_LABELS: &[&str] = &["Groceries", "Restaurant", "Snacks", "Coffee"];
const LEISURE_LABELS: &[&str] = &["Cinema", "Games", "Bar", "Concert"];
const OTHERS_LABELS: &[&str] = &["Clothes", "Gifts", "Phone"];

/// The fixed set of spending categories. Together their salary shares sum
/// to less than 1.0; the remainder is implicit savings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Food,
    Housing,
    Transport,
    Leisure,
    Others,
}

impl Category {
    /// All categories, in generation order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Housing,
        Category::Transport,
        Category::Leisure,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Housing => "Housing",
            Category::Transport => "Transport",
            Category::Leisure => "Leisure",
            Category::Others => "Others",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "food" => Some(Category::Food),
            "housing" => Some(Category::Housing),
            "transport" => Some(Category::Transport),
            "leisure" => Some(Category::Leisure),
            "others" => Some(Category::Others),
            _ => None,
        }
    }

    /// Fraction of the monthly salary nominally allocated to this category.
    pub fn share(&self) -> f64 {
        match self {
            Category::Food => 0.14,
            Category::Housing => 0.28,
            Category::Transport => 0.08,
            Category::Leisure => 0.18,
            Category::Others => 0.12,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Category::Food | Category::Housing | Category::Transport => Priority::Need,
            Category::Leisure | Category::Others => Priority::Want,
        }
    }

    /// How many transactions a month of this category splits into.
    /// Food is a daily-spend category and gets a wider range.
    pub fn monthly_tx_range(&self) -> RangeInclusive<usize> {
        match self {
            Category::Food => 5..=10,
            _ => 3..=6,
        }
    }

    /// Candidate specific descriptions and the chance a row gets one
    /// instead of the generic "<category> expense" text.
    pub fn label_pool(&self) -> Option<(f64, &'static [&'static str])> {
        match self {
            Category::Food => Some((0.25, FOOD_LABELS)),
            Category::Leisure => Some((0.30, LEISURE_LABELS)),
            Category::Others => Some((0.20, OTHERS_LABELS)),
            Category::Housing | Category::Transport => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static discretionary-vs-essential label carried onto each expense row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    Need,
    Want,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Need => "Need",
            Priority::Want => "Want",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment method, chosen uniformly at random per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentMethod {
    Card,
    Cash,
    Transfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::Cash,
        PaymentMethod::Transfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Transfer => "Transfer",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a row records money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowKind {
    Income,
    Expense,
}

impl RowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowKind::Income => "Income",
            RowKind::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for RowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
