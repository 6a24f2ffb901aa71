use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::{Category, Cents, PaymentMethod, Priority, RowKind, units};

/// A generated transaction before the table-wide columns (ID, payment
/// method, week, month) are assigned.
#[derive(Debug, Clone)]
pub struct RowDraft {
    pub date: NaiveDate,
    /// `None` marks the monthly income row.
    pub category: Option<Category>,
    pub kind: RowKind,
    pub description: String,
    pub amount: Cents,
    pub priority: Option<Priority>,
}

impl RowDraft {
    pub fn income(date: NaiveDate, amount: Cents) -> Self {
        Self {
            date,
            category: None,
            kind: RowKind::Income,
            description: "Salary + Extras".to_string(),
            amount,
            priority: None,
        }
    }

    pub fn expense(date: NaiveDate, category: Category, description: String, amount: Cents) -> Self {
        Self {
            date,
            category: Some(category),
            kind: RowKind::Expense,
            description,
            amount,
            priority: Some(category.priority()),
        }
    }

    /// Text written to the Category column ("Income" for income rows).
    pub fn category_label(&self) -> &'static str {
        match self.category {
            Some(category) => category.as_str(),
            None => "Income",
        }
    }
}

/// A finalized row of the exported table. Field order is the export column
/// order; serde names are the exported header names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Type")]
    pub kind: RowKind,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount", serialize_with = "serialize_amount")]
    pub amount: Cents,
    #[serde(rename = "Priority")]
    pub priority: Option<Priority>,
    #[serde(rename = "PaymentMethod")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "Week")]
    pub week: u32,
    #[serde(rename = "Month")]
    pub month: String,
}

impl TransactionRow {
    /// Amount in currency units, for numeric spreadsheet cells.
    pub fn amount_units(&self) -> f64 {
        units(self.amount)
    }
}

/// Amounts are stored as cents but exported in currency units.
fn serialize_amount<S: Serializer>(cents: &Cents, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(units(*cents))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_income_draft() {
        let draft = RowDraft::income(date("2025-03-01"), 169012);
        assert_eq!(draft.kind, RowKind::Income);
        assert_eq!(draft.category_label(), "Income");
        assert_eq!(draft.description, "Salary + Extras");
        assert!(draft.priority.is_none());
    }

    #[test]
    fn test_expense_draft_carries_category_priority() {
        let draft = RowDraft::expense(
            date("2025-03-14"),
            Category::Leisure,
            "Cinema".to_string(),
            2350,
        );
        assert_eq!(draft.kind, RowKind::Expense);
        assert_eq!(draft.category_label(), "Leisure");
        assert_eq!(draft.priority, Some(Priority::Want));
    }
}
