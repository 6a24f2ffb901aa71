use chrono::Datelike;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::{PaymentMethod, RowDraft, TransactionRow};

/// Turn generated drafts into the final table: stable sort by date
/// (ties keep generation order), dense 1-based IDs, a random payment method
/// per row, date-derived week/month columns, then the row cap.
pub fn assemble(mut drafts: Vec<RowDraft>, row_cap: usize, rng: &mut impl Rng) -> Vec<TransactionRow> {
    drafts.sort_by_key(|draft| draft.date);

    let mut rows: Vec<TransactionRow> = drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            let payment_method = *PaymentMethod::ALL.choose(rng).unwrap();
            TransactionRow {
                id: index as u32 + 1,
                date: draft.date,
                category: draft.category_label().to_string(),
                kind: draft.kind,
                description: draft.description,
                amount: draft.amount,
                priority: draft.priority,
                payment_method,
                week: draft.date.iso_week().week(),
                month: draft.date.format("%Y-%m").to_string(),
            }
        })
        .collect();

    rows.truncate(row_cap);
    rows
}
