use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::domain::{
    Category, RowDraft, SpendingProfile, TransactionRow, assemble, cents_from_amount,
    seasonal_factor,
};

use super::sampler::split_budget;

/// Bounds of the per-(month, category) budget drift multiplier.
const BUDGET_DRIFT_LOW: f64 = 0.84;
const BUDGET_DRIFT_HIGH: f64 = 1.12;

/// Variable part of the monthly income, on top of the fixed salary.
const EXTRA_INCOME_MEAN: f64 = 90.0;
const EXTRA_INCOME_SD: f64 = 70.0;

/// Expense dates are drawn from days 1..=28; months are flattened so no
/// row ever lands on day 29-31.
const DAYS_PER_MONTH: u32 = 28;

/// Generates one fiscal year of synthetic transactions.
///
/// Holds two independent generators, both seeded from the profile: `general`
/// drives counts, labels, dates and payment methods; `numeric` drives the
/// statistical draws (income extras, budget drift, amount samples). Draw
/// order is fixed, so a given seed always yields the same table.
pub struct LedgerGenerator {
    profile: SpendingProfile,
    general: StdRng,
    numeric: StdRng,
}

impl LedgerGenerator {
    pub fn new(profile: SpendingProfile) -> Self {
        let seed = profile.seed;
        Self {
            profile,
            general: StdRng::seed_from_u64(seed),
            numeric: StdRng::seed_from_u64(seed),
        }
    }

    /// Run the single generation pass: one income row and a batch of
    /// expense rows per month, then table-wide assembly. Consumes the
    /// generator; a fresh table needs a fresh pair of seeded generators.
    pub fn generate(mut self) -> Vec<TransactionRow> {
        let mut drafts = Vec::new();
        for month in 1..=12 {
            self.generate_month(month, &mut drafts);
        }
        assemble(drafts, self.profile.row_cap, &mut self.general)
    }

    fn generate_month(&mut self, month: u32, drafts: &mut Vec<RowDraft>) {
        drafts.push(self.income_row(month));

        let seasonal = seasonal_factor(month);
        for category in Category::ALL {
            let drift = self.numeric.random_range(BUDGET_DRIFT_LOW..BUDGET_DRIFT_HIGH);
            let budget = self.profile.base_budget(category) * seasonal * drift;

            let count = self.general.random_range(category.monthly_tx_range());
            for amount in split_budget(budget, count, &mut self.numeric) {
                let description = self.describe(category);
                let date = self.expense_date(month);
                drafts.push(RowDraft::expense(
                    date,
                    category,
                    description,
                    cents_from_amount(amount),
                ));
            }
        }
    }

    /// Income is the fixed salary plus a variable extra with a positive
    /// tendency. The extra is rounded to cents before the addition and,
    /// unlike expense samples, is not folded to positive.
    fn income_row(&mut self, month: u32) -> RowDraft {
        let extras = Normal::new(EXTRA_INCOME_MEAN, EXTRA_INCOME_SD)
            .unwrap()
            .sample(&mut self.numeric);
        let amount = cents_from_amount(self.profile.salary) + cents_from_amount(extras);
        let date = NaiveDate::from_ymd_opt(self.profile.year, month, 1).unwrap();
        RowDraft::income(date, amount)
    }

    /// Default text is "<category> expense"; categories with a label pool
    /// sometimes get a specific label instead.
    fn describe(&mut self, category: Category) -> String {
        if let Some((chance, labels)) = category.label_pool() {
            if self.general.random::<f64>() < chance {
                return labels.choose(&mut self.general).unwrap().to_string();
            }
        }
        format!("{} expense", category)
    }

    fn expense_date(&mut self, month: u32) -> NaiveDate {
        let day = self.general.random_range(1..=DAYS_PER_MONTH);
        NaiveDate::from_ymd_opt(self.profile.year, month, day).unwrap()
    }
}
