// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use ledgersim::application::LedgerGenerator;
use ledgersim::domain::{SpendingProfile, TransactionRow};

/// Generate the full table with the default profile (seed 42).
pub fn default_table() -> Vec<TransactionRow> {
    LedgerGenerator::new(SpendingProfile::default()).generate()
}

/// Generate a table with a specific seed, default everything else.
pub fn table_with_seed(seed: u64) -> Vec<TransactionRow> {
    let profile = SpendingProfile {
        seed,
        ..SpendingProfile::default()
    };
    LedgerGenerator::new(profile).generate()
}
