use super::Category;

/// Fixed parameters for one generation run. There is no configuration file
/// or CLI surface; `Default` carries the source constants.
#[derive(Debug, Clone)]
pub struct SpendingProfile {
    /// Net monthly salary the category shares apply to.
    pub salary: f64,
    /// Calendar year the ledger covers.
    pub year: i32,
    /// Seed for both random generators.
    pub seed: u64,
    /// Maximum number of rows kept in the final table.
    pub row_cap: usize,
}

impl Default for SpendingProfile {
    fn default() -> Self {
        Self {
            salary: 1600.0,
            year: 2025,
            seed: 42,
            row_cap: 500,
        }
    }
}

impl SpendingProfile {
    /// Nominal monthly budget for a category, before seasonal and random
    /// adjustment.
    pub fn base_budget(&self, category: Category) -> f64 {
        self.salary * category.share()
    }
}

/// Month-specific spending multiplier. Months not listed spend at baseline.
pub fn seasonal_factor(month: u32) -> f64 {
    match month {
        1 => 1.06,
        3 => 1.09,
        6 => 1.10,
        7 => 1.13,
        8 => 1.10,
        11 => 1.12,
        12 => 1.18,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_budgets() {
        let profile = SpendingProfile::default();
        let expected = [
            (Category::Food, 224.0),
            (Category::Housing, 448.0),
            (Category::Transport, 128.0),
            (Category::Leisure, 288.0),
            (Category::Others, 192.0),
        ];
        for (category, budget) in expected {
            assert!((profile.base_budget(category) - budget).abs() < 1e-9);
        }
    }

    #[test]
    fn test_seasonal_factors() {
        assert_eq!(seasonal_factor(7), 1.13);
        assert_eq!(seasonal_factor(12), 1.18);
        for month in [2, 4, 5, 9, 10] {
            assert_eq!(seasonal_factor(month), 1.0);
        }
    }

    #[test]
    fn test_default_profile() {
        let profile = SpendingProfile::default();
        assert_eq!(profile.salary, 1600.0);
        assert_eq!(profile.year, 2025);
        assert_eq!(profile.seed, 42);
        assert_eq!(profile.row_cap, 500);
    }
}
