//! Yield derivation and sorting.
//!
//! The yield of a project is the investment compounded annually at the
//! project's return rate over its lifespan, scaled by a fixed factor and
//! rounded to a whole amount. It is always recomputed locally and attached
//! to a copy of each working project.

use core_types::Project;

/// Business constants for the yield calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldConfig {
    /// Share of the grown investment reported as yield (default: 0.1)
    pub scale_factor: f64,
}

impl Default for YieldConfig {
    fn default() -> Self {
        Self { scale_factor: 0.1 }
    }
}

impl YieldConfig {
    /// Compute a yield with this configuration's scale factor.
    pub fn compute(&self, annual_return_rate_percent: f64, lifespan_years: f64, investment: f64) -> i64 {
        let rate = annual_return_rate_percent / 100.0;
        let grown = investment * (1.0 + rate).powf(lifespan_years);
        round_half_up(grown * self.scale_factor)
    }

    /// Yield of a single project. A project missing its return rate or its
    /// lifespan yields 0.
    pub fn project_yield(&self, project: &Project, investment: f64) -> i64 {
        match (project.financial_returns, project.project_lifespan) {
            (Some(rate), Some(lifespan)) => self.compute(rate, lifespan, investment),
            _ => 0,
        }
    }
}

/// Compute a yield with the default scale factor.
pub fn compute_yield(annual_return_rate_percent: f64, lifespan_years: f64, investment: f64) -> i64 {
    YieldConfig::default().compute(annual_return_rate_percent, lifespan_years, investment)
}

// Halves round towards positive infinity. NaN ends up as 0 and infinities
// saturate through the `as` cast.
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// Copy the working projects with their yield attached.
pub fn derive_yields(working: &[Project], investment: f64, config: &YieldConfig) -> Vec<Project> {
    working
        .iter()
        .map(|project| Project {
            yield_value: Some(config.project_yield(project, investment)),
            ..project.clone()
        })
        .collect()
}

/// Direction of the yield column sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Stable sort on yield; a missing yield counts as 0. Equal yields keep
/// their relative order.
pub fn sort_by_yield(rows: &mut [Project], order: SortOrder) {
    rows.sort_by(|a, b| {
        let (ya, yb) = (a.yield_value.unwrap_or(0), b.yield_value.unwrap_or(0));
        match order {
            SortOrder::Asc => ya.cmp(&yb),
            SortOrder::Desc => yb.cmp(&ya),
        }
    });
}

/// The derived, sortable rows shown in the project table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectView {
    rows: Vec<Project>,
    order: SortOrder,
}

impl ProjectView {
    /// Re-derive rows from the working set in working-set order. The
    /// remembered sort order is kept but not re-applied.
    pub fn rebuild(&mut self, working: &[Project], investment: f64, config: &YieldConfig) {
        self.rows = derive_yields(working, investment, config);
    }

    /// Flip the sort order and sort the last derived rows by it.
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort(self.order.toggled());
        self.order
    }

    /// Sort the last derived rows in the given order.
    pub fn sort(&mut self, order: SortOrder) {
        self.order = order;
        sort_by_yield(&mut self.rows, order);
    }

    pub fn rows(&self) -> &[Project] {
        &self.rows
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_yield(name: &str, value: Option<i64>) -> Project {
        Project {
            project_type: name.to_string(),
            yield_value: value,
            ..Default::default()
        }
    }

    fn names(rows: &[Project]) -> Vec<&str> {
        rows.iter().map(|p| p.project_type.as_str()).collect()
    }

    #[test]
    fn test_compute_yield_reference_scenario() {
        // 100000 * 1.05^10 * 0.1 = 16288.946...
        assert_eq!(compute_yield(5.0, 10.0, 100_000.0), 16289);
    }

    #[test]
    fn test_compute_yield_is_deterministic() {
        let first = compute_yield(7.25, 15.0, 42_000.0);
        for _ in 0..10 {
            assert_eq!(compute_yield(7.25, 15.0, 42_000.0), first);
        }
    }

    #[test]
    fn test_zero_rate_is_plain_scaling() {
        for lifespan in [0.0, 1.0, 10.0, 40.0] {
            assert_eq!(compute_yield(0.0, lifespan, 123_456.0), 12346);
        }
    }

    #[test]
    fn test_zero_lifespan_means_no_growth() {
        for rate in [0.0, 3.0, 12.5, 80.0] {
            assert_eq!(compute_yield(rate, 0.0, 50_000.0), 5000);
        }
    }

    #[test]
    fn test_zero_investment_yields_zero() {
        assert_eq!(compute_yield(9.0, 25.0, 0.0), 0);
    }

    #[test]
    fn test_rounding_goes_half_up() {
        assert_eq!(compute_yield(0.0, 1.0, 25.0), 3);
        assert_eq!(compute_yield(0.0, 1.0, -25.0), -2);
    }

    #[test]
    fn test_rounding_just_below_half() {
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.500000000000001), -3);
        assert_eq!(round_half_up(4503599627370497.0), 4503599627370497);
        assert_eq!(round_half_up(f64::INFINITY), i64::MAX);
    }

    #[test]
    fn test_nan_investment_yields_zero() {
        assert_eq!(compute_yield(5.0, 10.0, f64::NAN), 0);
    }

    #[test]
    fn test_custom_scale_factor() {
        let config = YieldConfig { scale_factor: 1.0 };
        assert_eq!(config.compute(0.0, 10.0, 1000.0), 1000);
    }

    #[test]
    fn test_project_missing_inputs_yields_zero() {
        let config = YieldConfig::default();
        let mut project = Project::new("Reforestation", 5.0, 10.0);
        project.financial_returns = None;
        assert_eq!(config.project_yield(&project, 100_000.0), 0);

        let mut project = Project::new("Reforestation", 5.0, 10.0);
        project.project_lifespan = None;
        assert_eq!(config.project_yield(&project, 100_000.0), 0);
    }

    #[test]
    fn test_derive_does_not_mutate_source() {
        let working = vec![Project::new("Reforestation", 5.0, 10.0)];

        let derived = derive_yields(&working, 100_000.0, &YieldConfig::default());

        assert_eq!(working[0].yield_value, None);
        assert_eq!(derived[0].yield_value, Some(16289));
        assert_eq!(derived[0].project_type, "Reforestation");
    }

    #[test]
    fn test_sort_descending_and_ascending() {
        let mut rows = vec![
            with_yield("a", Some(10)),
            with_yield("b", Some(30)),
            with_yield("c", Some(20)),
        ];

        sort_by_yield(&mut rows, SortOrder::Desc);
        assert_eq!(names(&rows), ["b", "c", "a"]);

        sort_by_yield(&mut rows, SortOrder::Asc);
        assert_eq!(names(&rows), ["a", "c", "b"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_yields() {
        let mut rows = vec![
            with_yield("first", Some(5)),
            with_yield("x", Some(9)),
            with_yield("second", Some(5)),
            with_yield("third", Some(5)),
        ];

        sort_by_yield(&mut rows, SortOrder::Desc);
        assert_eq!(names(&rows), ["x", "first", "second", "third"]);

        sort_by_yield(&mut rows, SortOrder::Asc);
        assert_eq!(names(&rows), ["first", "second", "third", "x"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut rows = vec![
            with_yield("a", Some(1)),
            with_yield("b", Some(3)),
            with_yield("c", Some(3)),
            with_yield("d", Some(2)),
        ];

        sort_by_yield(&mut rows, SortOrder::Desc);
        let once = rows.clone();
        sort_by_yield(&mut rows, SortOrder::Desc);

        assert_eq!(rows, once);
    }

    #[test]
    fn test_missing_yield_sorts_as_zero() {
        let mut rows = vec![
            with_yield("neg", Some(-1)),
            with_yield("none", None),
            with_yield("pos", Some(1)),
        ];

        sort_by_yield(&mut rows, SortOrder::Asc);

        assert_eq!(names(&rows), ["neg", "none", "pos"]);
    }

    #[test]
    fn test_sort_order_toggles() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.toggled().as_str(), "desc");
    }

    #[test]
    fn test_view_first_toggle_sorts_ascending() {
        let working = vec![
            Project::new("high", 10.0, 10.0),
            Project::new("low", 1.0, 10.0),
        ];
        let mut view = ProjectView::default();
        view.rebuild(&working, 1000.0, &YieldConfig::default());

        assert_eq!(view.toggle_sort(), SortOrder::Asc);
        assert_eq!(names(view.rows()), ["low", "high"]);

        assert_eq!(view.toggle_sort(), SortOrder::Desc);
        assert_eq!(names(view.rows()), ["high", "low"]);
    }

    #[test]
    fn test_rebuild_restores_working_order_and_keeps_order_flag() {
        let working = vec![
            Project::new("low", 1.0, 10.0),
            Project::new("high", 10.0, 10.0),
        ];
        let mut view = ProjectView::default();
        view.rebuild(&working, 1000.0, &YieldConfig::default());
        view.sort(SortOrder::Desc);
        assert_eq!(names(view.rows()), ["high", "low"]);

        view.rebuild(&working, 2000.0, &YieldConfig::default());

        assert_eq!(names(view.rows()), ["low", "high"]);
        assert_eq!(view.order(), SortOrder::Desc);
    }

    #[test]
    fn test_toggle_on_empty_view_is_noop() {
        let mut view = ProjectView::default();
        view.rebuild(&[], 1000.0, &YieldConfig::default());

        view.toggle_sort();

        assert!(view.is_empty());
    }
}
