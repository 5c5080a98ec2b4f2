//! Application state mediator.
//!
//! `Dashboard` owns the investment and project stores together with the
//! derived project view. Every write to the investment amount or the
//! working project list re-derives the view synchronously before any
//! subscriber is told about the change, so a read after a write never sees
//! stale yields.

use core_types::Project;
use std::fmt;
use std::rc::Rc;

use crate::investment::{InvestmentStore, parse_investment_input};
use crate::projects::ProjectStore;
use crate::yield_engine::{ProjectView, SortOrder, YieldConfig};

/// Callback invoked after every state change.
pub type Listener = Rc<dyn Fn(&Dashboard)>;

/// Handle returned by [`Dashboard::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Investment, projects and the derived view, with change notification.
#[derive(Clone, Default)]
pub struct Dashboard {
    investment: InvestmentStore,
    projects: ProjectStore,
    view: ProjectView,
    config: YieldConfig,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Dashboard {
    pub fn new(config: YieldConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn investment(&self) -> f64 {
        self.investment.get()
    }

    pub fn set_investment(&mut self, value: f64) {
        self.investment.set(value);
        self.rebuild();
    }

    /// Set the investment from the raw text of the input box.
    pub fn set_investment_input(&mut self, raw: &str) {
        self.set_investment(parse_investment_input(raw));
    }

    /// Fresh fetch: becomes both the reset target and the working list.
    pub fn initialize_projects(&mut self, list: Vec<Project>) {
        self.projects.initialize(list);
        self.rebuild();
    }

    /// Match result: replaces the working list only.
    pub fn replace_projects(&mut self, list: Vec<Project>) {
        self.projects.replace(list);
        self.rebuild();
    }

    /// Working list back to the last fetch.
    pub fn reset_projects(&mut self) {
        self.projects.reset();
        self.rebuild();
    }

    /// Flip the yield sort order and re-sort the current rows.
    pub fn toggle_sort(&mut self) -> SortOrder {
        let order = self.view.toggle_sort();
        self.notify();
        order
    }

    /// Sort the current rows in a fixed order.
    pub fn sort(&mut self, order: SortOrder) {
        self.view.sort(order);
        self.notify();
    }

    pub fn view(&self) -> &ProjectView {
        &self.view
    }

    /// Rows to display, with yields attached.
    pub fn rows(&self) -> &[Project] {
        self.view.rows()
    }

    pub fn projects(&self) -> &ProjectStore {
        &self.projects
    }

    pub fn config(&self) -> &YieldConfig {
        &self.config
    }

    /// Register a listener called after every change.
    pub fn subscribe(&mut self, listener: impl Fn(&Dashboard) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn rebuild(&mut self) {
        self.view
            .rebuild(self.projects.working(), self.investment.get(), &self.config);
        self.notify();
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            (**listener)(self);
        }
    }
}

impl PartialEq for Dashboard {
    fn eq(&self, other: &Self) -> bool {
        self.investment == other.investment
            && self.projects == other.projects
            && self.view == other.view
            && self.config == other.config
    }
}

impl fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("investment", &self.investment)
            .field("projects", &self.projects)
            .field("view", &self.view)
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn fetched() -> Vec<Project> {
        vec![
            Project::new("Reforestation", 5.0, 10.0),
            Project::new("Methane Capture", 8.0, 10.0),
            Project::new("Carbon Farming", 2.0, 10.0),
        ]
    }

    fn yields(dashboard: &Dashboard) -> Vec<Option<i64>> {
        dashboard.rows().iter().map(|p| p.yield_value).collect()
    }

    #[test]
    fn test_investment_change_recomputes_yields() {
        let mut dashboard = Dashboard::default();
        dashboard.initialize_projects(vec![Project::new("Reforestation", 5.0, 10.0)]);
        assert_eq!(yields(&dashboard), [Some(0)]);

        dashboard.set_investment(100_000.0);

        assert_eq!(yields(&dashboard), [Some(16289)]);
    }

    #[test]
    fn test_replace_recomputes_yields() {
        let mut dashboard = Dashboard::default();
        dashboard.set_investment(100_000.0);
        dashboard.initialize_projects(fetched());

        dashboard.replace_projects(vec![Project::new("Reforestation", 5.0, 10.0)]);

        assert_eq!(dashboard.rows().len(), 1);
        assert_eq!(yields(&dashboard), [Some(16289)]);
        assert_eq!(dashboard.projects().working()[0].yield_value, None);
    }

    #[test]
    fn test_reset_restores_initial_rows() {
        let mut dashboard = Dashboard::default();
        dashboard.initialize_projects(fetched());
        dashboard.replace_projects(vec![]);
        dashboard.replace_projects(vec![Project::new("EV Infrastructure", 3.0, 5.0)]);

        dashboard.reset_projects();

        let types: Vec<&str> = dashboard.rows().iter().map(|p| p.project_type.as_str()).collect();
        assert_eq!(types, ["Reforestation", "Methane Capture", "Carbon Farming"]);
    }

    #[test]
    fn test_investment_input_is_coerced() {
        let mut dashboard = Dashboard::default();

        dashboard.set_investment_input("not a number");
        assert_eq!(dashboard.investment(), 0.0);

        dashboard.set_investment_input("250000");
        assert_eq!(dashboard.investment(), 250_000.0);
    }

    #[test]
    fn test_toggle_sort_orders_rows() {
        let mut dashboard = Dashboard::default();
        dashboard.set_investment(10_000.0);
        dashboard.initialize_projects(fetched());

        assert_eq!(dashboard.toggle_sort(), SortOrder::Asc);
        let types: Vec<&str> = dashboard.rows().iter().map(|p| p.project_type.as_str()).collect();
        assert_eq!(types, ["Carbon Farming", "Reforestation", "Methane Capture"]);

        assert_eq!(dashboard.toggle_sort(), SortOrder::Desc);
        let types: Vec<&str> = dashboard.rows().iter().map(|p| p.project_type.as_str()).collect();
        assert_eq!(types, ["Methane Capture", "Reforestation", "Carbon Farming"]);
    }

    #[test]
    fn test_sort_on_empty_table_is_noop() {
        let mut dashboard = Dashboard::default();
        dashboard.initialize_projects(vec![]);

        dashboard.toggle_sort();

        assert!(dashboard.rows().is_empty());
    }

    #[test]
    fn test_listeners_see_updated_view() {
        let mut dashboard = Dashboard::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        dashboard.subscribe(move |d| sink.borrow_mut().push(yields(d)));

        dashboard.initialize_projects(vec![Project::new("Reforestation", 5.0, 10.0)]);
        dashboard.set_investment(100_000.0);

        assert_eq!(*seen.borrow(), vec![vec![Some(0)], vec![Some(16289)]]);
    }

    #[test]
    fn test_every_mutation_notifies() {
        let mut dashboard = Dashboard::default();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        dashboard.subscribe(move |_| counter.set(counter.get() + 1));

        dashboard.set_investment(1.0);
        dashboard.initialize_projects(fetched());
        dashboard.replace_projects(vec![]);
        dashboard.reset_projects();
        dashboard.toggle_sort();
        dashboard.sort(SortOrder::Desc);

        assert_eq!(calls.get(), 6);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut dashboard = Dashboard::default();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = dashboard.subscribe(move |_| counter.set(counter.get() + 1));

        dashboard.set_investment(1.0);
        assert!(dashboard.unsubscribe(id));
        assert!(!dashboard.unsubscribe(id));
        dashboard.set_investment(2.0);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_equality_ignores_listeners() {
        let mut with_listener = Dashboard::default();
        with_listener.subscribe(|_| {});

        assert_eq!(with_listener, Dashboard::default());
    }

    #[test]
    fn test_custom_yield_config() {
        let mut dashboard = Dashboard::new(YieldConfig { scale_factor: 1.0 });
        dashboard.initialize_projects(vec![Project::new("Reforestation", 0.0, 10.0)]);

        dashboard.set_investment(500.0);

        assert_eq!(yields(&dashboard), [Some(500)]);
    }
}
