use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::io::store::{Store, StoreError};
use crate::model::catalog::{self, Canton};
use crate::model::route::Route;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown canton code '{0}'")]
    UnknownCode(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Derived counters for the header and the CLI `stats` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub done: usize,
    pub left: usize,
    pub percent: u8,
}

/// The state core: owns the in-memory mirror of the persisted state and
/// writes through to the store after every mutation.
///
/// One run spans from a reset/new-run to the next. The completion marker
/// is set at most once per run and is the only guard against re-showing
/// the completion notice; toggling below 26/26 does not clear it.
pub struct Session {
    store: Store,
    selected: HashSet<String>,
    route: Route,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Initialize from the store. Corrupt or foreign stored data has
    /// already been reduced to safe defaults by the store layer.
    pub fn open(store: Store) -> Session {
        let selected = store.load_selection();
        let route = store.load_route();
        let completed_at = store.completion_marker();
        Session {
            store,
            selected,
            route,
            completed_at,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn is_done(&self, code: &str) -> bool {
        self.selected.contains(code)
    }

    /// The selected cantons in catalog order (not insertion order).
    pub fn selected_cantons(&self) -> Vec<&'static Canton> {
        catalog::CANTONS
            .iter()
            .filter(|c| self.selected.contains(c.code))
            .collect()
    }

    pub fn stats(&self) -> Stats {
        let done = self.selected.len();
        let left = catalog::TOTAL - done;
        let percent = ((done * 100) as f64 / catalog::TOTAL as f64).round() as u8;
        Stats {
            done,
            left,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.selected.len() == catalog::TOTAL
    }

    /// Flip membership of `code` and persist the new set.
    /// Returns whether the canton is now done. Codes are accepted
    /// case-insensitively; a code not in the catalog is an error.
    pub fn toggle(&mut self, code: &str) -> Result<bool, SessionError> {
        let canton =
            catalog::find(code).ok_or_else(|| SessionError::UnknownCode(code.to_string()))?;
        let now_done = if self.selected.contains(canton.code) {
            self.selected.remove(canton.code);
            false
        } else {
            self.selected.insert(canton.code.to_string());
            true
        };
        self.store.save_selection(&self.selected)?;
        Ok(now_done)
    }

    /// Mark every canton done and persist.
    pub fn select_all(&mut self) -> Result<(), StoreError> {
        self.selected = catalog::CANTONS
            .iter()
            .map(|c| c.code.to_string())
            .collect();
        self.store.save_selection(&self.selected)
    }

    /// Full reset: selection, completion marker, and route, in the store
    /// and in memory. The caller is responsible for the confirmation gate.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.completed_at = None;
        self.route = Route::default();
        self.store.clear_all();
    }

    /// Start a new run: clears selection and completion marker but keeps
    /// the route, so start/end labels survive into the next round.
    pub fn new_run(&mut self) {
        self.selected.clear();
        self.completed_at = None;
        self.store.clear_selection();
        self.store.clear_completion_marker();
    }

    /// Finish check: if the selection just reached full cardinality and
    /// no marker exists for this run, stamp the marker. Returns whether
    /// the marker was newly set, which is the signal to surface the completion
    /// notice exactly once per run.
    pub fn mark_finished_if_complete(&mut self, now: DateTime<Utc>) -> Result<bool, StoreError> {
        if !self.is_complete() || self.completed_at.is_some() {
            return Ok(false);
        }
        self.store.set_completion_marker_if_absent(now)?;
        // Re-read so memory matches the stored (second-truncated) stamp
        self.completed_at = self.store.completion_marker();
        Ok(true)
    }

    /// Persist the route (trimmed). Called on every edit.
    pub fn set_route(&mut self, route: Route) -> Result<(), StoreError> {
        self.route = route.trimmed();
        self.store.save_route(&self.route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn session() -> (TempDir, Session) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, Session::open(store))
    }

    #[test]
    fn done_plus_left_is_always_total() {
        let (_dir, mut session) = session();
        for code in ["AG", "ZH", "AG", "UR", "TI", "ZH"] {
            session.toggle(code).unwrap();
            let stats = session.stats();
            assert_eq!(stats.done + stats.left, 26);
        }
    }

    #[test]
    fn toggle_twice_is_identity() {
        let (_dir, mut session) = session();
        session.toggle("BE").unwrap();
        let before = session.selected().clone();
        let stored_before = session.store().load_selection();

        assert!(session.toggle("GR").unwrap());
        assert!(!session.toggle("GR").unwrap());

        assert_eq!(session.selected(), &before);
        assert_eq!(session.store().load_selection(), stored_before);
    }

    #[test]
    fn toggle_unknown_code_is_an_error() {
        let (_dir, mut session) = session();
        assert!(matches!(
            session.toggle("XY"),
            Err(SessionError::UnknownCode(_))
        ));
        assert!(session.selected().is_empty());
    }

    #[test]
    fn toggle_accepts_lowercase() {
        let (_dir, mut session) = session();
        assert!(session.toggle("zh").unwrap());
        assert!(session.is_done("ZH"));
    }

    #[test]
    fn selection_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut session = Session::open(Store::open(dir.path()).unwrap());
            session.toggle("AG").unwrap();
            session.toggle("VS").unwrap();
        }
        let session = Session::open(Store::open(dir.path()).unwrap());
        assert!(session.is_done("AG"));
        assert!(session.is_done("VS"));
        assert_eq!(session.stats().done, 2);
    }

    #[test]
    fn select_all_completes() {
        let (_dir, mut session) = session();
        session.select_all().unwrap();
        assert!(session.is_complete());
        assert_eq!(
            session.stats(),
            Stats {
                done: 26,
                left: 0,
                percent: 100
            }
        );
    }

    #[test]
    fn percent_is_rounded() {
        let (_dir, mut session) = session();
        session.toggle("AG").unwrap();
        // 1/26 = 3.85% → 4
        assert_eq!(session.stats().percent, 4);
        session.toggle("ZH").unwrap();
        session.toggle("BE").unwrap();
        // 3/26 = 11.5% → 12 (round half away from zero, like the original)
        assert_eq!(session.stats().percent, 12);
    }

    #[test]
    fn finish_marker_fires_exactly_once_per_run() {
        let (_dir, mut session) = session();
        let now = Utc::now();

        session.select_all().unwrap();
        assert!(session.mark_finished_if_complete(now).unwrap());
        assert!(session.completed_at().is_some());

        // Toggle off and back on: still the same run, marker guards the notice
        session.toggle("AG").unwrap();
        assert!(!session.mark_finished_if_complete(now).unwrap());
        session.toggle("AG").unwrap();
        assert!(!session.mark_finished_if_complete(now).unwrap());
    }

    #[test]
    fn incomplete_selection_never_marks() {
        let (_dir, mut session) = session();
        session.toggle("AG").unwrap();
        assert!(!session.mark_finished_if_complete(Utc::now()).unwrap());
        assert!(session.completed_at().is_none());
    }

    #[test]
    fn new_run_clears_selection_and_marker_but_keeps_route() {
        let (_dir, mut session) = session();
        session.set_route(Route::new("Basel", "Chur")).unwrap();
        session.select_all().unwrap();
        session.mark_finished_if_complete(Utc::now()).unwrap();

        session.new_run();

        assert!(session.selected().is_empty());
        assert!(session.completed_at().is_none());
        assert_eq!(session.route(), &Route::new("Basel", "Chur"));
        // And the store agrees
        assert!(session.store().load_selection().is_empty());
        assert!(session.store().completion_marker().is_none());
        assert_eq!(session.store().load_route(), Route::new("Basel", "Chur"));
    }

    #[test]
    fn marker_can_fire_again_after_new_run() {
        let (_dir, mut session) = session();
        session.select_all().unwrap();
        assert!(session.mark_finished_if_complete(Utc::now()).unwrap());

        session.new_run();
        session.select_all().unwrap();
        assert!(session.mark_finished_if_complete(Utc::now()).unwrap());
    }

    #[test]
    fn reset_clears_everything() {
        let (_dir, mut session) = session();
        session.set_route(Route::new("Basel", "Chur")).unwrap();
        session.select_all().unwrap();
        session.mark_finished_if_complete(Utc::now()).unwrap();

        session.reset();

        assert!(session.selected().is_empty());
        assert!(session.completed_at().is_none());
        assert_eq!(session.route(), &Route::default());
        assert_eq!(session.store().load_route(), Route::default());
    }

    #[test]
    fn set_route_trims_before_storing() {
        let (_dir, mut session) = session();
        session.set_route(Route::new(" Basel ", " ")).unwrap();
        assert_eq!(session.route(), &Route::new("Basel", ""));
    }

    #[test]
    fn selected_cantons_are_in_catalog_order() {
        let (_dir, mut session) = session();
        for code in ["ZH", "AG", "LU"] {
            session.toggle(code).unwrap();
        }
        let codes: Vec<&str> = session.selected_cantons().iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["AG", "LU", "ZH"]);
    }
}
