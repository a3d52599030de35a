//! Schedule store.
//!
//! Holds the schedules a user interface works with and derives what it
//! shows from them:
//!
//! | Slot | Meaning |
//! |------|---------|
//! | `initial` | First schedule successfully generated this session |
//! | `last_fetched` | Most recent generation result (last write wins) |
//! | `loaded` | Schedule loaded from storage |
//! | `shown` | The active base slot with the employee filter applied |
//!
//! Each slot moves through `Empty -> Generating -> Ready | Failed`.
//! Derived values ([`ScheduleStore::available_filter_names`],
//! [`ScheduleStore::flags`]) are recomputed after every change, and
//! registered listeners receive a [`StoreView`] snapshot.

use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::LunchConfig;
use crate::error::{LunchError, Result};
use crate::models::{Employee, LunchSchedule};
use crate::persistence::{decode_schedule, ScheduleArchive};
use crate::roster::RosterSource;
use crate::scheduler::RoundRobinScheduler;
use crate::worker::GenerationRequest;

/// Tagged schedule result: data, nothing yet, or a failure.
pub type ScheduleResult = std::result::Result<Option<LunchSchedule>, LunchError>;

/// State of one schedule slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScheduleSlot {
    /// Nothing produced yet.
    #[default]
    Empty,
    /// A generation is in flight.
    Generating,
    /// A schedule is available.
    Ready(LunchSchedule),
    /// The last attempt failed.
    Failed(LunchError),
}

impl ScheduleSlot {
    /// The schedule, if ready.
    pub fn schedule(&self) -> Option<&LunchSchedule> {
        match self {
            Self::Ready(s) => Some(s),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&LunchError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Whether a schedule is available.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Converts to the tagged result form.
    pub fn to_result(&self) -> ScheduleResult {
        match self {
            Self::Ready(s) => Ok(Some(s.clone())),
            Self::Failed(e) => Err(e.clone()),
            Self::Empty | Self::Generating => Ok(None),
        }
    }

    fn id(&self) -> Option<uuid::Uuid> {
        self.schedule().map(|s| s.id)
    }
}

impl From<Result<LunchSchedule>> for ScheduleSlot {
    fn from(result: Result<LunchSchedule>) -> Self {
        match result {
            Ok(s) => Self::Ready(s),
            Err(e) => Self::Failed(e),
        }
    }
}

/// Which slot the shown schedule is derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveBase {
    /// The most recent generation result.
    #[default]
    LastFetched,
    /// The first schedule generated this session.
    Initial,
    /// The schedule loaded from storage.
    Loaded,
}

/// Which actions are meaningful for the current state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreFlags {
    /// A generated (not loaded) schedule with employees is shown.
    pub new_schedule: bool,
    /// The latest generated schedule exists and is not the one shown.
    pub use_current: bool,
    /// The session's first schedule exists and is not the one shown.
    pub restore_initial: bool,
}

/// Snapshot handed to listeners after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreView {
    /// Filtered view of the active base.
    pub shown: ScheduleSlot,
    /// Active base slot.
    pub active: ActiveBase,
    /// Active employee filter.
    pub filter: Option<String>,
    /// Filter options: the "None" label followed by employee names.
    pub filter_names: Vec<String>,
    /// Derived action flags.
    pub flags: StoreFlags,
}

type Listener = Box<dyn Fn(&StoreView) + Send + Sync>;

/// Owner of generated, loaded, and shown schedules.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use lunch_schedule::models::Employee;
/// use lunch_schedule::store::ScheduleStore;
///
/// let mut store = ScheduleStore::new(NaiveDate::from_ymd_opt(2021, 3, 22).unwrap());
/// store.set_roster(Employee::roster(["A", "B", "C", "D"])).unwrap();
///
/// assert_eq!(store.available_filter_names(), vec!["None", "A", "B", "C", "D"]);
/// let only_a = store.apply_filter(Some("A")).unwrap().unwrap();
/// assert!(only_a.days.iter().all(|d| d.teams.len() == 1));
/// ```
pub struct ScheduleStore {
    config: LunchConfig,
    scheduler: RoundRobinScheduler,
    roster: Option<Vec<Employee>>,
    start_date: NaiveDate,
    initial: ScheduleSlot,
    last_fetched: ScheduleSlot,
    loaded: ScheduleSlot,
    loaded_name: Option<String>,
    load_error: Option<LunchError>,
    active: ActiveBase,
    filter: Option<String>,
    shown: ScheduleSlot,
    listeners: Vec<Listener>,
}

impl fmt::Debug for ScheduleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduleStore")
            .field("start_date", &self.start_date)
            .field("active", &self.active)
            .field("filter", &self.filter)
            .field("shown", &self.shown)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl ScheduleStore {
    /// Creates an empty store with default settings.
    pub fn new(start_date: NaiveDate) -> Self {
        Self::with_config(LunchConfig::default(), start_date)
    }

    /// Creates an empty store.
    pub fn with_config(config: LunchConfig, start_date: NaiveDate) -> Self {
        Self {
            scheduler: config.scheduler(),
            config,
            roster: None,
            start_date,
            initial: ScheduleSlot::Empty,
            last_fetched: ScheduleSlot::Empty,
            loaded: ScheduleSlot::Empty,
            loaded_name: None,
            load_error: None,
            active: ActiveBase::LastFetched,
            filter: None,
            shown: ScheduleSlot::Empty,
            listeners: Vec::new(),
        }
    }

    // --- Inputs -----------------------------------------------------------

    /// Replaces the roster and generates a new schedule.
    ///
    /// The result becomes the last fetched schedule and the active base;
    /// the first successful one also becomes the initial schedule.
    pub fn set_roster(&mut self, employees: Vec<Employee>) -> Result<LunchSchedule> {
        let request = self.begin_generation(employees);
        let result = request.execute();
        self.complete_generation(result.clone());
        result
    }

    /// Changes the start date and regenerates for the current roster.
    ///
    /// Returns `Ok(None)` if no roster has been set yet.
    pub fn set_start_date(&mut self, start_date: NaiveDate) -> ScheduleResult {
        self.start_date = start_date;
        match self.roster.clone() {
            Some(employees) => self.set_roster(employees).map(Some),
            None => Ok(None),
        }
    }

    /// Fetches a roster from `source` and generates from it.
    ///
    /// A fetch failure is recorded in the last fetched slot and returned.
    pub fn refresh_roster(&mut self, source: &dyn RosterSource) -> Result<LunchSchedule> {
        match source.fetch() {
            Ok(employees) => self.set_roster(employees),
            Err(err) => {
                self.record_roster_failure(err.clone());
                Err(err)
            }
        }
    }

    /// Records that the external roster could not be obtained.
    pub fn record_roster_failure(&mut self, err: LunchError) {
        self.complete_generation(Err(err));
    }

    /// Marks the last fetched slot as generating and returns the work to do.
    ///
    /// Run the request anywhere (see [`GenerationRequest::run`]) and pass
    /// the outcome to [`ScheduleStore::complete_generation`].
    pub fn begin_generation(&mut self, employees: Vec<Employee>) -> GenerationRequest {
        self.roster = Some(employees.clone());
        self.last_fetched = ScheduleSlot::Generating;
        self.refresh();
        GenerationRequest::new(self.scheduler.clone(), employees, self.start_date)
    }

    /// Stores a generation outcome as the freshest schedule.
    ///
    /// Outcomes are applied in arrival order; a late result replaces an
    /// earlier one.
    pub fn complete_generation(&mut self, result: Result<LunchSchedule>) {
        match &result {
            Ok(schedule) => {
                info!(id = %schedule.id, days = schedule.day_count(), "schedule ready");
                if !self.initial.is_ready() {
                    self.initial = ScheduleSlot::Ready(schedule.clone());
                }
            }
            Err(err) => warn!(error = %err, "schedule generation failed"),
        }
        self.last_fetched = result.into();
        self.active = ActiveBase::LastFetched;
        self.refresh();
    }

    // --- Loading ----------------------------------------------------------

    /// Decodes a persisted schedule and makes it the active base.
    ///
    /// The current filter is re-applied. On failure the error is kept in
    /// [`ScheduleStore::load_error`]; the loaded slot, the active base and
    /// the shown schedule are left unchanged.
    pub fn load_schedule(&mut self, bytes: &[u8]) -> Result<LunchSchedule> {
        match decode_schedule(bytes) {
            Ok(schedule) => {
                info!(id = %schedule.id, "loaded saved schedule");
                self.loaded = ScheduleSlot::Ready(schedule.clone());
                self.loaded_name = None;
                self.load_error = None;
                self.active = ActiveBase::Loaded;
                self.refresh();
                Ok(schedule)
            }
            Err(err) => {
                warn!(error = %err, "saved schedule rejected");
                self.record_load_failure(err.clone());
                Err(err)
            }
        }
    }

    /// Loads a schedule from `archive` by display name.
    pub fn load_archived(
        &mut self,
        archive: &ScheduleArchive,
        display_name: &str,
    ) -> Result<LunchSchedule> {
        let bytes = match archive.read(display_name) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(file = display_name, error = %err, "saved schedule unavailable");
                self.record_load_failure(err.clone());
                return Err(err);
            }
        };
        let schedule = self.load_schedule(&bytes)?;
        self.loaded_name = Some(display_name.to_string());
        Ok(schedule)
    }

    /// Deselects the loaded schedule, returning to the last fetched one.
    pub fn clear_loaded(&mut self) {
        self.loaded = ScheduleSlot::Empty;
        self.loaded_name = None;
        self.load_error = None;
        if self.active == ActiveBase::Loaded {
            self.active = ActiveBase::LastFetched;
        }
        self.refresh();
    }

    fn record_load_failure(&mut self, err: LunchError) {
        self.load_error = Some(err);
        self.refresh();
    }

    // --- Selection and filtering -------------------------------------------

    /// Re-activates the last fetched schedule as the base, undoing a load.
    ///
    /// Does nothing unless the last fetched slot holds a schedule.
    pub fn select_current(&mut self) -> ScheduleResult {
        if self.last_fetched.is_ready() {
            self.active = ActiveBase::LastFetched;
            self.refresh();
        }
        self.shown.to_result()
    }

    /// Re-activates the first schedule generated this session.
    ///
    /// Does nothing unless that schedule exists.
    pub fn select_initial(&mut self) -> ScheduleResult {
        if self.initial.is_ready() {
            self.active = ActiveBase::Initial;
            self.refresh();
        }
        self.shown.to_result()
    }

    /// Sets the employee filter and returns the filtered schedule.
    ///
    /// `None` or the configured "None" label clears the filter.
    ///
    /// # Errors
    /// [`LunchError::FilterStringNotFound`] if the name is not on the active
    /// schedule's roster. The filter stays set until cleared.
    pub fn apply_filter(&mut self, name: Option<&str>) -> ScheduleResult {
        self.filter = name
            .filter(|n| *n != self.config.none_filter)
            .map(str::to_string);
        debug!(filter = ?self.filter, "filter changed");
        self.refresh();
        self.shown.to_result()
    }

    /// Filter options for the active base: the "None" label followed by
    /// employee names. Empty when no schedule with days is active.
    pub fn available_filter_names(&self) -> Vec<String> {
        match self.base_slot().schedule() {
            Some(s) if !s.days.is_empty() && !s.employees.is_empty() => {
                std::iter::once(self.config.none_filter.clone())
                    .chain(s.employees.iter().map(|e| e.name.clone()))
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Derived action flags.
    pub fn flags(&self) -> StoreFlags {
        let base = self.base_slot();
        let base_id = base.id();
        let differs = |slot: &ScheduleSlot| match (slot.id(), base_id) {
            (Some(id), Some(active)) => id != active,
            (Some(_), None) => true,
            (None, _) => false,
        };

        let new_schedule = match base.schedule() {
            Some(s) => !s.employees.is_empty() && base_id != self.loaded.id(),
            None => false,
        };

        StoreFlags {
            new_schedule,
            use_current: differs(&self.last_fetched),
            restore_initial: differs(&self.initial),
        }
    }

    /// "Starting date: <date>" while a generated schedule is shown.
    pub fn schedule_date_label(&self) -> Option<String> {
        self.flags()
            .new_schedule
            .then(|| format!("Starting date: {}", self.config.format_date(self.start_date)))
    }

    /// Registers a listener called with a [`StoreView`] after every change.
    pub fn subscribe(&mut self, listener: impl Fn(&StoreView) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current snapshot.
    pub fn view(&self) -> StoreView {
        StoreView {
            shown: self.shown.clone(),
            active: self.active,
            filter: self.filter.clone(),
            filter_names: self.available_filter_names(),
            flags: self.flags(),
        }
    }

    // --- Accessors ----------------------------------------------------------

    /// Settings in use.
    pub fn config(&self) -> &LunchConfig {
        &self.config
    }

    /// Requested start date.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last roster passed in, if any.
    pub fn roster(&self) -> Option<&[Employee]> {
        self.roster.as_deref()
    }

    /// The filtered view of the active base.
    pub fn shown(&self) -> &ScheduleSlot {
        &self.shown
    }

    /// The most recent generation result.
    pub fn last_fetched(&self) -> &ScheduleSlot {
        &self.last_fetched
    }

    /// The first schedule generated this session.
    pub fn initial(&self) -> &ScheduleSlot {
        &self.initial
    }

    /// The schedule loaded from storage.
    pub fn loaded(&self) -> &ScheduleSlot {
        &self.loaded
    }

    /// Display name of the loaded archive entry, if it came from one.
    pub fn loaded_name(&self) -> Option<&str> {
        self.loaded_name.as_deref()
    }

    /// Why the most recent load attempt failed, if it did.
    pub fn load_error(&self) -> Option<&LunchError> {
        self.load_error.as_ref()
    }

    /// Active base selector.
    pub fn active(&self) -> ActiveBase {
        self.active
    }

    /// Active employee filter.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    // --- Derivation -----------------------------------------------------------

    fn base_slot(&self) -> &ScheduleSlot {
        match self.active {
            ActiveBase::LastFetched => &self.last_fetched,
            ActiveBase::Initial => &self.initial,
            ActiveBase::Loaded => &self.loaded,
        }
    }

    fn refresh(&mut self) {
        let base = self.base_slot();
        self.shown = match (&self.filter, base) {
            (None, slot) => slot.clone(),
            (Some(name), ScheduleSlot::Ready(s)) => s.filter_by_employee(name).into(),
            (Some(_), ScheduleSlot::Generating) => ScheduleSlot::Generating,
            (Some(_), ScheduleSlot::Failed(e)) => ScheduleSlot::Failed(e.clone()),
            (Some(name), ScheduleSlot::Empty) => {
                ScheduleSlot::Failed(LunchError::FilterStringNotFound { name: name.clone() })
            }
        };
        if !self.listeners.is_empty() {
            let view = self.view();
            for listener in &self.listeners {
                listener(&view);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::encode_schedule;
    use crate::roster::StaticRoster;
    use std::sync::{Arc, Mutex};

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 3, 22).unwrap()
    }

    fn abcd() -> Vec<Employee> {
        Employee::roster(["A", "B", "C", "D"])
    }

    fn store_with_schedule() -> (ScheduleStore, LunchSchedule) {
        let mut store = ScheduleStore::new(monday());
        let schedule = store.set_roster(abcd()).unwrap();
        (store, schedule)
    }

    #[test]
    fn test_empty_store() {
        let store = ScheduleStore::new(monday());
        assert_eq!(store.shown(), &ScheduleSlot::Empty);
        assert!(store.available_filter_names().is_empty());
        assert_eq!(store.flags(), StoreFlags::default());
        assert!(store.schedule_date_label().is_none());
    }

    #[test]
    fn test_first_roster_sets_initial_and_shown() {
        let (store, schedule) = store_with_schedule();
        assert_eq!(store.last_fetched().schedule(), Some(&schedule));
        assert_eq!(store.initial().schedule(), Some(&schedule));
        assert_eq!(store.shown().schedule(), Some(&schedule));
        assert_eq!(store.active(), ActiveBase::LastFetched);
        assert_eq!(
            store.available_filter_names(),
            vec!["None", "A", "B", "C", "D"]
        );
    }

    #[test]
    fn test_second_roster_keeps_initial() {
        let (mut store, first) = store_with_schedule();
        let second = store
            .set_roster(Employee::roster(["A", "B", "C", "D", "E", "F"]))
            .unwrap();

        assert_eq!(store.initial().schedule(), Some(&first));
        assert_eq!(store.last_fetched().schedule(), Some(&second));
        assert_eq!(store.shown().schedule(), Some(&second));

        let flags = store.flags();
        assert!(flags.new_schedule);
        assert!(!flags.use_current);
        assert!(flags.restore_initial);

        let restored = store.select_initial().unwrap().unwrap();
        assert!(restored.same_instance(&first));
        assert!(store.flags().use_current);
        assert!(!store.flags().restore_initial);
    }

    #[test]
    fn test_failed_generation() {
        let mut store = ScheduleStore::new(monday());
        let err = store
            .set_roster(Employee::roster(["A", "B", "C"]))
            .unwrap_err();
        assert_eq!(err, LunchError::OddNumberOfEmployees { count: 3 });
        assert_eq!(store.shown().error(), Some(&err));
        assert_eq!(store.initial(), &ScheduleSlot::Empty);
        assert!(store.available_filter_names().is_empty());
        assert!(!store.flags().new_schedule);

        // A later valid roster recovers.
        store.set_roster(abcd()).unwrap();
        assert!(store.shown().is_ready());
        assert!(store.initial().is_ready());
    }

    #[test]
    fn test_duplicate_roster_rejected() {
        let (mut store, first) = store_with_schedule();
        let err = store
            .set_roster(Employee::roster(["A", "A", "B", "C"]))
            .unwrap_err();
        assert!(matches!(err, LunchError::BadRosterSource { .. }));
        assert_eq!(store.shown().error(), Some(&err));
        assert_eq!(store.initial().schedule(), Some(&first));
    }

    #[test]
    fn test_set_start_date_regenerates() {
        let mut store = ScheduleStore::new(monday());
        assert_eq!(
            store.set_start_date(NaiveDate::from_ymd_opt(2021, 3, 27).unwrap()),
            Ok(None)
        );

        store.set_roster(abcd()).unwrap();
        let saturday = NaiveDate::from_ymd_opt(2021, 4, 3).unwrap();
        let schedule = store.set_start_date(saturday).unwrap().unwrap();
        assert_eq!(schedule.start_date, NaiveDate::from_ymd_opt(2021, 4, 5).unwrap());
        assert_eq!(store.start_date(), saturday);
        assert_eq!(store.schedule_date_label().unwrap(), "Starting date: 03-04-2021");
    }

    #[test]
    fn test_apply_filter() {
        let (mut store, base) = store_with_schedule();
        let filtered = store.apply_filter(Some("C")).unwrap().unwrap();
        assert!(filtered.same_instance(&base));
        for day in &filtered.days {
            assert_eq!(day.teams.len(), 1);
            assert!(day.teams[0].contains("C"));
        }
        assert_eq!(store.filter(), Some("C"));

        let cleared = store.apply_filter(None).unwrap().unwrap();
        assert_eq!(cleared, base);

        store.apply_filter(Some("C")).unwrap();
        let cleared = store.apply_filter(Some("None")).unwrap().unwrap();
        assert_eq!(cleared, base);
        assert_eq!(store.filter(), None);
    }

    #[test]
    fn test_apply_unknown_filter() {
        let (mut store, base) = store_with_schedule();
        let err = store.apply_filter(Some("Zed")).unwrap_err();
        assert_eq!(
            err,
            LunchError::FilterStringNotFound {
                name: "Zed".into()
            }
        );
        assert_eq!(store.filter(), Some("Zed"));
        // Filter names still come from the base, so the UI can recover.
        assert_eq!(store.available_filter_names().len(), 5);
        assert_eq!(store.apply_filter(None).unwrap().unwrap(), base);
    }

    #[test]
    fn test_filter_without_schedule() {
        let mut store = ScheduleStore::new(monday());
        assert!(matches!(
            store.apply_filter(Some("A")),
            Err(LunchError::FilterStringNotFound { .. })
        ));
        assert_eq!(store.apply_filter(None), Ok(None));
    }

    #[test]
    fn test_filter_reapplied_on_regeneration() {
        let (mut store, _) = store_with_schedule();
        store.apply_filter(Some("B")).unwrap();
        let fresh = store.set_roster(abcd()).unwrap();
        let shown = store.shown().schedule().unwrap();
        assert!(shown.same_instance(&fresh));
        assert!(shown.days.iter().all(|d| d.teams.len() == 1));
    }

    #[test]
    fn test_load_schedule_becomes_base() {
        let (mut store, generated) = store_with_schedule();
        let other = RoundRobinScheduler::new()
            .generate(&Employee::roster(["W", "X", "Y", "Z"]), monday())
            .unwrap();

        let loaded = store
            .load_schedule(&encode_schedule(&other).unwrap())
            .unwrap();
        assert_eq!(loaded, other);
        assert_eq!(store.active(), ActiveBase::Loaded);
        assert_eq!(store.shown().schedule(), Some(&other));
        assert_eq!(
            store.available_filter_names(),
            vec!["None", "W", "X", "Y", "Z"]
        );

        let flags = store.flags();
        assert!(!flags.new_schedule);
        assert!(flags.use_current);
        assert!(store.schedule_date_label().is_none());

        let back = store.select_current().unwrap().unwrap();
        assert_eq!(back, generated);
        assert_eq!(store.active(), ActiveBase::LastFetched);
    }

    #[test]
    fn test_load_reapplies_filter() {
        let (mut store, _) = store_with_schedule();
        store.apply_filter(Some("A")).unwrap();

        // "A" is not on the loaded roster.
        let other = RoundRobinScheduler::new()
            .generate(&Employee::roster(["W", "X"]), monday())
            .unwrap();
        store
            .load_schedule(&encode_schedule(&other).unwrap())
            .unwrap();
        assert!(matches!(
            store.shown(),
            ScheduleSlot::Failed(LunchError::FilterStringNotFound { .. })
        ));

        store.apply_filter(Some("W")).unwrap();
        assert_eq!(store.shown().schedule().unwrap().days[0].teams.len(), 1);
    }

    #[test]
    fn test_load_failure_keeps_base() {
        let (mut store, generated) = store_with_schedule();
        let err = store.load_schedule(b"not a schedule").unwrap_err();
        assert!(matches!(err, LunchError::ScheduleDecodeFailed { .. }));
        assert_eq!(store.load_error(), Some(&err));
        assert_eq!(store.loaded(), &ScheduleSlot::Empty);
        assert_eq!(store.active(), ActiveBase::LastFetched);
        assert_eq!(store.shown().schedule(), Some(&generated));
    }

    #[test]
    fn test_load_archived_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let archive = ScheduleArchive::new(dir.path());
        let (mut store, generated) = store_with_schedule();
        let saved = archive.save(&generated).unwrap();

        store.set_roster(abcd()).unwrap();
        let loaded = store.load_archived(&archive, &saved.display_name).unwrap();
        assert_eq!(loaded, generated);
        assert_eq!(store.loaded_name(), Some(saved.display_name.as_str()));

        store.clear_loaded();
        assert_eq!(store.loaded(), &ScheduleSlot::Empty);
        assert_eq!(store.active(), ActiveBase::LastFetched);
        assert!(store.loaded_name().is_none());
    }

    #[test]
    fn test_load_archived_missing() {
        let dir = tempfile::tempdir().unwrap();
        let archive = ScheduleArchive::new(dir.path());
        let (mut store, generated) = store_with_schedule();
        let err = store
            .load_archived(&archive, "OldLunch_01-01-2021-05-01-2021.json")
            .unwrap_err();
        assert!(matches!(err, LunchError::SelectedScheduleNotFound { .. }));
        assert_eq!(store.shown().schedule(), Some(&generated));
        assert_eq!(store.load_error(), Some(&err));
    }

    #[test]
    fn test_bad_load_keeps_loaded_schedule() {
        let (mut store, _) = store_with_schedule();
        let other = RoundRobinScheduler::new()
            .generate(&Employee::roster(["W", "X", "Y", "Z"]), monday())
            .unwrap();
        store
            .load_schedule(&encode_schedule(&other).unwrap())
            .unwrap();
        let before = store.shown().clone();

        let err = store.load_schedule(b"garbage").unwrap_err();
        assert!(matches!(err, LunchError::ScheduleDecodeFailed { .. }));
        assert_eq!(store.active(), ActiveBase::Loaded);
        assert_eq!(store.loaded().schedule(), Some(&other));
        assert_eq!(store.shown(), &before);
        assert_eq!(store.load_error(), Some(&err));

        // Same for an archive entry that no longer exists.
        let dir = tempfile::tempdir().unwrap();
        let archive = ScheduleArchive::new(dir.path());
        store
            .load_archived(&archive, "OldLunch_gone.json")
            .unwrap_err();
        assert_eq!(store.shown(), &before);
        assert!(matches!(
            store.load_error(),
            Some(LunchError::SelectedScheduleNotFound { .. })
        ));

        // A successful load clears the recorded failure.
        store
            .load_schedule(&encode_schedule(&other).unwrap())
            .unwrap();
        assert!(store.load_error().is_none());
    }

    #[test]
    fn test_raw_load_forgets_archive_name() {
        let dir = tempfile::tempdir().unwrap();
        let archive = ScheduleArchive::new(dir.path());
        let (mut store, generated) = store_with_schedule();
        let saved = archive.save(&generated).unwrap();

        store.load_archived(&archive, &saved.display_name).unwrap();
        assert_eq!(store.loaded_name(), Some(saved.display_name.as_str()));

        store
            .load_schedule(&encode_schedule(&generated).unwrap())
            .unwrap();
        assert!(store.loaded_name().is_none());
    }

    #[test]
    fn test_generation_last_write_wins() {
        let mut store = ScheduleStore::new(monday());
        let first = store.begin_generation(abcd());
        let second = store.begin_generation(Employee::roster(["P", "Q"]));
        assert_eq!(store.last_fetched(), &ScheduleSlot::Generating);
        assert_eq!(store.shown(), &ScheduleSlot::Generating);

        // Results arrive out of request order.
        let second_result = second.execute();
        let first_result = first.execute();
        store.complete_generation(second_result);
        store.complete_generation(first_result.clone());

        assert_eq!(store.last_fetched().schedule(), first_result.as_ref().ok());
        assert_eq!(store.shown().schedule().unwrap().employees.len(), 4);
    }

    #[test]
    fn test_refresh_roster_failure() {
        let mut store = ScheduleStore::new(monday());
        let bad = StaticRoster::new(Employee::roster(["A", "A"]));
        let err = store.refresh_roster(&bad).unwrap_err();
        assert!(matches!(err, LunchError::BadRosterSource { .. }));
        assert_eq!(store.last_fetched().error(), Some(&err));

        let good = StaticRoster::placeholder();
        let schedule = store.refresh_roster(&good).unwrap();
        assert_eq!(schedule.day_count(), 9);
    }

    #[test]
    fn test_listeners_notified() {
        let views: Arc<Mutex<Vec<StoreView>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&views);

        let mut store = ScheduleStore::new(monday());
        store.subscribe(move |view| sink.lock().unwrap().push(view.clone()));
        store.set_roster(abcd()).unwrap();
        store.apply_filter(Some("D")).unwrap();

        let views = views.lock().unwrap();
        // begin (Generating), complete (Ready), filter
        assert_eq!(views.len(), 3);
        assert_eq!(views[0].shown, ScheduleSlot::Generating);
        assert!(views[1].shown.is_ready());
        assert_eq!(views[2].filter.as_deref(), Some("D"));
        assert_eq!(views[2].filter_names.len(), 5);
    }

    #[test]
    fn test_custom_none_label() {
        let config = LunchConfig {
            none_filter: "Everyone".into(),
            ..LunchConfig::default()
        };
        let mut store = ScheduleStore::with_config(config, monday());
        let base = store.set_roster(abcd()).unwrap();
        assert_eq!(store.available_filter_names()[0], "Everyone");
        assert_eq!(store.apply_filter(Some("Everyone")).unwrap().unwrap(), base);
    }

    #[test]
    fn test_slot_to_result() {
        assert_eq!(ScheduleSlot::Empty.to_result(), Ok(None));
        assert_eq!(ScheduleSlot::Generating.to_result(), Ok(None));
        let err = LunchError::NotEnoughEmployees { count: 0 };
        assert_eq!(ScheduleSlot::Failed(err.clone()).to_result(), Err(err));
    }
}
