//! Integration tests for the view coordination pipeline.
//!
//! These tests exercise the application layer of paddock-client end to
//! end: route table + coordinators + in-memory access services standing in
//! for the remote API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use paddock_client::application::horse_create_edit::HorseCreateEditCoordinator;
use paddock_client::application::horse_detail::{DetailState, HorseDetailCoordinator};
use paddock_client::application::horse_list::HorseListCoordinator;
use paddock_client::application::owner_create::OwnerCreateCoordinator;
use paddock_client::application::{
    HorseGateway, NavState, Notifier, OwnerGateway, Router, ServiceError,
};
use paddock_client::domain::form::{HorseForm, OwnerForm};
use paddock_client::domain::routes::{resolve, CreateEditMode, Route, RouteMatch};
use paddock_core::{Horse, HorseSearchParams, Owner, Sex};

// ── In-memory doubles ─────────────────────────────────────────────────────────

/// In-memory horse store simulating the remote API, recording the calls
/// the coordinators make.
#[derive(Default)]
struct InMemoryHorseGateway {
    records: Mutex<HashMap<i64, Horse>>,
    get_calls: Mutex<Vec<i64>>,
    search_calls: Mutex<Vec<HorseSearchParams>>,
}

impl InMemoryHorseGateway {
    fn with_records(horses: Vec<Horse>) -> Self {
        let records = horses
            .into_iter()
            .map(|horse| (horse.id.unwrap(), horse))
            .collect();
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }
}

#[async_trait]
impl HorseGateway for InMemoryHorseGateway {
    async fn get_all(&self) -> Result<Vec<Horse>, ServiceError> {
        let mut horses: Vec<Horse> = self.records.lock().unwrap().values().cloned().collect();
        horses.sort_by_key(|horse| horse.id);
        Ok(horses)
    }

    async fn create(&self, horse: &Horse) -> Result<Horse, ServiceError> {
        let mut records = self.records.lock().unwrap();
        let id = records.keys().max().copied().unwrap_or(0) + 1;
        let persisted = Horse {
            id: Some(id),
            ..horse.clone()
        };
        records.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn edit(&self, id: i64, horse: &Horse) -> Result<Horse, ServiceError> {
        let mut records = self.records.lock().unwrap();
        if !records.contains_key(&id) {
            return Err(ServiceError::NotFound);
        }
        let updated = Horse {
            id: Some(id),
            ..horse.clone()
        };
        records.insert(id, updated.clone());
        Ok(updated)
    }

    async fn get_by_id(&self, id: i64) -> Result<Horse, ServiceError> {
        self.get_calls.lock().unwrap().push(id);
        self.records
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<Horse, ServiceError> {
        self.records
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or(ServiceError::NotFound)
    }

    async fn search(&self, params: &HorseSearchParams) -> Result<Vec<Horse>, ServiceError> {
        self.search_calls.lock().unwrap().push(params.clone());
        let records = self.records.lock().unwrap();
        let mut matches: Vec<Horse> = records
            .values()
            .filter(|horse| match &params.name {
                Some(name) => horse.name.contains(name.as_str()),
                None => true,
            })
            .filter(|horse| params.sex.map_or(true, |sex| horse.sex == sex))
            .cloned()
            .collect();
        matches.sort_by_key(|horse| horse.id);
        if let Some(limit) = params.limit {
            matches.truncate(limit as usize);
        }
        Ok(matches)
    }
}

/// In-memory owner store capturing the payloads handed to `create`.
#[derive(Default)]
struct InMemoryOwnerGateway {
    created: Mutex<Vec<Owner>>,
}

#[async_trait]
impl OwnerGateway for InMemoryOwnerGateway {
    async fn get_all(&self) -> Result<Vec<Owner>, ServiceError> {
        Ok(self.created.lock().unwrap().clone())
    }

    async fn get_by_id(&self, _id: i64) -> Result<Owner, ServiceError> {
        Err(ServiceError::NotFound)
    }

    async fn create(&self, owner: &Owner) -> Result<Owner, ServiceError> {
        self.created.lock().unwrap().push(owner.clone());
        Ok(Owner {
            id: Some(1),
            ..owner.clone()
        })
    }
}

#[derive(Default)]
struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
struct RecordingRouter {
    navigations: Mutex<Vec<(Route, NavState)>>,
}

#[async_trait]
impl Router for RecordingRouter {
    async fn navigate_with_state(&self, target: Route, state: NavState) -> bool {
        self.navigations.lock().unwrap().push((target, state));
        true
    }
}

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mare(id: i64, name: &str) -> Horse {
    Horse {
        id: Some(id),
        name: name.to_string(),
        ..Horse::draft(date(2012, 6, 9), Sex::Female)
    }
}

fn stallion(id: i64, name: &str) -> Horse {
    Horse {
        id: Some(id),
        name: name.to_string(),
        ..Horse::draft(date(2011, 2, 20), Sex::Male)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_detail_activation_from_a_matched_route_fetches_once() {
    let gateway = Arc::new(InMemoryHorseGateway::with_records(vec![mare(1, "Bella")]));
    let router = Arc::new(RecordingRouter::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut detail = HorseDetailCoordinator::new(
        Arc::clone(&gateway) as Arc<dyn HorseGateway>,
        Arc::clone(&router) as Arc<dyn Router>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    );

    let RouteMatch::HorseDetail { raw_id } = resolve("/horses/1") else {
        panic!("route must match the detail view");
    };
    detail.activate(Some(&raw_id)).await;

    assert!(matches!(detail.state(), DetailState::Loaded(h) if h.name == "Bella"));
    assert_eq!(gateway.get_calls.lock().unwrap().as_slice(), &[1]);
}

#[tokio::test]
async fn test_non_numeric_route_parameter_redirects_without_any_fetch() {
    let gateway = Arc::new(InMemoryHorseGateway::with_records(vec![mare(1, "Bella")]));
    let router = Arc::new(RecordingRouter::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut detail = HorseDetailCoordinator::new(
        Arc::clone(&gateway) as Arc<dyn HorseGateway>,
        Arc::clone(&router) as Arc<dyn Router>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    );

    let RouteMatch::HorseDetail { raw_id } = resolve("/horses/bella") else {
        panic!("route must match the detail view");
    };
    detail.activate(Some(&raw_id)).await;

    assert!(gateway.get_calls.lock().unwrap().is_empty());
    assert_eq!(
        router.navigations.lock().unwrap().as_slice(),
        &[(Route::HorseList, NavState::default())]
    );
}

#[tokio::test]
async fn test_delete_flow_ends_on_the_list_view_with_the_banner() {
    let gateway = Arc::new(InMemoryHorseGateway::with_records(vec![
        mare(1, "Bella"),
        stallion(2, "Thunder"),
    ]));
    let router = Arc::new(RecordingRouter::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut detail = HorseDetailCoordinator::new(
        Arc::clone(&gateway) as Arc<dyn HorseGateway>,
        Arc::clone(&router) as Arc<dyn Router>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    );
    let mut list = HorseListCoordinator::new(
        Arc::clone(&gateway) as Arc<dyn HorseGateway>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    );

    detail.activate(Some("1")).await;
    detail.delete(1).await;

    // One success toast, one navigation carrying the transient state.
    assert_eq!(notifier.successes.lock().unwrap().len(), 1);
    let navigations = router.navigations.lock().unwrap().clone();
    assert_eq!(navigations, vec![(Route::HorseList, NavState { deleted: true })]);

    // The dispatch loop activates the list with that state.
    let (_, state) = navigations[0];
    list.activate(state).await;
    assert!(list.deleted_banner());
    assert_eq!(list.listed().len(), 1);
    assert_eq!(list.listed()[0].name, "Thunder");
}

#[tokio::test]
async fn test_parent_searches_delegate_to_the_generic_search() {
    let gateway = InMemoryHorseGateway::with_records(vec![
        mare(1, "Bella"),
        mare(2, "Bellatrix"),
        stallion(3, "Bellman"),
    ]);

    let mothers = gateway.search_by_mother_name("Bell", 5).await.unwrap();
    let names: Vec<&str> = mothers.iter().map(|horse| horse.name.as_str()).collect();
    assert_eq!(names, vec!["Bella", "Bellatrix"]);

    let fathers = gateway.search_by_father_name("Bell", 1).await.unwrap();
    assert_eq!(fathers.len(), 1);
    assert_eq!(fathers[0].name, "Bellman");

    // The provided wrappers must have gone through the generic primitive
    // with the fixed-sex parameter sets.
    let calls = gateway.search_calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], HorseSearchParams::mother_candidates("Bell", 5));
    assert_eq!(calls[1], HorseSearchParams::father_candidates("Bell", 1));
}

#[tokio::test]
async fn test_create_then_edit_round_trip() {
    let gateway = Arc::new(InMemoryHorseGateway::default());
    let router = Arc::new(RecordingRouter::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut form_view = HorseCreateEditCoordinator::new(
        Arc::clone(&gateway) as Arc<dyn HorseGateway>,
        Arc::clone(&router) as Arc<dyn Router>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        5,
    );

    // Create.
    let RouteMatch::HorseCreateEdit { mode, raw_id } = resolve("/horses/create") else {
        panic!("route must match the create/edit view");
    };
    form_view.activate(mode, raw_id.as_deref()).await;
    assert_eq!(form_view.mode(), CreateEditMode::Create);
    form_view.draft_mut().name = "Bella".to_string();
    form_view.draft_mut().sex = Sex::Female;
    form_view.submit(&HorseForm::completed()).await;

    let created_id = {
        let records = gateway.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        *records.keys().next().unwrap()
    };

    // Edit the record we just created, via its edit route.
    let path = Route::HorseEdit(created_id).path();
    let RouteMatch::HorseCreateEdit { mode, raw_id } = resolve(&path) else {
        panic!("route must match the create/edit view");
    };
    form_view.activate(mode, raw_id.as_deref()).await;
    assert_eq!(form_view.mode(), CreateEditMode::Edit);
    assert_eq!(form_view.draft().name, "Bella");
    form_view.draft_mut().description = Some("gentle".to_string());
    form_view.submit(&HorseForm::completed()).await;

    let records = gateway.records.lock().unwrap();
    assert_eq!(
        records[&created_id].description.as_deref(),
        Some("gentle")
    );
    // Both submits notified success and navigated to the list.
    assert_eq!(notifier.successes.lock().unwrap().len(), 2);
    assert_eq!(router.navigations.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_owner_create_flow_omits_the_blank_email() {
    let gateway = Arc::new(InMemoryOwnerGateway::default());
    let router = Arc::new(RecordingRouter::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut owner_create = OwnerCreateCoordinator::new(
        Arc::clone(&gateway) as Arc<dyn OwnerGateway>,
        Arc::clone(&router) as Arc<dyn Router>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    );

    owner_create.draft_mut().first_name = "Wendy".to_string();
    owner_create.draft_mut().last_name = "Smith".to_string();
    // The email field was left blank.
    assert_eq!(owner_create.draft().email.as_deref(), Some(""));
    owner_create.submit(&OwnerForm::completed()).await;

    let created = gateway.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].email, None);
    let json = serde_json::to_value(&created[0]).unwrap();
    assert!(!json.as_object().unwrap().contains_key("email"));

    assert_eq!(
        router.navigations.lock().unwrap().as_slice(),
        &[(Route::OwnerList, NavState::default())]
    );
    assert_eq!(notifier.successes.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unmatched_paths_fall_back_to_the_horse_list() {
    assert_eq!(resolve("/"), RouteMatch::Redirect(Route::HorseList));
    assert_eq!(resolve("/barn/7"), RouteMatch::Redirect(Route::HorseList));
    assert_eq!(
        resolve("/owners/7/edit"),
        RouteMatch::Redirect(Route::HorseList)
    );
}
