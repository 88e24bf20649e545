//! The static route table.
//!
//! Two types cover the two directions of navigation:
//!
//! - [`Route`] is the typed *outbound* target: coordinators navigate by
//!   constructing a variant, and each variant renders its canonical path.
//!   A malformed outbound path is unrepresentable.
//!
//! - [`resolve`] is the *inbound* matcher: it maps a raw path onto a
//!   [`RouteMatch`], binding the `:id` segment as an unparsed string and
//!   carrying the create/edit mode as static route data.  Validating a
//!   bound parameter is the activated coordinator's job, so a path like
//!   `/horses/abc` still activates the detail view, which then redirects.
//!
//! Table:
//!
//! | Path                | Match                                   |
//! |---------------------|-----------------------------------------|
//! | `/`                 | redirect to `/horses`                   |
//! | `/horses`           | horse list                              |
//! | `/horses/create`    | create/edit view, mode = Create         |
//! | `/horses/:id/edit`  | create/edit view, mode = Edit, `:id`    |
//! | `/horses/:id`       | horse detail, `:id`                     |
//! | `/owners`           | owner list                              |
//! | `/owners/create`    | owner create                            |
//! | anything else       | redirect to `/horses`                   |

/// Whether the create/edit view creates a new horse or edits an existing
/// one.  Carried as static route data so the view never parses the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateEditMode {
    Create,
    Edit,
}

/// A typed navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    HorseList,
    HorseDetail(i64),
    HorseCreate,
    HorseEdit(i64),
    OwnerList,
    OwnerCreate,
}

impl Route {
    /// The canonical path for this target.
    pub fn path(&self) -> String {
        match self {
            Route::HorseList => "/horses".to_string(),
            Route::HorseDetail(id) => format!("/horses/{id}"),
            Route::HorseCreate => "/horses/create".to_string(),
            Route::HorseEdit(id) => format!("/horses/{id}/edit"),
            Route::OwnerList => "/owners".to_string(),
            Route::OwnerCreate => "/owners/create".to_string(),
        }
    }
}

/// Outcome of matching a path against the route table.
///
/// Route parameters stay raw strings here; coordinators validate them on
/// activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    HorseList,
    HorseDetail {
        raw_id: String,
    },
    HorseCreateEdit {
        mode: CreateEditMode,
        /// Bound `:id` in Edit mode; `None` in Create mode.
        raw_id: Option<String>,
    },
    OwnerList,
    OwnerCreate,
    /// The path did not name a view; navigation falls back to this target.
    Redirect(Route),
}

/// Matches a path against the route table.
///
/// Leading/trailing slashes and surrounding whitespace are ignored, so
/// `/horses/`, `horses`, and ` /horses ` all name the list view.
pub fn resolve(path: &str) -> RouteMatch {
    let segments: Vec<&str> = path
        .trim()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => RouteMatch::Redirect(Route::HorseList),
        ["horses"] => RouteMatch::HorseList,
        ["horses", "create"] => RouteMatch::HorseCreateEdit {
            mode: CreateEditMode::Create,
            raw_id: None,
        },
        ["horses", raw_id, "edit"] => RouteMatch::HorseCreateEdit {
            mode: CreateEditMode::Edit,
            raw_id: Some((*raw_id).to_string()),
        },
        ["horses", raw_id] => RouteMatch::HorseDetail {
            raw_id: (*raw_id).to_string(),
        },
        ["owners"] => RouteMatch::OwnerList,
        ["owners", "create"] => RouteMatch::OwnerCreate,
        _ => RouteMatch::Redirect(Route::HorseList),
    }
}

/// Parses a bound `:id` route parameter into a valid record identifier.
///
/// Returns `None` for an absent parameter, a non-numeric string, or a
/// non-positive number.  This is the sole client-side input validation;
/// everything else is the server's job.
pub fn parse_route_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
