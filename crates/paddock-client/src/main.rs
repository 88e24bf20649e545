//! Paddock client entry point.
//!
//! Wires together the HTTP access services, the console notifier, and the
//! channel-backed router, then runs the dispatch loop.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ ClientConfig           -- TOML file + CLI overrides
//!  └─ HttpHorseService / HttpOwnerService
//!  └─ dispatch loop
//!       ├─ NavRequest        -> activate the matching view coordinator
//!       ├─ stdin line        -> path navigation or command
//!       └─ Ctrl-C            -> shutdown
//! ```
//!
//! Paths typed at the prompt go through the route table (`/horses`,
//! `/horses/7`, ...); everything else is a command (`delete 7`,
//! `owner Wendy Smith`, `help`).  Coordinators navigate by sending a
//! [`NavRequest`] back into the same loop, so a delete on the detail view
//! lands on the freshly activated list view with its banner.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use paddock_client::application::horse_create_edit::HorseCreateEditCoordinator;
use paddock_client::application::horse_detail::{DetailState, HorseDetailCoordinator};
use paddock_client::application::horse_list::HorseListCoordinator;
use paddock_client::application::owner_create::OwnerCreateCoordinator;
use paddock_client::application::owner_list::OwnerListCoordinator;
use paddock_client::application::{HorseGateway, NavState, Notifier, OwnerGateway, Router};
use paddock_client::domain::config::ClientConfig;
use paddock_client::domain::form::{HorseForm, OwnerForm};
use paddock_client::domain::routes::{resolve, CreateEditMode, Route, RouteMatch};
use paddock_client::infrastructure::api::{HttpHorseService, HttpOwnerService};
use paddock_client::infrastructure::nav::{ChannelRouter, NavRequest};
use paddock_client::infrastructure::notify::ConsoleNotifier;
use paddock_core::{Horse, HorseSearchParams, Sex};

/// CLI surface: `paddock-client [--config <path>] [--backend <url>] [path]`.
struct CliArgs {
    config_path: Option<PathBuf>,
    backend_override: Option<String>,
    start_path: String,
}

fn parse_args() -> CliArgs {
    let mut args = std::env::args().skip(1);
    let mut cli = CliArgs {
        config_path: None,
        backend_override: None,
        start_path: "/".to_string(),
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => cli.config_path = args.next().map(PathBuf::from),
            "--backend" => cli.backend_override = args.next(),
            path => cli.start_path = path.to_string(),
        }
    }
    cli
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    let mut config = match &cli.config_path {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(backend) = cli.backend_override {
        config.backend_url = backend;
    }

    // Initialise structured logging.  RUST_LOG wins over the config file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone())),
        )
        .init();

    info!(backend = %config.backend_url, "Paddock client starting");

    // ── Services and collaborators ────────────────────────────────────────────
    let http = reqwest::Client::new();
    let horses: Arc<dyn HorseGateway> =
        Arc::new(HttpHorseService::new(http.clone(), &config.backend_url));
    let owners: Arc<dyn OwnerGateway> = Arc::new(HttpOwnerService::new(http, &config.backend_url));
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

    let (nav_tx, mut nav_rx) = mpsc::unbounded_channel::<NavRequest>();
    let router: Arc<dyn Router> = Arc::new(ChannelRouter::new(nav_tx));

    let mut shell = Shell::new(horses, owners, router, notifier, config.suggestion_limit);

    // Seed the initial navigation from the CLI path (defaults to "/",
    // which the table redirects to the horse list).
    shell.open(&cli.start_path).await;
    print_help();

    // ── Dispatch loop ─────────────────────────────────────────────────────────
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(request) = nav_rx.recv() => {
                shell.activate(request).await;
            }
            line = lines.next_line() => match line? {
                Some(line) => {
                    if !shell.handle_command(line.trim()).await {
                        break;
                    }
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
        }
    }

    info!("Paddock client stopped");
    Ok(())
}

/// The interactive shell: one coordinator per view plus command parsing.
struct Shell {
    list: HorseListCoordinator,
    detail: HorseDetailCoordinator,
    create_edit: HorseCreateEditCoordinator,
    owner_create: OwnerCreateCoordinator,
    owner_list: OwnerListCoordinator,
}

impl Shell {
    fn new(
        horses: Arc<dyn HorseGateway>,
        owners: Arc<dyn OwnerGateway>,
        router: Arc<dyn Router>,
        notifier: Arc<dyn Notifier>,
        suggestion_limit: u32,
    ) -> Self {
        Self {
            list: HorseListCoordinator::new(Arc::clone(&horses), Arc::clone(&notifier)),
            detail: HorseDetailCoordinator::new(
                Arc::clone(&horses),
                Arc::clone(&router),
                Arc::clone(&notifier),
            ),
            create_edit: HorseCreateEditCoordinator::new(
                Arc::clone(&horses),
                Arc::clone(&router),
                Arc::clone(&notifier),
                suggestion_limit,
            ),
            owner_create: OwnerCreateCoordinator::new(
                Arc::clone(&owners),
                Arc::clone(&router),
                Arc::clone(&notifier),
            ),
            owner_list: OwnerListCoordinator::new(owners, notifier),
        }
    }

    /// Navigates to a raw path through the route table.
    async fn open(&mut self, path: &str) {
        match resolve(path) {
            RouteMatch::HorseList => {
                self.list.activate(NavState::default()).await;
                self.render_list();
            }
            RouteMatch::HorseDetail { raw_id } => {
                self.detail.activate(Some(&raw_id)).await;
                self.render_detail();
            }
            RouteMatch::HorseCreateEdit { mode, raw_id } => {
                self.create_edit.activate(mode, raw_id.as_deref()).await;
                self.render_form();
            }
            RouteMatch::OwnerList => {
                self.owner_list.activate().await;
                self.render_owner_list();
            }
            RouteMatch::OwnerCreate => {
                println!("Owner create form. Submit with: owner <first> <last> [email]");
            }
            RouteMatch::Redirect(route) => {
                self.activate(NavRequest {
                    route,
                    state: NavState::default(),
                })
                .await;
            }
        }
    }

    /// Activates the view a typed navigation request names.
    async fn activate(&mut self, request: NavRequest) {
        match request.route {
            Route::HorseList => {
                self.list.activate(request.state).await;
                self.render_list();
            }
            Route::HorseDetail(id) => {
                self.detail.activate(Some(&id.to_string())).await;
                self.render_detail();
            }
            Route::HorseCreate => {
                self.create_edit.activate(CreateEditMode::Create, None).await;
                self.render_form();
            }
            Route::HorseEdit(id) => {
                self.create_edit
                    .activate(CreateEditMode::Edit, Some(&id.to_string()))
                    .await;
                self.render_form();
            }
            Route::OwnerList => {
                self.owner_list.activate().await;
                self.render_owner_list();
            }
            Route::OwnerCreate => {
                println!("Owner create form. Submit with: owner <first> <last> [email]");
            }
        }
    }

    /// Handles one prompt line.  Returns `false` to leave the loop.
    async fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return true;
        };

        match head {
            "quit" | "exit" => return false,
            "help" => print_help(),
            path if path.starts_with('/') => self.open(path).await,
            "delete" => match parts.next().and_then(|raw| raw.parse::<i64>().ok()) {
                Some(id) => self.detail.delete(id).await,
                None => println!("usage: delete <id>"),
            },
            "search" => {
                let fragment = parts.collect::<Vec<_>>().join(" ");
                let params = HorseSearchParams {
                    name: (!fragment.is_empty()).then_some(fragment),
                    ..HorseSearchParams::default()
                };
                self.list.search(&params).await;
                self.render_list();
            }
            "mothers" | "fathers" => {
                let fragment = parts.collect::<Vec<_>>().join(" ");
                let suggestions = if head == "mothers" {
                    self.create_edit.suggest_mothers(&fragment).await
                } else {
                    self.create_edit.suggest_fathers(&fragment).await
                };
                for horse in &suggestions {
                    println!("  {}", describe(horse));
                }
                if suggestions.is_empty() {
                    println!("  (no candidates)");
                }
            }
            "mother" | "father" => {
                let parent = match self.detail.state() {
                    DetailState::Loaded(horse) => {
                        if head == "mother" {
                            horse.mother.clone()
                        } else {
                            horse.father.clone()
                        }
                    }
                    _ => None,
                };
                match parent {
                    Some(parent) => self.detail.go_to_horse(&parent).await,
                    None => println!("no {head} recorded for the shown horse"),
                }
            }
            "horse" => self.submit_horse(line).await,
            "owner" => self.submit_owner(line).await,
            other => println!("unknown command '{other}'; type help"),
        }
        true
    }

    /// `horse <name> <FEMALE|MALE> <yyyy-mm-dd> [description..]`
    async fn submit_horse(&mut self, line: &str) {
        let mut parts = line.split_whitespace().skip(1);
        let (Some(name), Some(raw_sex), Some(raw_date)) =
            (parts.next(), parts.next(), parts.next())
        else {
            println!("usage: horse <name> <FEMALE|MALE> <yyyy-mm-dd> [description]");
            return;
        };
        let Some(sex) = parse_sex(raw_sex) else {
            println!("sex must be FEMALE or MALE");
            return;
        };
        let Ok(date_of_birth) = raw_date.parse::<chrono::NaiveDate>() else {
            println!("date of birth must be yyyy-mm-dd");
            return;
        };
        let description = parts.collect::<Vec<_>>().join(" ");

        // An open edit form keeps its fetched horse; anything else starts a
        // fresh create draft.
        if self.create_edit.mode() == CreateEditMode::Create {
            self.create_edit.activate(CreateEditMode::Create, None).await;
        }
        let draft = self.create_edit.draft_mut();
        draft.name = name.to_string();
        draft.sex = sex;
        draft.date_of_birth = date_of_birth;
        draft.description = (!description.is_empty()).then_some(description);
        self.create_edit.submit(&HorseForm::completed()).await;
    }

    /// `owner <first> <last> [email]`
    async fn submit_owner(&mut self, line: &str) {
        let mut parts = line.split_whitespace().skip(1);
        let (Some(first_name), Some(last_name)) = (parts.next(), parts.next()) else {
            println!("usage: owner <first> <last> [email]");
            return;
        };

        let draft = self.owner_create.draft_mut();
        draft.first_name = first_name.to_string();
        draft.last_name = last_name.to_string();
        draft.email = Some(parts.next().unwrap_or_default().to_string());
        self.owner_create.submit(&OwnerForm::completed()).await;
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    fn render_list(&self) {
        if self.list.deleted_banner() {
            println!("-- horse deleted --");
        }
        println!("Horses ({}):", self.list.listed().len());
        for horse in self.list.listed() {
            println!("  {}", describe(horse));
        }
    }

    fn render_detail(&self) {
        match self.detail.state() {
            DetailState::Loading => println!("(no horse shown)"),
            DetailState::Failed => println!("(failed to load horse)"),
            DetailState::Loaded(horse) => {
                println!("{}", describe(horse));
                let owner = HorseDetailCoordinator::format_owner_name(horse.owner.as_ref());
                if !owner.is_empty() {
                    println!("  owner:  {owner}");
                }
                if let Some(description) = &horse.description {
                    println!("  about:  {description}");
                }
                if let Some(mother) = &horse.mother {
                    println!("  mother: {} (open with: mother)", mother.name);
                }
                if let Some(father) = &horse.father {
                    println!("  father: {} (open with: father)", father.name);
                }
            }
        }
    }

    fn render_form(&self) {
        let mode = match self.create_edit.mode() {
            CreateEditMode::Create => "create",
            CreateEditMode::Edit => "edit",
        };
        let draft = self.create_edit.draft();
        println!(
            "Horse {mode} form: name='{}' sex={} born={}",
            draft.name,
            draft.sex.as_param(),
            draft.date_of_birth
        );
        println!("Submit with: horse <name> <FEMALE|MALE> <yyyy-mm-dd> [description]");
    }

    fn render_owner_list(&self) {
        println!("Owners ({}):", self.owner_list.listed().len());
        for owner in self.owner_list.listed() {
            let id = owner.id.map(|id| id.to_string()).unwrap_or_default();
            let email = owner.email.as_deref().unwrap_or("-");
            println!("  #{id} {} {} <{email}>", owner.first_name, owner.last_name);
        }
    }
}

fn describe(horse: &Horse) -> String {
    let id = horse.id.map(|id| id.to_string()).unwrap_or_default();
    format!(
        "#{id} {} ({}, born {})",
        horse.name,
        horse.sex.as_param(),
        horse.date_of_birth
    )
}

fn parse_sex(raw: &str) -> Option<Sex> {
    match raw.to_ascii_uppercase().as_str() {
        "FEMALE" => Some(Sex::Female),
        "MALE" => Some(Sex::Male),
        _ => None,
    }
}

fn print_help() {
    println!("Navigate with a path: /horses, /horses/7, /horses/create, /horses/7/edit, /owners");
    println!("Commands: search <name>, delete <id>, mother, father, mothers <name>, fathers <name>,");
    println!("          horse <name> <FEMALE|MALE> <yyyy-mm-dd> [description], owner <first> <last> [email],");
    println!("          help, quit");
}
