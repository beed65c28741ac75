//! AdminView CLI - administrative work tracking portal.

mod config;
mod render;

use std::path::PathBuf;
use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use adminview_auth::{
    default_permissions, AccessError, AccountDirectory, AccountError, AccountFilter, AccountForm,
    AuthService, Route,
};
use adminview_core::{
    AccountId, AssignmentId, Permission, Priority, Role, SessionUser, ValidationErrors, WorkItemId,
    WorkStatus,
};
use adminview_reports::{ReportService, TimeRange, WorkItemFilter, WorkItemQueries};
use adminview_storage::{JsonSessionStore, MemoryStorage, Storage};
use adminview_work::{AssignmentBoard, BasicWorkManager, WorkDraft, WorkError, WorkManager};
use config::{PortalConfig, DEFAULT_SESSION_FILE};

type Auth = AuthService<MemoryStorage, JsonSessionStore>;

#[derive(Parser)]
#[command(name = "adminview")]
#[command(about = "Administrative work tracking portal", long_about = None)]
#[command(after_help = "Records start from the bundled sample data on every run; only the login session is kept.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// File the login session is kept in
    #[arg(long, global = true, default_value = DEFAULT_SESSION_FILE)]
    session_file: PathBuf,

    /// Reference date (YYYY-MM-DD), defaults to the local date
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in
    Login {
        /// Username
        username: Option<String>,
        /// Password
        #[arg(long, default_value = "")]
        password: String,
        /// Role (collector, deptHead, endOfficeWorker)
        #[arg(long)]
        role: Option<Role>,
    },
    /// Log out
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Work overview with department and region breakdowns
    Dashboard(FilterArgs),
    /// Work items
    Work {
        #[command(subcommand)]
        command: WorkCommands,
    },
    /// Progress report
    Report {
        /// Time range (all, month, quarter, year)
        #[arg(long, default_value = "all")]
        range: TimeRange,
    },
    /// Your assignments (office workers)
    Assignments {
        #[command(subcommand)]
        command: AssignmentCommands,
    },
    /// User management (department heads)
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Search id, title, department or officer
    #[arg(long, default_value = "")]
    search: String,
    /// Department
    #[arg(long)]
    department: Option<String>,
    /// Region
    #[arg(long)]
    region: Option<String>,
    /// Status (pending, in-progress, completed)
    #[arg(long)]
    status: Option<WorkStatus>,
}

impl From<FilterArgs> for WorkItemFilter {
    fn from(args: FilterArgs) -> Self {
        WorkItemFilter {
            search: args.search,
            department: args.department,
            region: args.region,
            status: args.status,
        }
    }
}

#[derive(Subcommand)]
enum WorkCommands {
    /// List work items
    List(FilterArgs),
    /// Show one work item
    Show {
        /// Work item ID
        id: WorkItemId,
    },
    /// Departments, regions and statuses in use
    Filters,
    /// Create a work item (not saved between runs)
    Create {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        department: String,
        #[arg(long, default_value = "")]
        region: String,
        /// Officer ID, e.g. OFF003
        #[arg(long, default_value = "")]
        officer: String,
        #[arg(long)]
        priority: Option<Priority>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        status: Option<WorkStatus>,
    },
    /// Add a note (not saved between runs)
    Note {
        /// Work item ID
        id: WorkItemId,
        /// Note text
        content: String,
    },
    /// Set progress, 0-100 (not saved between runs)
    Progress {
        /// Work item ID
        id: WorkItemId,
        /// Percentage complete
        value: u32,
    },
    /// Set status (not saved between runs)
    Status {
        /// Work item ID
        id: WorkItemId,
        /// New status
        status: WorkStatus,
    },
}

#[derive(Subcommand)]
enum AssignmentCommands {
    /// List your assignments
    List,
    /// Change the status of one of your assignments (not saved between runs)
    Update {
        /// Assignment ID
        id: AssignmentId,
        /// New status
        status: WorkStatus,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// List users
    List {
        /// Search name, username or email
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        role: Option<Role>,
    },
    /// Add a user (not saved between runs)
    Add {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        full_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        department: String,
        #[arg(long)]
        role: Option<Role>,
        /// Create the account disabled
        #[arg(long)]
        inactive: bool,
        /// Permission to grant (repeatable), defaults to the role's
        #[arg(long = "permission")]
        permissions: Vec<Permission>,
    },
    /// Delete a user (not saved between runs)
    Delete {
        /// User ID, e.g. USR003
        id: AccountId,
    },
    /// Enable or disable a user (not saved between runs)
    Toggle {
        /// User ID
        id: AccountId,
    },
    /// Users per department
    Departments,
    /// Roles and their default permissions
    Roles,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = PortalConfig::new(cli.session_file, cli.today, cli.json);
    debug!(?config, "Starting");

    let storage = MemoryStorage::seeded()?;
    let mut auth = AuthService::new(storage.clone(), JsonSessionStore::new(&config.session_file));
    auth.restore().await;

    match cli.command {
        Commands::Login { username, password, role } => {
            let username = username.unwrap_or_default();
            let outcome = auth.login(&username, &password, role).await?;
            if config.json {
                render::json(&outcome.user)?;
            } else {
                println!("Welcome, {}", outcome.user.full_name);
                println!("Continue at {}", outcome.landing);
            }
        }
        Commands::Logout => {
            auth.logout().await;
            println!("Logged out");
        }
        Commands::Whoami => match auth.current() {
            Some(user) if config.json => render::json(user)?,
            Some(user) => render::session(user),
            None => println!("Not logged in"),
        },
        Commands::Dashboard(args) => {
            let user = authorize(&auth, Route::Dashboard)?;
            let reports = ReportService::new(storage);
            let filter = WorkItemFilter::from(args);
            let items = reports.search(&filter).await?;
            let agg = reports.aggregate(&filter).await?;

            if config.json {
                render::json(&serde_json::json!({ "items": items, "aggregation": agg }))?;
            } else {
                println!("Welcome, {} ({})", user.full_name, user.role.label());
                render::aggregation(&agg);
                render::work_list(&items);
            }
        }
        Commands::Work { command } => run_work(command, &config, &auth, storage).await?,
        Commands::Report { range } => {
            authorize(&auth, Route::Reports)?;
            let report = ReportService::new(storage).report(range, config.today).await?;
            if config.json {
                render::json(&report)?;
            } else {
                render::report(&report);
            }
        }
        Commands::Assignments { command } => {
            let user = authorize(&auth, Route::Assignments)?;
            let board = AssignmentBoard::new(storage);
            match command {
                AssignmentCommands::List => {
                    let mine = board.list_for(&user.username).await?;
                    if config.json {
                        render::json(&mine)?;
                    } else {
                        render::assignments(&mine);
                    }
                }
                AssignmentCommands::Update { id, status } => {
                    let updated = board.update_status(&user.username, id, status).await?;
                    println!("Assignment {} is now {}", updated.id, updated.status);
                }
            }
        }
        Commands::Users { command } => run_users(command, &config, &auth, storage).await?,
    }

    Ok(())
}

/// The logged-in user, if they may open `route`.
fn authorize(auth: &Auth, route: Route) -> Result<SessionUser> {
    auth.authorize(route).cloned().map_err(denied)
}

fn denied(err: AccessError) -> anyhow::Error {
    anyhow!("{}; go to {}", err, err.redirect())
}

fn invalid(errors: &ValidationErrors) {
    for error in errors.iter() {
        eprintln!("  {}: {}", error.field, error.message);
    }
}

async fn run_work(
    command: WorkCommands,
    config: &PortalConfig,
    auth: &Auth,
    storage: MemoryStorage,
) -> Result<()> {
    let route = match command {
        WorkCommands::Create { .. } => Route::CreateWork,
        _ => Route::Dashboard,
    };
    let user = authorize(auth, route)?;
    let reports = ReportService::new(storage.clone());

    match command {
        WorkCommands::List(args) => {
            let items = reports.search(&WorkItemFilter::from(args)).await?;
            if config.json {
                render::json(&items)?;
            } else {
                render::work_list(&items);
            }
        }
        WorkCommands::Show { id } => {
            let item = BasicWorkManager::new(storage).get_work(&id).await?;
            if config.json {
                render::json(&item)?;
            } else {
                render::work_detail(&item);
            }
        }
        WorkCommands::Filters => {
            let options = reports.options().await?;
            if config.json {
                render::json(&options)?;
            } else {
                render::filter_options(&options);
            }
        }
        WorkCommands::Create {
            title,
            department,
            region,
            officer,
            priority,
            start,
            due,
            description,
            status,
        } => {
            let officers = storage.list_officers().await?;
            let mut draft = WorkDraft::new();
            draft.title = title;
            draft.set_department(department);
            draft.region = region;
            if !officer.is_empty() {
                draft.select_officer(officer, &officers);
            }
            draft.priority = priority.unwrap_or_default();
            draft.start_date = start;
            draft.due_date = due;
            draft.description = description;
            draft.status = status.unwrap_or_default();

            let mut manager = BasicWorkManager::new(storage);
            match manager.create_work(draft, &user.username, chrono::Utc::now()).await {
                Ok(item) if config.json => render::json(&item)?,
                Ok(item) => println!("Created work item: {} - {}", item.id, item.title),
                Err(WorkError::Validation(errors)) => {
                    invalid(&errors);
                    bail!("Work item not created");
                }
                Err(e) => return Err(e.into()),
            }
        }
        WorkCommands::Note { id, content } => {
            let mut manager = BasicWorkManager::new(storage);
            let item = manager
                .add_note(&id, &user.full_name, config.today, &content)
                .await?;
            println!("Added note to {} ({} notes)", item.id, item.notes.len());
        }
        WorkCommands::Progress { id, value } => {
            let mut manager = BasicWorkManager::new(storage);
            let item = manager.set_progress(&id, value).await?;
            println!("{} is {}% complete", item.id, item.progress);
        }
        WorkCommands::Status { id, status } => {
            let mut manager = BasicWorkManager::new(storage);
            let item = manager.set_status(&id, status).await?;
            println!("{} is now {}", item.id, item.status);
        }
    }

    Ok(())
}

async fn run_users(
    command: UserCommands,
    config: &PortalConfig,
    auth: &Auth,
    storage: MemoryStorage,
) -> Result<()> {
    authorize(auth, Route::ManageUsers)?;
    let directory = AccountDirectory::new(storage.clone());

    match command {
        UserCommands::List { search, department, role } => {
            let filter = AccountFilter { search, department, role };
            let accounts = directory.list(&filter).await?;
            if config.json {
                render::json(&accounts)?;
            } else {
                render::accounts(&accounts);
            }
        }
        UserCommands::Add {
            username,
            full_name,
            email,
            department,
            role,
            inactive,
            permissions,
        } => {
            let permissions = match (permissions.is_empty(), role) {
                (true, Some(role)) => default_permissions(role),
                _ => permissions,
            };
            let form = AccountForm {
                username,
                full_name,
                email,
                department,
                role,
                is_active: !inactive,
                permissions,
            };
            match directory.create(form).await {
                Ok(account) if config.json => render::json(&account)?,
                Ok(account) => render::account(&account),
                Err(AccountError::Validation(errors)) => {
                    invalid(&errors);
                    bail!("User not created");
                }
                Err(e) => return Err(e.into()),
            }
        }
        UserCommands::Delete { id } => {
            directory.delete(&id).await?;
            println!("Deleted user {}", id);
        }
        UserCommands::Toggle { id } => {
            let account = directory.toggle_active(&id).await?;
            let state = if account.is_active { "active" } else { "inactive" };
            println!("User {} is now {}", account.id, state);
        }
        UserCommands::Departments => {
            let options = ReportService::new(storage).options().await?;
            let summaries = directory
                .departments(options.departments.iter().map(String::as_str))
                .await?;
            if config.json {
                render::json(&summaries)?;
            } else {
                render::departments(&summaries);
            }
        }
        UserCommands::Roles => render::roles(),
    }

    Ok(())
}
