use clap::Parser;
use colored::*;
use std::io::{self, BufRead, Write};
use std::process;

use jobtrack::api::ApiClient;
use jobtrack::cli::{Cli, Command};
use jobtrack::config::Config;
use jobtrack::error::{JobTrackError, Result};
use jobtrack::models::{JobStatus, Session};
use jobtrack::routes::{resolve, Screen};
use jobtrack::session::{FilesystemSessionStore, SessionStore};
use jobtrack::ui::output::{
    display_dashboard, display_error, display_jobs, display_notice, display_success,
    display_warning,
};
use jobtrack::view::{compute_view, status_of, StatusFilter};

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    if config.verbose {
        eprintln!(
            "{}",
            format!("[jobtrack] Using API at {}", config.base_url).dimmed()
        );
    }

    // The guard re-reads the store on every invocation; nothing is cached
    let store = FilesystemSessionStore::new();
    let session = store.load();

    if config.verbose {
        match &session {
            Some(s) => eprintln!(
                "{}",
                format!("[jobtrack] Session found for {}", s.email).dimmed()
            ),
            None => eprintln!("{}", "[jobtrack] No stored session".dimmed()),
        }
    }

    let requested = requested_screen(&args.command);
    let rendered = resolve(requested, session.is_some());

    if let Err(e) = dispatch(&args.command, requested, rendered, &config, &store, session).await {
        display_error(&e.to_string());
        process::exit(1);
    }
}

/// Map the CLI surface onto the logical screens the guard knows about
fn requested_screen(command: &Option<Command>) -> Screen {
    match command {
        Some(Command::Login { .. }) => Screen::Login,
        Some(Command::Signup { .. }) => Screen::Signup,
        Some(Command::Other(_)) | None => Screen::Unknown,
        // Logout and every job command belong to the dashboard
        Some(_) => Screen::Dashboard,
    }
}

async fn dispatch(
    command: &Option<Command>,
    requested: Screen,
    rendered: Screen,
    config: &Config,
    store: &FilesystemSessionStore,
    session: Option<Session>,
) -> Result<()> {
    if rendered != requested {
        match rendered {
            Screen::Login => display_notice("Not logged in, redirecting to login."),
            Screen::Dashboard => display_notice("Already logged in, showing dashboard."),
            _ => {}
        }
    }

    match rendered {
        Screen::Login => {
            if let (Screen::Login, Some(Command::Login { email, password })) =
                (requested, command)
            {
                run_login(config, store, email, password.clone()).await
            } else {
                render_login_screen();
                // The requested action never ran
                if requested == Screen::Dashboard {
                    process::exit(1);
                }
                Ok(())
            }
        }
        Screen::Signup => {
            if let Some(Command::Signup {
                name,
                email,
                password,
            }) = command
            {
                run_signup(config, store, name, email, password.clone()).await
            } else {
                render_login_screen();
                Ok(())
            }
        }
        Screen::Dashboard => {
            let client = ApiClient::new(&config.base_url, session.as_ref())?;
            match command {
                Some(Command::Logout) => run_logout(store),
                Some(Command::Dashboard { status, search }) => {
                    run_dashboard(&client, *status, search).await
                }
                Some(Command::List { status, search }) => {
                    run_list(&client, *status, search).await
                }
                Some(Command::Add {
                    company,
                    role,
                    status,
                }) => run_add(&client, company, role, *status).await,
                Some(Command::Edit {
                    id,
                    company,
                    role,
                    status,
                }) => run_edit(&client, id, company, role, *status).await,
                Some(Command::Delete { id }) => run_delete(&client, id).await,
                // Redirected here from login/signup or a catch-all route
                _ => run_dashboard(&client, StatusFilter::All, "").await,
            }
        }
        Screen::Unknown => unreachable!("resolve never yields Unknown"),
    }
}

fn render_login_screen() {
    println!("{}", "Job Tracker".bold());
    println!("Log in to see your dashboard:");
    println!("  jobtrack login <email>");
    println!("  jobtrack signup <name> <email>");
}

fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn persist_session(store: &FilesystemSessionStore, session: &Session) -> Result<()> {
    store
        .save(session)
        .map_err(|e| JobTrackError::Other(format!("Failed to store session: {}", e)))
}

async fn run_login(
    config: &Config,
    store: &FilesystemSessionStore,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password()?,
    };

    let client = ApiClient::new(&config.base_url, None)?;
    let session = client.login(email, &password).await?;
    persist_session(store, &session)?;

    display_success(&format!("Logged in as {} <{}>", session.name, session.email));
    Ok(())
}

async fn run_signup(
    config: &Config,
    store: &FilesystemSessionStore,
    name: &str,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password()?,
    };

    let client = ApiClient::new(&config.base_url, None)?;
    let session = client.register(name, email, &password).await?;
    persist_session(store, &session)?;

    display_success(&format!(
        "Account created, logged in as {} <{}>",
        session.name, session.email
    ));
    Ok(())
}

fn run_logout(store: &FilesystemSessionStore) -> Result<()> {
    store
        .clear()
        .map_err(|e| JobTrackError::Other(format!("Failed to clear session: {}", e)))?;
    display_success("Logged out.");
    display_notice("Run `jobtrack login <email>` to sign back in.");
    Ok(())
}

async fn run_dashboard(client: &ApiClient, status: StatusFilter, search: &str) -> Result<()> {
    let jobs = client.list_jobs().await?;
    let view = compute_view(&jobs, status, search);
    display_dashboard(&view);
    Ok(())
}

async fn run_list(client: &ApiClient, status: StatusFilter, search: &str) -> Result<()> {
    let jobs = client.list_jobs().await?;
    let view = compute_view(&jobs, status, search);
    display_jobs(&view.filtered);
    Ok(())
}

/// Re-fetch the whole list after a mutation and show it. A failed
/// refresh is only a warning: the mutation already took effect and the
/// user keeps whatever they last saw.
async fn refresh_jobs(client: &ApiClient) -> Result<()> {
    match client.list_jobs().await {
        Ok(jobs) => {
            let view = compute_view(&jobs, StatusFilter::All, "");
            display_jobs(&view.filtered);
        }
        Err(e) => display_warning(&format!("Failed to refresh job list: {}", e)),
    }
    Ok(())
}

async fn run_add(client: &ApiClient, company: &str, role: &str, status: JobStatus) -> Result<()> {
    let job = client.create_job(company, role, status).await?;
    display_success(&format!(
        "Added {} at {} ({}) with id {}",
        job.role, job.company, job.status, job.id
    ));
    refresh_jobs(client).await
}

async fn run_edit(
    client: &ApiClient,
    id: &str,
    company: &str,
    role: &str,
    status: Option<JobStatus>,
) -> Result<()> {
    // An omitted status keeps the job's current one, so look it up
    // before sending the replacement fields
    let status = match status {
        Some(status) => status,
        None => {
            let jobs = client.list_jobs().await?;
            status_of(&jobs, id).ok_or_else(|| JobTrackError::NotFound(id.to_string()))?
        }
    };

    let job = client.update_job(id, company, role, status).await?;
    display_success(&format!(
        "Updated {}: {} at {} ({})",
        job.id, job.role, job.company, job.status
    ));
    refresh_jobs(client).await
}

async fn run_delete(client: &ApiClient, id: &str) -> Result<()> {
    match client.delete_job(id).await {
        Ok(()) => display_success(&format!("Deleted {}", id)),
        // Already gone server-side; the effect the user wanted holds
        Err(JobTrackError::NotFound(id)) => {
            display_warning(&format!("No job found with id {}", id))
        }
        Err(e) => return Err(e),
    }
    refresh_jobs(client).await
}
