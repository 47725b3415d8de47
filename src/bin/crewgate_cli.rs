//!
//! crewgate CLI
//! ------------
//! Command-line companion for the crewgate client core: log in against a
//! deployed backend, inspect the stored session, and dry-run the navigation
//! gate for a path. The session persists in a JSON file so consecutive
//! invocations share it, like a browser tab would.

use std::env;
use std::sync::Arc;

use anyhow::{anyhow, Result};

use crewgate::api::{ApiClient, LoginRequest};
use crewgate::config::Environment;
use crewgate::error::http_error_message;
use crewgate::guards::{GuardDecision, SessionSnapshot};
use crewgate::identity::SessionStore;
use crewgate::notify::{ErrorReporter, TracingNotifier};
use crewgate::routes::authorize_navigation;
use crewgate::storage::FileStorage;

const USAGE: &str = "crewgate CLI

USAGE:
  crewgate_cli login --email ADDR --password PASS
  crewgate_cli whoami
  crewgate_cli gate PATH
  crewgate_cli logout

OPTIONS:
  --api-url URL       Backend base URL (env: CREWGATE_API_URL)
  --session-file PATH Session file (env: CREWGATE_SESSION_FILE, default .crewgate_session.json)
";

fn parse_value_arg(args: &[String], flag: &str) -> Option<String> {
    let mut i = 0;
    while i < args.len() {
        if args[i] == flag
            && i + 1 < args.len() {
                return Some(args[i + 1].clone());
            }
        i += 1;
    }
    None
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn build_session(args: &[String]) -> Result<Arc<SessionStore>> {
    let default_file = ".crewgate_session.json".to_string();
    let path = parse_value_arg(args, "--session-file")
        .or_else(|| env::var("CREWGATE_SESSION_FILE").ok())
        .unwrap_or(default_file);
    let storage = FileStorage::open(&path)?;
    Ok(Arc::new(SessionStore::new(Arc::new(storage))))
}

fn build_client(args: &[String], session: Arc<SessionStore>) -> ApiClient {
    let environment = match parse_value_arg(args, "--api-url") {
        Some(url) => Environment::with_api_url(url),
        None => Environment::from_env(),
    };
    ApiClient::new(&environment, session)
}

fn print_identity(session: &SessionStore) {
    match session.user() {
        Some(user) => {
            println!("email:            {}", user.email);
            println!("role:             {:?}", user.role);
            println!("profile complete: {}", session.profile_complete());
            if let Some(name) = user.full_name {
                println!("full name:        {}", name);
            }
            if let Some(dept) = user.department_name {
                println!("department:       {}", dept);
            }
        }
        None => println!("not logged in"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() || has_flag(&args, "--help") || has_flag(&args, "-h") {
        println!("{USAGE}");
        return Ok(());
    }

    let session = build_session(&args)?;

    match args[0].as_str() {
        "login" => {
            let email = parse_value_arg(&args, "--email")
                .ok_or_else(|| anyhow!("login requires --email"))?;
            let password = parse_value_arg(&args, "--password")
                .ok_or_else(|| anyhow!("login requires --password"))?;
            let client = build_client(&args, session.clone());
            let reporter = ErrorReporter::new(TracingNotifier);
            match client.login(&LoginRequest { email, password }).await {
                Ok(response) => {
                    session.set_session(&response.token);
                    if !session.is_logged_in() {
                        return Err(anyhow!("backend issued a token that failed to decode"));
                    }
                    println!("logged in; dashboard at {}", response.dashboard_url);
                    print_identity(&session);
                }
                Err(failure) => {
                    reporter.handle_error(&failure, "Login failed");
                    return Err(anyhow!("{}", http_error_message(&failure, "Login failed")));
                }
            }
        }
        "whoami" => print_identity(&session),
        "gate" => {
            let path = args
                .get(1)
                .filter(|p| !p.starts_with("--"))
                .ok_or_else(|| anyhow!("gate requires a path argument"))?;
            let snapshot = SessionSnapshot::of(&session);
            match authorize_navigation(&snapshot, path) {
                GuardDecision::Allow => println!("{path}: allowed"),
                GuardDecision::Redirect(target) => println!("{path}: redirect to {target}"),
            }
        }
        "logout" => {
            session.logout();
            println!("logged out");
        }
        other => {
            println!("{USAGE}");
            return Err(anyhow!("unknown command: {other}"));
        }
    }

    Ok(())
}
