//! CLI smoke and ranking probe.
//!
//! # Responsibility
//! - Verify `roster_core` linkage without the Flutter runtime.
//! - Rank a JSON user fixture from the command line for quick local checks.
//!
//! Usage: `roster_cli [<users.json> <filter> [own_user_id]]`.
//! Set `ROSTER_LOG_DIR` to an absolute directory to enable file logging.

use log::info;
use roster_core::{AutocompleteOption, AutocompleteRanker, User, UserId, UserValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::process::ExitCode;

/// Own user id used when none is given. A fixture user with this id is
/// treated as the requester and left out of the output.
const ANONYMOUS_USER_ID: i64 = -1;

/// Errors from loading a user fixture file.
#[derive(Debug)]
enum FixtureError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidUser(UserValidationError),
    InvalidOwnUserId(String),
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read fixture: {err}"),
            Self::Json(err) => write!(f, "failed to parse fixture: {err}"),
            Self::InvalidUser(err) => write!(f, "invalid fixture user: {err}"),
            Self::InvalidOwnUserId(value) => write!(f, "own_user_id is not an integer: {value}"),
        }
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidUser(err) => Some(err),
            Self::InvalidOwnUserId(_) => None,
        }
    }
}

impl From<std::io::Error> for FixtureError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("ROSTER_LOG_DIR") {
        if let Err(err) = roster_core::init_logging(roster_core::default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.len() < 2 {
        println!("roster_core ping={}", roster_core::ping());
        println!("roster_core version={}", roster_core::core_version());
        return ExitCode::SUCCESS;
    }

    match run(&args[0], &args[1], args.get(2).map(String::as_str)) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, filter: &str, own_user_id: Option<&str>) -> Result<Vec<String>, FixtureError> {
    let own_user_id = parse_own_user_id(own_user_id)?;
    let users = load_users(Path::new(path))?;
    let ranker = AutocompleteRanker::new(own_user_id);
    let ranked = ranker.rank(&users, filter);
    info!(
        "event=cli_rank module=cli status=ok own_user_id={} users={} results={}",
        ranker.own_user_id(),
        users.len(),
        ranked.len()
    );
    Ok(ranked.iter().map(format_option).collect())
}

fn parse_own_user_id(raw: Option<&str>) -> Result<UserId, FixtureError> {
    match raw {
        None => Ok(UserId::new(ANONYMOUS_USER_ID)),
        Some(value) => value
            .trim()
            .parse::<i64>()
            .map(UserId::new)
            .map_err(|_| FixtureError::InvalidOwnUserId(value.to_string())),
    }
}

fn load_users(path: &Path) -> Result<Vec<User>, FixtureError> {
    let raw = std::fs::read_to_string(path)?;
    let users: Vec<User> = serde_json::from_str(&raw)?;
    for user in &users {
        user.validate().map_err(FixtureError::InvalidUser)?;
    }
    Ok(users)
}

fn format_option(option: &AutocompleteOption) -> String {
    match option.as_user() {
        Some(user) => format!("@{}\t{}\t{}", user.full_name, user.user_id, user.email),
        None => format!("@{}\t-\t{}", option.full_name(), option.email()),
    }
}
