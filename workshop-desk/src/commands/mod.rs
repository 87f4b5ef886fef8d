//! Command dispatch
//!
//! Every command restores the persisted session first, then drives the
//! matching screen controller and prints its outcome.

mod account;
mod bookings;
mod catalog;
mod work_orders;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use shared::models::{Role, User};
use workshop_client::{AuthSession, ClientConfig, FileTokenStore, ListQuery, NetworkHttpClient, WorkshopApi};

use crate::cli::{Cli, Command, PageArgs};

pub type Session = AuthSession<NetworkHttpClient, FileTokenStore>;

pub struct Desk {
    pub session: Session,
    pub page_size: u32,
}

impl Desk {
    pub fn api(&self) -> &WorkshopApi<NetworkHttpClient> {
        self.session.api()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    /// The signed-in user, or an error telling how to sign in
    pub fn require_user(&self) -> anyhow::Result<&User> {
        match self.session.user() {
            Some(user) => Ok(user),
            None => bail!("Not signed in. Run `workshop-desk login --email <EMAIL>` first."),
        }
    }
}

pub async fn run(cli: Cli, home: PathBuf) -> anyhow::Result<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config.base_url = url;
    }
    tracing::debug!(base_url = %config.base_url, home = %home.display(), "Starting command");

    let http = config.build_http_client().context("Failed to create HTTP client")?;
    let store = FileTokenStore::new(&home);
    let mut desk = Desk {
        session: AuthSession::new(WorkshopApi::new(http), store),
        page_size: config.page_size,
    };
    desk.session.restore().await;

    match cli.command {
        Command::Login { email, password } => account::login(&mut desk, &email, password).await,
        Command::Register {
            name,
            email,
            phone,
            password,
        } => account::register(&desk, name, email, phone, password).await,
        Command::Logout => account::logout(&mut desk).await,
        Command::Whoami => account::whoami(&desk),
        Command::Profile(args) => account::profile(&mut desk, args).await,
        Command::ForgotPassword { email } => account::forgot_password(&desk, email).await,
        Command::Dashboard => account::dashboard(&desk).await,
        Command::Menu => account::menu(&desk),
        Command::Bookings(cmd) => bookings::run(&desk, cmd).await,
        Command::Vehicles(cmd) => catalog::vehicles(&desk, cmd).await,
        Command::Services(cmd) => catalog::services(&desk, cmd).await,
        Command::Users(cmd) => catalog::users(&desk, cmd).await,
        Command::WorkOrders(cmd) => work_orders::run(&desk, cmd).await,
    }
}

/// Read one line from stdin after printing `label` to stderr
pub fn prompt(label: &str) -> anyhow::Result<String> {
    eprint!("{label}: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

impl PageArgs {
    /// List query for the requested page, search text and optional filter
    pub fn query(&self, page_size: u32, filter: Option<(&str, &str)>) -> ListQuery {
        let mut query = ListQuery::new(page_size);
        if let Some(search) = &self.search {
            query.set_search(search.as_str());
        }
        if let Some((key, value)) = filter {
            query.set_filter(key, value);
        }
        // page count is unknown before the first fetch
        query.go_to(self.page, u32::MAX);
        query
    }
}
