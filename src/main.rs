use clap::Parser;
use dialoguer::Input;
use perfect_cv::{cli, client, config, error, flow, report, resume, session_store};
use cli::{Cli, Commands};
use client::ApiClient;
use config::Config;
use error::{PerfectCvError, Result};
use flow::ClientApp;
use resume::LocalFile;
use perfect_cv_common::format::{uploads_label, welcome_line};
use session_store::FileStore;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "perfect_cv=debug,info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn prompt(label: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Input::<String>::new()
            .with_prompt(label)
            .interact_text()
            .map_err(|e| PerfectCvError::Input(e.to_string())),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn show_or_edit_config(
    config: &mut Config,
    set_base_url: Option<String>,
    set_api_key: Option<String>,
    show: bool,
) -> Result<()> {
    if let Some(url) = set_base_url {
        config.set_base_url(url)?;
        println!("✔ Base URL saved");
    }
    if let Some(key) = set_api_key {
        config.set_api_key(key)?;
        println!("✔ API key saved");
    }
    if show {
        let api = config.api_config();
        println!("Settings:");
        println!("  Base URL: {}", api.base_url());
        println!("  API key: {}", if api.has_api_key() { "set" } else { "not set" });
        println!("  Config file: {}", Config::config_path()?.display());
    }
    Ok(())
}

fn open_app(config: &Config) -> Result<ClientApp<ApiClient, FileStore>> {
    let service = ApiClient::new(config.api_config())?;
    let store = FileStore::open(Config::session_path()?);
    Ok(ClientApp::launch(service, store))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut config = Config::load()?;

    match cli.command {
        Commands::Config { set_base_url, set_api_key, show } => {
            show_or_edit_config(&mut config, set_base_url, set_api_key, show)?;
        }

        Commands::Register { name, email, mobile } => {
            let mut app = open_app(&config)?;
            let name = prompt("Full name", name)?;
            let email = prompt("Email", email)?;
            let mobile = prompt("Mobile number", mobile)?;

            let participant = app.register(&name, &email, &mobile).await?;
            if let Some(notice) = app.notice() {
                println!("{}", notice);
            }
            println!("✔ {}", welcome_line(&participant.name, participant.upload_count));
        }

        Commands::Submit { resume, job_description, education, json } => {
            let mut app = open_app(&config)?;
            let job_description = job_description.resolve()?;
            let file = LocalFile::open(&resume)?;

            app.mount_home().await?;
            if !json {
                println!("Uploading {} ...", resume.display());
            }
            let result = app.submit(file, &job_description, &education).await?;

            if json {
                print_json(&result)?;
            } else {
                if let Some(message) = app.upload().success() {
                    println!("✔ {}\n", message);
                }
                print!("{}", report::score_result(&result));
                println!("\n{}", uploads_label(app.upload().upload_count()));
            }
        }

        Commands::Count => {
            let mut app = open_app(&config)?;
            let count = app.mount_home().await?;
            println!("{}", uploads_label(count));
        }

        Commands::Scores { json } => {
            let mut app = open_app(&config)?;
            let history = app.scores().await?;
            if json {
                print_json(&history)?;
            } else {
                print!("{}", report::scores(&history));
            }
        }

        Commands::Leaderboard { json } => {
            let mut app = open_app(&config)?;
            let entries = app.leaderboard().await?;
            if json {
                print_json(&entries)?;
            } else {
                print!("{}", report::leaderboard(&entries));
            }
        }

        Commands::Stats { json } => {
            let mut app = open_app(&config)?;
            let stats = app.stats().await?;
            if json {
                print_json(&stats)?;
            } else {
                print!("{}", report::stats(&stats));
            }
        }

        Commands::Health => {
            let app = open_app(&config)?;
            let status = app.health().await;
            println!("{}", report::health(status.as_ref()));
        }

        Commands::Status => {
            let app = open_app(&config)?;
            match app.session().active() {
                Some(active) => {
                    println!("Logged in as {} <{}>", active.name, active.email);
                    println!("  Participant ID: {}", active.id);
                    println!("  Session file: {}", app.session().store().path().display());
                }
                None => println!("Not logged in"),
            }
        }

        Commands::Logout => {
            let mut app = open_app(&config)?;
            let was_logged_in = app.session().is_logged_in();
            app.logout()?;
            if was_logged_in {
                println!("✔ Logged out");
            } else {
                println!("Not logged in");
            }
        }
    }

    Ok(())
}
