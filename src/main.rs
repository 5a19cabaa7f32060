use bfhl_form::{cli, client, config, error, file};
use bfhl_form_common::{render_text, submit, FormState, ServerResponse};
use clap::Parser;
use cli::{Cli, Commands};
use client::HttpClassifier;
use config::Config;
use error::Result;
use log::info;

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    config.override_endpoint(cli.endpoint);
    config.validate()?;

    match cli.command {
        Commands::Submit { json, file: attachment, filters } => {
            let mut state = FormState::new();
            state.set_json_text(json);
            if let Some(path) = attachment {
                state.set_file_base64(file::encode_file(&path)?);
            }
            state.toggles = filters.toggles();

            let client = HttpClassifier::new(&config)?;
            info!("submitting to {}", client.endpoint());
            let outcome = submit(&mut state, &client).await;

            if outcome.is_ok() && state.toggles.any() {
                // レスポンスがnullの場合は警告として表示される
                let _ = state.apply_filters();
            }

            println!("{}", render_text(&state));
            outcome?;
        }

        Commands::Filter { response, filters } => {
            let content = std::fs::read_to_string(&response)?;
            let value: serde_json::Value = serde_json::from_str(&content)?;

            let mut state = FormState::new();
            state.response = ServerResponse::from_value(value);
            state.toggles = filters.toggles();

            let outcome = state.apply_filters().map(|_| ());
            println!("{}", render_text(&state));
            outcome?;
        }

        Commands::Encode { file: path } => {
            println!("{}", file::encode_file(&path)?);
        }
    }

    Ok(())
}
