use anyhow::Context;
use clap::Parser;
use std::future::Future;
use std::path::PathBuf;
use subway_art::config::{parse_timeout, API_URL_VAR};
use subway_art::{render, Config, Error, Gateway, MapData, Toggles, View};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Render NYC subway station art onto an interactive map page.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Artwork API base URL (defaults to $SUBWAY_ART_API_URL).
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
    /// Subway line dataset URL (defaults to $SUBWAY_ART_LINES_URL or NYC Open Data).
    #[arg(long = "lines-url", value_name = "URL")]
    lines_url: Option<String>,
    /// Skip fetching the subway line overlay.
    #[arg(long = "no-subway-lines", action = clap::ArgAction::SetTrue)]
    no_subway_lines: bool,
    /// Request timeout in seconds. Requests never time out by default.
    #[arg(long = "timeout", value_name = "SECS")]
    timeout: Option<String>,
    /// Write the page here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,
}

impl Args {
    /// Flags win over the environment read through `env`.
    fn config<F>(&self, env: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::from_lookup(|key| match (key, &self.api_url) {
            (API_URL_VAR, Some(url)) => Some(url.clone()),
            _ => env(key),
        })?;

        if let Some(url) = &self.lines_url {
            config.subway_lines_url = url.clone();
        }
        if let Some(secs) = &self.timeout {
            config.timeout = Some(parse_timeout(secs)?);
        }
        config.show_subway_lines = !self.no_subway_lines;
        Ok(config)
    }
}

/// A configuration error becomes the view without calling `fetch`.
async fn load_view<F, Fut>(config: &Result<Config, Error>, fetch: F) -> View
where
    F: FnOnce(Config) -> Fut,
    Fut: Future<Output = Result<MapData, Error>>,
{
    let result = match config {
        Ok(config) => fetch(config.clone()).await,
        Err(err) => Err(err.clone()),
    };
    View::from_result(result)
}

async fn fetch_map_data(config: Config) -> Result<MapData, Error> {
    Gateway::new(config.timeout)?.get_map_data(&config).await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Args::parse()).await {
        error!("{:?}", err);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = args.config(|key| std::env::var(key).ok());
    let api_url = config.as_ref().ok().map(|config| config.api_url.clone());

    let view = load_view(&config, fetch_map_data).await;
    let page = render::render_page(&view, &Toggles::default(), api_url.as_deref());

    match &args.output {
        Some(path) => {
            std::fs::write(path, page)
                .with_context(|| format!("could not write {}", path.display()))?;
            info!(path = %path.display(), "wrote map page");
        }
        None => print!("{}", page),
    }

    if let View::Error(message) = view {
        anyhow::bail!(message);
    }
    Ok(())
}
