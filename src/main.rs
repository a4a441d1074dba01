use json_fetch::{FetchConfig, Fetcher, logging, output};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    logging::init();

    let config = FetchConfig::from_env();
    info!("Fetching JSON from: {}", config.url);

    // Failures are logged and printed as null; the exit status stays 0 either way.
    let data = match Fetcher::new() {
        Ok(fetcher) => fetcher.fetch(&config.url).await,
        Err(e) => {
            error!("Error: {}", e);
            None
        }
    };

    println!("{}", output::render(&data));
}
