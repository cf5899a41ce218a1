mod cli;
mod config;

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = cli::run().await {
        log::error!("{err}");
        std::process::exit(1);
    }
}
