mod cli;
mod commands;
mod error;
mod logging;
mod reconcile;

fn main() {
    logging::init();

    if let Err(err) = cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
