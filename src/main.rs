use bounce_sim::{app, logging};

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("{err}");
    }
    if let Err(err) = app::run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
