//! imagelab
//! A browser application for image comparison tools, built with Dioxus

use dioxus::logger::tracing::{error, info, Level};
use navigation::{RouteTable, RouterOptions, ROUTES};
use ui::App;

fn main() {
    if let Err(err) = dioxus::logger::init(log_level()) {
        eprintln!("failed to initialise logger: {err}");
    }

    let options = router_options();

    match RouteTable::with_options(ROUTES.to_vec(), options.match_options) {
        Ok(table) => info!(routes = table.len(), base = %options.base, "route table ready"),
        Err(err) => error!(%err, "route table rejected"),
    }

    // App installs hash-fragment history from these options
    ui::configure(options);

    dioxus::LaunchBuilder::web()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

fn log_level() -> Level {
    option_env!("IMAGELAB_LOG")
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::INFO)
}

/// Router options baked in at build time
fn router_options() -> RouterOptions {
    let mut options = RouterOptions::new();
    if let Some(base) = option_env!("IMAGELAB_BASE") {
        options = options.with_base(base);
    }
    if let Some(strict) = option_env!("IMAGELAB_STRICT") {
        options = options.with_strict(matches!(strict, "1" | "true"));
    }
    options
}
