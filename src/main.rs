mod config;
mod events;
mod model;
mod ui;

fn main() -> glib::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = config::Settings::from_env();
    log::debug!("starting with {settings:?}");
    ui::run(settings)
}
