use repose_platform::run_desktop_app;

mod app;
mod ui;
mod screens {
    pub mod home;
    pub mod map_search;
    pub mod onboarding;
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let shell = app::load_shell()?;
    run_desktop_app(move |s| app::app(s, &shell))
}
