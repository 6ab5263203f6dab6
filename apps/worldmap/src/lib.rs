#![cfg(target_os = "android")]
use log::LevelFilter;
use repose_platform::android::run_android_app;
use winit::platform::android::activity::AndroidApp;

mod app;
mod ui;
mod screens {
    pub mod home;
    pub mod map_search;
    pub mod onboarding;
}

#[unsafe(no_mangle)]
pub extern "C" fn android_main(android_app: AndroidApp) {
    android_logger::init_once(android_logger::Config::default().with_max_level(LevelFilter::Debug));
    let shell = match app::load_shell() {
        Ok(shell) => shell,
        Err(e) => {
            log::error!("failed to start: {e:#}");
            return;
        }
    };
    if let Err(e) = run_android_app(android_app, move |s| app::app(s, &shell)) {
        log::error!("android runner exited: {e:#}");
    }
}
