use yeg_shadow::ui::App;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;

        let log_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("yeg_shadow=info"));
        let _ = tracing_subscriber::fmt().with_env_filter(log_filter).try_init();
    }

    #[cfg(feature = "desktop")]
    dioxus::LaunchBuilder::desktop()
        .with_cfg(yeg_shadow::ui::make_config())
        .launch(App);

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}
