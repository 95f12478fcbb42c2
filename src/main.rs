use explorer::config::settings::Settings;
use explorer::ui::app::ExplorerApp;
use explorer::ui::app_factory::ExplorerAppService;
use explorer::utils::dialogs::popup_error_and_exit;
use tracing::info;

fn main() -> iced::Result {
    let settings = Settings::load().unwrap_or_else(|error| popup_error_and_exit(error));
    let level = settings
        .log_level()
        .unwrap_or_else(|error| popup_error_and_exit(error));
    tracing_subscriber::fmt().with_max_level(level).init();

    info!(endpoint = %settings.azure.endpoint, "starting explorer");
    let service =
        ExplorerAppService::create(settings).unwrap_or_else(|error| popup_error_and_exit(error));

    iced::application(
        move || ExplorerApp::new(service.clone()),
        ExplorerApp::update,
        ExplorerApp::view,
    )
    .title(ExplorerApp::title)
    .window(ExplorerApp::window())
    .run()
}
