//! Built-in app registry mapping catalog ids to mountable app modules.

use desktop_app_contract::{AppModule, AppMountContext, AppServices};
use leptos::View;

use crate::{catalog, model::AppId};

fn app_module(app_id: AppId) -> AppModule {
    match app_id {
        AppId::Settings => AppModule::new(desktop_app_settings::mount),
        AppId::Files => AppModule::new(desktop_app_files::mount),
        AppId::Browser => AppModule::new(desktop_app_browser::mount),
    }
}

/// Mounts the body of `app_id`'s window.
pub fn render_window_contents(app_id: AppId, services: AppServices) -> View {
    app_module(app_id).mount(AppMountContext {
        app_id: app_id.as_str(),
        services,
    })
}

/// Icon token declared by the app manifest.
pub fn app_icon(app_id: AppId) -> &'static str {
    catalog::manifest(app_id).icon.as_str()
}
