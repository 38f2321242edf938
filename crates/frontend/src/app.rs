use crate::config::ApiConfig;
use crate::domain::generation::ui::page::GeneratorPage;
use crate::layout::AppShell;
use crate::shared::notifications::{NotificationService, NotificationTray};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Endpoint configuration is resolved once at startup; everything that
    // talks to the backend receives it from here.
    provide_context(ApiConfig::from_build_env());

    // One notification tray shared by the submission pipeline and the
    // export actions.
    provide_context(NotificationService::new());

    view! {
        <AppShell>
            <GeneratorPage />
        </AppShell>
        <NotificationTray />
    }
}
