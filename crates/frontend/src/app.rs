use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("Salon admin started, API base {}", config.api_base);

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Blocking alerts (validation, save results, request failures)
    provide_context(ModalService::new());

    provide_context(config);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
