use crate::domain::a001_product::ui::ProductCatalogList;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the embedded configuration to the whole app via context.
    provide_context(load_config());

    view! {
        <ProductCatalogList />
    }
}
