use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Transcendence" />
        <Meta name="description" content="Desktop-style shell for the Transcendence game platform." />

        <DesktopEntry />
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let host_services = platform_host_web::build_host_services();
    view! {
        <DesktopProvider host_services=host_services>
            <DesktopShell />
        </DesktopProvider>
    }
}
