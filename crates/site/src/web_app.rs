use desktop_runtime::{DesktopProvider, DesktopShell, ShellRoute};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

use crate::screens::{SplashScreen, StartupScreen};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="WAVEos" />
        <Meta name="description" content="A simulated desktop operating system in the browser." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path=ShellRoute::Splash.path() view=SplashScreen />
                    <Route path=ShellRoute::Startup.path() view=StartupScreen />
                    <Route path=ShellRoute::Desktop.path() view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
/// Desktop route. A fresh runtime is provided on every visit, so signing back in starts clean.
pub fn DesktopEntry() -> impl IntoView {
    let navigate = use_navigate();
    let leave = Callback::new(move |route: ShellRoute| {
        navigate(route.path(), NavigateOptions::default());
    });

    view! {
        <DesktopProvider host_services=build_host_services() navigate=leave>
            <DesktopShell />
        </DesktopProvider>
    }
}
