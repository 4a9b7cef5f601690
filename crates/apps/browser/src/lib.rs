//! Sandboxed browser app: address bar, history navigation, and disguised-tab hand-off.

pub mod engine;

use desktop_app_contract::{AppMountContext, AppServices};
use leptos::*;
use platform_host::CONTENT_FRAME_SANDBOX;

pub use engine::{
    resolve_address, BrowserSession, LoadPhase, LoadRequest, NavigationHistory, LOAD_DELAY,
    SEARCH_ENDPOINT,
};

/// Mounts the browser app into a runtime window body.
pub fn mount(context: AppMountContext) -> View {
    view! { <BrowserApp services=context.services /> }.into_view()
}

#[component]
/// Browser window body.
pub fn BrowserApp(services: AppServices) -> impl IntoView {
    let session = create_rw_signal(BrowserSession::default());
    let accent = services.theme.accent;
    let palette = move || services.theme.palette();

    let schedule_finish = move |request: Option<LoadRequest>| {
        if let Some(request) = request {
            set_timeout(
                move || {
                    let _ = session.try_update(BrowserSession::finish_loading);
                },
                request.delay,
            );
        }
    };

    let can_go_back = move || session.with(|s| s.history().can_go_back());
    let can_go_forward = move || session.with(|s| s.history().can_go_forward());
    let has_address = move || session.with(|s| s.current_address().is_some());
    let current_address =
        move || session.with(|s| s.current_address().map(str::to_string).unwrap_or_default());

    let open_disguised = move |_: ev::MouseEvent| {
        let target = session.with_untracked(|s| s.disguise_target().map(str::to_string));
        if let Some(target) = target {
            services.browsing.open_disguised(target);
        }
    };

    view! {
        <div
            class="app-shell app-browser-shell"
            style=move || format!("background:{};color:{};", palette().panel, palette().text)
        >
            <div
                class="app-toolbar browser-toolbar"
                style=move || format!(
                    "background:{};border-bottom:1px solid {};",
                    palette().header,
                    palette().border
                )
            >
                <button
                    type="button"
                    class="browser-nav"
                    aria-label="Back"
                    prop:disabled=move || !can_go_back()
                    on:click=move |_| {
                        schedule_finish(session.try_update(BrowserSession::back).flatten())
                    }
                >
                    "\u{2190}"
                </button>
                <button
                    type="button"
                    class="browser-nav"
                    aria-label="Forward"
                    prop:disabled=move || !can_go_forward()
                    on:click=move |_| {
                        schedule_finish(session.try_update(BrowserSession::forward).flatten())
                    }
                >
                    "\u{2192}"
                </button>
                <button
                    type="button"
                    class="browser-nav"
                    aria-label="Refresh"
                    on:click=move |_| {
                        schedule_finish(session.try_update(BrowserSession::refresh).flatten())
                    }
                >
                    "\u{21bb}"
                </button>

                <form
                    class="browser-address-form"
                    on:submit=move |ev: ev::SubmitEvent| {
                        ev.prevent_default();
                        schedule_finish(session.try_update(BrowserSession::submit).flatten());
                    }
                >
                    <div
                        class="browser-address"
                        style=move || format!(
                            "background:{};border:1px solid {};",
                            palette().input,
                            palette().border
                        )
                    >
                        <input
                            type="text"
                            class="browser-address-input"
                            placeholder="Search or enter URL"
                            aria-label="Address"
                            style=move || format!("color:{};", palette().text)
                            prop:value=move || session.with(|s| s.address_text().to_string())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                session.update(|s| s.set_address_text(text));
                            }
                        />
                        <Show when=move || session.with(BrowserSession::is_loading) fallback=|| ()>
                            <div
                                class="browser-spinner"
                                role="progressbar"
                                style=move || format!("border-color:{};", accent.get().hex())
                            ></div>
                        </Show>
                    </div>
                </form>

                <button
                    type="button"
                    class="browser-disguise"
                    prop:disabled=move || !has_address()
                    style=move || format!("background:{};color:#0C111C;", accent.get().hex())
                    on:click=open_disguised
                >
                    "Open Cloaked"
                </button>
            </div>

            <div class="browser-content">
                <Show
                    when=has_address
                    fallback=move || view! { <BrowserLanding services=services /> }
                >
                    <iframe
                        class="browser-frame"
                        title="Browser Content"
                        src=current_address
                        sandbox=CONTENT_FRAME_SANDBOX
                    ></iframe>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn BrowserLanding(services: AppServices) -> impl IntoView {
    let accent = move || services.theme.accent.get().hex();

    view! {
        <div class="browser-landing">
            <svg width="80" height="80" viewBox="0 0 120 120" fill="none" aria-hidden="true">
                <circle cx="60" cy="60" r="55" stroke=accent stroke-width="4" fill="none"></circle>
                <path
                    d="M25 60 Q35 40 45 60 Q55 80 65 60 Q75 40 85 60 Q95 80 95 60"
                    stroke=accent
                    stroke-width="6"
                    fill="none"
                    stroke-linecap="round"
                ></path>
            </svg>
            <h2>"WAVEos Browser"</h2>
            <p class="browser-landing-hint">"Enter a URL or search term above to get started"</p>
            <p class="browser-landing-note">
                "Click \"Open Cloaked\" to open in a disguised about:blank tab"
            </p>
        </div>
    }
}
