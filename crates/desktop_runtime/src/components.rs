//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};

use crate::{
    apps, catalog,
    model::{AppId, PointerPosition, TASKBAR_HEIGHT_PX},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Full desktop surface: icons, open windows, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let palette = move || state.with(|desktop| desktop.theme.mode.palette());

    // Drag tracking lives on the root so the pointer can leave the title bar.
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.drag.is_active()) {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.drag.is_active()) {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };

    view! {
        <main
            class="desktop-shell"
            data-theme=move || state.with(|desktop| desktop.theme.mode.css_id())
            style=move || format!("background:{};color:{};", palette().desktop, palette().text)
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-icons" role="list">
                <For each=catalog::desktop_icon_apps key=|app_id| *app_id let:app_id>
                    <DesktopIcon app_id=app_id />
                </For>
            </div>

            <div class="desktop-window-layer">
                <For each=move || AppId::ALL key=|app_id| *app_id let:app_id>
                    <Show
                        when=move || state.with(|desktop| desktop.windows.is_open(app_id))
                        fallback=|| ()
                    >
                        <DesktopWindow app_id=app_id />
                    </Show>
                </For>
            </div>

            <Taskbar />
        </main>
    }
}

#[component]
fn DesktopIcon(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <button
            type="button"
            class="desktop-icon"
            role="listitem"
            on:dblclick=move |_| {
                runtime.dispatch_action(DesktopAction::Launch {
                    app_id: app_id.as_str().to_string(),
                })
            }
        >
            <span class="desktop-icon-tile" aria-hidden="true">
                <AppGlyph app_id=app_id size=28 />
            </span>
            <span
                class="desktop-icon-label"
                style=move || format!("color:{};", state.with(|d| d.theme.mode.palette().text))
            >
                {app_id.title()}
            </span>
        </button>
    }
}

#[component]
/// Accent-stroked glyph for an app, chosen by the manifest icon token.
pub(crate) fn AppGlyph(app_id: AppId, size: u32) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let accent = move || runtime.state.with(|desktop| desktop.theme.accent.hex());

    let paths = match apps::app_icon(app_id) {
        "gear" => view! {
            <circle cx="12" cy="12" r="3"></circle>
            <path d="M19.4 15a1.7 1.7 0 0 0 .3 1.8l.1.1a2 2 0 1 1-2.8 2.8l-.1-.1a1.7 1.7 0 0 0-1.8-.3 1.7 1.7 0 0 0-1 1.5V21a2 2 0 1 1-4 0v-.1a1.7 1.7 0 0 0-1.1-1.5 1.7 1.7 0 0 0-1.8.3l-.1.1a2 2 0 1 1-2.8-2.8l.1-.1a1.7 1.7 0 0 0 .3-1.8 1.7 1.7 0 0 0-1.5-1H3a2 2 0 1 1 0-4h.1a1.7 1.7 0 0 0 1.5-1.1 1.7 1.7 0 0 0-.3-1.8l-.1-.1a2 2 0 1 1 2.8-2.8l.1.1a1.7 1.7 0 0 0 1.8.3H9a1.7 1.7 0 0 0 1-1.5V3a2 2 0 1 1 4 0v.1a1.7 1.7 0 0 0 1 1.5 1.7 1.7 0 0 0 1.8-.3l.1-.1a2 2 0 1 1 2.8 2.8l-.1.1a1.7 1.7 0 0 0-.3 1.8V9a1.7 1.7 0 0 0 1.5 1H21a2 2 0 1 1 0 4h-.1a1.7 1.7 0 0 0-1.5 1z"></path>
        }
        .into_view(),
        "folder" => view! {
            <path d="M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z"></path>
        }
        .into_view(),
        "globe" => view! {
            <circle cx="12" cy="12" r="10"></circle>
            <line x1="2" y1="12" x2="22" y2="12"></line>
            <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"></path>
        }
        .into_view(),
        _ => view! { <rect x="4" y="4" width="16" height="16" rx="3"></rect> }.into_view(),
    };

    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke=accent
            stroke-width="2"
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.stop_propagation();
}
