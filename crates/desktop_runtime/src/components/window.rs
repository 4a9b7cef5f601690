use super::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let record = move || state.with(|desktop| *desktop.windows.get(app_id));
    let palette = move || state.with(|desktop| desktop.theme.mode.palette());
    let is_fullscreen = move || record().is_fullscreen;

    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev)
            || state.with_untracked(|desktop| desktop.windows.get(app_id).is_fullscreen)
        {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            app_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let toggle_fullscreen = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::ToggleFullscreen { app_id })
    };
    let close =
        move |_: web_sys::MouseEvent| runtime.dispatch_action(DesktopAction::CloseWindow { app_id });

    // Mounted once per open; theme and geometry changes restyle without remounting the app.
    let body = untrack(|| apps::render_window_contents(app_id, runtime.app_services));

    view! {
        <section
            class=move || {
                if is_fullscreen() { "desktop-window fullscreen" } else { "desktop-window" }
            }
            role="dialog"
            aria-label=app_id.title()
            data-app-id=app_id.as_str()
            style=move || {
                let palette = palette();
                format!(
                    "position:absolute;{}background:{};border:1px solid {};",
                    record().frame().css(),
                    palette.window,
                    palette.border
                )
            }
        >
            <header
                class="titlebar"
                style=move || {
                    let cursor = if is_fullscreen() { "default" } else { "move" };
                    format!("border-bottom:1px solid {};cursor:{cursor};", palette().border)
                }
                on:pointerdown=begin_move
            >
                <span class="titlebar-title">{app_id.title()}</span>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        aria-label=move || {
                            if is_fullscreen() { "Exit fullscreen" } else { "Enter fullscreen" }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=toggle_fullscreen
                    >
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                            <path
                                d=move || {
                                    if is_fullscreen() {
                                        "M8 3v2a2 2 0 0 1-2 2H4M16 3v2a2 2 0 0 0 2 2h2M8 21v-2a2 2 0 0 0-2-2H4M16 21v-2a2 2 0 0 1 2-2h2"
                                    } else {
                                        "M8 3H5a2 2 0 0 0-2 2v3M21 8V5a2 2 0 0 0-2-2h-3M16 21h3a2 2 0 0 0 2-2v-3M3 16v3a2 2 0 0 0 2 2h3"
                                    }
                                }
                                stroke=move || palette().muted
                                stroke-width="2"
                                stroke-linecap="round"
                            ></path>
                        </svg>
                    </button>
                    <button
                        type="button"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=close
                    >
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                            <path
                                d="M18 6L6 18M6 6l12 12"
                                stroke=move || palette().muted
                                stroke-width="2"
                                stroke-linecap="round"
                            ></path>
                        </svg>
                    </button>
                </div>
            </header>
            <div class="window-body">
                {body}
            </div>
        </section>
    }
}
