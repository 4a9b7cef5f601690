use std::time::Duration;

use platform_host::ClockSnapshot;

use super::*;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let palette = move || state.with(|desktop| desktop.theme.mode.palette());
    let accent = move || state.with(|desktop| desktop.theme.accent.hex());
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    // Popover surfaces stop mousedown propagation, so anything reaching the window is outside.
    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        let any_open = state.with_untracked(|desktop| {
            desktop.app_drawer_open || desktop.power_menu_open
        });
        if any_open {
            runtime.dispatch_action(DesktopAction::CloseMenus);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let drawer_open = move || state.with(|desktop| desktop.app_drawer_open);
    let power_open = move || state.with(|desktop| desktop.power_menu_open);
    let toggle_style = move |open: bool| {
        if open {
            format!("background:{};", palette().hover)
        } else {
            "background:transparent;".to_string()
        }
    };
    let menu_style = move || {
        format!(
            "background:{};border:1px solid {};color:{};",
            palette().menu,
            palette().border,
            palette().text
        )
    };

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
            style=move || format!(
                "height:{TASKBAR_HEIGHT_PX}px;background:{};border-top:1px solid {};color:{};",
                palette().desktop,
                palette().border,
                palette().text
            )
        >
            <div class="taskbar-left" on:mousedown=move |ev| stop_mouse_event(&ev)>
                <button
                    type="button"
                    class="taskbar-drawer-toggle"
                    aria-label="All apps"
                    aria-expanded=move || drawer_open().to_string()
                    style=move || toggle_style(drawer_open())
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleAppDrawer)
                >
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke=accent stroke-width="2" aria-hidden="true">
                        <rect x="3" y="3" width="7" height="7" rx="1"></rect>
                        <rect x="14" y="3" width="7" height="7" rx="1"></rect>
                        <rect x="3" y="14" width="7" height="7" rx="1"></rect>
                        <rect x="14" y="14" width="7" height="7" rx="1"></rect>
                    </svg>
                </button>
                <Show when=drawer_open fallback=|| ()>
                    <div class="taskbar-popover app-drawer" role="menu" style=menu_style>
                        <p class="app-drawer-heading">"All Apps"</p>
                        <For each=catalog::launcher_apps key=|app_id| *app_id let:app_id>
                            <button
                                type="button"
                                class="app-drawer-item"
                                role="menuitem"
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::Launch {
                                        app_id: app_id.as_str().to_string(),
                                    })
                                }
                            >
                                <AppGlyph app_id=app_id size=20 />
                                <span>{app_id.title()}</span>
                            </button>
                        </For>
                    </div>
                </Show>
            </div>

            <div class="taskbar-pinned">
                <For each=catalog::launcher_apps key=|app_id| *app_id let:app_id>
                    <PinnedAppButton app_id=app_id />
                </For>
            </div>

            <div class="taskbar-tray">
                <svg width="18" height="18" viewBox="0 0 24 24" fill="none" aria-label="Wi-Fi connected" role="img">
                    <path d="M5 12.55a11 11 0 0 1 14.08 0" stroke=move || palette().text stroke-width="2" stroke-linecap="round"></path>
                    <path d="M1.42 9a16 16 0 0 1 21.16 0" stroke=move || palette().text stroke-width="2" stroke-linecap="round" opacity="0.5"></path>
                    <path d="M8.53 16.11a6 6 0 0 1 6.95 0" stroke=move || palette().text stroke-width="2" stroke-linecap="round"></path>
                    <circle cx="12" cy="20" r="1" fill=move || palette().text></circle>
                </svg>
                <svg width="24" height="18" viewBox="0 0 28 16" fill="none" aria-label="Battery" role="img">
                    <rect x="1" y="1" width="22" height="14" rx="3" stroke=move || palette().text stroke-width="2"></rect>
                    <rect x="3" y="3" width="16" height="10" rx="1" fill=accent></rect>
                    <rect x="24" y="5" width="3" height="6" rx="1" fill=move || palette().text></rect>
                </svg>
                <time class="taskbar-clock">{move || clock_now.get().format_time_hm()}</time>

                <div class="taskbar-power" on:mousedown=move |ev| stop_mouse_event(&ev)>
                    <button
                        type="button"
                        aria-label="Power"
                        aria-expanded=move || power_open().to_string()
                        style=move || toggle_style(power_open())
                        on:click=move |_| runtime.dispatch_action(DesktopAction::TogglePowerMenu)
                    >
                        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke=move || palette().text stroke-width="2" aria-hidden="true">
                            <path d="M18.36 6.64a9 9 0 1 1-12.73 0"></path>
                            <line x1="12" y1="2" x2="12" y2="12"></line>
                        </svg>
                    </button>
                    <Show when=power_open fallback=|| ()>
                        <div class="taskbar-popover power-menu" role="menu" style=menu_style>
                            <button
                                type="button"
                                role="menuitem"
                                on:click=move |_| runtime.dispatch_action(DesktopAction::SignOut)
                            >
                                "Sign Out"
                            </button>
                            <button
                                type="button"
                                role="menuitem"
                                class="power-off"
                                on:click=move |_| runtime.dispatch_action(DesktopAction::PowerOff)
                            >
                                "Power Off"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn PinnedAppButton(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let is_open = move || state.with(|desktop| desktop.windows.is_open(app_id));

    view! {
        <button
            type="button"
            class=move || if is_open() { "taskbar-app open" } else { "taskbar-app" }
            title=app_id.title()
            aria-pressed=move || is_open().to_string()
            style=move || {
                if is_open() {
                    format!("background:{};", state.with(|d| d.theme.mode.palette().hover))
                } else {
                    "background:transparent;".to_string()
                }
            }
            on:click=move |_| {
                runtime.dispatch_action(DesktopAction::Launch {
                    app_id: app_id.as_str().to_string(),
                })
            }
        >
            <AppGlyph app_id=app_id size=20 />
            <Show when=is_open fallback=|| ()>
                <span
                    class="taskbar-app-indicator"
                    aria-hidden="true"
                    style=move || format!("background:{};", state.with(|d| d.theme.accent.hex()))
                ></span>
            </Show>
        </button>
    }
}
