//! Boot splash and sign-in screens shown before the desktop.

use std::time::Duration;

use desktop_runtime::ShellRoute;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use platform_host::ClockSnapshot;

const SCREEN_BACKGROUND: &str = "#0D111D";
const BRAND_ACCENT: &str = "#77C8B7";
const MUTED_TEXT: &str = "#6D737B";
const SPLASH_FADE_AFTER: Duration = Duration::from_millis(2500);
const SPLASH_LEAVE_AFTER: Duration = Duration::from_millis(3000);

const SYSTEM_INFO: [(&str, &str); 2] = [("OS", "WAVEos"), ("Version", "1.5")];

/// Returns the time-of-day greeting for a local hour in `0..=23`.
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning, User"
    } else if hour < 18 {
        "Good Afternoon, User"
    } else {
        "Good Evening, User"
    }
}

#[component]
pub fn SplashScreen() -> impl IntoView {
    let navigate = use_navigate();
    let fading = create_rw_signal(false);

    if let Ok(handle) = set_timeout_with_handle(move || fading.set(true), SPLASH_FADE_AFTER) {
        on_cleanup(move || handle.clear());
    }
    if let Ok(handle) = set_timeout_with_handle(
        move || navigate(ShellRoute::Startup.path(), NavigateOptions::default()),
        SPLASH_LEAVE_AFTER,
    ) {
        on_cleanup(move || handle.clear());
    }

    view! {
        <section
            class="boot-screen splash"
            style=move || {
                format!(
                    "background:{SCREEN_BACKGROUND};opacity:{};transition:opacity 500ms;",
                    if fading.get() { 0 } else { 1 }
                )
            }
        >
            <svg width="120" height="120" viewBox="0 0 120 120" fill="none" aria-hidden="true">
                <circle cx="60" cy="60" r="55" stroke=BRAND_ACCENT stroke-width="3"></circle>
                <path
                    d="M25 60 Q37.5 40 50 60 T75 60 T100 60"
                    stroke=BRAND_ACCENT
                    stroke-width="4"
                    stroke-linecap="round"
                ></path>
            </svg>
            <h1 class="splash-title">
                "WAVEos "
                <span class="splash-divider">"|"</span>
                " "
                <span class="splash-credit">"made by ch_se"</span>
            </h1>
        </section>
    }
}

#[component]
pub fn StartupScreen() -> impl IntoView {
    let navigate = use_navigate();
    let now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) =
        set_interval_with_handle(move || now.set(ClockSnapshot::now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    let sign_in = move |_: ev::MouseEvent| {
        navigate(ShellRoute::Desktop.path(), NavigateOptions::default());
    };

    view! {
        <section class="boot-screen startup" style=format!("background:{SCREEN_BACKGROUND};")>
            <div class="startup-clock">
                <time class="startup-time">{move || now.get().format_time_hms()}</time>
                <p class="startup-date" style=format!("color:{MUTED_TEXT};")>
                    {move || now.get().format_long_date()}
                </p>
            </div>

            <div class="startup-cards">
                <div class="startup-card">
                    <h2 style=format!("color:{BRAND_ACCENT};")>"System Information"</h2>
                    <dl class="startup-info" style=format!("color:{MUTED_TEXT};")>
                        {SYSTEM_INFO
                            .iter()
                            .map(|(label, value)| view! { <dt>{*label}</dt><dd>{*value}</dd> })
                            .collect_view()}
                    </dl>
                </div>

                <div class="startup-card user">
                    <div class="startup-avatar" aria-hidden="true">
                        <svg width="40" height="40" viewBox="0 0 24 24" fill="none">
                            <circle cx="12" cy="8" r="4" fill=MUTED_TEXT></circle>
                            <path
                                d="M4 20c0-4 4-6 8-6s8 2 8 6"
                                stroke=MUTED_TEXT
                                stroke-width="2"
                                stroke-linecap="round"
                            ></path>
                        </svg>
                    </div>
                    <p class="startup-greeting" style=format!("color:{MUTED_TEXT};")>
                        {move || greeting(now.get().hour())}
                    </p>
                    <button type="button" class="startup-sign-in" on:click=sign_in>
                        "Sign In"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn greeting_changes_at_noon_and_six() {
        assert_eq!(greeting(0), "Good Morning, User");
        assert_eq!(greeting(11), "Good Morning, User");
        assert_eq!(greeting(12), "Good Afternoon, User");
        assert_eq!(greeting(17), "Good Afternoon, User");
        assert_eq!(greeting(18), "Good Evening, User");
        assert_eq!(greeting(23), "Good Evening, User");
    }

    #[test]
    fn startup_card_reports_release() {
        assert_eq!(SYSTEM_INFO, [("OS", "WAVEos"), ("Version", "1.5")]);
    }
}
