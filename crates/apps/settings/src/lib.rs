//! Built-in Settings desktop app for theme mode and accent color.
//!
//! The app reads appearance through [`desktop_app_contract::ThemeService`] and sends changes back
//! as runtime commands, so every window restyles from the same desktop state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{AccentColor, AppMountContext, AppServices, ShellPalette, ThemeMode};
use leptos::*;

/// Static rows shown in the About section.
pub const ABOUT_ROWS: [(&str, &str); 3] = [
    ("OS", "WAVEos"),
    ("Version", "1.5"),
    ("Created by", "ch_se"),
];

/// Foreground used on accent-filled controls.
const ON_ACCENT_TEXT: &str = "#0C111C";

/// Mounts the settings app into a runtime window body.
pub fn mount(context: AppMountContext) -> View {
    view! { <SettingsApp services=context.services /> }.into_view()
}

fn theme_option_style(
    option: ThemeMode,
    current: ThemeMode,
    accent: AccentColor,
    palette: ShellPalette,
) -> String {
    if option == current {
        format!(
            "background:{hex};border:1px solid {hex};color:{ON_ACCENT_TEXT};",
            hex = accent.hex()
        )
    } else {
        format!(
            "background:transparent;border:1px solid {};color:{};",
            palette.border, palette.text
        )
    }
}

fn accent_swatch_style(swatch: AccentColor, current: AccentColor) -> String {
    let hex = swatch.hex();
    if swatch == current {
        format!("background:{hex};border:3px solid white;box-shadow:0 0 0 2px {hex};")
    } else {
        format!("background:{hex};border:3px solid transparent;box-shadow:none;")
    }
}

#[component]
/// Settings app window contents.
pub fn SettingsApp(
    /// Injected desktop services bundle.
    services: AppServices,
) -> impl IntoView {
    let theme = services.theme;
    let palette = move || theme.palette();
    let heading_style = move || format!("color:{};", theme.accent.get().hex());
    let label_style = move || format!("color:{};", palette().muted);

    view! {
        <div
            class="app-shell app-settings-shell"
            style=move || format!("background:{};color:{};", palette().window, palette().text)
        >
            <section class="settings-section" aria-label="Appearance">
                <h3 class="settings-heading" style=heading_style>"Appearance"</h3>

                <div class="settings-field">
                    <label class="settings-label" style=label_style>"Theme"</label>
                    <div class="settings-theme-options" role="radiogroup">
                        {[ThemeMode::Dark, ThemeMode::Light]
                            .into_iter()
                            .map(|mode| {
                                view! {
                                    <button
                                        type="button"
                                        class="settings-theme-option"
                                        role="radio"
                                        aria-checked=move || (theme.mode.get() == mode).to_string()
                                        style=move || theme_option_style(
                                            mode,
                                            theme.mode.get(),
                                            theme.accent.get(),
                                            palette(),
                                        )
                                        on:click=move |_| theme.set_mode(mode)
                                    >
                                        {mode.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="settings-field">
                    <label class="settings-label" style=label_style>"Accent Color"</label>
                    <div class="settings-accent-grid" role="radiogroup">
                        <For each=move || AccentColor::ALL key=|accent| accent.hex() let:accent>
                            <button
                                type="button"
                                class="settings-accent-swatch"
                                role="radio"
                                title=accent.name()
                                aria-label=accent.name()
                                aria-checked=move || (theme.accent.get() == accent).to_string()
                                style=move || accent_swatch_style(accent, theme.accent.get())
                                on:click=move |_| theme.set_accent(accent)
                            ></button>
                        </For>
                    </div>
                </div>
            </section>

            <section class="settings-section" aria-label="About">
                <h3 class="settings-heading" style=heading_style>"About"</h3>
                <dl class="settings-about">
                    {ABOUT_ROWS
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="settings-about-row">
                                    <dt style=label_style>{label}</dt>
                                    <dd>{value}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_theme_option_is_accent_filled() {
        let style = theme_option_style(
            ThemeMode::Light,
            ThemeMode::Light,
            AccentColor::Blue,
            ThemeMode::Light.palette(),
        );
        assert_eq!(
            style,
            "background:#5B9BD5;border:1px solid #5B9BD5;color:#0C111C;"
        );
    }

    #[test]
    fn unselected_theme_option_uses_palette_border() {
        let palette = ThemeMode::Dark.palette();
        let style =
            theme_option_style(ThemeMode::Light, ThemeMode::Dark, AccentColor::Teal, palette);
        assert!(style.starts_with("background:transparent;"));
        assert!(style.contains(palette.border));
        assert!(style.contains("color:white"));
    }

    #[test]
    fn only_the_current_swatch_is_ringed() {
        let ringed = AccentColor::ALL
            .into_iter()
            .filter(|swatch| {
                accent_swatch_style(*swatch, AccentColor::Pink).contains("3px solid white")
            })
            .collect::<Vec<_>>();
        assert_eq!(ringed, vec![AccentColor::Pink]);
    }

    #[test]
    fn about_section_names_the_system() {
        assert_eq!(ABOUT_ROWS[0], ("OS", "WAVEos"));
        assert_eq!(ABOUT_ROWS[1], ("Version", "1.5"));
        assert_eq!(ABOUT_ROWS[2], ("Created by", "ch_se"));
    }
}
