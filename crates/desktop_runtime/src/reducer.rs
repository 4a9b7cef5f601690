//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::{AccentColor, AppCommand, ThemeMode};
use thiserror::Error;

use crate::{
    model::{AppId, DesktopState, InteractionState, PointerPosition, ShellRoute, WindowPosition},
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Launch an app by its string id. Also closes the app drawer.
    Launch {
        /// Raw app id from a launcher surface.
        app_id: String,
    },
    /// Show a window.
    OpenWindow {
        /// Window to show.
        app_id: AppId,
    },
    /// Hide a window.
    CloseWindow {
        /// Window to hide.
        app_id: AppId,
    },
    /// Flip a window between floating and docked.
    ToggleFullscreen {
        /// Window to flip.
        app_id: AppId,
    },
    /// Overwrite a window position.
    MoveWindow {
        /// Window to move.
        app_id: AppId,
        /// New origin.
        position: WindowPosition,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        app_id: AppId,
        /// Pointer position at press time.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Toggle the app drawer popover.
    ToggleAppDrawer,
    /// Toggle the power menu popover.
    TogglePowerMenu,
    /// Close every taskbar popover.
    CloseMenus,
    /// Switch the shell between dark and light.
    SetThemeMode {
        /// New appearance.
        mode: ThemeMode,
    },
    /// Change the shell accent color.
    SetAccentColor {
        /// New accent.
        accent: AccentColor,
    },
    /// Apply a command sent by a mounted app.
    HandleAppCommand(AppCommand),
    /// Leave the desktop for the login screen.
    SignOut,
    /// Leave the desktop for the boot splash.
    PowerOff,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer.
pub enum RuntimeEffect {
    /// Route the app away from the desktop.
    Navigate(ShellRoute),
    /// Open a resolved address in a disguised top-level tab.
    OpenDisguisedTab {
        /// Fully-qualified address.
        address: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors returned by [`reduce_desktop`]. State is left untouched when one is returned.
pub enum ReducerError {
    /// A launch request named an app the catalog does not know.
    #[error("unknown app id `{0}`")]
    UnknownApp(String),
}

/// Applies `action` to the desktop and interaction state and returns follow-up effects.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();

    match action {
        DesktopAction::Launch { app_id } => {
            let app_id = AppId::parse(&app_id).ok_or(ReducerError::UnknownApp(app_id))?;
            window_manager::open_window(state, app_id);
            state.app_drawer_open = false;
        }
        DesktopAction::OpenWindow { app_id } => {
            window_manager::open_window(state, app_id);
        }
        DesktopAction::CloseWindow { app_id } => {
            window_manager::close_window(state, interaction, app_id);
        }
        DesktopAction::ToggleFullscreen { app_id } => {
            window_manager::toggle_fullscreen(state, app_id);
        }
        DesktopAction::MoveWindow { app_id, position } => {
            window_manager::move_window(state, app_id, position);
        }
        DesktopAction::BeginMove { app_id, pointer } => {
            let window = *state.windows.get(app_id);
            interaction.drag.begin(&window, pointer);
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some((app_id, position)) = interaction.drag.pointer_moved(pointer) {
                window_manager::move_window(state, app_id, position);
            }
        }
        DesktopAction::EndMove => {
            interaction.drag.end();
        }
        DesktopAction::ToggleAppDrawer => {
            state.app_drawer_open = !state.app_drawer_open;
            state.power_menu_open = false;
        }
        DesktopAction::TogglePowerMenu => {
            state.power_menu_open = !state.power_menu_open;
            state.app_drawer_open = false;
        }
        DesktopAction::CloseMenus => {
            state.app_drawer_open = false;
            state.power_menu_open = false;
        }
        DesktopAction::SetThemeMode { mode } => {
            state.theme.mode = mode;
        }
        DesktopAction::SetAccentColor { accent } => {
            state.theme.accent = accent;
        }
        DesktopAction::HandleAppCommand(command) => match command {
            AppCommand::SetThemeMode { mode } => state.theme.mode = mode,
            AppCommand::SetAccentColor { accent } => state.theme.accent = accent,
            AppCommand::OpenDisguisedTab { address } => {
                effects.push(RuntimeEffect::OpenDisguisedTab { address });
            }
        },
        DesktopAction::SignOut => {
            state.power_menu_open = false;
            effects.push(RuntimeEffect::Navigate(ShellRoute::Startup));
        }
        DesktopAction::PowerOff => {
            state.power_menu_open = false;
            effects.push(RuntimeEffect::Navigate(ShellRoute::Splash));
        }
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn launch(app_id: &str) -> DesktopAction {
        DesktopAction::Launch {
            app_id: app_id.to_string(),
        }
    }

    #[test]
    fn launch_opens_known_apps_and_closes_drawer() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, DesktopAction::ToggleAppDrawer);
        assert!(state.app_drawer_open);

        reduce(&mut state, &mut interaction, launch("browser"));
        reduce(&mut state, &mut interaction, launch("settings"));

        assert!(!state.app_drawer_open);
        assert_eq!(
            state.windows.open_apps(),
            vec![AppId::Settings, AppId::Browser]
        );
    }

    #[test]
    fn launch_of_unknown_app_is_rejected_without_state_change() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let before = state.clone();

        let err = reduce_desktop(&mut state, &mut interaction, launch("terminal")).unwrap_err();

        assert_eq!(err, ReducerError::UnknownApp("terminal".to_string()));
        assert_eq!(err.to_string(), "unknown app id `terminal`");
        assert_eq!(state, before);
    }

    #[test]
    fn drag_moves_window_until_release() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, launch("files"));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::Files,
                pointer: PointerPosition { x: 170, y: 110 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 420, y: 310 },
            },
        );
        assert_eq!(
            state.windows.get(AppId::Files).position,
            WindowPosition { x: 400, y: 300 }
        );

        reduce(&mut state, &mut interaction, DesktopAction::EndMove);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        assert_eq!(
            state.windows.get(AppId::Files).position,
            WindowPosition { x: 400, y: 300 }
        );
    }

    #[test]
    fn fullscreen_window_ignores_drag_and_keeps_position() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, launch("browser"));
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleFullscreen {
                app_id: AppId::Browser,
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::Browser,
                pointer: PointerPosition { x: 100, y: 40 },
            },
        );
        assert!(!interaction.drag.is_active());

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                app_id: AppId::Browser,
                position: WindowPosition { x: 5, y: 5 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleFullscreen {
                app_id: AppId::Browser,
            },
        );
        assert_eq!(
            state.windows.get(AppId::Browser).position,
            WindowPosition { x: 80, y: 30 }
        );
    }

    #[test]
    fn popovers_are_mutually_exclusive() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce(&mut state, &mut interaction, DesktopAction::ToggleAppDrawer);
        reduce(&mut state, &mut interaction, DesktopAction::TogglePowerMenu);
        assert!(!state.app_drawer_open);
        assert!(state.power_menu_open);

        reduce(&mut state, &mut interaction, DesktopAction::CloseMenus);
        assert!(!state.power_menu_open);
    }

    #[test]
    fn app_commands_update_theme_and_emit_disguised_tab() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand(AppCommand::SetThemeMode {
                mode: ThemeMode::Light,
            }),
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand(AppCommand::SetAccentColor {
                accent: AccentColor::Orange,
            }),
        );
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand(AppCommand::OpenDisguisedTab {
                address: "https://example.com".to_string(),
            }),
        );

        assert_eq!(state.theme.mode, ThemeMode::Light);
        assert_eq!(state.theme.accent, AccentColor::Orange);
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenDisguisedTab {
                address: "https://example.com".to_string()
            }]
        );
    }

    #[test]
    fn power_menu_actions_navigate_away() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, DesktopAction::TogglePowerMenu);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::SignOut);
        assert_eq!(effects, vec![RuntimeEffect::Navigate(ShellRoute::Startup)]);
        assert!(!state.power_menu_open);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::PowerOff);
        assert_eq!(effects, vec![RuntimeEffect::Navigate(ShellRoute::Splash)]);
    }
}
