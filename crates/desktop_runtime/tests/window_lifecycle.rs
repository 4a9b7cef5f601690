use desktop_runtime::{
    reduce_desktop, AppId, DesktopAction, DesktopState, InteractionState, PointerPosition,
    ReducerError, WindowPosition, WindowRect, WindowSize,
};

fn run(state: &mut DesktopState, interaction: &mut InteractionState, actions: Vec<DesktopAction>) {
    for action in actions {
        reduce_desktop(state, interaction, action).expect("action applies");
    }
}

fn launch(app_id: &str) -> DesktopAction {
    DesktopAction::Launch {
        app_id: app_id.to_string(),
    }
}

#[test]
fn taskbar_indicators_follow_open_windows() {
    let mut state = DesktopState::default();
    let mut interaction = InteractionState::default();

    run(
        &mut state,
        &mut interaction,
        vec![launch("files"), launch("browser"), launch("files")],
    );
    assert_eq!(state.windows.open_apps(), vec![AppId::Files, AppId::Browser]);

    run(
        &mut state,
        &mut interaction,
        vec![DesktopAction::CloseWindow {
            app_id: AppId::Files,
        }],
    );
    assert_eq!(state.windows.open_apps(), vec![AppId::Browser]);
}

#[test]
fn unknown_launch_leaves_desktop_unchanged() {
    let mut state = DesktopState::default();
    let mut interaction = InteractionState::default();
    run(&mut state, &mut interaction, vec![launch("settings")]);
    let before = state.clone();

    for raw in ["", "Browser", "paint", "settings "] {
        let err = reduce_desktop(&mut state, &mut interaction, launch(raw)).unwrap_err();
        assert_eq!(err, ReducerError::UnknownApp(raw.to_string()));
    }
    assert_eq!(state, before);
}

#[test]
fn drag_fullscreen_close_reopen_cycle() {
    let mut state = DesktopState::default();
    let mut interaction = InteractionState::default();

    run(
        &mut state,
        &mut interaction,
        vec![
            launch("browser"),
            DesktopAction::BeginMove {
                app_id: AppId::Browser,
                pointer: PointerPosition { x: 100, y: 40 },
            },
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 220, y: 140 },
            },
            DesktopAction::EndMove,
            DesktopAction::ToggleFullscreen {
                app_id: AppId::Browser,
            },
        ],
    );

    let record = *state.windows.get(AppId::Browser);
    assert_eq!(record.position, WindowPosition { x: 200, y: 130 });
    assert_eq!(
        record.frame().resolve(WindowSize { w: 1024, h: 768 }),
        WindowRect {
            x: 0,
            y: 0,
            w: 1024,
            h: 720
        }
    );

    run(
        &mut state,
        &mut interaction,
        vec![
            DesktopAction::BeginMove {
                app_id: AppId::Browser,
                pointer: PointerPosition { x: 10, y: 10 },
            },
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 500, y: 500 },
            },
            DesktopAction::CloseWindow {
                app_id: AppId::Browser,
            },
            launch("browser"),
            DesktopAction::ToggleFullscreen {
                app_id: AppId::Browser,
            },
        ],
    );

    let record = *state.windows.get(AppId::Browser);
    assert!(record.is_open);
    assert!(!record.is_fullscreen);
    assert_eq!(record.position, WindowPosition { x: 200, y: 130 });
    assert_eq!(
        record.frame().resolve(WindowSize { w: 1024, h: 768 }),
        WindowRect {
            x: 200,
            y: 130,
            w: 800,
            h: 600
        }
    );
}

#[test]
fn closing_window_mid_drag_stops_further_moves() {
    let mut state = DesktopState::default();
    let mut interaction = InteractionState::default();

    run(
        &mut state,
        &mut interaction,
        vec![
            launch("settings"),
            DesktopAction::BeginMove {
                app_id: AppId::Settings,
                pointer: PointerPosition { x: 110, y: 60 },
            },
            DesktopAction::CloseWindow {
                app_id: AppId::Settings,
            },
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 400, y: 400 },
            },
        ],
    );

    assert!(!interaction.drag.is_active());
    assert_eq!(
        state.windows.get(AppId::Settings).position,
        WindowPosition { x: 100, y: 50 }
    );
}
