//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, size, App, AppContext, Application, Bounds, KeyBinding, SharedString,
    TitlebarOptions, WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::roster::{read_roster, ResolvedRoster};
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

actions!(profile_card, [Quit, Reload]);

/// Run the Profile Card application
pub fn run_app() {
    let resolved = read_roster().unwrap_or_else(|err| {
        tracing::error!("Failed to read roster file, using built-in profiles: {}", err);
        ResolvedRoster::builtin()
    });
    let window_config = resolved.window.clone();

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        cx.bind_keys([
            KeyBinding::new("secondary-q", Quit, None),
            KeyBinding::new("secondary-r", Reload, None),
        ]);

        // Initialize global entities
        let entities = AppEntities::init(resolved.into_state(), cx);
        cx.set_global(entities.clone());

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        {
            let entities = entities.clone();
            cx.on_action(move |_: &Reload, cx: &mut App| reload_roster(&entities, cx));
        }

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let width = window_config.width.max(MIN_WINDOW_WIDTH);
        let height = window_config.height.max(MIN_WINDOW_HEIGHT);
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(window_config.title.clone())),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        });

        if let Err(err) = opened {
            tracing::error!("Failed to open main window: {}", err);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

/// Re-read the roster file and replace the roster; keep the old one on error
fn reload_roster(entities: &AppEntities, cx: &mut App) {
    let reloaded = read_roster();
    entities.roster.update(cx, |roster, cx| {
        if roster.apply_reload(reloaded) {
            cx.notify();
        }
    });
}
