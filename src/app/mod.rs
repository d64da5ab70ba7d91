//! Application lifecycle for the gallery.

use anyhow::Result;
use gpui::{actions, AppContext, Application, KeyBinding, WindowOptions};

use crate::config::Settings;
use crate::ui::Gallery;

// Define application actions
actions!(coreframe, [Quit, ToggleTheme]);

/// Gallery application entry point
pub struct App;

impl App {
    /// Run the application
    pub fn run() -> Result<()> {
        let settings = Settings::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            Settings::default()
        });

        Application::new().run(move |cx: &mut gpui::App| {
            Self::register_keybindings(cx);
            cx.on_action(|_: &Quit, cx| cx.quit());

            cx.open_window(WindowOptions::default(), |window, cx| {
                cx.new(|cx| Gallery::new(&settings, window, cx))
            })
            .expect("Failed to open window");
        });

        Ok(())
    }

    /// Register global keybindings
    fn register_keybindings(cx: &mut gpui::App) {
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("cmd-t", ToggleTheme, Some("Gallery")),
        ]);
    }
}
