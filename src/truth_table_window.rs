use sfml::{
    graphics::{RenderTarget, RenderWindow},
    window::{ContextSettings, Event, Key, Style},
};

use crate::{
    graphics,
    simulation::truth_table::TruthTableSnapshot,
    theme::Theme,
    ui::widgets::table::{table, TableView},
    view::{self, id::ViewIdMaker},
};

slotmap::new_key_type! {
    pub(crate) struct TruthTableWindowKey;
}

// a secondary window showing the truth table as it was when the window was opened
pub(crate) struct TruthTableWindow {
    window: RenderWindow,
    snapshot: TruthTableSnapshot,
}

impl TruthTableWindow {
    pub(crate) fn open(app: &crate::App, main_window: &RenderWindow, snapshot: TruthTableSnapshot) -> TruthTableWindow {
        let size = Self::view(app, &snapshot).natural_size();
        let (width, height) = (size.x.ceil() as u32, size.y.ceil() as u32);

        let title = snapshot.title();
        let mut window = RenderWindow::new((width, height), title.as_str(), Style::TITLEBAR | Style::CLOSE, &ContextSettings::default());
        window.set_framerate_limit(60);

        // centered on the main window
        let main_position = main_window.position();
        let main_size = main_window.size();
        window.set_position(graphics::Vector2i::new(main_position.x + main_size.x as i32 / 2 - width as i32 / 2, main_position.y + main_size.y as i32 / 2 - height as i32 / 2));

        tracing::info!(gate = %snapshot.gate, width, height, "opened truth table window");
        TruthTableWindow { window, snapshot }
    }

    fn view(app: &crate::App, snapshot: &TruthTableSnapshot) -> TableView {
        table(&mut ViewIdMaker::new(), snapshot, &app.font)
    }

    // returns whether the window is still open
    pub(crate) fn handle_events(&mut self) -> bool {
        while let Some(event) = self.window.poll_event() {
            match event {
                Event::Closed | Event::KeyPressed { code: Key::Escape, .. } => {
                    tracing::info!(gate = %self.snapshot.gate, "closed truth table window");
                    self.window.close();
                }
                _ => {}
            }
        }
        self.window.is_open()
    }

    pub(crate) fn render(&mut self, app: &crate::App) {
        let size = self.window.size();
        let mouse = self.window.mouse_position();
        let table = Self::view(app, &self.snapshot);

        self.window.clear(Theme::DEFAULT.table_window_bg);
        view::render(app, &mut self.window, size, mouse, &table);
        self.window.display();
    }
}
