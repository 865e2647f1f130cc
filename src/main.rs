pub(crate) mod font;
pub(crate) mod graphics;
pub(crate) mod simulation;
pub(crate) mod theme;
pub(crate) mod truth_table_window;
pub(crate) mod ui;
pub(crate) mod view;

use std::rc::Rc;

use sfml::{
    graphics::{RenderTarget, RenderWindow, View as SfView},
    window::{ContextSettings, Event, Style},
};
use slotmap::SlotMap;

use crate::{
    simulation::truth_table::TruthTableSnapshot,
    theme::Theme,
    truth_table_window::{TruthTableWindow, TruthTableWindowKey},
};

// resources shared by every window
pub(crate) struct App {
    pub(crate) font: Rc<graphics::SfBox<graphics::Font>>,
}

pub(crate) struct LogicGates {
    simulation: simulation::Simulation,
    ui: ui::UI,
    truth_table_requests: Vec<TruthTableSnapshot>,
}

pub(crate) enum Message {
    SelectGate(simulation::GateKind),
    ToggleInput(simulation::Input),
    ShowTruthTable,
}

impl LogicGates {
    fn new() -> LogicGates {
        LogicGates { simulation: simulation::Simulation::new(), ui: ui::UI::new(), truth_table_requests: Vec::new() }
    }

    fn message(&mut self, message: Message) {
        match message {
            Message::SelectGate(gate) => self.simulation.select_gate(gate),
            Message::ToggleInput(input) => self.simulation.toggle_input(input),
            // the window gets opened by the main loop because opening it needs the main window
            Message::ShowTruthTable => self.truth_table_requests.push(TruthTableSnapshot::new(&self.simulation)),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let app = App { font: font::load_system_font()? };
    let mut logic_gates = LogicGates::new();

    let (width, height) = Theme::DEFAULT.main_window_size;
    let mut main_window = RenderWindow::new((width, height), "Digital Logic Gate Simulator with Truth Table (Basic Gates)", Style::DEFAULT, &ContextSettings { antialiasing_level: 4, ..Default::default() });
    main_window.set_framerate_limit(60);
    tracing::info!(width, height, "opened main window");

    let mut truth_table_windows: SlotMap<TruthTableWindowKey, TruthTableWindow> = SlotMap::with_key();

    while main_window.is_open() {
        while let Some(event) = main_window.poll_event() {
            match event {
                Event::Closed => main_window.close(),
                Event::Resized { width, height } => {
                    let size = graphics::Vector2f::new(width as f32, height as f32);
                    main_window.set_view(&SfView::new(size / 2.0, size));
                }
                event => {
                    let size = main_window.size();
                    let view = ui::main_view(&app, &logic_gates);
                    view::event(&app, &mut logic_gates, size, &view, event);
                }
            }
        }

        for snapshot in logic_gates.truth_table_requests.drain(..) {
            truth_table_windows.insert(TruthTableWindow::open(&app, &main_window, snapshot));
        }
        truth_table_windows.retain(|_, window| window.handle_events());

        let size = main_window.size();
        let mouse = main_window.mouse_position();
        main_window.clear(Theme::DEFAULT.main_bg);
        view::render(&app, &mut main_window, size, mouse, &ui::main_view(&app, &logic_gates));
        main_window.display();

        for (_, window) in &mut truth_table_windows {
            window.render(&app);
        }
    }

    tracing::info!(open_truth_tables = truth_table_windows.len(), "main window closed");
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::{
        simulation::{Bit, GateKind, Input, InputB},
        LogicGates, Message,
    };

    #[test]
    fn messages_drive_simulation() {
        let mut logic_gates = LogicGates::new();
        logic_gates.message(Message::SelectGate(GateKind::Or));
        logic_gates.message(Message::ToggleInput(Input::B));
        assert_eq!(logic_gates.simulation.output(), Bit::One);

        logic_gates.message(Message::SelectGate(GateKind::Not));
        assert_eq!(logic_gates.simulation.input_b(), InputB::NotApplicable);
        assert_eq!(logic_gates.simulation.output(), Bit::One);
    }

    #[test]
    fn truth_table_requests_are_snapshots() {
        let mut logic_gates = LogicGates::new();
        logic_gates.message(Message::ShowTruthTable);
        logic_gates.message(Message::SelectGate(GateKind::Xor));
        logic_gates.message(Message::ShowTruthTable);

        let gates: Vec<GateKind> = logic_gates.truth_table_requests.iter().map(|snapshot| snapshot.gate).collect();
        assert_eq!(gates, vec![GateKind::And, GateKind::Xor]);
    }
}
