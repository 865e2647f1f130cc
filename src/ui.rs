pub(crate) mod widgets;

use crate::{
    simulation::{GateKind, Input, InputB, Simulation},
    theme::Theme,
    view::{id::ViewIdMaker, lens, ViewWithoutLayout},
    LogicGates, Message,
};

use widgets::{
    button::{button, ButtonMode, ButtonState},
    flow::{horizontal_flow, vertical_flow, FlowChild},
    label::{label, LabelStyle},
    schematic::{display_list::SchematicState, schematic},
    spacer::spacer,
};

// interaction state of the widgets in the main window, separate from the simulation itself
pub(crate) struct UI {
    gate_buttons: [ButtonState; 4],
    truth_table_button: ButtonState,
    toggle_a_button: ButtonState,
    toggle_b_button: ButtonState,
}

impl UI {
    pub(crate) fn new() -> UI {
        UI { gate_buttons: [ButtonState::new(), ButtonState::new(), ButtonState::new(), ButtonState::new()], truth_table_button: ButtonState::new(), toggle_a_button: ButtonState::new(), toggle_b_button: ButtonState::new() }
    }
}

// B means nothing to a one input gate so it cannot be toggled
fn toggle_b_mode(simulation: &Simulation) -> ButtonMode {
    match simulation.input_b() {
        InputB::Bit(_) => ButtonMode::Normal,
        InputB::NotApplicable => ButtonMode::Disabled,
    }
}

pub(crate) fn main_view(app: &crate::App, logic_gates: &LogicGates) -> impl ViewWithoutLayout<LogicGates> {
    let theme = &Theme::DEFAULT;
    let font = &app.font;
    let simulation = &logic_gates.simulation;
    let mut id_maker = ViewIdMaker::new();

    let mut top_row: Vec<FlowChild<LogicGates>> = vec![Box::new(label(&mut id_maker, "Select Gate:", LabelStyle::bold(theme.label_font_size, theme.label_fg), font))];
    for gate in GateKind::ALL {
        let mode = if gate == simulation.gate() { ButtonMode::Selected } else { ButtonMode::Normal };
        top_row.push(Box::new(button(
            &mut id_maker,
            logic_gates,
            gate.name(),
            mode,
            lens::from_closures(move |logic_gates: &LogicGates| &logic_gates.ui.gate_buttons[gate as usize], move |logic_gates: &mut LogicGates| &mut logic_gates.ui.gate_buttons[gate as usize]),
            move |_, logic_gates: &mut LogicGates| logic_gates.message(Message::SelectGate(gate)),
            font,
        )));
    }
    top_row.push(Box::new(spacer(&mut id_maker, (20.0, 0.0))));
    top_row.push(Box::new(button(
        &mut id_maker,
        logic_gates,
        "Show Truth Table",
        ButtonMode::Normal,
        lens::from_closures(|logic_gates: &LogicGates| &logic_gates.ui.truth_table_button, |logic_gates: &mut LogicGates| &mut logic_gates.ui.truth_table_button),
        |_, logic_gates: &mut LogicGates| logic_gates.message(Message::ShowTruthTable),
        font,
    )));
    top_row.push(Box::new(spacer(&mut id_maker, (20.0, 0.0))));
    top_row.push(Box::new(label(&mut id_maker, simulation.gate().name(), LabelStyle::bold(theme.gate_name_font_size, theme.gate_name_fg).with_bg(theme.gate_name_bg), font)));

    let input_a_column: Vec<FlowChild<LogicGates>> = vec![
        Box::new(label(&mut id_maker, "Input A:", LabelStyle::bold(theme.input_heading_font_size, theme.input_fg), font)),
        Box::new(label(&mut id_maker, simulation.input_a().to_string(), LabelStyle::bold(theme.input_value_font_size, theme.input_fg), font)),
        Box::new(button(
            &mut id_maker,
            logic_gates,
            "Toggle A (0 ⇌ 1)",
            ButtonMode::Normal,
            lens::from_closures(|logic_gates: &LogicGates| &logic_gates.ui.toggle_a_button, |logic_gates: &mut LogicGates| &mut logic_gates.ui.toggle_a_button),
            |_, logic_gates: &mut LogicGates| logic_gates.message(Message::ToggleInput(Input::A)),
            font,
        )),
    ];

    let input_b = simulation.input_b();
    let input_b_column: Vec<FlowChild<LogicGates>> = vec![
        Box::new(label(&mut id_maker, "Input B:", LabelStyle::bold(theme.input_heading_font_size, theme.input_fg), font)),
        Box::new(label(&mut id_maker, input_b.to_string(), LabelStyle::bold(theme.input_value_font_size, theme.input_fg), font)),
        Box::new(button(
            &mut id_maker,
            logic_gates,
            "Toggle B (0 ⇌ 1)",
            toggle_b_mode(simulation),
            lens::from_closures(|logic_gates: &LogicGates| &logic_gates.ui.toggle_b_button, |logic_gates: &mut LogicGates| &mut logic_gates.ui.toggle_b_button),
            |_, logic_gates: &mut LogicGates| logic_gates.message(Message::ToggleInput(Input::B)),
            font,
        )),
    ];

    let output_column: Vec<FlowChild<LogicGates>> = vec![
        Box::new(label(&mut id_maker, "Output Y:", LabelStyle::bold(theme.output_heading_font_size, theme.output_fg), font)),
        Box::new(label(&mut id_maker, simulation.output().to_string(), LabelStyle::bold(theme.output_value_font_size, theme.output_fg), font)),
    ];

    let middle_row: Vec<FlowChild<LogicGates>> = vec![
        Box::new(spacer(&mut id_maker, (30.0, 0.0))),
        Box::new(vertical_flow(input_a_column)),
        Box::new(spacer(&mut id_maker, (60.0, 0.0))),
        Box::new(vertical_flow(input_b_column)),
        Box::new(spacer(&mut id_maker, (60.0, 0.0))),
        Box::new(vertical_flow(output_column)),
    ];

    let rows: Vec<FlowChild<LogicGates>> = vec![
        Box::new(spacer(&mut id_maker, (0.0, theme.widget_padding))),
        Box::new(horizontal_flow(top_row)),
        Box::new(spacer(&mut id_maker, (0.0, theme.widget_padding * 2.0))),
        Box::new(horizontal_flow(middle_row)),
        Box::new(schematic(&mut id_maker, SchematicState::new(simulation), font)),
    ];
    vertical_flow(rows)
}

#[cfg(test)]
mod test {
    use super::toggle_b_mode;
    use crate::{
        simulation::{GateKind, Input, Simulation},
        ui::widgets::button::ButtonMode,
    };

    #[test]
    fn toggle_b_disabled_only_for_not() {
        let mut simulation = Simulation::new();
        for gate in GateKind::ALL {
            simulation.select_gate(gate);
            let expected = if gate == GateKind::Not { ButtonMode::Disabled } else { ButtonMode::Normal };
            assert_eq!(toggle_b_mode(&simulation), expected, "{gate}");
        }
    }

    #[test]
    fn toggle_b_enabled_again_after_leaving_not() {
        let mut simulation = Simulation::new();
        simulation.select_gate(GateKind::Not);
        simulation.toggle_input(Input::A);
        assert_eq!(toggle_b_mode(&simulation), ButtonMode::Disabled);

        simulation.select_gate(GateKind::Xor);
        assert_eq!(toggle_b_mode(&simulation), ButtonMode::Normal);
    }
}
