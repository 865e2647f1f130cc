pub(crate) mod logic;
pub(crate) mod truth_table;

pub(crate) use logic::{Bit, GateKind};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Input {
    A,
    B,
}

// what input B displays as; B has no meaning while NOT is selected
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum InputB {
    Bit(Bit),
    NotApplicable,
}

pub(crate) struct Simulation {
    gate: GateKind,
    input_a: Bit,
    input_b: Bit,
}

impl Simulation {
    pub(crate) fn new() -> Simulation {
        Simulation { gate: GateKind::And, input_a: Bit::Zero, input_b: Bit::Zero }
    }

    pub(crate) fn select_gate(&mut self, gate: GateKind) {
        self.gate = gate;
        if !gate.uses_input_b() {
            self.input_b = Bit::Zero;
        }
        tracing::debug!(gate = %self.gate, a = %self.input_a, b = %self.input_b, y = %self.output(), "selected gate");
    }

    // toggling B while NOT is selected is allowed but never changes the output
    pub(crate) fn toggle_input(&mut self, input: Input) {
        let bit = match input {
            Input::A => &mut self.input_a,
            Input::B => &mut self.input_b,
        };
        *bit = bit.toggled();
        tracing::debug!(?input, gate = %self.gate, a = %self.input_a, b = %self.input_b, y = %self.output(), "toggled input");
    }

    pub(crate) fn gate(&self) -> GateKind {
        self.gate
    }
    pub(crate) fn input_a(&self) -> Bit {
        self.input_a
    }
    pub(crate) fn input_b(&self) -> InputB {
        if self.gate.uses_input_b() {
            InputB::Bit(self.input_b)
        } else {
            InputB::NotApplicable
        }
    }

    pub(crate) fn output(&self) -> Bit {
        self.gate.evaluate(self.input_a, self.input_b)
    }
}

impl std::fmt::Display for InputB {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputB::Bit(b) => b.fmt(f),
            InputB::NotApplicable => write!(f, "N/A"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Bit, GateKind, Input, InputB, Simulation};

    fn simulation(gate: GateKind, a: Bit, b: Bit) -> Simulation {
        let mut simulation = Simulation::new();
        simulation.select_gate(gate);
        if a != simulation.input_a() {
            simulation.toggle_input(Input::A);
        }
        if gate.uses_input_b() && InputB::Bit(b) != simulation.input_b() {
            simulation.toggle_input(Input::B);
        }
        simulation
    }

    #[test]
    fn defaults() {
        let simulation = Simulation::new();
        assert_eq!(simulation.gate(), GateKind::And);
        assert_eq!(simulation.input_a(), Bit::Zero);
        assert_eq!(simulation.input_b(), InputB::Bit(Bit::Zero));
        assert_eq!(simulation.output(), Bit::Zero);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut simulation = Simulation::new();
        simulation.toggle_input(Input::A);
        assert_eq!(simulation.input_a(), Bit::One);
        simulation.toggle_input(Input::A);
        assert_eq!(simulation.input_a(), Bit::Zero);

        simulation.toggle_input(Input::B);
        assert_eq!(simulation.input_b(), InputB::Bit(Bit::One));
        simulation.toggle_input(Input::B);
        assert_eq!(simulation.input_b(), InputB::Bit(Bit::Zero));
    }

    #[test]
    fn selecting_not_clears_b() {
        for a in [Bit::Zero, Bit::One] {
            let mut simulation = simulation(GateKind::Or, a, Bit::One);
            simulation.select_gate(GateKind::Not);
            assert_eq!(simulation.input_b(), InputB::NotApplicable);
            assert_eq!(simulation.output(), !a);

            simulation.select_gate(GateKind::And);
            assert_eq!(simulation.input_b(), InputB::Bit(Bit::Zero));
        }
    }

    #[test]
    fn toggling_b_under_not_does_not_change_output() {
        let mut simulation = simulation(GateKind::Not, Bit::One, Bit::Zero);
        assert_eq!(simulation.output(), Bit::Zero);
        simulation.toggle_input(Input::B);
        assert_eq!(simulation.output(), Bit::Zero);
        assert_eq!(simulation.input_b(), InputB::NotApplicable);
    }

    #[test]
    fn b_toggled_under_not_is_kept_after_leaving_not() {
        let mut simulation = simulation(GateKind::Or, Bit::Zero, Bit::One);
        simulation.select_gate(GateKind::Not);
        simulation.toggle_input(Input::B);
        simulation.select_gate(GateKind::And);
        assert_eq!(simulation.input_b(), InputB::Bit(Bit::One));

        simulation.select_gate(GateKind::Not);
        simulation.select_gate(GateKind::Or);
        assert_eq!(simulation.input_b(), InputB::Bit(Bit::Zero));
    }

    #[test]
    fn scenarios() {
        assert_eq!(simulation(GateKind::And, Bit::One, Bit::One).output(), Bit::One);
        assert_eq!(simulation(GateKind::And, Bit::One, Bit::Zero).output(), Bit::Zero);

        let mut or = simulation(GateKind::Or, Bit::Zero, Bit::Zero);
        assert_eq!(or.output(), Bit::Zero);
        or.toggle_input(Input::B);
        assert_eq!(or.output(), Bit::One);

        assert_eq!(simulation(GateKind::Xor, Bit::One, Bit::One).output(), Bit::Zero);

        let mut not = simulation(GateKind::Not, Bit::Zero, Bit::Zero);
        assert_eq!(not.output(), Bit::One);
        not.toggle_input(Input::A);
        assert_eq!(not.output(), Bit::Zero);
    }

    #[test]
    fn output_follows_every_operation() {
        let mut simulation = Simulation::new();
        for gate in GateKind::ALL {
            simulation.select_gate(gate);
            for input in [Input::A, Input::B, Input::A, Input::B] {
                simulation.toggle_input(input);
                let b = match simulation.input_b() {
                    InputB::Bit(b) => b,
                    InputB::NotApplicable => Bit::Zero,
                };
                assert_eq!(simulation.output(), gate.evaluate(simulation.input_a(), b));
            }
        }
    }
}
