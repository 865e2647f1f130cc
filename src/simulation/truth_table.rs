use crate::simulation::{Bit, GateKind, InputB, Simulation};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct TruthTableRow {
    pub(crate) a: Bit,
    pub(crate) b: InputB,
    pub(crate) output: Bit,
}

// the table as it was when it was requested, along with which row the inputs selected
pub(crate) struct TruthTableSnapshot {
    pub(crate) gate: GateKind,
    pub(crate) rows: Vec<TruthTableRow>,
    input_a: Bit,
    input_b: InputB,
}

pub(crate) fn rows(gate: GateKind) -> Vec<TruthTableRow> {
    const BITS: [Bit; 2] = [Bit::Zero, Bit::One];

    if gate.uses_input_b() {
        BITS.into_iter().flat_map(|a| BITS.into_iter().map(move |b| TruthTableRow { a, b: InputB::Bit(b), output: gate.evaluate(a, b) })).collect()
    } else {
        BITS.into_iter().map(|a| TruthTableRow { a, b: InputB::NotApplicable, output: gate.evaluate(a, Bit::Zero) }).collect()
    }
}

impl TruthTableRow {
    pub(crate) fn is_active(&self, a: Bit, b: InputB) -> bool {
        self.a == a && (self.b == b || self.b == InputB::NotApplicable)
    }
}

impl TruthTableSnapshot {
    pub(crate) fn new(simulation: &Simulation) -> TruthTableSnapshot {
        let gate = simulation.gate();
        TruthTableSnapshot { gate, rows: rows(gate), input_a: simulation.input_a(), input_b: simulation.input_b() }
    }

    pub(crate) fn title(&self) -> String {
        format!("{} Gate Truth Table", self.gate)
    }

    pub(crate) fn is_active(&self, row: &TruthTableRow) -> bool {
        row.is_active(self.input_a, self.input_b)
    }
}
