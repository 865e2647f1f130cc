use std::fmt::Display;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Bit {
    Zero,
    One,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum GateKind {
    And,
    Or,
    Not,
    Xor,
}

impl Bit {
    pub(crate) fn toggled(self) -> Bit {
        !self
    }

    pub(crate) fn is_high(self) -> bool {
        self == Bit::One
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Bit {
        if b {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl std::ops::Not for Bit {
    type Output = Bit;

    fn not(self) -> Bit {
        Bit::from(!self.is_high())
    }
}
impl std::ops::BitAnd for Bit {
    type Output = Bit;

    fn bitand(self, rhs: Bit) -> Bit {
        Bit::from(self.is_high() && rhs.is_high())
    }
}
impl std::ops::BitOr for Bit {
    type Output = Bit;

    fn bitor(self, rhs: Bit) -> Bit {
        Bit::from(self.is_high() || rhs.is_high())
    }
}
impl std::ops::BitXor for Bit {
    type Output = Bit;

    fn bitxor(self, rhs: Bit) -> Bit {
        Bit::from(self.is_high() != rhs.is_high())
    }
}

impl Display for Bit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

impl GateKind {
    pub(crate) const ALL: [GateKind; 4] = [GateKind::And, GateKind::Or, GateKind::Not, GateKind::Xor];

    // b is ignored for NOT
    pub(crate) fn evaluate(self, a: Bit, b: Bit) -> Bit {
        match self {
            GateKind::And => a & b,
            GateKind::Or => a | b,
            GateKind::Not => !a,
            GateKind::Xor => a ^ b,
        }
    }

    pub(crate) fn uses_input_b(self) -> bool {
        !matches!(self, GateKind::Not)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Not => "NOT",
            GateKind::Xor => "XOR",
        }
    }
}

impl Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::{Bit, GateKind};

    const BITS: [Bit; 2] = [Bit::Zero, Bit::One];

    #[test]
    fn and() {
        for a in BITS {
            for b in BITS {
                assert_eq!(GateKind::And.evaluate(a, b), Bit::from(a == Bit::One && b == Bit::One), "{a} AND {b}");
            }
        }
    }

    #[test]
    fn or() {
        for a in BITS {
            for b in BITS {
                assert_eq!(GateKind::Or.evaluate(a, b), Bit::from(a == Bit::One || b == Bit::One), "{a} OR {b}");
            }
        }
    }

    #[test]
    fn xor() {
        for a in BITS {
            for b in BITS {
                assert_eq!(GateKind::Xor.evaluate(a, b), Bit::from(a != b), "{a} XOR {b}");
            }
        }
    }

    #[test]
    fn not_ignores_b() {
        for b in BITS {
            assert_eq!(GateKind::Not.evaluate(Bit::Zero, b), Bit::One);
            assert_eq!(GateKind::Not.evaluate(Bit::One, b), Bit::Zero);
        }
    }

    #[test]
    fn toggle_is_involution() {
        for bit in BITS {
            assert_ne!(bit.toggled(), bit);
            assert_eq!(bit.toggled().toggled(), bit);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Bit::Zero.to_string(), "0");
        assert_eq!(Bit::One.to_string(), "1");
        assert_eq!(GateKind::ALL.map(|g| g.to_string()), ["AND", "OR", "NOT", "XOR"]);
    }
}
