//! Reversible gate types emitted by the synthesis core.

/// Reversible gates with known semantics.
///
/// The synthesis core only ever emits these three kinds: `X` and `CX` are
/// constant-sized special cases of the general `MCX`, kept distinct so a
/// [`crate::circuit::Circuit`] consumer can special-case the common paths
/// without counting controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandardGate {
    /// Pauli-X (NOT) gate.
    X,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Multi-controlled X gate (Toffoli when there are exactly two controls).
    Mcx,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::X => "x",
            StandardGate::CX => "cx",
            StandardGate::Mcx => "mcx",
        }
    }
}

/// A gate emitted for an arbitrary truth table by the single-target-gate
/// synthesis callback (§6). The core never constructs one of these itself;
/// it is reserved for that external collaborator and for test harnesses
/// exercising the callback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomGate {
    /// Label identifying the synthesized gate (e.g. a description of the
    /// truth table it implements).
    pub name: String,
    /// Total number of qubits it acts on (controls plus target).
    pub num_qubits: u32,
}

impl CustomGate {
    /// Create a new custom gate.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
        }
    }
}

/// A reversible gate, either standard or a synthesized custom gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateKind {
    /// A standard gate with known semantics.
    Standard(StandardGate),
    /// A gate synthesized from an arbitrary truth table.
    Custom(CustomGate),
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            GateKind::Standard(g) => g.name(),
            GateKind::Custom(g) => &g.name,
        }
    }
}

/// A gate with associated metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    /// The kind of gate.
    pub kind: GateKind,
    /// Optional label for the gate (e.g. which logic node it implements).
    pub label: Option<String>,
}

impl Gate {
    /// Create a new gate from a standard gate.
    pub fn standard(gate: StandardGate) -> Self {
        Self {
            kind: GateKind::Standard(gate),
            label: None,
        }
    }

    /// Create a new gate from a custom gate.
    pub fn custom(gate: CustomGate) -> Self {
        Self {
            kind: GateKind::Custom(gate),
            label: None,
        }
    }

    /// Add a label to the gate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &str {
        self.kind.name()
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::standard(gate)
    }
}

impl From<CustomGate> for Gate {
    fn from(gate: CustomGate) -> Self {
        Gate::custom(gate)
    }
}
