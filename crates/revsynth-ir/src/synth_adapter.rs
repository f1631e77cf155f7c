//! Implements `revsynth_synth::QuantumNetwork` for [`Circuit`], so the
//! synthesis driver can write gates directly into this crate's IR.

use revsynth_synth::QuantumNetwork;

use crate::circuit::Circuit;
use crate::qubit::QubitId;

impl QuantumNetwork for Circuit {
    fn num_qubits(&self) -> usize {
        Circuit::num_qubits(self)
    }

    fn add_qubit(&mut self) -> u32 {
        Circuit::add_qubit(self).0
    }

    fn x(&mut self, target: u32) {
        Circuit::x(self, QubitId(target)).expect("synthesis driver supplies a live qubit");
    }

    fn cx(&mut self, control: u32, target: u32) {
        Circuit::cx(self, QubitId(control), QubitId(target))
            .expect("synthesis driver supplies distinct live qubits");
    }

    fn mcx(&mut self, controls: &[u32], target: u32) {
        let controls: Vec<QubitId> = controls.iter().map(|&q| QubitId(q)).collect();
        Circuit::mcx(self, controls, QubitId(target))
            .expect("synthesis driver supplies distinct live qubits");
    }
}
