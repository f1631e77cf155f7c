//! Gate-inverter-graph classical logic network: the concrete
//! `LogicNetwork` (§6) that feeds `revsynth-synth`'s synthesis driver.
//!
//! # Example
//!
//! ```rust
//! use revsynth_logic::{Edge, Network};
//!
//! let mut net = Network::new();
//! let a = net.add_input();
//! let b = net.add_input();
//! let g = net.and(Edge::new(a, false), Edge::new(b, false)).unwrap();
//! net.add_output(g).unwrap();
//! ```

pub mod error;
pub mod network;

pub use error::{LogicError, LogicResult};
pub use network::{Edge, Network, NodeId, NodeKind};
