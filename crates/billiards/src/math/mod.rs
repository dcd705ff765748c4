//! Exact integer algebra and trigonometric equations.
//!
//! - `symbols`: the `Xyz` axis alphabet (with the third-axis operator) and the
//!   `XyEta` constraint alphabet.
//! - `lincom`: overflow-checked integer vectors over a symbol alphabet.
//! - `equation`: sums of `k·sin(a·x + b·y)` / `k·cos(a·x + b·y)` terms as
//!   produced by the external backend.

mod equation;
mod lincom;
mod symbols;

pub use equation::{Equation, Trig, TrigTerm};
pub use lincom::LinCom;
pub use symbols::{Symbol, XyEta, Xyz, ALPHABET_LEN};
