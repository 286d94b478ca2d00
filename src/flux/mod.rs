//! Edge Riemann solvers.
//!
//! - [`fwave_net_updates`]: f-wave decomposition with wet/dry handling
//! - [`RiemannSolver`]: trait used by the blocks, implemented by [`FWaveSolver`]

mod fwave;
pub mod traits;

pub use fwave::{EdgeState, GRAVITY, NetUpdates, fwave_net_updates};
pub use traits::{FWaveSolver, RiemannSolver};
