//! Simulation domain models.
//!
//! Provides the data types shared by the scheduling engines and the
//! report composer.
//!
//! # Lifecycle
//!
//! | Type | Created | Mutated | Read |
//! |------|---------|---------|------|
//! | `SimulationParams` | parser | never | engines |
//! | `Process` | once per run | by one engine | report |
//! | `Timeline` | by engine or reconstructor | during the run | report |

mod params;
mod process;
mod timeline;

pub use params::{Policy, ProcessSpec, SimulationParams};
pub use process::{Process, ProcessId, SelectionEvent, Tick};
pub use timeline::Timeline;
