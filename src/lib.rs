pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use error::{CalcError, Result};
pub use models::{AggregateTotals, ContainerRecord, Substance};
pub use state::{ContainerLedger, MixState};
