mod config;
mod event;
mod form;
mod ledger;
mod manager;

pub use config::{load_config, save_config, CalcConfig};
pub use event::MixEvent;
pub use form::{parse_weight, ContainerForm};
pub use ledger::ContainerLedger;
pub use manager::MixState;
