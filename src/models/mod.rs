pub mod container;
pub mod substance;
pub mod totals;

pub use container::{ContainerEdit, ContainerRecord};
pub use substance::Substance;
pub use totals::AggregateTotals;
