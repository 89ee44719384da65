pub mod allocation_queue;
pub mod courier_pool;
pub mod demand_ledger;
pub mod distribution_report;
pub mod distributor;

pub use distribution_report::{Dispatch, DistributionReport, Outcome};
pub use distributor::distribute_resources;
