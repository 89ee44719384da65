pub mod distribution;
pub mod graph;
pub mod json;
pub mod problem;
pub mod routing;
pub mod search;
pub mod tour;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
