pub mod visit_tour;

pub use visit_tour::{VisitTourParams, maximize_visits};
