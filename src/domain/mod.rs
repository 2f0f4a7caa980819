pub mod flight;
pub mod order;
pub mod resolver;
pub mod schedule;
