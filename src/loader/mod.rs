pub mod orders_file;
pub mod parser;
pub mod schedule_file;
