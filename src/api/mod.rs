pub mod order_dto;
pub mod schedule_dto;
