use crate::api::order_dto::OrderDto;
use crate::domain::flight::FlightKey;

/// A cargo order waiting to be put on a flight.
///
/// `assigned_flight` points into the schedule store that resolved it; it is set
/// at most once and only during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_number: String,
    pub destination: String,
    pub assigned_flight: Option<FlightKey>,
}

impl Order {
    pub fn new(order_number: impl Into<String>, destination: impl Into<String>) -> Self {
        Order { order_number: order_number.into(), destination: destination.into(), assigned_flight: None }
    }

    pub fn from_dto(order_number: impl Into<String>, dto: OrderDto) -> Self {
        Order::new(order_number, dto.destination)
    }

    pub fn is_scheduled(&self) -> bool {
        self.assigned_flight.is_some()
    }
}
