use crate::domain::order::Order;
use crate::domain::schedule::Schedule;

/// Matches orders to flights in a schedule store.
///
/// The resolver borrows the store for as long as it lives; every order it
/// resolves consumes one unit of capacity there and nothing is ever given back.
pub struct OrderResolver<'a> {
    schedule: &'a mut Schedule,
}

impl<'a> OrderResolver<'a> {
    pub fn new(schedule: &'a mut Schedule) -> Self {
        OrderResolver { schedule }
    }

    /// Resolves every order in input order, first come first served.
    ///
    /// Orders that already carry a flight are left as they are. Orders with no
    /// eligible flight stay unassigned; that is a normal outcome.
    pub fn resolve_orders(&mut self, orders: &mut [Order]) {
        for order in orders.iter_mut().filter(|order| !order.is_scheduled()) {
            order.assigned_flight = self.schedule.next_available_flight(&order.destination).map(|flight| flight.key());

            match order.assigned_flight {
                Some(key) => log::debug!("Order {} to {} assigned to {}.", order.order_number, order.destination, key),
                None => log::warn!("No flight with free capacity to {} for order {}.", order.destination, order.order_number),
            }
        }

        let scheduled = orders.iter().filter(|order| order.is_scheduled()).count();
        log::info!("Resolved {} orders: {} scheduled, {} not scheduled.", orders.len(), scheduled, orders.len() - scheduled);
    }

    /// One report line for an order, using the flight it was resolved to.
    pub fn describe(&self, order: &Order) -> String {
        match order.assigned_flight.and_then(|key| self.schedule.flight(key)) {
            Some(flight) => format!(
                "order: {}, flightNumber: {}, departure: {}, arrival: {}, day: {}",
                order.order_number, flight.flight_number, flight.departure, flight.arrival, flight.day
            ),
            None => format!("order: {}, flightNumber: not scheduled", order.order_number),
        }
    }

    /// Groups orders by destination, groups in first-appearance order and
    /// orders within a group in input order. Reporting only; resolving the
    /// groups one after another assigns the same flights as input order, since
    /// destinations never share a flight.
    pub fn group_by_destination(orders: &[Order]) -> Vec<(&str, Vec<&Order>)> {
        let mut groups: Vec<(&str, Vec<&Order>)> = Vec::new();

        for order in orders {
            match groups.iter_mut().find(|(destination, _)| *destination == order.destination) {
                Some((_, members)) => members.push(order),
                None => groups.push((order.destination.as_str(), vec![order])),
            }
        }

        groups
    }
}
