use std::io::Write;

use crate::config::Config;
use crate::domain::order::Order;
use crate::domain::resolver::OrderResolver;
use crate::domain::schedule::Schedule;
use crate::error::Result;
use crate::loader::{orders_file, schedule_file};

/// Executes the directives of one run and writes the reports to `out`.
///
/// All inputs are read before the schedule is changed, so a bad orders file
/// never leaves a half-applied run behind. The flight is added and saved
/// before orders are resolved; reservations made while resolving stay in
/// memory.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Schedule> {
    let mut orders = match &config.orders_path {
        Some(path) => Some(orders_file::load_orders(path)?),
        None => None,
    };

    let mut schedule = schedule_file::load_or_create(&config.schedule_path)?;

    if let Some(new_flight) = &config.new_flight {
        let flight_number = schedule.next_flight_number();
        let flight = schedule.add_flight(flight_number, &new_flight.departure, &new_flight.arrival)?;
        log::info!("Added {}.", flight);
        schedule_file::save(&config.schedule_path, &schedule)?;
    }

    if config.display_schedule {
        write_schedule(&schedule, out)?;
    }

    if let Some(orders) = orders.as_mut() {
        write_orders(&mut schedule, orders, out)?;
    }

    Ok(schedule)
}

pub fn write_schedule<W: Write>(schedule: &Schedule, out: &mut W) -> Result<()> {
    for (_, flight) in schedule.list_schedule() {
        writeln!(out, "{}", flight)?;
    }
    Ok(())
}

/// Resolves `orders` against the schedule and prints one line per order, in
/// input order.
pub fn write_orders<W: Write>(schedule: &mut Schedule, orders: &mut [Order], out: &mut W) -> Result<()> {
    let mut resolver = OrderResolver::new(schedule);
    resolver.resolve_orders(orders);

    for order in orders.iter() {
        writeln!(out, "{}", resolver.describe(order))?;
    }
    Ok(())
}
