use std::collections::BTreeMap;

use crate::api::schedule_dto::ScheduleDto;
use crate::domain::flight::{Flight, FlightKey, MAX_DAILY_FLIGHTS};
use crate::error::{Error, Result};

/// The fixed slot pattern of a single day. Unset slots are `None`.
pub type DaySlots = [Option<Flight>; MAX_DAILY_FLIGHTS as usize];

/// The schedule store: every flight, partitioned by day into fixed slots.
///
/// Slot placement is computed from the flight number, never chosen by the
/// caller. Days iterate in ascending order and slots within a day in
/// ascending order, which is also the order `next_available_flight` searches
/// in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Incremented once per successful `add_flight`, including overwrites.
    total_flights: u32,
    days: BTreeMap<u32, DaySlots>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_flights(&self) -> u32 {
        self.total_flights
    }

    /// The flight number the next generated flight gets.
    pub fn next_flight_number(&self) -> i64 {
        self.total_flights as i64 + 1
    }

    /// Places a flight into the slot its number maps to.
    ///
    /// A day that has no entry yet gets a fresh set of unset slots. An occupied
    /// slot is overwritten and the other slots of that day are left alone.
    /// `total_flights` goes up on every successful call, overwrite or not.
    pub fn add_flight(&mut self, flight_number: i64, departure: &str, arrival: &str) -> Result<&Flight> {
        let number = u32::try_from(flight_number).map_err(|_| Error::InvalidFlightNumber(flight_number))?;
        let key = FlightKey::for_flight_number(number).ok_or(Error::InvalidFlightNumber(flight_number))?;

        if departure.trim().is_empty() {
            return Err(Error::InvalidInput("departure must not be empty".to_string()));
        }
        if arrival.trim().is_empty() {
            return Err(Error::InvalidInput("arrival must not be empty".to_string()));
        }

        let total_flights = self.total_flights.checked_add(1).ok_or(Error::CounterExhausted(self.total_flights))?;

        let flight = Flight {
            flight_number: number,
            departure: departure.to_string(),
            arrival: arrival.to_string(),
            day: key.day,
            current_capacity: 0,
        };

        self.total_flights = total_flights;

        let slots = self.days.entry(key.day).or_default();
        if let Some(previous) = &slots[key.slot] {
            log::warn!(
                "Flight {} replaces flight {} ({} -> {}) in {}.",
                flight.flight_number,
                previous.flight_number,
                previous.departure,
                previous.arrival,
                key
            );
        }
        log::debug!("Placed flight {} ({} -> {}) in {}.", flight.flight_number, departure, arrival, key);

        Ok(&*slots[key.slot].insert(flight))
    }

    /// Reserves one unit of capacity on the earliest flight arriving at
    /// `destination` that still has room, and returns it.
    ///
    /// Returns `None` without touching any flight when nothing qualifies.
    pub fn next_available_flight(&mut self, destination: &str) -> Option<&Flight> {
        let flight = self
            .days
            .values_mut()
            .flat_map(|slots| slots.iter_mut())
            .flatten()
            .find(|flight| flight.arrival == destination && flight.has_capacity())?;

        flight.current_capacity += 1;
        log::debug!(
            "Reserved capacity on flight {} to {} ({} in use).",
            flight.flight_number,
            destination,
            flight.current_capacity
        );

        Some(&*flight)
    }

    pub fn flight(&self, key: FlightKey) -> Option<&Flight> {
        self.days.get(&key.day)?.get(key.slot)?.as_ref()
    }

    pub fn day(&self, day: u32) -> Option<&DaySlots> {
        self.days.get(&day)
    }

    /// All set slots as `(day, flight)`, day-ascending then slot-ascending.
    pub fn list_schedule(&self) -> impl Iterator<Item = (u32, &Flight)> + '_ {
        self.days
            .iter()
            .flat_map(|(day, slots)| slots.iter().flatten().map(move |flight| (*day, flight)))
    }

    pub fn is_empty(&self) -> bool {
        self.list_schedule().next().is_none()
    }

    /// Rebuilds the store from its persisted form.
    ///
    /// Day arrays shorter than the daily pattern are padded with unset slots.
    /// Every stored flight must sit in the day and slot its number maps to.
    pub fn from_dto(dto: ScheduleDto) -> Result<Self> {
        let mut days = BTreeMap::new();

        for (day, entries) in dto.schedule {
            if entries.len() > MAX_DAILY_FLIGHTS as usize {
                return Err(Error::CorruptSchedule(format!(
                    "day {} holds {} slots, at most {} are allowed",
                    day,
                    entries.len(),
                    MAX_DAILY_FLIGHTS
                )));
            }

            let mut slots = DaySlots::default();
            for (slot, entry) in entries.into_iter().enumerate() {
                let Some(flight_dto) = entry else {
                    continue;
                };

                let expected = FlightKey::for_flight_number(flight_dto.flight_number);
                if expected != Some(FlightKey { day, slot }) || flight_dto.day != day {
                    return Err(Error::CorruptSchedule(format!(
                        "flight {} is stored in day {} slot {}",
                        flight_dto.flight_number, day, slot
                    )));
                }

                slots[slot] = Some(Flight::from(flight_dto));
            }
            days.insert(day, slots);
        }

        Ok(Schedule { total_flights: dto.total_flights, days })
    }

    pub fn to_dto(&self) -> ScheduleDto {
        ScheduleDto {
            total_flights: self.total_flights,
            schedule: self
                .days
                .iter()
                .map(|(day, slots)| (*day, slots.iter().map(|slot| slot.as_ref().map(Flight::to_dto)).collect()))
                .collect(),
        }
    }
}
