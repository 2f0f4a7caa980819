use std::fmt;

use crate::api::schedule_dto::FlightDto;

/// Number of slots every day of the schedule holds.
pub const MAX_DAILY_FLIGHTS: u32 = 3;

/// Number of orders a single flight can carry.
pub const MAX_CAPACITY: u32 = 20;

/// Position of a flight inside the schedule: the day partition and the slot
/// within that day. Orders keep one of these instead of owning a `Flight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightKey {
    pub day: u32,
    pub slot: usize,
}

impl FlightKey {
    /// Computes where a flight number lives in the repeating daily pattern.
    ///
    /// `day = ceil(n / 3)`. The slot is `(n mod 3) - 1`, where a result of `-1`
    /// (multiples of 3) is the last slot of the day, so the slot always equals
    /// `(n - 1) mod 3`. Flight number `0` has no position.
    pub fn for_flight_number(flight_number: u32) -> Option<Self> {
        if flight_number == 0 {
            return None;
        }

        let day = flight_number.div_ceil(MAX_DAILY_FLIGHTS);
        let slot = match flight_number % MAX_DAILY_FLIGHTS {
            0 => (MAX_DAILY_FLIGHTS - 1) as usize,
            rest => (rest - 1) as usize,
        };

        Some(FlightKey { day, slot })
    }
}

impl fmt::Display for FlightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} slot {}", self.day, self.slot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub flight_number: u32,
    pub departure: String,
    pub arrival: String,
    /// Derived from `flight_number`, stored for reporting and persistence.
    pub day: u32,
    /// Orders reserved on this flight so far. Never exceeds `MAX_CAPACITY`.
    pub current_capacity: u32,
}

impl Flight {
    pub fn key(&self) -> FlightKey {
        FlightKey { day: self.day, slot: ((self.flight_number - 1) % MAX_DAILY_FLIGHTS) as usize }
    }

    pub fn has_capacity(&self) -> bool {
        self.current_capacity < MAX_CAPACITY
    }

    pub fn to_dto(&self) -> FlightDto {
        FlightDto {
            flight_number: self.flight_number,
            departure: self.departure.clone(),
            arrival: self.arrival.clone(),
            day: self.day,
            current_capacity: self.current_capacity,
        }
    }
}

impl From<FlightDto> for Flight {
    fn from(dto: FlightDto) -> Self {
        Flight {
            flight_number: dto.flight_number,
            departure: dto.departure,
            arrival: dto.arrival,
            day: dto.day,
            current_capacity: dto.current_capacity,
        }
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight: {}, departure: {}, arrival: {}, day: {}",
            self.flight_number, self.departure, self.arrival, self.day
        )
    }
}
