use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// On-disk form of the whole schedule file.
///
/// Day keys are written as JSON strings (`"1"`, `"2"`, ...) and parsed back
/// into integers, so days always come out in ascending numeric order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub total_flights: u32,
    pub schedule: BTreeMap<u32, Vec<Option<FlightDto>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    #[serde(alias = "flightnumber")]
    pub flight_number: u32,
    pub departure: String,
    pub arrival: String,
    pub day: u32,
    #[serde(default)]
    pub current_capacity: u32,
}
