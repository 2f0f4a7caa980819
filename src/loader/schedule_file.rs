use std::path::Path;

use crate::api::schedule_dto::ScheduleDto;
use crate::domain::schedule::Schedule;
use crate::error::Result;
use crate::loader::parser::{parse_json_file, write_json_file};

/// Loads the schedule store from `path`, or starts an empty one when the file
/// does not exist yet. A file that exists but cannot be parsed is an error.
pub fn load_or_create(path: &Path) -> Result<Schedule> {
    if !path.exists() {
        log::info!("No schedule at '{}', starting with an empty schedule.", path.display());
        return Ok(Schedule::new());
    }

    let dto: ScheduleDto = parse_json_file(path)?;
    let schedule = Schedule::from_dto(dto)?;
    log::info!(
        "Loaded schedule from '{}': {} flights in slots, {} added in total.",
        path.display(),
        schedule.list_schedule().count(),
        schedule.total_flights()
    );

    Ok(schedule)
}

/// Overwrites `path` with the full schedule.
pub fn save(path: &Path, schedule: &Schedule) -> Result<()> {
    write_json_file(path, &schedule.to_dto())?;
    log::info!("Saved schedule to '{}'.", path.display());
    Ok(())
}
