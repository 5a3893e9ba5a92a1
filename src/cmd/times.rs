use anyhow::Result;

use crate::cli::{Format, ScheduleArgs};
use crate::clock::ClockTime;
use crate::config::Config;
use crate::model::DayTable;
use crate::output::print_times;
use crate::period::{day_rows, resolve_period};

use super::{load_schedule, resolve_now, twelve_hour};

pub fn cmd_times(config: &Config, format: &Format, args: &ScheduleArgs) -> Result<()> {
    let schedule = load_schedule(args, config)?;
    let now = resolve_now(args.at.as_deref())?;

    let table = DayTable {
        location: config.selected_location().map(|l| l.name.as_str()),
        calendar: &schedule.calendar,
        current: resolve_period(&schedule, ClockTime::from(now.time())),
        rows: day_rows(&schedule),
    };
    print_times(&table, format, twelve_hour(args, config))
}
