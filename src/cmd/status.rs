use anyhow::Result;

use crate::cli::{Format, ScheduleArgs};
use crate::config::Config;
use crate::model::StatusReport;
use crate::output::print_status;
use crate::period::status_at;

use super::{load_schedule, resolve_now, twelve_hour};

pub fn cmd_status(config: &Config, format: &Format, args: &ScheduleArgs) -> Result<()> {
    let schedule = load_schedule(args, config)?;
    let now = resolve_now(args.at.as_deref())?;

    let report = StatusReport {
        location: config.selected_location().map(|l| l.name.as_str()),
        calendar: &schedule.calendar,
        status: status_at(&schedule, now),
    };
    print_status(&report, format, twelve_hour(args, config))
}
