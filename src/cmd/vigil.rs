use anyhow::Result;

use crate::cli::{Format, ScheduleArgs};
use crate::config::Config;
use crate::output::print_vigil;
use crate::vigil::night_vigil;

use super::{load_schedule, twelve_hour};

pub fn cmd_vigil(config: &Config, format: &Format, args: &ScheduleArgs) -> Result<()> {
    let schedule = load_schedule(args, config)?;
    let window = night_vigil(schedule.isha, schedule.fajr);
    print_vigil(&window, format, twelve_hour(args, config))
}
