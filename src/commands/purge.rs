use super::parse_date;
use crate::libs::calendar::Calendar;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PurgeArgs {
    #[arg(long, short, default_value = "today", help = "Delete tasks whose last day is before this date")]
    before: String,
}

pub async fn cmd(args: PurgeArgs, calendar: &Calendar) -> Result<()> {
    let before = parse_date(&args.before)?;
    let purged = calendar.purge_expired(before).wait().await?;
    msg_success!(Message::TasksPurged(purged));
    Ok(())
}
