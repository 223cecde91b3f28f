use crate::libs::messages::Message;
use crate::libs::settings::{toggle_setting, toggle_settings, Settings};
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: Option<SettingsCommand>,
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Show every toggle with its current value
    List,
    /// Turn a toggle on or off
    Set {
        key: String,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

pub async fn cmd(args: SettingsArgs, settings: &Settings) -> Result<()> {
    match args.command {
        Some(SettingsCommand::Set { key, value }) => handle_set(&key, value, settings).await,
        Some(SettingsCommand::List) | None => handle_list(settings),
    }
}

fn handle_list(settings: &Settings) -> Result<()> {
    let toggles: Vec<_> = toggle_settings().iter().map(|toggle| (*toggle, settings.toggle(*toggle))).collect();
    msg_print!(Message::SettingsHeader, true);
    View::settings(&toggles)
}

async fn handle_set(key: &str, value: bool, settings: &Settings) -> Result<()> {
    if toggle_setting(key).is_none() {
        msg_error!(Message::SettingUnknown(key.to_string()));
        return Ok(());
    }
    settings.set_boolean(key, value).wait().await?;
    msg_success!(Message::SettingUpdated(key.to_string(), value));
    Ok(())
}
