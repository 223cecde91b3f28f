use crate::libs::color::Color;
use crate::libs::messages::Message;
use crate::libs::settings::{PaletteError, Settings};
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ColorsArgs {
    #[command(subcommand)]
    command: Option<ColorsCommand>,
}

#[derive(Debug, Subcommand)]
enum ColorsCommand {
    /// Show the palette
    List,
    /// Add a named color
    Add {
        /// AARRGGBB value, with or without a leading '#'
        color: String,
        name: String,
    },
}

pub async fn cmd(args: ColorsArgs, settings: &Settings) -> Result<()> {
    match args.command {
        Some(ColorsCommand::Add { color, name }) => handle_add(&color, &name, settings).await,
        Some(ColorsCommand::List) | None => handle_list(settings),
    }
}

fn handle_list(settings: &Settings) -> Result<()> {
    msg_print!(Message::ColorsHeader, true);
    View::palette(&settings.color_map())
}

async fn handle_add(color: &str, name: &str, settings: &Settings) -> Result<()> {
    let Ok(color) = color.parse::<Color>() else {
        msg_error!(Message::ColorUnknown(color.to_string()));
        return Ok(());
    };

    match settings.save_color_entry(color, name).await {
        Ok(()) => msg_success!(Message::ColorSaved(color.to_string(), name.to_string())),
        Err(PaletteError::DuplicateColorOrName { color, name }) => {
            msg_error!(Message::ColorRejected(color.to_string(), name));
        }
        Err(PaletteError::Storage(e)) => return Err(e),
    }
    Ok(())
}
