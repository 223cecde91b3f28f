use crate::{
    db::db::Db,
    libs::{config::Config, messages::Message, settings::Settings},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Skip the configuration wizard and only seed the default palette
    #[arg(long)]
    skip_config: bool,
}

pub async fn cmd(init_args: InitArgs) -> Result<()> {
    if !init_args.skip_config {
        Config::init()?.save()?;
        msg_success!(Message::ConfigSaved);
    }

    // The database location may have just changed, so open it afterwards.
    let settings = Settings::with_db(&Db::new()?)?;
    if settings.init_preferences().await? {
        msg_info!(Message::PreferencesInitialized);
    }
    Ok(())
}
