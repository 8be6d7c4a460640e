//! Command - セッション入力 1 行を `Command` に変換する

use anyhow::{Result, anyhow};
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};

use dispatch_core::app::ProfileAction;
use dispatch_core::domain::{
    ContainerSize, DEFAULT_PROVINCE, DeliveryId, DeliveryStatus, DeliveryType, NewDelivery,
    PROVINCES,
};

#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every delivery (after the driver filter)
    List,
    /// Deliveries on the reference date
    Today,
    /// Deliveries after the reference date
    Upcoming,
    /// Count deliveries by status
    Stats,
    /// Show one delivery in full
    Show { id: DeliveryId },
    /// Open the details of a delivery
    Select { id: DeliveryId },
    /// Close the details view
    Close,
    /// Set the status of a delivery (scheduled, en-route, arrived, delivered, delayed)
    Status { id: DeliveryId, status: DeliveryStatus },
    /// Show only one driver's deliveries; repeat to clear
    Filter { driver: String },
    /// Open maps for a delivery
    Navigate { id: DeliveryId },
    /// Call the customer of a delivery
    Call { id: DeliveryId },
    /// Driver settings and preferences
    Settings,
    /// Show the driver profile, or run one of its actions
    /// (call, email, notifications, location, settings, emergency)
    Profile { action: Option<ProfileAction> },
    /// List the driver roster
    Drivers,
    /// List province/state codes
    Provinces,
    /// Print all visible deliveries as JSON
    Json,
    /// Schedule a new delivery
    Add(AddArgs),
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub customer: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long, default_value = DEFAULT_PROVINCE, value_parser = PossibleValuesParser::new(PROVINCES))]
    pub province: String,
    #[arg(long, default_value = "20")]
    pub size: ContainerSize,
    #[arg(long = "type", default_value = "sales")]
    pub delivery_type: DeliveryType,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// HH:MM (24h)
    #[arg(long)]
    pub time: Option<String>,
    /// Driver id from the roster (see `drivers`)
    #[arg(long)]
    pub driver: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl AddArgs {
    /// 省略された項目は空のままにして、ワークフローに報告させる
    pub fn into_input(self) -> NewDelivery {
        NewDelivery {
            customer_name: self.customer.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            province: self.province,
            container_size: self.size,
            delivery_type: self.delivery_type,
            scheduled_date: self.date.unwrap_or_default(),
            scheduled_time: self.time.unwrap_or_default(),
            special_instructions: self.notes.filter(|notes| !notes.is_empty()),
            driver_id: self.driver.unwrap_or_default(),
            ..NewDelivery::default()
        }
    }
}

/// シェルと同じ規則（クォート、バックスラッシュ）で単語に分ける
pub fn split_words(line: &str) -> Result<Vec<String>> {
    shlex::split(line).ok_or_else(|| anyhow!("unbalanced quotes or trailing backslash"))
}

/// 空行と `#` コメントは `Ok(None)`
pub fn parse_line(line: &str) -> Result<Option<Result<Command, clap::Error>>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let words = split_words(trimmed)?;
    Ok(Some(Line::try_parse_from(words).map(|line| line.command)))
}
