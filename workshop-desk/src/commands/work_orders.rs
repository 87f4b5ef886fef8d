//! `work-orders` commands

use std::str::FromStr;

use anyhow::{anyhow, bail};
use shared::models::WorkOrderStatus;
use workshop_client::screens::WorkOrdersScreen;

use super::Desk;
use crate::cli::WorkOrderCommand;
use crate::output;

pub async fn run(desk: &Desk, cmd: WorkOrderCommand) -> anyhow::Result<()> {
    desk.require_user()?;
    let mut screen = WorkOrdersScreen::new(desk.role());
    let api = desk.api();

    match cmd {
        WorkOrderCommand::List { page, status } => {
            let status = status
                .as_deref()
                .map(WorkOrderStatus::from_str)
                .transpose()
                .map_err(|e| anyhow!(e))?;
            screen.query = page.query(desk.page_size, status.map(|s| ("status", s.as_str())));
            screen.refresh(api).await;
            if let Some(error) = screen.list.error() {
                bail!("{error}");
            }
            for order in screen.list.items() {
                println!("{}", output::work_order_row(order));
            }
            output::footer(&screen.list, screen.query.page(), "work orders");
        }
        WorkOrderCommand::Show { id } => {
            let order = screen.view(api, &id).await?;
            output::work_order_detail(order);
        }
        WorkOrderCommand::Create { booking, notes } => {
            screen.load_candidates(api).await?;
            if !screen.candidates.iter().any(|b| b.id == booking) {
                bail!("Booking {booking} is not a confirmed booking.");
            }
            screen.create(api, &booking, &notes).await?;
            output::notice(&screen.notice);
        }
        WorkOrderCommand::Assign { id, mechanic } => {
            screen.load_mechanics(api).await?;
            if !screen.mechanics.iter().any(|m| m.id == mechanic) {
                bail!("User {mechanic} is not a mechanic.");
            }
            let order = screen.view(api, &id).await?.clone();
            screen.assign_mechanic(api, &order, &mechanic).await?;
            output::notice(&screen.notice);
        }
        WorkOrderCommand::Status { id, status } => {
            let status = WorkOrderStatus::from_str(&status).map_err(|e| anyhow!(e))?;
            let order = screen.view(api, &id).await?.clone();
            screen.update_status(api, &order, status).await?;
            output::notice(&screen.notice);
        }
    }
    Ok(())
}
