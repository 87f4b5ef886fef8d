//! `vehicles`, `services` and `users` commands

use std::str::FromStr;

use anyhow::{anyhow, bail};
use shared::models::{Role, VehicleInput};
use workshop_client::forms::{ServiceForm, VehicleForm};
use workshop_client::screens::{ServicesScreen, UsersScreen, VehiclesScreen};

use super::Desk;
use crate::cli::{ServiceArgs, ServiceCommand, UserCommand, VehicleArgs, VehicleCommand};
use crate::output;

impl From<VehicleArgs> for VehicleForm {
    fn from(args: VehicleArgs) -> Self {
        VehicleForm(VehicleInput {
            brand: args.brand,
            model: args.model,
            year: args.year,
            license_plate: args.plate,
            color: args.color,
        })
    }
}

impl From<ServiceArgs> for ServiceForm {
    fn from(args: ServiceArgs) -> Self {
        ServiceForm {
            name: args.name,
            description: args.description,
            price: args.price,
        }
    }
}

pub async fn vehicles(desk: &Desk, cmd: VehicleCommand) -> anyhow::Result<()> {
    desk.require_user()?;
    let mut screen = VehiclesScreen::new(desk.role());
    let api = desk.api();

    match cmd {
        VehicleCommand::List { page } => {
            screen.query = page.query(desk.page_size, None);
            screen.refresh(api).await;
            if let Some(error) = screen.list.error() {
                bail!("{error}");
            }
            for vehicle in screen.list.items() {
                println!("{}", output::vehicle_row(vehicle, screen.caps.show_owner));
            }
            output::footer(&screen.list, screen.query.page(), "vehicles");
        }
        VehicleCommand::Create(args) => {
            screen.save(api, None, &args.into()).await?;
            output::notice(&screen.notice);
        }
        VehicleCommand::Update { id, vehicle } => {
            screen.save(api, Some(&id), &vehicle.into()).await?;
            output::notice(&screen.notice);
        }
        VehicleCommand::Delete { id } => {
            screen.delete(api, &id).await?;
            output::notice(&screen.notice);
        }
    }
    Ok(())
}

pub async fn services(desk: &Desk, cmd: ServiceCommand) -> anyhow::Result<()> {
    desk.require_user()?;
    let mut screen = ServicesScreen::new(desk.role());
    let api = desk.api();

    match cmd {
        ServiceCommand::List { page } => {
            screen.query = page.query(desk.page_size, None);
            screen.refresh(api).await;
            if let Some(error) = screen.list.error() {
                bail!("{error}");
            }
            for service in screen.list.items() {
                println!("{}", output::service_row(service));
            }
            output::footer(&screen.list, screen.query.page(), "services");
        }
        ServiceCommand::Create(args) => {
            screen.save(api, None, &args.into()).await?;
            output::notice(&screen.notice);
        }
        ServiceCommand::Update { id, service } => {
            screen.save(api, Some(&id), &service.into()).await?;
            output::notice(&screen.notice);
        }
        ServiceCommand::Delete { id } => {
            screen.delete(api, &id).await?;
            output::notice(&screen.notice);
        }
    }
    Ok(())
}

pub async fn users(desk: &Desk, cmd: UserCommand) -> anyhow::Result<()> {
    desk.require_user()?;
    let mut screen = UsersScreen::new(desk.role());
    if !screen.caps.can_view {
        bail!("Only administrators and cashiers can view users.");
    }

    match cmd {
        UserCommand::List { page, role } => {
            let role = role.as_deref().map(Role::from_str).transpose().map_err(|e| anyhow!(e))?;
            screen.query = page.query(desk.page_size, role.map(|r| ("role", r.as_str())));
            screen.refresh(desk.api()).await;
            if let Some(error) = screen.list.error() {
                bail!("{error}");
            }
            for user in screen.list.items() {
                println!("{}", output::user_row(user));
            }
            output::footer(&screen.list, screen.query.page(), "users");
        }
    }
    Ok(())
}
