//! `bookings` commands

use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use chrono::{Local, NaiveDate, TimeZone, Utc};
use shared::models::BookingStatus;
use workshop_client::booking_window::parse_wall_clock;
use workshop_client::screens::{BookingForm, BookingsScreen};

use super::Desk;
use crate::cli::BookingCommand;
use crate::output;

pub async fn run(desk: &Desk, cmd: BookingCommand) -> anyhow::Result<()> {
    desk.require_user()?;
    let mut screen = BookingsScreen::new(desk.role());

    match cmd {
        BookingCommand::List { page, status } => {
            let status = status
                .as_deref()
                .map(BookingStatus::from_str)
                .transpose()
                .map_err(|e| anyhow!(e))?;
            screen.query = page.query(desk.page_size, status.map(|s| ("status", s.as_str())));
            screen.refresh(desk.api()).await;
            if let Some(error) = screen.list.error() {
                bail!("{error}");
            }
            for booking in screen.list.items() {
                println!("{}", output::booking_row(booking));
            }
            output::footer(&screen.list, screen.query.page(), "bookings");
        }
        BookingCommand::Create {
            vehicle,
            date,
            services,
            notes,
        } => {
            let booking_date = parse_wall_clock(&date, &Local)
                .with_context(|| format!("Unrecognised date-time {date:?}, expected \"YYYY-MM-DD HH:MM\""))?;
            let form = BookingForm {
                vehicle_id: vehicle,
                booking_date: Some(booking_date.fixed_offset()),
                notes,
                service_ids: services,
            };
            screen.submit(desk.api(), &form, Utc::now()).await?;
            output::notice(&screen.notice);
        }
        BookingCommand::Slots { date } => {
            let day = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("Unrecognised date {date:?}, expected YYYY-MM-DD"))?;
            let now = Local::now();
            let slots: Vec<String> = (0..24)
                .filter_map(|hour| day.and_hms_opt(hour, 0, 0))
                .filter_map(|naive| Local.from_local_datetime(&naive).earliest())
                .filter(|slot| screen.window.is_selectable_slot(slot, &now))
                .map(|slot| slot.format("%H:%M").to_string())
                .collect();
            if slots.is_empty() {
                println!("No bookable hours on {day}.");
            } else {
                println!("{}", slots.join("  "));
            }
        }
        BookingCommand::Status { id, status } => {
            let status = BookingStatus::from_str(&status).map_err(|e| anyhow!(e))?;
            let booking = screen.locate(desk.api(), &id).await?;
            screen.update_status(desk.api(), &booking, status).await?;
            output::notice(&screen.notice);
        }
        BookingCommand::Cancel { id } => {
            let booking = screen.locate(desk.api(), &id).await?;
            screen.cancel(desk.api(), &booking).await?;
            output::notice(&screen.notice);
        }
    }
    Ok(())
}
