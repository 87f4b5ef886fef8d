//! Plain-text rendering of workshop records

use shared::models::{Booking, Service, User, Vehicle, WorkOrder};
use workshop_client::ListState;
use workshop_client::screens::Notice;

const DATE_FORMAT: &str = "%d %b %Y %H:%M %:z";

pub fn notice(notice: &Notice) {
    if let Some(success) = notice.success() {
        println!("{success}");
    }
}

/// Page footer, or the empty-list line
pub fn footer<T>(list: &ListState<T>, page: u32, what: &str) {
    if list.is_empty() {
        println!("No {what} found.");
    } else {
        println!("-- page {page} of {} ({} total)", list.total_pages(), list.total_data());
    }
}

pub fn booking_row(booking: &Booking) -> String {
    let services: Vec<_> = booking.services.iter().map(|s| s.name.as_str()).collect();
    format!(
        "{:<38} {:<12} {:<24} {:<28} {}",
        booking.id,
        booking.status.as_str(),
        booking.booking_date.format(DATE_FORMAT).to_string(),
        booking.vehicle_label(),
        services.join(", ")
    )
}

pub fn vehicle_row(vehicle: &Vehicle, show_owner: bool) -> String {
    let mut row = format!(
        "{:<38} {:<12} {:<10} {:<12} {:<6} {}",
        vehicle.id, vehicle.license_plate, vehicle.brand, vehicle.model, vehicle.year, vehicle.color
    );
    if show_owner && let Some(owner) = &vehicle.owner {
        row.push_str(&format!("  [{}]", owner.name));
    }
    row
}

pub fn service_row(service: &Service) -> String {
    format!(
        "{:<38} {:<24} {:>12}  {}",
        service.id,
        service.name,
        money(service.price),
        service.description
    )
}

pub fn user_row(user: &User) -> String {
    format!(
        "{:<38} {:<24} {:<28} {:<16} {}",
        user.id, user.name, user.email, user.phone, user.role
    )
}

pub fn work_order_row(order: &WorkOrder) -> String {
    format!(
        "{:<38} {:<12} booking {:<38} mechanic {}",
        order.id,
        order.status.label(),
        order.booking_id,
        order.mechanic().unwrap_or("-")
    )
}

pub fn work_order_detail(order: &WorkOrder) {
    println!("Work order {}", order.id);
    println!("  status    {}", order.status.label());
    println!("  booking   {}", order.booking_id);
    println!("  vehicle   {}", order.vehicle_id);
    println!("  mechanic  {}", order.mechanic().unwrap_or("(unassigned)"));
    if !order.notes.is_empty() {
        println!("  notes     {}", order.notes);
    }
    for line in &order.services {
        println!("  service   {:<24} {:>3} x {:>12}", line.service_name, line.quantity, money(line.price));
    }
    for line in &order.parts {
        println!("  part      {:<24} {:>3} x {:>12}", line.sparepart_id, line.quantity, money(line.price));
    }
    println!("  total     {}", money(order.total()));
    let next: Vec<_> = order.status.next_statuses().map(|s| s.as_str()).collect();
    if !next.is_empty() {
        println!("  next      {}", next.join(", "));
    }
}

pub fn money(value: f64) -> String {
    format!("{value:.2}")
}
