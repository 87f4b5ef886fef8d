//! Session, profile, dashboard and menu commands

use anyhow::bail;
use workshop_client::access::menu_for;
use workshop_client::forms::{LoginForm, RegisterForm};
use workshop_client::screens::{DashboardScreen, ForgotPasswordScreen, LoginScreen, ProfileScreen, RegisterScreen};

use super::{Desk, prompt};
use crate::cli::ProfileArgs;
use crate::output;

fn password_or_prompt(password: Option<String>, label: &str) -> anyhow::Result<String> {
    match password {
        Some(password) => Ok(password),
        None => prompt(label),
    }
}

pub async fn login(desk: &mut Desk, email: &str, password: Option<String>) -> anyhow::Result<()> {
    let mut screen = LoginScreen::new();
    screen.form = LoginForm {
        email: email.to_string(),
        password: password_or_prompt(password, "Password")?,
    };

    if let Err(e) = screen.submit(&mut desk.session).await {
        if screen.show_reset_link {
            eprintln!("Forgot your password? Run `workshop-desk forgot-password --email {email}`.");
        }
        return Err(e.into());
    }

    let user = desk.require_user()?;
    println!("Signed in as {} ({})", user.name, user.role);
    Ok(())
}

pub async fn register(
    desk: &Desk,
    name: String,
    email: String,
    phone: String,
    password: Option<String>,
) -> anyhow::Result<()> {
    let password = password_or_prompt(password, "Password")?;
    let confirm_password = prompt("Confirm password")?;

    let mut screen = RegisterScreen::new();
    screen.form = RegisterForm {
        name,
        email,
        phone,
        password,
        confirm_password,
    };
    screen.submit(&desk.session).await?;
    output::notice(&screen.notice);
    Ok(())
}

pub async fn logout(desk: &mut Desk) -> anyhow::Result<()> {
    desk.session.logout().await;
    println!("Signed out.");
    Ok(())
}

pub fn whoami(desk: &Desk) -> anyhow::Result<()> {
    let user = desk.require_user()?;
    println!("{}", output::user_row(user));

    let caps = desk.session.capabilities();
    let mut allowed = Vec::new();
    if caps.bookings.can_create {
        allowed.push("create bookings");
    }
    if caps.bookings.can_update_status {
        allowed.push("update booking status");
    }
    if caps.vehicles.can_modify {
        allowed.push("manage vehicles");
    }
    if caps.services.can_modify {
        allowed.push("manage services");
    }
    if caps.users.can_view {
        allowed.push("view users");
    }
    if caps.work_orders.can_create {
        allowed.push("open work orders");
    }
    if caps.work_orders.can_update_status {
        allowed.push("update work orders");
    }
    if !allowed.is_empty() {
        println!("Can: {}", allowed.join(", "));
    }
    Ok(())
}

pub async fn profile(desk: &mut Desk, args: ProfileArgs) -> anyhow::Result<()> {
    desk.require_user()?;
    let mut screen = ProfileScreen::new(&desk.session);
    if let Some(name) = args.name {
        screen.form.name = name;
    }
    if let Some(email) = args.email {
        screen.form.email = email;
    }
    if let Some(phone) = args.phone {
        screen.form.phone = phone;
    }
    if let Some(password) = args.password {
        screen.form.password = password;
        screen.form.confirm_password = prompt("Confirm new password")?;
    }

    screen.submit(&mut desk.session).await?;
    output::notice(&screen.notice);
    Ok(())
}

pub async fn forgot_password(desk: &Desk, email: String) -> anyhow::Result<()> {
    let mut screen = ForgotPasswordScreen::new();
    screen.email = email;
    screen.submit(&desk.session).await?;
    output::notice(&screen.notice);
    Ok(())
}

pub async fn dashboard(desk: &Desk) -> anyhow::Result<()> {
    let user = desk.require_user()?;
    let mut screen = DashboardScreen::new();
    screen.refresh(desk.api()).await;
    if let Some(error) = screen.notice.error() {
        bail!("{error}");
    }

    println!("Welcome back, {}", user.name);
    println!("  bookings  {}", screen.stats.total_bookings);
    println!("  vehicles  {}", screen.stats.total_vehicles);
    println!("  services  {}", screen.stats.total_services);
    println!("  pending   {} (of the latest {})", screen.stats.pending_bookings, screen.recent_bookings.len());
    if !screen.recent_bookings.is_empty() {
        println!();
        println!("Recent bookings");
        for booking in &screen.recent_bookings {
            println!("{}", output::booking_row(booking));
        }
    }
    Ok(())
}

pub fn menu(desk: &Desk) -> anyhow::Result<()> {
    let user = desk.require_user()?;
    for item in menu_for(user.role) {
        println!("{:<12} {}", item.label, item.path);
    }
    Ok(())
}
