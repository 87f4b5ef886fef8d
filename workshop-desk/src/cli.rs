//! Command line definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "workshop-desk")]
#[command(version)]
#[command(about = "Front desk for the vehicle workshop backend")]
pub struct Cli {
    /// API base URL
    #[arg(long, env = "WORKSHOP_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Directory holding the session file and logs
    #[arg(long, env = "WORKSHOP_HOME", global = true)]
    pub home: Option<PathBuf>,

    /// Echo debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        /// Read from stdin when omitted
        #[arg(long, env = "WORKSHOP_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Create a customer account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out and forget the session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Update the signed-in user's profile
    Profile(ProfileArgs),
    /// Request a password reset link
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Headline counts and recent bookings
    Dashboard,
    /// Screens available to the signed-in role
    Menu,
    #[command(subcommand)]
    Bookings(BookingCommand),
    #[command(subcommand)]
    Vehicles(VehicleCommand),
    #[command(subcommand)]
    Services(ServiceCommand),
    #[command(subcommand)]
    Users(UserCommand),
    #[command(subcommand)]
    WorkOrders(WorkOrderCommand),
}

#[derive(Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// New password; confirmation is read from stdin
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Args)]
pub struct PageArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Subcommand)]
pub enum BookingCommand {
    /// List bookings
    List {
        #[command(flatten)]
        page: PageArgs,
        /// pending, confirmed, on-progress, completed, cancelled
        #[arg(long)]
        status: Option<String>,
    },
    /// Book services for a vehicle
    Create {
        #[arg(long)]
        vehicle: String,
        /// Local wall-clock time, e.g. "2024-06-01 09:00"
        #[arg(long)]
        date: String,
        /// Service id; repeat for several
        #[arg(long = "service", required = true)]
        services: Vec<String>,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Bookable hours on a date
    Slots {
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
    /// Change a booking's status (staff)
    Status { id: String, status: String },
    /// Cancel a pending or confirmed booking (customer)
    Cancel { id: String },
}

#[derive(Args)]
pub struct VehicleArgs {
    #[arg(long)]
    pub brand: String,
    #[arg(long)]
    pub model: String,
    #[arg(long)]
    pub year: String,
    #[arg(long)]
    pub plate: String,
    #[arg(long)]
    pub color: String,
}

#[derive(Subcommand)]
pub enum VehicleCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Create(VehicleArgs),
    Update {
        id: String,
        #[command(flatten)]
        vehicle: VehicleArgs,
    },
    Delete { id: String },
}

#[derive(Args)]
pub struct ServiceArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long)]
    pub price: String,
}

#[derive(Subcommand)]
pub enum ServiceCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Create(ServiceArgs),
    Update {
        id: String,
        #[command(flatten)]
        service: ServiceArgs,
    },
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum UserCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
        /// admin, cashier, mechanic, customer
        #[arg(long)]
        role: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum WorkOrderCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
        /// pending, in_progress, completed, cancelled
        #[arg(long)]
        status: Option<String>,
    },
    /// Details and total of one work order
    Show { id: String },
    /// Open a work order from a confirmed booking
    Create {
        #[arg(long)]
        booking: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Assign a mechanic to a pending work order
    Assign {
        id: String,
        #[arg(long)]
        mechanic: String,
    },
    /// Move a work order to its next status
    Status { id: String, status: String },
}
