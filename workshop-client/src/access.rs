//! Role-gated visibility
//!
//! Capability flags decide which actions a front end offers. They are a
//! presentation aid only: the backend re-checks every permission, and a
//! signed-out user (`None`) gets no capabilities at all.

use shared::models::{Booking, Role};

/// Bookings screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingCaps {
    pub can_create: bool,
    pub can_update_status: bool,
    pub can_cancel: bool,
}

impl BookingCaps {
    pub fn for_role(role: Option<Role>) -> Self {
        Self {
            can_create: matches!(role, Some(Role::Customer | Role::Admin)),
            can_update_status: matches!(role, Some(Role::Admin | Role::Cashier)),
            can_cancel: matches!(role, Some(Role::Customer)),
        }
    }

    /// Whether the actions column is shown at all
    pub fn shows_actions(&self) -> bool {
        self.can_update_status || self.can_cancel
    }

    /// Cancelled bookings are final
    pub fn can_update_status_of(&self, booking: &Booking) -> bool {
        self.can_update_status && booking.status != shared::models::BookingStatus::Cancelled
    }

    pub fn can_cancel_booking(&self, booking: &Booking) -> bool {
        self.can_cancel && booking.status.is_cancellable()
    }
}

/// Vehicles screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VehicleCaps {
    /// Create, edit, delete
    pub can_modify: bool,
    /// Owner column
    pub show_owner: bool,
}

impl VehicleCaps {
    pub fn for_role(role: Option<Role>) -> Self {
        Self {
            can_modify: matches!(role, Some(Role::Admin | Role::Customer)),
            show_owner: matches!(role, Some(Role::Admin | Role::Cashier)),
        }
    }
}

/// Services screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceCaps {
    pub can_modify: bool,
}

impl ServiceCaps {
    pub fn for_role(role: Option<Role>) -> Self {
        Self {
            can_modify: matches!(role, Some(Role::Admin)),
        }
    }
}

/// Users screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserCaps {
    pub can_view: bool,
}

impl UserCaps {
    pub fn for_role(role: Option<Role>) -> Self {
        Self {
            can_view: matches!(role, Some(Role::Admin | Role::Cashier)),
        }
    }
}

/// Work orders screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkOrderCaps {
    pub can_create: bool,
    pub can_assign: bool,
    pub can_update_status: bool,
}

impl WorkOrderCaps {
    pub fn for_role(role: Option<Role>) -> Self {
        Self {
            can_create: matches!(role, Some(Role::Admin | Role::Cashier)),
            can_assign: matches!(role, Some(Role::Admin | Role::Cashier)),
            can_update_status: matches!(role, Some(Role::Admin | Role::Cashier | Role::Mechanic)),
        }
    }
}

/// All capability flags for one role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub bookings: BookingCaps,
    pub vehicles: VehicleCaps,
    pub services: ServiceCaps,
    pub users: UserCaps,
    pub work_orders: WorkOrderCaps,
}

impl Capabilities {
    pub fn for_role(role: Option<Role>) -> Self {
        Self {
            bookings: BookingCaps::for_role(role),
            vehicles: VehicleCaps::for_role(role),
            services: ServiceCaps::for_role(role),
            users: UserCaps::for_role(role),
            work_orders: WorkOrderCaps::for_role(role),
        }
    }
}

/// Navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
}

const BASE_MENU: [MenuItem; 5] = [
    MenuItem { path: "/dashboard", label: "Dashboard" },
    MenuItem { path: "/bookings", label: "Bookings" },
    MenuItem { path: "/vehicles", label: "Vehicles" },
    MenuItem { path: "/services", label: "Services" },
    MenuItem { path: "/work-orders", label: "Work Orders" },
];

/// Menu for a signed-in role; Users is appended for admin and cashier
pub fn menu_for(role: Role) -> Vec<MenuItem> {
    let mut items = BASE_MENU.to_vec();
    if UserCaps::for_role(Some(role)).can_view {
        items.push(MenuItem { path: "/users", label: "Users" });
    }
    items
}
