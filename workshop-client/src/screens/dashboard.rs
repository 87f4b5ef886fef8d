//! Dashboard - headline counts and recent bookings

use shared::models::{Booking, BookingStatus};

use super::{Notice, ScreenError};
use crate::listing::ListQuery;
use crate::{HttpClient, WorkshopApi};

const RECENT_LIMIT: u32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_bookings: u64,
    pub total_vehicles: u64,
    pub total_services: u64,
    /// Pending among the recent bookings
    pub pending_bookings: usize,
}

#[derive(Debug, Default)]
pub struct DashboardScreen {
    pub stats: DashboardStats,
    pub recent_bookings: Vec<Booking>,
    pub notice: Notice,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the three summaries together; any failure zeroes the stats
    pub async fn refresh<C: HttpClient>(&mut self, api: &WorkshopApi<C>) {
        let recent = ListQuery::new(RECENT_LIMIT);
        let one = ListQuery::new(1);
        let fetched = tokio::try_join!(
            api.list_bookings(&recent),
            api.list_vehicles(&one),
            api.list_services(&one),
        );

        match fetched {
            Ok((bookings, vehicles, services)) => {
                self.stats = DashboardStats {
                    total_bookings: bookings.total_data,
                    total_vehicles: vehicles.total_data,
                    total_services: services.total_data,
                    pending_bookings: bookings
                        .data
                        .iter()
                        .filter(|b| b.status == BookingStatus::Pending)
                        .count(),
                };
                self.recent_bookings = bookings.data;
                self.notice.clear();
            }
            Err(e) => {
                self.stats = DashboardStats::default();
                self.recent_bookings.clear();
                self.notice.fail(ScreenError::request(e, "Failed to load dashboard."));
            }
        }
    }
}
