//! Bookings screen

use chrono::{DateTime, FixedOffset, Utc};
use shared::models::{Booking, BookingCreate, BookingStatus, Role, Service, Vehicle};

use super::{Notice, ScreenError, ScreenResult, load_page};
use crate::access::BookingCaps;
use crate::api::PICK_LIST_LIMIT;
use crate::booking_window::BookingWindow;
use crate::listing::{ListQuery, ListState};
use crate::{HttpClient, WorkshopApi};

const FETCH_FAILED: &str = "Failed to fetch bookings.";
const CREATE_FAILED: &str = "Operation failed.";
const STATUS_FAILED: &str = "Status update failed.";
const CANCEL_FAILED: &str = "Failed to cancel booking.";

/// New booking form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub vehicle_id: String,
    pub booking_date: Option<DateTime<FixedOffset>>,
    pub notes: String,
    pub service_ids: Vec<String>,
}

impl BookingForm {
    /// Select or deselect a service
    pub fn toggle_service(&mut self, service_id: &str) {
        if let Some(pos) = self.service_ids.iter().position(|id| id == service_id) {
            self.service_ids.remove(pos);
        } else {
            self.service_ids.push(service_id.to_string());
        }
    }

    pub fn is_selected(&self, service_id: &str) -> bool {
        self.service_ids.iter().any(|id| id == service_id)
    }
}

pub struct BookingsScreen {
    pub caps: BookingCaps,
    pub query: ListQuery,
    pub list: ListState<Booking>,
    pub notice: Notice,
    pub window: BookingWindow,
    /// Pick list for the form
    pub vehicles: Vec<Vehicle>,
    /// Pick list for the form
    pub services: Vec<Service>,
}

impl BookingsScreen {
    pub fn new(role: Option<Role>) -> Self {
        Self {
            caps: BookingCaps::for_role(role),
            query: ListQuery::default(),
            list: ListState::new(),
            notice: Notice::default(),
            window: BookingWindow::default(),
            vehicles: Vec::new(),
            services: Vec::new(),
        }
    }

    pub async fn refresh<C: HttpClient>(&mut self, api: &WorkshopApi<C>) {
        load_page(&mut self.list, api.list_bookings(&self.query), FETCH_FAILED).await;
    }

    pub async fn search<C: HttpClient>(&mut self, api: &WorkshopApi<C>, text: &str) {
        self.query.set_search(text);
        self.refresh(api).await;
    }

    /// `None` shows every status
    pub async fn filter_status<C: HttpClient>(&mut self, api: &WorkshopApi<C>, status: Option<BookingStatus>) {
        self.query.set_filter("status", status.map(|s| s.as_str()).unwrap_or_default());
        self.refresh(api).await;
    }

    pub async fn go_to_page<C: HttpClient>(&mut self, api: &WorkshopApi<C>, page: u32) {
        self.query.go_to(page, self.list.total_pages());
        self.refresh(api).await;
    }

    /// Load the vehicle and service pick lists
    pub async fn load_options<C: HttpClient>(&mut self, api: &WorkshopApi<C>) -> ScreenResult<()> {
        let query = ListQuery::new(PICK_LIST_LIMIT);
        let (vehicles, services) = tokio::join!(api.list_vehicles(&query), api.list_services(&query));
        self.vehicles = vehicles
            .map_err(|e| self.notice.fail(ScreenError::request(e, "Failed to fetch vehicles.")))?
            .data;
        self.services = services
            .map_err(|e| self.notice.fail(ScreenError::request(e, "Failed to fetch services.")))?
            .data;
        Ok(())
    }

    /// Blank form with the date one lead time from `now`
    pub fn new_form(&mut self, now: DateTime<FixedOffset>) -> BookingForm {
        self.notice.clear();
        BookingForm {
            booking_date: Some(self.window.initial_date(&now)),
            ..Default::default()
        }
    }

    /// Validate and create a booking, then reload the list
    pub async fn submit<C: HttpClient>(
        &mut self,
        api: &WorkshopApi<C>,
        form: &BookingForm,
        now: DateTime<Utc>,
    ) -> ScreenResult<()> {
        self.notice.clear();
        if !self.caps.can_create {
            return Err(self.notice.fail(ScreenError::NotAllowed("You cannot create bookings.")));
        }

        let booking_date = self
            .window
            .check(form.booking_date.as_ref(), now, form.service_ids.len())
            .map_err(|rejection| self.notice.fail(ScreenError::Invalid(rejection.to_string())))?;

        let body = BookingCreate {
            vehicle_id: form.vehicle_id.clone(),
            booking_date,
            notes: form.notes.clone(),
            service_ids: form.service_ids.clone(),
        };
        api.create_booking(&body)
            .await
            .map_err(|e| self.notice.fail(ScreenError::request(e, CREATE_FAILED)))?;

        tracing::info!(vehicle_id = %body.vehicle_id, date = %body.booking_date, "Booking created");
        self.notice.succeed("Booking created successfully");
        self.refresh(api).await;
        Ok(())
    }

    /// Staff status change; cancelled bookings are final
    pub async fn update_status<C: HttpClient>(
        &mut self,
        api: &WorkshopApi<C>,
        booking: &Booking,
        status: BookingStatus,
    ) -> ScreenResult<()> {
        self.notice.clear();
        if !self.caps.can_update_status_of(booking) {
            return Err(self.notice.fail(ScreenError::NotAllowed("This booking's status cannot be changed.")));
        }
        api.update_booking_status(&booking.id, status)
            .await
            .map_err(|e| self.notice.fail(ScreenError::request(e, STATUS_FAILED)))?;

        tracing::info!(booking_id = %booking.id, from = %booking.status, to = %status, "Booking status updated");
        self.notice.succeed("Booking status updated successfully");
        self.refresh(api).await;
        Ok(())
    }

    /// Customer cancellation of a pending or confirmed booking
    pub async fn cancel<C: HttpClient>(&mut self, api: &WorkshopApi<C>, booking: &Booking) -> ScreenResult<()> {
        self.notice.clear();
        if !self.caps.can_cancel_booking(booking) {
            return Err(self.notice.fail(ScreenError::NotAllowed("This booking cannot be cancelled.")));
        }
        api.update_booking_status(&booking.id, BookingStatus::Cancelled)
            .await
            .map_err(|e| self.notice.fail(ScreenError::request(e, CANCEL_FAILED)))?;

        tracing::info!(booking_id = %booking.id, "Booking cancelled");
        self.notice.succeed("Booking cancelled successfully");
        self.refresh(api).await;
        Ok(())
    }

    /// Find a row of the current page by id
    pub fn find(&self, id: &str) -> Option<&Booking> {
        self.list.items().iter().find(|b| b.id == id)
    }

    /// Look a booking up by id, paging through the list when it is not on
    /// the current page (the backend has no single-booking endpoint)
    pub async fn locate<C: HttpClient>(&mut self, api: &WorkshopApi<C>, id: &str) -> ScreenResult<Booking> {
        if let Some(booking) = self.find(id) {
            return Ok(booking.clone());
        }
        let mut query = ListQuery::new(PICK_LIST_LIMIT);
        loop {
            let page = api
                .list_bookings(&query)
                .await
                .map_err(|e| self.notice.fail(ScreenError::request(e, FETCH_FAILED)))?;
            let total_pages = page.page_count();
            if let Some(booking) = page.data.into_iter().find(|b| b.id == id) {
                return Ok(booking);
            }
            if !query.next(total_pages) {
                break;
            }
        }
        Err(self.notice.fail(ScreenError::Invalid(format!("Booking {id} not found."))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_service() {
        let mut form = BookingForm::default();
        form.toggle_service("svc-1");
        form.toggle_service("svc-2");
        assert!(form.is_selected("svc-1"));
        form.toggle_service("svc-1");
        assert_eq!(form.service_ids, vec!["svc-2".to_string()]);
    }

    #[test]
    fn test_new_form_starts_one_hour_ahead() {
        let mut screen = BookingsScreen::new(Some(Role::Customer));
        let now = DateTime::parse_from_rfc3339("2024-06-01T10:30:00+07:00").unwrap();
        let form = screen.new_form(now);
        assert_eq!(
            form.booking_date,
            Some(DateTime::parse_from_rfc3339("2024-06-01T11:30:00+07:00").unwrap())
        );
        assert!(form.service_ids.is_empty());
    }
}
