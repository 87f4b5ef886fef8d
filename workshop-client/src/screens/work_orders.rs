//! Work orders screen
//!
//! Orders are opened from confirmed bookings, get a mechanic while still
//! pending, and move pending -> in_progress -> completed (or cancelled).

use shared::models::{Booking, BookingStatus, Role, User, WorkOrder, WorkOrderCreate, WorkOrderStatus};

use super::{Notice, ScreenError, ScreenResult, load_page};
use crate::access::WorkOrderCaps;
use crate::api::PICK_LIST_LIMIT;
use crate::listing::{ListQuery, ListState};
use crate::{HttpClient, WorkshopApi};

const FETCH_FAILED: &str = "Failed to fetch work orders";
const DETAIL_FAILED: &str = "Failed to fetch work order details";
const CREATE_FAILED: &str = "Failed to create work order";
const ASSIGN_FAILED: &str = "Failed to assign mechanic";
const STATUS_FAILED: &str = "Failed to update status";

pub struct WorkOrdersScreen {
    pub caps: WorkOrderCaps,
    pub query: ListQuery,
    pub list: ListState<WorkOrder>,
    pub notice: Notice,
    /// Confirmed bookings a new order may be opened from
    pub candidates: Vec<Booking>,
    pub mechanics: Vec<User>,
    /// Order shown in the detail view
    pub selected: Option<WorkOrder>,
}

impl WorkOrdersScreen {
    pub fn new(role: Option<Role>) -> Self {
        Self {
            caps: WorkOrderCaps::for_role(role),
            query: ListQuery::default(),
            list: ListState::new(),
            notice: Notice::default(),
            candidates: Vec::new(),
            mechanics: Vec::new(),
            selected: None,
        }
    }

    pub async fn refresh<C: HttpClient>(&mut self, api: &WorkshopApi<C>) {
        load_page(&mut self.list, api.list_work_orders(&self.query), FETCH_FAILED).await;
    }

    pub async fn filter_status<C: HttpClient>(&mut self, api: &WorkshopApi<C>, status: Option<WorkOrderStatus>) {
        self.query.set_filter("status", status.map(|s| s.as_str()).unwrap_or_default());
        self.refresh(api).await;
    }

    pub async fn search<C: HttpClient>(&mut self, api: &WorkshopApi<C>, text: &str) {
        self.query.set_search(text);
        self.refresh(api).await;
    }

    pub async fn go_to_page<C: HttpClient>(&mut self, api: &WorkshopApi<C>, page: u32) {
        self.query.go_to(page, self.list.total_pages());
        self.refresh(api).await;
    }

    /// Confirmed bookings for the create form
    pub async fn load_candidates<C: HttpClient>(&mut self, api: &WorkshopApi<C>) -> ScreenResult<()> {
        let mut query = ListQuery::new(PICK_LIST_LIMIT).with_filter("status", BookingStatus::Confirmed.as_str());
        let mut candidates = Vec::new();
        loop {
            let page = api
                .list_bookings(&query)
                .await
                .map_err(|e| self.notice.fail(ScreenError::request(e, "Failed to fetch bookings")))?;
            let total_pages = page.page_count();
            candidates.extend(page.data.into_iter().filter(|b| b.status == BookingStatus::Confirmed));
            if !query.next(total_pages) {
                break;
            }
        }
        self.candidates = candidates;
        Ok(())
    }

    /// Users with the mechanic role for the assign form
    pub async fn load_mechanics<C: HttpClient>(&mut self, api: &WorkshopApi<C>) -> ScreenResult<()> {
        let query = ListQuery::new(PICK_LIST_LIMIT).with_filter("role", Role::Mechanic.as_str());
        let page = api
            .list_users(&query)
            .await
            .map_err(|e| self.notice.fail(ScreenError::request(e, "Failed to fetch mechanics")))?;
        self.mechanics = page.data.into_iter().filter(|u| u.role == Role::Mechanic).collect();
        Ok(())
    }

    pub async fn create<C: HttpClient>(
        &mut self,
        api: &WorkshopApi<C>,
        booking_id: &str,
        notes: &str,
    ) -> ScreenResult<()> {
        self.notice.clear();
        if !self.caps.can_create {
            return Err(self.notice.fail(ScreenError::NotAllowed("You cannot create work orders.")));
        }
        if booking_id.trim().is_empty() {
            return Err(self.notice.fail(ScreenError::Invalid("Please select a booking.".into())));
        }
        if let Some(booking) = self.candidates.iter().find(|b| b.id == booking_id)
            && booking.status != BookingStatus::Confirmed
        {
            return Err(self.notice.fail(ScreenError::Invalid(
                "Work orders can only be created from confirmed bookings.".into(),
            )));
        }

        let body = WorkOrderCreate {
            booking_id: booking_id.to_string(),
            notes: notes.to_string(),
        };
        api.create_work_order(&body)
            .await
            .map_err(|e| self.notice.fail(ScreenError::request(e, CREATE_FAILED)))?;

        tracing::info!(booking_id, "Work order created");
        self.notice.succeed("Work order created successfully");
        self.refresh(api).await;
        Ok(())
    }

    /// Load one order into the detail view
    pub async fn view<C: HttpClient>(&mut self, api: &WorkshopApi<C>, id: &str) -> ScreenResult<&WorkOrder> {
        let order = api
            .get_work_order(id)
            .await
            .map_err(|e| self.notice.fail(ScreenError::request(e, DETAIL_FAILED)))?;
        Ok(self.selected.insert(order))
    }

    pub async fn assign_mechanic<C: HttpClient>(
        &mut self,
        api: &WorkshopApi<C>,
        order: &WorkOrder,
        mechanic_id: &str,
    ) -> ScreenResult<()> {
        self.notice.clear();
        if !self.caps.can_assign {
            return Err(self.notice.fail(ScreenError::NotAllowed("You cannot assign mechanics.")));
        }
        if !order.can_assign_mechanic() {
            return Err(self.notice.fail(ScreenError::Invalid(
                "A mechanic can only be assigned to a pending work order.".into(),
            )));
        }
        if mechanic_id.trim().is_empty() {
            return Err(self.notice.fail(ScreenError::Invalid("Please select a mechanic.".into())));
        }
        api.assign_mechanic(&order.id, mechanic_id)
            .await
            .map_err(|e| self.notice.fail(ScreenError::request(e, ASSIGN_FAILED)))?;

        tracing::info!(work_order_id = %order.id, mechanic_id, "Mechanic assigned");
        self.notice.succeed("Mechanic assigned successfully");
        self.after_change(api, &order.id).await;
        Ok(())
    }

    pub async fn update_status<C: HttpClient>(
        &mut self,
        api: &WorkshopApi<C>,
        order: &WorkOrder,
        status: WorkOrderStatus,
    ) -> ScreenResult<()> {
        self.notice.clear();
        if !self.caps.can_update_status {
            return Err(self.notice.fail(ScreenError::NotAllowed("You cannot update work orders.")));
        }
        if !order.status.can_transition_to(status) {
            return Err(self.notice.fail(ScreenError::Invalid(format!(
                "Work order is already {status}."
            ))));
        }
        api.update_work_order_status(&order.id, status)
            .await
            .map_err(|e| self.notice.fail(ScreenError::request(e, STATUS_FAILED)))?;

        tracing::info!(work_order_id = %order.id, from = %order.status, to = %status, "Work order status updated");
        self.notice.succeed(format!("Work order status updated to {status}"));
        self.after_change(api, &order.id).await;
        Ok(())
    }

    /// Reload the list, and the detail view when it shows the changed order
    async fn after_change<C: HttpClient>(&mut self, api: &WorkshopApi<C>, id: &str) {
        self.refresh(api).await;
        if self.selected.as_ref().is_some_and(|o| o.id == id) {
            match api.get_work_order(id).await {
                Ok(order) => self.selected = Some(order),
                Err(e) => tracing::warn!(work_order_id = %id, error = %e, "Failed to reload work order"),
            }
        }
    }
}
