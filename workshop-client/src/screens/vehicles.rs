//! Vehicles screen

use shared::models::{Role, Vehicle};

use super::{Notice, ScreenError, ScreenResult, load_page};
use crate::access::VehicleCaps;
use crate::forms::VehicleForm;
use crate::listing::{ListQuery, ListState};
use crate::{HttpClient, WorkshopApi};

const FETCH_FAILED: &str = "Failed to fetch vehicles.";
const SAVE_FAILED: &str = "Operation failed.";
const DELETE_FAILED: &str = "Delete failed.";
const NOT_ALLOWED: &str = "You cannot modify vehicles.";

pub struct VehiclesScreen {
    pub caps: VehicleCaps,
    pub query: ListQuery,
    pub list: ListState<Vehicle>,
    pub notice: Notice,
}

impl VehiclesScreen {
    pub fn new(role: Option<Role>) -> Self {
        Self {
            caps: VehicleCaps::for_role(role),
            query: ListQuery::default(),
            list: ListState::new(),
            notice: Notice::default(),
        }
    }

    pub async fn refresh<C: HttpClient>(&mut self, api: &WorkshopApi<C>) {
        load_page(&mut self.list, api.list_vehicles(&self.query), FETCH_FAILED).await;
    }

    pub async fn search<C: HttpClient>(&mut self, api: &WorkshopApi<C>, text: &str) {
        self.query.set_search(text);
        self.refresh(api).await;
    }

    pub async fn go_to_page<C: HttpClient>(&mut self, api: &WorkshopApi<C>, page: u32) {
        self.query.go_to(page, self.list.total_pages());
        self.refresh(api).await;
    }

    /// Create when `id` is `None`, update otherwise
    pub async fn save<C: HttpClient>(
        &mut self,
        api: &WorkshopApi<C>,
        id: Option<&str>,
        form: &VehicleForm,
    ) -> ScreenResult<()> {
        self.notice.clear();
        if !self.caps.can_modify {
            return Err(self.notice.fail(ScreenError::NotAllowed(NOT_ALLOWED)));
        }
        let input = form.validate().map_err(|e| self.notice.fail(ScreenError::Fields(e)))?;

        let result = match id {
            Some(id) => api.update_vehicle(id, &input).await,
            None => api.create_vehicle(&input).await,
        };
        result.map_err(|e| self.notice.fail(ScreenError::request(e, SAVE_FAILED)))?;

        let message = if id.is_some() {
            "Vehicle updated successfully"
        } else {
            "Vehicle created successfully"
        };
        tracing::info!(plate = %input.license_plate, "{message}");
        self.notice.succeed(message);
        self.refresh(api).await;
        Ok(())
    }

    pub async fn delete<C: HttpClient>(&mut self, api: &WorkshopApi<C>, id: &str) -> ScreenResult<()> {
        self.notice.clear();
        if !self.caps.can_modify {
            return Err(self.notice.fail(ScreenError::NotAllowed(NOT_ALLOWED)));
        }
        api.delete_vehicle(id)
            .await
            .map_err(|e| self.notice.fail(ScreenError::request(e, DELETE_FAILED)))?;

        tracing::info!(vehicle_id = %id, "Vehicle deleted");
        self.notice.succeed("Vehicle deleted successfully");
        self.refresh(api).await;
        Ok(())
    }
}
