//! Typed workshop API
//!
//! One method per backend endpoint. Mutations return `()`: every screen
//! re-fetches its list afterwards, so the echoed entity is not needed.

use serde_json::Value;
use shared::client::{ForgotPasswordRequest, LoginRequest, LoginResponse, ProfileUpdate, RegisterRequest};
use shared::models::{
    AssignMechanic, Booking, BookingCreate, BookingStatus, BookingStatusUpdate, Service, ServiceInput,
    User, Vehicle, VehicleInput, WorkOrder, WorkOrderCreate, WorkOrderStatus, WorkOrderStatusUpdate,
};
use shared::response::{ApiResponse, PaginatedResponse};

use crate::listing::ListQuery;
use crate::{ClientError, ClientResult, HttpClient};

/// Page size used for pick lists (vehicles, services, bookings, mechanics)
pub const PICK_LIST_LIMIT: u32 = 100;

/// Typed wrapper over an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct WorkshopApi<C: HttpClient> {
    http: C,
}

fn require_data<T>(resp: ApiResponse<T>, what: &str) -> ClientResult<T> {
    resp.into_data()
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {what} data")))
}

impl<C: HttpClient> WorkshopApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.http.set_token(token);
    }

    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> ClientResult<PaginatedResponse<T>> {
        self.http.get_with_query(path, &query.to_query_pairs()).await
    }

    // ========== Auth API ==========

    /// Exchange credentials for a bearer token
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<String> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: ApiResponse<LoginResponse> = self.http.post("user/login", &req).await?;
        let login = require_data(resp, "login")?;
        if login.token.is_empty() {
            return Err(ClientError::InvalidResponse("Empty token in login response".into()));
        }
        Ok(login.token)
    }

    pub async fn register(&self, req: &RegisterRequest) -> ClientResult<()> {
        let _resp: ApiResponse<Value> = self.http.post("user/register", req).await?;
        Ok(())
    }

    /// Invalidate the current token server-side
    pub async fn logout(&self) -> ClientResult<()> {
        let _resp: ApiResponse<Value> = self.http.post_empty("user/logout").await?;
        Ok(())
    }

    /// Fetch the signed-in user
    pub async fn current_user(&self) -> ClientResult<User> {
        let resp: ApiResponse<User> = self.http.get("user").await?;
        require_data(resp, "user")
    }

    /// Update the signed-in user's profile (and optionally password)
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<User> {
        let resp: ApiResponse<User> = self.http.put("user", update).await?;
        require_data(resp, "user")
    }

    pub async fn forgot_password(&self, email: &str) -> ClientResult<()> {
        let req = ForgotPasswordRequest {
            email: email.to_string(),
        };
        let _resp: ApiResponse<Value> = self.http.post("forgot-password", &req).await?;
        Ok(())
    }

    // ========== Users API ==========

    pub async fn list_users(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<User>> {
        self.list("users", query).await
    }

    // ========== Vehicles API ==========

    pub async fn list_vehicles(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Vehicle>> {
        self.list("vehicles", query).await
    }

    pub async fn create_vehicle(&self, input: &VehicleInput) -> ClientResult<()> {
        let _resp: ApiResponse<Value> = self.http.post("vehicle", input).await?;
        Ok(())
    }

    pub async fn update_vehicle(&self, id: &str, input: &VehicleInput) -> ClientResult<()> {
        let _resp: ApiResponse<Value> = self.http.put(&format!("vehicle/{id}"), input).await?;
        Ok(())
    }

    pub async fn delete_vehicle(&self, id: &str) -> ClientResult<()> {
        let _resp: ApiResponse<Value> = self.http.delete(&format!("vehicle/{id}")).await?;
        Ok(())
    }

    // ========== Services API ==========

    pub async fn list_services(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Service>> {
        self.list("services", query).await
    }

    pub async fn create_service(&self, input: &ServiceInput) -> ClientResult<()> {
        let _resp: ApiResponse<Value> = self.http.post("service", input).await?;
        Ok(())
    }

    pub async fn update_service(&self, id: &str, input: &ServiceInput) -> ClientResult<()> {
        let _resp: ApiResponse<Value> = self.http.put(&format!("service/{id}"), input).await?;
        Ok(())
    }

    pub async fn delete_service(&self, id: &str) -> ClientResult<()> {
        let _resp: ApiResponse<Value> = self.http.delete(&format!("service/{id}")).await?;
        Ok(())
    }

    // ========== Bookings API ==========

    pub async fn list_bookings(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Booking>> {
        self.list("bookings", query).await
    }

    pub async fn create_booking(&self, booking: &BookingCreate) -> ClientResult<()> {
        let _resp: ApiResponse<Value> = self.http.post("booking", booking).await?;
        Ok(())
    }

    /// Status update; cancellation is a status update to `cancelled`
    pub async fn update_booking_status(&self, id: &str, status: BookingStatus) -> ClientResult<()> {
        let body = BookingStatusUpdate { status };
        let _resp: ApiResponse<Value> = self.http.put(&format!("booking/{id}/status"), &body).await?;
        Ok(())
    }

    // ========== Work Orders API ==========

    pub async fn list_work_orders(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<WorkOrder>> {
        self.list("work-order", query).await
    }

    pub async fn get_work_order(&self, id: &str) -> ClientResult<WorkOrder> {
        let resp: ApiResponse<WorkOrder> = self.http.get(&format!("work-order/{id}")).await?;
        require_data(resp, "work order")
    }

    pub async fn create_work_order(&self, req: &WorkOrderCreate) -> ClientResult<()> {
        let _resp: ApiResponse<Value> = self.http.post("work-order", req).await?;
        Ok(())
    }

    pub async fn update_work_order_status(&self, id: &str, status: WorkOrderStatus) -> ClientResult<()> {
        let body = WorkOrderStatusUpdate { status };
        let _resp: ApiResponse<Value> = self.http.put(&format!("work-order/{id}/status"), &body).await?;
        Ok(())
    }

    pub async fn assign_mechanic(&self, id: &str, mechanic_id: &str) -> ClientResult<()> {
        let body = AssignMechanic {
            mechanic_id: mechanic_id.to_string(),
        };
        let _resp: ApiResponse<Value> = self.http.put(&format!("work-order/{id}/assign"), &body).await?;
        Ok(())
    }
}
