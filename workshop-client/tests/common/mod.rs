//! Shared helpers for integration tests against a mock backend.

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};
use workshop_client::{ClientConfig, NetworkHttpClient, WorkshopApi};

pub fn api(server: &MockServer) -> WorkshopApi<NetworkHttpClient> {
    api_with_token(server, None)
}

pub fn api_with_token(server: &MockServer, token: Option<&str>) -> WorkshopApi<NetworkHttpClient> {
    let mut config = ClientConfig::new(format!("{}/api", server.uri())).with_timeout(5);
    if let Some(token) = token {
        config = config.with_token(token);
    }
    WorkshopApi::new(config.build_http_client().unwrap())
}

/// `{ status, message, data }` envelope
pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": true,
        "message": "Success",
        "data": data,
    }))
}

/// Paginated list body
pub fn page(data: Value, total_data: u64, total_pages: u32) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": data,
        "total_data": total_data,
        "total_pages": total_pages,
        "current_page": 1,
        "limit": 10,
    }))
}

pub fn failure(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

pub fn user(role: &str) -> Value {
    json!({
        "id": format!("{role}-1"),
        "name": "Rina Wulandari",
        "email": "rina@bengkel.id",
        "phone": "0812-5550-101",
        "role": role,
    })
}

pub fn booking(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "user_id": "customer-1",
        "vehicle_id": "veh-1",
        "notes": "",
        "status": status,
        "booking_date": "2024-06-01T09:00:00+07:00",
        "Vehicle": {
            "id": "veh-1",
            "license_plate": "B 1234 XY",
            "brand": "Toyota",
            "model": "Avanza",
            "year": "2019",
            "color": "Silver"
        }
    })
}

pub fn work_order(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "booking_id": "b-1",
        "customer_id": "customer-1",
        "vehicle_id": "veh-1",
        "mechanic_id": "",
        "status": status,
        "notes": "",
        "services": [
            { "service_id": "s-1", "service_name": "Oil change", "price": 150000.0, "quantity": 1 }
        ],
        "parts": null
    })
}
