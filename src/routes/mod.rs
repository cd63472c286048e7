use rocket::serde::json::Json;
use serde_json::{json, Value};

pub mod public;

#[catch(404)]
pub fn not_found() -> Json<Value> {
    Json(json!({ "error": "Not found" }))
}

#[catch(500)]
pub fn server_error() -> Json<Value> {
    Json(json!({ "error": "Internal server error" }))
}
