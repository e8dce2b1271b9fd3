pub mod health;
pub mod responses;

pub use health::{health_check, readiness_check};
pub use responses::{
    delete_response, generate_response, get_response, list_responses, update_response,
};
