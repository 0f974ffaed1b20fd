pub mod middleware;
pub mod request_id;

pub use middleware::{admin_middleware, X_ADMIN_PASSWORD};
pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};
