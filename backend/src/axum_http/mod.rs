pub mod client_info;
pub mod default_routers;
pub mod error_responses;
pub mod http_serve;
pub mod routers;
