pub mod backend_api;
pub mod http_backend;

pub use backend_api::BackendApi;
pub use http_backend::HttpBackend;
