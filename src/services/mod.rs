pub mod setup_service;

pub use setup_service::SetupService;
