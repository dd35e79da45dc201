pub(crate) mod acquisition;
pub(crate) mod rendering;
pub(crate) mod trending_service;

pub use acquisition::AcquisitionService;
pub use rendering::RenderService;
pub use trending_service::TrendingService;
