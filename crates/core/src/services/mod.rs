pub mod export_service;
pub mod holdings_service;
pub mod logs_service;
pub mod valuation_service;
pub mod view_service;
