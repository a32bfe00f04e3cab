pub mod chunked_batch;
pub mod cleanse_service;
pub mod history_service;
