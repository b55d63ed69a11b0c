pub mod admin_service;
pub mod collection_service;
pub mod subcategory_service;

pub use admin_service::*;
pub use collection_service::*;
pub use subcategory_service::*;
