pub mod admission;
pub mod catalog;
pub mod domain;
pub mod launch;
pub mod messages;
pub mod presentation;
pub mod registry;
pub mod traits;
