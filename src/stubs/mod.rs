pub mod delegate;
pub mod dialogs;
pub mod environments;
pub mod notifier;
pub mod project;
pub mod resources;
