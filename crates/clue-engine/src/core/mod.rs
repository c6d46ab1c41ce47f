pub mod inventory;
pub mod notify;
pub mod timer;
