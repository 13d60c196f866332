pub mod disease_info;
pub mod header;
pub mod reset_button;
pub mod upload_slot;
