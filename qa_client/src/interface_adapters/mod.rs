pub mod clients;
pub mod presenter;
pub mod protocol;
