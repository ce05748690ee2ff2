pub mod customers;
pub mod init;
pub mod plot;
pub mod root;
pub mod view;
