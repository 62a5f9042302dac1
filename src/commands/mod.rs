pub mod account;
pub mod comment;
pub mod create;
pub mod init;
pub mod list;
pub mod show;
pub mod stats;
pub mod status;
