pub mod attempt;
pub mod delete;
pub mod import;
pub mod init;
pub mod list;
pub mod results;
pub mod show;
pub mod validate;
