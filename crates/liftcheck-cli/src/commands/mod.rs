pub mod areas;
pub mod init;
pub mod run;
pub mod validate;
