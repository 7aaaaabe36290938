pub mod day;
pub mod init;
pub mod month;
pub mod root;
