pub mod case;
pub mod custody_log;
pub mod disposal;
pub mod property;
pub mod user;
