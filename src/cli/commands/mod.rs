pub mod compare;
mod command_result;
pub mod init;
pub mod scan;

pub use command_result::*;
