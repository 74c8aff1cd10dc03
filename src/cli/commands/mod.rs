mod command_result;
pub mod export;
pub mod generate;
pub mod helper;
pub mod init;
pub mod migrate;

pub use command_result::*;
