pub mod command;
pub mod error;
pub mod exit_code;
pub mod float_list;
pub mod index;
pub mod shell;
