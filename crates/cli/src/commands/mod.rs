//! Command implementations.

mod info;
mod show_list;
mod validate;

pub use info::run_info;
pub use show_list::run_show_list;
pub use validate::run_validate;
