//! Command implementations.

pub mod checklist;
pub mod export;
pub mod validate;

pub use self::checklist::execute_checklist;
pub use self::export::execute_export;
pub use self::validate::execute_validate;
