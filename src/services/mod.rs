//! Application service layer.
//!
//! Services contain the validation rules and sit between callers and the
//! repository that stores contacts.

mod contact_manager;

pub use contact_manager::ContactManager;
