//! # Organization Module
//!
//! Data-access layer for the organizational hierarchy: departments, the
//! members inside them, and the user directory. Persistence is delegated
//! to a generic storage interface; an in-memory backend is provided for
//! tests and small deployments.
pub mod database;
pub mod memory;
pub mod store;
pub mod table;

pub use database::OrganizationDatabase;
pub use memory::MemoryStore;
pub use store::{
    DepartmentMemberStore, DepartmentStore, OrganizationError, OrganizationUserStore, Tx,
};
pub use table::{Department, DepartmentMember, OrganizationUser};
