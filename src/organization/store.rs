//! Storage interfaces for the organization tables.
//!
//! The data-access layer is pure delegation: every operation maps 1:1 onto
//! a backend implementing these traits, and the facade composes them under
//! a [`Tx`] unit of work. Query generation and retry policies belong to the
//! backend, not to this layer.
use crate::organization::table::{Department, DepartmentMember, OrganizationUser};
use thiserror::Error;

/// Errors surfaced by the organization storage layer.
#[derive(Error, Debug)]
pub enum OrganizationError {
    #[error("department '{0}' not found")]
    DepartmentNotFound(String),

    #[error("user '{0}' not found")]
    UserNotFound(String),

    #[error("'{0}' already exists")]
    AlreadyExists(String),

    /// Backend failure passthrough
    #[error("storage error: {0}")]
    Storage(String),
}

/// Department persistence operations.
pub trait DepartmentStore {
    fn create(&self, departments: &[Department]) -> Result<(), OrganizationError>;
    fn update(&self, department: &Department) -> Result<(), OrganizationError>;
    fn find_one(&self, department_id: &str) -> Result<Department, OrganizationError>;
    /// Child departments of `parent_id`, ordered by their sort order.
    fn get_parent(&self, parent_id: &str) -> Result<Vec<Department>, OrganizationError>;
    fn get_list(&self, department_ids: &[String]) -> Result<Vec<Department>, OrganizationError>;
    fn delete(&self, department_ids: &[String]) -> Result<(), OrganizationError>;
    /// Re-homes every child of `old_parent_id` under `new_parent_id`.
    fn update_parent_id(
        &self,
        old_parent_id: &str,
        new_parent_id: &str,
    ) -> Result<(), OrganizationError>;
}

/// Department membership persistence operations.
pub trait DepartmentMemberStore {
    fn create(&self, member: &DepartmentMember) -> Result<(), OrganizationError>;
    /// Memberships of any of the given departments.
    fn find(&self, department_ids: &[String]) -> Result<Vec<DepartmentMember>, OrganizationError>;
    /// Memberships of a single department.
    fn get_department(
        &self,
        department_id: &str,
    ) -> Result<Vec<DepartmentMember>, OrganizationError>;
    /// Memberships held by a single user.
    fn get_user(&self, user_id: &str) -> Result<Vec<DepartmentMember>, OrganizationError>;
    fn delete_department_ids(&self, department_ids: &[String]) -> Result<(), OrganizationError>;
    fn delete_by_user_id(&self, user_id: &str) -> Result<(), OrganizationError>;
    fn delete_by_key(&self, user_id: &str, department_id: &str) -> Result<(), OrganizationError>;
}

/// Organization user persistence operations.
pub trait OrganizationUserStore {
    fn create(&self, user: &OrganizationUser) -> Result<(), OrganizationError>;
    fn update(&self, user: &OrganizationUser) -> Result<(), OrganizationError>;
    fn delete(&self, user_id: &str) -> Result<(), OrganizationError>;
    fn get(&self, user_id: &str) -> Result<OrganizationUser, OrganizationError>;
}

/// Transaction wrapper around a storage backend.
pub trait Tx {
    /// Runs `action` as a single unit of work; if the action fails the
    /// backend must leave no partial writes behind.
    fn transaction(
        &self,
        action: &mut dyn FnMut() -> Result<(), OrganizationError>,
    ) -> Result<(), OrganizationError>;
}
