//! Facade over the organization stores.
//!
//! Mirrors the storage traits 1:1 so callers depend on one type, and wraps
//! the multi-table deletes in a transaction so member rows never outlive
//! their department or user.
use crate::organization::store::{
    DepartmentMemberStore, DepartmentStore, OrganizationError, OrganizationUserStore, Tx,
};
use crate::organization::table::{Department, DepartmentMember, OrganizationUser};

/// Data-access entry point for the organizational hierarchy.
pub struct OrganizationDatabase {
    tx: Box<dyn Tx>,
    department: Box<dyn DepartmentStore>,
    member: Box<dyn DepartmentMemberStore>,
    user: Box<dyn OrganizationUserStore>,
}

impl OrganizationDatabase {
    pub fn new(
        tx: Box<dyn Tx>,
        department: Box<dyn DepartmentStore>,
        member: Box<dyn DepartmentMemberStore>,
        user: Box<dyn OrganizationUserStore>,
    ) -> Self {
        Self {
            tx,
            department,
            member,
            user,
        }
    }

    // department

    pub fn get_department_by_id(
        &self,
        department_id: &str,
    ) -> Result<Department, OrganizationError> {
        self.department.find_one(department_id)
    }

    pub fn create_department(&self, departments: &[Department]) -> Result<(), OrganizationError> {
        self.department.create(departments)
    }

    pub fn update_department(&self, department: &Department) -> Result<(), OrganizationError> {
        self.department.update(department)
    }

    pub fn get_parent(&self, parent_id: &str) -> Result<Vec<Department>, OrganizationError> {
        self.department.get_parent(parent_id)
    }

    pub fn get_list(
        &self,
        department_ids: &[String],
    ) -> Result<Vec<Department>, OrganizationError> {
        self.department.get_list(department_ids)
    }

    /// Deletes departments together with their membership rows.
    pub fn delete_department(&self, department_ids: &[String]) -> Result<(), OrganizationError> {
        self.tx.transaction(&mut || {
            self.department.delete(department_ids)?;
            self.member.delete_department_ids(department_ids)
        })
    }

    pub fn update_parent_id(
        &self,
        old_parent_id: &str,
        new_parent_id: &str,
    ) -> Result<(), OrganizationError> {
        self.department.update_parent_id(old_parent_id, new_parent_id)
    }

    // department member

    pub fn find_department_member(
        &self,
        department_ids: &[String],
    ) -> Result<Vec<DepartmentMember>, OrganizationError> {
        self.member.find(department_ids)
    }

    pub fn get_department(
        &self,
        department_id: &str,
    ) -> Result<Vec<DepartmentMember>, OrganizationError> {
        self.member.get_department(department_id)
    }

    pub fn get_department_member(
        &self,
        user_id: &str,
    ) -> Result<Vec<DepartmentMember>, OrganizationError> {
        self.member.get_user(user_id)
    }

    pub fn create_department_member(
        &self,
        member: &DepartmentMember,
    ) -> Result<(), OrganizationError> {
        self.member.create(member)
    }

    /// Deletes every membership row of the given departments, leaving the
    /// department records themselves in place.
    pub fn delete_department_id_list(
        &self,
        department_ids: &[String],
    ) -> Result<(), OrganizationError> {
        self.member.delete_department_ids(department_ids)
    }

    /// Deletes every membership the user holds, leaving the user record in
    /// place.
    pub fn delete_department_member_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<(), OrganizationError> {
        self.member.delete_by_user_id(user_id)
    }

    pub fn delete_department_member_by_key(
        &self,
        user_id: &str,
        department_id: &str,
    ) -> Result<(), OrganizationError> {
        self.member.delete_by_key(user_id, department_id)
    }

    // organization user

    pub fn create_organization_user(
        &self,
        user: &OrganizationUser,
    ) -> Result<(), OrganizationError> {
        self.user.create(user)
    }

    pub fn update_organization_user(
        &self,
        user: &OrganizationUser,
    ) -> Result<(), OrganizationError> {
        self.user.update(user)
    }

    /// Deletes a user together with every membership the user holds.
    pub fn delete_organization_user(&self, user_id: &str) -> Result<(), OrganizationError> {
        self.tx.transaction(&mut || {
            self.user.delete(user_id)?;
            self.member.delete_by_user_id(user_id)
        })
    }

    pub fn get_organization_user(
        &self,
        user_id: &str,
    ) -> Result<OrganizationUser, OrganizationError> {
        self.user.get(user_id)
    }
}
