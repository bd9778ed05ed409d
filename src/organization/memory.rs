//! In-memory storage backend.
//!
//! Keeps the three organization tables in shared maps behind a mutex.
//! Cloning the store shares the underlying tables, so one instance can
//! serve as every trait object the facade holds.
use crate::organization::store::{
    DepartmentMemberStore, DepartmentStore, OrganizationError, OrganizationUserStore, Tx,
};
use crate::organization::table::{Department, DepartmentMember, OrganizationUser};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Table contents shared by all clones of a [`MemoryStore`].
#[derive(Default)]
struct Tables {
    departments: HashMap<String, Department>,
    members: Vec<DepartmentMember>,
    users: HashMap<String, OrganizationUser>,
}

/// In-memory organization storage, the stand-in for a real database.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, OrganizationError> {
        self.tables
            .lock()
            .map_err(|error| OrganizationError::Storage(error.to_string()))
    }
}

impl DepartmentStore for MemoryStore {
    fn create(&self, departments: &[Department]) -> Result<(), OrganizationError> {
        let mut tables = self.lock()?;
        for (position, department) in departments.iter().enumerate() {
            let duplicated_in_batch = departments[..position]
                .iter()
                .any(|earlier| earlier.department_id == department.department_id);
            if duplicated_in_batch || tables.departments.contains_key(&department.department_id) {
                return Err(OrganizationError::AlreadyExists(
                    department.department_id.to_owned(),
                ));
            }
        }
        for department in departments {
            tables
                .departments
                .insert(department.department_id.to_owned(), department.to_owned());
        }
        Ok(())
    }

    fn update(&self, department: &Department) -> Result<(), OrganizationError> {
        let mut tables = self.lock()?;
        if !tables.departments.contains_key(&department.department_id) {
            return Err(OrganizationError::DepartmentNotFound(
                department.department_id.to_owned(),
            ));
        }
        tables
            .departments
            .insert(department.department_id.to_owned(), department.to_owned());
        Ok(())
    }

    fn find_one(&self, department_id: &str) -> Result<Department, OrganizationError> {
        self.lock()?
            .departments
            .get(department_id)
            .cloned()
            .ok_or_else(|| OrganizationError::DepartmentNotFound(department_id.to_owned()))
    }

    fn get_parent(&self, parent_id: &str) -> Result<Vec<Department>, OrganizationError> {
        let mut children: Vec<Department> = self
            .lock()?
            .departments
            .values()
            .filter(|department| department.parent_id == parent_id)
            .cloned()
            .collect();
        children.sort_by(|left, right| {
            (left.order, &left.department_id).cmp(&(right.order, &right.department_id))
        });
        Ok(children)
    }

    fn get_list(&self, department_ids: &[String]) -> Result<Vec<Department>, OrganizationError> {
        let tables = self.lock()?;
        Ok(department_ids
            .iter()
            .filter_map(|id| tables.departments.get(id))
            .cloned()
            .collect())
    }

    fn delete(&self, department_ids: &[String]) -> Result<(), OrganizationError> {
        let mut tables = self.lock()?;
        for id in department_ids {
            tables.departments.remove(id);
        }
        Ok(())
    }

    fn update_parent_id(
        &self,
        old_parent_id: &str,
        new_parent_id: &str,
    ) -> Result<(), OrganizationError> {
        for department in self.lock()?.departments.values_mut() {
            if department.parent_id == old_parent_id {
                department.parent_id = new_parent_id.to_owned();
            }
        }
        Ok(())
    }
}

impl DepartmentMemberStore for MemoryStore {
    fn create(&self, member: &DepartmentMember) -> Result<(), OrganizationError> {
        let mut tables = self.lock()?;
        let duplicated = tables.members.iter().any(|existing| {
            existing.user_id == member.user_id && existing.department_id == member.department_id
        });
        if duplicated {
            return Err(OrganizationError::AlreadyExists(format!(
                "{}@{}",
                member.user_id, member.department_id
            )));
        }
        tables.members.push(member.to_owned());
        Ok(())
    }

    fn find(&self, department_ids: &[String]) -> Result<Vec<DepartmentMember>, OrganizationError> {
        Ok(self
            .lock()?
            .members
            .iter()
            .filter(|member| department_ids.contains(&member.department_id))
            .cloned()
            .collect())
    }

    fn get_department(
        &self,
        department_id: &str,
    ) -> Result<Vec<DepartmentMember>, OrganizationError> {
        Ok(self
            .lock()?
            .members
            .iter()
            .filter(|member| member.department_id == department_id)
            .cloned()
            .collect())
    }

    fn get_user(&self, user_id: &str) -> Result<Vec<DepartmentMember>, OrganizationError> {
        Ok(self
            .lock()?
            .members
            .iter()
            .filter(|member| member.user_id == user_id)
            .cloned()
            .collect())
    }

    fn delete_department_ids(&self, department_ids: &[String]) -> Result<(), OrganizationError> {
        self.lock()?
            .members
            .retain(|member| !department_ids.contains(&member.department_id));
        Ok(())
    }

    fn delete_by_user_id(&self, user_id: &str) -> Result<(), OrganizationError> {
        self.lock()?.members.retain(|member| member.user_id != user_id);
        Ok(())
    }

    fn delete_by_key(&self, user_id: &str, department_id: &str) -> Result<(), OrganizationError> {
        self.lock()?.members.retain(|member| {
            member.user_id != user_id || member.department_id != department_id
        });
        Ok(())
    }
}

impl OrganizationUserStore for MemoryStore {
    fn create(&self, user: &OrganizationUser) -> Result<(), OrganizationError> {
        let mut tables = self.lock()?;
        if tables.users.contains_key(&user.user_id) {
            return Err(OrganizationError::AlreadyExists(user.user_id.to_owned()));
        }
        tables.users.insert(user.user_id.to_owned(), user.to_owned());
        Ok(())
    }

    fn update(&self, user: &OrganizationUser) -> Result<(), OrganizationError> {
        let mut tables = self.lock()?;
        if !tables.users.contains_key(&user.user_id) {
            return Err(OrganizationError::UserNotFound(user.user_id.to_owned()));
        }
        tables.users.insert(user.user_id.to_owned(), user.to_owned());
        Ok(())
    }

    fn delete(&self, user_id: &str) -> Result<(), OrganizationError> {
        self.lock()?.users.remove(user_id);
        Ok(())
    }

    fn get(&self, user_id: &str) -> Result<OrganizationUser, OrganizationError> {
        self.lock()?
            .users
            .get(user_id)
            .cloned()
            .ok_or_else(|| OrganizationError::UserNotFound(user_id.to_owned()))
    }
}

impl Tx for MemoryStore {
    /// The in-memory backend has no isolation to manage; the action runs
    /// directly.
    fn transaction(
        &self,
        action: &mut dyn FnMut() -> Result<(), OrganizationError>,
    ) -> Result<(), OrganizationError> {
        action()
    }
}
