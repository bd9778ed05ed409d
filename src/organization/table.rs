//! Record types for the organizational hierarchy.
//!
//! Each table record derives serde traits so it can cross a storage
//! boundary, and binds to a worksheet through [`SheetRecord`] so org data
//! can be imported from spreadsheet files.
use crate::sheet::reader::{FromSheetRow, Row, SheetError};
use crate::sheet::record::SheetRecord;
use serde::{Deserialize, Serialize};

/// A department node in the organization tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique department identifier
    pub department_id: String,
    /// Icon or avatar URL
    pub face_url: String,
    /// Display name
    pub name: String,
    /// Identifier of the parent department, empty for roots
    pub parent_id: String,
    /// Sort order among siblings
    pub order: i32,
    /// Department category code
    pub department_type: i32,
    /// Group chat bound to the department
    pub related_group_id: String,
    /// Creation time, unix seconds
    pub create_time: i64,
}

/// Membership of a user in a department.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentMember {
    /// Member user identifier
    pub user_id: String,
    /// Department the user belongs to
    pub department_id: String,
    /// Sort order within the department
    pub order: i32,
    /// Job title
    pub position: String,
    /// Non-zero when the member leads the department
    pub leader: i32,
    /// Membership status code
    pub status: i32,
}

/// A user account in the organization directory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationUser {
    /// Unique user identifier
    pub user_id: String,
    /// Display name
    pub nickname: String,
    /// Latin-script name
    pub english_name: String,
    /// Avatar URL
    pub face_url: String,
    /// Gender code
    pub gender: i32,
    /// Mobile phone number
    pub mobile: String,
    /// Landline phone number
    pub telephone: String,
    /// Birthday, unix seconds
    pub birth: i64,
    /// Email address
    pub email: String,
    /// Directory sort order
    pub order: i32,
    /// Account status code
    pub status: i32,
    /// Creation time, unix seconds
    pub create_time: i64,
}

impl SheetRecord for Department {}

impl SheetRecord for DepartmentMember {}

impl SheetRecord for OrganizationUser {
    /// Import sheets label the user tab "user" rather than the type name.
    fn sheet_name() -> String {
        "user".to_owned()
    }
}

impl FromSheetRow for Department {
    /// Column layout: id, name, parent id, order, type.
    fn from_row(row: &Row<'_>) -> Result<Self, SheetError> {
        Ok(Department {
            department_id: row.get(0)?,
            name: row.get(1)?,
            parent_id: row.get(2)?,
            order: row.get(3)?,
            department_type: row.get(4)?,
            ..Department::default()
        })
    }
}

impl FromSheetRow for OrganizationUser {
    /// Column layout: id, nickname, english name, gender, mobile, email.
    fn from_row(row: &Row<'_>) -> Result<Self, SheetError> {
        Ok(OrganizationUser {
            user_id: row.get(0)?,
            nickname: row.get(1)?,
            english_name: row.get(2)?,
            gender: row.get(3)?,
            mobile: row.get(4)?,
            email: row.get(5)?,
            ..OrganizationUser::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::reader::records_from_range;
    use crate::sheet::record::sheet_name_of;
    use calamine::{Data, Range};

    #[test]
    fn sheet_bindings() {
        assert_eq!(sheet_name_of::<Department>(), "Department");
        assert_eq!(sheet_name_of::<DepartmentMember>(), "DepartmentMember");
        assert_eq!(sheet_name_of::<OrganizationUser>(), "user");
        assert_eq!(sheet_name_of::<Vec<OrganizationUser>>(), "user");
    }

    #[test]
    fn user_from_sheet_row() {
        let mut range = Range::new((0, 0), (1, 5));
        range.set_value((0, 0), Data::String("user_id".to_owned()));
        range.set_value((1, 0), Data::String("u1000".to_owned()));
        range.set_value((1, 1), Data::String("Ada".to_owned()));
        range.set_value((1, 3), Data::Int(2));
        range.set_value((1, 5), Data::String("ada@example.com".to_owned()));
        let users: Vec<OrganizationUser> = records_from_range(&range).unwrap();
        assert_eq!(
            users,
            vec![OrganizationUser {
                user_id: "u1000".to_owned(),
                nickname: "Ada".to_owned(),
                gender: 2,
                email: "ada@example.com".to_owned(),
                ..OrganizationUser::default()
            }]
        );
    }
}
