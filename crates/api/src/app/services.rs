//! In-memory read/write models backing the EZTest endpoints.
//!
//! These stand in for the real business controllers; the authorization
//! layer treats them as opaque collaborators behind the gate.

use std::collections::HashMap;
use std::sync::Mutex;

use eztest_core::{DomainError, DomainResult, ProjectId, UserId};

use crate::app::dto::{DropdownOption, ProjectMember};

pub struct AppServices {
    dropdowns: HashMap<String, Vec<DropdownOption>>,
    members: Mutex<HashMap<ProjectId, Vec<ProjectMember>>>,
}

impl AppServices {
    pub fn dropdown_kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.dropdowns.keys().cloned().collect();
        kinds.sort();
        kinds
    }

    pub fn dropdown_options(&self, kind: &str) -> Option<Vec<DropdownOption>> {
        self.dropdowns.get(kind).cloned()
    }

    pub fn list_members(&self, project: ProjectId) -> Vec<ProjectMember> {
        self.members
            .lock()
            .unwrap()
            .get(&project)
            .cloned()
            .unwrap_or_default()
    }

    pub fn add_member(&self, project: ProjectId, member: ProjectMember) -> DomainResult<()> {
        let mut members = self.members.lock().unwrap();
        let entries = members.entry(project).or_default();

        if entries.iter().any(|m| m.user_id == member.user_id) {
            return Err(DomainError::conflict(format!(
                "user '{}' is already a member",
                member.user_id
            )));
        }

        entries.push(member);
        Ok(())
    }

    pub fn remove_member(&self, project: ProjectId, user_id: &UserId) -> DomainResult<()> {
        let mut members = self.members.lock().unwrap();
        let entries = members.get_mut(&project).ok_or(DomainError::NotFound)?;

        let before = entries.len();
        entries.retain(|m| &m.user_id != user_id);

        if entries.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}

/// Build the app services with the seeded dropdown option sets.
pub fn build_services() -> AppServices {
    let mut dropdowns = HashMap::new();

    dropdowns.insert(
        "priority".to_string(),
        vec![
            DropdownOption::new("low", "Low"),
            DropdownOption::new("medium", "Medium"),
            DropdownOption::new("high", "High"),
            DropdownOption::new("critical", "Critical"),
        ],
    );
    dropdowns.insert(
        "severity".to_string(),
        vec![
            DropdownOption::new("trivial", "Trivial"),
            DropdownOption::new("minor", "Minor"),
            DropdownOption::new("major", "Major"),
            DropdownOption::new("blocker", "Blocker"),
        ],
    );
    dropdowns.insert(
        "case_status".to_string(),
        vec![
            DropdownOption::new("draft", "Draft"),
            DropdownOption::new("active", "Active"),
            DropdownOption::new("deprecated", "Deprecated"),
        ],
    );
    dropdowns.insert(
        "run_status".to_string(),
        vec![
            DropdownOption::new("passed", "Passed"),
            DropdownOption::new("failed", "Failed"),
            DropdownOption::new("blocked", "Blocked"),
            DropdownOption::new("skipped", "Skipped"),
        ],
    );

    AppServices {
        dropdowns,
        members: Mutex::new(HashMap::new()),
    }
}
