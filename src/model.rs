//! Developer entity, lifecycle status, and the JSON representation used on the wire.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status. Stored as TEXT (`ACTIVE` / `DELETED`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Active,
    Deleted,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "ACTIVE",
            Status::Deleted => "DELETED",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Status::Active),
            "DELETED" => Ok(Status::Deleted),
            _ => Err(AppError::BadRequest(format!(
                "invalid developer status: {} (expected ACTIVE or DELETED)",
                s
            ))),
        }
    }
}

/// Persisted developer. `id` is `None` until the store assigns one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Developer {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub specialty: String,
    pub status: Status,
}

impl Developer {
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// Request/response body for `/api/v1/developers`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub status: Option<Status>,
}

impl DeveloperDto {
    pub fn into_entity(self) -> Developer {
        Developer {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            specialty: self.specialty,
            status: self.status.unwrap_or(Status::Active),
        }
    }
}

impl From<Developer> for DeveloperDto {
    fn from(d: Developer) -> Self {
        DeveloperDto {
            id: d.id,
            first_name: d.first_name,
            last_name: d.last_name,
            email: d.email,
            specialty: d.specialty,
            status: Some(d.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_parses_wire_names() {
        assert_eq!("ACTIVE".parse::<Status>().unwrap(), Status::Active);
        assert_eq!("DELETED".parse::<Status>().unwrap(), Status::Deleted);
        assert!("active".parse::<Status>().is_err());
    }

    #[test]
    fn dto_uses_camel_case_and_uppercase_status() {
        let dto = DeveloperDto {
            id: Some(1),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@gmail.com".into(),
            specialty: "Java".into(),
            status: Some(Status::Active),
        };
        let v = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            v,
            json!({
                "id": 1,
                "firstName": "John",
                "lastName": "Doe",
                "email": "john.doe@gmail.com",
                "specialty": "Java",
                "status": "ACTIVE"
            })
        );
    }

    #[test]
    fn dto_without_id_or_status_becomes_active_transient_entity() {
        let dto: DeveloperDto = serde_json::from_value(json!({
            "firstName": "Mike",
            "lastName": "Smith",
            "email": "mike.smith@gmail.com",
            "specialty": "Java"
        }))
        .unwrap();
        let entity = dto.into_entity();
        assert_eq!(entity.id, None);
        assert_eq!(entity.status, Status::Active);
    }

    #[test]
    fn dto_requires_names_and_email() {
        let res: Result<DeveloperDto, _> = serde_json::from_value(json!({
            "firstName": "Mike",
            "specialty": "Java"
        }));
        assert!(res.is_err());
    }
}
