//! Project records, creation payload and the listing filter

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::name::Name;
use super::validation::ValidationError;

const NAME_PARAM: &str = "name";

/// Query parameters accepted by `GET /projects`
pub const PROJECT_QUERY_PARAMS: &[&str] = &[NAME_PARAM];

/// Project row, projected as `{id, name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

/// POST /projects body
#[derive(Debug, Default, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl CreateProjectRequest {
    pub fn validate(self) -> Result<Name, ValidationError> {
        Name::new(self.name)
    }
}

/// Equality filter for project listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub name: Option<String>,
}

impl ProjectFilter {
    /// Build a filter from raw query pairs.
    ///
    /// Every key is checked against [`PROJECT_QUERY_PARAMS`]; the first key
    /// outside that set (in request order) is rejected. An empty `name`
    /// means "no filter".
    pub fn from_params(params: Vec<(String, String)>) -> Result<Self, ValidationError> {
        let allowed: HashSet<&str> = PROJECT_QUERY_PARAMS.iter().copied().collect();

        if let Some((param, _)) = params.iter().find(|(k, _)| !allowed.contains(k.as_str())) {
            return Err(ValidationError::UnknownParam {
                param: param.clone(),
                allowed: NAME_PARAM,
            });
        }

        let name = params
            .into_iter()
            .find(|(k, _)| k == NAME_PARAM)
            .map(|(_, v)| v)
            .filter(|v| !v.is_empty());

        Ok(Self { name })
    }
}
