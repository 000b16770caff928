/// Records managed by the admin panel.
/// Field names on the wire follow the panel's JSON schema (camelCase).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Lookup key. Not enforced unique.
    pub name: String,
    pub owner: String,
    pub created: String,
    pub scale: String,
    #[serde(default = "default_team_size")]
    pub team_size: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub world_type: String,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

fn default_team_size() -> u32 {
    1
}

impl Project {
    /// Minimal project with one team member and no zones.
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        created: impl Into<String>,
        scale: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            created: created.into(),
            scale: scale.into(),
            team_size: default_team_size(),
            description: String::new(),
            world_type: String::new(),
            zones: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Zone
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    #[serde(rename = "type", default)]
    pub zone_type: String, // residential | commercial | industrial | ...
    #[serde(default)]
    pub world: String,
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub project_count: u32,
    #[serde(default)]
    pub last_active: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_json_uses_camel_case() {
        let json = r#"{
            "name": "Riverside",
            "owner": "Alice",
            "created": "2024-03-01",
            "scale": "1:500",
            "teamSize": 4,
            "worldType": "flat",
            "zones": [{ "name": "Docks", "type": "industrial", "world": "river" }]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.team_size, 4);
        assert_eq!(project.world_type, "flat");
        assert_eq!(project.zones[0].zone_type, "industrial");
        assert!(project.description.is_empty());
    }

    #[test]
    fn test_project_defaults_when_fields_missing() {
        let json = r#"{ "name": "A", "owner": "B", "created": "", "scale": "1:1" }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.team_size, 1);
        assert!(project.zones.is_empty());
    }

    #[test]
    fn test_user_json_field_names() {
        let user = User {
            id: "u1".into(),
            username: "alice".into(),
            role: "admin".into(),
            project_count: 2,
            last_active: "2024-03-01".into(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["projectCount"], 2);
        assert_eq!(value["lastActive"], "2024-03-01");
    }
}
