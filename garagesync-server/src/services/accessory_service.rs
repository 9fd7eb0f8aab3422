use std::collections::BTreeMap;
use std::sync::Arc;

use crate::configs::{Accessory, Settings};
use crate::errors::AccessoryError;

use super::controller_service::HttpDoorController;
use super::door_service::DoorAccessory;

/// Every accessory registered at start-up, keyed by id.
#[derive(Default)]
pub struct AccessoryRegistry {
    accessories: BTreeMap<String, Arc<DoorAccessory>>,
}

impl AccessoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one accessory per configured entry, each with its own HTTP controller.
    pub fn from_settings(settings: &Settings) -> Result<Self, AccessoryError> {
        let mut registry = Self::new();

        for entry in &settings.accessories {
            let id = validate(entry)?;

            let controller = Arc::new(HttpDoorController::new(&entry.url, &settings.controller)?);
            let accessory = DoorAccessory::new(&id, &entry.name, controller, settings.timing);

            registry.register(accessory)?;
        }

        Ok(registry)
    }

    pub fn register(&mut self, accessory: Arc<DoorAccessory>) -> Result<(), AccessoryError> {
        let id = accessory.id().to_string();

        if self.accessories.contains_key(&id) {
            return Err(AccessoryError::DuplicateId(id));
        }

        tracing::info!(accessory = %id, name = %accessory.information().name, "registered accessory");
        self.accessories.insert(id, accessory);

        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Arc<DoorAccessory>, AccessoryError> {
        self.accessories
            .get(id)
            .cloned()
            .ok_or(AccessoryError::AccessoryNotFound)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<DoorAccessory>> {
        self.accessories.values()
    }

    pub fn len(&self) -> usize {
        self.accessories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessories.is_empty()
    }
}

/// Checks the entry and returns the id it registers under.
fn validate(entry: &Accessory) -> Result<String, AccessoryError> {
    if entry.name.trim().is_empty() {
        return Err(AccessoryError::InvalidConfig("accessory name is missing".into()));
    }

    if entry.url.trim().is_empty() {
        return Err(AccessoryError::InvalidConfig(format!("url is missing for {}", entry.name)));
    }

    let id = accessory_id(&entry.name);
    if id.is_empty() {
        return Err(AccessoryError::InvalidConfig(format!(
            "name {:?} has no letters or digits to derive an id from",
            entry.name
        )));
    }

    Ok(id)
}

/// Lowercased display name with every run of other characters collapsed to `-`.
pub fn accessory_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());

    for c in name.chars() {
        if c.is_alphanumeric() {
            id.extend(c.to_lowercase());
        } else if !id.is_empty() && !id.ends_with('-') {
            id.push('-');
        }
    }

    id.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = r#"
        [server]
        host = "127.0.0.1"
        port = 0

        [logger]
        level = "info"

        [controller]
        request_timeout_ms = 1000
        connect_timeout_ms = 500
    "#;

    fn settings_with(accessories: &str) -> Settings {
        Settings::from_toml(&format!("{SETTINGS}\n{accessories}")).unwrap()
    }

    #[test]
    fn test_accessory_id() {
        assert_eq!(accessory_id("Garage Door"), "garage-door");
        assert_eq!(accessory_id("  Main -- Garage (North) "), "main-garage-north");
        assert_eq!(accessory_id("Door2"), "door2");
        assert_eq!(accessory_id("Garagentür"), "garagentür");
        assert_eq!(accessory_id("車庫"), "車庫");
        assert_eq!(accessory_id("-- ! --"), "");
    }

    #[tokio::test]
    async fn test_register_from_settings() {
        let settings = settings_with(
            r#"
            [[accessories]]
            name = "Garage Door"
            url = "http://10.0.0.12"

            [[accessories]]
            name = "Barn Door"
            url = "http://10.0.0.13"
            "#,
        );

        let registry = AccessoryRegistry::from_settings(&settings).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("barn-door").unwrap().information().name, "Barn Door");
        assert!(matches!(registry.get("shed"), Err(AccessoryError::AccessoryNotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_rejected() {
        let settings = settings_with(
            r#"
            [[accessories]]
            name = "Garage Door"
            url = "http://10.0.0.12"

            [[accessories]]
            name = "garage door"
            url = "http://10.0.0.13"
            "#,
        );

        let result = AccessoryRegistry::from_settings(&settings);
        assert!(matches!(result, Err(AccessoryError::DuplicateId(id)) if id == "garage-door"));
    }

    #[tokio::test]
    async fn test_non_ascii_names_get_distinct_ids() {
        let settings = settings_with(
            r#"
            [[accessories]]
            name = "車庫"
            url = "http://10.0.0.12"

            [[accessories]]
            name = "Garagentür"
            url = "http://10.0.0.13"
            "#,
        );

        let registry = AccessoryRegistry::from_settings(&settings).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("車庫").unwrap().information().name, "車庫");
        assert_eq!(registry.get("garagentür").unwrap().information().name, "Garagentür");
    }

    #[tokio::test]
    async fn test_name_without_id_characters_is_rejected() {
        let settings = settings_with(
            r#"
            [[accessories]]
            name = "~~~"
            url = "http://10.0.0.12"
            "#,
        );

        let result = AccessoryRegistry::from_settings(&settings);
        assert!(matches!(result, Err(AccessoryError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_missing_url_is_rejected() {
        let settings = settings_with(
            r#"
            [[accessories]]
            name = "Garage Door"
            url = ""
            "#,
        );

        let result = AccessoryRegistry::from_settings(&settings);
        assert!(matches!(result, Err(AccessoryError::InvalidConfig(_))));
    }
}
