use serde::Deserialize;

const SERVICES_JSON: &str = include_str!("../content/services.json");

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceSection {
    pub heading: String,
    pub body: String,
    #[serde(default)]
    pub bullets: Option<Vec<String>>,
}

impl ServiceSection {
    /// Bullet points to render, `None` when the list is missing or empty.
    pub fn bullet_list(&self) -> Option<&[String]> {
        self.bullets.as_deref().filter(|items| !items.is_empty())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceDetail {
    pub id: String,
    pub title: String,
    pub headline: String,
    pub summary: String,
    pub image: String,
    pub intro: String,
    pub sections: Vec<ServiceSection>,
}

/// Read-only service content, in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceCatalog {
    services: Vec<ServiceDetail>,
}

impl ServiceCatalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let services: Vec<ServiceDetail> = serde_json::from_str(json)?;
        Ok(Self { services })
    }

    /// Catalog compiled into the binary. Falls back to an empty catalog so the
    /// rest of the page still renders if the content file is broken.
    pub fn builtin() -> Self {
        match Self::from_json(SERVICES_JSON) {
            Ok(catalog) => {
                log::debug!("Loaded {} services", catalog.len());
                catalog
            }
            Err(e) => {
                log::error!("Failed to parse service content: {}", e);
                Self::default()
            }
        }
    }

    pub fn find(&self, id: &str) -> Option<&ServiceDetail> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceDetail> {
        self.services.iter()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = ServiceCatalog::from_json(SERVICES_JSON).expect("shipped content must parse");
        assert!(!catalog.is_empty());
        assert_eq!(catalog, ServiceCatalog::builtin());
    }

    #[test]
    fn service_ids_are_unique() {
        let catalog = ServiceCatalog::builtin();
        let ids: HashSet<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn battery_service_keeps_declared_section_order() {
        let catalog = ServiceCatalog::builtin();
        let battery = catalog.find("battery").expect("battery service");
        let headings: Vec<&str> = battery.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["Pack architecture", "Thermal management", "Integration"]);
        assert!(battery.sections[0].bullet_list().is_some());
        assert!(battery.sections[2].bullet_list().is_none());
    }

    #[test]
    fn unknown_id_is_not_found() {
        assert!(ServiceCatalog::builtin().find("warp-drive").is_none());
    }

    #[test]
    fn missing_or_empty_bullets_render_nothing() {
        let json = r#"[{
            "id": "x", "title": "X", "headline": "h", "summary": "s",
            "image": "x.jpg", "intro": "i",
            "sections": [
                {"heading": "a", "body": "b"},
                {"heading": "c", "body": "d", "bullets": []},
                {"heading": "e", "body": "f", "bullets": ["one", "two"]}
            ]
        }]"#;
        let catalog = ServiceCatalog::from_json(json).unwrap();
        let sections = &catalog.find("x").unwrap().sections;
        assert_eq!(sections[0].bullet_list(), None);
        assert_eq!(sections[1].bullet_list(), None);
        assert_eq!(sections[2].bullet_list().map(|b| b.len()), Some(2));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ServiceCatalog::from_json("[{\"id\": 1}]").is_err());
    }
}
