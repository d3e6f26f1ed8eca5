use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::materials::{
    Color, MaterialCategory, MaterialDefinition, MaterialId, SpreadRules, MAT_NONE, NONE_NAME,
};

/// Material Catalog - maps material names and ids to definitions.
///
/// Id 0 is always `none`. Definitions are handed out by reference; painting
/// copies the `Arc<SpreadRules>` so a later `register` of the same name only
/// affects particles painted afterwards.
#[derive(Clone, Debug)]
pub struct MaterialCatalog {
    materials: Vec<MaterialDefinition>,
    name_to_id: HashMap<String, MaterialId>,
}

impl MaterialCatalog {
    /// Catalog holding only `none`
    pub fn empty() -> Self {
        let mut name_to_id = HashMap::new();
        name_to_id.insert(NONE_NAME.to_string(), MAT_NONE);
        Self {
            materials: vec![MaterialDefinition::none()],
            name_to_id,
        }
    }

    /// Parse a material document (JSON array of material records)
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<MaterialRecord> = serde_json::from_str(json)?;
        let catalog = Self::from_records(records)?;
        log::info!("material catalog loaded: {} materials", catalog.len() - 1);
        Ok(catalog)
    }

    /// Build from records. Every reference must resolve to a material of the same set.
    pub fn from_records(records: Vec<MaterialRecord>) -> Result<Self, CatalogError> {
        let mut catalog = Self::empty();

        // Pass 1: hand out ids so records may reference each other in any order
        let mut categories = Vec::with_capacity(records.len());
        for record in records.iter() {
            catalog.check_new_name(&record.name)?;
            let category = record.category()?;
            let id = catalog.next_id()?;
            catalog.name_to_id.insert(record.name.clone(), id);
            categories.push((id, category));
        }

        // Pass 2: resolve rule references
        for (record, (id, category)) in records.iter().zip(categories) {
            let rules = catalog.resolve_rules(&record.name, &record.spread_rules)?;
            catalog.materials.push(MaterialDefinition {
                id,
                name: record.name.clone(),
                category,
                initial_color: Color::from(record.initial_color),
                initial_lifetime: record.initial_life_time,
                rules: Arc::new(rules),
            });
        }

        Ok(catalog)
    }

    /// Built-in starter set used when no document is loaded
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();

        let sand = catalog.push_builtin("sand", MaterialCategory::Solid, Color::rgb(194, 178, 128));
        let stone = catalog.push_builtin("stone", MaterialCategory::Solid, Color::rgb(128, 128, 128));
        let water = catalog.push_builtin("water", MaterialCategory::Liquid, Color::rgb(64, 128, 255));
        let oil = catalog.push_builtin("oil", MaterialCategory::Liquid, Color::rgb(70, 50, 20));
        let lava = catalog.push_builtin("lava", MaterialCategory::Liquid, Color::rgb(255, 90, 0));
        let smoke = catalog.push_builtin("smoke", MaterialCategory::Gas, Color::rgb(60, 60, 60));
        let steam = catalog.push_builtin("steam", MaterialCategory::Gas, Color::rgb(210, 210, 230));

        let wet_sand = Color::rgb(150, 130, 90);
        catalog.set_builtin_rules(sand, |r| {
            r.can_replace.extend([water, oil]);
            r.contact_colors.insert(water, wet_sand);
            r.contact_colors.insert(oil, Color::rgb(120, 100, 60));
            r.contact_sounds.insert(water, "splash".to_string());
        });
        catalog.set_builtin_rules(stone, |r| {
            r.can_replace.extend([water, oil, lava]);
            r.contact_colors.insert(water, Color::rgb(100, 100, 110));
            r.contact_colors.insert(oil, Color::rgb(90, 85, 80));
            r.contact_colors.insert(lava, Color::rgb(160, 80, 60));
            r.contact_sounds.insert(water, "splash".to_string());
        });
        catalog.set_builtin_rules(water, |r| {
            r.can_replace.insert(oil);
            r.contact_colors.insert(oil, Color::rgb(50, 100, 200));
            r.spread_speed = 2;
        });
        catalog.set_builtin_rules(lava, |r| {
            r.can_replace.extend([water, oil]);
            r.contact_colors.insert(water, Color::rgb(90, 40, 30));
            r.contact_colors.insert(oil, Color::rgb(255, 140, 0));
            r.contact_sounds.insert(water, "sizzle".to_string());
            r.contact_sounds.insert(oil, "whoosh".to_string());
            r.spread_speed = 1;
        });
        catalog.set_builtin_rules(smoke, |r| {
            r.can_replace.insert(steam);
            r.contact_colors.insert(steam, Color::rgb(120, 120, 130));
        });

        catalog
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// `none` alone does not count as content
    pub fn is_empty(&self) -> bool {
        self.materials.len() <= 1
    }

    pub fn lookup(&self, name: &str) -> Result<&MaterialDefinition, CatalogError> {
        self.id_of(name)
            .and_then(|id| self.lookup_id(id))
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    pub fn lookup_id(&self, id: MaterialId) -> Option<&MaterialDefinition> {
        self.materials.get(id as usize)
    }

    pub fn id_of(&self, name: &str) -> Option<MaterialId> {
        self.name_to_id.get(name).copied()
    }

    pub fn name_of(&self, id: MaterialId) -> Option<&str> {
        self.lookup_id(id).map(|m| m.name.as_str())
    }

    /// Picker options in id order, `none` first
    pub fn names(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialDefinition> {
        self.materials.iter()
    }

    /// Insert a new material or replace the one with the same name.
    ///
    /// Replacing keeps the id; particles painted before keep their old rules.
    pub fn register(&mut self, record: MaterialRecord) -> Result<MaterialId, CatalogError> {
        if record.name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if record.name == NONE_NAME {
            return Err(CatalogError::ReservedName(record.name));
        }
        let category = record.category()?;

        let existing = self.id_of(&record.name);
        let id = match existing {
            Some(id) => id,
            None => self.next_id()?,
        };

        // Resolve with the new name visible so a material may reference itself,
        // and roll the name back out if resolution fails.
        self.name_to_id.insert(record.name.clone(), id);
        let rules = match self.resolve_rules(&record.name, &record.spread_rules) {
            Ok(rules) => rules,
            Err(e) => {
                if existing.is_none() {
                    self.name_to_id.remove(&record.name);
                }
                return Err(e);
            }
        };

        let def = MaterialDefinition {
            id,
            name: record.name,
            category,
            initial_color: Color::from(record.initial_color),
            initial_lifetime: record.initial_life_time,
            rules: Arc::new(rules),
        };

        if existing.is_some() {
            log::debug!("material {} replaced (id {})", def.name, id);
            self.materials[id as usize] = def;
        } else {
            log::debug!("material {} registered (id {})", def.name, id);
            self.materials.push(def);
        }
        Ok(id)
    }

    /// Records for every material except `none`, references written back as names
    pub fn to_records(&self) -> Vec<MaterialRecord> {
        self.materials
            .iter()
            .filter(|m| !m.is_none())
            .map(|m| self.record_of(m))
            .collect()
    }

    /// Pretty (2-space) material document
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.to_records())?)
    }

    /// Name/category/color list for a UI picker
    pub fn manifest_json(&self) -> String {
        let entries: Vec<ManifestEntry> = self
            .materials
            .iter()
            .map(|m| ManifestEntry {
                id: m.id,
                name: &m.name,
                category: m.category.label(),
                color: m.initial_color.to_abgr(),
                hidden: m.is_none(),
            })
            .collect();
        let out = Manifest {
            format_version: 1,
            materials: entries,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    // === Internals ===

    fn next_id(&self) -> Result<MaterialId, CatalogError> {
        let next = self.materials.len().max(self.name_to_id.len());
        if next > MaterialId::MAX as usize {
            return Err(CatalogError::TooManyMaterials(MaterialId::MAX as usize));
        }
        Ok(next as MaterialId)
    }

    fn check_new_name(&self, name: &str) -> Result<(), CatalogError> {
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if name == NONE_NAME {
            return Err(CatalogError::ReservedName(name.to_string()));
        }
        if self.name_to_id.contains_key(name) {
            return Err(CatalogError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn resolve(&self, owner: &str, reference: &str) -> Result<MaterialId, CatalogError> {
        self.id_of(reference).ok_or_else(|| CatalogError::UnknownReference {
            name: owner.to_string(),
            reference: reference.to_string(),
        })
    }

    fn resolve_rules(&self, owner: &str, rec: &SpreadRulesRecord) -> Result<SpreadRules, CatalogError> {
        let mut can_replace = BTreeSet::new();
        for name in rec.can_replace.iter() {
            can_replace.insert(self.resolve(owner, name)?);
        }

        let mut contact_colors = BTreeMap::new();
        for (name, rgb) in rec.contact_colors.iter() {
            contact_colors.insert(self.resolve(owner, name)?, Color::from(*rgb));
        }

        let mut contact_sounds = BTreeMap::new();
        for (name, cue) in rec.contact_sounds.iter() {
            contact_sounds.insert(self.resolve(owner, name)?, cue.clone());
        }

        Ok(SpreadRules {
            can_replace,
            contact_colors,
            contact_sounds,
            spread_speed: rec.spread_speed,
        })
    }

    fn record_of(&self, m: &MaterialDefinition) -> MaterialRecord {
        let name = |id: &MaterialId| self.name_of(*id).unwrap_or(NONE_NAME).to_string();
        MaterialRecord {
            name: m.name.clone(),
            type_code: m.category.code(),
            initial_life_time: m.initial_lifetime,
            initial_color: m.initial_color.into(),
            spread_rules: SpreadRulesRecord {
                can_replace: m.rules.can_replace.iter().map(name).collect(),
                contact_colors: m
                    .rules
                    .contact_colors
                    .iter()
                    .map(|(id, c)| (name(id), <[f32; 3]>::from(*c)))
                    .collect(),
                contact_sounds: m
                    .rules
                    .contact_sounds
                    .iter()
                    .map(|(id, s)| (name(id), s.clone()))
                    .collect(),
                spread_speed: m.rules.spread_speed,
            },
        }
    }

    fn push_builtin(&mut self, name: &str, category: MaterialCategory, color: Color) -> MaterialId {
        let id = self.materials.len() as MaterialId;
        self.name_to_id.insert(name.to_string(), id);
        self.materials.push(MaterialDefinition {
            id,
            name: name.to_string(),
            category,
            initial_color: color,
            initial_lifetime: -1.0,
            rules: Arc::new(SpreadRules::default()),
        });
        id
    }

    fn set_builtin_rules(&mut self, id: MaterialId, f: impl FnOnce(&mut SpreadRules)) {
        let mut rules = SpreadRules::default();
        f(&mut rules);
        self.materials[id as usize].rules = Arc::new(rules);
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Append `record` to a material document.
///
/// An entry with the same name is replaced in place. An empty or non-array
/// document is replaced by a fresh array; malformed JSON is an error.
pub fn append_record_json(existing: &str, record: &MaterialRecord) -> Result<String, CatalogError> {
    let mut doc: serde_json::Value = if existing.trim().is_empty() {
        serde_json::Value::Array(Vec::new())
    } else {
        serde_json::from_str(existing)?
    };

    if !doc.is_array() {
        doc = serde_json::Value::Array(Vec::new());
    }

    let entry = serde_json::to_value(record)?;
    if let serde_json::Value::Array(items) = &mut doc {
        // Names are unique within a document: a re-save replaces in place
        let same_name = items
            .iter_mut()
            .find(|item| item.get("name").and_then(|n| n.as_str()) == Some(record.name.as_str()));
        match same_name {
            Some(slot) => *slot = entry,
            None => items.push(entry),
        }
    }

    Ok(serde_json::to_string_pretty(&doc)?)
}

/// One entry of a material document, as written by the material editor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_code: u8,
    #[serde(default = "default_lifetime")]
    pub initial_life_time: f32,
    pub initial_color: [f32; 3],
    #[serde(default)]
    pub spread_rules: SpreadRulesRecord,
}

impl MaterialRecord {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    fn category(&self) -> Result<MaterialCategory, CatalogError> {
        MaterialCategory::try_from(self.type_code).map_err(|_| CatalogError::UnknownCategory {
            name: self.name.clone(),
            code: self.type_code,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpreadRulesRecord {
    #[serde(default)]
    pub can_replace: Vec<String>,
    #[serde(default)]
    pub contact_colors: BTreeMap<String, [f32; 3]>,
    #[serde(default)]
    pub contact_sounds: BTreeMap<String, String>,
    #[serde(default)]
    pub spread_speed: i32,
}

fn default_lifetime() -> f32 {
    -1.0
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    format_version: u32,
    materials: Vec<ManifestEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestEntry<'a> {
    id: MaterialId,
    name: &'a str,
    category: &'static str,
    color: u32,
    hidden: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"[
        {
            "name": "sand",
            "type": 1,
            "initial_life_time": -1.0,
            "initial_color": [194, 178, 128],
            "spread_rules": {
                "can_replace": ["water"],
                "contact_colors": { "water": [150, 130, 90] },
                "contact_sounds": { "water": "splash.wav" },
                "spread_speed": 1
            }
        },
        { "name": "water", "type": 2, "initial_color": [0, 0, 255] }
    ]"#;

    #[test]
    fn parses_document_and_resolves_forward_references() {
        let catalog = MaterialCatalog::from_json(DOC).expect("document should parse");
        assert_eq!(catalog.names(), vec!["none", "sand", "water"]);

        let sand = catalog.lookup("sand").unwrap();
        let water = catalog.id_of("water").unwrap();
        assert_eq!(sand.category, MaterialCategory::Solid);
        assert!(sand.rules.can_replace(water));
        assert_eq!(sand.rules.contact_color(water), Some(Color::rgb(150, 130, 90)));
        assert_eq!(sand.rules.contact_sound(water), Some("splash.wav"));

        let water_def = catalog.lookup("water").unwrap();
        assert_eq!(water_def.initial_lifetime, -1.0);
        assert!(water_def.rules.can_replace.is_empty());
    }

    #[test]
    fn lookup_miss_is_not_found() {
        let catalog = MaterialCatalog::builtin();
        assert_eq!(
            catalog.lookup("plasma").unwrap_err(),
            CatalogError::NotFound("plasma".to_string())
        );
    }

    #[test]
    fn rejects_bad_documents() {
        let dup = r#"[{"name":"a","type":1,"initial_color":[0,0,0]},{"name":"a","type":1,"initial_color":[0,0,0]}]"#;
        assert_eq!(
            MaterialCatalog::from_json(dup).unwrap_err(),
            CatalogError::DuplicateName("a".to_string())
        );

        let bad_type = r#"[{"name":"a","type":7,"initial_color":[0,0,0]}]"#;
        assert!(matches!(
            MaterialCatalog::from_json(bad_type).unwrap_err(),
            CatalogError::UnknownCategory { code: 7, .. }
        ));

        let dangling = r#"[{"name":"a","type":1,"initial_color":[0,0,0],"spread_rules":{"can_replace":["ghost"]}}]"#;
        assert!(matches!(
            MaterialCatalog::from_json(dangling).unwrap_err(),
            CatalogError::UnknownReference { .. }
        ));

        let reserved = r#"[{"name":"none","type":0,"initial_color":[0,0,0]}]"#;
        assert!(matches!(
            MaterialCatalog::from_json(reserved).unwrap_err(),
            CatalogError::ReservedName(_)
        ));

        assert!(matches!(
            MaterialCatalog::from_json("{not json").unwrap_err(),
            CatalogError::Parse(_)
        ));
    }

    #[test]
    fn register_replaces_in_place_and_keeps_id() {
        let mut catalog = MaterialCatalog::builtin();
        let before = catalog.id_of("water").unwrap();
        let old_rules = catalog.lookup("water").unwrap().rules.clone();

        let record = MaterialRecord {
            name: "water".to_string(),
            type_code: 2,
            initial_life_time: 10.0,
            initial_color: [1.0, 2.0, 3.0],
            spread_rules: SpreadRulesRecord {
                can_replace: vec!["water".to_string()],
                ..Default::default()
            },
        };
        let id = catalog.register(record).unwrap();
        assert_eq!(id, before);

        let water = catalog.lookup("water").unwrap();
        assert_eq!(water.initial_color, Color::rgb(1, 2, 3));
        assert!(water.rules.can_replace(id));
        // The old rule record is untouched
        assert!(!old_rules.can_replace(id));
    }

    #[test]
    fn failed_register_leaves_no_trace() {
        let mut catalog = MaterialCatalog::builtin();
        let len = catalog.len();
        let record = MaterialRecord {
            name: "goo".to_string(),
            type_code: 2,
            initial_life_time: -1.0,
            initial_color: [0.0, 255.0, 0.0],
            spread_rules: SpreadRulesRecord {
                can_replace: vec!["ghost".to_string()],
                ..Default::default()
            },
        };
        assert!(catalog.register(record).is_err());
        assert_eq!(catalog.len(), len);
        assert_eq!(catalog.id_of("goo"), None);
    }

    #[test]
    fn serialized_catalog_parses_back_to_same_names() {
        let catalog = MaterialCatalog::builtin();
        let json = catalog.to_json().unwrap();
        let reparsed = MaterialCatalog::from_json(&json).unwrap();
        assert_eq!(reparsed.names(), catalog.names());
        assert_eq!(reparsed.lookup("lava").unwrap().rules, catalog.lookup("lava").unwrap().rules);
    }

    #[test]
    fn append_replaces_non_array_documents() {
        let record = MaterialRecord::from_json(
            r#"{"name":"mud","type":2,"initial_life_time":-1,"initial_color":[90,60,30]}"#,
        )
        .unwrap();

        let out = append_record_json(r#"{"oops": true}"#, &record).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc.as_array().map(|a| a.len()), Some(1));

        let clay = MaterialRecord { name: "clay".to_string(), ..record.clone() };
        let out = append_record_json(&out, &clay).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc.as_array().map(|a| a.len()), Some(2));
        assert_eq!(doc[1]["spread_rules"]["spread_speed"], 0);
    }

    #[test]
    fn append_replaces_an_entry_with_the_same_name() {
        let first = MaterialRecord::from_json(
            r#"{"name":"mud","type":1,"initial_color":[90,60,30]}"#,
        )
        .unwrap();
        let second = MaterialRecord { type_code: 2, initial_color: [10.0, 20.0, 30.0], ..first.clone() };

        let out = append_record_json("[]", &first).unwrap();
        let out = append_record_json(&out, &second).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc.as_array().map(|a| a.len()), Some(1));
        assert_eq!(doc[0]["type"], 2);

        let catalog = MaterialCatalog::from_json(&out).unwrap();
        assert_eq!(catalog.lookup("mud").unwrap().category, MaterialCategory::Liquid);

        assert!(append_record_json("[", &second).is_err());
    }

    #[test]
    fn manifest_lists_every_material() {
        let catalog = MaterialCatalog::builtin();
        let manifest: serde_json::Value = serde_json::from_str(&catalog.manifest_json()).unwrap();
        assert_eq!(manifest["formatVersion"], 1);
        assert_eq!(manifest["materials"].as_array().unwrap().len(), catalog.len());
        assert_eq!(manifest["materials"][0]["hidden"], true);
    }
}
