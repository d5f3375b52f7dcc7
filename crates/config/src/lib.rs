//! Aircraft preset catalogs: the built-in table and loaders for catalog files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use aero_core::{AircraftParameters, ParameterError};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Preset record as written in catalog files. All values are SI.
#[derive(Debug, Deserialize, Clone)]
pub struct PresetConfig {
    pub name: String,
    pub wing_area_m2: f64,
    pub velocity_m_s: f64,
    pub altitude_m: f64,
    pub weight_n: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
}

/// Named aircraft with fixed SI parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetEntry {
    pub name: String,
    pub parameters: AircraftParameters,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("aircraft preset '{0}' not found in catalog")]
    UnknownPreset(String),
    #[error("aircraft preset '{0}' appears more than once")]
    DuplicatePreset(String),
    #[error("aircraft preset '{name}' is invalid: {source}")]
    InvalidPreset {
        name: String,
        #[source]
        source: ParameterError,
    },
    #[error("preset catalog is empty")]
    EmptyCatalog,
    #[error("unsupported catalog file {}; use .yaml, .yml, .toml, or a directory", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Immutable, ordered set of presets with unique names.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    entries: Vec<PresetEntry>,
}

const BUILTIN: [(&str, [f64; 6]); 5] = [
    ("SR-71 Blackbird", [170.0, 983.0, 25_000.0, 67_600.0, 0.067, 0.00092]),
    ("Boeing 747", [511.0, 260.0, 10_668.0, 1_710_000.0, 0.52, 0.022]),
    ("Concorde", [360.0, 605.0, 17_770.0, 1_090_000.0, 0.125, 0.004]),
    ("F-22 Raptor", [78.0, 670.0, 19_000.0, 288_422.0, 0.282, 0.052]),
    ("B-52 Stratofortress", [370.0, 288.0, 15_000.0, 1_180_000.0, 0.784, 0.0119]),
];

impl PresetCatalog {
    /// The five aircraft shipped with the calculator.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(name, [area, velocity, altitude, weight, cl, cd])| PresetEntry {
                name: (*name).to_string(),
                parameters: AircraftParameters {
                    wing_area_m2: *area,
                    velocity_m_s: *velocity,
                    altitude_m: *altitude,
                    weight_n: *weight,
                    lift_coefficient: *cl,
                    drag_coefficient: *cd,
                },
            })
            .collect();
        Self { entries }
    }

    /// Build a catalog from file records, validating each and rejecting duplicate names.
    pub fn from_configs(configs: Vec<PresetConfig>) -> Result<Self, CatalogError> {
        if configs.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(configs.len());
        for cfg in configs {
            if !seen.insert(cfg.name.clone()) {
                return Err(CatalogError::DuplicatePreset(cfg.name));
            }
            let parameters = AircraftParameters::new(
                cfg.wing_area_m2,
                cfg.velocity_m_s,
                cfg.altitude_m,
                cfg.weight_n,
                cfg.lift_coefficient,
                cfg.drag_coefficient,
            )
            .map_err(|source| CatalogError::InvalidPreset {
                name: cfg.name.clone(),
                source,
            })?;
            entries.push(PresetEntry {
                name: cfg.name,
                parameters,
            });
        }
        Ok(Self { entries })
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Result<AircraftParameters, CatalogError> {
        let found = self
            .entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.parameters);
        debug!(preset = name, found = found.is_some(), "preset lookup");
        found.ok_or_else(|| CatalogError::UnknownPreset(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Preset names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn entries(&self) -> &[PresetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Look up a preset in the built-in catalog.
pub fn lookup_preset(name: &str) -> Result<AircraftParameters, CatalogError> {
    PresetCatalog::builtin().lookup(name)
}

/// Load a catalog from a YAML list (`.yaml`/`.yml`), a single TOML record
/// (`.toml`), or a directory of TOML records read in file-name order.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<PresetCatalog, CatalogError> {
    let path = path.as_ref();
    let configs = if path.is_dir() {
        read_dir_records(path)?
    } else {
        CatalogFormat::of(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?
            .read(path)?
    };
    debug!(path = %path.display(), records = configs.len(), "loaded preset catalog");
    PresetCatalog::from_configs(configs)
}

/// On-disk layout of a catalog file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    YamlList,
    TomlRecord,
}

impl CatalogFormat {
    fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::YamlList),
            "toml" => Some(Self::TomlRecord),
            _ => None,
        }
    }

    fn read(self, path: &Path) -> Result<Vec<PresetConfig>, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(match self {
            Self::YamlList => serde_yaml::from_str(&contents)?,
            Self::TomlRecord => vec![toml::from_str(&contents)?],
        })
    }
}

fn read_dir_records(dir: &Path) -> Result<Vec<PresetConfig>, CatalogError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if CatalogFormat::of(&path) == Some(CatalogFormat::TomlRecord) {
            files.push(path);
        }
    }
    files.sort();
    let mut records = Vec::with_capacity(files.len());
    for path in &files {
        records.extend(CatalogFormat::TomlRecord.read(path)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_is_valid_and_ordered() {
        let catalog = PresetCatalog::builtin();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(
            names,
            [
                "SR-71 Blackbird",
                "Boeing 747",
                "Concorde",
                "F-22 Raptor",
                "B-52 Stratofortress"
            ]
        );
        for entry in catalog.entries() {
            entry.parameters.validate().expect("builtin preset valid");
        }
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = PresetCatalog::builtin();
        assert!(catalog.lookup("Concorde").is_ok());
        assert!(matches!(
            catalog.lookup("concorde"),
            Err(CatalogError::UnknownPreset(name)) if name == "concorde"
        ));
        assert!(!catalog.contains("custom"));
    }

    #[test]
    fn yaml_catalog_loads() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "- name: Cessna 172\n  wing_area_m2: 16.2\n  velocity_m_s: 60\n  altitude_m: 1500\n  weight_n: 10900\n  lift_coefficient: 0.4\n  drag_coefficient: 0.03"
        )
        .unwrap();
        let catalog = load_catalog(file.path()).expect("yaml catalog");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("Cessna 172").unwrap().wing_area_m2, 16.2);
    }

    #[test]
    fn toml_directory_loads_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for (file, name) in [("b.toml", "Second"), ("a.toml", "First")] {
            std::fs::write(
                dir.path().join(file),
                format!(
                    "name = \"{name}\"\nwing_area_m2 = 20.0\nvelocity_m_s = 70.0\naltitude_m = 500.0\nweight_n = 9000.0\nlift_coefficient = 0.5\ndrag_coefficient = 0.03\n"
                ),
            )
            .unwrap();
        }
        let catalog = load_catalog(dir.path()).expect("toml dir");
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["First", "Second"]);
    }

    #[test]
    fn rejects_duplicates_and_invalid_records() {
        let record = |name: &str, cl: f64| PresetConfig {
            name: name.to_string(),
            wing_area_m2: 10.0,
            velocity_m_s: 50.0,
            altitude_m: 100.0,
            weight_n: 5000.0,
            lift_coefficient: cl,
            drag_coefficient: 0.02,
        };
        assert!(matches!(
            PresetCatalog::from_configs(vec![record("A", 0.5), record("A", 0.5)]),
            Err(CatalogError::DuplicatePreset(_))
        ));
        assert!(matches!(
            PresetCatalog::from_configs(vec![record("A", -0.5)]),
            Err(CatalogError::InvalidPreset { .. })
        ));
        assert!(matches!(
            PresetCatalog::from_configs(Vec::new()),
            Err(CatalogError::EmptyCatalog)
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(matches!(
            load_catalog(&path),
            Err(CatalogError::UnsupportedFormat(p)) if p == path
        ));
    }

    #[test]
    fn directory_skips_non_toml_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("glider.toml"),
            "name = \"Glider\"\nwing_area_m2 = 15.0\nvelocity_m_s = 30.0\naltitude_m = 800.0\nweight_n = 3500.0\nlift_coefficient = 0.9\ndrag_coefficient = 0.01\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a preset").unwrap();
        let catalog = load_catalog(dir.path()).expect("toml dir");
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["Glider"]);
    }
}
