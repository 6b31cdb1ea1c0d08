//! Driver reference data.

use crate::config::DirectoryConfig;
use crate::error::{Result, ReviewError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const UNKNOWN_DRIVER_NAME: &str = "Unknown Driver";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub experience_years: u32,
}

impl Driver {
    pub fn new(id: i64, name: impl Into<String>, experience_years: u32) -> Self {
        Self {
            id,
            name: name.into(),
            experience_years,
        }
    }

    /// Fallback record for ids missing from the directory.
    pub fn sentinel(id: i64) -> Self {
        Self::new(id, UNKNOWN_DRIVER_NAME, 0)
    }
}

/// Read-only id → driver table. Lookup never fails.
#[derive(Debug, Clone)]
pub struct DriverDirectory {
    drivers: BTreeMap<i64, Driver>,
}

impl DriverDirectory {
    pub fn builtin() -> Self {
        Self::from_drivers([
            Driver::new(1, "James Wilson", 5),
            Driver::new(2, "Sarah Chen", 8),
            Driver::new(3, "Michael Rodriguez", 3),
        ])
    }

    pub fn from_drivers(drivers: impl IntoIterator<Item = Driver>) -> Self {
        Self {
            drivers: drivers.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    /// Build from configuration: extend the built-in set (configured ids win)
    /// or replace it entirely when `replace_builtin` is set.
    pub fn from_config(cfg: &DirectoryConfig) -> Result<Self> {
        let mut directory = if cfg.replace_builtin {
            Self::from_drivers([])
        } else {
            Self::builtin()
        };

        for entry in &cfg.drivers {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(ReviewError::config(format!(
                    "driver {} has a blank name",
                    entry.id
                )));
            }
            if let Some(previous) = directory.drivers.get(&entry.id) {
                tracing::debug!(
                    "driver {} ('{}') overridden by configuration",
                    entry.id,
                    previous.name
                );
            }
            directory
                .drivers
                .insert(entry.id, Driver::new(entry.id, name, entry.experience_years));
        }

        Ok(directory)
    }

    /// Total lookup: unknown ids resolve to the sentinel driver.
    pub fn lookup_driver(&self, id: i64) -> Driver {
        match self.drivers.get(&id) {
            Some(driver) => driver.clone(),
            None => {
                tracing::debug!("driver {} not in directory, using sentinel", id);
                Driver::sentinel(id)
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.values()
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

impl Default for DriverDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
