//! The preset registry and its builder.
//!
//! A [`Registry`] maps category names (camelCase, e.g. `temperatureDifference`) to shared
//! [`ConversionTable`]s. It is assembled once by a [`RegistryBuilder`]:
//!
//! 1. base tables (the embedded JSON resource, or one supplied by the caller),
//! 2. category tables, each overwriting any base entry of the same name,
//! 3. aliases, resolved last so that they see every category.
//!
//! An alias shares the `Arc` its target held when the registry was built, so
//! [`Registry::shares_table`] holds for `distance`/`length` and the alias is unaffected by later
//! changes to how its target is built.
//!
//! ```rust
//! use linear_presets::{build_registry, Registry};
//!
//! let registry: Registry = build_registry();
//! assert_eq!(registry.get("distance"), registry.get("length"));
//! assert!(registry.shares_table("speed", "velocity"));
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, info, warn};
use serde::Serialize;

use linear_presets_core::{ConversionTable, Preset, PresetError, PresetResult};

use crate::base::{self, BaseTables};
use crate::categories::{builtin_table, BUILTIN_CATEGORIES, DEFAULT_ALIASES};
use crate::config::RegistryConfig;

/// Category name to conversion table. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    tables: BTreeMap<String, Arc<ConversionTable>>,
}

impl Registry {
    /// Table registered under `category`, if any.
    pub fn get(&self, category: &str) -> Option<&ConversionTable> {
        self.tables.get(category).map(Arc::as_ref)
    }

    /// Table registered under `category`, or [`PresetError::UnknownCategory`].
    pub fn table(&self, category: &str) -> PresetResult<&ConversionTable> {
        self.get(category)
            .ok_or_else(|| PresetError::UnknownCategory(category.to_string()))
    }

    /// Shared handle to the table registered under `category`.
    pub fn shared(&self, category: &str) -> Option<Arc<ConversionTable>> {
        self.tables.get(category).cloned()
    }

    /// Whether `category` is registered (aliases included).
    pub fn contains(&self, category: &str) -> bool {
        self.tables.contains_key(category)
    }

    /// Category names in key order, aliases included.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// `(category, table)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConversionTable)> {
        self.tables
            .iter()
            .map(|(name, table)| (name.as_str(), table.as_ref()))
    }

    /// Number of registered names, aliases included.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Whether two names resolve to the very same table (alias identity, not just equality).
    pub fn shares_table(&self, a: &str, b: &str) -> bool {
        match (self.tables.get(a), self.tables.get(b)) {
            (Some(ta), Some(tb)) => Arc::ptr_eq(ta, tb),
            _ => false,
        }
    }

    /// Preset converting `from` into `to` within `category`.
    pub fn preset(&self, category: &str, from: &str, to: &str) -> PresetResult<Preset> {
        self.table(category)?
            .preset(from, to)
            .map_err(|e| e.in_category(category))
    }

    /// Converts `x` from one unit of `category` into another.
    ///
    /// ```rust
    /// let km = linear_presets::PRESETS
    ///     .convert("length", "metre", "kilometre", 42_195.0)
    ///     .unwrap();
    /// assert!((km - 42.195).abs() < 1e-9);
    /// ```
    pub fn convert(&self, category: &str, from: &str, to: &str, x: f64) -> PresetResult<f64> {
        self.preset(category, from, to).map(|preset| preset.convert(x))
    }

    /// The whole registry as a JSON object, one key per category.
    pub fn to_json_value(&self) -> PresetResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| PresetError::SerializationError(e.to_string()))
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = (&'a String, &'a Arc<ConversionTable>);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Arc<ConversionTable>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

/// Assembles a [`Registry`]: base tables, then categories, then aliases.
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    tables: BTreeMap<String, Arc<ConversionTable>>,
    aliases: Vec<(String, String)>,
}

impl RegistryBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the tables of a base JSON resource.
    pub fn with_base_json(self, json: &str) -> PresetResult<Self> {
        Ok(self.with_base_tables(base::parse_base(json)?))
    }

    /// Adds already-parsed base tables.
    pub fn with_base_tables(mut self, tables: BaseTables) -> Self {
        for (name, table) in tables {
            debug!("Registering base table '{}' ({} units)", name, table.len());
            self.tables.insert(name, Arc::new(table));
        }
        self
    }

    /// Assigns `table` to `name`, replacing any earlier entry.
    pub fn category(mut self, name: impl Into<String>, table: ConversionTable) -> Self {
        let name = name.into();
        debug!("Registering category '{}' ({} units)", name, table.len());
        if self.tables.insert(name.clone(), Arc::new(table)).is_some() {
            debug!("Category '{}' replaces an earlier table", name);
        }
        self
    }

    /// Declares `alias` as another name for `target`. Resolved by [`RegistryBuilder::build`].
    pub fn alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), target.into()));
        self
    }

    /// Resolves aliases and returns the registry.
    ///
    /// An alias may target another alias regardless of declaration order; a later declaration
    /// of the same alias name replaces an earlier one. Aliases are skipped, and the registry then
    /// lacks that key, when their name is already taken by a table or when their target never
    /// resolves.
    pub fn build(self) -> Registry {
        let RegistryBuilder {
            mut tables,
            aliases,
        } = self;

        let mut pending: Vec<(String, String)> = Vec::with_capacity(aliases.len());
        for (alias, target) in aliases {
            if tables.contains_key(&alias) {
                warn!(
                    "Skipping alias '{}': the name is taken by a registered category",
                    alias
                );
                continue;
            }
            pending.retain(|(name, _)| *name != alias);
            pending.push((alias, target));
        }

        // Each pass resolves every alias whose target is already present.
        loop {
            let before = pending.len();
            pending.retain(|(alias, target)| match tables.get(target).cloned() {
                Some(table) => {
                    debug!("Aliasing '{}' to '{}'", alias, target);
                    tables.insert(alias.clone(), table);
                    false
                }
                None => true,
            });
            if pending.is_empty() || pending.len() == before {
                break;
            }
        }

        for (alias, target) in pending {
            warn!(
                "Skipping alias '{}': category '{}' is not registered",
                alias, target
            );
        }

        Registry { tables }
    }
}

/// Builds the default registry: embedded base tables, every built-in category, then the
/// `distance` and `speed` aliases.
///
/// Never fails. Should the embedded base resource be unreadable, its categories are simply
/// missing from the result.
pub fn build_registry() -> Registry {
    let builder = match base::default_base() {
        Ok(tables) => RegistryBuilder::new().with_base_tables(tables),
        Err(e) => {
            warn!("Default base presets unavailable: {}", e);
            RegistryBuilder::new()
        }
    };

    let builder = BUILTIN_CATEGORIES
        .iter()
        .fold(builder, |builder, (name, table)| builder.category(*name, table()));

    let registry = DEFAULT_ALIASES
        .iter()
        .fold(builder, |builder, (alias, target)| builder.alias(*alias, *target))
        .build();

    info!("Built preset registry with {} entries", registry.len());
    registry
}

/// Builds a registry as described by `config`.
///
/// Unlike [`build_registry`], a configured base file that cannot be read and category names
/// without a built-in table are reported as errors.
pub fn build_registry_with(config: &RegistryConfig) -> PresetResult<Registry> {
    let base = match &config.registry.base {
        Some(path) => base::load_base_file(path)?,
        None => base::default_base()?,
    };
    let mut builder = RegistryBuilder::new().with_base_tables(base);

    match &config.registry.categories {
        Some(names) => {
            for name in names {
                let table = builtin_table(name).ok_or_else(|| {
                    PresetError::ConfigurationError(format!("Unknown category: {}", name))
                })?;
                builder = builder.category(name.as_str(), table);
            }
        }
        None => {
            for (name, table) in BUILTIN_CATEGORIES {
                builder = builder.category(*name, table());
            }
        }
    }

    for (alias, target) in &config.aliases {
        builder = builder.alias(alias.as_str(), target.as_str());
    }

    let registry = builder.build();
    info!("Built configured preset registry with {} entries", registry.len());
    Ok(registry)
}
