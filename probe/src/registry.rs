//! Startup registry mapping qualified names to type factories.
//!
//! The registry is populated once through [`RegistryBuilder`] and then frozen.
//! Nothing is ever removed or replaced.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::error::{RegisterError, ResolveError};
use crate::name::QualifiedName;

type Factory = Box<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// Whether a registered type may be resolved by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Resolvable by probes.
    Public,
    /// Known to the registry but hidden from probes.
    Internal,
}

/// A single registry entry.
pub struct RegisteredType {
    name: QualifiedName,
    visibility: Visibility,
    factory: Option<Factory>,
    initializer: Option<fn()>,
    initialized: OnceLock<()>,
}

impl RegisteredType {
    fn new(name: QualifiedName, visibility: Visibility) -> Self {
        Self {
            name,
            visibility,
            factory: None,
            initializer: None,
            initialized: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// True if the entry carries a factory (markers do not).
    pub fn is_constructible(&self) -> bool {
        self.factory.is_some()
    }

    /// True once a successful resolution has run the entry's initializer.
    pub fn is_initialized(&self) -> bool {
        self.initialized.get().is_some()
    }

    /// Build a fresh instance through the registered factory.
    pub fn construct(&self) -> Option<Box<dyn Any + Send>> {
        self.factory.as_ref().map(|factory| factory())
    }

    /// Run the initializer at most once, on first resolution.
    fn initialize(&self) {
        self.initialized.get_or_init(|| {
            if let Some(init) = self.initializer {
                debug!(name = %self.name, "running type initializer");
                init();
            }
        });
    }
}

impl fmt::Debug for RegisteredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredType")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("constructible", &self.is_constructible())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

/// Collects registrations from every module before the registry is frozen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<QualifiedName, RegisteredType>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a public, constructible type.
    pub fn register<T, F>(&mut self, name: &str, factory: F) -> Result<&mut Self, RegisterError>
    where
        T: Any + Send,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let mut entry = RegisteredType::new(QualifiedName::parse(name)?, Visibility::Public);
        entry.factory = Some(Box::new(move || Box::new(factory()) as Box<dyn Any + Send>));
        self.insert(entry)
    }

    /// Register a public, constructible type whose `init` runs once on first
    /// successful resolution.
    pub fn register_with_init<T, F>(
        &mut self,
        name: &str,
        factory: F,
        init: fn(),
    ) -> Result<&mut Self, RegisterError>
    where
        T: Any + Send,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let mut entry = RegisteredType::new(QualifiedName::parse(name)?, Visibility::Public);
        entry.factory = Some(Box::new(move || Box::new(factory()) as Box<dyn Any + Send>));
        entry.initializer = Some(init);
        self.insert(entry)
    }

    /// Register a public name with no factory (a pure capability marker).
    pub fn register_marker(&mut self, name: &str) -> Result<&mut Self, RegisterError> {
        let entry = RegisteredType::new(QualifiedName::parse(name)?, Visibility::Public);
        self.insert(entry)
    }

    /// Register a name that probes must not see.
    pub fn register_internal(&mut self, name: &str) -> Result<&mut Self, RegisterError> {
        let entry = RegisteredType::new(QualifiedName::parse(name)?, Visibility::Internal);
        self.insert(entry)
    }

    fn insert(&mut self, entry: RegisteredType) -> Result<&mut Self, RegisterError> {
        if self.entries.contains_key(&entry.name) {
            return Err(RegisterError::Duplicate(entry.name.to_string()));
        }
        trace!(name = %entry.name, visibility = ?entry.visibility, "registered type");
        self.entries.insert(entry.name.clone(), entry);
        Ok(self)
    }

    pub fn build(self) -> TypeRegistry {
        debug!(types = self.entries.len(), "type registry built");
        TypeRegistry {
            entries: self.entries,
        }
    }
}

/// Frozen name → type map.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: BTreeMap<QualifiedName, RegisteredType>,
}

impl TypeRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in lexicographic order, including internal ones.
    pub fn names(&self) -> impl Iterator<Item = &QualifiedName> {
        self.entries.keys()
    }

    /// Resolve `raw` to a visible entry, running its initializer on first use.
    pub fn resolve(&self, raw: &str) -> Result<&RegisteredType, ResolveError> {
        let name = QualifiedName::parse(raw)?;
        let entry = self
            .entries
            .get(&name)
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))?;
        if entry.visibility == Visibility::Internal {
            return Err(ResolveError::NotVisible(name.to_string()));
        }
        entry.initialize();
        Ok(entry)
    }
}
