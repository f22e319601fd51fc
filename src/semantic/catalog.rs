//! Catalog interface used by catalog-dependent checks.
//!
//! Checks never populate or mutate a catalog; they only resolve function
//! names through [`Catalog::lookup_functions`]. A name that is simply not
//! registered resolves to an empty overload list, which is distinct from a
//! lookup error such as a reference to a missing schema.

use std::collections::HashMap;
use std::fmt;

use smol_str::SmolStr;
use tracing::trace;

use crate::diag::{Diag, SqlState};
use crate::lexer::split_qualified_name;
use crate::semantic::callable::{FunctionSignature, builtin_functions};

// ============================================================================
// Qualified names
// ============================================================================

/// A function name split into `[catalog.][schema.]name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub catalog: Option<SmolStr>,
    pub schema: Option<SmolStr>,
    pub name: SmolStr,
}

impl QualifiedName {
    /// Creates an unqualified name.
    pub fn unqualified(name: impl Into<SmolStr>) -> Self {
        Self {
            catalog: None,
            schema: None,
            name: name.into(),
        }
    }

    /// Builds a qualified name from dotted name parts as written in a
    /// statement.
    ///
    /// Accepts one to three parts.
    pub fn from_parts(parts: &[SmolStr]) -> Result<Self, Diag> {
        match parts {
            [name] => Ok(Self::unqualified(name.clone())),
            [schema, name] => Ok(Self {
                catalog: None,
                schema: Some(schema.clone()),
                name: name.clone(),
            }),
            [catalog, schema, name] => Ok(Self {
                catalog: Some(catalog.clone()),
                schema: Some(schema.clone()),
                name: name.clone(),
            }),
            [] => Err(Diag::new(
                SqlState::SYNTAX_ERROR,
                "improper qualified name (empty)",
            )),
            _ => Err(Diag::new(
                SqlState::SYNTAX_ERROR,
                format!(
                    "improper qualified name (too many dotted names): {}",
                    parts.join(".")
                ),
            )),
        }
    }

    /// Parses a dotted textual name such as `pg_catalog.lower`.
    pub fn parse(text: &str) -> Result<Self, Diag> {
        Self::from_parts(&split_qualified_name(text)?)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(catalog) = &self.catalog {
            write!(f, "{catalog}.")?;
        }
        if let Some(schema) = &self.schema {
            write!(f, "{schema}.")?;
        }
        write!(f, "{}", self.name)
    }
}

// ============================================================================
// Catalog trait
// ============================================================================

/// Read-only name resolution for functions.
pub trait Catalog {
    /// Resolves `name` to its overloads.
    ///
    /// Returns `Ok(vec![])` when the name is not registered. Errors are
    /// reserved for names that cannot be resolved at all (for example an
    /// unknown schema) and are reported to the user unchanged.
    fn lookup_functions(&self, name: &QualifiedName) -> Result<Vec<FunctionSignature>, Diag>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn lookup_functions(&self, name: &QualifiedName) -> Result<Vec<FunctionSignature>, Diag> {
        (**self).lookup_functions(name)
    }
}

// ============================================================================
// In-memory implementation
// ============================================================================

/// Settings that govern name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Name of the current database; three-part names must use it.
    pub database: SmolStr,

    /// Schemas searched, in order, for unqualified names.
    pub search_path: Vec<SmolStr>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database: "postgres".into(),
            search_path: vec!["pg_catalog".into(), "public".into()],
        }
    }
}

impl CatalogConfig {
    /// Sets the current database name.
    pub fn with_database(mut self, database: impl Into<SmolStr>) -> Self {
        self.database = database.into();
        self
    }

    /// Replaces the search path.
    pub fn with_search_path<I, S>(mut self, search_path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.search_path = search_path.into_iter().map(Into::into).collect();
        self
    }
}

type SchemaFunctions = HashMap<SmolStr, Vec<FunctionSignature>>;

/// In-memory catalog of schemas and their functions.
///
/// Suitable for tests and for pipelines that build the catalog up front
/// from schema files.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    config: CatalogConfig,
    schemas: HashMap<SmolStr, SchemaFunctions>,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    /// Creates an empty catalog with `pg_catalog` and `public` schemas.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Creates an empty catalog with `pg_catalog`, `public`, and every
    /// schema on the configured search path.
    pub fn with_config(config: CatalogConfig) -> Self {
        let mut schemas = HashMap::new();
        for schema in ["pg_catalog", "public"]
            .into_iter()
            .map(SmolStr::new)
            .chain(config.search_path.iter().cloned())
        {
            schemas.entry(schema).or_insert_with(SchemaFunctions::new);
        }
        Self { config, schemas }
    }

    /// Creates a catalog whose `pg_catalog` holds the builtin functions.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        let pg_catalog = catalog
            .schemas
            .entry(SmolStr::new("pg_catalog"))
            .or_default();
        for signature in builtin_functions() {
            pg_catalog
                .entry(signature.name.clone())
                .or_default()
                .push(signature);
        }
        catalog
    }

    /// Returns the resolution settings.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Registers an empty schema. Existing schemas are left untouched.
    pub fn add_schema(&mut self, schema: impl Into<SmolStr>) {
        self.schemas.entry(schema.into()).or_default();
    }

    /// Returns whether `schema` is registered.
    pub fn has_schema(&self, schema: &str) -> bool {
        self.schemas.contains_key(schema)
    }

    /// Registers an overload under a dotted textual name.
    ///
    /// Unqualified names go to `public`; a named schema is created on first
    /// use.
    pub fn add_function(&mut self, name: &str, signature: FunctionSignature) -> Result<(), Diag> {
        let qualified = QualifiedName::parse(name)?;
        self.check_database(&qualified)?;
        let schema = qualified.schema.unwrap_or_else(|| SmolStr::new("public"));
        self.schemas
            .entry(schema)
            .or_default()
            .entry(qualified.name)
            .or_default()
            .push(signature);
        Ok(())
    }

    fn check_database(&self, name: &QualifiedName) -> Result<(), Diag> {
        match &name.catalog {
            Some(catalog) if *catalog != self.config.database => Err(Diag::new(
                SqlState::FEATURE_NOT_SUPPORTED,
                format!("cross-database references are not implemented: {name}"),
            )),
            _ => Ok(()),
        }
    }
}

impl Catalog for InMemoryCatalog {
    fn lookup_functions(&self, name: &QualifiedName) -> Result<Vec<FunctionSignature>, Diag> {
        self.check_database(name)?;

        if let Some(schema) = &name.schema {
            let Some(functions) = self.schemas.get(schema) else {
                return Err(Diag::new(
                    SqlState::INVALID_SCHEMA_NAME,
                    format!("schema \"{schema}\" does not exist"),
                ));
            };
            let found = functions.get(&name.name).cloned().unwrap_or_default();
            trace!(%name, overloads = found.len(), "function lookup");
            return Ok(found);
        }

        for schema in &self.config.search_path {
            if let Some(found) = self
                .schemas
                .get(schema)
                .and_then(|functions| functions.get(&name.name))
            {
                trace!(%name, %schema, overloads = found.len(), "function lookup");
                return Ok(found.clone());
            }
        }

        trace!(%name, "function lookup: not found");
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::callable::ArgumentSignature;

    fn two_arg(name: &str) -> FunctionSignature {
        FunctionSignature::declared(
            name,
            vec![
                ArgumentSignature::unnamed("integer"),
                ArgumentSignature::unnamed("integer"),
            ],
            "integer",
        )
    }

    #[test]
    fn from_parts_accepts_one_to_three_parts() {
        let one = QualifiedName::from_parts(&[SmolStr::new("f")]).unwrap();
        assert_eq!(one, QualifiedName::unqualified("f"));

        let two = QualifiedName::from_parts(&[SmolStr::new("s"), SmolStr::new("f")]).unwrap();
        assert_eq!(two.schema.as_deref(), Some("s"));
        assert_eq!(two.catalog, None);

        let three = QualifiedName::from_parts(&[
            SmolStr::new("db"),
            SmolStr::new("s"),
            SmolStr::new("f"),
        ]).unwrap();
        assert_eq!(three.catalog.as_deref(), Some("db"));
        assert_eq!(three.to_string(), "db.s.f");
    }

    #[test]
    fn from_parts_rejects_too_many_parts() {
        let parts: Vec<SmolStr> = ["a", "b", "c", "d"].into_iter().map(SmolStr::new).collect();
        let err = QualifiedName::from_parts(&parts).unwrap_err();
        assert_eq!(err.code, "42601");
        assert_eq!(
            err.message,
            "improper qualified name (too many dotted names): a.b.c.d"
        );
    }

    #[test]
    fn from_parts_rejects_empty_name() {
        let err = QualifiedName::from_parts(&[]).unwrap_err();
        assert_eq!(err.code, "42601");
    }

    #[test]
    fn parse_folds_case() {
        let name = QualifiedName::parse("PUBLIC.Add").unwrap();
        assert_eq!(name.schema.as_deref(), Some("public"));
        assert_eq!(name.name, "add");
    }

    #[test]
    fn unknown_name_is_empty_not_error() {
        let catalog = InMemoryCatalog::new();
        let found = catalog
            .lookup_functions(&QualifiedName::unqualified("nope"))
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn unknown_schema_is_an_error() {
        let catalog = InMemoryCatalog::new();
        let err = catalog
            .lookup_functions(&QualifiedName::parse("missing.f").unwrap())
            .unwrap_err();
        assert_eq!(err.code, "3F000");
        assert_eq!(err.message, "schema \"missing\" does not exist");
    }

    #[test]
    fn other_database_is_an_error() {
        let catalog = InMemoryCatalog::new();
        let err = catalog
            .lookup_functions(&QualifiedName::parse("otherdb.public.f").unwrap())
            .unwrap_err();
        assert_eq!(err.code, "0A000");
        assert_eq!(
            err.message,
            "cross-database references are not implemented: otherdb.public.f"
        );

        let ok = catalog.lookup_functions(&QualifiedName::parse("postgres.public.f").unwrap());
        assert_eq!(ok, Ok(Vec::new()));
    }

    #[test]
    fn configured_database_name_is_honored() {
        let catalog = InMemoryCatalog::with_config(CatalogConfig::default().with_database("app"));
        assert_eq!(catalog.config().database, "app");

        let ok = catalog.lookup_functions(&QualifiedName::parse("app.public.f").unwrap());
        assert_eq!(ok, Ok(Vec::new()));

        let err = catalog
            .lookup_functions(&QualifiedName::parse("postgres.public.f").unwrap())
            .unwrap_err();
        assert_eq!(err.code, "0A000");
    }

    #[test]
    fn registered_empty_schema_resolves_to_nothing() {
        let mut catalog = InMemoryCatalog::new();
        let missing = catalog.lookup_functions(&QualifiedName::parse("reporting.f").unwrap());
        assert_eq!(missing.unwrap_err().code, "3F000");

        catalog.add_schema("reporting");
        assert!(catalog.has_schema("reporting"));
        let found = catalog.lookup_functions(&QualifiedName::parse("reporting.f").unwrap());
        assert_eq!(found, Ok(Vec::new()));
    }

    #[test]
    fn non_ascii_function_names_register() {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_function("straße", two_arg("straße")).unwrap();
        let found = catalog
            .lookup_functions(&QualifiedName::parse("public.straße").unwrap())
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn overloads_accumulate() {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_function("add", two_arg("add")).unwrap();
        catalog
            .add_function("public.add", FunctionSignature::with_arg_count("add", 3, "integer"))
            .unwrap();

        let found = catalog
            .lookup_functions(&QualifiedName::unqualified("add"))
            .unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn search_path_order_decides_unqualified_lookup() {
        let mut catalog = InMemoryCatalog::with_config(
            CatalogConfig::default().with_search_path(["app", "public"]),
        );
        catalog.add_function("public.f", two_arg("f")).unwrap();
        catalog
            .add_function("app.f", FunctionSignature::with_arg_count("f", 1, "text"))
            .unwrap();

        let found = catalog
            .lookup_functions(&QualifiedName::unqualified("f"))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].arity(), 1);
    }

    #[test]
    fn builtins_resolve_unqualified_and_qualified() {
        let catalog = InMemoryCatalog::with_builtins();
        let unqualified = catalog
            .lookup_functions(&QualifiedName::unqualified("lower"))
            .unwrap();
        let qualified = catalog
            .lookup_functions(&QualifiedName::parse("pg_catalog.lower").unwrap())
            .unwrap();
        assert_eq!(unqualified.len(), 1);
        assert_eq!(unqualified, qualified);
    }

    #[test]
    fn add_function_creates_schema() {
        let mut catalog = InMemoryCatalog::new();
        assert!(!catalog.has_schema("app"));
        catalog.add_function("app.f", two_arg("f")).unwrap();
        assert!(catalog.has_schema("app"));
    }

    #[test]
    fn add_function_rejects_malformed_names() {
        let mut catalog = InMemoryCatalog::new();
        assert!(catalog.add_function("a.b.c.d", two_arg("d")).is_err());
        assert!(catalog.add_function("a.", two_arg("a")).is_err());
    }
}
