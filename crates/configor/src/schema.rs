//! Field descriptors for configuration types.
//!
//! Responsibilities:
//! - Define the [`Configurable`] trait implemented by configuration types.
//! - Describe each field's name, value kind and directives (`env`, `default`,
//!   `required`, `anonymous`) through a builder API.
//!
//! Does NOT handle:
//! - Walking a configuration tree (see `crate::resolve`).
//!
//! Invariants:
//! - A field's `name` is its key in the serialized tree (its serde name) and
//!   its segment in generated environment variable names.
//! - Only fields listed in a schema are visited by the resolver.
//! - Anonymous fields are records flattened into their parent
//!   (`#[serde(flatten)]`).

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A configuration type with a field descriptor table.
///
/// ```
/// use configor::{Configurable, Field, Schema};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// struct Database {
///     user: String,
///     password: String,
/// }
///
/// impl Configurable for Database {
///     fn schema() -> Schema {
///         Schema::new()
///             .field(Field::text("user").default("root"))
///             .field(Field::text("password").env("DBPassword").required())
///     }
/// }
/// ```
pub trait Configurable: Serialize + DeserializeOwned {
    /// Describe the fields the resolver should visit.
    fn schema() -> Schema;
}

/// The shape of a field's value.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// A string. Literals are kept as raw text when YAML would read them as
    /// another scalar type.
    Text,
    /// Any YAML literal: number, boolean, string, sequence or mapping.
    Scalar,
    /// A nested record.
    Record(Schema),
    /// A sequence of records, addressable by element index.
    Records(Schema),
    /// One level of `Option<_>` around another kind.
    Optional(Box<Kind>),
}

impl Kind {
    /// The kind with any optional wrapping removed.
    pub fn unwrapped(&self) -> &Kind {
        match self {
            Kind::Optional(inner) => inner.unwrapped(),
            other => other,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Kind::Optional(_))
    }
}

/// Descriptor of one field of a configuration record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) kind: Kind,
    pub(crate) env: Option<String>,
    pub(crate) default: Option<String>,
    pub(crate) required: bool,
    pub(crate) anonymous: bool,
}

impl Field {
    /// A field with an explicitly constructed kind, for schemas built at runtime.
    pub fn of_kind(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            env: None,
            default: None,
            required: false,
            anonymous: false,
        }
    }

    /// A string field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::of_kind(name, Kind::Text)
    }

    /// A field holding any YAML-expressible value (numbers, booleans, lists, maps).
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::of_kind(name, Kind::Scalar)
    }

    /// A nested record of type `T`.
    pub fn record<T: Configurable>(name: impl Into<String>) -> Self {
        Self::of_kind(name, Kind::Record(T::schema()))
    }

    /// A sequence of records of type `T`.
    pub fn records<T: Configurable>(name: impl Into<String>) -> Self {
        Self::of_kind(name, Kind::Records(T::schema()))
    }

    /// Wrap the field's kind in `Option<_>`.
    pub fn optional(mut self) -> Self {
        self.kind = Kind::Optional(Box::new(self.kind));
        self
    }

    /// Read the field from exactly this environment variable.
    pub fn env(mut self, var: impl Into<String>) -> Self {
        self.env = Some(var.into());
        self
    }

    /// Literal applied when the field is still blank after the environment pass.
    pub fn default(mut self, literal: impl Into<String>) -> Self {
        self.default = Some(literal.into());
        self
    }

    /// Fail resolution when the field is blank and has no default.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Flatten this record into its parent: its fields live in the parent's
    /// node and it adds no segment to environment variable names.
    ///
    /// The field's own `env`, `default` and `required` directives still apply,
    /// under its name, to the embedded members taken together.
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Explicit environment variable, if any.
    pub fn env_var(&self) -> Option<&str> {
        self.env.as_deref()
    }

    /// Default literal, if any.
    pub fn default_literal(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }
}

/// Ordered field descriptors of one record type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; declaration order is resolution order.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A loosely typed tree has no fields to describe; loading into it merges
/// files without any directive pass.
impl Configurable for serde_json::Value {
    fn schema() -> Schema {
        Schema::new()
    }
}
