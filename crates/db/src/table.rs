//! Column and table definitions.

use keel_schemas::{Action, Schema};

/// Postgres column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Varchar(usize),
    /// `timestamp with time zone`; travels over JSON as an RFC 3339 string.
    TimestampTz,
}

impl ColumnType {
    fn sql(&self) -> String {
        match self {
            ColumnType::Text => "text".to_string(),
            ColumnType::Varchar(len) => format!("varchar({len})"),
            ColumnType::TimestampTz => "timestamp with time zone".to_string(),
        }
    }

    fn schema(&self) -> Schema {
        match self {
            ColumnType::Text => Schema::string(),
            ColumnType::Varchar(len) => Schema::string().pipe([Action::max_length(*len)]),
            ColumnType::TimestampTz => Schema::string().pipe([Action::timestamp()]),
        }
    }
}

/// Where a column's value comes from when an insert leaves it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDefault {
    None,
    /// `DEFAULT now()` in SQL.
    Now,
    /// Generated by the application before insert (UUIDv7 text).
    UuidV7,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Name in SQL (`password_hash`).
    pub name: &'static str,
    /// Name in JSON payloads (`passwordHash`).
    pub field: &'static str,
    pub ty: ColumnType,
    pub not_null: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub default: ColumnDefault,
    /// The application bumps this column to "now" on every update.
    pub on_update_now: bool,
}

impl Column {
    fn new(name: &'static str, field: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            field,
            ty,
            not_null: false,
            primary_key: false,
            unique: false,
            default: ColumnDefault::None,
            on_update_now: false,
        }
    }

    pub fn text(name: &'static str, field: &'static str) -> Self {
        Self::new(name, field, ColumnType::Text)
    }

    pub fn varchar(name: &'static str, field: &'static str, len: usize) -> Self {
        Self::new(name, field, ColumnType::Varchar(len))
    }

    pub fn timestamptz(name: &'static str, field: &'static str) -> Self {
        Self::new(name, field, ColumnType::TimestampTz)
    }

    /// Primary keys are implicitly `NOT NULL`.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn default_now(mut self) -> Self {
        self.default = ColumnDefault::Now;
        self
    }

    pub fn default_uuid_v7(mut self) -> Self {
        self.default = ColumnDefault::UuidV7;
        self
    }

    pub fn on_update_now(mut self) -> Self {
        self.on_update_now = true;
        self
    }

    pub fn has_default(&self) -> bool {
        self.default != ColumnDefault::None
    }

    fn ddl(&self) -> String {
        let mut out = format!("{} {}", self.name, self.ty.sql());
        if self.primary_key {
            out.push_str(" PRIMARY KEY");
        } else if self.not_null {
            out.push_str(" NOT NULL");
        }
        if self.unique {
            out.push_str(" UNIQUE");
        }
        if self.default == ColumnDefault::Now {
            out.push_str(" DEFAULT now()");
        }
        out
    }

    fn value_schema(&self) -> Schema {
        let schema = self.ty.schema();
        if self.not_null { schema } else { schema.nullable() }
    }
}

/// A named relation and its columns, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: &'static str, columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            name,
            columns: columns.into_iter().collect(),
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Idempotent `CREATE TABLE` statement.
    pub fn create_table_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|c| format!("    {}", c.ddl()))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("CREATE TABLE IF NOT EXISTS {} (\n{columns}\n)", self.name)
    }

    /// Rows about to be inserted: columns with a default or allowing `NULL` may be omitted.
    pub fn insert_schema(&self) -> Schema {
        Schema::object(self.columns.iter().map(|c| {
            let schema = c.value_schema();
            let schema = if c.has_default() || !c.not_null { schema.optional() } else { schema };
            (c.field, schema)
        }))
    }

    /// Rows read back: every column present.
    pub fn select_schema(&self) -> Schema {
        Schema::object(self.columns.iter().map(|c| (c.field, c.value_schema())))
    }

    /// Partial updates: every column optional.
    pub fn update_schema(&self) -> Schema {
        Schema::object(self.columns.iter().map(|c| (c.field, c.value_schema().optional())))
    }
}
