use super::attribute::ValueKind;

/// Name of the surrogate identifier column every table carries.
pub const ID_COLUMN: &str = "id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub kind: ValueKind,
    pub nullable: bool,
}

impl ColumnDef {
    pub const fn required(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
        }
    }

    pub const fn optional(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            nullable: true,
        }
    }
}

/// Static description of the table backing an entity type.
///
/// `columns` lists every column except the implicit [`ID_COLUMN`].
#[derive(Debug, PartialEq, Eq)]
pub struct EntityTable {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl EntityTable {
    pub fn column(&self, name: &str) -> Option<&'static ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}
