//! Testing utilities for browsekit
//!
//! Fixture item and definition types plus a ready-made set of projections.
//!
//! Only available when compiled with `cfg(test)`.

use crate::browse::Projections;
use std::fmt;

/// Kind of a fixture definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefKind {
    Weapon,
    Armor,
    Spell,
    Item,
}

impl fmt::Display for DefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Weapon => "Weapon",
            Self::Armor => "Armor",
            Self::Spell => "Spell",
            Self::Item => "Item",
        };
        f.write_str(name)
    }
}

/// Fixture catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Def {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub kind: DefKind,
}

impl Def {
    /// Create a definition without a description
    pub fn new(id: u32, name: &str, kind: DefKind) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: String::new(),
            kind,
        }
    }

    /// Attach a description
    #[must_use]
    pub fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// Fixture owned instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub uid: u32,
    pub def: Def,
}

impl Item {
    /// Create an instance of `def`
    pub const fn new(uid: u32, def: Def) -> Self {
        Self { uid, def }
    }
}

/// Projections matching name and description, sorted by name, with the
/// fixture kind as kind name
pub fn projections() -> Projections<'static, Item, Def> {
    Projections::new(|item: &Item| item.def.clone(), |def: &Def| def.name.clone())
        .with_search_key(|def: &Def| format!("{} {}", def.name, def.description))
        .with_kind(|def: &Def| def.kind.to_string())
}

/// A small mixed catalog
pub fn catalog() -> Vec<Def> {
    vec![
        Def::new(1, "Longsword", DefKind::Weapon).describe("versatile martial blade"),
        Def::new(2, "Dagger", DefKind::Weapon).describe("small blade"),
        Def::new(3, "Chain Shirt", DefKind::Armor).describe("light metal armor"),
        Def::new(4, "Bless", DefKind::Spell).describe("bolsters allies"),
        Def::new(5, "Rope", DefKind::Item).describe("fifty feet of hemp"),
    ]
}
