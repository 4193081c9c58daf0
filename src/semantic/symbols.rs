//! Symbol and function tables
//!
//! [`SymbolTable`] keeps one row per `(name, scope)` pair in first-insertion
//! order. Recording an existing pair replaces its type in place rather than
//! appending a second row. Lookups go through an `FxHashMap` index into the
//! row vector.

use crate::parser::ast::TypeTag;
use rustc_hash::FxHashMap;

/// Scope name used outside any function body.
pub const GLOBAL_SCOPE: &str = "global";

/// One variable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub type_tag: TypeTag,
    pub scope: String,
}

/// One function row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: String,
    pub return_type: TypeTag,
}

/// Scope-aware variable inventory
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    rows: Vec<Symbol>,
    index: FxHashMap<(String, String), usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row, or update the type of the existing `(name, scope)` row.
    pub fn record(&mut self, name: &str, type_tag: TypeTag, scope: &str) {
        let key = (name.to_string(), scope.to_string());
        if let Some(&slot) = self.index.get(&key) {
            log::trace!("update {} in {}: {} -> {}", name, scope, self.rows[slot].type_tag, type_tag);
            self.rows[slot].type_tag = type_tag;
            return;
        }

        log::trace!("record {} in {} as {}", name, scope, type_tag);
        self.index.insert(key, self.rows.len());
        self.rows.push(Symbol {
            name: name.to_string(),
            type_tag,
            scope: scope.to_string(),
        });
    }

    pub fn lookup(&self, name: &str, scope: &str) -> Option<&Symbol> {
        self.index
            .get(&(name.to_string(), scope.to_string()))
            .map(|&slot| &self.rows[slot])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Function inventory, one row per definition in visit order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionTable {
    rows: Vec<FunctionInfo>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, return_type: TypeTag) {
        self.rows.push(FunctionInfo {
            name: name.to_string(),
            return_type,
        });
    }

    pub fn get(&self, name: &str) -> Option<&FunctionInfo> {
        self.rows.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FunctionInfo> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a FunctionTable {
    type Item = &'a FunctionInfo;
    type IntoIter = std::slice::Iter<'a, FunctionInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_different_scopes() {
        let mut table = SymbolTable::new();
        table.record("x", TypeTag::Int, "f");
        table.record("x", TypeTag::Int, "g");

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("x", "f").unwrap().scope, "f");
        assert_eq!(table.lookup("x", "g").unwrap().scope, "g");
        assert!(table.lookup("x", GLOBAL_SCOPE).is_none());
    }

    #[test]
    fn test_redeclaration_updates_in_place() {
        let mut table = SymbolTable::new();
        table.record("x", TypeTag::Int, "main");
        table.record("y", TypeTag::Int, "main");
        table.record("x", TypeTag::String, "main");

        assert_eq!(table.len(), 2);
        let rows: Vec<_> = table.iter().map(|s| (s.name.as_str(), s.type_tag)).collect();
        assert_eq!(rows, vec![("x", TypeTag::String), ("y", TypeTag::Int)]);
    }

    #[test]
    fn test_function_table_keeps_every_row() {
        let mut functions = FunctionTable::new();
        functions.push("main", TypeTag::Int);
        functions.push("main", TypeTag::Void);

        assert_eq!(functions.len(), 2);
        assert_eq!(functions.get("main").unwrap().return_type, TypeTag::Int);
    }
}
