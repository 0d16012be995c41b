//! Defines the core rendering trait and context for converting AST to text.

use crate::{ast::common::TableRef, dialect::Dialect};

pub mod expr;
pub mod merge;

/// A trait for any AST node that can be rendered into statement text.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the statement text and provides access to the dialect
/// for syntax-specific details. Rendering is the only place identifiers
/// are quoted, so quoting concerns never leak into clause construction.
pub struct Renderer<'a> {
    pub sql: String,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the final statement text.
    pub fn finish(self) -> String {
        self.sql
    }

    pub fn render_table_ref(&mut self, table: &TableRef) {
        if let Some(catalog) = &table.catalog {
            self.sql.push_str(&self.dialect.quote_identifier(catalog));
            self.sql.push('.');
        }
        if let Some(schema) = &table.schema {
            self.sql.push_str(&self.dialect.quote_identifier(schema));
            self.sql.push('.');
        }
        self.sql.push_str(&self.dialect.quote_identifier(&table.name));
    }
}
