//! Flat-file entity definitions.
//!
//! A definition file is a sequence of `NAME value` lines. Bare values
//! go through [`Value::parse`], so `16` loads as an integer and
//! `1,3` as a list, while quoted values stay text verbatim even when
//! they look numeric. `NAME` and `DESCRIPTION` set the entity's
//! identity instead of attributes, a lone `OBJECT` starts a new owned
//! prop that soaks up the following lines, and `#` comments out the
//! rest of a line.

use std::fs;
use std::path::Path;

use fracas_foundation::{Error, Result, Value};

use crate::entity::{Entity, EntityId, Kind};
use crate::world::World;

/// One lexed value field.
#[derive(Debug, PartialEq, Eq)]
enum Field<'a> {
    /// Unquoted text, subject to value parsing.
    Bare(&'a str),
    /// Quoted text, kept verbatim.
    Quoted(&'a str),
}

impl World {
    /// Reads a definition file into `root`.
    ///
    /// Attribute lines apply to `root` until an `OBJECT` line opens an
    /// owned prop; later lines then apply to that prop. Lines with no
    /// value are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DefinitionIo`] when the file cannot be read.
    pub fn load(&mut self, root: EntityId, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| Error::definition_io(path, source))?;

        let mut current = root;
        for line in text.lines() {
            let Some((name, field)) = lex(line) else {
                continue;
            };
            match (name, field) {
                ("OBJECT", _) => {
                    let object = self.spawn(Entity::new("actor", Kind::Prop));
                    self.add_object(root, object);
                    current = object;
                }
                ("NAME", Some(field)) => {
                    self.entity_mut(current).name = field.text().to_owned();
                }
                ("DESCRIPTION", Some(field)) => {
                    self.entity_mut(current).description = Some(field.text().to_owned());
                }
                (_, Some(Field::Quoted(text))) => {
                    self.set_attr(current, name, text);
                }
                (_, Some(Field::Bare(text))) => {
                    self.set_attr(current, name, Value::parse(text));
                }
                (_, None) => {}
            }
        }
        Ok(())
    }
}

impl Field<'_> {
    fn text(&self) -> &str {
        match self {
            Self::Bare(text) | Self::Quoted(text) => text,
        }
    }
}

/// Splits one line into an attribute name and an optional value.
///
/// Blank lines and lines opening with `#` lex to nothing.
fn lex(line: &str) -> Option<(&str, Option<Field<'_>>)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (trimmed, ""),
    };

    let mut chars = rest.chars();
    let field = match chars.next() {
        None | Some('#') => None,
        Some(quote @ ('"' | '\'')) => {
            let body = chars.as_str();
            let end = body.find(quote).unwrap_or(body.len());
            Some(Field::Quoted(&body[..end]))
        }
        Some(_) => Some(Field::Bare(rest)),
    };
    Some((name, field))
}
