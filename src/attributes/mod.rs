//! Named text attributes backed by typed accessors.
//!
//! An [`AttributeRegistry`] holds [`AttributeGroup`]s; each group holds
//! [`Attribute`]s addressed as `group/name`.  A show accessor renders a
//! typed value as decimal text plus a newline into a fixed-size
//! [`ShowBuf`]; a store accessor receives the raw text and validates it.
//!
//! The registry knows nothing about where requests come from, so the same
//! groups can sit behind a console, a socket, or a virtual filesystem.

pub mod bindings;
pub mod parse;

use core::fmt::{self, Write as _};

use crate::error::{AttrError, ValidationError};

/// Capacity of a rendered attribute value.
pub const SHOW_BUF_LEN: usize = 32;

/// Rendered attribute text.
pub type ShowBuf = heapless::String<SHOW_BUF_LEN>;

type ShowFn = Box<dyn Fn(&mut ShowBuf) -> fmt::Result + Send + Sync>;
type StoreFn = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrMode {
    ReadOnly,
    ReadWrite,
}

impl AttrMode {
    /// Octal permission bits a sysfs-style frontend would expose.
    pub const fn permissions(self) -> u16 {
        match self {
            Self::ReadOnly => 0o444,
            Self::ReadWrite => 0o644,
        }
    }
}

pub struct Attribute {
    name: &'static str,
    show: ShowFn,
    store: Option<StoreFn>,
}

impl Attribute {
    /// Attribute whose value is produced by `get` and rendered with
    /// `Display`.
    pub fn read_only<T, F>(name: &'static str, get: F) -> Self
    where
        T: fmt::Display,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            name,
            show: Box::new(move |buf: &mut ShowBuf| writeln!(buf, "{}", get())),
            store: None,
        }
    }

    /// Read-only attribute plus a store accessor that receives raw text.
    pub fn read_write<T, F, S>(name: &'static str, get: F, set: S) -> Self
    where
        T: fmt::Display,
        F: Fn() -> T + Send + Sync + 'static,
        S: Fn(&str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        Self {
            store: Some(Box::new(set) as StoreFn),
            ..Self::read_only(name, get)
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mode(&self) -> AttrMode {
        if self.store.is_some() {
            AttrMode::ReadWrite
        } else {
            AttrMode::ReadOnly
        }
    }

    pub fn show(&self) -> Result<ShowBuf, AttrError> {
        let mut buf = ShowBuf::new();
        (self.show)(&mut buf).map_err(|_| AttrError::Overflow)?;
        Ok(buf)
    }

    /// Returns the number of bytes consumed (the whole input) on success.
    pub fn store(&self, text: &str) -> Result<usize, AttrError> {
        let store = self.store.as_ref().ok_or(AttrError::ReadOnly)?;
        store(text)?;
        Ok(text.len())
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("mode", &self.mode())
            .finish()
    }
}

#[derive(Debug)]
pub struct AttributeGroup {
    name: &'static str,
    attrs: Vec<Attribute>,
}

impl AttributeGroup {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, attr: Attribute) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attrs
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attrs.iter().find(|a| a.name == name)
    }
}

/// Listing entry returned by [`AttributeRegistry::entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrEntry {
    pub path: String,
    pub mode: AttrMode,
}

#[derive(Debug, Default)]
pub struct AttributeRegistry {
    groups: Vec<AttributeGroup>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_group(&mut self, group: AttributeGroup) -> Result<(), AttrError> {
        if self.groups.iter().any(|g| g.name == group.name) {
            return Err(AttrError::GroupExists(group.name));
        }
        self.groups.push(group);
        Ok(())
    }

    /// Returns `true` if a group was removed.
    pub fn remove_group(&mut self, name: &str) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g.name != name);
        self.groups.len() != before
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g.name == name)
    }

    pub fn lookup(&self, path: &str) -> Option<&Attribute> {
        let (group, attr) = path.trim_matches('/').split_once('/')?;
        self.groups.iter().find(|g| g.name == group)?.get(attr)
    }

    pub fn show(&self, path: &str) -> Result<ShowBuf, AttrError> {
        self.lookup(path).ok_or(AttrError::NotFound)?.show()
    }

    pub fn store(&self, path: &str, text: &str) -> Result<usize, AttrError> {
        self.lookup(path).ok_or(AttrError::NotFound)?.store(text)
    }

    /// Every registered attribute, in registration order.
    pub fn entries(&self) -> Vec<AttrEntry> {
        self.groups
            .iter()
            .flat_map(|g| {
                g.attrs.iter().map(move |a| AttrEntry {
                    path: format!("{}/{}", g.name, a.name),
                    mode: a.mode(),
                })
            })
            .collect()
    }
}
