//! Ordered class lists and the resolver output descriptor.

use serde::{Deserialize, Serialize};

use crate::class_merge::merge_classes;

/// Ordered sequence of utility classes.
///
/// Order is significant: resolvers append base, size, semantic, override, and caller classes in
/// that order, and [`ClassList::merged`] lets later classes win conflicts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every whitespace-separated class in `fragment`.
    pub fn push(&mut self, fragment: &str) -> &mut Self {
        self.0
            .extend(fragment.split_whitespace().map(str::to_string));
        self
    }

    /// Appends `fragment` only when `condition` holds.
    pub fn push_if(&mut self, condition: bool, fragment: &str) -> &mut Self {
        if condition {
            self.push(fragment);
        }
        self
    }

    /// Consuming form of [`ClassList::push`].
    pub fn with(mut self, fragment: &str) -> Self {
        self.push(fragment);
        self
    }

    /// Appends caller-supplied classes last, so they win every conflict.
    pub fn with_extra(mut self, extra: Option<&str>) -> Self {
        if let Some(extra) = extra {
            self.push(extra);
        }
        self
    }

    /// Iterates classes in composition order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of classes, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no class has been pushed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `class` occurs anywhere in the list.
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|existing| existing == class)
    }

    /// Position of the last occurrence of `class`.
    pub fn position(&self, class: &str) -> Option<usize> {
        self.0.iter().rposition(|existing| existing == class)
    }

    /// Joins the classes verbatim, conflicts included.
    pub fn to_class_string(&self) -> String {
        self.0.join(" ")
    }

    /// Class attribute after last-wins conflict resolution.
    pub fn merged(&self) -> String {
        merge_classes(self.iter())
    }
}

impl From<&str> for ClassList {
    fn from(fragment: &str) -> Self {
        Self::new().with(fragment)
    }
}

/// Resolved, renderer-agnostic style for one primitive.
///
/// `kind` is the configuration handed to the underlying primitive: a badge or button kind, or
/// the element a typography block renders as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleDescriptor<K> {
    /// Underlying primitive configuration.
    pub kind: K,
    /// Classes in composition order.
    pub classes: ClassList,
}

impl<K> StyleDescriptor<K> {
    /// Pairs a primitive configuration with its classes.
    pub fn new(kind: K, classes: ClassList) -> Self {
        Self { kind, classes }
    }

    /// Appends caller-supplied classes after everything the resolver produced.
    pub fn with_extra(self, extra: Option<&str>) -> Self {
        Self {
            kind: self.kind,
            classes: self.classes.with_extra(extra),
        }
    }

    /// Final `class` attribute with conflicts resolved.
    pub fn class_attr(&self) -> String {
        self.classes.merged()
    }
}
