//! Selektierbare Szenen-Elemente und unveränderliche Selektions-Snapshots.

use std::fmt;
use std::sync::Arc;

/// Opaker Bezeichner eines selektierbaren Szenen-Objekts (z.B. `pCube1.vtx[0]`).
///
/// Der Kern inspiziert Elemente nie; er vergleicht sie nur und zeigt sie an.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element(Arc<str>);

impl Element {
    /// Erstellt ein Element aus einem Host-Bezeichner.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Gibt den Host-Bezeichner zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Element {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Element {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

/// Geordnete, unveränderliche Folge von Elementen (Duplikate erlaubt).
///
/// Arc-basiert: Klonen ist O(1), ein gespeicherter Snapshot wird nie verändert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    elements: Arc<[Element]>,
}

impl Snapshot {
    /// Erstellt einen Snapshot in exakt der übergebenen Reihenfolge.
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements: elements.into(),
        }
    }

    /// Alle Elemente in Capture-Reihenfolge.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Erstes Element (Beginn der Range im Nickname).
    pub fn first(&self) -> Option<&Element> {
        self.elements.first()
    }

    /// Letztes Element (Ende der Range im Nickname).
    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// Anzahl der Elemente inkl. Duplikate.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Gibt `true` zurück, wenn der Snapshot leer ist.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iteriert über die Elemente in Capture-Reihenfolge.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }
}

impl<E: Into<Element>> FromIterator<E> for Snapshot {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
