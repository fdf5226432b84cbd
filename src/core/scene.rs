//! In-Memory-Szene als Host für Demo-Binary und Tests.

use super::{Element, ReapplyMode, SelectionSink, SelectionSource, Snapshot};
use std::collections::HashSet;

/// Einfache Szene: fester Katalog selektierbarer Elemente plus Live-Selektion.
///
/// Die Live-Selektion hält die Klick-Reihenfolge. `Replace` übernimmt den
/// Snapshot exakt (inkl. Reihenfolge und Duplikaten).
#[derive(Debug, Clone, Default)]
pub struct InMemoryScene {
    catalog: Vec<Element>,
    selection: Vec<Element>,
}

impl InMemoryScene {
    /// Erstellt eine Szene mit den angegebenen Elementen und leerer Selektion.
    pub fn new<I, E>(catalog: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Self {
            catalog: catalog.into_iter().map(Into::into).collect(),
            selection: Vec::new(),
        }
    }

    /// Demo-Szene mit Würfel-Vertices, Kugel-Faces und Objekten.
    pub fn demo() -> Self {
        let vertices = (0..8).map(|i| format!("pCube1.vtx[{i}]"));
        let faces = (0..6).map(|i| format!("pSphere1.f[{i}]"));
        let objects = ["pCube1", "pSphere1", "pCylinder1", "camera1"]
            .into_iter()
            .map(String::from);
        Self::new(vertices.chain(faces).chain(objects))
    }

    /// Alle selektierbaren Elemente.
    pub fn catalog(&self) -> &[Element] {
        &self.catalog
    }

    /// Aktuelle Live-Selektion in Reihenfolge.
    pub fn selection(&self) -> &[Element] {
        &self.selection
    }

    /// Prüft, ob ein Element selektiert ist.
    pub fn is_selected(&self, element: &Element) -> bool {
        self.selection.contains(element)
    }

    /// Schaltet ein Element um (Ctrl-Klick): anhängen oder entfernen.
    pub fn toggle(&mut self, element: Element) {
        if let Some(pos) = self.selection.iter().position(|e| *e == element) {
            self.selection.remove(pos);
        } else {
            self.selection.push(element);
        }
    }

    /// Ersetzt die Selektion durch genau ein Element (Einfach-Klick).
    pub fn select_only(&mut self, element: Element) {
        self.selection.clear();
        self.selection.push(element);
    }

    /// Setzt die Selektion direkt (Reihenfolge wie übergeben).
    pub fn set_selection<I, E>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.selection = elements.into_iter().map(Into::into).collect();
    }

    /// Hebt die Selektion auf.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

impl SelectionSource for InMemoryScene {
    fn current_selection(&self) -> Vec<Element> {
        self.selection.clone()
    }
}

impl SelectionSink for InMemoryScene {
    fn apply_selection(&mut self, snapshot: &Snapshot, mode: ReapplyMode) {
        match mode {
            ReapplyMode::Replace => {
                self.selection = snapshot.elements().to_vec();
            }
            ReapplyMode::Add => {
                let mut present: HashSet<Element> = self.selection.iter().cloned().collect();
                for element in snapshot {
                    if present.insert(element.clone()) {
                        self.selection.push(element.clone());
                    }
                }
            }
            ReapplyMode::Remove => {
                let removed: HashSet<&Element> = snapshot.iter().collect();
                self.selection.retain(|e| !removed.contains(e));
            }
        }
        log::debug!(
            "Szenen-Selektion ({:?}): {} Elemente",
            mode,
            self.selection.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(scene: &InMemoryScene) -> Vec<&str> {
        scene.selection().iter().map(Element::as_str).collect()
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut scene = InMemoryScene::new(["a", "b"]);
        scene.toggle(Element::new("b"));
        scene.toggle(Element::new("a"));
        assert_eq!(ids(&scene), vec!["b", "a"]);

        scene.toggle(Element::new("b"));
        assert_eq!(ids(&scene), vec!["a"]);
    }

    #[test]
    fn replace_takes_snapshot_exactly() {
        let mut scene = InMemoryScene::default();
        scene.set_selection(["z"]);

        let snapshot: Snapshot = ["b", "a", "b"].into_iter().collect();
        scene.apply_selection(&snapshot, ReapplyMode::Replace);

        assert_eq!(ids(&scene), vec!["b", "a", "b"]);
    }

    #[test]
    fn add_unions_without_duplicating_present_elements() {
        let mut scene = InMemoryScene::default();
        scene.set_selection(["a", "b"]);

        let snapshot: Snapshot = ["b", "c", "c"].into_iter().collect();
        scene.apply_selection(&snapshot, ReapplyMode::Add);

        assert_eq!(ids(&scene), vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_subtracts_only_snapshot_elements() {
        let mut scene = InMemoryScene::default();
        scene.set_selection(["a", "b", "c"]);

        let snapshot: Snapshot = ["b", "x"].into_iter().collect();
        scene.apply_selection(&snapshot, ReapplyMode::Remove);

        assert_eq!(ids(&scene), vec!["a", "c"]);
    }

    #[test]
    fn demo_scene_has_selectable_vertices() {
        let scene = InMemoryScene::demo();
        assert!(scene.catalog().contains(&Element::new("pCube1.vtx[0]")));
        assert!(scene.selection().is_empty());
    }
}
