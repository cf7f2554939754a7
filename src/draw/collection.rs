//! Shape collection layer: owns drawn shapes for their visual lifetime.

use super::shape::Shape;
use serde::{Deserialize, Serialize};

/// Stable identifier for a shape within a [`ShapeCollection`].
///
/// Ids are never reused, so a stale id simply stops resolving after its
/// shape is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(u64);

/// A shape together with its id and optional user-supplied title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawnShape {
    /// Collection-stable identifier
    pub id: ShapeId,
    /// The captured geometry
    pub shape: Shape,
    /// Title attached through the prompt, if any
    pub title: Option<String>,
}

/// Container for all shapes currently on the map, in draw order
/// (first = bottom layer, last = top layer).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeCollection {
    shapes: Vec<DrawnShape>,
    next_id: u64,
}

impl ShapeCollection {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shape (drawn on top of existing ones) and returns its id.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push(DrawnShape {
            id,
            shape,
            title: None,
        });
        id
    }

    /// Removes and returns the shape with `id`, if present.
    pub fn remove(&mut self, id: ShapeId) -> Option<DrawnShape> {
        let idx = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(idx))
    }

    /// Looks up a shape by id.
    pub fn get(&self, id: ShapeId) -> Option<&DrawnShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Stores `title` on the shape with `id`. Returns false when absent.
    pub fn set_title(&mut self, id: ShapeId, title: String) -> bool {
        match self.shapes.iter_mut().find(|s| s.id == id) {
            Some(drawn) => {
                drawn.title = Some(title);
                true
            }
            None => false,
        }
    }

    /// Whether a shape with `id` is present.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates shapes in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &DrawnShape> {
        self.shapes.iter()
    }

    /// Number of shapes on the map.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the collection holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;

    fn rect() -> Shape {
        Shape::Rectangle {
            a: GeoPoint::new(0.0, 0.0),
            b: GeoPoint::new(1.0, 1.0),
        }
    }

    #[test]
    fn add_assigns_unique_ids_in_draw_order() {
        let mut collection = ShapeCollection::new();
        let first = collection.add(rect());
        let second = collection.add(rect());

        assert_ne!(first, second);
        assert_eq!(collection.len(), 2);
        let ids: Vec<ShapeId> = collection.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn remove_returns_the_shape_and_keeps_other_ids_valid() {
        let mut collection = ShapeCollection::new();
        let a = collection.add(rect());
        let b = collection.add(rect());
        let c = collection.add(rect());

        let removed = collection.remove(b).expect("shape b present");
        assert_eq!(removed.id, b);
        assert!(!collection.contains(b));
        assert!(collection.contains(a));
        assert!(collection.contains(c));

        // Ids are never reused
        let d = collection.add(rect());
        assert_ne!(d, b);
    }

    #[test]
    fn set_title_only_touches_existing_shapes() {
        let mut collection = ShapeCollection::new();
        let id = collection.add(rect());

        assert!(collection.set_title(id, "Park Zone".to_string()));
        assert_eq!(
            collection.get(id).and_then(|s| s.title.as_deref()),
            Some("Park Zone")
        );

        collection.remove(id);
        assert!(!collection.set_title(id, "gone".to_string()));
    }
}
