//! A flat list of shapes with a linear nearest-hit search.

use crate::{Intersection, Shape};
use nray_math::Ray;

/// Collection of shapes sharing one vector space.
pub struct Scene<const N: usize> {
    shapes: Vec<Box<dyn Shape<N>>>,
}

impl<const N: usize> Scene<N> {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Add a shape to the scene.
    pub fn add<S: Shape<N> + 'static>(&mut self, shape: S) {
        self.shapes.push(Box::new(shape));
    }

    /// Add an already boxed shape to the scene.
    pub fn add_boxed(&mut self, shape: Box<dyn Shape<N>>) {
        self.shapes.push(shape);
    }

    /// Builder-style [`Scene::add`].
    pub fn with<S: Shape<N> + 'static>(mut self, shape: S) -> Self {
        self.add(shape);
        self
    }

    /// Remove all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterate over the shapes in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &dyn Shape<N>> + '_ {
        self.shapes.iter().map(|shape| shape.as_ref())
    }

    /// Nearest hit along `ray` beyond `near_clipping`.
    ///
    /// Ties keep the shape that was added first.
    pub fn first_intersection(
        &self,
        ray: &Ray<N>,
        near_clipping: f64,
    ) -> Option<Intersection<'_, N>> {
        let mut nearest: Option<Intersection<'_, N>> = None;

        for shape in self.shapes() {
            let Some(distance) = shape.first_intersection(ray, near_clipping) else {
                continue;
            };
            if distance <= near_clipping {
                continue;
            }
            if nearest.map_or(true, |hit| distance < hit.distance) {
                nearest = Some(Intersection::new(distance, shape));
            }
        }

        nearest
    }
}

impl<const N: usize> Default for Scene<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FromIterator<Box<dyn Shape<N>>> for Scene<N> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Shape<N>>>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}
