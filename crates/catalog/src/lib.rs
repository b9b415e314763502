//! Content catalog: the fixed, ordered set of six layers the presentation walks
//! through. Storage order runs foundation to roof; renderers that stack floors
//! visually use [`Catalog::top_down`].

use std::collections::HashSet;

use shared::{
    domain::{Layer, LayerId},
    error::CatalogError,
};
use tracing::warn;

mod content;

pub use content::STANDARD_LAYERS;

pub const LAYER_COUNT: usize = 6;

static STANDARD: Catalog = Catalog {
    layers: content::STANDARD_LAYERS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    layers: [Layer; LAYER_COUNT],
}

impl Catalog {
    /// The process-wide catalog shipped with the presentation.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(layers.len());
        for layer in &layers {
            if !seen.insert(layer.id) {
                warn!(layer_id = %layer.id, "rejecting catalog with duplicate layer id");
                return Err(CatalogError::DuplicateId(layer.id.to_string()));
            }
        }

        let actual = layers.len();
        let layers: [Layer; LAYER_COUNT] = layers.try_into().map_err(|_| {
            warn!(actual, "rejecting catalog with wrong layer count");
            CatalogError::LayerCount {
                expected: LAYER_COUNT,
                actual,
            }
        })?;

        Ok(Self { layers })
    }

    pub fn all_layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_by_id(&self, id: &str) -> Result<&Layer, CatalogError> {
        self.layers
            .iter()
            .find(|layer| layer.id.as_str() == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.layer_by_id(id).is_ok()
    }

    /// 1-based position in storage order, as shown in "Layer n/6".
    pub fn position(&self, id: LayerId) -> Option<usize> {
        self.layers
            .iter()
            .position(|layer| layer.id == id)
            .map(|index| index + 1)
    }

    pub fn first(&self) -> &Layer {
        &self.layers[0]
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Roof first, foundation last.
    pub fn top_down(&self) -> impl Iterator<Item = &Layer> + '_ {
        self.layers.iter().rev()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
