// ============================================================================
// FAVORITES - Lista ordenada de productos favoritos (sin duplicados)
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use crate::models::product::ProductId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Favorites(Vec<ProductId>);

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.0.iter().any(|fav| fav == id)
    }

    /// Quita `id` si ya estaba, si no lo añade al final.
    /// Devuelve `true` si el producto queda como favorito.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        match self.0.iter().position(|fav| *fav == id) {
            Some(index) => {
                self.0.remove(index);
                false
            }
            None => {
                self.0.push(id);
                true
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Conserva la primera aparición de cada id
impl FromIterator<ProductId> for Favorites {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        let mut favorites = Favorites::new();
        for id in iter {
            if !favorites.contains(&id) {
                favorites.0.push(id);
            }
        }
        favorites
    }
}

// El contenedor tiene que ser un array; dentro, los elementos que no son
// número ni string se descartan sin perder el resto
impl<'de> Deserialize<'de> for Favorites {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
        Ok(values
            .into_iter()
            .filter_map(|value| serde_json::from_value::<ProductId>(value).ok())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(favorites: &Favorites) -> Vec<String> {
        favorites.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle(ProductId::from(1u64)));
        assert!(favorites.toggle(ProductId::from("b")));
        assert_eq!(ids(&favorites), vec!["1", "b"]);

        assert!(!favorites.toggle(ProductId::from(1u64)));
        assert_eq!(ids(&favorites), vec!["b"]);
        assert!(!favorites.contains(&ProductId::from(1u64)));
    }

    #[test]
    fn re_added_id_moves_to_the_end() {
        let mut favorites: Favorites = [1u64, 2, 3].into_iter().map(ProductId::from).collect();

        favorites.toggle(ProductId::from(1u64));
        favorites.toggle(ProductId::from(1u64));

        assert!(favorites.contains(&ProductId::from(1u64)));
        assert_eq!(ids(&favorites), vec!["2", "3", "1"]);
    }

    #[test]
    fn deserializing_drops_duplicates() {
        let favorites: Favorites = serde_json::from_str(r#"[3, "x", 3, "x", 4]"#).unwrap();
        assert_eq!(ids(&favorites), vec!["3", "x", "4"]);
    }

    #[test]
    fn invalid_elements_are_skipped() {
        let favorites: Favorites = serde_json::from_str(r#"[1, "a", null, {"id": 2}, [3], true]"#).unwrap();
        assert_eq!(ids(&favorites), vec!["1", "a"]);
    }

    #[test]
    fn non_array_is_rejected() {
        assert!(serde_json::from_str::<Favorites>(r#"{"a": 1}"#).is_err());
        assert!(serde_json::from_str::<Favorites>("null").is_err());
    }

    #[test]
    fn numerically_equal_ids_are_collapsed() {
        let favorites: Favorites = serde_json::from_str("[1, 1.0, 2]").unwrap();
        assert_eq!(ids(&favorites), vec!["1", "2"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let favorites: Favorites = vec![ProductId::from(7u64), ProductId::from("sku")]
            .into_iter()
            .collect();
        assert_eq!(serde_json::to_string(&favorites).unwrap(), r#"[7,"sku"]"#);
    }
}
