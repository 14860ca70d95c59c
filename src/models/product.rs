use std::fmt;

use serde::{Deserialize, Serialize};

/// Identificador de producto tal como se persiste.
///
/// La lista guardada en localStorage puede mezclar números y strings, así que
/// se conserva la forma original. La igualdad es estricta entre tipos (`42` y
/// `"42"` son productos distintos) pero los números se comparan por valor:
/// `1.0` y `1` son el mismo producto.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(serde_json::Number),
    Text(String),
}

impl ProductId {
    /// Convierte un parámetro de ruta (`/product/:id`) en identificador.
    /// Los enteros canónicos (sin ceros a la izquierda) pasan a `Number`.
    pub fn from_route_param(param: &str) -> Self {
        let canonical = !param.is_empty()
            && param.bytes().all(|b| b.is_ascii_digit())
            && (param.len() == 1 || !param.starts_with('0'));

        if canonical {
            if let Ok(n) = param.parse::<u64>() {
                return ProductId::Number(n.into());
            }
        }
        ProductId::Text(param.to_string())
    }

    /// Valor a usar en `Route::Product { id }`. Un número entero guardado
    /// como `1.0` se escribe `1` para que la ruta vuelva al mismo id.
    pub fn to_route_param(&self) -> String {
        match self {
            ProductId::Number(n) if n.as_u64().is_none() => match n.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= MAX_SAFE_INTEGER => {
                    format!("{}", f as u64)
                }
                _ => n.to_string(),
            },
            _ => self.to_string(),
        }
    }

    /// Clave estable para listas de Yew (`42` y `"42"` no colisionan)
    pub fn list_key(&self) -> String {
        match self {
            ProductId::Number(n) => format!("n:{}", n),
            ProductId::Text(s) => format!("t:{}", s),
        }
    }
}

// Enteros que f64 representa sin pérdida
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn same_number(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

impl PartialEq for ProductId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ProductId::Number(a), ProductId::Number(b)) => same_number(a, b),
            (ProductId::Text(a), ProductId::Text(b)) => a == b,
            _ => false,
        }
    }
}

// JSON no admite NaN, así que la comparación por valor es reflexiva
impl Eq for ProductId {}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        ProductId::Number(value.into())
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        ProductId::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_route_param_becomes_number() {
        assert_eq!(ProductId::from_route_param("42"), ProductId::from(42u64));
        assert_eq!(ProductId::from_route_param("0"), ProductId::from(0u64));
    }

    #[test]
    fn non_canonical_params_stay_text() {
        assert_eq!(ProductId::from_route_param("007"), ProductId::from("007"));
        assert_eq!(ProductId::from_route_param("abc-1"), ProductId::from("abc-1"));
        assert_eq!(ProductId::from_route_param(""), ProductId::from(""));
        assert_eq!(
            ProductId::from_route_param("99999999999999999999999"),
            ProductId::from("99999999999999999999999")
        );
    }

    #[test]
    fn number_and_text_are_distinct() {
        assert_ne!(ProductId::from(42u64), ProductId::from("42"));
    }

    #[test]
    fn deserializes_mixed_json_array() {
        let ids: Vec<ProductId> = serde_json::from_str(r#"[1, "sku-9", 2.5]"#).unwrap();
        assert_eq!(ids[0], ProductId::from(1u64));
        assert_eq!(ids[1], ProductId::from("sku-9"));
        assert!(matches!(ids[2], ProductId::Number(_)));
        assert_eq!(ids[2].to_string(), "2.5");
    }

    #[test]
    fn route_param_round_trips_through_display() {
        let id = ProductId::from(42u64);
        assert_eq!(ProductId::from_route_param(&id.to_route_param()), id);
    }

    #[test]
    fn numbers_compare_by_value() {
        let float: ProductId = serde_json::from_str("1.0").unwrap();
        assert_eq!(float, ProductId::from(1u64));
        assert_eq!(float, ProductId::from_route_param("1"));
        assert_ne!(float, ProductId::from("1"));

        let negative: ProductId = serde_json::from_str("-3").unwrap();
        let negative_float: ProductId = serde_json::from_str("-3.0").unwrap();
        assert_eq!(negative, negative_float);
        assert_ne!(negative, ProductId::from(3u64));
    }

    #[test]
    fn integral_float_uses_integer_route_param() {
        let float: ProductId = serde_json::from_str("7.0").unwrap();
        assert_eq!(float.to_route_param(), "7");
        assert_eq!(ProductId::from_route_param(&float.to_route_param()), float);

        let fraction: ProductId = serde_json::from_str("2.5").unwrap();
        assert_eq!(fraction.to_route_param(), "2.5");
    }

    #[test]
    fn list_keys_distinguish_number_and_text() {
        assert_ne!(ProductId::from(42u64).list_key(), ProductId::from("42").list_key());
    }
}
