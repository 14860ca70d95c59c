// ============================================================================
// SCROLL - Comportamiento de scroll al navegar
// ============================================================================

use crate::router::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

impl ScrollPosition {
    pub const TOP: ScrollPosition = ScrollPosition { left: 0.0, top: 0.0 };
}

/// Posición a la que se lleva la ventana tras navegar de `from` a `to`.
/// Siempre arriba, incluso si había una posición guardada (back/forward).
pub fn scroll_behavior(
    _from: Option<&Route>,
    _to: &Route,
    _saved: Option<ScrollPosition>,
) -> ScrollPosition {
    ScrollPosition::TOP
}

/// Aplica la posición a la ventana actual
pub fn apply_scroll(position: ScrollPosition) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(position.left, position.top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::routes::ROUTE_TABLE;

    #[test]
    fn navigation_between_any_routes_scrolls_to_top() {
        let routes: Vec<Route> = ROUTE_TABLE
            .iter()
            .map(|entry| Route::resolve(entry.path))
            .chain(std::iter::once(Route::NotFound))
            .collect();

        for from in &routes {
            for to in &routes {
                assert_eq!(scroll_behavior(Some(from), to, None), ScrollPosition::TOP);
            }
        }
    }

    #[test]
    fn saved_position_is_ignored() {
        let saved = ScrollPosition { left: 10.0, top: 850.0 };
        let position = scroll_behavior(
            Some(&Route::Favorites),
            &Route::Product { id: "42".to_string() },
            Some(saved),
        );
        assert_eq!(position.top, 0.0);
        assert_eq!(position.left, 0.0);
    }

    #[test]
    fn first_navigation_scrolls_to_top() {
        assert_eq!(scroll_behavior(None, &Route::Home, None), ScrollPosition::TOP);
    }
}
