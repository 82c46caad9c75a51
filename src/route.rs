//! Navigation routes

/// Screens reachable by path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Recommendations,
    NotFound,
}

impl Route {
    /// Routes listed in the navigation bar
    pub const NAVIGABLE: [Route; 2] = [Route::Dashboard, Route::Recommendations];

    /// Match a location path; trailing slashes are ignored
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Route::Dashboard,
            "/recommendations" => Route::Recommendations,
            _ => Route::NotFound,
        }
    }

    /// Router pattern for this screen
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Recommendations => "/recommendations",
            Route::NotFound => "/*any",
        }
    }

    /// Navigation bar label
    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Recommendations => "Recomendaciones",
            Route::NotFound => "No encontrado",
        }
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard de Marketplace",
            Route::Recommendations => "Recomendaciones de Productos",
            Route::NotFound => "Página no encontrada",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
        assert_eq!(Route::from_path("/recommendations"), Route::Recommendations);
        assert_eq!(Route::from_path("/recommendations/"), Route::Recommendations);
        assert_eq!(Route::from_path("/recommendations?id=4"), Route::Recommendations);
        assert_eq!(Route::from_path("/settings"), Route::NotFound);
    }

    #[test]
    fn test_navigable_paths_round_trip() {
        for route in Route::NAVIGABLE {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
