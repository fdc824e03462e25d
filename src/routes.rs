use std::collections::BTreeMap;

use eframe::egui::Ui;

use crate::theme::Theme;
use crate::ui::views::{HomeView, NotFoundView, PaletteView};

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A routed view filling the central panel when no task tab is selected.
pub trait View {
    fn title(&self) -> &str;
    fn ui(&mut self, ui: &mut Ui, theme: &Theme);
}

/// Builds a view the first time its route is visited.
pub type ViewFactory = fn() -> Box<dyn View>;

/// Builds the catch-all view for paths no route matches; receives the
/// requested path.
pub type FallbackFactory = fn(String) -> Box<dyn View>;

pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    factory: ViewFactory,
}

// ---------------------------------------------------------------------------
// Route table
// ---------------------------------------------------------------------------

/// Explicit path → view table. Views are instantiated on demand, at most
/// once per path, and owned by the table afterwards.
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: FallbackFactory,
    cache: BTreeMap<String, Box<dyn View>>,
}

impl RouteTable {
    pub fn new(fallback: FallbackFactory) -> Self {
        RouteTable {
            routes: Vec::new(),
            fallback,
            cache: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, path: &'static str, name: &'static str, factory: ViewFactory) {
        self.routes.push(Route { path, name, factory });
    }

    /// Resolve a path to its view, building it on first visit. Unknown
    /// paths go through the fallback factory.
    pub fn resolve(&mut self, path: &str) -> &mut dyn View {
        let factory = self.routes.iter().find(|r| r.path == path).map(|r| r.factory);
        let fallback = self.fallback;
        self.cache
            .entry(path.to_string())
            .or_insert_with(|| match factory {
                Some(build) => build(),
                None => fallback(path.to_string()),
            })
            .as_mut()
    }

    /// Registered routes in declaration order, for the navigation menu.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// The application's stock table: home, the palette view, and a catch-all.
pub fn default_table() -> RouteTable {
    let mut table = RouteTable::new(|path| Box::new(NotFoundView::new(path)));
    table.register("/", "Home", || Box::<HomeView>::default());
    table.register("/palette", "Palette", || Box::<PaletteView>::default());
    table
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Probe {
        title: String,
    }

    impl View for Probe {
        fn title(&self) -> &str {
            &self.title
        }
        fn ui(&mut self, _ui: &mut Ui, _theme: &Theme) {}
    }

    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    fn counting_factory() -> Box<dyn View> {
        BUILDS.fetch_add(1, Ordering::SeqCst);
        Box::new(Probe {
            title: "counted".to_string(),
        })
    }

    fn fallback(path: String) -> Box<dyn View> {
        Box::new(Probe {
            title: format!("missing {path}"),
        })
    }

    #[test]
    fn resolves_registered_paths() {
        let mut table = default_table();
        assert_eq!(table.resolve("/").title(), "Home");
        assert_eq!(table.resolve("/palette").title(), "Palette");
    }

    #[test]
    fn unknown_paths_fall_through_with_the_requested_path() {
        let mut table = RouteTable::new(fallback);
        assert_eq!(table.resolve("/nope").title(), "missing /nope");
    }

    #[test]
    fn factories_run_once_per_path() {
        let mut table = RouteTable::new(fallback);
        table.register("/counted", "Counted", counting_factory);

        let before = BUILDS.load(Ordering::SeqCst);
        table.resolve("/counted");
        table.resolve("/counted");
        table.resolve("/counted");
        assert_eq!(BUILDS.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn listing_preserves_declaration_order() {
        let table = default_table();
        let names: Vec<&str> = table.routes().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Home", "Palette"]);
    }
}
