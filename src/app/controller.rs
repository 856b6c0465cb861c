use crate::app::error::AppError;
use crate::app::events::AppEvent;
use crate::app::lightbox::{apply_scroll_effect, LightboxController, PageScrollLock, ScrollLock};
use crate::app::state::{AppState, HEADER_SCROLL_THRESHOLD};
use crate::catalog::data::ContentCatalog;
use crate::catalog::filter::CategoryFilter;
use crate::catalog::models::{CatalogEntry, CategoryTag};
use crate::i18n::{LocaleContext, TextKey};
use crate::infra::config::AppConfig;
use crate::nav::{self, Route};
use crate::prefs::PreferencesDb;
use crate::theme::{ThemeContext, ThemeMode};

/// Single dispatcher for every user event. All transitions triggered by one
/// event are applied, side effects included, before the call returns.
pub struct ApplicationController {
    state: AppState,
    catalog: ContentCatalog,
    filter: CategoryFilter,
    lightbox: LightboxController,
    locale: LocaleContext,
    theme: ThemeContext,
    scroll: Box<dyn ScrollLock>,
    quit_requested: bool,
}

impl ApplicationController {
    pub fn new(config: &AppConfig, system_hint: Option<ThemeMode>) -> Result<Self, AppError> {
        let prefs = PreferencesDb::new(config.preferences_path.clone());
        prefs.initialize()?;

        Ok(Self::with_parts(
            ContentCatalog::built_in(),
            ThemeContext::resolve(Box::new(prefs), system_hint),
            Box::new(PageScrollLock::default()),
        ))
    }

    pub fn with_parts(
        catalog: ContentCatalog,
        theme: ThemeContext,
        scroll: Box<dyn ScrollLock>,
    ) -> Self {
        Self {
            state: AppState::default(),
            catalog,
            filter: CategoryFilter::default(),
            lightbox: LightboxController::default(),
            locale: LocaleContext::default(),
            theme,
            scroll,
            quit_requested: false,
        }
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::Navigate(route) => {
                log::debug!("navigate to {}", route.path());
                self.state.route = route;
                // Both run on every navigation, target change or not.
                self.state.menu_open = false;
                self.state.scroll_reset_pending = true;
                let effect = self.lightbox.close();
                apply_scroll_effect(effect, self.scroll.as_mut());
            }
            AppEvent::ToggleMenu => {
                self.state.menu_open = !self.state.menu_open;
            }
            AppEvent::HeaderScrolled(offset) => {
                self.state.header_condensed = offset > HEADER_SCROLL_THRESHOLD;
            }
            AppEvent::SelectCategory(tag) => {
                if self.filter.select(tag) {
                    self.state.grid_generation = self.state.grid_generation.wrapping_add(1);
                }
            }
            AppEvent::OpenLightbox { image_url, title } => {
                let effect = self.lightbox.open(image_url, title);
                apply_scroll_effect(effect, self.scroll.as_mut());
            }
            AppEvent::LightboxBackdropPressed | AppEvent::CloseLightbox => {
                let effect = self.lightbox.close();
                apply_scroll_effect(effect, self.scroll.as_mut());
            }
            AppEvent::LightboxContentPressed => {
                // Consumed here so it never reaches the backdrop handler.
            }
            AppEvent::ToggleLocale => {
                self.locale.toggle();
            }
            AppEvent::ToggleTheme => {
                self.theme.toggle();
            }
            AppEvent::Quit => {
                self.quit_requested = true;
            }
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn selected_category(&self) -> CategoryTag {
        self.filter.selected()
    }

    pub fn visible_entries(&self) -> Vec<&CatalogEntry> {
        self.filter.visible(&self.catalog)
    }

    pub fn lightbox(&self) -> &LightboxController {
        &self.lightbox
    }

    pub fn scroll_suspended(&self) -> bool {
        self.scroll.is_suspended()
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        self.locale.text(key)
    }

    pub fn locale(&self) -> &LocaleContext {
        &self.locale
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn is_nav_active(&self, route: Route) -> bool {
        nav::is_active(self.state.route, route.path())
    }

    /// Consumes the pending scroll reset scheduled by the last navigation.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.state.scroll_reset_pending)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::prefs::PrefsError;
    use crate::theme::PreferenceStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct MemoryStore {
        stored: Rc<RefCell<Option<ThemeMode>>>,
    }

    impl PreferenceStore for MemoryStore {
        fn load_theme(&self) -> Result<Option<ThemeMode>, PrefsError> {
            Ok(*self.stored.borrow())
        }

        fn save_theme(&self, mode: ThemeMode) -> Result<(), PrefsError> {
            *self.stored.borrow_mut() = Some(mode);
            Ok(())
        }
    }

    fn controller() -> ApplicationController {
        ApplicationController::with_parts(
            ContentCatalog::built_in(),
            ThemeContext::resolve(Box::<MemoryStore>::default(), None),
            Box::new(PageScrollLock::default()),
        )
    }

    #[test]
    fn navigation_closes_menu_and_schedules_scroll_reset() {
        let mut controller = controller();
        controller.dispatch(AppEvent::ToggleMenu);
        assert!(controller.state().menu_open);

        controller.dispatch(AppEvent::Navigate(Route::Portfolio));
        assert_eq!(controller.state().route, Route::Portfolio);
        assert!(!controller.state().menu_open);
        assert!(controller.take_scroll_reset());
        assert!(!controller.take_scroll_reset(), "reset should be consumed once");
    }

    #[test]
    fn navigating_to_the_current_route_still_runs_the_side_effects() {
        let mut controller = controller();
        controller.dispatch(AppEvent::Navigate(Route::Portfolio));
        controller.take_scroll_reset();

        controller.dispatch(AppEvent::ToggleMenu);
        controller.dispatch(AppEvent::Navigate(Route::Portfolio));
        assert!(!controller.state().menu_open);
        assert!(controller.take_scroll_reset());
    }

    #[test]
    fn navigation_away_closes_the_lightbox_and_restores_scroll() {
        let mut controller = controller();
        controller.dispatch(AppEvent::OpenLightbox {
            image_url: "img.png".to_string(),
            title: "Title".to_string(),
        });
        assert!(controller.lightbox().is_open());
        assert!(controller.scroll_suspended());

        controller.dispatch(AppEvent::Navigate(Route::Home));
        assert!(!controller.lightbox().is_open());
        assert!(!controller.scroll_suspended());
    }

    #[test]
    fn exactly_one_nav_entry_is_active() {
        let mut controller = controller();
        controller.dispatch(AppEvent::Navigate(Route::Services));

        let active: Vec<Route> = Route::ALL
            .into_iter()
            .filter(|route| controller.is_nav_active(*route))
            .collect();
        assert_eq!(active, vec![Route::Services]);
    }

    #[test]
    fn header_condenses_past_the_scroll_threshold() {
        let mut controller = controller();
        controller.dispatch(AppEvent::HeaderScrolled(10.0));
        assert!(!controller.state().header_condensed);
        controller.dispatch(AppEvent::HeaderScrolled(25.0));
        assert!(controller.state().header_condensed);
    }

    #[test]
    fn selecting_a_category_bumps_the_grid_generation_once() {
        let mut controller = controller();
        assert_eq!(controller.state().grid_generation, 0);

        controller.dispatch(AppEvent::SelectCategory(CategoryTag::Video));
        assert_eq!(controller.state().grid_generation, 1);
        assert_eq!(controller.visible_entries().len(), 3);

        controller.dispatch(AppEvent::SelectCategory(CategoryTag::Video));
        assert_eq!(controller.state().grid_generation, 1, "reselect should be a no-op");
        assert_eq!(controller.visible_entries().len(), 3);
    }

    #[test]
    fn backdrop_press_closes_but_content_press_does_not() {
        let mut controller = controller();
        controller.dispatch(AppEvent::OpenLightbox {
            image_url: "img.png".to_string(),
            title: "Title".to_string(),
        });

        controller.dispatch(AppEvent::LightboxContentPressed);
        assert!(controller.lightbox().is_open());
        assert!(controller.scroll_suspended());

        controller.dispatch(AppEvent::LightboxBackdropPressed);
        assert!(!controller.lightbox().is_open());
        assert!(!controller.scroll_suspended());
    }

    #[test]
    fn replacing_the_open_image_keeps_scroll_suspended_throughout() {
        let mut controller = controller();
        controller.dispatch(AppEvent::OpenLightbox {
            image_url: "img.png".to_string(),
            title: "Title".to_string(),
        });
        controller.dispatch(AppEvent::OpenLightbox {
            image_url: "img2.png".to_string(),
            title: "Title2".to_string(),
        });
        assert!(controller.scroll_suspended());
        assert_eq!(
            controller.lightbox().focused(),
            Some(("img2.png", "Title2"))
        );

        controller.dispatch(AppEvent::CloseLightbox);
        assert!(!controller.lightbox().is_open());
        assert!(!controller.scroll_suspended());
    }

    #[test]
    fn locale_toggle_is_observed_through_the_controller() {
        let mut controller = controller();
        assert_eq!(controller.text(TextKey::NavHome), "Home");

        controller.dispatch(AppEvent::ToggleLocale);
        assert_eq!(controller.locale().locale(), Locale::Id);
        assert_eq!(controller.text(TextKey::NavHome), "Beranda");
    }

    #[test]
    fn theme_toggle_writes_through_the_injected_store() {
        let store = MemoryStore::default();
        let stored = Rc::clone(&store.stored);
        let mut controller = ApplicationController::with_parts(
            ContentCatalog::built_in(),
            ThemeContext::resolve(Box::new(store), None),
            Box::new(PageScrollLock::default()),
        );

        controller.dispatch(AppEvent::ToggleTheme);
        assert_eq!(controller.theme_mode(), ThemeMode::Dark);
        assert_eq!(*stored.borrow(), Some(ThemeMode::Dark));
    }

    #[test]
    fn quit_event_raises_the_quit_flag() {
        let mut controller = controller();
        assert!(!controller.quit_requested());
        controller.dispatch(AppEvent::Quit);
        assert!(controller.quit_requested());
    }
}
