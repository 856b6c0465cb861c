use crate::catalog::models::CategoryTag;
use crate::nav::Route;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Navigate(Route),
    ToggleMenu,
    HeaderScrolled(f32),
    SelectCategory(CategoryTag),
    OpenLightbox { image_url: String, title: String },
    LightboxBackdropPressed,
    LightboxContentPressed,
    CloseLightbox,
    ToggleLocale,
    ToggleTheme,
    Quit,
}
