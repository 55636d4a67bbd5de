use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};
use web_sys::StorageEvent;
use yew::prelude::*;
use yew_hooks::{use_event_with_window, use_mount};

use crate::config::{DARK_CLASS, THEME_STORAGE_KEY};
use crate::dom;
use crate::error::{describe, Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Resolves a raw stored value. Missing or unrecognised values mean light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                debug!("{}; using light theme", e);
                Theme::Light
            }
            None => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads the persisted preference. `None` when nothing valid is stored or
/// storage cannot be reached.
pub fn load_preference() -> Option<Theme> {
    let storage = match dom::local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            debug!("{}; theme preference not read", e);
            return None;
        }
    };
    let raw = storage.get_item(THEME_STORAGE_KEY).ok().flatten()?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(e) => {
            debug!("{}; ignoring stored preference", e);
            None
        }
    }
}

pub fn store_preference(theme: Theme) -> Result<()> {
    dom::local_storage()?
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|e| Error::StorageWrite(describe(&e)))
}

/// Puts the dark class on `<html>` exactly when `theme` is dark.
pub fn apply_to_document(theme: Theme) -> Result<()> {
    dom::set_root_class(DARK_CLASS, theme.is_dark())
}

fn apply_or_warn(theme: Theme) {
    if let Err(e) = apply_to_document(theme) {
        warn!("Could not apply {} theme: {}", theme, e);
    }
}

/// What [`ThemeProvider`] hands to its descendants through context.
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    theme: Theme,
    set: Callback<Theme>,
}

impl ThemeHandle {
    pub fn get(&self) -> Theme {
        self.theme
    }

    /// Persists `theme`, applies it to the document and re-renders every
    /// consumer.
    pub fn set(&self, theme: Theme) {
        self.set.emit(theme);
    }

    pub fn toggle(&self) {
        self.set(self.theme.toggled());
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the theme for everything below it. Renders nothing until the stored
/// preference has been read so the first visible paint already has the
/// right colours.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| None::<Theme>);

    {
        let theme = theme.clone();
        use_mount(move || {
            let resolved = load_preference().unwrap_or_default();
            debug!("Initial theme: {}", resolved);
            apply_or_warn(resolved);
            theme.set(Some(resolved));
        });
    }

    // Another tab changed (or cleared) the preference.
    {
        let theme = theme.clone();
        use_event_with_window("storage", move |e: StorageEvent| {
            if e.key().map_or(false, |key| key != THEME_STORAGE_KEY) {
                return;
            }
            let next = Theme::from_stored(e.new_value().as_deref());
            info!("Theme changed in another tab: {}", next);
            apply_or_warn(next);
            theme.set(Some(next));
        });
    }

    let set = {
        let setter = theme.setter();
        use_callback(
            move |next: Theme, _| {
                info!("Switching to {} theme", next);
                if let Err(e) = store_preference(next) {
                    warn!("Theme preference not saved: {}", e);
                }
                apply_or_warn(next);
                setter.set(Some(next));
            },
            (),
        )
    };

    let Some(current) = *theme else {
        return html! {};
    };

    html! {
        <ContextProvider<ThemeHandle> context={ThemeHandle { theme: current, set }}>
            { for props.children.iter() }
        </ContextProvider<ThemeHandle>>
    }
}

static MISSING_PROVIDER_REPORTED: AtomicBool = AtomicBool::new(false);

/// Logs the first time a consumer is rendered without a provider above it.
/// Returns whether this call did the logging.
fn report_missing_provider() -> bool {
    let first = !MISSING_PROVIDER_REPORTED.swap(true, Ordering::Relaxed);
    if first {
        warn!("use_theme called outside ThemeProvider; using a fixed light theme");
    }
    first
}

/// The current theme handle. Outside a [`ThemeProvider`] this is a fixed
/// light theme whose setter does nothing.
#[hook]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>().unwrap_or_else(|| {
        report_missing_provider();
        ThemeHandle {
            theme: Theme::Light,
            set: Callback::noop(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_resolve_to_their_theme() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn unset_or_garbage_falls_back_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("\"dark\"")), Theme::Light);
    }

    #[test]
    fn parsing_rejects_unknown_values() {
        assert_eq!("sepia".parse::<Theme>(), Err(Error::UnknownTheme("sepia".to_string())));
    }

    #[test]
    fn toggling_twice_restores_theme_and_class() {
        for start in [Theme::Light, Theme::Dark] {
            let back = start.toggled().toggled();
            assert_eq!(back, start);
            assert_eq!(back.is_dark(), start.is_dark());
            assert_ne!(start.toggled().is_dark(), start.is_dark());
        }
    }

    #[test]
    fn missing_provider_is_reported_once() {
        report_missing_provider();
        assert!(!report_missing_provider());
        assert!(!report_missing_provider());
    }

    #[test]
    fn stored_form_round_trips_through_display() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::StorageEventInit;
    use yew::AppHandle;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Each render of a consumer: the handle it saw and whether `<html>`
    /// carried the dark class at that moment.
    type Renders = Rc<RefCell<Vec<(ThemeHandle, bool)>>>;

    #[derive(Properties, PartialEq)]
    struct ReaderProps {
        on_render: Callback<(ThemeHandle, bool)>,
    }

    #[function_component(ThemeReader)]
    fn theme_reader(props: &ReaderProps) -> Html {
        let handle = use_theme();
        let dark_class = dom::root_has_class(DARK_CLASS).unwrap();
        props.on_render.emit((handle.clone(), dark_class));
        html! { <span class="theme-reader">{ handle.get().as_str() }</span> }
    }

    #[function_component(Harness)]
    fn harness(props: &ReaderProps) -> Html {
        html! {
            <ThemeProvider>
                <ThemeReader on_render={props.on_render.clone()} />
            </ThemeProvider>
        }
    }

    fn mount_provider() -> (web_sys::Element, Renders, AppHandle<Harness>) {
        let renders = Renders::default();
        let on_render = {
            let renders = renders.clone();
            Callback::from(move |seen| renders.borrow_mut().push(seen))
        };
        let host = dom::mount_point();
        let app = yew::Renderer::<Harness>::with_root_and_props(host.clone(), ReaderProps { on_render })
            .render();
        (host, renders, app)
    }

    fn stored(value: Option<&str>) {
        let storage = dom::local_storage().unwrap();
        match value {
            Some(value) => storage.set_item(THEME_STORAGE_KEY, value).unwrap(),
            None => storage.remove_item(THEME_STORAGE_KEY).unwrap(),
        }
    }

    fn last_seen(renders: &Renders) -> (ThemeHandle, bool) {
        renders.borrow().last().cloned().unwrap()
    }

    fn dispatch_storage_event(key: Option<&str>, new_value: Option<&str>) {
        let init = StorageEventInit::new();
        init.set_key(key);
        init.set_new_value(new_value);
        let event = StorageEvent::new_with_event_init_dict("storage", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn preference_survives_a_reload() {
        store_preference(Theme::Dark).unwrap();
        assert_eq!(load_preference(), Some(Theme::Dark));
        store_preference(Theme::Light).unwrap();
        assert_eq!(load_preference(), Some(Theme::Light));
    }

    #[wasm_bindgen_test]
    fn invalid_stored_value_reads_as_unset() {
        stored(Some("purple"));
        assert_eq!(load_preference(), None);
        stored(None);
        assert_eq!(load_preference(), None);
    }

    #[wasm_bindgen_test]
    fn dark_class_tracks_theme() {
        apply_to_document(Theme::Dark).unwrap();
        assert!(dom::root_has_class(DARK_CLASS).unwrap());
        apply_to_document(Theme::Light).unwrap();
        assert!(!dom::root_has_class(DARK_CLASS).unwrap());
    }

    #[wasm_bindgen_test]
    async fn children_first_render_with_stored_theme_applied() {
        stored(Some("dark"));
        apply_to_document(Theme::Light).unwrap();

        let (host, renders, app) = mount_provider();
        assert!(host.query_selector(".theme-reader").unwrap().is_none());
        dom::settle().await;

        let first = renders.borrow().first().cloned().unwrap();
        assert_eq!(first.0.get(), Theme::Dark);
        assert!(first.1, "dark class missing on the first render");
        assert!(renders.borrow().iter().all(|(handle, dark)| handle.get() == Theme::Dark && *dark));
        assert_eq!(host.text_content().unwrap(), "dark");

        app.destroy();
        stored(None);
        apply_to_document(Theme::Light).unwrap();
    }

    #[wasm_bindgen_test]
    async fn unset_or_invalid_preference_renders_light() {
        for value in [None, Some("purple")] {
            stored(value);
            apply_to_document(Theme::Dark).unwrap();

            let (host, renders, app) = mount_provider();
            dom::settle().await;

            let first = renders.borrow().first().cloned().unwrap();
            assert_eq!(first.0.get(), Theme::Light);
            assert!(!first.1);
            assert!(!dom::root_has_class(DARK_CLASS).unwrap());
            assert_eq!(host.text_content().unwrap(), "light");
            app.destroy();
        }
        stored(None);
    }

    #[wasm_bindgen_test]
    async fn change_from_another_tab_is_applied() {
        stored(None);
        let (host, renders, app) = mount_provider();
        dom::settle().await;
        assert_eq!(last_seen(&renders).0.get(), Theme::Light);

        dispatch_storage_event(Some("unrelated"), Some("dark"));
        dom::settle().await;
        assert!(!dom::root_has_class(DARK_CLASS).unwrap());

        dispatch_storage_event(Some(THEME_STORAGE_KEY), Some("dark"));
        dom::settle().await;
        assert!(dom::root_has_class(DARK_CLASS).unwrap());
        assert_eq!(last_seen(&renders).0.get(), Theme::Dark);
        assert_eq!(host.text_content().unwrap(), "dark");

        // Storage cleared elsewhere.
        dispatch_storage_event(None, None);
        dom::settle().await;
        assert!(!dom::root_has_class(DARK_CLASS).unwrap());
        assert_eq!(last_seen(&renders).0.get(), Theme::Light);

        app.destroy();
    }

    #[wasm_bindgen_test]
    async fn toggling_keeps_the_setter_stable() {
        stored(None);
        let (_host, renders, app) = mount_provider();
        dom::settle().await;

        let (before, _) = last_seen(&renders);
        before.toggle();
        dom::settle().await;

        let (after, dark) = last_seen(&renders);
        assert_eq!(after.get(), Theme::Dark);
        assert!(dark);
        assert_eq!(load_preference(), Some(Theme::Dark));
        assert!(after.set == before.set, "setter rebuilt between renders");
        assert!(after != before);

        app.destroy();
        stored(None);
        apply_to_document(Theme::Light).unwrap();
    }
}
