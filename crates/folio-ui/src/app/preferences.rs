//! Browser-backed storage and document-root seams for the theme state.

use crate::core::theme::{ThemeError, ThemeResult, ThemeStorage, ThemeSurface};
use gloo::console;
use gloo::utils::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, Storage};

/// `window.localStorage`, read and written as raw text.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl BrowserStorage {
    fn local(key: &str) -> ThemeResult<Storage> {
        window()
            .local_storage()
            .map_err(|err| ThemeError::storage(key, js_detail(&err)))?
            .ok_or_else(|| ThemeError::storage(key, "localStorage is not available"))
    }
}

impl ThemeStorage for BrowserStorage {
    fn read(&self, key: &str) -> ThemeResult<Option<String>> {
        Self::local(key)?
            .get_item(key)
            .map_err(|err| ThemeError::storage(key, js_detail(&err)))
    }

    fn write(&self, key: &str, value: &str) -> ThemeResult<()> {
        Self::local(key)?
            .set_item(key, value)
            .map_err(|err| ThemeError::storage(key, js_detail(&err)))
    }
}

/// `document.documentElement`.
#[derive(Clone, Debug)]
pub(crate) struct DocumentRoot {
    element: Element,
}

impl DocumentRoot {
    /// Resolve the root element of the current document.
    pub(crate) fn current() -> ThemeResult<Self> {
        document()
            .document_element()
            .map(|element| Self { element })
            .ok_or_else(|| ThemeError::surface("document_element", "document has no root element"))
    }

    fn html(&self, operation: &'static str) -> ThemeResult<&HtmlElement> {
        self.element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| ThemeError::surface(operation, "root element is not an HTML element"))
    }
}

impl ThemeSurface for DocumentRoot {
    fn remove_class(&self, class: &str) -> ThemeResult<()> {
        self.element
            .class_list()
            .remove_1(class)
            .map_err(|err| ThemeError::surface("remove_class", js_detail(&err)))
    }

    fn add_class(&self, class: &str) -> ThemeResult<()> {
        self.element
            .class_list()
            .add_1(class)
            .map_err(|err| ThemeError::surface("add_class", js_detail(&err)))
    }

    fn set_attribute(&self, name: &str, value: &str) -> ThemeResult<()> {
        self.element
            .set_attribute(name, value)
            .map_err(|err| ThemeError::surface("set_attribute", js_detail(&err)))
    }

    fn set_style_property(&self, name: &str, value: &str) -> ThemeResult<()> {
        self.html("set_style_property")?
            .style()
            .set_property(name, value)
            .map_err(|err| ThemeError::surface("set_style_property", js_detail(&err)))
    }
}

pub(crate) fn log_theme_error(context: &'static str, err: &ThemeError) {
    match err {
        ThemeError::Storage { key, detail } => {
            console::error!("storage operation failed", context, key, detail);
        }
        ThemeError::Surface { operation, detail } => {
            console::error!("theme surface update failed", context, *operation, detail);
        }
        ThemeError::UnknownTheme { value } => {
            console::error!("unknown theme", context, value);
        }
        ThemeError::OutsideProvider => {
            console::error!(context, err.to_string());
        }
    }
}

fn js_detail(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
