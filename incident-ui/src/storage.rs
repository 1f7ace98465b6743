use incident_api::dto::Session;
use web_sys::Storage;

pub const USERNAME_KEY: &str = "username";
pub const USER_ID_KEY: &str = "userId";
pub const CHAT_HISTORIES_KEY: &str = "chatHistories";
pub const THEME_KEY: &str = "theme";

pub const DEFAULT_USERNAME: &str = "User";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn as_str(&self) -> &'static str {
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
}

fn local_storage() -> Result<Storage, String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    window
        .local_storage()
        .map_err(|e| format!("localStorage access failed: {e:?}"))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

pub fn get(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

pub fn set(key: &str, value: &str) {
    let result = local_storage().and_then(|s| {
        s.set_item(key, value)
            .map_err(|e| format!("write {key} failed: {e:?}"))
    });
    if let Err(e) = result {
        log::warn!("{e}");
    }
}

pub fn remove(key: &str) {
    if let Ok(s) = local_storage() {
        let _ = s.remove_item(key);
    }
}

pub fn username() -> String {
    get(USERNAME_KEY)
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string())
}

pub fn user_id() -> Option<String> {
    get(USER_ID_KEY).filter(|id| !id.is_empty())
}

pub fn save_session(session: &Session) {
    set(USERNAME_KEY, &session.username);
    match session.user_id.as_deref() {
        Some(id) => set(USER_ID_KEY, id),
        None => remove(USER_ID_KEY),
    }
}

pub fn clear_session() {
    remove(USERNAME_KEY);
    remove(USER_ID_KEY);
}

pub fn theme() -> Theme {
    match get(THEME_KEY).as_deref() {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    }
}

pub fn set_theme(theme: Theme) {
    set(THEME_KEY, theme.as_str());
    apply_theme(theme);
}

pub fn apply_saved_theme() {
    apply_theme(theme());
}

fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root
            .class_list()
            .toggle_with_force("dark", theme == Theme::Dark);
    }
}
