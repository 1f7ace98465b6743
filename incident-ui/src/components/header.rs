use crate::storage::{self, Theme};
use leptos::*;
use leptos_router::{use_location, use_navigate, A};

const HOME_PATH: &str = "/home";
const INITIAL_NOTIFICATIONS: u32 = 3;

fn go_back() {
    let history = web_sys::window().and_then(|w| w.history().ok());
    if let Some(h) = history {
        let _ = h.back();
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let show_back = move || location.pathname.get() != HOME_PATH;

    let username = storage::username();
    let initial = username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    let theme = create_rw_signal(storage::theme());
    let notifications = create_rw_signal(INITIAL_NOTIFICATIONS);
    let menu_open = create_rw_signal(false);

    let toggle_theme = move |_: ev::MouseEvent| {
        let next = theme.get_untracked().toggled();
        storage::set_theme(next);
        theme.set(next);
    };

    let navigate = use_navigate();
    let logout = move |_: ev::MouseEvent| {
        storage::clear_session();
        menu_open.set(false);
        log::info!("logged out");
        navigate("/login", Default::default());
    };

    view! {
      <header class="app-header">
        <div class="row">
          <Show when=show_back fallback=|| ()>
            <button class="ghost" on:click=move |_| go_back()>"← Back"</button>
          </Show>
          <A href=HOME_PATH class="brand">"🛡 Raksha Setu"</A>
        </div>
        <div class="row">
          <button class="ghost" title="Toggle theme" on:click=toggle_theme>
            {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
          </button>
          <button class="ghost bell" on:click=move |_| notifications.set(0)>
            "🔔"
            <Show when=move || { notifications.get() > 0 } fallback=|| ()>
              <span class="bell-count">{move || notifications.get()}</span>
            </Show>
          </button>
          <div class="profile">
            <button class="avatar" on:click=move |_| menu_open.update(|o| *o = !*o)>
              {initial}
            </button>
            <Show when=move || menu_open.get() fallback=|| ()>
              <div class="profile-menu">
                <div class="meta">{username.clone()}</div>
                <A href="/home">"Home"</A>
                <A href="/dashboard">"Dashboard"</A>
                <button class="ghost" on:click=logout.clone()>"Log out"</button>
              </div>
            </Show>
          </div>
        </div>
      </header>
    }
}
