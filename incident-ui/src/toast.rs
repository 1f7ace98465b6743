use incident_api::ApiError;
use leptos::*;
use std::time::Duration;

const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Handle stored in context by [`ToastHost`].
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn show(&self, title: &str, description: &str) {
        self.push(title, description, ToastVariant::Default);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.push(title, description, ToastVariant::Destructive);
    }

    /// Validation failures use their own heading and text; anything else
    /// gets `title` with the server message or `fallback`.
    pub fn api_error(&self, err: &ApiError, title: &str, fallback: &str) {
        log::warn!("{title}: {err}");
        match err {
            ApiError::Validation(v) => self.error(v.title(), &v.to_string()),
            other => self.error(title, other.server_message().unwrap_or(fallback)),
        }
    }

    fn push(&self, title: &str, description: &str, variant: ToastVariant) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                title: title.to_string(),
                description: description.to_string(),
                variant,
            })
        });
        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|list| list.retain(|t| t.id != id)),
            DISMISS_AFTER,
        );
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_toaster() -> Toaster {
    match use_context::<Toaster>() {
        Some(t) => t,
        None => {
            log::error!("toaster requested outside ToastHost");
            Toaster {
                toasts: create_rw_signal(Vec::new()),
                next_id: create_rw_signal(0),
            }
        }
    }
}

#[component]
pub fn ToastHost(children: Children) -> impl IntoView {
    let toaster = Toaster {
        toasts: create_rw_signal(Vec::new()),
        next_id: create_rw_signal(0),
    };
    provide_context(toaster);

    view! {
      {children()}
      <div class="toast-stack">
        <For
          each=move || toaster.toasts.get()
          key=|t| t.id
          children=move |t| {
            let class = match t.variant {
                ToastVariant::Default => "toast",
                ToastVariant::Destructive => "toast destructive",
            };
            let id = t.id;
            view! {
              <div class=class on:click=move |_| toaster.dismiss(id)>
                <div class="toast-title">{t.title}</div>
                <div class="toast-body">{t.description}</div>
              </div>
            }
          }
        />
      </div>
    }
}
