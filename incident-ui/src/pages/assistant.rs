use crate::bridge;
use crate::components::Header;
use crate::storage::{self, CHAT_HISTORIES_KEY};
use chrono::Utc;
use incident_api::dto::GenerateResponseRequest;
use incident_core::chat::{reply_text, ChatRole, ChatSession};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

fn persist(session: &ChatSession) {
    match session.histories_json() {
        Ok(raw) => storage::set(CHAT_HISTORIES_KEY, &raw),
        Err(e) => log::warn!("chat histories not saved: {e}"),
    }
}

#[component]
pub fn AiAssistant() -> impl IntoView {
    let session = create_rw_signal(ChatSession::restore(
        storage::get(CHAT_HISTORIES_KEY).as_deref(),
        Utc::now(),
    ));
    let input = create_rw_signal(String::new());
    let loading = create_rw_signal(false);
    let drawer_open = create_rw_signal(false);

    let mutate = move |f: &dyn Fn(&mut ChatSession)| {
        session.update(|s| {
            f(s);
            persist(s);
        });
    };

    let send = move || {
        if loading.get_untracked() {
            return;
        }
        let mut prompt = None;
        session.update(|s| prompt = s.push_user(&input.get_untracked(), Utc::now()));
        let Some(prompt) = prompt else {
            return;
        };
        input.set(String::new());
        loading.set(true);

        let req = GenerateResponseRequest::new(&prompt, storage::user_id().as_deref(), Utc::now());
        spawn_local(async move {
            let reply = reply_text(bridge::generate_response(&req).await);
            session.update(|s| {
                s.push_assistant(reply.clone(), Utc::now());
                persist(s);
            });
            loading.set(false);
        });
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        send();
    };

    view! {
      <Header/>
      <div class="container chat-layout">
        <aside class=move || if drawer_open.get() { "card chat-drawer open" } else { "card chat-drawer" }>
          <button class="primary" on:click=move |_| mutate(&|s| s.start_new(Utc::now()))>"+ New Chat"</button>
          <h3>"Chat History"</h3>
          <Show
            when=move || !session.with(|s| s.histories.is_empty())
            fallback=|| view! { <p class="meta">"No chat history yet"</p> }
          >
            <ul class="list">
              <For
                each=move || session.with(|s| s.histories.clone())
                key=|h| (h.id.clone(), h.timestamp)
                children=move |h| {
                  let open_id = h.id.clone();
                  let delete_id = h.id.clone();
                  let active_id = h.id.clone();
                  view! {
                    <li
                      class=move || if session.with(|s| s.current_id == active_id) { "row spread active" } else { "row spread" }
                    >
                      <div class="clickable" on:click=move |_| mutate(&|s| { s.load(&open_id, Utc::now()); })>
                        <div class="title">{h.title.clone()}</div>
                        <div class="meta">{h.timestamp.format("%Y-%m-%d").to_string()}</div>
                      </div>
                      <button class="ghost" title="Delete chat" on:click=move |_| mutate(&|s| s.delete(&delete_id, Utc::now()))>
                        "🗑"
                      </button>
                    </li>
                  }
                }
              />
            </ul>
          </Show>
        </aside>

        <section class="card chat">
          <div class="row spread">
            <h2>"AI Assistant"</h2>
            <button class="ghost" on:click=move |_| drawer_open.update(|o| *o = !*o)>"☰ History"</button>
          </div>
          <div class="messages">
            <For
              each=move || session.with(|s| s.messages.clone())
              key=|m| (m.id, m.timestamp)
              children=move |m| {
                let class = match m.role {
                    ChatRole::User => "bubble user",
                    ChatRole::Assistant => "bubble assistant",
                };
                view! {
                  <div class=class>
                    <div>{m.content}</div>
                    <div class="meta">{m.timestamp.format("%H:%M").to_string()}</div>
                  </div>
                }
              }
            />
            <Show when=move || loading.get() fallback=|| ()>
              <div class="bubble assistant meta">"Thinking..."</div>
            </Show>
          </div>
          <form class="row" on:submit=on_submit>
            <input
              placeholder="Ask about emergency procedures..."
              prop:value=move || input.get()
              on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button type="submit" class="primary" disabled=move || loading.get()>"Send"</button>
          </form>
        </section>
      </div>
    }
}
