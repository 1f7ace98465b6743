use crate::components::{Header, PageTitle};
use chrono::Utc;
use incident_core::comms::{
    self, channels, compose, emergency_contacts, messages_for_channel, DEFAULT_CHANNEL,
};
use incident_core::mock;
use incident_core::model::Message;
use leptos::*;

#[component]
pub fn Communications() -> impl IntoView {
    let messages = create_rw_signal(mock::messages(Utc::now()));
    let channel = create_rw_signal(DEFAULT_CHANNEL.to_string());
    let draft = create_rw_signal(String::new());

    let visible = move || {
        let id = channel.get();
        messages.with(|all| {
            messages_for_channel(all, &id)
                .into_iter()
                .cloned()
                .collect::<Vec<Message>>()
        })
    };

    let channel_name = move || {
        comms::find_channel(&channel.get())
            .map(|c| c.name)
            .unwrap_or_default()
    };

    let send = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let seq = messages.with_untracked(Vec::len);
        let Some(msg) = compose(&channel.get_untracked(), &draft.get_untracked(), Utc::now(), seq)
        else {
            return;
        };
        log::debug!("sending {} to {}", msg.id, msg.to);
        messages.update(|all| all.push(msg));
        draft.set(String::new());
    };

    view! {
      <Header/>
      <div class="container stack">
        <PageTitle title="Communications" subtitle="Coordinate with response units in real time"/>

        <div class="comms-layout">
          <aside class="stack">
            <section class="card stack">
              <h3>"Channels"</h3>
              <ul class="list">
                {channels()
                    .into_iter()
                    .map(|c| {
                        let id = c.id;
                        view! {
                          <li
                            class=move || if channel.get() == id { "clickable active" } else { "clickable" }
                            on:click=move |_| channel.set(id.to_string())
                          >
                            <div class="title">{format!("# {}", c.name)}</div>
                            <div class="meta">{c.description}</div>
                          </li>
                        }
                    })
                    .collect_view()}
              </ul>
            </section>

            <section class="card stack">
              <h3>"Emergency Contacts"</h3>
              <ul class="list">
                {emergency_contacts()
                    .into_iter()
                    .map(|c| view! {
                      <li class="row spread">
                        <div>
                          <div class="title">
                            <span class=format!("dot {}", c.presence.css_class()) title=c.presence.as_str()></span>
                            {c.name}
                          </div>
                          <div class="meta">{c.role}</div>
                        </div>
                        <a class="ghost" href=format!("tel:{}", c.phone)>"📞"</a>
                      </li>
                    })
                    .collect_view()}
              </ul>
            </section>
          </aside>

          <section class="card chat">
            <h2>{move || format!("# {}", channel_name())}</h2>
            <div class="messages">
              <For
                each=visible
                key=|m| m.id.clone()
                children=move |m| {
                  let mine = m.from == comms::CURRENT_USER;
                  let class = match (mine, m.is_emergency) {
                      (_, true) => "bubble emergency",
                      (true, false) => "bubble user",
                      (false, false) => "bubble assistant",
                  };
                  view! {
                    <div class=class>
                      <div class="meta">
                        {format!("{} · {}", m.from, m.timestamp.format("%H:%M"))}
                      </div>
                      <div>{m.content}</div>
                    </div>
                  }
                }
              />
            </div>
            <form class="row" on:submit=send>
              <input
                placeholder="Type a message..."
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
              />
              <button type="submit" class="primary">"Send"</button>
            </form>
          </section>
        </div>
      </div>
    }
}
