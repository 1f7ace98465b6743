use crate::components::{Badge, Header};
use crate::storage;
use incident_core::mock;
use leptos::*;
use leptos_router::A;

const QUICK_ACTIONS: [(&str, &str, &str, &str); 6] = [
    ("/report", "🚨", "Report Emergency", "Submit a new incident report"),
    ("/dashboard", "📊", "Dashboard", "Live statistics and recent incidents"),
    ("/incidents", "📋", "Incidents", "Browse and filter reported incidents"),
    ("/map", "🗺", "Map View", "Incidents and teams on the map"),
    ("/ai-assistant", "🤖", "AI Assistant", "Guidance for emergency response"),
    ("/communications", "📡", "Communications", "Channels and emergency contacts"),
];

fn activity_status_class(status: &str) -> &'static str {
    match status {
        "Active" | "En Route" => "status-active",
        "Completed" => "status-resolved",
        _ => "",
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let username = storage::username();

    view! {
      <Header/>
      <div class="container stack">
        <div>
          <h1>{format!("Welcome, {username}")}</h1>
          <p class="meta">"What would you like to do today?"</p>
        </div>

        <div class="grid three">
          {QUICK_ACTIONS
              .into_iter()
              .map(|(href, icon, title, blurb)| view! {
                <A href=href class="card action">
                  <div class="icon">{icon}</div>
                  <div class="title">{title}</div>
                  <div class="meta">{blurb}</div>
                </A>
              })
              .collect_view()}
        </div>

        <div class="grid two">
          <section class="card">
            <h2>"My Activities"</h2>
            <ul class="list">
              {mock::my_activities()
                  .into_iter()
                  .map(|a| view! {
                    <li>
                      <div class="row spread">
                        <b>{a.title}</b>
                        <Badge tone=activity_status_class(a.status) text=a.status/>
                      </div>
                      <div class="meta">{format!("{} · {} · {}", a.kind, a.role, a.timestamp)}</div>
                    </li>
                  })
                  .collect_view()}
            </ul>
          </section>

          <section class="card">
            <h2>"Allocated Resources"</h2>
            <ul class="list">
              {mock::allocated_resources()
                  .into_iter()
                  .map(|r| view! {
                    <li>
                      <div class="row spread">
                        <b>{r.name}</b>
                        <Badge tone=activity_status_class(r.status) text=r.status/>
                      </div>
                      <div class="meta">{r.designation}</div>
                      <div class="meta">{format!("Assigned to: {}", r.incident)}</div>
                    </li>
                  })
                  .collect_view()}
            </ul>
          </section>
        </div>
      </div>
    }
}
