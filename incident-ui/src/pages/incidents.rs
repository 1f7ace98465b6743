use super::{severity_class, status_class};
use crate::bridge;
use crate::components::{Badge, Header, PageTitle};
use incident_api::dto::IncidentRecord;
use incident_core::filters::IncidentFilter;
use incident_core::model::{IncidentStatus, Severity};
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Incidents() -> impl IntoView {
    let incidents = create_rw_signal(Vec::<IncidentRecord>::new());
    let loading = create_rw_signal(true);

    let severity = create_rw_signal("all".to_string());
    let status = create_rw_signal("all".to_string());
    let search = create_rw_signal(String::new());

    spawn_local(async move {
        match bridge::all_incidents().await {
            Ok(list) => incidents.set(list),
            Err(e) => log::warn!("incident list unavailable: {e}"),
        }
        loading.set(false);
    });

    let filter = create_memo(move |_| {
        IncidentFilter::from_selections(&severity.get(), &status.get(), &search.get())
    });
    let visible = create_memo(move |_| {
        let filter = filter.get();
        incidents.with(|all| {
            all.iter()
                .filter(|r| r.matches(&filter))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let navigate = use_navigate();

    view! {
      <Header/>
      <div class="container stack">
        <PageTitle title="Incidents" subtitle="All reported emergencies"/>

        <div class="row filters">
          <input
            placeholder="Search type, location or description"
            prop:value=move || search.get()
            on:input=move |ev| search.set(event_target_value(&ev))
          />
          <select on:change=move |ev| severity.set(event_target_value(&ev))>
            <option value="all">"All severities"</option>
            {Severity::ALL
                .into_iter()
                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                .collect_view()}
          </select>
          <select on:change=move |ev| status.set(event_target_value(&ev))>
            <option value="all">"All statuses"</option>
            {IncidentStatus::ALL
                .into_iter()
                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                .collect_view()}
          </select>
        </div>

        <p class="meta">
          {move || format!("{} of {} incidents", visible.with(Vec::len), incidents.with(Vec::len))}
        </p>

        <Show
          when=move || !visible.with(Vec::is_empty)
          fallback=move || view! {
            <p class="meta">
              {move || if loading.get() { "Loading incidents..." } else { "No incidents found." }}
            </p>
          }
        >
          <div class="stack">
            <For
              each=move || visible.get().into_iter().enumerate()
              key=|(i, r)| (*i, r.incident_id.clone())
              children={
                let navigate = navigate.clone();
                move |(_, r)| {
                  let href = format!("/incident/{}", r.id());
                  let navigate = navigate.clone();
                  let risks = r.risk_factor_list();
                  view! {
                    <div class="card clickable" on:click=move |_| navigate(&href, Default::default())>
                      <div class="row spread">
                        <h3>{r.name().to_string()}</h3>
                        <div class="row">
                          <Badge tone=status_class(r.status.as_deref()) text=r.status.clone().unwrap_or_default()/>
                          <Badge tone=severity_class(r.severity_level.as_deref()) text=r.severity_level.clone().unwrap_or_default()/>
                        </div>
                      </div>
                      <p>{r.description.clone().unwrap_or_default()}</p>
                      <div class="row meta">
                        <span>{format!("📍 {}", r.location.as_deref().unwrap_or_default())}</span>
                        <span>{r.elapsed_label()}</span>
                        <span>{format!("Reported by: {}", r.reported_by.as_deref().unwrap_or_default())}</span>
                      </div>
                      <div class="row meta">
                        <span>{format!("AI score: {}", r.ai_score.as_deref().unwrap_or("-"))}</span>
                        <span>{format!("Personnel: {}", r.personnel.as_deref().unwrap_or("-"))}</span>
                        <span>{format!("Priority: {}", r.priority.as_deref().unwrap_or("-"))}</span>
                      </div>
                      <div class="row">
                        {risks.into_iter().map(|f| view! { <span class="chip">{f}</span> }).collect_view()}
                      </div>
                    </div>
                  }
                }
              }
            />
          </div>
        </Show>
      </div>
    }
}
