use super::{severity_class, status_class};
use crate::bridge;
use crate::components::{Badge, Header};
use incident_api::dto::{find_incident, IncidentRecord};
use incident_core::filters::ScoreBand;
use leptos::*;
use leptos_router::use_params_map;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq)]
enum Lookup {
    Loading,
    Found(IncidentRecord),
    Missing,
}

#[component]
pub fn IncidentDetail() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    let state = create_rw_signal(Lookup::Loading);

    create_effect(move |_| {
        let id = id();
        state.set(Lookup::Loading);
        spawn_local(async move {
            let records = match bridge::all_incidents().await {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("incident {id} lookup failed: {e}");
                    Vec::new()
                }
            };
            match find_incident(&records, &id) {
                Some(r) => state.set(Lookup::Found(r.clone())),
                None => state.set(Lookup::Missing),
            }
        });
    });

    view! {
      <Header/>
      <div class="container stack">
        {move || match state.get() {
            Lookup::Loading => view! { <p class="meta">"Loading incident details..."</p> }.into_view(),
            Lookup::Missing => view! { <p class="meta">"Incident not found."</p> }.into_view(),
            Lookup::Found(r) => detail(r).into_view(),
        }}
      </div>
    }
}

fn detail(r: IncidentRecord) -> impl IntoView {
    let score_class = r
        .score()
        .map(|s| ScoreBand::for_score(s).css_class())
        .unwrap_or_default();
    let risks = r.risk_factor_list();

    view! {
      <section class="card stack">
        <div class="row spread">
          <h1>{r.name().to_string()}</h1>
          <div class="row">
            <Badge tone=status_class(r.status.as_deref()) text=r.status.clone().unwrap_or_default()/>
            <Badge tone=severity_class(r.severity_level.as_deref()) text=r.severity_level.clone().unwrap_or_default()/>
          </div>
        </div>
        <div class="row meta">
          <span>{format!("📍 {}", r.location.as_deref().unwrap_or_default())}</span>
          <span>{format!("Reported {}", r.elapsed_label())}</span>
          <span>{format!("👤 {}", r.reported_by.as_deref().unwrap_or_default())}</span>
        </div>
      </section>

      <section class="card">
        <h2>"Description"</h2>
        <p>{r.description.clone().unwrap_or_default()}</p>
      </section>

      <section class="card stack">
        <h2>"AI Analysis"</h2>
        <div class="grid three">
          <div>
            <div class="meta">"Emergency Score"</div>
            <div class=format!("stat-value {score_class}")>
              {format!("{}/100", r.ai_score.as_deref().unwrap_or("-"))}
            </div>
          </div>
          <div>
            <div class="meta">"Personnel Required"</div>
            <div class="stat-value">{r.personnel.clone().unwrap_or_else(|| "-".into())}</div>
          </div>
          <div>
            <div class="meta">"Priority"</div>
            <div class="stat-value">{r.priority.clone().unwrap_or_else(|| "-".into())}</div>
          </div>
        </div>
        <div>
          <h3>"Risk Factors"</h3>
          <div class="row">
            {risks.into_iter().map(|f| view! { <span class="chip">{f}</span> }).collect_view()}
          </div>
        </div>
      </section>
    }
}
