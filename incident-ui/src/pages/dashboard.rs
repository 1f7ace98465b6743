use super::severity_class;
use crate::bridge;
use crate::components::{Header, PageTitle, StatCardView};
use incident_api::dto::RecentIncident;
use incident_core::dashboard::{stat_cards, StatCard};
use incident_core::mock;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Dashboard() -> impl IntoView {
    let cards = create_rw_signal(stat_cards(None));
    let recent = create_rw_signal(Vec::<RecentIncident>::new());
    let loading = create_rw_signal(true);

    spawn_local(async move {
        let (report, incidents) =
            futures::join!(bridge::dashboard_report(), bridge::recent_incidents());
        match report {
            Ok(report) => cards.set(stat_cards(report.map(|r| r.card_values()))),
            Err(e) => log::warn!("dashboard report unavailable: {e}"),
        }
        match incidents {
            Ok(list) => recent.set(list),
            Err(e) => log::warn!("recent incidents unavailable: {e}"),
        }
        loading.set(false);
    });

    let card_value = move |i: usize| {
        Signal::derive(move || {
            cards.with(|c: &Vec<StatCard>| c.get(i).map(|c| c.value.clone()).unwrap_or_default())
        })
    };

    view! {
      <Header/>
      <div class="container stack">
        <PageTitle title="Emergency Dashboard" subtitle="Real-time overview of emergency operations"/>

        <div class="grid four">
          {cards
              .get_untracked()
              .into_iter()
              .enumerate()
              .map(|(i, c)| view! { <StatCardView label=c.label value=card_value(i)/> })
              .collect_view()}
        </div>

        <div class="grid two">
          <section class="card">
            <h2>"Recent Incidents"</h2>
            <Show
              when=move || !recent.with(Vec::is_empty)
              fallback=move || view! {
                <p class="meta">
                  {move || if loading.get() { "Loading..." } else { "No recent incidents found." }}
                </p>
              }
            >
              <ul class="list">
                <For
                  each=move || recent.get().into_iter().enumerate()
                  key=|(i, r)| (*i, r.incident_id.clone())
                  children=move |(_, r)| view! {
                    <li class="row">
                      <span class=format!("dot {}", severity_class(r.severity_level.as_deref()))></span>
                      <div>
                        <div>{r.headline()}</div>
                        <div class="meta">{r.subtitle()}</div>
                      </div>
                    </li>
                  }
                />
              </ul>
            </Show>
          </section>

          <section class="card">
            <h2>"Resource Allocation"</h2>
            <ul class="list">
              {mock::resource_pool()
                  .into_iter()
                  .map(|(name, available)| view! {
                    <li class="row spread">
                      <span>{name}</span>
                      <span class="meta">{format!("{available} available")}</span>
                    </li>
                  })
                  .collect_view()}
            </ul>
          </section>
        </div>
      </div>
    }
}
