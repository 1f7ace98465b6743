use crate::components::{Header, PageTitle};
use incident_core::map::{
    self, hazard_zones, incident_glyph, incident_marker, severity_marker_class, team_glyph,
    team_marker, team_status_class, toggle_selection, MapLayer, MapStats, MapStyle,
};
use incident_core::mock;
use incident_core::model::{short_location, Severity};
use leptos::*;

const GRID_LINES: usize = 20;

#[component]
pub fn MapView() -> impl IntoView {
    let incidents = mock::incidents(chrono::Utc::now());
    let teams = mock::response_teams();
    let stats = MapStats::compute(&incidents, &teams);

    let layer = create_rw_signal(MapLayer::default());
    let style = create_rw_signal(MapStyle::default());
    let selected = create_rw_signal(None::<String>);

    let incident_markers = incidents
        .into_iter()
        .enumerate()
        .map(|(i, incident)| {
            let pos = incident_marker(i);
            let id = incident.id.clone();
            let is_selected = {
                let id = id.clone();
                move || selected.with(|s| s.as_deref() == Some(id.as_str()))
            };
            let popup_open = is_selected.clone();
            let on_click = move |_: ev::MouseEvent| {
                selected.update(|s| *s = toggle_selection(s.as_deref(), &id));
            };
            let pin_class = format!("pin {}", severity_marker_class(incident.severity));
            let glyph = incident_glyph(&incident.kind);
            let title = incident.kind.clone();
            let place = short_location(&incident.location).to_string();
            let score = format!("Score: {}/100", incident.ai_analysis.emergency_score);
            view! {
              <div
                class=move || if is_selected() { "marker selected" } else { "marker" }
                style=pos.css()
                on:click=on_click
              >
                <div class=pin_class>{glyph}</div>
                <Show when=popup_open.clone() fallback=|| ()>
                  <div class="popup">
                    <b>{title.clone()}</b>
                    <div class="meta">{place.clone()}</div>
                    <div class="meta">{score.clone()}</div>
                  </div>
                </Show>
              </div>
            }
        })
        .collect_view();

    let team_markers = teams
        .into_iter()
        .enumerate()
        .map(|(i, team)| {
            view! {
              <div class="marker team" style=team_marker(i).css() title=team.name.clone()>
                <div class=format!("pin square {}", team_status_class(team.status))>
                  {team_glyph(team.kind)}
                </div>
              </div>
            }
        })
        .collect_view();

    let hazards = hazard_zones()
        .into_iter()
        .map(|z| {
            let css = format!(
                "{} width: {}px; height: {}px;",
                z.position.css(),
                z.diameter_px,
                z.diameter_px
            );
            view! { <div class=format!("hazard {}", z.css_class) style=css></div> }
        })
        .collect_view();

    let grid = (0..GRID_LINES)
        .map(|i| {
            let offset = i * 5;
            view! {
              <div class="grid-h" style=format!("top: {offset}%;")></div>
              <div class="grid-v" style=format!("left: {offset}%;")></div>
            }
        })
        .collect_view();

    view! {
      <Header/>
      <div class="container stack">
        <PageTitle
          title="Interactive Emergency Map"
          subtitle="Real-time visualization of incidents and response teams"
        />

        <div class="map-layout">
          <aside class="stack">
            <section class="card stack">
              <h3>"Map Layers"</h3>
              <select on:change=move |ev| {
                  if let Some(l) = MapLayer::parse(&event_target_value(&ev)) {
                      layer.set(l);
                  }
              }>
                {MapLayer::ALL
                    .into_iter()
                    .map(|l| view! { <option value=l.as_str()>{l.label()}</option> })
                    .collect_view()}
              </select>
              <select on:change=move |ev| {
                  if let Some(s) = MapStyle::parse(&event_target_value(&ev)) {
                      style.set(s);
                  }
              }>
                {MapStyle::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect_view()}
              </select>
            </section>

            <section class="card stack">
              <h3>"Legend"</h3>
              {Severity::ALL
                  .into_iter()
                  .map(|s| view! {
                    <div class="row">
                      <span class=format!("dot {}", severity_marker_class(s))></span>
                      <span>{s.label()}</span>
                    </div>
                  })
                  .collect_view()}
            </section>
          </aside>

          <section class="card map-card">
            <div class="row spread">
              <h3>"Emergency Response Map"</h3>
              <span class="badge">{move || format!("{} View", style.get().label())}</span>
            </div>
            <div class=move || format!("map-canvas {}", style.get().as_str())>
              <div class="grid-lines">{grid}</div>
              <div class:hidden=move || !layer.get().shows_hazards()>{hazards}</div>
              <div class:hidden=move || !layer.get().shows_incidents()>{incident_markers}</div>
              <div class:hidden=move || !layer.get().shows_teams()>{team_markers}</div>
              <div class="coords">"Lat: 40.7589" <br/> "Lng: -73.9851"</div>
              <div class="scale">"1 km"</div>
            </div>
          </section>
        </div>

        <div class="grid four">
          <div class="card stat">
            <div class="stat-value">{stats.incidents}</div>
            <div class="meta">"Active Incidents"</div>
          </div>
          <div class="card stat">
            <div class="stat-value">{stats.teams}</div>
            <div class="meta">"Response Teams"</div>
          </div>
          <div class="card stat">
            <div class="stat-value">{stats.deployed}</div>
            <div class="meta">"Teams Deployed"</div>
          </div>
          <div class="card stat">
            <div class="stat-value">{map::COVERAGE_LABEL}</div>
            <div class="meta">"Coverage Area"</div>
          </div>
        </div>
      </div>
    }
}
