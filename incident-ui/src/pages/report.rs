use crate::bridge;
use crate::components::{Header, PageTitle};
use crate::geo;
use crate::storage;
use crate::toast::use_toaster;
use incident_api::dto::{attachment_field, lookup_id, LookupItem, ReportKind, SubmitReport};
use incident_api::validate;
use incident_core::filters::ScoreBand;
use incident_core::triage::{analyze, AnalysisInput, AnalysisResult, WeatherData};
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};

const STEPS: u8 = 3;
const DEFAULT_POPULATION_DENSITY: f64 = 1500.0;

fn analysis_input(description: &str, location: &str, reporter: &str) -> AnalysisInput {
    AnalysisInput {
        description: description.to_string(),
        location: location.to_string(),
        reporter_info: Some(reporter.to_string()).filter(|r| !r.is_empty()),
        weather: Some(WeatherData::clear_day()),
        hour_of_day: Some(js_sys::Date::new_0().get_hours()),
        population_density: Some(DEFAULT_POPULATION_DENSITY),
    }
}

fn attachment_icon(file: &File) -> &'static str {
    match attachment_field(&file.type_()) {
        Some("images") => "🖼",
        Some("video") => "🎞",
        Some("audio") => "🎙",
        _ => "📎",
    }
}

#[component]
pub fn Report() -> impl IntoView {
    let toaster = use_toaster();
    let navigate = use_navigate();

    let step = create_rw_signal(1u8);
    let kind = create_rw_signal(ReportKind::default());
    let category = create_rw_signal(String::new());
    let severity = create_rw_signal(String::new());
    let location = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let reporter_name = create_rw_signal(storage::username());
    let reporter_contact = create_rw_signal(String::new());
    let files = create_rw_signal(Vec::<File>::new());

    let incident_types = create_rw_signal(Vec::<LookupItem>::new());
    let severity_levels = create_rw_signal(Vec::<LookupItem>::new());
    let types_requested = create_rw_signal(false);
    let levels_requested = create_rw_signal(false);

    let locating = create_rw_signal(false);
    let submitting = create_rw_signal(false);
    let analysis = create_rw_signal(None::<AnalysisResult>);

    let load_types = move || {
        if types_requested.get_untracked() {
            return;
        }
        types_requested.set(true);
        spawn_local(async move {
            match bridge::incident_types().await {
                Ok(items) => incident_types.set(items),
                Err(e) => {
                    types_requested.set(false);
                    toaster.api_error(&e, "Error", "Unable to fetch categories.");
                }
            }
        });
    };

    let load_levels = move || {
        if levels_requested.get_untracked() {
            return;
        }
        levels_requested.set(true);
        spawn_local(async move {
            match bridge::severity_levels().await {
                Ok(items) => severity_levels.set(items),
                Err(e) => {
                    levels_requested.set(false);
                    toaster.api_error(&e, "Error", "Unable to fetch severity levels.");
                }
            }
        });
    };

    let use_my_location = move |_: ev::MouseEvent| {
        locating.set(true);
        spawn_local(async move {
            match geo::current_position().await {
                Ok(coords) => {
                    location.set(coords.to_location_string());
                    toaster.show(
                        "Location captured",
                        "GPS coordinates have been added to the location field.",
                    );
                }
                Err(e) => toaster.error(e.title(), &e.to_string()),
            }
            locating.set(false);
        });
    };

    let on_files = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else {
            return;
        };
        let picked: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        files.update(|f| f.extend(picked));
        input.set_value("");
    };

    let go_to_analysis = move |_: ev::MouseEvent| {
        match validate::report(&description.get_untracked(), &location.get_untracked()) {
            Ok(()) => step.set(2),
            Err(e) => toaster.error(e.title(), &e.to_string()),
        }
    };

    let run_analysis = move |_: ev::MouseEvent| {
        let input = analysis_input(
            &description.get_untracked(),
            &location.get_untracked(),
            &reporter_name.get_untracked(),
        );
        let result = analyze(&input);
        log::info!(
            "analysis: category={:?} score={} priority={}",
            result.category,
            result.emergency_score,
            result.priority_level
        );
        analysis.set(Some(result));
        step.set(3);
    };

    let cancel = {
        let navigate = navigate.clone();
        move |_: ev::MouseEvent| navigate("/home", Default::default())
    };

    let submit = move |_: ev::MouseEvent| {
        let report = SubmitReport {
            description: description.get_untracked(),
            location: location.get_untracked(),
            reporter_id: storage::user_id(),
            reporter_name: reporter_name.get_untracked(),
            reporter_contact_number: reporter_contact.get_untracked(),
            emergency_type: category.get_untracked(),
            emergency_type_id: incident_types.with_untracked(|t| lookup_id(t, &category.get_untracked())),
            estimated_severity: severity.get_untracked(),
            severity_id: severity_levels.with_untracked(|l| lookup_id(l, &severity.get_untracked())),
        }
        .for_kind(kind.get_untracked());
        let attachments = files.get_untracked();
        let navigate = navigate.clone();
        submitting.set(true);
        spawn_local(async move {
            match bridge::submit_report(&report, &attachments).await {
                Ok(()) => {
                    toaster.show("Incident Submitted", "Your report has been sent successfully.");
                    navigate("/incidents", Default::default());
                }
                Err(e) => toaster.api_error(
                    &e,
                    "Submission Failed",
                    "Could not submit the report. Please try again.",
                ),
            }
            submitting.set(false);
        });
    };

    let progress = move || format!("width: {:.2}%;", f64::from(step.get()) * 33.33);

    view! {
      <Header/>
      <div class="container narrow stack">
        <PageTitle title="Report Emergency" subtitle="Provide details so responders can act quickly"/>

        <div class="progress"><div class="progress-bar" style=progress></div></div>
        <p class="meta">{move || format!("Step {} of {STEPS}", step.get())}</p>

        <Show when=move || step.get() == 1 fallback=|| ()>
          <section class="card stack">
            <div class="tabs">
              <button
                class=move || if kind.get() == ReportKind::Emergency { "tab active" } else { "tab" }
                on:click=move |_| kind.set(ReportKind::Emergency)
              >"Emergency"</button>
              <button
                class=move || if kind.get() == ReportKind::Public { "tab active" } else { "tab" }
                on:click=move |_| {
                    kind.set(ReportKind::Public);
                    severity.set(String::new());
                }
              >"Public Issue"</button>
            </div>

            <label>"Category"</label>
            <select
              on:focus=move |_| load_types()
              on:change=move |ev| category.set(event_target_value(&ev))
            >
              <option value="">"Select category"</option>
              <For
                each=move || incident_types.get()
                key=|t| t.value.clone()
                children=move |t| view! { <option value=t.value.clone()>{t.value.clone()}</option> }
              />
            </select>

            <Show when=move || kind.get().asks_severity() fallback=|| ()>
              <label>"Severity"</label>
              <select
                on:focus=move |_| load_levels()
                on:change=move |ev| severity.set(event_target_value(&ev))
              >
                <option value="">"Select severity"</option>
                <For
                  each=move || severity_levels.get()
                  key=|l| l.value.clone()
                  children=move |l| view! { <option value=l.value.clone()>{l.value.clone()}</option> }
                />
              </select>
            </Show>

            <label>"Location"</label>
            <div class="row">
              <input
                placeholder="Address or coordinates"
                prop:value=move || location.get()
                on:input=move |ev| location.set(event_target_value(&ev))
              />
              <button class="ghost" disabled=move || locating.get() on:click=use_my_location>
                {move || if locating.get() { "Locating..." } else { "📍 Use my location" }}
              </button>
            </div>

            <label>"Description"</label>
            <textarea
              rows="5"
              placeholder="What is happening?"
              prop:value=move || description.get()
              on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>

            <div class="grid two">
              <div class="stack">
                <label>"Your Name"</label>
                <input
                  prop:value=move || reporter_name.get()
                  on:input=move |ev| reporter_name.set(event_target_value(&ev))
                />
              </div>
              <div class="stack">
                <label>"Contact Number"</label>
                <input
                  type="tel"
                  prop:value=move || reporter_contact.get()
                  on:input=move |ev| reporter_contact.set(event_target_value(&ev))
                />
              </div>
            </div>

            <label>"Attachments"</label>
            <input type="file" multiple accept="image/*,video/*,audio/*" on:change=on_files/>
            <ul class="list">
              <For
                each=move || files.get().into_iter().enumerate()
                key=|(i, f)| (*i, f.name())
                children=move |(i, f)| view! {
                  <li class="row spread">
                    <span>{format!("{} {}", attachment_icon(&f), f.name())}</span>
                    <button class="ghost" on:click=move |_| files.update(|all| {
                        if i < all.len() {
                            all.remove(i);
                        }
                    })>"✕"</button>
                  </li>
                }
              />
            </ul>

            <div class="row spread">
              <button class="ghost" on:click=cancel.clone()>"Cancel"</button>
              <button class="primary" on:click=go_to_analysis>"Next: AI Analysis"</button>
            </div>
          </section>
        </Show>

        <Show when=move || step.get() == 2 fallback=|| ()>
          <section class="card stack">
            <h2>"AI Analysis"</h2>
            <p class="meta">
              "The report will be scored against current conditions: clear weather, 72°F, 65% humidity, 12 mph wind, dense population."
            </p>
            <div class="row spread">
              <button class="ghost" on:click=move |_| step.set(1)>"Back"</button>
              <button class="primary" on:click=run_analysis>"Run Analysis"</button>
            </div>
          </section>
        </Show>

        <Show when=move || step.get() == 3 fallback=|| ()>
          <section class="card stack">
            <h2>"Analysis Results"</h2>
            {move || analysis.get().map(|a| {
                let band = ScoreBand::for_score(a.emergency_score).css_class();
                view! {
                  <div class="grid three">
                    <div>
                      <div class="meta">"Emergency Score"</div>
                      <div class=format!("stat-value {band}")>{format!("{}/100", a.emergency_score)}</div>
                    </div>
                    <div>
                      <div class="meta">"Personnel Required"</div>
                      <div class="stat-value">{a.rescue_personnel_required}</div>
                    </div>
                    <div>
                      <div class="meta">"Priority Level"</div>
                      <div class="stat-value">{a.priority_level}</div>
                    </div>
                  </div>
                  <p><b>"Assessment: "</b>{a.estimated_severity.clone()}</p>
                  <p><b>"Weather impact: "</b>{a.weather_impact.clone()}</p>
                  <p><b>"Estimated duration: "</b>{a.estimated_duration.clone()}</p>
                  <h3>"Risk Factors"</h3>
                  <div class="row">
                    {a.risk_factors.iter().map(|r| view! { <span class="chip">{r.clone()}</span> }).collect_view()}
                  </div>
                  <h3>"Recommended Actions"</h3>
                  <ol>
                    {a.recommended_actions.iter().map(|r| view! { <li>{r.clone()}</li> }).collect_view()}
                  </ol>
                  <h3>"Resources Needed"</h3>
                  <div class="row">
                    {a.resources_needed.iter().map(|r| view! { <span class="chip">{r.clone()}</span> }).collect_view()}
                  </div>
                }
            })}
            <div class="row spread">
              <button class="ghost" on:click=move |_| step.set(1)>"Edit Report"</button>
              <button class="primary" disabled=move || submitting.get() on:click=submit.clone()>
                {move || if submitting.get() { "Submitting..." } else { "Submit Report" }}
              </button>
            </div>
          </section>
        </Show>
      </div>
    }
}
