use leptos::*;

#[component]
pub fn PageTitle(#[prop(into)] title: String, #[prop(into)] subtitle: String) -> impl IntoView {
    view! {
      <div class="page-title">
        <h1>{title}</h1>
        <p class="meta">{subtitle}</p>
      </div>
    }
}

#[component]
pub fn Badge(#[prop(into)] tone: String, #[prop(into)] text: String) -> impl IntoView {
    view! { <span class=format!("badge {tone}")>{text}</span> }
}

#[component]
pub fn StatCardView(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
      <div class="card stat">
        <div class="meta">{label}</div>
        <div class="stat-value">{move || value.get()}</div>
      </div>
    }
}
