use leptos::*;
use leptos_router::{use_location, A};

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    log::warn!(
        "no route for {}",
        location.pathname.get_untracked()
    );
    view! {
      <div class="center">
        <h1>"404"</h1>
        <p class="meta">"Oops! Page not found"</p>
        <A href="/">"Return to Home"</A>
      </div>
    }
}
