use crate::pages::{
    AiAssistant, Communications, Dashboard, Home, IncidentDetail, Incidents, Login, MapView,
    NotFound, Report,
};
use crate::toast::ToastHost;
use leptos::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
      <ToastHost>
        <Router>
          <main class="app">
            <Routes>
              <Route path="/" view=|| view! { <Redirect path="/login"/> }/>
              <Route path="/login" view=Login/>
              <Route path="/home" view=Home/>
              <Route path="/dashboard" view=Dashboard/>
              <Route path="/map" view=MapView/>
              <Route path="/report" view=Report/>
              <Route path="/ai-assistant" view=AiAssistant/>
              <Route path="/communications" view=Communications/>
              <Route path="/incidents" view=Incidents/>
              <Route path="/incident/:id" view=IncidentDetail/>
              <Route path="/*any" view=NotFound/>
            </Routes>
          </main>
        </Router>
      </ToastHost>
    }
}
