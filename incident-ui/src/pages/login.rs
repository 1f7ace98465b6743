use crate::bridge;
use crate::storage;
use crate::toast::use_toaster;
use incident_api::validate;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Login,
    Register,
}

#[component]
pub fn Login() -> impl IntoView {
    let toaster = use_toaster();
    let navigate = use_navigate();

    let tab = create_rw_signal(Tab::Login);
    let busy = create_rw_signal(false);

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    let reg_username = create_rw_signal(String::new());
    let reg_email = create_rw_signal(String::new());
    let reg_password = create_rw_signal(String::new());
    let reg_confirm = create_rw_signal(String::new());

    let on_login = {
        let navigate = navigate.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let req = match validate::login(&email.get_untracked(), &password.get_untracked()) {
                Ok(req) => req,
                Err(e) => {
                    toaster.error(e.title(), &e.to_string());
                    return;
                }
            };
            let navigate = navigate.clone();
            busy.set(true);
            spawn_local(async move {
                match bridge::login(&req).await {
                    Ok(session) => {
                        storage::save_session(&session);
                        toaster.show("Login Successful", "Welcome back to RakshaSetu");
                        navigate("/home", Default::default());
                    }
                    Err(e @ incident_api::ApiError::Status { .. }) => toaster.api_error(
                        &e,
                        "Login Failed",
                        "Invalid credentials. Please register first.",
                    ),
                    Err(e) => {
                        toaster.api_error(&e, "Network Error", "Unable to login. Please try again.")
                    }
                }
                busy.set(false);
            });
        }
    };

    let on_register = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let req = match validate::register(
            &reg_username.get_untracked(),
            &reg_email.get_untracked(),
            &reg_password.get_untracked(),
            &reg_confirm.get_untracked(),
        ) {
            Ok(req) => req,
            Err(e) => {
                toaster.error(e.title(), &e.to_string());
                return;
            }
        };
        let navigate = navigate.clone();
        busy.set(true);
        spawn_local(async move {
            match bridge::register(&req).await {
                Ok(session) => {
                    storage::save_session(&session);
                    toaster.show("Registration Successful", "Your account has been created");
                    navigate("/home", Default::default());
                }
                Err(e @ incident_api::ApiError::Status { .. }) => toaster.api_error(
                    &e,
                    "Registration Failed",
                    "Could not register. Please try again.",
                ),
                Err(e) => toaster.api_error(
                    &e,
                    "Network Error",
                    "Unable to register. Please try again.",
                ),
            }
            busy.set(false);
        });
    };

    let tab_class = move |t: Tab| if tab.get() == t { "tab active" } else { "tab" };

    view! {
      <div class="login-screen">
        <div class="card login-card">
          <div class="center">
            <div class="logo">"🛡"</div>
            <h1>"Raksha Setu"</h1>
            <p class="meta">"Emergency Response & Rescue Management"</p>
            <p class="meta">"Bridge between Government and People"</p>
          </div>

          <div class="tabs">
            <button class=move || tab_class(Tab::Login) on:click=move |_| tab.set(Tab::Login)>"Login"</button>
            <button class=move || tab_class(Tab::Register) on:click=move |_| tab.set(Tab::Register)>"Register"</button>
          </div>

          <Show when=move || tab.get() == Tab::Login fallback=|| ()>
            <form class="stack" on:submit=on_login.clone()>
              <label>"Email"</label>
              <input
                type="email"
                placeholder="you@example.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
              />
              <label>"Password"</label>
              <input
                type="password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
              />
              <button type="submit" class="primary" disabled=move || busy.get()>"Sign In"</button>
            </form>
          </Show>

          <Show when=move || tab.get() == Tab::Register fallback=|| ()>
            <form class="stack" on:submit=on_register.clone()>
              <label>"Username"</label>
              <input
                prop:value=move || reg_username.get()
                on:input=move |ev| reg_username.set(event_target_value(&ev))
              />
              <label>"Email"</label>
              <input
                type="email"
                prop:value=move || reg_email.get()
                on:input=move |ev| reg_email.set(event_target_value(&ev))
              />
              <label>"Password"</label>
              <input
                type="password"
                prop:value=move || reg_password.get()
                on:input=move |ev| reg_password.set(event_target_value(&ev))
              />
              <label>"Confirm Password"</label>
              <input
                type="password"
                prop:value=move || reg_confirm.get()
                on:input=move |ev| reg_confirm.set(event_target_value(&ev))
              />
              <button type="submit" class="primary" disabled=move || busy.get()>"Create Account"</button>
            </form>
          </Show>
        </div>
      </div>
    }
}
