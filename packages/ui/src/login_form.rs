//! Email/password login form bound to the `login` state machine.
//!
//! The component keeps a `login::LoginForm` in a signal and routes every
//! keystroke and submit through its `update` reducer. Commands coming back
//! are executed here: sign-in calls are spawned on the component's scope (so
//! they are dropped together with the component), navigation goes through
//! [`RouterNavigator`].

use dioxus::prelude::*;
use login::{
    attempt_sign_in, messages, perform, BannerKind, Command, FormInput, LoginConfig, LoginQuery, LoginView,
    SignInOutcome,
};

use crate::auth::{use_auth, AuthHandle};
use crate::navigator::RouterNavigator;

const INPUT_CLASS: &str = "relative block w-full rounded-md border-0 py-3 px-3 text-gray-900 ring-1 ring-inset placeholder:text-gray-400 focus:z-10 focus:ring-2 focus:ring-inset focus:ring-indigo-600 sm:text-sm";

fn input_class(invalid: bool) -> String {
    let ring = if invalid { "ring-red-600" } else { "ring-gray-300" };
    format!("{INPUT_CLASS} {ring}")
}

/// Login form component.
#[component]
pub fn LoginForm(query: LoginQuery, #[props(default)] config: LoginConfig) -> Element {
    let auth = use_auth();
    let navigator = RouterNavigator::new(use_navigator(), auth.clone());
    let mut form = use_signal(|| login::LoginForm::new(query.clone(), &config));

    // Follow the route's query when the page is revisited with new params
    use_effect(use_reactive!(|(query,)| {
        if form.peek().query() != &query {
            form.write().set_query(query);
        }
    }));

    let handle_submit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let commands = form.write().update(login::FormEvent::Submit);
            run_commands(commands, form, auth.clone(), navigator.clone());
        }
    };

    let LoginView {
        banner,
        email,
        password,
        credentials,
        submit,
    } = form.read().view();
    let FormInput {
        email: email_value,
        password: password_value,
    } = form.read().input().clone();
    let email_class = input_class(email.invalid);
    let password_class = input_class(password.invalid);
    let submit_label = submit.label;
    let submit_class = if submit.disabled {
        "flex w-full justify-center rounded-md bg-indigo-600 py-3 px-4 text-sm font-semibold text-white opacity-50 cursor-not-allowed"
    } else {
        "flex w-full justify-center rounded-md bg-indigo-600 py-3 px-4 text-sm font-semibold text-white hover:bg-indigo-500"
    };

    rsx! {
        div {
            class: "h-min mb-40",

            h2 {
                class: "mt-6 text-center text-3xl font-bold tracking-tight text-gray-900",
                {messages::TITLE}
            }

            if let Some(banner) = banner {
                Banner { kind: banner.kind, text: banner.text }
            }

            form {
                onsubmit: handle_submit,
                class: "mt-8 space-y-6",

                div {
                    class: "space-y-2 rounded-md shadow-sm",

                    div {
                        label { r#for: "email", class: "sr-only", "Email address" }
                        input {
                            id: "email",
                            name: "email",
                            r#type: "email",
                            autocomplete: "email",
                            required: true,
                            class: "{email_class}",
                            placeholder: "Email address",
                            value: "{email_value}",
                            oninput: move |evt: FormEvent| {
                                form.write().update(login::FormEvent::EmailChanged(evt.value()));
                            },
                        }
                    }

                    div {
                        label { r#for: "password", class: "sr-only", "Password" }
                        input {
                            id: "password",
                            name: "password",
                            r#type: "password",
                            autocomplete: "current-password",
                            required: true,
                            class: "{password_class}",
                            placeholder: "Password",
                            value: "{password_value}",
                            oninput: move |evt: FormEvent| {
                                form.write().update(login::FormEvent::PasswordChanged(evt.value()));
                            },
                        }

                        if let Some(message) = email.message {
                            p { class: "mt-1 text-sm text-red-600", "{message}" }
                        }
                        if let Some(message) = password.message {
                            p { class: "mt-1 text-sm text-red-600", "{message}" }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    class: "{submit_class}",
                    disabled: submit.disabled,
                    "{submit_label}"
                }

                if let Some(text) = credentials {
                    Banner { kind: BannerKind::Error, text: text }
                }
            }
        }
    }
}

/// Execute reducer commands. Sign-in calls report back into the form, which
/// may produce navigation commands in turn.
fn run_commands(
    commands: Vec<Command>,
    mut form: Signal<login::LoginForm>,
    auth: AuthHandle,
    navigator: RouterNavigator,
) {
    for command in commands {
        match command {
            Command::SignIn { attempt, request } => {
                let auth = auth.clone();
                let navigator = navigator.clone();
                spawn(async move {
                    let outcome = match auth.client() {
                        Some(client) => attempt_sign_in(client, request).await,
                        None => SignInOutcome::Failed("auth client unavailable".to_string()),
                    };
                    let follow_up = form.write().update(login::FormEvent::Completed { attempt, outcome });
                    run_commands(follow_up, form, auth, navigator);
                });
            }
            other => {
                perform(&navigator, &other);
            }
        }
    }
}

#[component]
fn Banner(kind: BannerKind, text: String) -> Element {
    let (frame, heading) = match kind {
        BannerKind::Notice => ("rounded-md bg-yellow-50 p-4 mt-4", "text-sm font-medium text-yellow-800"),
        BannerKind::Error => ("rounded-md bg-red-50 p-4 mt-4", "text-sm font-medium text-red-800"),
    };

    let role = match kind {
        BannerKind::Notice => "status",
        BannerKind::Error => "alert",
    };

    rsx! {
        div {
            class: "{frame}",
            role: "{role}",
            h3 { class: "{heading}", "{text}" }
        }
    }
}
