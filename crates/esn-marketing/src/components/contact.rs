//! Contact section: the project inquiry form.
//!
//! Every keystroke runs through the sanitizer before it is stored, and
//! editing a field clears its validation error until the next submit
//! attempt. Submission goes through [`SubmitGate`]; the accepted record
//! waits on a cancellable timer standing in for the real transport, so
//! a new attempt always supersedes an in-flight send.

use super::toast::Toasts;
use esn_form::{
    sanitize, Field, FormError, FormState, Notification, SubmitGate, ValidationErrors, INDUSTRIES,
    PROJECT_TYPES, SEND_LATENCY,
};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

const INPUT_CLASS: &str = "w-full rounded-lg border border-slate-700 bg-slate-950 px-4 py-3 text-slate-100 placeholder:text-slate-500 focus:border-cyan-500 focus:outline-none focus:ring-2 focus:ring-cyan-500/40";

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = create_rw_signal(FormState::default());
    let errors = create_rw_signal(ValidationErrors::new());
    let sending = create_rw_signal(false);
    let gate = store_value(SubmitGate::new());
    let pending_send: StoredValue<Option<TimeoutHandle>> = store_value(None);
    let toasts = expect_context::<Toasts>();

    let handle_change = move |field: Field, raw: String| {
        let value = sanitize(&raw);
        form.update(|form| form.set(field, value));
        errors.update(|errors| {
            errors.remove(&field);
        });
    };

    let field_error = move |field: Field| errors.with(|errors| errors.get(&field).cloned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // a new attempt supersedes any in-flight simulated send
        pending_send.update_value(|pending| {
            if let Some(handle) = pending.take() {
                handle.clear();
            }
        });

        let now_ms = js_sys::Date::now();
        let attempt = gate
            .try_update_value(|gate| gate.begin(&form.get_untracked(), now_ms))
            .unwrap_or(Err(FormError::SubmissionFailed));

        match attempt {
            Ok(accepted) => {
                errors.set(ValidationErrors::new());
                sending.set(true);
                let ticket = accepted.ticket;
                tracing::info!(ticket, "inquiry accepted, simulating send");

                let scheduled = set_timeout_with_handle(
                    move || {
                        let done = gate
                            .try_update_value(|gate| gate.complete(ticket))
                            .unwrap_or(false);
                        if done {
                            sending.set(false);
                            form.set(FormState::default());
                            toasts.push(Notification::sent());
                        }
                    },
                    SEND_LATENCY,
                );
                match scheduled {
                    Ok(handle) => pending_send.set_value(Some(handle)),
                    Err(_) => {
                        gate.update_value(|gate| {
                            gate.fail(ticket);
                        });
                        sending.set(false);
                        if let Some(toast) = FormError::SubmissionFailed.notification() {
                            toasts.push(toast);
                        }
                    }
                }
            }
            Err(error) => {
                sending.set(false);
                if let FormError::ValidationFailed(field_errors) = error {
                    errors.set(field_errors);
                } else if let Some(toast) = error.notification() {
                    toasts.push(toast);
                }
            }
        }
    };

    view! {
        <section class="bg-slate-900/40 py-20">
            <div class="container mx-auto px-4">
                <div class="mb-16 text-center">
                    <h2 class="mb-6 text-3xl font-bold md:text-5xl">
                        <span class="bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                            "Start Your Project"
                        </span>
                    </h2>
                    <p class="mx-auto max-w-3xl text-xl text-slate-400">
                        "Ready to transform your operations with ESP-NOW mesh networking? "
                        "Let's discuss your requirements and create a custom solution."
                    </p>
                </div>

                <div class="grid grid-cols-1 gap-12 lg:grid-cols-2">
                    // Contact information
                    <div class="space-y-8">
                        <div class="rounded-xl border border-slate-800 bg-slate-900/80 p-6">
                            <h3 class="mb-6 text-2xl font-semibold">"Get in Touch"</h3>
                            <div class="space-y-6">
                                <InfoRow icon="📧" label="Email" value="contact@espnow-solutions.com"/>
                                <InfoRow icon="📞" label="Phone" value="+1 (555) 123-4567"/>
                                <InfoRow icon="📍" label="Location" value="Remote & On-site Services"/>
                                <InfoRow icon="🕐" label="Response Time" value="Within 24 hours"/>
                            </div>
                        </div>

                        <div class="rounded-xl border border-slate-800 bg-slate-900/80 p-6">
                            <h3 class="mb-6 text-2xl font-semibold">"Why Choose ESP-NOW?"</h3>
                            <ul class="space-y-3 text-sm text-slate-300">
                                {[
                                    "Direct device-to-device communication without Wi-Fi infrastructure",
                                    "Ultra-low power consumption ideal for battery-operated devices",
                                    "Self-healing mesh networks with automatic node discovery",
                                    "Secure encrypted communication with customizable protocols",
                                ].into_iter().map(|reason| view! {
                                    <li class="flex items-start gap-2">
                                        <span class="mt-2 h-2 w-2 flex-shrink-0 rounded-full bg-cyan-400"></span>
                                        {reason}
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    </div>

                    // Inquiry form
                    <div class="rounded-xl border border-slate-800 bg-slate-900/80 p-8">
                        <h3 class="mb-6 text-2xl font-semibold">"Project Details"</h3>
                        <form on:submit=on_submit class="space-y-6">
                            <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                                <div>
                                    <label class="mb-2 block text-sm font-medium">"Name *"</label>
                                    <input
                                        type="text"
                                        name="name"
                                        maxlength="50"
                                        required
                                        placeholder="Jane Doe"
                                        class=INPUT_CLASS
                                        on:input=move |ev| handle_change(Field::Name, event_target_value(&ev))
                                        prop:value=move || form.with(|form| form.name.clone())
                                    />
                                    <p class="mt-1 text-sm text-red-400">{move || field_error(Field::Name)}</p>
                                </div>
                                <div>
                                    <label class="mb-2 block text-sm font-medium">"Email *"</label>
                                    <input
                                        type="email"
                                        name="email"
                                        maxlength="100"
                                        required
                                        placeholder="jane@company.com"
                                        class=INPUT_CLASS
                                        on:input=move |ev| handle_change(Field::Email, event_target_value(&ev))
                                        prop:value=move || form.with(|form| form.email.clone())
                                    />
                                    <p class="mt-1 text-sm text-red-400">{move || field_error(Field::Email)}</p>
                                </div>
                            </div>

                            <div>
                                <label class="mb-2 block text-sm font-medium">"Company"</label>
                                <input
                                    type="text"
                                    name="company"
                                    maxlength="100"
                                    placeholder="Your Company Name"
                                    class=INPUT_CLASS
                                    on:input=move |ev| handle_change(Field::Company, event_target_value(&ev))
                                    prop:value=move || form.with(|form| form.company.clone())
                                />
                                <p class="mt-1 text-sm text-red-400">{move || field_error(Field::Company)}</p>
                            </div>

                            <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                                <div>
                                    <label class="mb-2 block text-sm font-medium">"Project Type"</label>
                                    <select
                                        name="project"
                                        class=INPUT_CLASS
                                        on:change=move |ev| handle_change(Field::Project, event_target_value(&ev))
                                        prop:value=move || form.with(|form| form.project.clone())
                                    >
                                        <option value="">"Select project type"</option>
                                        {PROJECT_TYPES.iter().map(|option| view! {
                                            <option value=*option>{*option}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                                <div>
                                    <label class="mb-2 block text-sm font-medium">"Industry"</label>
                                    <select
                                        name="industry"
                                        class=INPUT_CLASS
                                        on:change=move |ev| handle_change(Field::Industry, event_target_value(&ev))
                                        prop:value=move || form.with(|form| form.industry.clone())
                                    >
                                        <option value="">"Select industry"</option>
                                        {INDUSTRIES.iter().map(|option| view! {
                                            <option value=*option>{*option}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                            </div>

                            <div>
                                <label class="mb-2 block text-sm font-medium">"Project Description *"</label>
                                <textarea
                                    name="message"
                                    rows="5"
                                    maxlength="2000"
                                    required
                                    placeholder="Tell us about your project requirements, number of devices, coverage area, specific challenges, and timeline..."
                                    class=INPUT_CLASS
                                    on:input=move |ev| handle_change(Field::Message, event_target_value(&ev))
                                    prop:value=move || form.with(|form| form.message.clone())
                                ></textarea>
                                <div class="mt-1 flex items-start justify-between gap-4 text-sm">
                                    <p class="text-red-400">{move || field_error(Field::Message)}</p>
                                    <p class="whitespace-nowrap text-slate-500">
                                        {move || format!("{} / 2000", form.with(|form| form.message.chars().count()))}
                                    </p>
                                </div>
                            </div>

                            <button
                                type="submit"
                                class="w-full rounded-lg bg-gradient-to-r from-cyan-500 to-emerald-500 px-8 py-4 font-semibold text-slate-950 transition hover:opacity-90 disabled:cursor-not-allowed disabled:opacity-60"
                                disabled=move || sending.get()
                            >
                                {move || if sending.get() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoRow(icon: &'static str, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <div class="flex h-10 w-10 flex-shrink-0 items-center justify-center rounded-full bg-cyan-500/10 text-xl">
                {icon}
            </div>
            <div>
                <div class="font-semibold">{label}</div>
                <div class="text-slate-400">{value}</div>
            </div>
        </div>
    }
}
