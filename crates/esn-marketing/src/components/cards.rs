//! Card components for the marketing sections

use leptos::*;

#[component]
pub fn ServiceCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: Vec<&'static str>,
) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-slate-800 bg-slate-900/80 p-6 transition hover:border-cyan-500/50">
            <div class="mb-4 flex items-center gap-4">
                <div class="flex h-12 w-12 flex-shrink-0 items-center justify-center rounded-full bg-cyan-500/10 text-2xl">
                    {icon}
                </div>
                <h3 class="text-xl font-semibold">{title}</h3>
            </div>
            <p class="mb-4 text-slate-400">{description}</p>
            <ul class="space-y-2 text-sm text-slate-400">
                {features.into_iter().map(|feature| view! {
                    <li class="flex items-center gap-2">
                        <span class="h-2 w-2 flex-shrink-0 rounded-full bg-cyan-400"></span>
                        {feature}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn IndustryCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    applications: Vec<&'static str>,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-slate-800 bg-slate-900/80 p-6 transition hover:border-cyan-500/50">
            <div class="mb-4 flex items-center gap-4">
                <div class=format!(
                    "flex h-12 w-12 flex-shrink-0 items-center justify-center rounded-full text-2xl {accent}"
                )>
                    {icon}
                </div>
                <h3 class="text-xl font-semibold">{title}</h3>
            </div>
            <p class="mb-4 text-slate-400">{description}</p>
            <h4 class="mb-3 text-sm font-semibold uppercase tracking-wider text-slate-500">
                "Key Applications"
            </h4>
            <ul class="space-y-2 text-sm text-slate-300">
                {applications.into_iter().map(|application| view! {
                    <li class="flex items-center gap-2">
                        <span class="h-2 w-2 flex-shrink-0 rounded-full bg-emerald-400"></span>
                        {application}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn StatCard(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="mb-2 text-4xl font-bold text-cyan-400">{value}</div>
            <div class="text-slate-400">{label}</div>
        </div>
    }
}

#[component]
pub fn FeatureBadge(
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 rounded-lg border border-slate-800 bg-slate-900/60 p-4">
            <div class="flex h-10 w-10 flex-shrink-0 items-center justify-center rounded-full bg-cyan-500/10 text-xl">
                {icon}
            </div>
            <div>
                <h3 class="font-semibold">{title}</h3>
                <p class="text-sm text-slate-400">{subtitle}</p>
            </div>
        </div>
    }
}
