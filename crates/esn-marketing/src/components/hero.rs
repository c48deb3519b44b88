//! Hero section

use super::cards::FeatureBadge;
use leptos::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden bg-gradient-to-br from-slate-950 via-slate-900 to-cyan-950">
            <div class="container mx-auto flex min-h-screen flex-col justify-center px-4 py-24">
                <div class="max-w-3xl">
                    <h1 class="mb-6 text-5xl font-bold leading-tight md:text-7xl">
                        <span class="bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                            "ESP-NOW"
                        </span>
                        <br/>
                        "IoT Solutions"
                    </h1>
                    <p class="mb-8 max-w-2xl text-xl text-slate-300 md:text-2xl">
                        "Custom mesh networking solutions for industrial monitoring, smart "
                        "agriculture, and IoT systems. Connecting your devices across long "
                        "distances with reliable, low-power communication."
                    </p>
                    <div class="mb-12 flex flex-col gap-4 sm:flex-row">
                        <a
                            href="#contact"
                            class="rounded-lg bg-gradient-to-r from-cyan-500 to-emerald-500 px-8 py-4 text-center font-semibold text-slate-950 transition hover:opacity-90"
                        >
                            "Start Your Project"
                        </a>
                        <a
                            href="#services"
                            class="rounded-lg border border-cyan-500/40 px-8 py-4 text-center font-semibold transition hover:border-cyan-400"
                        >
                            "Learn More"
                        </a>
                    </div>
                    <div class="grid max-w-3xl grid-cols-1 gap-6 md:grid-cols-3">
                        <FeatureBadge icon="🌐" title="Mesh Networks" subtitle="Self-healing topology"/>
                        <FeatureBadge icon="⚡" title="Low Power" subtitle="Battery efficient"/>
                        <FeatureBadge icon="🔒" title="Secure" subtitle="Encrypted communication"/>
                    </div>
                </div>
            </div>
        </section>
    }
}
