//! Site navigation component

use leptos::*;

const ANCHORS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#services", "Services"),
    ("#industries", "Industries"),
    ("#contact", "Contact"),
];

#[component]
pub fn SiteNav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <nav class="sticky top-0 z-50 border-b border-slate-800 bg-slate-950/90 backdrop-blur">
            <div class="container mx-auto px-4">
                <div class="flex h-16 justify-between">
                    // Logo
                    <div class="flex items-center">
                        <a href="#home" class="flex items-center">
                            <span class="mr-2 text-2xl">"📡"</span>
                            <span class="text-xl font-bold bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                                "ESP-NOW Solutions"
                            </span>
                        </a>
                    </div>

                    // Desktop nav
                    <div class="hidden items-center space-x-8 md:flex">
                        {ANCHORS.iter().map(|(href, label)| view! {
                            <a href=*href class="text-slate-400 transition hover:text-slate-100">
                                {*label}
                            </a>
                        }).collect_view()}
                        <a
                            href="#contact"
                            class="ml-4 rounded-lg bg-gradient-to-r from-cyan-500 to-emerald-500 px-4 py-2 font-medium text-slate-950 transition hover:opacity-90"
                        >
                            "Start Your Project"
                        </a>
                    </div>

                    // Mobile menu button
                    <div class="flex items-center md:hidden">
                        <button
                            class="rounded-md p-2 text-slate-400 hover:bg-slate-800 hover:text-slate-100"
                            on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu; anchors close it so the jump target is visible
            <Show when=move || mobile_open.get()>
                <div class="border-t border-slate-800 md:hidden">
                    <div class="space-y-3 px-4 py-4">
                        {ANCHORS.iter().map(|(href, label)| view! {
                            <a
                                href=*href
                                class="block text-slate-400 hover:text-slate-100"
                                on:click=move |_| set_mobile_open.set(false)
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
