//! Site footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-800 bg-slate-900/40 py-12">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 gap-8 md:grid-cols-4">
                    <div class="md:col-span-2">
                        <div class="mb-4 flex items-center gap-2">
                            <span class="text-2xl">"📡"</span>
                            <span class="text-xl font-bold bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                                "ESP-NOW Solutions"
                            </span>
                        </div>
                        <p class="mb-4 max-w-md text-slate-400">
                            "Transforming industries with custom ESP-NOW mesh networking "
                            "solutions. Connecting devices across long distances with "
                            "reliable, low-power communication."
                        </p>
                        <div class="text-sm text-slate-500">
                            "© 2025 ESP-NOW Solutions. All rights reserved."
                        </div>
                    </div>

                    <div>
                        <h4 class="mb-4 font-semibold">"Services"</h4>
                        <ul class="space-y-2 text-sm text-slate-400">
                            <li>"Mesh Development"</li>
                            <li>"System Integration"</li>
                            <li>"Firmware Development"</li>
                            <li>"Consulting"</li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="mb-4 font-semibold">"Industries"</h4>
                        <ul class="space-y-2 text-sm text-slate-400">
                            <li>"Industrial"</li>
                            <li>"Agriculture"</li>
                            <li>"Smart Buildings"</li>
                            <li>"Healthcare"</li>
                        </ul>
                    </div>
                </div>
            </div>
        </footer>
    }
}
