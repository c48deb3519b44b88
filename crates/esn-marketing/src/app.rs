//! Main application component

use crate::components::*;
use crate::pages::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Toasts::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/esn-marketing.css"/>
        <Title text="ESP-NOW Solutions - Custom Mesh Networking"/>
        <Meta
            name="description"
            content="Custom ESP-NOW mesh networking solutions for industrial monitoring, smart agriculture, and IoT systems."
        />
        <Router>
            <div class="min-h-screen bg-slate-950 text-slate-100">
                <SiteNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
                <ToastHost/>
            </div>
        </Router>
    }
}
