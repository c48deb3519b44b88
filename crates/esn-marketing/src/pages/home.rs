//! The single marketing page.
//!
//! Sections are wrapped in anchor targets so the nav can jump between
//! them without any routing.

use crate::components::*;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <div id="home">
                <HeroSection/>
            </div>
            <div id="services">
                <ServicesSection/>
            </div>
            <div id="industries">
                <IndustriesSection/>
            </div>
            <div id="contact">
                <ContactSection/>
            </div>
        </div>
    }
}
