//! Industries showcase section

use super::cards::{IndustryCard, StatCard};
use leptos::*;

#[component]
pub fn IndustriesSection() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="container mx-auto px-4">
                <div class="mb-16 text-center">
                    <h2 class="mb-6 text-3xl font-bold md:text-5xl">
                        <span class="bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                            "Industry Applications"
                        </span>
                    </h2>
                    <p class="mx-auto max-w-3xl text-xl text-slate-400">
                        "ESP-NOW mesh networks are transforming industries across the "
                        "globe. Discover how our solutions can revolutionize your sector."
                    </p>
                </div>

                <div class="grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-3">
                    <IndustryCard
                        icon="🏭"
                        title="Industrial Monitoring"
                        description="Real-time machine health tracking, predictive maintenance, and environmental monitoring in manufacturing facilities."
                        applications=vec![
                            "Machine health sensors",
                            "Temperature monitoring",
                            "Vibration analysis",
                            "Predictive maintenance",
                        ]
                        accent="bg-blue-500/20 text-blue-400"
                    />
                    <IndustryCard
                        icon="🌱"
                        title="Smart Agriculture"
                        description="Precision farming solutions with soil monitoring, irrigation control, and livestock tracking across large agricultural areas."
                        applications=vec![
                            "Soil moisture sensors",
                            "Irrigation automation",
                            "Livestock tracking",
                            "Weather monitoring",
                        ]
                        accent="bg-green-500/20 text-green-400"
                    />
                    <IndustryCard
                        icon="🏢"
                        title="Smart Buildings"
                        description="Building automation systems for lighting, HVAC, security, and energy management without centralized infrastructure."
                        applications=vec![
                            "Lighting control",
                            "HVAC automation",
                            "Security systems",
                            "Energy management",
                        ]
                        accent="bg-purple-500/20 text-purple-400"
                    />
                    <IndustryCard
                        icon="🌡️"
                        title="Environmental Monitoring"
                        description="Remote sensing networks for weather stations, pollution monitoring, and environmental research in challenging locations."
                        applications=vec![
                            "Weather stations",
                            "Air quality monitoring",
                            "Water quality sensors",
                            "Wildlife tracking",
                        ]
                        accent="bg-teal-500/20 text-teal-400"
                    />
                    <IndustryCard
                        icon="❤️"
                        title="Healthcare & Wellness"
                        description="Patient monitoring systems, wearable devices, and healthcare facility networks for improved care delivery."
                        applications=vec![
                            "Vital signs monitoring",
                            "Fall detection",
                            "Medication reminders",
                            "Emergency alerts",
                        ]
                        accent="bg-red-500/20 text-red-400"
                    />
                    <IndustryCard
                        icon="📦"
                        title="Asset Tracking"
                        description="Inventory management, logistics tracking, and asset monitoring solutions for warehouses and supply chains."
                        applications=vec![
                            "Inventory tracking",
                            "Fleet management",
                            "Supply chain visibility",
                            "Warehouse automation",
                        ]
                        accent="bg-orange-500/20 text-orange-400"
                    />
                </div>

                <div class="mt-20 grid grid-cols-1 gap-8 md:grid-cols-4">
                    <StatCard value="250+" label="Bytes per message"/>
                    <StatCard value="1km+" label="Communication range"/>
                    <StatCard value="20" label="Devices per network"/>
                    <StatCard value="5µA" label="Deep sleep current"/>
                </div>
            </div>
        </section>
    }
}
