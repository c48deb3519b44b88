//! Services showcase section

use super::cards::ServiceCard;
use leptos::*;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section class="bg-slate-900/40 py-20">
            <div class="container mx-auto px-4">
                <div class="mb-16 text-center">
                    <h2 class="mb-6 text-3xl font-bold md:text-5xl">
                        <span class="bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                            "Specialized Services"
                        </span>
                    </h2>
                    <p class="mx-auto max-w-3xl text-xl text-slate-400">
                        "Comprehensive ESP-NOW and IoT solutions tailored to your specific "
                        "needs. From concept to deployment, we deliver robust mesh "
                        "networking systems."
                    </p>
                </div>

                <div class="grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-3">
                    <ServiceCard
                        icon="📡"
                        title="ESP-NOW Mesh Development"
                        description="Custom mesh networking solutions with ESP32 devices for reliable, long-distance communication without traditional Wi-Fi infrastructure."
                        features=vec![
                            "Multi-node topology",
                            "Auto-healing networks",
                            "250-byte message capacity",
                            "Low-latency communication",
                        ]
                    />
                    <ServiceCard
                        icon="🔌"
                        title="IoT System Integration"
                        description="Complete IoT ecosystem development integrating ESP-NOW with sensors, actuators, and cloud platforms for comprehensive monitoring solutions."
                        features=vec![
                            "Sensor integration",
                            "Cloud connectivity",
                            "Real-time dashboards",
                            "Data analytics",
                        ]
                    />
                    <ServiceCard
                        icon="💻"
                        title="Firmware Development"
                        description="Custom firmware solutions using ESP-IDF and Arduino frameworks, optimized for your specific use case and hardware requirements."
                        features=vec![
                            "ESP-IDF expertise",
                            "Arduino compatibility",
                            "OTA updates",
                            "Power optimization",
                        ]
                    />
                    <ServiceCard
                        icon="⚙️"
                        title="System Configuration"
                        description="Professional setup and configuration of ESP-NOW networks, including device pairing, security implementation, and performance optimization."
                        features=vec![
                            "Network setup",
                            "Security protocols",
                            "Performance tuning",
                            "Troubleshooting",
                        ]
                    />
                    <ServiceCard
                        icon="🔧"
                        title="Maintenance & Support"
                        description="Ongoing technical support, system monitoring, and maintenance services to ensure your IoT network operates at peak performance."
                        features=vec![
                            "24/7 monitoring",
                            "Remote diagnostics",
                            "Performance reports",
                            "Emergency support",
                        ]
                    />
                    <ServiceCard
                        icon="🌍"
                        title="Consulting & Strategy"
                        description="Expert consultation on IoT architecture, technology selection, and strategic planning for your digital transformation initiatives."
                        features=vec![
                            "Architecture design",
                            "Technology assessment",
                            "Cost optimization",
                            "Future planning",
                        ]
                    />
                </div>
            </div>
        </section>
    }
}
