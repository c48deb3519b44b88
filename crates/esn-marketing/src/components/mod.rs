//! Marketing site components

mod cards;
mod contact;
mod footer;
mod hero;
mod industries;
mod nav;
mod services;
mod toast;

pub use cards::*;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use industries::IndustriesSection;
pub use nav::SiteNav;
pub use services::ServicesSection;
pub use toast::{ToastHost, Toasts};
