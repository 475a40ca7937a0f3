//! Public site footer: brand, contact details, and quick links.

use leptos::prelude::*;

use crate::nav::{HOME_PATH, LOGIN_PATH, REGISTER_PATH};

pub const CONTACT_EMAIL: &str = "info@home254.com";
pub const CONTACT_PHONE: &str = "+254 700 000 000";
pub const CONTACT_CITY: &str = "Nairobi, Kenya";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <a class="footer__logo" href=HOME_PATH>"Home254"</a>
                    <p>"Kenya's trusted home marketplace, connecting buyers, sellers and renters nationwide."</p>
                </div>
                <div class="footer__column">
                    <h4>"Contact Us"</h4>
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    <p>{CONTACT_PHONE}</p>
                    <p>{CONTACT_CITY}</p>
                </div>
                <div class="footer__column">
                    <h4>"Explore"</h4>
                    <a href=HOME_PATH>"Browse listings"</a>
                    <a href=LOGIN_PATH>"Login"</a>
                    <a href=REGISTER_PATH>"Create an account"</a>
                </div>
            </div>
            <p class="footer__legal">"© 2025 Home254.com. All rights reserved."</p>
        </footer>
    }
}
