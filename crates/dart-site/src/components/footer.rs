//! Site footer with contact and social links.

use dart_core::Mailto;
use dioxus::prelude::*;

use super::use_site_config;

#[component]
pub fn Footer() -> Element {
    let config = use_site_config();
    let assets = config.assets();
    let contact = Mailto::new(&config.contact_email).to_href();
    let email_icon = assets.resolve("icons/email.svg");
    let email = config.contact_email.clone();
    let socials: Vec<_> = config
        .socials
        .iter()
        .map(|s| (s.clone(), assets.resolve(&s.icon)))
        .collect();

    rsx! {
        footer {
            id: "footer",
            div {
                class: "footer-wrapper",
                div {
                    class: "footer-section",
                    h3 { "Contact Us" }
                    div {
                        class: "footer-links",
                        a {
                            href: "{contact}",
                            class: "footer-button",
                            img { src: "{email_icon}", alt: "Email" }
                            span { "{email}" }
                        }
                    }
                }
                div {
                    class: "footer-section",
                    h3 { "Social" }
                    div {
                        class: "footer-links",
                        for (social, icon) in socials {
                            a {
                                key: "{social.label}",
                                href: "{social.href}",
                                target: "_blank",
                                rel: "noreferrer",
                                class: "footer-button",
                                img { src: "{icon}", alt: "{social.label}" }
                                span { "{social.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
